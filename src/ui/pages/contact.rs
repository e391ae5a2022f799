use leptos::prelude::*;

use crate::core::content::{CONTACT_METHODS, ContactMethod, TRUST_INDICATORS};
use crate::core::magnetic::CTA_STRENGTH;
use crate::core::reveal::{RevealDirection, stagger_delay};
use crate::core::routes::Route;
use crate::ui::contact_form::ContactForm;
use crate::ui::icon::Icon;
use crate::ui::interaction::MagneticButton;
use crate::ui::layout::ButtonVariant;
use crate::ui::motion::Reveal;
use crate::ui::pages::PageHead;
use crate::ui::pages::sections::{ClosingCta, PageHero};

#[component]
pub fn ContactPage() -> impl IntoView {
    let indicators = TRUST_INDICATORS
        .iter()
        .enumerate()
        .map(|(index, item)| {
            view! {
                <Reveal distance=20.0 delay=stagger_delay(index, 100, 0) class="text-center">
                    <div class="inline-flex items-center justify-center w-12 h-12 bg-arc-accent/10 rounded-full mb-4">
                        <Icon id=item.icon class="w-6 h-6 text-arc-accent" />
                    </div>
                    <h3 class="font-semibold text-foreground mb-1">{item.title}</h3>
                    <p class="text-sm text-muted-foreground">{item.description}</p>
                </Reveal>
            }
        })
        .collect_view();

    let methods = CONTACT_METHODS
        .iter()
        .map(|method| view! { <ContactMethodRow method=*method /> })
        .collect_view();

    view! {
        <PageHead route=Route::Contact />

        <PageHero
            eyebrow="Let's Connect"
            title="Let's Build"
            accent="Something Exceptional."
            subtitle="We respond to every inquiry within one business day. Let's discuss how Arc can transform your project management."
            stacked=true
        />

        <section class="py-16 lg:py-20 bg-white border-b border-arc-charcoal/5">
            <div class="max-w-7xl mx-auto px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 lg:gap-12">{indicators}</div>
            </div>
        </section>

        <section class="py-24 lg:py-32 bg-white">
            <div class="max-w-7xl mx-auto px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-16 lg:gap-24">
                    <Reveal>
                        <div class="lg:sticky lg:top-32">
                            <h2 class="text-3xl md:text-4xl font-bold text-foreground mb-4">
                                "Get in touch with our team."
                            </h2>
                            <p class="text-lg text-muted-foreground mb-12 leading-relaxed">
                                "Whether you're exploring the platform, have specific questions about features, or need pricing details, our construction-focused team is here to help."
                            </p>
                            <div class="space-y-6">{methods}</div>
                            <div class="mt-12 p-4 bg-arc-accent/5 border border-arc-accent/20 rounded-lg">
                                <p class="text-sm text-arc-accent font-medium">
                                    "\u{2713} All inquiries answered within one business day"
                                </p>
                            </div>
                        </div>
                    </Reveal>

                    <Reveal direction=RevealDirection::Right delay=200>
                        <ContactForm />
                    </Reveal>
                </div>
            </div>
        </section>

        <ClosingCta
            title="Ready to explore Arc?"
            body="From initial questions to scheduled demonstrations, we're here to help you understand how Arc transforms residential construction project management."
        >
            <MagneticButton href=Route::Product.path() variant=ButtonVariant::Outline strength=CTA_STRENGTH>
                "Explore Platform"
            </MagneticButton>
        </ClosingCta>
    }
}

#[component]
fn ContactMethodRow(method: ContactMethod) -> impl IntoView {
    let value = match method.href {
        Some(href) => view! {
            <a href=href class="text-lg font-semibold text-foreground hover:text-arc-accent transition-colors duration-300">
                {method.value}
            </a>
        }
        .into_any(),
        None => view! { <p class="text-lg font-semibold text-foreground">{method.value}</p> }.into_any(),
    };

    view! {
        <Reveal direction=RevealDirection::Left distance=20.0>
            <div class="flex items-start gap-4 group">
                <div class="w-12 h-12 bg-arc-primary/10 rounded-lg flex items-center justify-center flex-shrink-0 group-hover:bg-arc-accent/10 transition-colors duration-300">
                    <Icon id=method.icon class="w-5 h-5 text-arc-primary group-hover:text-arc-accent transition-colors duration-300" />
                </div>
                <div>
                    <p class="text-xs font-semibold text-arc-charcoal/60 uppercase tracking-wider mb-1">{method.label}</p>
                    {value}
                    {method.description.map(|text| view! { <p class="text-sm text-muted-foreground mt-1">{text}</p> })}
                </div>
            </div>
        </Reveal>
    }
}
