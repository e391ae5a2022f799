use leptos::prelude::*;

use crate::core::IconId;
use crate::core::content::{ABOUT_QUOTE, ABOUT_STATS, Feature, Milestone, TIMELINE, VALUES};
use crate::core::magnetic::CTA_STRENGTH;
use crate::core::reveal::{RevealDirection, stagger_delay};
use crate::core::routes::Route;
use crate::ui::icon::Icon;
use crate::ui::interaction::MagneticButton;
use crate::ui::layout::ButtonVariant;
use crate::ui::motion::{AnimatedCounter, Reveal};
use crate::ui::pages::PageHead;
use crate::ui::pages::sections::{ClosingCta, PageHero};

#[component]
pub fn AboutPage() -> impl IntoView {
    let milestones = TIMELINE
        .iter()
        .enumerate()
        .map(|(index, milestone)| {
            view! {
                <TimelineMilestone
                    milestone=*milestone
                    index=index
                    is_last=index + 1 == TIMELINE.len()
                />
            }
        })
        .collect_view();

    let stats = ABOUT_STATS
        .iter()
        .enumerate()
        .map(|(index, stat)| {
            view! {
                <Reveal delay=stagger_delay(index, 100, 0) class="text-center">
                    <p class="text-4xl md:text-5xl font-bold text-arc-accent mb-2">
                        <AnimatedCounter value=stat.value suffix=stat.suffix />
                    </p>
                    <p class="text-white/60 text-sm tracking-wide">{stat.label}</p>
                </Reveal>
            }
        })
        .collect_view();

    let values = VALUES
        .iter()
        .enumerate()
        .map(|(index, value)| view! { <ValueCard value=*value index=index /> })
        .collect_view();

    view! {
        <PageHead route=Route::About />

        <PageHero
            eyebrow="About Arc"
            title="Born from"
            accent="Experience."
            subtitle="Software built by people who understand construction, designed for the builders who shape Southwest Florida."
        />

        <section class="py-24 lg:py-32 bg-white">
            <div class="max-w-7xl mx-auto px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-16 lg:gap-24">
                    <div>
                        <Reveal>
                            <h2 class="text-3xl md:text-4xl font-bold text-foreground mb-6">"The Journey to Arc"</h2>
                            <p class="text-muted-foreground text-lg leading-relaxed mb-6">
                                "Arc was built by Agustin and Gabi Zenuto, a Naples-based team with deep roots in Southwest Florida's construction industry."
                            </p>
                            <p class="text-muted-foreground leading-relaxed">
                                "Their combined experience, from the trades to project management to marketing, revealed a truth the industry knew but no one addressed: existing tools weren't built for residential construction."
                            </p>
                        </Reveal>

                        <Reveal delay=200 class="mt-12">
                            <div class="relative group" data-cursor-expand="">
                                <div class="absolute inset-0 bg-gradient-to-br from-arc-accent/20 to-arc-primary/20 -rotate-2 transition-transform duration-500 group-hover:rotate-0"></div>
                                <div class="relative bg-gradient-to-br from-slate-50 to-slate-100 p-8">
                                    <div class="flex items-center gap-6">
                                        <div class="w-20 h-20 bg-arc-primary/10 flex items-center justify-center shrink-0">
                                            <Icon id=IconId::Users class="w-10 h-10 text-arc-primary" />
                                        </div>
                                        <div>
                                            <h3 class="text-xl font-bold text-foreground mb-1">"Agustin & Gabi Zenuto"</h3>
                                            <p class="text-muted-foreground flex items-center gap-2">
                                                <Icon id=IconId::MapPin class="w-4 h-4" />
                                                "Naples, Florida"
                                            </p>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        </Reveal>
                    </div>

                    <div class="lg:pt-4">{milestones}</div>
                </div>
            </div>
        </section>

        <section class="py-20 bg-arc-primary text-white overflow-hidden">
            <div class="max-w-7xl mx-auto px-6 lg:px-8">
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-8 lg:gap-12">{stats}</div>
            </div>
        </section>

        <section class="py-24 lg:py-32 bg-background-alt">
            <div class="max-w-7xl mx-auto px-6 lg:px-8">
                <Reveal class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-foreground mb-4">
                        "Principles that deliver results."
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "We build software the way you build homes: with intention, precision and an unwavering commitment to quality."
                    </p>
                </Reveal>
                <div class="grid md:grid-cols-2 gap-6 lg:gap-8">{values}</div>
            </div>
        </section>

        <section class="py-24 lg:py-32 bg-white">
            <div class="max-w-4xl mx-auto px-6 lg:px-8">
                <Reveal class="text-center">
                    <blockquote class="relative">
                        <span class="absolute -top-8 -left-4 text-8xl text-arc-accent/10 font-serif" aria-hidden="true">
                            "\u{201C}"
                        </span>
                        <p class="font-heading italic text-2xl md:text-3xl lg:text-4xl text-foreground leading-relaxed mb-8">
                            {ABOUT_QUOTE}
                        </p>
                        <span class="absolute -bottom-16 -right-4 text-8xl text-arc-accent/10 font-serif" aria-hidden="true">
                            "\u{201D}"
                        </span>
                    </blockquote>
                    <p class="text-muted-foreground mt-8">"This realization drove us to create something different."</p>
                </Reveal>
            </div>
        </section>

        <ClosingCta
            title="Ready to build on principle?"
            body="See how Arc can bring clarity and control to your residential construction projects."
        >
            <MagneticButton href=Route::Contact.path() show_arrow=true strength=CTA_STRENGTH>
                "Schedule a Demo"
            </MagneticButton>
            <MagneticButton href=Route::Product.path() variant=ButtonVariant::Outline strength=CTA_STRENGTH>
                "Explore Platform"
            </MagneticButton>
        </ClosingCta>
    }
}

#[component]
fn TimelineMilestone(milestone: Milestone, index: usize, is_last: bool) -> impl IntoView {
    view! {
        <Reveal
            direction=RevealDirection::Left
            distance=20.0
            delay=stagger_delay(index, 150, 0)
            class="relative pl-8 pb-12 last:pb-0"
        >
            {(!is_last).then(|| view! {
                <div class="absolute left-[11px] top-6 bottom-0 w-[2px] bg-gradient-to-b from-arc-accent to-arc-accent/20"></div>
            })}
            <div class="absolute left-0 top-1 w-6 h-6 bg-arc-primary border-2 border-arc-accent flex items-center justify-center">
                <div class="w-2 h-2 bg-arc-accent"></div>
            </div>
            <div class="pt-0.5">
                <span class="text-arc-accent font-semibold text-sm tracking-wider">{milestone.era}</span>
                <h4 class="text-xl font-bold text-foreground mt-1 mb-2">{milestone.title}</h4>
                <p class="text-muted-foreground leading-relaxed">{milestone.description}</p>
            </div>
        </Reveal>
    }
}

#[component]
fn ValueCard(value: Feature, index: usize) -> impl IntoView {
    view! {
        <Reveal delay=stagger_delay(index, 100, 0) class="h-full">
            <div
                class="group relative h-full bg-white p-8 shadow-sm transition-shadow duration-500 hover:shadow-2xl cursor-default"
                data-cursor-expand=""
            >
                <div class="absolute inset-x-0 top-0 h-1 bg-arc-accent origin-left scale-x-0 transition-transform duration-400 group-hover:scale-x-100"></div>
                <div class="w-14 h-14 bg-arc-primary/5 flex items-center justify-center mb-6 transition-all duration-300 group-hover:bg-arc-accent/10 group-hover:rotate-3">
                    <Icon id=value.icon class="w-7 h-7 text-arc-primary transition-colors duration-300 group-hover:text-arc-accent" />
                </div>
                <h3 class="text-xl font-bold text-foreground mb-3">{value.title}</h3>
                <p class="text-muted-foreground leading-relaxed">{value.description}</p>
            </div>
        </Reveal>
    }
}
