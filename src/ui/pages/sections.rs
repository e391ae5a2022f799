//! Blocks shared by the inner pages

use leptos::prelude::*;

use crate::ui::motion::Reveal;

/// Dark page header with an eyebrow, a two-tone headline and a subtitle
#[component]
pub fn PageHero(
    #[prop(optional)] eyebrow: Option<&'static str>,
    title: &'static str,
    accent: &'static str,
    subtitle: &'static str,
    /// Put the accent half of the headline on its own line
    #[prop(default = false)]
    stacked: bool,
) -> impl IntoView {
    view! {
        <section class="relative pt-32 pb-40 bg-arc-primary overflow-hidden">
            <div class="absolute inset-0" aria-hidden="true">
                <div class="absolute w-[600px] h-[600px] rounded-full opacity-20 page-orb-warm" style="left: 10%; top: -20%;"></div>
                <div class="absolute w-[400px] h-[400px] rounded-full opacity-15 page-orb-sand" style="right: 5%; bottom: -30%;"></div>
                <div class="absolute inset-0 hero-grid"></div>
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-6 lg:px-8">
                <div class="max-w-3xl hero-fade-up">
                    {eyebrow.map(|text| view! {
                        <p class="text-arc-accent text-sm font-semibold uppercase tracking-widest mb-4">{text}</p>
                    })}
                    <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold text-white mb-6 leading-[1.1]">
                        {title}
                        {if stacked { view! { <br /> }.into_any() } else { " ".into_any() }}
                        <span class="text-arc-accent">{accent}</span>
                    </h1>
                    <p class="text-lg md:text-xl text-white/70 leading-relaxed">{subtitle}</p>
                </div>
            </div>

            <div class="absolute bottom-0 left-0 right-0 h-24 bg-gradient-to-t from-white to-transparent"></div>
        </section>
    }
}

/// Closing call to action on the dark brand background; children are the buttons
#[component]
pub fn ClosingCta(
    title: &'static str,
    #[prop(optional)] body: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="py-24 lg:py-32 bg-arc-primary relative overflow-hidden">
            <div class="absolute inset-0 opacity-10 cta-glow" aria-hidden="true"></div>

            <div class="max-w-4xl mx-auto px-6 lg:px-8 relative z-10">
                <Reveal class="text-center">
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold text-white mb-6">{title}</h2>
                    {body.map(|text| view! { <p class="text-lg text-white/70 max-w-2xl mx-auto mb-10">{text}</p> })}
                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">{children()}</div>
                </Reveal>
            </div>
        </section>
    }
}
