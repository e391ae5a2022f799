//! Home page
//!
//! Parallax hero with the split headline and app preview, followed by the
//! product introduction, the feature bento grid and the origin teaser.

use leptos::prelude::*;

use crate::core::IconId;
use crate::core::content::{APP_HOST, BRAND, HOME_FEATURES, HOME_INTRO, HOME_PURPOSE, SCREENSHOT_PATH};
use crate::core::magnetic::CTA_STRENGTH;
use crate::core::reveal::RevealDirection;
use crate::core::routes::Route;
use crate::core::split_text::SplitAnimation;
use crate::ui::icon::Icon;
use crate::ui::interaction::MagneticButton;
use crate::ui::layout::{BentoGrid, ButtonVariant, LinkButton};
use crate::ui::motion::{HeroParallax, Reveal, SplitText};
use crate::ui::pages::PageHead;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageHead route=Route::Home />

        <HeroParallax>
            <div class="text-center mb-6">
                <h1 class="font-heading text-4xl sm:text-5xl md:text-6xl lg:text-7xl text-white">
                    <SplitText text="Build on" delay=0.2 stagger=0.04 animation=SplitAnimation::FadeUp />
                    " "
                    <span class="text-arc-accent">
                        <SplitText text="Principle." delay=0.6 stagger=0.04 animation=SplitAnimation::FadeUp />
                    </span>
                </h1>
            </div>

            <p class="hero-fade-up hero-delay-1000 text-lg md:text-xl lg:text-2xl text-white/70 max-w-2xl mx-auto text-center mb-4 leading-relaxed">
                "Project management software engineered for residential construction."
            </p>
            <p class="hero-fade-up hero-delay-1200 text-base md:text-lg text-white/50 max-w-xl mx-auto text-center mb-12 italic">
                "From lead to warranty, every phase organized under one system."
            </p>

            <div class="hero-fade-up hero-delay-1400 flex flex-col sm:flex-row gap-4 justify-center items-center">
                <MagneticButton href=Route::Contact.path() show_arrow=true strength=CTA_STRENGTH>
                    "Schedule a Demo"
                </MagneticButton>
                <MagneticButton href=Route::Product.path() variant=ButtonVariant::Outline strength=CTA_STRENGTH>
                    "Explore Platform"
                </MagneticButton>
            </div>

            <AppPreview />
        </HeroParallax>

        <section class="py-24 lg:py-32 bg-white">
            <div class="max-w-7xl mx-auto px-6 lg:px-8">
                <div class="max-w-4xl mx-auto">
                    <Reveal>
                        <h2 class="text-3xl md:text-4xl font-bold text-foreground mb-8 text-center">
                            "The core system for residential construction."
                        </h2>
                    </Reveal>
                    <Reveal delay=100 class="text-lg text-muted-foreground space-y-6 leading-relaxed">
                        {HOME_INTRO.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    </Reveal>
                    <Reveal delay=200 class="mt-10 text-center">
                        <LinkButton href=Route::Product.path() variant=ButtonVariant::Secondary show_arrow=true>
                            "Explore the Platform"
                        </LinkButton>
                    </Reveal>
                </div>
            </div>
        </section>

        <section class="py-24 lg:py-32 bg-background-alt">
            <div class="max-w-7xl mx-auto px-6 lg:px-8">
                <Reveal class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-foreground mb-4">
                        "Essential tools. Singular system."
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "Everything you need to manage residential construction projects, unified in one powerful platform."
                    </p>
                </Reveal>

                <BentoGrid items=HOME_FEATURES />

                <Reveal delay=400 class="mt-12 text-center">
                    <LinkButton href=Route::Product.path() show_arrow=true>
                        "See How It Works"
                    </LinkButton>
                </Reveal>
            </div>
        </section>

        <section class="py-24 lg:py-32 bg-white">
            <div class="max-w-7xl mx-auto px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-12 lg:gap-20 items-center">
                    <Reveal direction=RevealDirection::Left>
                        <h2 class="text-3xl md:text-4xl font-bold text-foreground mb-6">
                            "Built from experience, not assumption."
                        </h2>
                        <div class="space-y-4 text-muted-foreground">
                            {HOME_PURPOSE.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                        </div>
                        <div class="mt-8">
                            <LinkButton href=Route::About.path() variant=ButtonVariant::Outline show_arrow=true>
                                "Our Story"
                            </LinkButton>
                        </div>
                    </Reveal>

                    <Reveal direction=RevealDirection::Right delay=200>
                        <div class="relative">
                            <div class="absolute inset-0 bg-gradient-to-br from-arc-accent/10 to-arc-primary/10 rotate-2"></div>
                            <div class="relative bg-gradient-to-br from-slate-100 to-slate-200 aspect-[4/3] overflow-hidden flex items-center justify-center">
                                <div class="text-center p-8">
                                    <div class="w-24 h-24 mx-auto mb-4 bg-arc-primary/10 flex items-center justify-center">
                                        <Icon id=IconId::Home class="w-12 h-12 text-arc-primary" />
                                    </div>
                                    <p class="text-muted-foreground">"Southwest Florida Construction"</p>
                                </div>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// Browser-framed screenshot under the hero CTAs; the cursor ring grows over it
#[component]
fn AppPreview() -> impl IntoView {
    view! {
        <div class="hero-fade-up hero-delay-1600 mt-16 lg:mt-24 relative" data-cursor-expand="">
            <div class="relative mx-auto max-w-5xl">
                <div class="relative overflow-hidden app-mockup-shadow">
                    <div class="bg-[#1c1c1c] p-3 flex items-center gap-3 border-b border-white/5">
                        <div class="flex gap-2">
                            <div class="w-3 h-3 rounded-full bg-white/20"></div>
                            <div class="w-3 h-3 rounded-full bg-white/20"></div>
                            <div class="w-3 h-3 rounded-full bg-white/20"></div>
                        </div>
                        <div class="flex-1 mx-4">
                            <div class="bg-white/5 h-6 max-w-sm mx-auto flex items-center justify-center">
                                <span class="text-[11px] text-white/30 font-mono">{APP_HOST}</span>
                            </div>
                        </div>
                        <div class="w-16"></div>
                    </div>
                    <div class="bg-[#0f0f0f] aspect-[16/9] overflow-hidden">
                        <img
                            src=SCREENSHOT_PATH
                            alt=format!("{} platform screenshot", BRAND)
                            class="w-full h-full object-cover"
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
