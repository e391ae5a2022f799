//! Product page
//!
//! Workflow strip, the interactive module showcase (cards on the left,
//! details of the selected module on the right), platform stats and the
//! extra capabilities grid.

use leptos::prelude::*;

use crate::core::IconId;
use crate::core::content::{
    EXTRA_FEATURES, MODULES, Module, PRODUCT_STATS, WORKFLOW, WorkflowStep, module_at,
};
use crate::core::magnetic::CTA_STRENGTH;
use crate::core::reveal::{RevealDirection, stagger_delay};
use crate::core::routes::Route;
use crate::ui::icon::Icon;
use crate::ui::interaction::MagneticButton;
use crate::ui::layout::{ButtonSize, ButtonVariant};
use crate::ui::motion::{AnimatedCounter, Reveal};
use crate::ui::pages::PageHead;
use crate::ui::pages::sections::{ClosingCta, PageHero};

#[component]
pub fn ProductPage() -> impl IntoView {
    let selected = RwSignal::new(0_usize);

    let steps = WORKFLOW
        .iter()
        .enumerate()
        .map(|(index, step)| {
            view! { <WorkflowItem step=*step index=index is_last=index + 1 == WORKFLOW.len() /> }
        })
        .collect_view();

    let cards = MODULES
        .iter()
        .enumerate()
        .map(|(index, module)| view! { <ModuleCard module=*module index=index selected=selected /> })
        .collect_view();

    let stats = PRODUCT_STATS
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

    let extras = EXTRA_FEATURES
        .iter()
        .enumerate()
        .map(|(index, item)| {
            view! {
                <Reveal delay=stagger_delay(index, 100, 0) class="h-full">
                    <div
                        class="group bg-white p-8 border border-slate-200 transition-all duration-300 hover:border-arc-accent hover:shadow-lg h-full"
                        data-cursor-expand=""
                    >
                        <div class="w-14 h-14 bg-arc-primary/5 flex items-center justify-center mb-6 transition-colors group-hover:bg-arc-accent/10">
                            <Icon id=item.icon class="w-7 h-7 text-arc-primary transition-colors group-hover:text-arc-accent" />
                        </div>
                        <h3 class="text-xl font-semibold text-foreground mb-3">{item.title}</h3>
                        <p class="text-muted-foreground leading-relaxed">{item.description}</p>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <PageHead route=Route::Product />

        <PageHero
            title="Complete Control."
            accent="Total Clarity."
            subtitle="Residential construction operates across multiple domains simultaneously. Arc unifies them all into one powerful platform."
            stacked=true
        />

        <section class="py-24 lg:py-32 bg-white overflow-hidden">
            <div class="max-w-7xl mx-auto px-6 lg:px-8">
                <Reveal class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-foreground mb-4">"One system. Every phase."</h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "From first contact to ongoing maintenance, Arc guides your projects through every milestone with precision."
                    </p>
                </Reveal>
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-8 lg:gap-4">{steps}</div>
            </div>
        </section>

        <section id="features" class="py-24 lg:py-32 bg-background-alt">
            <div class="max-w-7xl mx-auto px-6 lg:px-8">
                <Reveal class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-foreground mb-4">"Core Modules"</h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "Integrated modules working together to eliminate the fragmentation that undermines project success."
                    </p>
                </Reveal>

                <div class="grid lg:grid-cols-5 gap-8 lg:gap-12">
                    <div class="lg:col-span-2 grid sm:grid-cols-2 lg:grid-cols-1 gap-4" role="tablist" aria-label="Modules">
                        {cards}
                    </div>
                    <div class="lg:col-span-3 bg-white p-8 lg:p-12 border border-slate-200" role="tabpanel">
                        {move || view! { <ModuleDetail module=*module_at(selected.get()) /> }}
                    </div>
                </div>
            </div>
        </section>

        <section class="py-20 bg-arc-primary text-white overflow-hidden">
            <div class="max-w-7xl mx-auto px-6 lg:px-8">
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-8 lg:gap-12">{stats}</div>
            </div>
        </section>

        <section class="py-24 lg:py-32 bg-white overflow-hidden">
            <div class="max-w-7xl mx-auto px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-12 lg:gap-20 items-center">
                    <Reveal direction=RevealDirection::Left>
                        <h2 class="text-3xl md:text-4xl font-bold text-foreground mb-6">
                            "Designed for how you actually work."
                        </h2>
                        <p class="text-muted-foreground text-lg leading-relaxed mb-6">
                            "Most builders manage projects with fragmented tools: separate applications for scheduling, communication, documentation and financial tracking. That fragmentation creates gaps where information is lost and deadlines are missed."
                        </p>
                        <p class="text-muted-foreground text-lg leading-relaxed mb-8">
                            "Arc eliminates these gaps entirely. Every tool communicates with every other tool. Changes propagate automatically. Your team always works from the same source of truth."
                        </p>
                        <div class="flex flex-wrap gap-4">
                            <MagneticButton href=Route::Contact.path() variant=ButtonVariant::Outline size=ButtonSize::Medium show_arrow=true>
                                "Request Demo"
                            </MagneticButton>
                            <MagneticButton href=Route::About.path() variant=ButtonVariant::Outline size=ButtonSize::Medium>
                                "Our Story"
                            </MagneticButton>
                        </div>
                    </Reveal>

                    <Reveal direction=RevealDirection::Right delay=200>
                        <div class="relative" data-cursor-expand="">
                            <div class="absolute -inset-4 bg-gradient-to-br from-arc-accent/5 to-arc-primary/5 -z-10"></div>
                            <div class="absolute -top-8 -right-8 w-32 h-32 bg-arc-accent/10 sway"></div>
                            <div class="absolute -bottom-6 -left-6 w-24 h-24 bg-arc-primary/10 sway-reverse"></div>
                            <div class="relative overflow-hidden shadow-2xl bg-white border border-slate-200 aspect-[16/10] flex items-center justify-center">
                                <div class="text-center p-8">
                                    <div class="w-16 h-16 bg-arc-primary/10 rounded-full flex items-center justify-center mx-auto mb-4">
                                        <Icon id=IconId::Calendar class="w-8 h-8 text-arc-primary" />
                                    </div>
                                    <h3 class="text-xl font-bold text-foreground mb-2">"Gantt Schedule"</h3>
                                    <p class="text-muted-foreground text-sm">"Interactive Project Timeline Visualization"</p>
                                </div>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>

        <section class="py-24 lg:py-32 bg-background-alt">
            <div class="max-w-7xl mx-auto px-6 lg:px-8">
                <Reveal class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-foreground mb-4">"Beyond the basics."</h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "Additional capabilities that set Arc apart from generic project management tools."
                    </p>
                </Reveal>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">{extras}</div>
            </div>
        </section>

        <ClosingCta title="See Arc in action.">
            <MagneticButton href=Route::Contact.path() variant=ButtonVariant::Outline show_arrow=true strength=CTA_STRENGTH>
                "Schedule Demo"
            </MagneticButton>
            <MagneticButton href=Route::About.path() variant=ButtonVariant::Outline strength=CTA_STRENGTH>
                "Learn Our Story"
            </MagneticButton>
        </ClosingCta>
    }
}

#[component]
fn WorkflowItem(step: WorkflowStep, index: usize, is_last: bool) -> impl IntoView {
    view! {
        <Reveal distance=20.0 duration=500 delay=stagger_delay(index, 100, 0) class="flex flex-col items-center relative group">
            {(!is_last).then(|| view! {
                <div class="hidden md:block absolute top-8 left-[calc(50%+32px)] w-[calc(100%-64px)] h-[2px] bg-gradient-to-r from-arc-accent to-arc-accent/50"></div>
            })}
            <div class="w-16 h-16 bg-white border-2 border-arc-primary/20 flex items-center justify-center mb-4 transition-all duration-300 group-hover:border-arc-accent group-hover:shadow-lg group-hover:scale-105 group-hover:rotate-3">
                <Icon id=step.icon class="w-7 h-7 text-arc-primary transition-colors group-hover:text-arc-accent" />
            </div>
            <h4 class="font-semibold text-foreground mb-1">{step.label}</h4>
            <p class="text-sm text-muted-foreground text-center">{step.description}</p>
        </Reveal>
    }
}

#[component]
fn ModuleCard(module: Module, index: usize, selected: RwSignal<usize>) -> impl IntoView {
    let is_selected = move || selected.get() == index;

    let card_class = move || {
        if is_selected() {
            "group relative w-full text-left p-6 transition-all duration-500 border bg-white border-arc-accent shadow-xl shadow-arc-accent/10"
        } else {
            "group relative w-full text-left p-6 transition-all duration-500 border bg-white border-slate-200 hover:border-slate-300 hover:shadow-lg"
        }
    };
    let wash_class = move || {
        format!(
            "absolute inset-0 transition-opacity duration-500 bg-gradient-to-br {} {}",
            module.gradient,
            if is_selected() { "opacity-100" } else { "opacity-0 group-hover:opacity-50" }
        )
    };
    let badge_class = move || {
        if is_selected() {
            "w-12 h-12 flex items-center justify-center transition-colors duration-300 bg-arc-accent"
        } else {
            "w-12 h-12 flex items-center justify-center transition-colors duration-300 bg-arc-primary/10 group-hover:bg-arc-primary/20"
        }
    };

    view! {
        <Reveal distance=30.0 duration=500 delay=stagger_delay(index, 100, 0)>
            <button
                type="button"
                class=card_class
                role="tab"
                aria-selected=move || is_selected().to_string()
                data-cursor-expand=""
                on:click=move |_| selected.set(index)
            >
                <div class=wash_class></div>
                <div
                    class="absolute left-0 top-0 bottom-0 w-1 bg-arc-accent origin-top transition-transform duration-300"
                    style=move || if is_selected() { "transform: scaleY(1);" } else { "transform: scaleY(0);" }
                ></div>
                <div class="relative z-10">
                    <div class="flex items-center justify-between mb-3">
                        <div class=badge_class>
                            {move || {
                                let tone = if is_selected() { "w-6 h-6 transition-colors text-white" } else { "w-6 h-6 transition-colors text-arc-primary" };
                                view! { <Icon id=module.icon class=tone /> }
                            }}
                        </div>
                        {move || {
                            let chevron = if is_selected() {
                                "w-5 h-5 transition-all duration-300 text-arc-accent rotate-90"
                            } else {
                                "w-5 h-5 transition-all duration-300 text-slate-300 group-hover:text-slate-400"
                            };
                            view! { <Icon id=IconId::ChevronRight class=chevron /> }
                        }}
                    </div>
                    <h3 class="text-lg font-semibold text-foreground mb-2">{module.title}</h3>
                    <p class="text-sm text-muted-foreground leading-relaxed">{module.description}</p>
                </div>
            </button>
        </Reveal>
    }
}

#[component]
fn ModuleDetail(module: Module) -> impl IntoView {
    let bullets = module
        .bullets
        .iter()
        .enumerate()
        .map(|(index, bullet)| {
            view! {
                <div class="flex items-start gap-3 detail-item" style=format!("animation-delay: {}ms;", stagger_delay(index, 50, 0))>
                    <div class="w-5 h-5 bg-arc-accent/10 flex items-center justify-center mt-0.5 flex-shrink-0">
                        <Icon id=IconId::Check class="w-3 h-3 text-arc-accent" />
                    </div>
                    <span class="text-foreground">{*bullet}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="h-full detail-panel" data-module=module.id>
            <div class="sticky top-32">
                <div class="flex items-center gap-4 mb-6">
                    <div class="w-16 h-16 bg-arc-accent flex items-center justify-center">
                        <Icon id=module.icon class="w-8 h-8 text-white" />
                    </div>
                    <div>
                        <h3 class="text-2xl font-bold text-foreground">{module.title}</h3>
                        <p class="text-arc-accent font-medium">{format!("Core Module · {}", module.short_title)}</p>
                    </div>
                </div>
                <p class="text-muted-foreground text-lg leading-relaxed mb-8">{module.full_description}</p>
                <div class="space-y-3">{bullets}</div>
            </div>
        </div>
    }
}
