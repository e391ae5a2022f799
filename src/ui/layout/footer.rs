use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::IconId;
use crate::core::content::{BRAND, TAGLINE};
use crate::core::reveal::{RevealDirection, stagger_delay};
use crate::core::routes::{LEGAL_LINKS, NAV_LINKS, Route};
use crate::ui::dom::current_year;
use crate::ui::icon::Icon;
use crate::ui::motion::Reveal;

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    let nav_links = NAV_LINKS
        .iter()
        .enumerate()
        .map(|(index, route)| {
            view! {
                <Reveal distance=10.0 duration=300 delay=stagger_delay(index, 50, 0)>
                    <A
                        href=route.path()
                        attr:class="group relative text-sm text-white/60 hover:text-white transition-colors duration-300"
                    >
                        {route.label()}
                        <span class="absolute -bottom-1 left-0 w-0 h-px bg-arc-accent transition-all duration-300 group-hover:w-full"></span>
                    </A>
                </Reveal>
            }
        })
        .collect_view();

    let legal_links = LEGAL_LINKS
        .iter()
        .map(|route| {
            view! {
                <A href=route.path() attr:class="hover:text-white/60 transition-colors duration-300">
                    {route.label()}
                </A>
            }
        })
        .collect_view();

    view! {
        <footer class="relative bg-arc-primary text-white overflow-hidden">
            <div class="h-px bg-gradient-to-r from-transparent via-arc-accent to-transparent"></div>
            <div class="absolute inset-0 footer-grid" aria-hidden="true"></div>

            <div class="relative">
                <div class="border-b border-white/10">
                    <div class="max-w-7xl mx-auto px-6 lg:px-8 py-12 md:py-16">
                        <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-8">
                            <div class="flex-1">
                                <Reveal distance=10.0 duration=500>
                                    <p class="text-white/40 text-xs uppercase tracking-[0.2em] mb-3">
                                        {TAGLINE}
                                    </p>
                                </Reveal>
                                <Reveal distance=20.0 duration=500 delay=100>
                                    <h2 class="text-5xl sm:text-6xl md:text-7xl lg:text-8xl font-bold tracking-tight leading-none uppercase">
                                        <span class="bg-gradient-to-r from-white via-white to-white/60 bg-clip-text text-transparent">
                                            {BRAND}
                                        </span>
                                    </h2>
                                </Reveal>
                            </div>

                            <Reveal direction=RevealDirection::Up distance=20.0 duration=500 delay=200 class="md:text-right md:pt-1">
                                <p class="text-white/50 text-sm mb-4 max-w-xs md:ml-auto">
                                    "Ready to build on solid ground?"
                                </p>
                                <A
                                    href=Route::Contact.path()
                                    attr:class="group inline-flex items-center gap-3 bg-arc-accent text-arc-primary px-6 py-3 font-semibold transition-all duration-300 hover:bg-arc-accent-light hover:gap-4"
                                >
                                    "Schedule a Demo"
                                    <Icon id=IconId::ArrowRight class="w-4 h-4 transition-transform duration-300 group-hover:translate-x-0.5" />
                                </A>
                            </Reveal>
                        </div>
                    </div>
                </div>

                <div class="max-w-7xl mx-auto px-6 lg:px-8 py-6">
                    <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                        <nav class="flex flex-wrap items-center gap-x-6 gap-y-2" aria-label="Footer">
                            {nav_links}
                        </nav>

                        <div class="flex flex-col md:flex-row md:items-center gap-3 md:gap-6 text-xs text-white/40">
                            <div class="flex items-center gap-4">{legal_links}</div>
                            <span class="hidden md:inline text-white/20">"·"</span>
                            <p>{format!("© {} {}", year, BRAND)}</p>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
