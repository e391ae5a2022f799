use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::core::content::BRAND;
use crate::core::nav::{NavState, is_active};
use crate::core::reveal::stagger_delay;
use crate::core::routes::{NAV_LINKS, Route};
use crate::core::IconId;
use crate::ui::icon::Icon;

/// Fixed header: transparent over the hero, solid once scrolled, with a
/// scroll progress bar and a slide-in drawer on small screens
#[component]
pub fn Navigation() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let nav = RwSignal::new(NavState::new(pathname.get_untracked()));
    let progress = RwSignal::new(0.0_f64);

    // Every navigation closes the drawer
    Effect::new(move |_| {
        let path = pathname.get();
        nav.update(|n| n.on_route_change(path));
    });

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::nav::scroll_progress;
        use crate::ui::dom;

        let update = move || {
            let y = dom::scroll_y();
            let (document, viewport) = dom::page_extent();
            nav.update(|n| n.on_scroll(y));
            progress.set(scroll_progress(y, document, viewport));
        };
        Effect::new(move |_| update());
        let handle = window_event_listener(leptos::ev::scroll, move |_| update());
        on_cleanup(move || drop(handle));
    }

    let scrolled = Memo::new(move |_| nav.with(NavState::is_scrolled));
    let drawer_open = Memo::new(move |_| nav.with(NavState::is_drawer_open));

    let header_class = move || {
        if scrolled.get() {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-500 bg-white/90 backdrop-blur-md border-b border-black/5"
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-500 bg-transparent"
        }
    };

    let desktop_links = NAV_LINKS
        .iter()
        .map(|route| {
            let href = route.path();
            let active = move || is_active(href, &pathname.get());
            let link_class = move || {
                let tone = match (scrolled.get(), active()) {
                    (true, true) => "text-arc-primary",
                    (true, false) => "text-arc-charcoal/70 hover:text-arc-primary",
                    (false, true) => "text-white",
                    (false, false) => "text-white/70 hover:text-white",
                };
                format!(
                    "group relative px-4 py-2 text-sm font-medium transition-colors duration-300 {}",
                    tone
                )
            };
            let underline_class = move || {
                if active() {
                    "absolute bottom-1 left-4 right-4 h-[2px] bg-arc-accent transition-transform duration-300 origin-left scale-x-100"
                } else {
                    "absolute bottom-1 left-4 right-4 h-[2px] bg-arc-accent transition-transform duration-300 origin-left scale-x-0 group-hover:scale-x-100"
                }
            };
            view! {
                <A href=href attr:class=link_class>
                    {route.label()}
                    <span class=underline_class></span>
                </A>
            }
        })
        .collect_view();

    view! {
        <header class=header_class>
            <div
                class="absolute bottom-0 left-0 h-[2px] bg-arc-accent"
                style=move || format!("width: {:.2}%;", progress.get() * 100.0)
            ></div>

            <nav class="max-w-7xl mx-auto px-6 lg:px-8" aria-label="Main">
                <div class="flex items-center justify-between h-20">
                    <A href="/" attr:class="group relative flex items-center">
                        <span class=move || {
                            if scrolled.get() {
                                "text-xl font-bold tracking-tight uppercase transition-all duration-300 group-hover:opacity-70 text-arc-primary"
                            } else {
                                "text-xl font-bold tracking-tight uppercase transition-all duration-300 group-hover:opacity-70 text-white"
                            }
                        }>{BRAND}</span>
                    </A>

                    <div class="hidden md:flex items-center gap-1">
                        {desktop_links}
                        <A
                            href=Route::Contact.path()
                            attr:class="group relative ml-4 px-5 py-2.5 text-sm font-semibold overflow-hidden bg-arc-accent text-arc-primary transition-all duration-300 hover:shadow-lg hover:shadow-arc-accent/20"
                        >
                            <span class="absolute inset-0 -translate-x-full group-hover:translate-x-full transition-transform duration-700 bg-gradient-to-r from-transparent via-white/25 to-transparent"></span>
                            <span class="relative">"Schedule Demo"</span>
                        </A>
                    </div>

                    <button
                        type="button"
                        class=move || {
                            if scrolled.get() {
                                "md:hidden p-2 transition-colors duration-300 text-arc-primary hover:bg-arc-primary/5"
                            } else {
                                "md:hidden p-2 transition-colors duration-300 text-white hover:bg-white/10"
                            }
                        }
                        aria-label="Toggle menu"
                        aria-expanded=move || drawer_open.get().to_string()
                        on:click=move |_| nav.update(NavState::toggle_drawer)
                    >
                        {move || {
                            if drawer_open.get() {
                                view! { <Icon id=IconId::X class="w-6 h-6" /> }.into_any()
                            } else {
                                view! { <Icon id=IconId::Menu class="w-6 h-6" /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </nav>
        </header>

        <Show when=move || drawer_open.get()>
            <MobileDrawer pathname=pathname on_close=Callback::new(move |_| nav.update(NavState::close_drawer)) />
        </Show>
    }
}

#[component]
fn MobileDrawer(#[prop(into)] pathname: Signal<String>, on_close: Callback<()>) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                on_close.run(());
            }
        });
        on_cleanup(move || drop(handle));
    }

    let links = NAV_LINKS
        .iter()
        .enumerate()
        .map(|(index, route)| {
            let href = route.path();
            let link_class = move || {
                if is_active(href, &pathname.get()) {
                    "block px-4 py-3 text-base font-medium transition-colors text-arc-primary bg-arc-primary/5"
                } else {
                    "block px-4 py-3 text-base font-medium transition-colors text-arc-charcoal/70 hover:text-arc-primary hover:bg-arc-primary/5"
                }
            };
            let delay = stagger_delay(index, 50, 100);
            view! {
                <div class="drawer-item" style=format!("animation-delay: {}ms;", delay)>
                    <A href=href attr:class=link_class on:click=move |_| on_close.run(())>
                        {route.label()}
                    </A>
                </div>
            }
        })
        .collect_view();

    view! {
        <div
            class="fixed inset-0 bg-black/50 backdrop-blur-sm z-40 md:hidden drawer-backdrop"
            on:click=move |_| on_close.run(())
        ></div>

        <div
            class="fixed top-0 right-0 bottom-0 w-[280px] bg-white z-50 md:hidden drawer-panel"
            role="dialog"
            aria-modal="true"
            aria-label="Menu"
        >
            <div class="flex flex-col h-full">
                <div class="flex items-center justify-between p-6 border-b border-black/5">
                    <span class="text-xl font-bold tracking-tight uppercase text-arc-primary">{BRAND}</span>
                    <button
                        type="button"
                        class="p-2 text-arc-primary hover:bg-arc-primary/5 transition-colors"
                        aria-label="Close menu"
                        on:click=move |_| on_close.run(())
                    >
                        <Icon id=IconId::X class="w-5 h-5" />
                    </button>
                </div>

                <nav class="flex-1 p-6">
                    <div class="flex flex-col gap-1">{links}</div>
                </nav>

                <div class="p-6 border-t border-black/5">
                    <div class="drawer-item" style="animation-delay: 300ms;">
                        <A
                            href=Route::Contact.path()
                            attr:class="block w-full text-center px-6 py-3 bg-arc-accent text-arc-primary font-semibold transition-colors hover:bg-arc-accent-light"
                            on:click=move |_| on_close.run(())
                        >
                            "Schedule Demo"
                        </A>
                    </div>
                </div>
            </div>
        </div>
    }
}
