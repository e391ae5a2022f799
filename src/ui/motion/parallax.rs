use leptos::html::Section;
use leptos::prelude::*;

use crate::core::IconId;
use crate::core::parallax::HeroTransform;
use crate::ui::dom;
use crate::ui::icon::Icon;
use crate::ui::interaction::HeroBackground;

/// Full-height hero whose content fades, shrinks and drifts down as the
/// page scrolls past it
#[component]
pub fn HeroParallax(children: Children) -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let transform = RwSignal::new(HeroTransform::from_progress(0.0));

    #[cfg(not(feature = "ssr"))]
    {
        let update = move || {
            let Some(section) = section_ref.get_untracked() else {
                return;
            };
            let rect = dom::client_rect(&section);
            let scroll_y = dom::scroll_y();
            transform.set(HeroTransform::at(scroll_y, rect.top + scroll_y, rect.height));
        };

        Effect::new(move |_| update());
        let handle = window_event_listener(leptos::ev::scroll, move |_| update());
        on_cleanup(move || drop(handle));
    }

    let on_indicator_click = move |_| {
        let (_, viewport) = dom::page_extent();
        dom::scroll_window_to(viewport);
    };

    view! {
        <section
            node_ref=section_ref
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <HeroBackground />

            <div
                class="relative z-10 max-w-7xl mx-auto px-6 lg:px-8 pt-32 pb-20 will-change-transform"
                style=move || transform.get().style()
            >
                {children()}
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 z-20 hero-fade-in hero-delay-2000">
                <button
                    type="button"
                    class="flex flex-col items-center gap-2 cursor-pointer scroll-bob"
                    aria-label="Scroll to content"
                    on:click=on_indicator_click
                >
                    <span class="text-xs text-white/40 tracking-widest uppercase">"Scroll"</span>
                    <Icon id=IconId::ChevronDown class="w-5 h-5 text-white/40" />
                </button>
            </div>
        </section>
    }
}
