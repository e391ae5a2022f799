use leptos::html::Div;
use leptos::prelude::*;

use crate::core::reveal::{
    DEFAULT_DISTANCE_PX, DEFAULT_DURATION_MS, Reveal as RevealState, RevealDirection,
    RevealOptions,
};
use crate::ui::dom::use_in_view;

/// Fades and slides its children in the first time they scroll into view
#[component]
pub fn Reveal(
    children: Children,
    #[prop(default = RevealDirection::Up)] direction: RevealDirection,
    #[prop(default = DEFAULT_DISTANCE_PX)] distance: f64,
    #[prop(default = DEFAULT_DURATION_MS)] duration: u32,
    /// Delay after entering the viewport, for staggered groups
    #[prop(default = 0)]
    delay: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let options = RevealOptions::default()
        .direction(direction)
        .distance(distance)
        .duration(duration)
        .delay(delay);
    let node_ref = NodeRef::<Div>::new();
    let in_view = use_in_view(node_ref, options.margin.clone());
    let state = RwSignal::new(RevealState::new(options));

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        if !in_view.get() {
            return;
        }
        let started = state.try_update(|s| s.observe(true)).unwrap_or(false);
        if started {
            let total = state.with_untracked(|s| s.options().total_ms());
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(total).await;
                state.try_update(RevealState::settle);
            });
        }
    });

    #[cfg(feature = "ssr")]
    let _ = in_view;

    view! {
        <div
            node_ref=node_ref
            class=class
            data-reveal=move || state.with(|s| s.phase().as_str())
            style=move || state.with(RevealState::style)
        >
            {children()}
        </div>
    }
}
