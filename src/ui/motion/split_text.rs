use leptos::prelude::*;

use crate::core::split_text::{DEFAULT_STAGGER_S, SplitAnimation, SplitMode, split};

/// Headline that animates in one character (or word) at a time on mount
#[component]
pub fn SplitText(
    #[prop(into)] text: String,
    #[prop(default = SplitMode::Chars)] mode: SplitMode,
    #[prop(default = SplitAnimation::FadeUp)] animation: SplitAnimation,
    /// Seconds before the first segment moves
    #[prop(default = 0.0)]
    delay: f64,
    #[prop(default = DEFAULT_STAGGER_S)] stagger: f64,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    // Wait a frame so the hidden state is painted before transitioning
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        request_animation_frame(move || set_visible.set(true));
    });

    #[cfg(feature = "ssr")]
    let _ = set_visible;

    let segments = split(&text, mode, delay, stagger)
        .into_iter()
        .map(|segment| {
            let text = segment.text.clone();
            let style = move || segment.style(animation, visible.get());
            view! { <span aria-hidden="true" style=style>{text}</span> }
        })
        .collect_view();

    view! {
        <span class=format!("inline-flex flex-wrap {}", class) aria-label=text>
            {segments}
        </span>
    }
}
