use leptos::html::Span;
use leptos::prelude::*;

use crate::core::counter::{COUNTER_MARGIN, Counter};
use crate::ui::dom::use_in_view;

/// Stat number that counts up from zero when first scrolled into view.
///
/// Values that are not integers are shown as-is once visible.
#[component]
pub fn AnimatedCounter(
    #[prop(into)] value: String,
    #[prop(optional, into)] suffix: String,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let counter = StoredValue::new(Counter::new(&value, suffix));
    let label = RwSignal::new(counter.with_value(|c| c.label_at(0.0)));

    let node_ref = NodeRef::<Span>::new();
    let in_view = use_in_view(node_ref, COUNTER_MARGIN);

    #[cfg(not(feature = "ssr"))]
    {
        let frame_loop = crate::ui::dom::use_frame_loop();

        Effect::new(move |_| {
            if !in_view.get() {
                return;
            }
            let triggered = counter
                .try_update_value(|c| c.trigger())
                .unwrap_or(false);
            if !triggered {
                return;
            }

            if !counter.with_value(Counter::needs_frames) {
                label.set(counter.with_value(|c| c.label_at(0.0)));
                return;
            }

            let mut started_at = None::<f64>;
            frame_loop.update_value(|frames| {
                frames.start(move |timestamp| {
                    let start = *started_at.get_or_insert(timestamp);
                    let elapsed = timestamp - start;
                    let Some((text, finished)) =
                        counter.try_with_value(|c| (c.label_at(elapsed), c.is_finished(elapsed)))
                    else {
                        return false;
                    };
                    label.set(text);
                    !finished
                });
            });
        });
    }

    #[cfg(feature = "ssr")]
    let _ = in_view;

    view! {
        <span node_ref=node_ref class=class>
            {move || label.get()}
        </span>
    }
}
