use leptos::prelude::*;

use crate::core::cursor::{CursorState, PointerKind};

/// Dot and ring that follow the mouse and grow over interactive content.
///
/// Touch devices get nothing: the overlay is removed once the coarse
/// pointer check runs in the browser.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let state = RwSignal::new(CursorState::default());
    let pointer = RwSignal::new(PointerKind::Fine);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::cursor::{ElementInfo, EXPAND_ATTRIBUTE, classify};
        use crate::core::magnetic::Point;
        use crate::ui::dom::prefers_coarse_pointer;
        use leptos::ev::{mousemove, mouseout, mouseover};
        use leptos::wasm_bindgen::JsCast;

        Effect::new(move |_| {
            pointer.set(PointerKind::from_coarse_match(prefers_coarse_pointer()));
        });

        let on_move = window_event_listener(mousemove, move |ev| {
            let position = Point::new(ev.client_x() as f64, ev.client_y() as f64);
            let hover = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .map(|target| {
                    let chain = ancestor_chain(target, EXPAND_ATTRIBUTE);
                    classify(&chain)
                })
                .unwrap_or_default();
            state.update(|s| {
                s.on_move(position);
                s.on_hover(hover);
                s.on_enter_document();
            });
        });

        // `relatedTarget` is null when the pointer leaves or enters the window
        let on_leave = window_event_listener(mouseout, move |ev| {
            if ev.related_target().is_none() {
                state.update(CursorState::on_leave_document);
            }
        });
        let on_enter = window_event_listener(mouseover, move |ev| {
            if ev.related_target().is_none() {
                state.update(CursorState::on_enter_document);
            }
        });

        on_cleanup(move || {
            drop(on_move);
            drop(on_leave);
            drop(on_enter);
        });

        fn ancestor_chain(target: web_sys::Element, marker: &str) -> Vec<ElementInfo> {
            let mut chain = Vec::new();
            let mut current = Some(target);
            while let Some(element) = current {
                let mut info = ElementInfo::new(element.tag_name());
                if let Some(role) = element.get_attribute("role") {
                    info = info.with_role(role);
                }
                if element.has_attribute(marker) {
                    info = info.expandable();
                }
                chain.push(info);
                current = element.parent_element();
            }
            chain
        }
    }

    view! { <CursorOverlay pointer=pointer state=state /> }
}

/// The dot and ring themselves; empty unless the pointer is fine
#[component]
fn CursorOverlay(
    #[prop(into)] pointer: Signal<PointerKind>,
    #[prop(into)] state: Signal<CursorState>,
) -> impl IntoView {
    let dot_style = move || {
        state.with(|s| {
            let size = s.hover.size();
            format!(
                "transform: {}; width: {d}px; height: {d}px; opacity: {};",
                s.transform(),
                s.dot_opacity(),
                d = size.dot,
            )
        })
    };
    let ring_style = move || {
        state.with(|s| {
            let size = s.hover.size();
            format!(
                "transform: {}; width: {r}px; height: {r}px; opacity: {};",
                s.transform(),
                s.ring_opacity(),
                r = size.ring,
            )
        })
    };

    view! {
        <Show when=move || pointer.get().shows_overlay()>
            <div class="custom-cursor-dot" aria-hidden="true" style=dot_style></div>
            <div class="custom-cursor-ring" aria-hidden="true" style=ring_style></div>
            <style>"@media (pointer: fine) { * { cursor: none !important; } }"</style>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_overlay(pointer: PointerKind) -> String {
        Owner::new().with(|| {
            view! { <CursorOverlay pointer=pointer state=CursorState::default() /> }.to_html()
        })
    }

    #[test]
    fn test_coarse_pointer_renders_nothing() {
        let html = render_overlay(PointerKind::Coarse);
        assert!(!html.contains("custom-cursor-dot"));
        assert!(!html.contains("custom-cursor-ring"));
        assert!(!html.contains("cursor: none"));
    }

    #[test]
    fn test_fine_pointer_renders_dot_and_ring_off_screen() {
        let html = render_overlay(PointerKind::Fine);
        assert!(html.contains("custom-cursor-dot"));
        assert!(html.contains("custom-cursor-ring"));
        assert!(html.contains("translate3d(-100px, -100px, 0)"));
        assert!(html.contains("width: 12px"));
    }
}
