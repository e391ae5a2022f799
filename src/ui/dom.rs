//! Browser bindings shared by the animated components.
//!
//! Everything here ties its subscription to the current reactive owner, so
//! unmounting a component removes its observers, listeners and frame loops.

use leptos::html::ElementType;
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::closure::Closure;
#[cfg(not(feature = "ssr"))]
use std::{cell::RefCell, rc::Rc};

/// `true` once the referenced element has intersected the viewport.
///
/// Animate-once: the observer disconnects after the first hit and the
/// signal never goes back to `false`. On the server it stays `false`.
pub fn use_in_view<E>(node_ref: NodeRef<E>, margin: impl Into<String>) -> ReadSignal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let (in_view, set_in_view) = signal(false);
    let margin: String = margin.into();

    #[cfg(not(feature = "ssr"))]
    {
        let observer = StoredValue::new_local(None::<InViewObserver>);

        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };
            if in_view.get_untracked() || observer.with_value(Option::is_some) {
                return;
            }
            let element: web_sys::Element = element.unchecked_into();
            match InViewObserver::observe(&element, &margin, move || set_in_view.set(true)) {
                Some(created) => observer.set_value(Some(created)),
                // No IntersectionObserver support: show the content right away
                None => set_in_view.set(true),
            }
        });

        on_cleanup(move || {
            observer.try_update_value(|slot| slot.take());
        });
    }

    #[cfg(feature = "ssr")]
    let _ = (node_ref, margin, set_in_view);

    in_view
}

#[cfg(not(feature = "ssr"))]
struct InViewObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(not(feature = "ssr"))]
impl InViewObserver {
    fn observe(
        element: &web_sys::Element,
        margin: &str,
        mut on_enter: impl FnMut() + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let entered = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<web_sys::IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if entered {
                    observer.disconnect();
                    on_enter();
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(margin);

        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )
        .ok()?;
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

#[cfg(not(feature = "ssr"))]
impl Drop for InViewObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Whether the primary pointer is coarse (touch). Always `false` on the server.
pub fn prefers_coarse_pointer() -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(pointer: coarse)").ok().flatten())
            .is_some_and(|query| query.matches())
    }

    #[cfg(feature = "ssr")]
    {
        false
    }
}

/// Current vertical scroll offset of the window
pub fn scroll_y() -> f64 {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    #[cfg(feature = "ssr")]
    {
        0.0
    }
}

/// `(document height, viewport height)` for scroll progress
pub fn page_extent() -> (f64, f64) {
    #[cfg(not(feature = "ssr"))]
    {
        let Some(window) = web_sys::window() else {
            return (0.0, 0.0);
        };
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let document = window
            .document()
            .and_then(|d| d.document_element())
            .map(|root| root.scroll_height() as f64)
            .unwrap_or(0.0);
        (document, viewport)
    }

    #[cfg(feature = "ssr")]
    {
        (0.0, 0.0)
    }
}

/// Bounding box of an element in viewport coordinates
#[cfg(not(feature = "ssr"))]
pub fn client_rect(element: &web_sys::Element) -> crate::core::magnetic::Rect {
    let rect = element.get_bounding_client_rect();
    crate::core::magnetic::Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Callback and pending frame id of a frame loop.
///
/// A loop holds its callback only while it is armed: finishing or
/// cancelling hands the callback back so the caller can release it.
pub struct FrameSlot<C> {
    callback: Option<C>,
    pending: Option<i32>,
}

impl<C> Default for FrameSlot<C> {
    fn default() -> Self {
        Self {
            callback: None,
            pending: None,
        }
    }
}

impl<C> FrameSlot<C> {
    pub fn arm(&mut self, callback: C, pending: Option<i32>) {
        self.callback = Some(callback);
        self.pending = pending;
    }

    pub fn callback(&self) -> Option<&C> {
        self.callback.as_ref()
    }

    /// Record the next scheduled frame (or none)
    pub fn schedule(&mut self, pending: Option<i32>) {
        self.pending = pending;
    }

    /// The loop ended on its own
    pub fn finish(&mut self) -> Option<C> {
        self.pending = None;
        self.callback.take()
    }

    /// Stop the loop, returning the frame to cancel and the callback to drop
    pub fn cancel(&mut self) -> (Option<i32>, Option<C>) {
        (self.pending.take(), self.callback.take())
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }
}

/// `requestAnimationFrame` loop that cancels its pending frame when stopped
/// or dropped.
///
/// The callback receives the frame timestamp and returns whether another
/// frame is wanted.
#[cfg(not(feature = "ssr"))]
#[derive(Default)]
pub struct AnimationFrameLoop {
    slot: Rc<RefCell<FrameSlot<Closure<dyn FnMut(f64)>>>>,
}

#[cfg(not(feature = "ssr"))]
impl AnimationFrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the loop with `on_frame`
    pub fn start(&mut self, mut on_frame: impl FnMut(f64) -> bool + 'static) {
        self.stop();

        let slot = Rc::clone(&self.slot);
        let closure = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            slot.borrow_mut().schedule(None);
            if on_frame(timestamp) {
                let mut slot = slot.borrow_mut();
                let next = slot.callback().and_then(request_frame);
                slot.schedule(next);
            } else if let Some(finished) = slot.borrow_mut().finish() {
                // A closure cannot be freed while it is running
                leptos::task::spawn_local(async move { drop(finished) });
            }
        });

        let pending = request_frame(&closure);
        self.slot.borrow_mut().arm(closure, pending);
    }

    /// Whether a frame is scheduled
    pub fn is_running(&self) -> bool {
        self.slot.borrow().is_running()
    }

    /// Cancel the pending frame and release the callback
    pub fn stop(&mut self) {
        let (pending, callback) = self.slot.borrow_mut().cancel();
        if let Some(id) = pending
            && let Some(window) = web_sys::window()
        {
            let _ = window.cancel_animation_frame(id);
        }
        drop(callback);
    }
}

#[cfg(not(feature = "ssr"))]
impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(not(feature = "ssr"))]
fn request_frame(closure: &Closure<dyn FnMut(f64)>) -> Option<i32> {
    web_sys::window()?
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

/// Frame loop owned by the current component; stopped on unmount.
#[cfg(not(feature = "ssr"))]
pub fn use_frame_loop() -> StoredValue<AnimationFrameLoop, LocalStorage> {
    let frame_loop = StoredValue::new_local(AnimationFrameLoop::new());
    on_cleanup(move || {
        frame_loop.try_update_value(AnimationFrameLoop::stop);
    });
    frame_loop
}

/// Smooth-scroll the window to `top`
pub fn scroll_window_to(top: f64) {
    #[cfg(not(feature = "ssr"))]
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }

    #[cfg(feature = "ssr")]
    let _ = top;
}

/// Calendar year for the footer notice
pub fn current_year() -> i32 {
    #[cfg(not(feature = "ssr"))]
    {
        js_sys::Date::new_0().get_full_year() as i32
    }

    #[cfg(feature = "ssr")]
    {
        use chrono::Datelike;
        chrono::Utc::now().year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_finished_loop_releases_callback() {
        let captured = Rc::new(());
        let mut slot = FrameSlot::default();
        slot.arm(Rc::clone(&captured), Some(1));
        assert!(slot.is_running());

        slot.schedule(Some(2));
        assert!(slot.callback().is_some());

        let finished = slot.finish();
        assert!(!slot.is_running());
        assert!(slot.callback().is_none());

        drop(finished);
        assert_eq!(Rc::strong_count(&captured), 1);
    }

    #[test]
    fn test_cancel_returns_pending_frame() {
        let mut slot = FrameSlot::default();
        slot.arm("tick", Some(7));

        assert_eq!(slot.cancel(), (Some(7), Some("tick")));
        assert!(!slot.is_running());
        assert_eq!(slot.cancel(), (None, None));
    }
}
