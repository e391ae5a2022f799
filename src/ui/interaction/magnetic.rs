use leptos::html::Div;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::IconId;
use crate::core::magnetic::{DEFAULT_STRENGTH, Magnetic, SPRING_TRANSITION};
use crate::ui::icon::Icon;
use crate::ui::layout::{ButtonSize, ButtonVariant};

/// Pointer tracking shared by the magnetic link and submit buttons
#[derive(Clone, Copy)]
struct MagneticHandle {
    node_ref: NodeRef<Div>,
    state: RwSignal<Magnetic>,
}

impl MagneticHandle {
    fn new(strength: f64) -> Self {
        Self {
            node_ref: NodeRef::new(),
            state: RwSignal::new(Magnetic::new(strength)),
        }
    }

    fn style(self) -> impl Fn() -> String + Send + Sync + Copy + 'static {
        let state = self.state;
        move || {
            format!(
                "display: inline-block; transform: {}; transition: {};",
                state.with(Magnetic::transform),
                SPRING_TRANSITION
            )
        }
    }

    fn on_move(self) -> impl Fn(leptos::ev::MouseEvent) + Copy + 'static {
        let node_ref = self.node_ref;
        let state = self.state;
        move |ev| {
            #[cfg(not(feature = "ssr"))]
            if let Some(el) = node_ref.get_untracked() {
                let rect = crate::ui::dom::client_rect(&el);
                let pointer =
                    crate::core::magnetic::Point::new(ev.client_x() as f64, ev.client_y() as f64);
                state.update(|m| {
                    m.on_pointer_move(pointer, rect);
                });
            }

            #[cfg(feature = "ssr")]
            let _ = (ev, node_ref, state);
        }
    }

    fn on_leave(self) -> impl Fn(leptos::ev::MouseEvent) + Copy + 'static {
        let state = self.state;
        move |_| state.update(Magnetic::on_pointer_leave)
    }
}

/// Link that leans toward the pointer while hovered and springs back on leave
#[component]
pub fn MagneticButton(
    href: &'static str,
    children: Children,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Large)] size: ButtonSize,
    #[prop(default = false)] show_arrow: bool,
    #[prop(default = DEFAULT_STRENGTH)] strength: f64,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let magnetic = MagneticHandle::new(strength);
    let classes = format!(
        "relative inline-flex items-center justify-center font-semibold transition-all duration-300 group overflow-hidden {} {} {}",
        variant.magnetic_class(),
        size.magnetic_class(),
        class
    );

    view! {
        <div
            node_ref=magnetic.node_ref
            style=magnetic.style()
            on:mousemove=magnetic.on_move()
            on:mouseleave=magnetic.on_leave()
        >
            <A href=href attr:class=classes>
                <span class="absolute inset-0 overflow-hidden">
                    <span class="absolute inset-0 -translate-x-full group-hover:translate-x-full transition-transform duration-700 bg-gradient-to-r from-transparent via-white/20 to-transparent"></span>
                </span>
                <span class="relative flex items-center gap-2">
                    {children()}
                    {show_arrow.then(|| {
                        let arrow = format!(
                            "{} transition-transform duration-200 group-hover:translate-x-1",
                            size.arrow_class()
                        );
                        view! { <Icon id=IconId::ArrowRight class=arrow /> }
                    })}
                </span>
            </A>
        </div>
    }
}

/// Form submit button with the same magnetic pull
#[component]
pub fn MagneticSubmitButton(
    children: Children,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(default = DEFAULT_STRENGTH)] strength: f64,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let magnetic = MagneticHandle::new(strength);
    let classes = format!(
        "relative inline-flex items-center justify-center gap-2 font-semibold transition-all duration-300 group overflow-hidden disabled:opacity-70 disabled:cursor-not-allowed {} {} {}",
        ButtonVariant::Primary.magnetic_class(),
        ButtonSize::Large.magnetic_class(),
        class
    );

    view! {
        <div
            node_ref=magnetic.node_ref
            style=magnetic.style()
            on:mousemove=magnetic.on_move()
            on:mouseleave=magnetic.on_leave()
        >
            <button type="submit" class=classes disabled=disabled>
                {children()}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_router::components::Router;
    use leptos_router::location::RequestUrl;

    #[test]
    fn test_magnetic_button_renders_at_rest() {
        let html = Owner::new().with(|| {
            provide_context(RequestUrl::new("/"));
            view! {
                <Router>
                    <MagneticButton href="/contact" show_arrow=true>"Schedule a Demo"</MagneticButton>
                </Router>
            }
            .to_html()
        });

        assert!(html.contains("href=\"/contact\""));
        assert!(html.contains("Schedule a Demo"));
        assert!(html.contains("translate3d(0px, 0px, 0)"));
    }

    #[test]
    fn test_submit_button_renders_at_rest() {
        let html = Owner::new().with(|| {
            view! { <MagneticSubmitButton disabled=true>"Sending..."</MagneticSubmitButton> }
                .to_html()
        });

        assert!(html.contains("type=\"submit\""));
        assert!(html.contains("Sending..."));
        assert!(html.contains("translate3d(0px, 0px, 0)"));
    }
}
