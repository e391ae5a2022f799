use leptos::html::Div;
use leptos::prelude::*;

use crate::core::parallax::{HERO_ORBS, PARTICLE_COUNT, Particle, SmoothedPointer};

/// Dark gradient backdrop for the hero with orbs that drift toward the pointer
#[component]
pub fn HeroBackground() -> impl IntoView {
    let container_ref = NodeRef::<Div>::new();
    let pointer = RwSignal::new(SmoothedPointer::default());

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::magnetic::Point;
        use crate::ui::dom::{client_rect, use_frame_loop};

        let frame_loop = use_frame_loop();

        let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            let Some(container) = container_ref.get_untracked() else {
                return;
            };
            let rect = client_rect(&container);
            let target = rect.normalize(Point::new(ev.client_x() as f64, ev.client_y() as f64));
            pointer.update(|p| p.set_target(target));

            let idle = frame_loop.with_value(|frames| !frames.is_running());
            if idle {
                frame_loop.update_value(|frames| {
                    frames.start(move |_| {
                        pointer
                            .try_update(|p| {
                                p.step();
                                !p.is_settled()
                            })
                            .unwrap_or(false)
                    });
                });
            }
        });
        on_cleanup(move || drop(handle));
    }

    let orbs = HERO_ORBS
        .iter()
        .map(|orb| {
            let orb = *orb;
            view! {
                <div
                    class="absolute rounded-full pointer-events-none"
                    style=move || orb.style(pointer.with(SmoothedPointer::current))
                ></div>
            }
        })
        .collect_view();

    let particles = (0..PARTICLE_COUNT)
        .map(|i| {
            view! { <div class="hero-particle" style=Particle::nth(i).style()></div> }
        })
        .collect_view();

    view! {
        <div node_ref=container_ref class="absolute inset-0 overflow-hidden" aria-hidden="true">
            <div class="absolute inset-0 bg-gradient-to-br from-[#1a2a3a] via-arc-primary to-[#1f3044]"></div>
            {orbs}
            {particles}
            <div class="absolute inset-0 hero-grid"></div>
            <div class="absolute inset-0 hero-vignette"></div>
            <div class="absolute top-0 left-0 right-0 h-32 bg-gradient-to-b from-black/20 to-transparent"></div>
        </div>
    }
}
