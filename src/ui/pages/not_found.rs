//! 404 page, rendered for any path the router does not know

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::IconId;
use crate::core::content::BRAND;
use crate::core::routes::Route;
use crate::ui::icon::Icon;
use crate::ui::layout::{ButtonVariant, LinkButton};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Tell the server to answer with a real 404
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text=format!("Page Not Found | {}", BRAND) />
        <Meta name="robots" content="noindex" />

        <section class="min-h-screen bg-arc-primary flex flex-col items-center justify-center px-6">
            <div class="text-center hero-fade-up">
                <div class="w-24 h-24 mx-auto mb-6 bg-white/5 flex items-center justify-center">
                    <Icon id=IconId::Layers class="w-12 h-12 text-arc-accent" />
                </div>

                <h1 class="text-6xl md:text-7xl font-bold text-white mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-white mb-2">"Page Not Found"</h2>
                <p class="text-white/60 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <LinkButton href=Route::Home.path() show_arrow=true>"Back to Home"</LinkButton>
                    <LinkButton href=Route::Contact.path() variant=ButtonVariant::Outline>"Contact Us"</LinkButton>
                </div>
            </div>
        </section>
    }
}
