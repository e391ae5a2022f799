use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::core::SiteSettings;
use crate::core::seo::structured_data;
use crate::core::settings::{META_CONTACT_DELAY, META_SITE_URL};
use crate::ui::pages::{
    AboutPage, ContactPage, HomePage, NotFoundPage, PrivacyPage, ProductPage, TermsPage,
};
use crate::ui::{CustomCursor, Footer, Navigation};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let json_ld = structured_data(&settings.site_url).to_string();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                // Read back by the client before hydrating
                <meta name=META_SITE_URL content=settings.site_url.clone()/>
                <meta name=META_CONTACT_DELAY content=settings.contact_delay_ms.to_string()/>
                <script type="application/ld+json" inner_html=json_ld></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="antialiased">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/arc-site.css"/>

        <Router>
            <CustomCursor />
            <Navigation />
            <main>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=StaticSegment("") view=HomePage />
                    <Route path=StaticSegment("about") view=AboutPage />
                    <Route path=StaticSegment("product") view=ProductPage />
                    <Route path=StaticSegment("contact") view=ContactPage />
                    <Route path=StaticSegment("privacy") view=PrivacyPage />
                    <Route path=StaticSegment("terms") view=TermsPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
