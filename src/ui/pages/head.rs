use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::SiteSettings;
use crate::core::routes::Route;
use crate::core::seo::{OG_IMAGE_PATH, PageMeta, canonical_url};

/// Per-page title, description, Open Graph tags and canonical link
#[component]
pub fn PageHead(route: Route) -> impl IntoView {
    let meta = PageMeta::for_route(route);
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let url = canonical_url(&settings.site_url, route.path());
    let image = canonical_url(&settings.site_url, OG_IMAGE_PATH);

    view! {
        <Title text=meta.title />
        <Meta name="description" content=meta.description />
        <Meta name="keywords" content=meta.keywords />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:locale" content="en_US" />
        <Meta property="og:url" content=url.clone() />
        <Meta property="og:title" content=meta.title />
        <Meta property="og:description" content=meta.description />
        <Meta property="og:image" content=image.clone() />

        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=meta.title />
        <Meta name="twitter:image" content=image />

        <Link rel="canonical" href=url />
    }
}
