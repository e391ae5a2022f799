//! Arc - marketing site for construction project management
//!
//! Server-rendered with Leptos and hydrated in the browser. Motion and
//! interaction state machines live in [`core`] so they can be tested on
//! the host; [`ui`] wires them to the DOM.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use crate::core::SiteSettings;

    console_error_panic_hook::set_once();

    // Settings are rendered into the head by the server shell
    let settings = SiteSettings::from_meta(|name| {
        leptos::prelude::document()
            .query_selector(&format!("meta[name=\"{}\"]", name))
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"))
    });

    leptos::mount::hydrate_body(move || {
        leptos::prelude::provide_context(settings);
        App()
    });
}
