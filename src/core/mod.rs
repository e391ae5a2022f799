//! Target-independent state machines, math and content for the Arc site

#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod content;
pub mod counter;
pub mod cursor;
pub mod easing;
pub mod icon;
pub mod magnetic;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod routes;
pub mod seo;
pub mod settings;
pub mod split_text;
#[cfg(test)]
mod tests;

pub use icon::IconId;
pub use routes::Route;
pub use settings::SiteSettings;
