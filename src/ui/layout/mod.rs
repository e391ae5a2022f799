//! Page chrome and shared layout blocks

pub mod bento;
pub mod button;
pub mod footer;
pub mod nav;

pub use bento::BentoGrid;
pub use button::{ButtonSize, ButtonVariant, LinkButton};
pub use footer::Footer;
pub use nav::Navigation;
