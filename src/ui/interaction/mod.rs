//! Pointer driven effects

pub mod cursor;
pub mod hero_background;
pub mod magnetic;

pub use cursor::CustomCursor;
pub use hero_background::HeroBackground;
pub use magnetic::{MagneticButton, MagneticSubmitButton};
