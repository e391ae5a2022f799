//! Scroll and mount driven animations

pub mod counter;
pub mod parallax;
pub mod reveal;
pub mod split_text;

pub use counter::AnimatedCounter;
pub use parallax::HeroParallax;
pub use reveal::Reveal;
pub use split_text::SplitText;
