pub mod contact_form;
pub mod dom;
pub mod icon;
pub mod interaction;
pub mod layout;
pub mod motion;
pub mod pages;

pub use contact_form::ContactForm;
pub use icon::Icon;
pub use interaction::CustomCursor;
pub use layout::{Footer, Navigation};
