//! Routed pages
//!
//! Every page sets its own head through [`PageHead`]; the navigation bar,
//! footer and cursor overlay are mounted once by the app shell.

mod about;
mod contact;
mod head;
mod home;
mod legal;
mod not_found;
mod product;
mod sections;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use head::PageHead;
pub use home::HomePage;
pub use legal::{PrivacyPage, TermsPage};
pub use not_found::NotFoundPage;
pub use product::ProductPage;
