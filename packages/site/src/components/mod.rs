//! Layout components shared by every page.

pub mod contact_form;
pub mod footer;
pub mod header;
pub mod navigation;

pub use contact_form::{contact_form, ContactField, ContactFormState};
pub use footer::footer;
pub use header::header;
pub use navigation::{navigation, NavItem};
