//! Garage Cowboy site
//!
//! Renders the Garage Cowboy marketing pages from the content registry.
//! This library provides:
//! - Layout components (header, navigation, footer, contact form)
//! - One renderer per page, plus the Services category filter
//! - An axum server and a static HTML export

pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod pages;
pub mod server;

// Re-export commonly used items
pub use components::{ContactField, ContactFormState, NavItem};
pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use export::export_site;
pub use pages::{render_page, CategoryFilter, PageView, RenderedPage, SitePage};
pub use server::{router, serve, AppState};
