//! Garage Cowboy content
//!
//! Typed page content for the Garage Cowboy site. This library provides:
//! - A closed set of page keys and one schema per page
//! - An immutable registry built from YAML documents, compiled in or read
//!   from a directory
//! - A content accessor that reports `{data, loading, error}` for a lookup
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use garage_cowboy_content::{AboutUsContent, ContentAccessor, ContentRegistry};
//!
//! let registry = ContentRegistry::builtin()?;
//! let accessor = ContentAccessor::new(Arc::new(registry));
//!
//! let state = accessor.use_content::<AboutUsContent>();
//! assert!(!state.loading);
//! assert_eq!(state.data.map(|about| about.team.members.len()), Some(4));
//! # Ok::<(), garage_cowboy_content::ContentError>(())
//! ```

pub mod accessor;
pub mod config;
pub mod error;
pub mod key;
pub mod pages;
pub mod registry;
pub mod source;
pub mod types;

// Re-export commonly used items
pub use accessor::{ContentAccessor, ContentState};
pub use error::{ContentError, Result};
pub use key::PageKey;
pub use pages::{
    AboutUsContent, CommercialPageContent, PageContent, PageSchema, ResidentialPageContent,
    ServicesPageContent, TexasPageContent,
};
pub use registry::ContentRegistry;
pub use source::ContentSource;
pub use types::{
    Certification, CertificationSection, EmergencyBadge, HeroContent, IconCard, ReasonsSection,
    Service, ServiceSection, SiteDetails, SocialLink, Stat, Testimonial, Warranty,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
