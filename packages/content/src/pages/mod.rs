//! Page content schemas.
//!
//! Each page has its own schema; [`PageContent`] is the tagged union the
//! registry hands out, and [`PageSchema`] ties a schema type to its
//! [`PageKey`].

mod about;
mod commercial;
mod residential;
mod services;
mod texas;

use std::collections::HashSet;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::{ContentError, Result};
use crate::key::PageKey;
use crate::registry::ContentRegistry;

pub use about::{AboutUsContent, CallToAction, Story, TeamMember, TeamSection, ValuesSection};
pub use commercial::{
    CaseStudy, CaseStudySection, CommercialPageContent, Industry, IndustrySection,
    MaintenancePlan, MaintenancePlans,
};
pub use residential::{
    Gallery, GalleryItem, Problem, ProblemSection, ResidentialPageContent, Tip, TipSection,
};
pub use services::{
    EmergencyBanner, ProcessSection, ProcessStep, ServiceCategory, ServicesPageContent,
};
pub use texas::{
    AdditionalCities, City, Coverage, MapSection, PrimaryCities, PrimaryCity, ServiceAreas,
    TestimonialSection, TexasPageContent,
};

/// One page's content object.
#[derive(Debug, Clone, PartialEq)]
pub enum PageContent {
    AboutUs(Arc<AboutUsContent>),
    Services(Arc<ServicesPageContent>),
    Texas(Arc<TexasPageContent>),
    Residential(Arc<ResidentialPageContent>),
    Commercial(Arc<CommercialPageContent>),
}

impl PageContent {
    /// The key this content is bound to.
    #[must_use]
    pub fn key(&self) -> PageKey {
        match self {
            Self::AboutUs(_) => PageKey::AboutUs,
            Self::Services(_) => PageKey::ServicesPage,
            Self::Texas(_) => PageKey::TexasPage,
            Self::Residential(_) => PageKey::ResidentialPage,
            Self::Commercial(_) => PageKey::CommercialPage,
        }
    }
}

/// A page content schema bound to exactly one [`PageKey`].
pub trait PageSchema: DeserializeOwned + Send + Sync + Sized + 'static {
    /// The key whose content has this shape.
    const KEY: PageKey;

    /// Borrow this schema's entry out of the registry.
    fn select(registry: &ContentRegistry) -> Arc<Self>;

    /// Extract typed content, or `None` if the page is another schema.
    fn from_page(page: PageContent) -> Option<Arc<Self>>;

    /// Check that ids are unique within every list of this page.
    fn check_ids(&self) -> Result<()>;
}

/// Fail on the first id that appears twice in `ids`.
pub(crate) fn ensure_unique_ids<'a>(
    page: PageKey,
    list: &str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                page: page.to_string(),
                list: list.to_string(),
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
