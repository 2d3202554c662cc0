//! Services page schema.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{ensure_unique_ids, PageContent, PageSchema};
use crate::error::Result;
use crate::key::PageKey;
use crate::registry::ContentRegistry;
use crate::types::{HeroContent, Service, Warranty};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesPageContent {
    pub hero: HeroContent,
    pub categories: Vec<ServiceCategory>,
    pub services: Vec<Service>,
    pub emergency: EmergencyBanner,
    pub process: ProcessSection,
    pub warranty: Warranty,
}

/// A filter category. Services reference it through [`Service::category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyBanner {
    pub title: String,
    pub description: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSection {
    pub title: String,
    pub steps: Vec<ProcessStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl PageSchema for ServicesPageContent {
    const KEY: PageKey = PageKey::ServicesPage;

    fn select(registry: &ContentRegistry) -> Arc<Self> {
        Arc::clone(&registry.services)
    }

    fn from_page(page: PageContent) -> Option<Arc<Self>> {
        match page {
            PageContent::Services(content) => Some(content),
            _ => None,
        }
    }

    fn check_ids(&self) -> Result<()> {
        ensure_unique_ids(
            Self::KEY,
            "categories",
            self.categories.iter().map(|c| c.id.as_str()),
        )?;
        ensure_unique_ids(
            Self::KEY,
            "services",
            self.services.iter().map(|s| s.id.as_str()),
        )?;
        ensure_unique_ids(
            Self::KEY,
            "process.steps",
            self.process.steps.iter().map(|s| s.id.as_str()),
        )
    }
}
