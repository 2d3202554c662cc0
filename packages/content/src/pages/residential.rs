//! Residential page schema.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{ensure_unique_ids, PageContent, PageSchema};
use crate::error::Result;
use crate::key::PageKey;
use crate::registry::ContentRegistry;
use crate::types::{HeroContent, IconCard, ServiceSection, Warranty};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidentialPageContent {
    pub hero: HeroContent,
    pub benefits: Vec<IconCard>,
    pub services: ServiceSection,
    pub problems: ProblemSection,
    pub gallery: Gallery,
    pub tips: TipSection,
    pub warranty: Warranty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemSection {
    pub title: String,
    pub items: Vec<Problem>,
}

/// A common fault and how it gets fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub icon: String,
    pub issue: String,
    pub description: String,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    pub title: String,
    pub items: Vec<GalleryItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub before_image: String,
    pub after_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipSection {
    pub title: String,
    pub items: Vec<Tip>,
}

/// Homeowner tip. The id doubles as the number shown in its badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl PageSchema for ResidentialPageContent {
    const KEY: PageKey = PageKey::ResidentialPage;

    fn select(registry: &ContentRegistry) -> Arc<Self> {
        Arc::clone(&registry.residential)
    }

    fn from_page(page: PageContent) -> Option<Arc<Self>> {
        match page {
            PageContent::Residential(content) => Some(content),
            _ => None,
        }
    }

    fn check_ids(&self) -> Result<()> {
        ensure_unique_ids(
            Self::KEY,
            "benefits",
            self.benefits.iter().map(|b| b.id.as_str()),
        )?;
        ensure_unique_ids(
            Self::KEY,
            "services.items",
            self.services.items.iter().map(|s| s.id.as_str()),
        )?;
        ensure_unique_ids(
            Self::KEY,
            "problems.items",
            self.problems.items.iter().map(|p| p.id.as_str()),
        )?;
        ensure_unique_ids(
            Self::KEY,
            "gallery.items",
            self.gallery.items.iter().map(|g| g.id.as_str()),
        )?;
        ensure_unique_ids(
            Self::KEY,
            "tips.items",
            self.tips.items.iter().map(|t| t.id.as_str()),
        )
    }
}
