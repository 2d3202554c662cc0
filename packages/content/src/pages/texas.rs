//! Texas service-area page schema.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{ensure_unique_ids, PageContent, PageSchema};
use crate::error::Result;
use crate::key::PageKey;
use crate::registry::ContentRegistry;
use crate::types::{HeroContent, ReasonsSection, Stat, Testimonial};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TexasPageContent {
    pub hero: HeroContent,
    pub coverage: Coverage,
    pub service_areas: ServiceAreas,
    pub map: MapSection,
    pub why_choose_us: ReasonsSection,
    pub testimonials: TestimonialSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAreas {
    pub title: String,
    pub description: String,
    pub primary_cities: PrimaryCities,
    pub additional_cities: AdditionalCities,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryCities {
    pub title: String,
    pub cities: Vec<PrimaryCity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryCity {
    pub id: String,
    pub name: String,
    pub county: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalCities {
    pub title: String,
    pub cities: Vec<City>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
}

/// Embedded map. The URL goes straight into an iframe `src`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSection {
    pub title: String,
    pub embed_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialSection {
    pub title: String,
    pub items: Vec<Testimonial>,
}

impl PageSchema for TexasPageContent {
    const KEY: PageKey = PageKey::TexasPage;

    fn select(registry: &ContentRegistry) -> Arc<Self> {
        Arc::clone(&registry.texas)
    }

    fn from_page(page: PageContent) -> Option<Arc<Self>> {
        match page {
            PageContent::Texas(content) => Some(content),
            _ => None,
        }
    }

    fn check_ids(&self) -> Result<()> {
        ensure_unique_ids(
            Self::KEY,
            "coverage.stats",
            self.coverage.stats.iter().map(|s| s.id.as_str()),
        )?;
        ensure_unique_ids(
            Self::KEY,
            "serviceAreas.primaryCities",
            self.service_areas
                .primary_cities
                .cities
                .iter()
                .map(|c| c.id.as_str()),
        )?;
        ensure_unique_ids(
            Self::KEY,
            "serviceAreas.additionalCities",
            self.service_areas
                .additional_cities
                .cities
                .iter()
                .map(|c| c.id.as_str()),
        )?;
        ensure_unique_ids(
            Self::KEY,
            "whyChooseUs.reasons",
            self.why_choose_us.reasons.iter().map(|r| r.id.as_str()),
        )?;
        ensure_unique_ids(
            Self::KEY,
            "testimonials.items",
            self.testimonials.items.iter().map(|t| t.id.as_str()),
        )
    }
}
