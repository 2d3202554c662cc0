//! Commercial page schema.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{ensure_unique_ids, PageContent, PageSchema};
use crate::error::Result;
use crate::key::PageKey;
use crate::registry::ContentRegistry;
use crate::types::{CertificationSection, HeroContent, ReasonsSection, ServiceSection, Stat};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommercialPageContent {
    pub hero: HeroContent,
    pub trust_indicators: Vec<Stat>,
    pub industries: IndustrySection,
    pub services: ServiceSection,
    pub why_choose_us: ReasonsSection,
    pub case_studies: CaseStudySection,
    pub maintenance_plans: MaintenancePlans,
    pub certifications: CertificationSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustrySection {
    pub title: String,
    pub description: String,
    pub items: Vec<Industry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudySection {
    pub title: String,
    pub items: Vec<CaseStudy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub industry: String,
    pub image_url: String,
    pub description: String,
    pub challenge: String,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenancePlans {
    pub title: String,
    pub description: String,
    pub plans: Vec<MaintenancePlan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenancePlan {
    pub id: String,
    pub name: String,
    pub price: String,
    /// Billing period shown after the price, e.g. "month".
    pub period: String,
    pub features: Vec<String>,
    pub featured: bool,
}

impl PageSchema for CommercialPageContent {
    const KEY: PageKey = PageKey::CommercialPage;

    fn select(registry: &ContentRegistry) -> Arc<Self> {
        Arc::clone(&registry.commercial)
    }

    fn from_page(page: PageContent) -> Option<Arc<Self>> {
        match page {
            PageContent::Commercial(content) => Some(content),
            _ => None,
        }
    }

    fn check_ids(&self) -> Result<()> {
        ensure_unique_ids(
            Self::KEY,
            "trustIndicators",
            self.trust_indicators.iter().map(|t| t.id.as_str()),
        )?;
        ensure_unique_ids(
            Self::KEY,
            "industries.items",
            self.industries.items.iter().map(|i| i.id.as_str()),
        )?;
        ensure_unique_ids(
            Self::KEY,
            "services.items",
            self.services.items.iter().map(|s| s.id.as_str()),
        )?;
        ensure_unique_ids(
            Self::KEY,
            "whyChooseUs.reasons",
            self.why_choose_us.reasons.iter().map(|r| r.id.as_str()),
        )?;
        ensure_unique_ids(
            Self::KEY,
            "caseStudies.items",
            self.case_studies.items.iter().map(|c| c.id.as_str()),
        )?;
        ensure_unique_ids(
            Self::KEY,
            "maintenancePlans.plans",
            self.maintenance_plans.plans.iter().map(|p| p.id.as_str()),
        )?;
        ensure_unique_ids(
            Self::KEY,
            "certifications.items",
            self.certifications.items.iter().map(|c| c.id.as_str()),
        )
    }
}
