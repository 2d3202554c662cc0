//! About Us page schema.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{ensure_unique_ids, PageContent, PageSchema};
use crate::error::Result;
use crate::key::PageKey;
use crate::registry::ContentRegistry;
use crate::types::{CertificationSection, HeroContent, IconCard};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutUsContent {
    pub hero: HeroContent,
    pub story: Story,
    pub values: ValuesSection,
    pub team: TeamSection,
    pub certifications: CertificationSection,
    pub cta: CallToAction,
}

/// Company story: a heading, body paragraphs and one picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub image: String,
    pub image_alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuesSection {
    pub title: String,
    pub items: Vec<IconCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSection {
    pub title: String,
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub photo: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    pub title: String,
    pub subtitle: String,
    pub phone: String,
    pub button_text: String,
}

impl PageSchema for AboutUsContent {
    const KEY: PageKey = PageKey::AboutUs;

    fn select(registry: &ContentRegistry) -> Arc<Self> {
        Arc::clone(&registry.about_us)
    }

    fn from_page(page: PageContent) -> Option<Arc<Self>> {
        match page {
            PageContent::AboutUs(content) => Some(content),
            _ => None,
        }
    }

    fn check_ids(&self) -> Result<()> {
        ensure_unique_ids(
            Self::KEY,
            "values.items",
            self.values.items.iter().map(|v| v.id.as_str()),
        )?;
        ensure_unique_ids(
            Self::KEY,
            "team.members",
            self.team.members.iter().map(|m| m.id.as_str()),
        )?;
        ensure_unique_ids(
            Self::KEY,
            "certifications.items",
            self.certifications.items.iter().map(|c| c.id.as_str()),
        )
    }
}
