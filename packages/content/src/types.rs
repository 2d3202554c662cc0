//! Content types shared between several page schemas.
//!
//! Field names follow the camelCase keys used in the content documents.

use serde::{Deserialize, Serialize};

/// Hero banner at the top of every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub headline: String,
    #[serde(default)]
    pub subheadline: Option<String>,
    #[serde(default)]
    pub cta_text: Option<String>,
    /// Telephone number, used verbatim in `tel:` links.
    #[serde(default)]
    pub cta_phone: Option<String>,
    pub background_image: String,
    #[serde(default)]
    pub badge: Option<String>,
}

/// A service offering card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub cta_text: Option<String>,
    #[serde(default)]
    pub cta_link: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub starting_price: Option<String>,
    #[serde(default)]
    pub popular: bool,
}

/// A customer quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Star count, 1 to 5.
    #[serde(default)]
    pub rating: Option<u8>,
    pub verified: bool,
    #[serde(default)]
    pub date: Option<String>,
}

/// Card with an icon, a title and a short description.
///
/// The icon is an image path on some pages and an emoji on others; it is
/// passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconCard {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// A headline figure such as "15+ / Years in Business".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub id: String,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub logo: String,
}

/// A titled list of certifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationSection {
    pub title: String,
    pub items: Vec<Certification>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyBadge {
    pub enabled: bool,
    pub image_url: String,
}

/// Business details shared by the header, navigation and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    pub service_area: String,
    pub logo: String,
    pub copyright: String,
    pub social_links: Vec<SocialLink>,
    pub emergency_badge: EmergencyBadge,
}

/// Warranty or guarantee block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warranty {
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// "Why choose us" section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonsSection {
    pub title: String,
    pub reasons: Vec<IconCard>,
}

/// A titled grid of services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSection {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub items: Vec<Service>,
}
