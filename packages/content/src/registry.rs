//! The content registry: one typed content object per page key.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::{BUILTIN_SOURCE_NAME, MAX_DOCUMENT_SIZE, SITE_DOCUMENT};
use crate::error::{ContentError, Result};
use crate::key::PageKey;
use crate::pages::{
    AboutUsContent, CommercialPageContent, PageContent, PageSchema, ResidentialPageContent,
    ServicesPageContent, TexasPageContent,
};
use crate::source::ContentSource;
use crate::types::SiteDetails;

const BUILTIN_SITE: &str = include_str!("../data/site.yaml");
const BUILTIN_ABOUT_US: &str = include_str!("../data/about-us.yaml");
const BUILTIN_SERVICES: &str = include_str!("../data/services-page.yaml");
const BUILTIN_TEXAS: &str = include_str!("../data/texas-page.yaml");
const BUILTIN_RESIDENTIAL: &str = include_str!("../data/residential-page.yaml");
const BUILTIN_COMMERCIAL: &str = include_str!("../data/commercial-page.yaml");

/// Immutable mapping from [`PageKey`] to that page's content.
///
/// Every key has a field, so lookups by key cannot miss. Construction
/// parses and checks all documents up front; there is no way to add,
/// remove or replace an entry afterwards.
#[derive(Debug, Clone)]
pub struct ContentRegistry {
    origin: String,
    pub(crate) site: Arc<SiteDetails>,
    pub(crate) about_us: Arc<AboutUsContent>,
    pub(crate) services: Arc<ServicesPageContent>,
    pub(crate) texas: Arc<TexasPageContent>,
    pub(crate) residential: Arc<ResidentialPageContent>,
    pub(crate) commercial: Arc<CommercialPageContent>,
}

impl ContentRegistry {
    /// Build the registry from the documents compiled into the crate.
    pub fn builtin() -> Result<Self> {
        let registry = Self {
            origin: BUILTIN_SOURCE_NAME.to_string(),
            site: Arc::new(parse_document(SITE_DOCUMENT, BUILTIN_SITE)?),
            about_us: parse_page(BUILTIN_ABOUT_US)?,
            services: parse_page(BUILTIN_SERVICES)?,
            texas: parse_page(BUILTIN_TEXAS)?,
            residential: parse_page(BUILTIN_RESIDENTIAL)?,
            commercial: parse_page(BUILTIN_COMMERCIAL)?,
        };
        tracing::debug!(origin = %registry.origin, "content registry built");
        Ok(registry)
    }

    /// Build the registry from a directory holding `site.yaml` and one
    /// `<page-key>.yaml` per page.
    ///
    /// # Errors
    /// Fails if any document is missing, too large, malformed, or repeats
    /// an id within a list.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let site_text = read_document(dir, SITE_DOCUMENT)?;
        let registry = Self {
            origin: dir.display().to_string(),
            site: Arc::new(parse_document(SITE_DOCUMENT, &site_text)?),
            about_us: load_page(dir)?,
            services: load_page(dir)?,
            texas: load_page(dir)?,
            residential: load_page(dir)?,
            commercial: load_page(dir)?,
        };
        tracing::debug!(origin = %registry.origin, "content registry built");
        Ok(registry)
    }

    /// Where the content came from: `builtin` or the directory path.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Site-wide business details.
    #[must_use]
    pub fn site(&self) -> Arc<SiteDetails> {
        Arc::clone(&self.site)
    }

    /// Content bound to `key`.
    #[must_use]
    pub fn get(&self, key: PageKey) -> PageContent {
        match key {
            PageKey::AboutUs => PageContent::AboutUs(self.page()),
            PageKey::ServicesPage => PageContent::Services(self.page()),
            PageKey::TexasPage => PageContent::Texas(self.page()),
            PageKey::ResidentialPage => PageContent::Residential(self.page()),
            PageKey::CommercialPage => PageContent::Commercial(self.page()),
        }
    }

    /// Typed content for schema `T`.
    #[must_use]
    pub fn page<T: PageSchema>(&self) -> Arc<T> {
        T::select(self)
    }
}

impl ContentSource for ContentRegistry {
    fn name(&self) -> &str {
        &self.origin
    }

    fn lookup(&self, path: &str) -> Option<PageContent> {
        PageKey::parse(path).ok().map(|key| self.get(key))
    }
}

fn load_page<T: PageSchema>(dir: &Path) -> Result<Arc<T>> {
    let text = read_document(dir, &T::KEY.document_name())?;
    parse_page(&text)
}

fn parse_page<T: PageSchema>(text: &str) -> Result<Arc<T>> {
    let content: T = parse_document(&T::KEY.document_name(), text)?;
    content.check_ids()?;
    Ok(Arc::new(content))
}

fn read_document(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    fs::read_to_string(&path).map_err(|source| ContentError::Io { path, source })
}

fn parse_document<T: DeserializeOwned>(name: &str, text: &str) -> Result<T> {
    if text.len() > MAX_DOCUMENT_SIZE {
        return Err(ContentError::DocumentTooLarge {
            name: name.to_string(),
            size: text.len(),
            limit: MAX_DOCUMENT_SIZE,
        });
    }
    serde_yaml_ng::from_str(text).map_err(|source| ContentError::Yaml {
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_builds() {
        let registry = ContentRegistry::builtin().unwrap();
        assert_eq!(registry.origin(), "builtin");
        assert_eq!(registry.site().phone, "(871) 256-0122");
    }

    #[test]
    fn test_get_is_total() {
        let registry = ContentRegistry::builtin().unwrap();
        for key in PageKey::all() {
            assert_eq!(registry.get(key).key(), key);
        }
    }

    #[test]
    fn test_typed_page_matches_get() {
        let registry = ContentRegistry::builtin().unwrap();
        let typed = registry.page::<TexasPageContent>();
        assert_eq!(registry.get(PageKey::TexasPage), PageContent::Texas(typed));
    }

    #[test]
    fn test_lookup_by_path() {
        let registry = ContentRegistry::builtin().unwrap();
        assert!(registry.lookup("commercial-page").is_some());
        assert!(registry.lookup("commercial").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn test_parse_document_rejects_oversized() {
        let text = "a".repeat(MAX_DOCUMENT_SIZE + 1);
        let err = parse_document::<SiteDetails>("site.yaml", &text).unwrap_err();
        assert!(matches!(err, ContentError::DocumentTooLarge { .. }));
    }

    #[test]
    fn test_parse_page_rejects_missing_field() {
        let err = parse_page::<ServicesPageContent>("hero:\n  headline: x\n").unwrap_err();
        match err {
            ContentError::Yaml { name, .. } => assert_eq!(name, "services-page.yaml"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
