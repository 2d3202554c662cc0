//! The closed set of page keys.

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{ContentError, Result};

/// Identifies which page's content object to load.
///
/// The string form (`about-us`, `services-page`, ...) is the content path
/// used by [`ContentSource`](crate::ContentSource) lookups and the stem of
/// the document file name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum PageKey {
    AboutUs,
    ServicesPage,
    TexasPage,
    ResidentialPage,
    CommercialPage,
}

impl PageKey {
    /// Parse a content path into a key.
    ///
    /// # Examples
    /// ```
    /// use garage_cowboy_content::PageKey;
    ///
    /// assert_eq!(PageKey::parse("texas-page").unwrap(), PageKey::TexasPage);
    /// assert!(PageKey::parse("blog").is_err());
    /// ```
    pub fn parse(path: &str) -> Result<Self> {
        path.parse()
            .map_err(|_| ContentError::UnknownPageKey(path.to_string()))
    }

    /// All keys, in registry order.
    pub fn all() -> impl Iterator<Item = PageKey> {
        Self::iter()
    }

    /// File name of the YAML document holding this page's content.
    #[must_use]
    pub fn document_name(&self) -> String {
        format!("{}.yaml", self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_forms() {
        assert_eq!(PageKey::AboutUs.as_ref(), "about-us");
        assert_eq!(PageKey::ServicesPage.to_string(), "services-page");
        assert_eq!(PageKey::CommercialPage.document_name(), "commercial-page.yaml");
    }

    #[test]
    fn test_parse_round_trips_every_key() {
        for key in PageKey::all() {
            assert_eq!(PageKey::parse(key.as_ref()).unwrap(), key);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = PageKey::parse("About-Us").unwrap_err();
        assert!(matches!(err, ContentError::UnknownPageKey(ref p) if p == "About-Us"));
    }

    #[test]
    fn test_closed_set_size() {
        assert_eq!(PageKey::all().count(), 5);
    }
}
