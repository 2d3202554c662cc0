//! Configuration constants for content loading.

/// File name of the site-wide details document.
pub const SITE_DOCUMENT: &str = "site.yaml";

/// Maximum size of a single content document in bytes (256 KB).
///
/// The largest page document is a few KB; anything near this limit is
/// almost certainly not a content file.
pub const MAX_DOCUMENT_SIZE: usize = 256 * 1024;

/// Registry name reported for the content compiled into the binary.
pub const BUILTIN_SOURCE_NAME: &str = "builtin";
