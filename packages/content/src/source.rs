//! String-keyed content sources.
//!
//! The accessor looks content up by path rather than by [`PageKey`](crate::PageKey)
//! so that a source with an open key space (a directory, a remote CMS) can
//! sit behind the same call. [`ContentRegistry`](crate::ContentRegistry) is
//! the source used by the site; its key space is closed, so only paths
//! outside the closed set miss.

use crate::pages::PageContent;

/// A provider of page content addressed by path.
pub trait ContentSource: Send + Sync {
    /// Name of this source, for diagnostics.
    fn name(&self) -> &str;

    /// Look up the content bound to `path`.
    ///
    /// Returns `None` when nothing is bound to the path.
    fn lookup(&self, path: &str) -> Option<PageContent>;
}
