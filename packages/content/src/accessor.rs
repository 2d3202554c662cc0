//! The content accessor and its `{data, loading, error}` result.
//!
//! Lookups against the registry are synchronous and cannot fail for a valid
//! [`PageKey`](crate::PageKey), so every state returned here is already
//! settled. The pending state and the error slot exist so callers are
//! written against a contract that an asynchronous or remote source can
//! also satisfy.

use std::sync::Arc;

use crate::error::{ContentError, Result};
use crate::pages::{PageContent, PageSchema};
use crate::source::ContentSource;

/// Outcome of a content load.
#[derive(Debug)]
pub struct ContentState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<ContentError>,
}

impl<T> ContentState<T> {
    /// A load that has started and not finished.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    /// Finish the load for `path` with `result`.
    ///
    /// On failure `data` is cleared, the error is kept, and the failure is
    /// logged. Nothing is retried.
    pub fn settle(&mut self, path: &str, result: Result<T>) {
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => {
                tracing::error!(path, error = %err, "error loading content");
                self.data = None;
                self.error = Some(err);
            }
        }
        self.loading = false;
    }

    /// True once loading finished with data.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.loading && self.data.is_some()
    }

    /// The loaded data, if the load finished successfully.
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        if self.is_ready() {
            self.data.as_ref()
        } else {
            None
        }
    }
}

impl<T> Default for ContentState<T> {
    fn default() -> Self {
        Self::pending()
    }
}

/// Loads page content from a [`ContentSource`].
#[derive(Clone)]
pub struct ContentAccessor {
    source: Arc<dyn ContentSource>,
}

impl ContentAccessor {
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Name of the underlying source.
    #[must_use]
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Load the content for schema `T` by its page key.
    ///
    /// Fails with `NotFound` if the source has nothing for the key, and
    /// with `SchemaMismatch` if it answers with another page's content.
    #[must_use]
    pub fn use_content<T: PageSchema>(&self) -> ContentState<Arc<T>> {
        let path = T::KEY.as_ref();
        let mut state = ContentState::pending();
        let result = self.fetch(path).and_then(|page| {
            T::from_page(page).ok_or_else(|| ContentError::SchemaMismatch {
                path: path.to_string(),
                expected: T::KEY,
            })
        });
        state.settle(path, result);
        state
    }

    /// Load whatever content is bound to a string path.
    #[must_use]
    pub fn use_content_path(&self, path: &str) -> ContentState<PageContent> {
        let mut state = ContentState::pending();
        let result = self.fetch(path);
        state.settle(path, result);
        state
    }

    fn fetch(&self, path: &str) -> Result<PageContent> {
        self.source
            .lookup(path)
            .ok_or_else(|| ContentError::NotFound(path.to_string()))
    }
}

impl std::fmt::Debug for ContentAccessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentAccessor")
            .field("source", &self.source.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::PageKey;
    use crate::pages::{AboutUsContent, ServicesPageContent};
    use crate::registry::ContentRegistry;

    /// Source that knows a single path.
    struct SinglePathSource {
        path: &'static str,
        page: PageContent,
    }

    impl ContentSource for SinglePathSource {
        fn name(&self) -> &str {
            "single"
        }

        fn lookup(&self, path: &str) -> Option<PageContent> {
            (path == self.path).then(|| self.page.clone())
        }
    }

    fn builtin_accessor() -> ContentAccessor {
        ContentAccessor::new(Arc::new(ContentRegistry::builtin().unwrap()))
    }

    #[test]
    fn test_pending_state() {
        let state: ContentState<()> = ContentState::pending();
        assert!(state.loading);
        assert!(state.data.is_none());
        assert!(state.error.is_none());
        assert!(!state.is_ready());
        assert!(state.ready().is_none());
    }

    #[test]
    fn test_settle_ok() {
        let mut state = ContentState::pending();
        state.settle("about-us", Ok(7));
        assert!(!state.loading);
        assert_eq!(state.data, Some(7));
        assert!(state.error.is_none());
        assert_eq!(state.ready(), Some(&7));
    }

    #[test]
    fn test_settle_err_clears_data() {
        let mut state = ContentState::pending();
        state.settle("x", Ok(1));
        state.settle("x", Err(ContentError::NotFound("x".to_string())));
        assert!(!state.loading);
        assert!(state.data.is_none());
        assert!(matches!(state.error, Some(ContentError::NotFound(_))));
    }

    #[test]
    fn test_use_content_every_key_settles_with_data() {
        let accessor = builtin_accessor();
        for key in PageKey::all() {
            let state = accessor.use_content_path(key.as_ref());
            assert!(!state.loading, "{key} still loading");
            assert!(state.error.is_none(), "{key} has error");
            assert_eq!(state.data.map(|page| page.key()), Some(key));
        }
    }

    #[test]
    fn test_use_content_typed() {
        let state = builtin_accessor().use_content::<AboutUsContent>();
        assert!(state.is_ready());
        assert_eq!(state.data.unwrap().team.members.len(), 4);
    }

    #[test]
    fn test_use_content_path_unknown() {
        let state = builtin_accessor().use_content_path("blog-page");
        assert!(!state.loading);
        assert!(state.data.is_none());
        let err = state.error.unwrap();
        assert_eq!(err.to_string(), "Content not found for path: blog-page");
    }

    #[test]
    fn test_use_content_missing_from_source() {
        let registry = ContentRegistry::builtin().unwrap();
        let source = SinglePathSource {
            path: "about-us",
            page: registry.get(PageKey::AboutUs),
        };
        let accessor = ContentAccessor::new(Arc::new(source));

        let state = accessor.use_content::<ServicesPageContent>();
        assert!(state.data.is_none());
        assert!(matches!(state.error, Some(ContentError::NotFound(ref p)) if p == "services-page"));
    }

    #[test]
    fn test_use_content_schema_mismatch() {
        let registry = ContentRegistry::builtin().unwrap();
        let source = SinglePathSource {
            path: "services-page",
            page: registry.get(PageKey::AboutUs),
        };
        let accessor = ContentAccessor::new(Arc::new(source));

        let state = accessor.use_content::<ServicesPageContent>();
        assert!(state.data.is_none());
        assert!(matches!(
            state.error,
            Some(ContentError::SchemaMismatch {
                expected: PageKey::ServicesPage,
                ..
            })
        ));
    }

    #[test]
    fn test_source_name() {
        assert_eq!(builtin_accessor().source_name(), "builtin");
    }
}
