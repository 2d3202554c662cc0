//! Page renderers and the document shell around them.
//!
//! Every renderer is a pure function from a page's content (and, on the
//! Services page, the selected category) to the page body. [`render_page`]
//! loads content through the accessor, picks the loading placeholder or the
//! error notice when there is nothing to show, and wraps the body in the
//! shared header, navigation and footer.

pub mod about;
pub mod commercial;
pub mod residential;
pub mod services;
pub mod texas;

use garage_cowboy_content::{
    AboutUsContent, CommercialPageContent, ContentAccessor, ContentError, ContentState,
    ResidentialPageContent, ServicesPageContent, SiteDetails, TexasPageContent,
};
use maud::{html, Markup, DOCTYPE};
use strum::{EnumIter, IntoEnumIterator};

use crate::components::{footer, header, navigation, ContactFormState, NavItem};

pub use services::CategoryFilter;

/// A routable page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SitePage {
    About,
    Services,
    Texas,
    Residential,
    Commercial,
}

impl SitePage {
    /// Canonical URL path.
    pub fn path(self) -> &'static str {
        self.nav_item().href()
    }

    /// Directory name used by the static export.
    pub fn slug(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    pub fn nav_item(self) -> NavItem {
        match self {
            Self::About => NavItem::About,
            Self::Services => NavItem::Services,
            Self::Texas => NavItem::Texas,
            Self::Residential => NavItem::Residential,
            Self::Commercial => NavItem::Commercial,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::About => "About Us",
            Self::Services => "Services",
            Self::Texas => "Texas Service Areas",
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
        }
    }

    /// Texas, Residential and Commercial end with the contact form.
    pub fn has_contact_form(self) -> bool {
        matches!(self, Self::Texas | Self::Residential | Self::Commercial)
    }

    /// The page served at `path`. The site root serves About Us.
    pub fn from_path(path: &str) -> Option<Self> {
        if path == "/" {
            return Some(Self::About);
        }
        Self::iter().find(|page| page.path() == path)
    }

    pub fn all() -> impl Iterator<Item = SitePage> {
        Self::iter()
    }
}

/// Per-request UI state a renderer may use.
///
/// `form` is empty except when an incomplete submission is sent back.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub category: CategoryFilter,
    pub form: ContactFormState,
}

/// A rendered document, and the content error it shows, if any.
#[derive(Debug)]
pub struct RenderedPage {
    pub markup: Markup,
    pub error: Option<ContentError>,
}

/// Load `page`'s content and render the full document.
pub fn render_page(
    accessor: &ContentAccessor,
    site: &SiteDetails,
    page: SitePage,
    view: &PageView,
) -> RenderedPage {
    let path = page.path();
    let (body, error) = match page {
        SitePage::About => body_for(accessor.use_content::<AboutUsContent>(), |content| {
            about::render(content)
        }),
        SitePage::Services => body_for(accessor.use_content::<ServicesPageContent>(), |content| {
            services::render(content, &view.category)
        }),
        SitePage::Texas => body_for(accessor.use_content::<TexasPageContent>(), |content| {
            texas::render(content, &view.form, path)
        }),
        SitePage::Residential => {
            body_for(accessor.use_content::<ResidentialPageContent>(), |content| {
                residential::render(content, &view.form, path)
            })
        }
        SitePage::Commercial => {
            body_for(accessor.use_content::<CommercialPageContent>(), |content| {
                commercial::render(content, &view.form, path)
            })
        }
    };
    RenderedPage {
        markup: document(site, page.nav_item(), page.title(), body),
        error,
    }
}

/// Pick what a page body shows for a content state.
///
/// An error wins over everything else. Otherwise settled data is rendered
/// and anything else gets the loading placeholder.
fn body_for<T>(
    mut state: ContentState<T>,
    render: impl FnOnce(&T) -> Markup,
) -> (Markup, Option<ContentError>) {
    if let Some(err) = state.error.take() {
        return (error_notice(&err), Some(err));
    }
    match state.ready() {
        Some(content) => (render(content), None),
        None => (loading_placeholder(), None),
    }
}

/// HTML document with the shared layout around `body`.
pub fn document(site: &SiteDetails, active: NavItem, title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (site.name) }
                link rel="stylesheet" href="/styles.css";
            }
            body {
                (header(site))
                (navigation(site, active))
                main { (body) }
                (footer(site))
            }
        }
    }
}

pub fn loading_placeholder() -> Markup {
    html! {
        div.loading role="status" {
            div.loading-spinner {}
            p { "Loading..." }
        }
    }
}

pub fn error_notice(err: &ContentError) -> Markup {
    html! {
        div.content-error role="alert" {
            h1 { "This page is unavailable" }
            p { (err.to_string()) }
        }
    }
}

/// `tel:` link target for a phone number, used verbatim.
pub(crate) fn tel(phone: &str) -> String {
    format!("tel:{phone}")
}

/// Inline `background-image` style for a hero section.
pub(crate) fn background(url: &str) -> String {
    format!("background-image: url('{url}')")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use garage_cowboy_content::{ContentRegistry, ContentSource, PageContent};

    struct EmptySource;

    impl ContentSource for EmptySource {
        fn name(&self) -> &str {
            "empty"
        }

        fn lookup(&self, _path: &str) -> Option<PageContent> {
            None
        }
    }

    fn builtin() -> (ContentAccessor, Arc<SiteDetails>) {
        let registry = Arc::new(ContentRegistry::builtin().unwrap());
        let site = registry.site();
        (ContentAccessor::new(registry), site)
    }

    #[test]
    fn test_paths_and_slugs() {
        assert_eq!(SitePage::About.path(), "/about-us");
        assert_eq!(SitePage::Commercial.slug(), "commercial");
        assert_eq!(SitePage::from_path("/"), Some(SitePage::About));
        assert_eq!(SitePage::from_path("/texas"), Some(SitePage::Texas));
        assert_eq!(SitePage::from_path("/texas/"), None);
        assert_eq!(SitePage::from_path("https://evil.example"), None);
    }

    #[test]
    fn test_contact_form_pages() {
        let with_form: Vec<SitePage> = SitePage::all().filter(|p| p.has_contact_form()).collect();
        assert_eq!(
            with_form,
            vec![SitePage::Texas, SitePage::Residential, SitePage::Commercial]
        );
    }

    #[test]
    fn test_every_page_renders() {
        let (accessor, site) = builtin();
        for page in SitePage::all() {
            let rendered = render_page(&accessor, &site, page, &PageView::default());
            assert!(rendered.error.is_none(), "{page:?} failed");
            let html = rendered.markup.into_string();
            assert!(html.starts_with("<!DOCTYPE html>"));
            assert!(!html.contains("Loading..."), "{page:?} rendered the placeholder");
            assert!(html.contains("site-header"));
            assert!(html.contains("site-footer"));
        }
    }

    #[test]
    fn test_missing_content_renders_error_notice() {
        let site = ContentRegistry::builtin().unwrap().site();
        let accessor = ContentAccessor::new(Arc::new(EmptySource));
        let rendered = render_page(&accessor, &site, SitePage::Texas, &PageView::default());
        assert!(matches!(rendered.error, Some(ContentError::NotFound(_))));
        let html = rendered.markup.into_string();
        assert!(html.contains("This page is unavailable"));
        assert!(html.contains("Content not found for path: texas-page"));
        assert!(html.contains("site-nav"));
    }

    #[test]
    fn test_pending_state_renders_placeholder() {
        let state: ContentState<u8> = ContentState::pending();
        let (body, error) = body_for(state, |_| html! { "content" });
        assert!(error.is_none());
        assert!(body.into_string().contains("Loading..."));
    }

    #[test]
    fn test_unsettled_data_renders_placeholder() {
        let state = ContentState {
            data: Some(1u8),
            loading: true,
            error: None,
        };
        let (body, error) = body_for(state, |_| html! { "content" });
        assert!(error.is_none());
        assert!(body.into_string().contains("Loading..."));
    }
}
