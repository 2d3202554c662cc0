//! HTTP server: one route per page, the contact form endpoint, and static
//! files as the fallback.

use std::path::Path;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post, MethodRouter};
use axum::{Form, Router};
use garage_cowboy_content::{ContentAccessor, ContentRegistry, SiteDetails};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::components::ContactFormState;
use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::pages::{render_page, CategoryFilter, PageView, SitePage};

/// Form field naming the page a submission came from.
const PAGE_FIELD: &str = "page";

#[derive(Clone)]
pub struct AppState {
    pub accessor: ContentAccessor,
    pub site: Arc<SiteDetails>,
}

impl AppState {
    pub fn new(registry: ContentRegistry) -> Self {
        let site = registry.site();
        Self {
            accessor: ContentAccessor::new(Arc::new(registry)),
            site,
        }
    }

    fn respond(&self, page: SitePage, view: &PageView) -> Response {
        self.respond_with(StatusCode::OK, page, view)
    }

    /// Render `page` with `status`, unless its content fails to load.
    fn respond_with(&self, status: StatusCode, page: SitePage, view: &PageView) -> Response {
        let rendered = render_page(&self.accessor, &self.site, page, view);
        let status = if rendered.error.is_some() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            status
        };
        (status, Html(rendered.markup.into_string())).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct ServicesQuery {
    pub category: Option<String>,
}

async fn health() -> &'static str {
    "OK"
}

fn page_route(page: SitePage) -> MethodRouter<AppState> {
    get(move |State(state): State<AppState>| async move {
        state.respond(page, &PageView::default())
    })
}

async fn services(
    State(state): State<AppState>,
    Query(query): Query<ServicesQuery>,
) -> Response {
    let view = PageView {
        category: CategoryFilter::from_query(query.category.as_deref()),
        ..PageView::default()
    };
    state.respond(SitePage::Services, &view)
}

/// Log the submission and send the visitor back to the form they used.
///
/// A submission missing required fields is not logged; the page comes back
/// with the form echoing what was entered.
async fn contact(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let posted = fields
        .iter()
        .find(|(name, _)| name == PAGE_FIELD)
        .map(|(_, value)| value.clone())
        .filter(|path| SitePage::from_path(path).is_some());

    let submission =
        ContactFormState::from_pairs(fields.into_iter().filter(|(name, _)| name != PAGE_FIELD));

    let page = posted.as_deref().and_then(SitePage::from_path);
    if let Some(page) = page.filter(|page| page.has_contact_form()) {
        let missing = submission.missing_required();
        if !missing.is_empty() {
            tracing::info!(page = page.path(), ?missing, "contact form incomplete");
            let view = PageView {
                form: submission,
                ..PageView::default()
            };
            return state.respond_with(StatusCode::UNPROCESSABLE_ENTITY, page, &view);
        }
    }

    submission.submit();
    let target = posted.map_or_else(|| "/".to_string(), |path| format!("{path}#contact"));
    Redirect::to(&target).into_response()
}

pub fn router(state: AppState, static_dir: &Path) -> Router {
    let mut app = Router::new()
        .route("/", page_route(SitePage::About))
        .route("/health", get(health))
        .route("/contact", post(contact));

    for page in SitePage::all() {
        app = match page {
            SitePage::Services => app.route(page.path(), get(services)),
            _ => app.route(page.path(), page_route(page)),
        };
    }

    app.with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}

/// Load content per `config` and serve until the server stops.
pub async fn serve(config: &SiteConfig) -> Result<()> {
    let state = AppState::new(config.load_registry()?);
    let content = state.accessor.source_name().to_string();
    let app = router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(SiteError::Server)?;
    tracing::info!(%content, "listening on {}", config.addr);

    axum::serve(listener, app).await.map_err(SiteError::Server)
}
