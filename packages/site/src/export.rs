//! Static export: every page written as `index.html` files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use garage_cowboy_content::{ContentAccessor, ContentRegistry};

use crate::error::{Result, SiteError};
use crate::pages::{render_page, PageView, SitePage};

/// Render every page into `output_dir` and return the written paths.
///
/// The site root (`index.html`) holds the About Us page, and each page also
/// gets `<slug>/index.html`. `output_dir` must already exist.
///
/// # Errors
/// Fails if `output_dir` is not an existing directory, a page's content
/// fails to load, or a file cannot be written.
pub fn export_site(registry: &ContentRegistry, output_dir: &Path) -> Result<Vec<PathBuf>> {
    if !output_dir.is_dir() {
        return Err(SiteError::Io {
            path: output_dir.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "output directory does not exist",
            ),
        });
    }

    let site = registry.site();
    let accessor = ContentAccessor::new(Arc::new(registry.clone()));
    let view = PageView::default();

    let mut targets = vec![(SitePage::About, output_dir.join("index.html"))];
    targets.extend(
        SitePage::all().map(|page| (page, output_dir.join(page.slug()).join("index.html"))),
    );

    let mut written = Vec::with_capacity(targets.len());
    for (page, path) in targets {
        let rendered = render_page(&accessor, &site, page, &view);
        if let Some(err) = rendered.error {
            return Err(err.into());
        }
        write_file(&path, &rendered.markup.into_string())?;
        tracing::info!(path = %path.display(), "exported page");
        written.push(path);
    }

    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| SiteError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    })
}
