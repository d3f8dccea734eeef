//! Mapping of request paths onto files beneath the document root.

use std::path::{Path, PathBuf};

use log::warn;

use crate::server::error::Error;

/// Document served for `/`.
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Content type used when the extension is unknown.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Resolves request paths to regular files confined to a document root.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    /// Create a resolver for `root`, which must exist.
    ///
    /// The root is canonicalized once here; every resolved path is checked against
    /// this canonical form.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self, Error> {
        let root = tokio::fs::canonicalize(root.as_ref()).await?;
        Ok(Self { root })
    }

    /// The canonical document root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a request path (without query string) to a file.
    ///
    /// # Returns
    ///
    /// The canonical path of an existing regular file inside the root,
    /// [`Error::Forbidden`] if the path escapes the root, or [`Error::NotFound`].
    pub async fn resolve(&self, request_path: &str) -> Result<PathBuf, Error> {
        let not_found = || Error::NotFound(request_path.to_string());

        let decoded = urlencoding::decode(request_path).map_err(|_| not_found())?;
        let relative = match &*decoded {
            "/" => DEFAULT_DOCUMENT,
            path => path.strip_prefix('/').unwrap_or(path),
        };

        let candidate = self.root.join(relative);
        let canonical = tokio::fs::canonicalize(&candidate)
            .await
            .map_err(|_| not_found())?;

        if !canonical.starts_with(&self.root) {
            warn!(
                "Rejected {request_path}: resolves to {resolved} outside {root}",
                resolved = canonical.display(),
                root = self.root.display()
            );
            return Err(Error::Forbidden(request_path.to_string()));
        }

        match tokio::fs::metadata(&canonical).await {
            Ok(meta) if meta.is_file() => Ok(canonical),
            _ => Err(not_found()),
        }
    }
}

/// Guess the content type of `path` from its extension.
pub fn content_type_for(path: &Path) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_CONTENT_TYPE)
}
