//! Static file serving for the browser front end
//!
//! Files under the public directory are served from `/`, so
//! `public/index.html` answers `GET /index.html` and `GET /`.

use std::path::Path;

use tower_http::services::ServeDir;

/// Service for the router fallback
pub fn service(public_dir: &Path) -> ServeDir {
    tracing::info!(path = %public_dir.display(), "Serving static files from /");
    ServeDir::new(public_dir)
}
