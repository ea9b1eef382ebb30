use hyper::body::Bytes;
use std::path::Path;
use tokio::fs;
use tokio::sync::OnceCell;
use tracing::{info, instrument};

/// Placeholder in `app.js` replaced by the public WebSocket URL.
pub const SOCKET_HOST: &str = "SOCKET_HOST";

/// Files served over HTTP, read once at startup.
#[derive(Debug, Clone)]
pub struct StaticResource {
    pub(crate) homepage: Bytes,
    pub(crate) javascript: Bytes,
    pub(crate) css: Bytes,
}

impl StaticResource {
    /// Loads the page assets from `dir` the first time it is called; later
    /// calls return the same instance.
    pub async fn new(dir: &Path, ws_endpoint: &str) -> std::io::Result<&'static StaticResource> {
        STATIC_RESOURCE
            .get_or_try_init(|| Self::load(dir, ws_endpoint))
            .await
    }

    #[instrument]
    pub async fn load(dir: &Path, ws_endpoint: &str) -> std::io::Result<StaticResource> {
        let homepage = fs::read(dir.join("index.html")).await?;
        let javascript = fs::read_to_string(dir.join("app.js")).await?;
        let css = fs::read(dir.join("grid.css")).await?;
        info!(dir = %dir.display(), "Static resources loaded");
        Ok(StaticResource::from_parts(homepage, &javascript, css, ws_endpoint))
    }

    pub fn from_parts(
        homepage: impl Into<Bytes>,
        javascript: &str,
        css: impl Into<Bytes>,
        ws_endpoint: &str,
    ) -> StaticResource {
        StaticResource {
            homepage: homepage.into(),
            javascript: javascript.replace(SOCKET_HOST, ws_endpoint).into(),
            css: css.into(),
        }
    }

    /// Content type and body for a request path.
    pub fn lookup(&self, path: &str) -> Option<(&'static str, Bytes)> {
        match path {
            "/" | "/index.html" => Some(("text/html; charset=utf-8", self.homepage.clone())),
            "/app.js" => Some(("text/javascript; charset=utf-8", self.javascript.clone())),
            "/grid.css" => Some(("text/css; charset=utf-8", self.css.clone())),
            _ => None,
        }
    }
}

static STATIC_RESOURCE: OnceCell<StaticResource> = OnceCell::const_new();
