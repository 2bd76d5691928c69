//! Backend location.
//!
//! The base URL comes from the `BACKEND_URL` environment variable (usually via
//! `.env`) and falls back to a backend on localhost.

use crate::errors::{Error, Result};
use reqwest::Url;

/// Environment variable holding the backend base URL
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Used when nothing else is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Reads `BACKEND_URL` from the environment.
///
/// # Errors
/// Returns `Error::EnvVar` if the variable is set but is not valid unicode.
pub fn backend_url_from_env() -> Result<Option<String>> {
    match std::env::var(BACKEND_URL_VAR) {
        Ok(url) if url.trim().is_empty() => Ok(None),
        Ok(url) => Ok(Some(url)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Checks that `raw` is an absolute http(s) URL and strips trailing slashes,
/// so paths can be appended with a plain `format!`.
///
/// # Errors
/// Returns `Error::Config` for unparsable URLs or non-http schemes.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| Error::Config {
        message: format!("Invalid backend URL '{raw}': {e}"),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config {
            message: format!(
                "Backend URL '{raw}' must use http or https, not {}",
                url.scheme()
            ),
        });
    }

    Ok(trimmed.to_string())
}
