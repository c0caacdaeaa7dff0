//! Post-login navigation target
//!
//! `next` and `redirect` query values come from the browser, so only
//! same-origin absolute paths are honoured.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NextPath(String);

impl NextPath {
    /// Fallback target
    pub const ROOT: &'static str = "/";

    /// Accept `raw` if it is a local absolute path, otherwise fall back to `/`
    pub fn sanitize(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(path) if Self::is_local(path) => Self(path.to_string()),
            Some(path) => {
                tracing::debug!(path, "Rejected non-local next path");
                Self::root()
            }
            None => Self::root(),
        }
    }

    pub fn root() -> Self {
        Self(Self::ROOT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_local(path: &str) -> bool {
        path.starts_with('/')
            && !path.starts_with("//")
            && !path.starts_with("/\\")
            && !path.chars().any(char::is_control)
    }
}

impl fmt::Display for NextPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
