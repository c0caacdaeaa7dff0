//! Request Gate
//!
//! Pure decision from (path, stored session) to continue or redirect.
//! No state, no I/O; the middleware only reads cookies and applies the result.

use crate::application::config::AuthConfig;
use crate::application::redirects::{home_with_error, login_for_path};
use crate::domain::entity::StoredSession;
use crate::domain::route_policy::RouteClass;
use crate::domain::value_object::RedirectError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Continue,
    Redirect {
        location: String,
        reason: Option<RedirectError>,
    },
}

impl GateDecision {
    fn redirect(location: String, reason: Option<RedirectError>) -> Self {
        GateDecision::Redirect { location, reason }
    }
}

pub struct RequestGate<'a> {
    config: &'a AuthConfig,
}

impl<'a> RequestGate<'a> {
    pub fn new(config: &'a AuthConfig) -> Self {
        Self { config }
    }

    pub fn decide(&self, path: &str, stored: &StoredSession) -> GateDecision {
        let class = self.config.routes.classify(path);

        // No session lookup for API, asset, or public paths
        if matches!(class, RouteClass::Api | RouteClass::Asset | RouteClass::Public) {
            return GateDecision::Continue;
        }

        let role = self.config.admin_policy().resolve_stored(stored);

        match (class, role) {
            (RouteClass::AdminOnly, None) => GateDecision::redirect(
                login_for_path(self.config, path, Some(RedirectError::AdminRequired)),
                Some(RedirectError::AdminRequired),
            ),
            (RouteClass::AdminOnly, Some(role)) if !role.is_admin() => GateDecision::redirect(
                home_with_error(self.config, RedirectError::AdminOnly),
                Some(RedirectError::AdminOnly),
            ),
            (RouteClass::Protected, None) => {
                GateDecision::redirect(login_for_path(self.config, path, None), None)
            }
            (RouteClass::AuthPage, Some(_)) => {
                GateDecision::redirect(self.config.home_path.clone(), None)
            }
            _ => GateDecision::Continue,
        }
    }
}
