//! Navigation Gate
//!
//! Runs once per navigation, before the target view renders. Purely a
//! function of the requested path and the cookie token: no remote calls,
//! no storage reads. Only the protected prefix is enforced today; auth and
//! public prefixes are classified for rules that do not exist yet.

pub const SIGNIN_PATH: &str = "/signin";

const PROTECTED_PREFIX: &str = "/dashboard";
const AUTH_PREFIXES: [&str; 2] = ["/signin", "/signup"];
const PUBLIC_PREFIX: &str = "/public";

/// What the gate decided for this navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Pass,
    Redirect(&'static str),
}

/// Prefix-based route class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Protected,
    Auth,
    Public,
    Other,
}

pub fn classify(path: &str) -> RouteClass {
    if path.starts_with(PROTECTED_PREFIX) {
        RouteClass::Protected
    } else if AUTH_PREFIXES.iter().any(|p| path.starts_with(p)) {
        RouteClass::Auth
    } else if path.starts_with(PUBLIC_PREFIX) {
        RouteClass::Public
    } else {
        RouteClass::Other
    }
}

/// Decide this navigation. The cookie value is never validated, only
/// checked for presence.
pub fn decide(path: &str, cookie_token: Option<&str>) -> GateDecision {
    if classify(path) == RouteClass::Protected && cookie_token.is_none() {
        GateDecision::Redirect(SIGNIN_PATH)
    } else {
        GateDecision::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_without_cookie_redirects() {
        assert_eq!(
            decide("/dashboard", None),
            GateDecision::Redirect("/signin")
        );
        assert_eq!(
            decide("/dashboard/archive", None),
            GateDecision::Redirect("/signin")
        );
    }

    #[test]
    fn test_any_cookie_value_passes() {
        assert_eq!(decide("/dashboard", Some("abc123")), GateDecision::Pass);
        // Presence is all that is checked; a garbage value still passes.
        assert_eq!(decide("/dashboard", Some("not-a-jwt")), GateDecision::Pass);
    }

    #[test]
    fn test_auth_routes_always_pass() {
        assert_eq!(decide("/signin", None), GateDecision::Pass);
        assert_eq!(decide("/signup", None), GateDecision::Pass);
    }

    #[test]
    fn test_other_routes_pass_without_cookie() {
        assert_eq!(decide("/", None), GateDecision::Pass);
        assert_eq!(decide("/public/about", None), GateDecision::Pass);
    }

    #[test]
    fn test_classify_prefixes() {
        assert_eq!(classify("/dashboard"), RouteClass::Protected);
        assert_eq!(classify("/signup/extra"), RouteClass::Auth);
        assert_eq!(classify("/public"), RouteClass::Public);
        assert_eq!(classify("/"), RouteClass::Other);
    }
}
