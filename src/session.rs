//! Session Credential Store
//!
//! One opaque token, held in two places: a localStorage slot that the
//! application reads, and a `token` cookie that the navigation gate reads.
//! `store_token`/`clear_token` are the only write paths and update both
//! representations back to back. The two writes are sequential, not atomic;
//! nothing here recovers from one landing without the other.

use wasm_bindgen::JsCast;

pub const TOKEN_KEY: &str = "token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?.document()?.dyn_into().ok()
}

/// Current token as the application sees it (localStorage)
pub fn token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

/// Current token as the gate sees it (cookie)
pub fn cookie_token() -> Option<String> {
    let header = html_document()?.cookie().ok()?;
    token_from_cookie_header(&header, TOKEN_KEY)
}

/// Persist the token for future page loads and expose it to the gate
pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&cookie_pair(TOKEN_KEY, token));
    }
}

/// Remove the token from both representations (logout)
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&expired_cookie(TOKEN_KEY));
    }
}

// ========================
// Cookie Text Helpers
// ========================

/// Session cookie assignment text
pub fn cookie_pair(name: &str, value: &str) -> String {
    format!("{name}={value}; path=/")
}

/// Assignment text that deletes the cookie
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; path=/; max-age=0")
}

/// Pull one named value out of a `Cookie:`-style header
pub fn token_from_cookie_header(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name && !value.is_empty()).then(|| value.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_pair_text() {
        assert_eq!(cookie_pair("token", "abc123"), "token=abc123; path=/");
    }

    #[test]
    fn test_expired_cookie_has_zero_max_age() {
        assert_eq!(expired_cookie("token"), "token=; path=/; max-age=0");
    }

    #[test]
    fn test_token_found_among_other_cookies() {
        let header = "theme=dark; token=abc123; lang=en";
        assert_eq!(
            token_from_cookie_header(header, "token"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_missing_token_is_none() {
        assert_eq!(token_from_cookie_header("theme=dark", "token"), None);
        assert_eq!(token_from_cookie_header("", "token"), None);
    }

    #[test]
    fn test_emptied_token_counts_as_absent() {
        // The logout write leaves `token=` behind until the browser drops it.
        assert_eq!(token_from_cookie_header("token=", "token"), None);
    }

    #[test]
    fn test_name_must_match_exactly() {
        assert_eq!(token_from_cookie_header("xtoken=abc", "token"), None);
    }
}
