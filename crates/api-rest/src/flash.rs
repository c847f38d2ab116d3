//! One-time flash messages carried across a redirect in a signed cookie.
//!
//! The cookie value is the base64url-encoded JSON of a [`Flash`], signed with a key derived from
//! the session secret. A cookie that fails signature verification or does not decode is ignored.

use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

/// Name of the cookie holding the pending flash message.
pub const FLASH_COOKIE: &str = "flash";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub category: FlashCategory,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Error,
            message: message.into(),
        }
    }
}

/// Derive the cookie signing key from a secret of any length.
pub fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Queue `flash` to be shown on the next page render.
pub fn set(jar: SignedCookieJar, flash: &Flash) -> SignedCookieJar {
    let encoded = match serde_json::to_vec(flash) {
        Ok(json) => URL_SAFE_NO_PAD.encode(json),
        Err(e) => {
            tracing::error!("Failed to encode flash message: {e}");
            return jar;
        }
    };

    jar.add(
        Cookie::build((FLASH_COOKIE, encoded))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Take the pending flash message, if any, clearing the cookie either way.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Option<Flash>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };

    let flash = URL_SAFE_NO_PAD
        .decode(cookie.value())
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok());

    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), flash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderMap, HeaderValue};
    use axum::response::IntoResponse;

    /// Carry the `Set-Cookie` headers of `jar` into a request-side jar, like a browser would.
    fn round_trip(jar: SignedCookieJar, key: &Key) -> SignedCookieJar {
        let response = jar.into_response();
        let pairs: Vec<String> = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .map(str::to_string)
            .collect();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&pairs.join("; ")).unwrap(),
        );
        SignedCookieJar::from_headers(&headers, key.clone())
    }

    #[test]
    fn test_set_then_take() {
        let key = signing_key("test-secret");
        let jar = set(SignedCookieJar::new(key.clone()), &Flash::success("Saved!"));

        let jar = round_trip(jar, &key);
        let (_jar, flash) = take(jar);
        assert_eq!(flash, Some(Flash::success("Saved!")));
    }

    #[test]
    fn test_take_without_cookie() {
        let key = signing_key("test-secret");
        let (_jar, flash) = take(SignedCookieJar::new(key));
        assert_eq!(flash, None);
    }

    #[test]
    fn test_wrong_key_is_ignored() {
        let jar = set(
            SignedCookieJar::new(signing_key("one")),
            &Flash::error("Error: nope"),
        );

        let other = signing_key("two");
        let jar = round_trip(jar, &other);
        let (_jar, flash) = take(jar);
        assert_eq!(flash, None);
    }

    #[test]
    fn test_short_secrets_are_usable() {
        let jar = set(
            SignedCookieJar::new(signing_key("")),
            &Flash::error("Error: x"),
        );
        assert!(jar.get(FLASH_COOKIE).is_some());
    }
}
