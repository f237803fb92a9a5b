use axum::http::HeaderMap;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::cookie::SameSite;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::headers::HeaderMapExt;

use crate::config::SameSitePolicy;
use crate::config::SessionConfig;

/// Binds session tokens to the HTTP transport.
///
/// The token travels in an HttpOnly cookie whose lifetime matches the token
/// TTL. Non-browser clients may present it as `Authorization: Bearer` instead.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    secure: bool,
    same_site: SameSite,
    max_age_seconds: i64,
}

impl SessionCookie {
    pub fn new(
        name: impl Into<String>,
        secure: bool,
        same_site: SameSitePolicy,
        max_age: chrono::Duration,
    ) -> Self {
        let same_site = match same_site {
            SameSitePolicy::Strict => SameSite::Strict,
            SameSitePolicy::Lax => SameSite::Lax,
        };

        Self {
            name: name.into(),
            secure,
            same_site,
            max_age_seconds: max_age.num_seconds(),
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(
            config.cookie_name.clone(),
            config.secure_cookie,
            config.same_site,
            chrono::Duration::hours(config.expiration_hours),
        )
    }

    /// Add the session cookie carrying `token` to the jar.
    pub fn attach(&self, jar: CookieJar, token: String) -> CookieJar {
        let cookie = Cookie::build((self.name.clone(), token))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(self.same_site)
            .max_age(time::Duration::seconds(self.max_age_seconds));

        jar.add(cookie)
    }

    /// Instruct the browser to drop the session cookie.
    ///
    /// Copies of the token held elsewhere stay valid until they expire.
    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        let cookie = Cookie::build((self.name.clone(), ""))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(self.same_site)
            .max_age(time::Duration::ZERO)
            .expires(time::OffsetDateTime::UNIX_EPOCH);

        jar.add(cookie)
    }

    /// Read the presented token, cookie first, then bearer header.
    ///
    /// Absence is an anonymous request, not an error.
    pub fn extract(&self, headers: &HeaderMap) -> Option<String> {
        let jar = CookieJar::from_headers(headers);
        if let Some(cookie) = jar.get(&self.name) {
            if !cookie.value().is_empty() {
                return Some(cookie.value().to_string());
            }
        }

        headers
            .typed_get::<Authorization<Bearer>>()
            .map(|bearer| bearer.token().to_string())
    }
}
