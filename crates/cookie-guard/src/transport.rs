//! Transport boundary: where encoded cookies are placed on, and fetched from,
//! the wire.

use cookie::CookieJar;
use http::{
    header::{COOKIE, SET_COOKIE},
    HeaderMap, HeaderValue,
};
use tracing::debug;

use crate::error::CookieError;

/// Places and retrieves raw, already-encoded cookies.
///
/// Implementations never see raw payload bytes: values reaching
/// [`CookieTransport::set_cookie`] are base64 text, and values returned by
/// [`CookieTransport::get_cookie`] are decoded by the codec.
pub trait CookieTransport {
    /// Queue `cookie` for delivery to the client.
    fn set_cookie(&mut self, cookie: cookie::Cookie<'static>);

    /// Return the value text of the cookie named `name`, if the client sent one.
    fn get_cookie(&self, name: &str) -> Option<String>;
}

impl CookieTransport for CookieJar {
    fn set_cookie(&mut self, cookie: cookie::Cookie<'static>) {
        self.add(cookie);
    }

    fn get_cookie(&self, name: &str) -> Option<String> {
        self.get(name).map(|c| c.value().to_owned())
    }
}

/// An HTTP request/response pair seen as a cookie transport.
///
/// Built from the request's `Cookie` headers; every cookie written through it
/// is rendered as a `Set-Cookie` header by [`HttpTransport::into_headers`].
#[derive(Debug, Default, Clone)]
pub struct HttpTransport {
    jar: CookieJar,
}

impl HttpTransport {
    /// Parse every `Cookie` header in `headers`.
    ///
    /// Unparseable pairs and non-ASCII headers are skipped; a cookie that
    /// cannot be parsed is treated as absent. When a name repeats, the first
    /// pair wins, since user agents list the most specific path first.
    pub fn from_request_headers(headers: &HeaderMap) -> Self {
        let mut jar = CookieJar::new();
        for value in headers.get_all(COOKIE) {
            let Ok(value) = value.to_str() else {
                debug!("skipping non-ASCII Cookie header");
                continue;
            };
            for parsed in cookie::Cookie::split_parse(value.to_owned()).filter_map(Result::ok) {
                if jar.get(parsed.name()).is_some() {
                    debug!(name = parsed.name(), "ignoring repeated request cookie");
                    continue;
                }
                jar.add_original(parsed);
            }
        }
        Self { jar }
    }

    /// Render the cookies written during this request as `Set-Cookie` headers.
    ///
    /// # Errors
    ///
    /// Returns [`CookieError::Header`] if a cookie contains bytes that are not
    /// legal in an HTTP header value.
    pub fn into_headers(self) -> Result<HeaderMap, CookieError> {
        let mut headers = HeaderMap::new();
        for cookie in self.jar.delta() {
            let value = HeaderValue::from_str(&cookie.to_string())
                .map_err(|e| CookieError::Header(e.to_string()))?;
            headers.append(SET_COOKIE, value);
        }
        Ok(headers)
    }
}

impl CookieTransport for HttpTransport {
    fn set_cookie(&mut self, cookie: cookie::Cookie<'static>) {
        self.jar.set_cookie(cookie);
    }

    fn get_cookie(&self, name: &str) -> Option<String> {
        self.jar.get_cookie(name)
    }
}
