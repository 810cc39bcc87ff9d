//! The cookie handed to the write operations, before its value is encoded.

use cookie::SameSite;

/// Transport attributes carried through to the `Set-Cookie` header untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    /// `Path` attribute.
    pub path: Option<String>,
    /// `Max-Age` attribute in seconds.
    pub max_age_secs: Option<i64>,
    /// `HttpOnly` flag: hide the cookie from client-side scripts.
    pub http_only: bool,
    /// `Secure` flag: only send the cookie over HTTPS.
    pub secure: bool,
    /// `SameSite` policy.
    pub same_site: Option<SameSite>,
}

/// A named cookie whose value is an opaque byte string.
///
/// The value is whatever the caller serialised; it is base64-encoded (after
/// any signing or sealing) only when the cookie is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    /// Cookie name. Must be a cookie token; see [`crate::codec::validate_name`].
    pub name: String,
    /// Raw value bytes.
    pub value: Vec<u8>,
    /// Pass-through transport attributes.
    pub attributes: Attributes,
}

impl Cookie {
    /// Create a cookie with default (empty) attributes.
    pub fn new(name: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            attributes: Attributes::default(),
        }
    }

    /// Replace the attributes.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Build the wire form with `encoded` as the value text.
    pub(crate) fn to_wire(&self, encoded: String) -> cookie::Cookie<'static> {
        let mut wire = cookie::Cookie::new(self.name.clone(), encoded);
        let attrs = &self.attributes;
        if let Some(path) = &attrs.path {
            wire.set_path(path.clone());
        }
        if let Some(secs) = attrs.max_age_secs {
            wire.set_max_age(cookie::time::Duration::seconds(secs));
        }
        if attrs.http_only {
            wire.set_http_only(true);
        }
        if attrs.secure {
            wire.set_secure(true);
        }
        if let Some(same_site) = attrs.same_site {
            wire.set_same_site(same_site);
        }
        wire
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_carries_every_attribute() {
        let cookie = Cookie::new("session", b"ignored".to_vec()).with_attributes(Attributes {
            path: Some("/".into()),
            max_age_secs: Some(3600),
            http_only: true,
            secure: true,
            same_site: Some(SameSite::Lax),
        });
        let rendered = cookie.to_wire("aGVsbG8=".into()).to_string();
        assert!(rendered.starts_with("session=aGVsbG8="), "got: {rendered}");
        for attr in ["Path=/", "Max-Age=3600", "HttpOnly", "Secure", "SameSite=Lax"] {
            assert!(rendered.contains(attr), "missing {attr} in {rendered}");
        }
    }

    #[test]
    fn default_attributes_render_bare_pair() {
        let rendered = Cookie::new("a", Vec::<u8>::new()).to_wire("eA==".into()).to_string();
        assert_eq!(rendered, "a=eA==");
    }
}
