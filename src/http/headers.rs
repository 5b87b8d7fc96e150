//! Header accessor boundary and the request factory that applies it.

use std::collections::HashMap;

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Request;

/// A mapping of header name to value, produced fresh per request.
pub type HeaderSet = HashMap<String, String>;

/// Pull-based supplier of the current session headers.
///
/// Invoked once per outgoing request; there is no push/update
/// notification. Implementations typically read auth/session state
/// owned by the surrounding application.
pub trait HeaderAccessor: Send + Sync {
    fn get(&self) -> HeaderSet;
}

/// Return `request` with every entry of `headers` added, overwriting any
/// header of the same name already present. Method, URL, and body are
/// untouched.
///
/// This never fails: an empty map yields the request unmodified, and an
/// entry that is not representable on the wire is skipped with a warning.
pub fn with_headers(headers: &HeaderSet, mut request: Request) -> Request {
    for (name, value) in headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                request.headers_mut().insert(name, value);
            }
            _ => {
                tracing::warn!(header = %name, "Skipping header not representable on the wire");
            }
        }
    }
    request
}
