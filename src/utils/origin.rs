//! CORS origin normalization.
//!
//! An origin is a scheme, host and optional port, without path, query or
//! fragment.

use url::Url;

/// Errors that can occur during origin normalization.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OriginError {
    #[error("Invalid origin format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS origins are allowed")]
    UnsupportedProtocol,

    #[error("An origin cannot contain a path, query or fragment")]
    NotAnOrigin,
}

/// Normalizes a CORS origin to its canonical form.
///
/// # Normalization Rules
///
/// 1. **Protocol**: Only HTTP and HTTPS are allowed
/// 2. **Hostname**: Converted to lowercase
/// 3. **Default ports**: Removed (80 for HTTP, 443 for HTTPS)
/// 4. **Trailing slash**: Removed
///
/// # Errors
///
/// Returns [`OriginError::InvalidFormat`] for malformed input,
/// [`OriginError::UnsupportedProtocol`] for non-HTTP(S) schemes and
/// [`OriginError::NotAnOrigin`] when a path, query or fragment is present.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_origin("HTTPS://Sree.Shop/").unwrap(), "https://sree.shop");
/// assert_eq!(normalize_origin("http://localhost:8080").unwrap(), "http://localhost:8080");
/// ```
pub fn normalize_origin(input: &str) -> Result<String, OriginError> {
    let url = Url::parse(input.trim()).map_err(|e| OriginError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(OriginError::UnsupportedProtocol),
    }

    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(OriginError::NotAnOrigin);
    }

    // `Url` lowercases the host and drops default ports while parsing.
    Ok(url.origin().ascii_serialization())
}
