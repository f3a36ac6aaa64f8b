//! Secret redaction for log output.

/// Masks a secret so only its length and last characters are visible.
///
/// Secrets of eight characters or fewer are fully hidden.
///
/// - `skABCDEFGHIJ1234` → `***1234 (16 chars)`
/// - `short` → `*** (5 chars)`
pub fn mask_secret(secret: &str) -> String {
    let len = secret.chars().count();
    if len <= 8 {
        return format!("*** ({} chars)", len);
    }

    let tail: String = secret.chars().skip(len - 4).collect();
    format!("***{} ({} chars)", tail, len)
}
