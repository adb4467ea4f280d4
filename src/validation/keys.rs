//! Allow-list key checking

use crate::validation::error::ValidationError;

/// Check that every key in `actual` appears in `allowed`.
///
/// Fails on the first key that is not allowed, reporting the whole allow-list
/// so the operator can see the alternatives.
pub fn validate_keys<A, K>(
    section: &str,
    allowed: &[A],
    actual: impl IntoIterator<Item = K>,
) -> Result<(), ValidationError>
where
    A: AsRef<str>,
    K: AsRef<str>,
{
    for key in actual {
        let key = key.as_ref();
        if !allowed.iter().any(|candidate| candidate.as_ref() == key) {
            return Err(ValidationError::UnrecognizedKey {
                section: section.to_string(),
                key: key.to_string(),
                allowed: allowed.iter().map(|a| a.as_ref().to_string()).collect(),
            });
        }
    }

    Ok(())
}
