//! Deprecation message templating shared by deprecatable definitions.
//!
//! A template is an opaque single-line string carrying the
//! `%service_id%` placeholder. Validation is structural only: the
//! container renders templates into comments and log lines, so CR/LF
//! and `*/` are rejected outright.

use crate::error::DiError;

/// Placeholder replaced by the concrete service id at rendering time.
pub const SERVICE_ID_PLACEHOLDER: &str = "%service_id%";

/// Template used when a definition is deprecated without a custom message.
pub const DEFAULT_DEPRECATION_TEMPLATE: &str =
    "The \"%service_id%\" service alias is deprecated. You should stop using it, as it will soon be removed.";

/// Checks a template against the structural contract.
///
/// Rejected: carriage returns, line feeds, the `*/` sequence, and
/// templates missing the `%service_id%` placeholder.
pub fn validate_template(template: &str) -> Result<(), DiError> {
    if template.contains('\r') || template.contains('\n') || template.contains("*/") {
        return Err(DiError::InvalidArgument(
            "Invalid characters found in deprecation template.".to_string(),
        ));
    }
    if !template.contains(SERVICE_ID_PLACEHOLDER) {
        return Err(DiError::InvalidArgument(format!(
            "The deprecation template must contain the \"{}\" placeholder.",
            SERVICE_ID_PLACEHOLDER
        )));
    }
    Ok(())
}

/// Renders a template by replacing every `%service_id%` occurrence.
pub fn render(template: &str, service_id: &str) -> String {
    template.replace(SERVICE_ID_PLACEHOLDER, service_id)
}
