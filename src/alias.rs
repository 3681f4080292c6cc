use std::fmt;

use serde::Serialize;

use crate::{deprecation, error::DiError};

/// A named reference to another service identifier.
///
/// An alias makes one service id answer for another. It carries two
/// independent visibility flags and optional deprecation metadata:
/// - **public**: whether the alias can be requested from outside the
///   container (default `true`)
/// - **private**: whether the alias was left implicitly private rather
///   than explicitly published (default `true`, independent of `public`)
/// - **deprecated**: whether resolving through this alias should warn,
///   with an optional message template
///
/// The target id is not validated here; whether it names a real
/// service is the container's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alias {
    target: String,
    public: bool,
    private: bool,
    deprecated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    deprecation_template: Option<String>,
}

impl Alias {
    /// Creates a public alias for `target`.
    pub fn new(target: impl Into<String>) -> Self {
        Self::with_visibility(target, true, true)
    }

    /// Creates an alias with explicit visibility flags.
    pub fn with_visibility(target: impl Into<String>, public: bool, private: bool) -> Self {
        Self {
            target: target.into(),
            public,
            private,
            deprecated: false,
            deprecation_template: None,
        }
    }

    /// Returns the id of the service this alias points at.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_public(&self) -> bool {
        self.public
    }

    pub fn set_public(&mut self, public: bool) {
        self.public = public;
    }

    pub fn is_private(&self) -> bool {
        self.private
    }

    /// Marks or unmarks this alias as deprecated.
    ///
    /// A supplied template is validated before anything is written, so
    /// a failed call leaves both the flag and the stored template
    /// untouched. Passing `None` keeps the previously stored template;
    /// rendering falls back to [`DEFAULT_DEPRECATION_TEMPLATE`] when
    /// none was ever stored.
    ///
    /// [`DEFAULT_DEPRECATION_TEMPLATE`]: crate::deprecation::DEFAULT_DEPRECATION_TEMPLATE
    pub fn set_deprecated(
        &mut self,
        deprecated: bool,
        template: Option<&str>,
    ) -> Result<(), DiError> {
        if let Some(template) = template {
            deprecation::validate_template(template)?;
            self.deprecation_template = Some(template.to_string());
        }
        self.deprecated = deprecated;
        Ok(())
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    /// Renders the deprecation message for `service_id`.
    ///
    /// Pure: substitutes `%service_id%` in the stored template (or the
    /// default one) without touching the alias.
    pub fn deprecation_message(&self, service_id: &str) -> String {
        let template = self
            .deprecation_template
            .as_deref()
            .unwrap_or(deprecation::DEFAULT_DEPRECATION_TEMPLATE);
        deprecation::render(template, service_id)
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor() {
        let alias = Alias::new("foo");

        assert_eq!(alias.to_string(), "foo");
        assert!(alias.is_public());
        assert!(alias.is_private());
    }

    #[test]
    fn test_can_construct_a_non_public_alias() {
        let alias = Alias::with_visibility("foo", false, true);

        assert_eq!(alias.to_string(), "foo");
        assert!(!alias.is_public());
    }

    #[test]
    fn test_can_construct_a_private_alias() {
        let alias = Alias::with_visibility("foo", false, false);

        assert_eq!(alias.to_string(), "foo");
        assert!(!alias.is_public());
        assert!(!alias.is_private());
    }

    #[test]
    fn test_can_set_public() {
        let mut alias = Alias::with_visibility("foo", false, true);
        alias.set_public(true);

        assert!(alias.is_public());
    }

    #[test]
    fn test_can_deprecate_an_alias() {
        let mut alias = Alias::with_visibility("foo", false, true);
        alias
            .set_deprecated(true, Some("The %service_id% service is deprecated."))
            .unwrap();

        assert!(alias.is_deprecated());
    }

    #[test]
    fn test_has_a_default_deprecation_message() {
        let mut alias = Alias::with_visibility("foo", false, true);
        alias.set_deprecated(true, None).unwrap();

        let expected =
            "The \"foo\" service alias is deprecated. You should stop using it, as it will soon be removed.";
        assert_eq!(alias.deprecation_message("foo"), expected);
    }

    #[test]
    fn test_returns_correct_deprecation_message() {
        let mut alias = Alias::with_visibility("foo", false, true);
        alias
            .set_deprecated(true, Some("The \"%service_id%\" is deprecated."))
            .unwrap();

        assert_eq!(alias.deprecation_message("foo"), "The \"foo\" is deprecated.");
    }

    #[test]
    fn test_can_override_deprecation() {
        let mut alias = Alias::with_visibility("foo", false, true);
        alias.set_deprecated(true, None).unwrap();
        assert!(alias.is_deprecated());

        alias.set_deprecated(false, None).unwrap();
        assert!(!alias.is_deprecated());
    }

    #[test]
    fn test_clearing_deprecation_keeps_the_template() {
        let mut alias = Alias::new("foo");
        alias
            .set_deprecated(true, Some("The \"%service_id%\" is deprecated."))
            .unwrap();
        alias.set_deprecated(false, None).unwrap();
        alias.set_deprecated(true, None).unwrap();

        assert_eq!(alias.deprecation_message("foo"), "The \"foo\" is deprecated.");
    }

    #[test]
    fn test_cannot_deprecate_with_an_invalid_template() {
        for template in [
            "invalid \r message %service_id%",
            "invalid \n message %service_id%",
            "invalid */ message %service_id%",
            "this is deprecated",
        ] {
            let mut alias = Alias::new("foo");
            let result = alias.set_deprecated(true, Some(template));

            assert!(matches!(result, Err(DiError::InvalidArgument(_))));
            // Validation happens before anything is written.
            assert!(!alias.is_deprecated());
            assert_eq!(
                alias.deprecation_message("foo"),
                Alias::new("foo").deprecation_message("foo")
            );
        }
    }

    #[test]
    fn test_target_is_returned_unchanged() {
        let alias = Alias::new("app.service.mailer");
        assert_eq!(alias.target(), "app.service.mailer");
        assert_eq!(alias.to_string(), "app.service.mailer");
    }
}
