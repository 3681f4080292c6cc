//! # wyre-di
//!
//! Service aliasing and deprecation primitives for the Wyre dependency
//! injection container.
//!
//! An [`Alias`] lets one service id answer for another, with
//! independent public/private visibility flags and optional
//! deprecation metadata. The [`AliasRegistry`] stores alias
//! definitions keyed by service id and resolves chains of aliases to
//! the canonical id a container should instantiate.
//!
//! This crate deals in identifiers only: service instantiation,
//! autowiring and configuration loading live elsewhere.
//!
//! ## Usage
//!
//! ```rust
//! use wyre_di::{Alias, AliasRegistry};
//!
//! # fn main() -> Result<(), wyre_di::DiError> {
//! let mut registry = AliasRegistry::new();
//!
//! let mut legacy = Alias::new("app.mailer");
//! legacy.set_deprecated(true, Some("The \"%service_id%\" alias is going away."))?;
//! registry.set_alias("mailer", legacy)?;
//!
//! assert_eq!(registry.resolve("mailer")?, "app.mailer");
//! assert_eq!(
//!     registry.deprecation_warnings("mailer")?,
//!     vec!["The \"mailer\" alias is going away.".to_string()],
//! );
//! # Ok(())
//! # }
//! ```

mod alias;
pub mod deprecation;
mod error;
mod registry;

pub use alias::Alias;
pub use deprecation::{DEFAULT_DEPRECATION_TEMPLATE, SERVICE_ID_PLACEHOLDER};
pub use error::DiError;
pub use registry::AliasRegistry;
