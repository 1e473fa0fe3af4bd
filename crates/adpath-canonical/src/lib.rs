//! Distinguished-name primitives for resolving where a directory object lives.
//!
//! A DN such as `CN=Jane Doe,OU=Corp-Staff,OU=Users,DC=example,DC=com` is parsed
//! into typed components (leaf to root). From it the crate derives the parent
//! container, its kind, and the slash-separated canonical path
//! (`example.com/Users/Corp-Staff`) that directory tooling displays.
//!
#![deny(missing_docs)]

/// Parent-container derivation and canonical path rendering.
pub mod canonicalizer;
/// Container classification and the parent descriptor.
pub mod container;
/// Parsed distinguished names.
pub mod dn;
/// RFC 4514 value escaping for building DNs.
pub mod escape;
/// Validated newtypes for attribute types and domain names.
pub mod identifiers;
/// Validation errors for DNs and identifiers.
pub mod validation;

pub use canonicalizer::{canonical_path, describe_parent, parse_parent};
pub use container::{ContainerType, ParentContainerDescriptor};
pub use dn::{DistinguishedName, RelativeName};
pub use escape::{child_dn, escape_value};
pub use identifiers::{AttributeType, DomainName};
pub use validation::{MalformedNameError, ValidationError};
