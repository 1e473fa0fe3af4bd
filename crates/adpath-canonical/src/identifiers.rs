use crate::validation::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! newtype {
    ($name:ident, $doc:expr, $pattern:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new instance without validation; callers are responsible for conformity.
            pub fn new(value: String) -> Self {
                Self(value)
            }

            /// Parses a validated identifier from a string.
            pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
                let s = value.into();
                if !Regex::new($pattern).expect("invalid regex").is_match(&s) {
                    return Err(ValidationError::PatternMismatch {
                        field: stringify!($name),
                        value: s,
                    });
                }
                Ok(Self(s))
            }

            /// Borrows the identifier text.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

newtype!(
    AttributeType,
    "Type tag of a DN component: a name such as `CN`, `OU`, `DC`, or a numeric OID such as `2.5.4.3`.",
    r"^[^\s=,](?:[^=,]*[^\s=,])?$"
);
newtype!(
    DomainName,
    "Dotted DNS domain such as `corp.example.com`.",
    r"^[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*$"
);

impl AttributeType {
    /// Tag of a domain component.
    pub const DOMAIN_COMPONENT: &'static str = "DC";
    /// Tag of an organizational unit.
    pub const ORGANIZATIONAL_UNIT: &'static str = "OU";

    /// Case-insensitive tag comparison; directories accept `dc` and `DC` alike.
    pub fn is(&self, tag: &str) -> bool {
        self.0.eq_ignore_ascii_case(tag)
    }

    /// True for `DC` components.
    pub fn is_domain_component(&self) -> bool {
        self.is(Self::DOMAIN_COMPONENT)
    }

    /// True for `OU` components.
    pub fn is_organizational_unit(&self) -> bool {
        self.is(Self::ORGANIZATIONAL_UNIT)
    }
}

impl DomainName {
    /// Labels from most specific to top level (`corp`, `example`, `com`).
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}
