use crate::canonicalizer;
use crate::identifiers::{AttributeType, DomainName};
use crate::validation::MalformedNameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Separator between DN components.
pub const COMPONENT_SEPARATOR: char = ',';
/// Delimiter between a component's type tag and its value.
pub const TYPE_DELIMITER: char = '=';

/// One `TYPE=value` component of a distinguished name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelativeName {
    /// Type tag (`CN`, `OU`, `DC`, ...).
    pub attribute: AttributeType,
    /// Value after the delimiter, verbatim.
    pub value: String,
}

impl RelativeName {
    /// Creates a component from an already validated tag.
    pub fn new(attribute: AttributeType, value: impl Into<String>) -> Self {
        Self {
            attribute,
            value: value.into(),
        }
    }

    /// True for `DC` components.
    pub fn is_domain_component(&self) -> bool {
        self.attribute.is_domain_component()
    }

    /// Parses a single `TYPE=value` component.
    ///
    /// Whitespace around the tag is dropped; the value is kept exactly as written.
    pub fn parse(component: &str) -> Result<Self, MalformedNameError> {
        let (tag, value) = component
            .split_once(TYPE_DELIMITER)
            .ok_or_else(|| MalformedNameError::MissingDelimiter(component.to_string()))?;
        let attribute = AttributeType::parse(tag.trim())?;
        if value.is_empty() {
            return Err(MalformedNameError::EmptyValue(component.to_string()));
        }
        Ok(Self::new(attribute, value))
    }
}

impl fmt::Display for RelativeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.attribute, TYPE_DELIMITER, self.value)
    }
}

/// A parsed distinguished name, components ordered leaf to root.
///
/// Invariant: at least one component, and every `DC` component comes after
/// every non-`DC` component. Values are not unescaped; a value containing an
/// escaped separator (`\,`) is split like any other comma.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DistinguishedName {
    components: Vec<RelativeName>,
}

impl DistinguishedName {
    /// Parses and validates a DN string.
    pub fn parse(input: &str) -> Result<Self, MalformedNameError> {
        let raw = input;
        if raw.trim().is_empty() {
            return Err(MalformedNameError::Empty);
        }

        let mut components = Vec::new();
        let mut seen_domain = false;
        for (position, part) in raw.split(COMPONENT_SEPARATOR).enumerate() {
            if part.trim().is_empty() {
                return Err(MalformedNameError::EmptyComponent {
                    position,
                    dn: raw.to_string(),
                });
            }
            let component = RelativeName::parse(part)?;
            if component.is_domain_component() {
                seen_domain = true;
            } else if seen_domain {
                return Err(MalformedNameError::MisplacedDomainComponent {
                    component: part.to_string(),
                    dn: raw.to_string(),
                });
            }
            components.push(component);
        }

        trace!(dn = raw, components = components.len(), "parsed distinguished name");
        Ok(Self { components })
    }

    /// Builds the DC-only DN of a domain: `corp.example.com` becomes
    /// `DC=corp,DC=example,DC=com`.
    pub fn from_domain(domain: &DomainName) -> Self {
        let components = domain
            .labels()
            .map(|label| {
                RelativeName::new(
                    AttributeType::new(AttributeType::DOMAIN_COMPONENT.to_string()),
                    label,
                )
            })
            .collect();
        Self { components }
    }

    /// Components, leaf first.
    pub fn components(&self) -> &[RelativeName] {
        &self.components
    }

    /// Number of components (always at least one).
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns false for every parsed name.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The most specific component.
    pub fn leaf(&self) -> &RelativeName {
        &self.components[0]
    }

    /// The DN without its leaf, or `None` when only one component remains.
    pub fn parent(&self) -> Option<Self> {
        if self.components.len() < 2 {
            return None;
        }
        Some(Self {
            components: self.components[1..].to_vec(),
        })
    }

    /// `DC` values joined by `.` in the order they appear.
    pub fn domain_name(&self) -> String {
        canonicalizer::domain_name(&self.components)
    }

    /// The `DC=` components joined by `,`; empty when the DN has none.
    pub fn domain_dn(&self) -> String {
        canonicalizer::domain_dn(&self.components)
    }

    /// Canonical path of the object itself, leaf included
    /// (`example.com/Users/Corp-Staff/Jane Doe`).
    pub fn canonical_name(&self) -> String {
        canonicalizer::canonical_path(&self.components)
    }
}

impl fmt::Display for DistinguishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, component) in self.components.iter().enumerate() {
            if idx > 0 {
                write!(f, "{}", COMPONENT_SEPARATOR)?;
            }
            write!(f, "{}", component)?;
        }
        Ok(())
    }
}

impl FromStr for DistinguishedName {
    type Err = MalformedNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DistinguishedName {
    type Error = MalformedNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DistinguishedName> for String {
    fn from(value: DistinguishedName) -> Self {
        value.to_string()
    }
}
