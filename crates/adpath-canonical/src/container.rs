use crate::dn::DistinguishedName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of the directory-protocol URI for a DN.
pub const LDAP_URI_PREFIX: &str = "LDAP://";
/// Prefix of the directory drive path for a DN.
pub const DRIVE_PREFIX: &str = "AD:\\";

/// Kind of container an object sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerType {
    /// An `OU=` container.
    OrganizationalUnit,
    /// Anything else: `CN=` containers, and the domain root itself.
    GenericContainer,
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerType::OrganizationalUnit => f.write_str("Organizational Unit"),
            ContainerType::GenericContainer => f.write_str("Container"),
        }
    }
}

/// Where an object lives: its parent container, derived fresh on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentContainerDescriptor {
    /// Parent DN, leaf to root.
    pub distinguished_name: DistinguishedName,
    /// Classification of the parent's first component.
    pub container_type: ContainerType,
    /// Value of the parent's first component.
    pub leaf_container_name: String,
    /// Domain first, then containers root to leaf, joined by `/`.
    pub canonical_path: String,
    /// `DC` values joined by `.`; empty when the DN has no domain components.
    pub domain_name: String,
    /// `DC=` components joined by `,`; empty when the DN has no domain components.
    pub domain_distinguished_name: String,
}

impl ParentContainerDescriptor {
    /// `LDAP://` URI of the parent container.
    pub fn ldap_uri(&self) -> String {
        format!("{}{}", LDAP_URI_PREFIX, self.distinguished_name)
    }

    /// `AD:\` drive path of the parent container.
    pub fn drive_path(&self) -> String {
        format!("{}{}", DRIVE_PREFIX, self.distinguished_name)
    }

    /// True when the object sits directly under the domain root.
    ///
    /// Such parents are still reported as [`ContainerType::GenericContainer`].
    pub fn is_domain_root(&self) -> bool {
        self.distinguished_name.leaf().is_domain_component()
    }
}
