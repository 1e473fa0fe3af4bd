use crate::container::{ContainerType, ParentContainerDescriptor};
use crate::dn::{DistinguishedName, RelativeName};
use crate::validation::MalformedNameError;
use tracing::{debug, instrument};

/// Resolves the parent container of the object named by `dn`.
///
/// Fails with [`MalformedNameError`] when `dn` does not parse or has a single
/// component. Pure: the same input always yields the same descriptor.
#[instrument(level = "debug")]
pub fn parse_parent(dn: &str) -> Result<ParentContainerDescriptor, MalformedNameError> {
    let dn = DistinguishedName::parse(dn)?;
    describe_parent(&dn)
}

/// Same as [`parse_parent`] for an already parsed DN.
pub fn describe_parent(
    dn: &DistinguishedName,
) -> Result<ParentContainerDescriptor, MalformedNameError> {
    let parent = dn
        .parent()
        .ok_or_else(|| MalformedNameError::NoParent(dn.to_string()))?;

    let first = parent.leaf();
    let container_type = if first.attribute.is_organizational_unit() {
        ContainerType::OrganizationalUnit
    } else {
        ContainerType::GenericContainer
    };

    let descriptor = ParentContainerDescriptor {
        container_type,
        leaf_container_name: first.value.clone(),
        canonical_path: canonical_path(parent.components()),
        domain_name: domain_name(parent.components()),
        domain_distinguished_name: domain_dn(parent.components()),
        distinguished_name: parent,
    };
    debug!(
        parent = %descriptor.distinguished_name,
        path = %descriptor.canonical_path,
        "resolved parent container"
    );
    Ok(descriptor)
}

/// Renders components as `domain/outermost/.../innermost`.
///
/// Without domain components the path has no leading slash; without any other
/// components it is the bare domain name. Values are copied verbatim, so a value
/// containing `/` (such as `OU=R/D`) adds an extra path segment, the same way an
/// escaped `\,` splits a component during parsing.
pub fn canonical_path(components: &[RelativeName]) -> String {
    let domain = domain_name(components);
    let containers: Vec<&str> = components
        .iter()
        .rev()
        .filter(|c| !c.is_domain_component())
        .map(|c| c.value.as_str())
        .collect();

    if containers.is_empty() {
        domain
    } else if domain.is_empty() {
        containers.join("/")
    } else {
        format!("{}/{}", domain, containers.join("/"))
    }
}

pub(crate) fn domain_name(components: &[RelativeName]) -> String {
    components
        .iter()
        .filter(|c| c.is_domain_component())
        .map(|c| c.value.as_str())
        .collect::<Vec<_>>()
        .join(".")
}

pub(crate) fn domain_dn(components: &[RelativeName]) -> String {
    components
        .iter()
        .filter(|c| c.is_domain_component())
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(dn: &str) -> Vec<RelativeName> {
        DistinguishedName::parse(dn).unwrap().components().to_vec()
    }

    #[test]
    fn canonical_path_reverses_containers() {
        assert_eq!(
            canonical_path(&components("OU=Corp-Staff,OU=Users,DC=example,DC=com")),
            "example.com/Users/Corp-Staff"
        );
    }

    #[test]
    fn canonical_path_without_domain_has_no_leading_slash() {
        assert_eq!(canonical_path(&components("OU=Inner,OU=Outer")), "Outer/Inner");
    }

    #[test]
    fn canonical_path_of_domain_only() {
        assert_eq!(canonical_path(&components("DC=corp,DC=local")), "corp.local");
    }

    #[test]
    fn domain_dn_keeps_tag_prefix() {
        assert_eq!(
            domain_dn(&components("OU=Users,dc=corp,dc=local")),
            "dc=corp,dc=local"
        );
        assert_eq!(domain_dn(&components("OU=Users")), "");
    }

    #[test]
    fn lowercase_ou_is_an_organizational_unit() {
        let d = parse_parent("cn=x,ou=Staff,dc=corp").unwrap();
        assert_eq!(d.container_type, ContainerType::OrganizationalUnit);
    }

    #[test]
    fn slash_in_value_is_kept_verbatim() {
        assert_eq!(canonical_path(&components("OU=R/D,DC=corp")), "corp/R/D");
    }

    #[test]
    fn single_component_has_no_parent() {
        assert_eq!(
            parse_parent("CN=Solo").unwrap_err(),
            MalformedNameError::NoParent("CN=Solo".into())
        );
    }
}
