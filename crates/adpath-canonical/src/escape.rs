use crate::dn::DistinguishedName;
use crate::identifiers::AttributeType;

/// Escapes a DN attribute value per RFC 4514.
///
/// The parser in this crate does not unescape, so a value built with an escaped
/// `,` will not round-trip through [`DistinguishedName::parse`].
pub fn escape_value(value: &str) -> String {
    let last = value.chars().count().saturating_sub(1);
    let mut result = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        match c {
            '"' | '+' | ',' | ';' | '<' | '>' | '\\' | '=' => {
                result.push('\\');
                result.push(c);
            }
            '#' if i == 0 => {
                result.push('\\');
                result.push(c);
            }
            ' ' if i == 0 || i == last => {
                result.push('\\');
                result.push(c);
            }
            '\0' => result.push_str("\\00"),
            _ => result.push(c),
        }
    }
    result
}

/// Text of the DN for a new child `attribute=value` under `parent`, value escaped.
pub fn child_dn(attribute: &AttributeType, value: &str, parent: &DistinguishedName) -> String {
    format!("{}={},{}", attribute, escape_value(value), parent)
}
