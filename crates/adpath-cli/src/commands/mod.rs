pub mod canonical_name;
pub mod domain_dn;
pub mod parent;
