//! Domain-DN command implementation.

use adpath_canonical::{DistinguishedName, DomainName};

pub fn run(domain: String) -> Result<(), Box<dyn std::error::Error>> {
    let domain = DomainName::parse(domain).map_err(|e| format!("Invalid domain: {}", e))?;
    println!("{}", DistinguishedName::from_domain(&domain));
    Ok(())
}
