//! Canonical-name command implementation.

use adpath_canonical::DistinguishedName;

pub fn run(dn: String) -> Result<(), Box<dyn std::error::Error>> {
    let dn = DistinguishedName::parse(&dn)
        .map_err(|e| format!("Invalid distinguished name: {}", e))?;
    println!("{}", dn.canonical_name());
    Ok(())
}
