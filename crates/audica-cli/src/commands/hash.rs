//! Hash command implementation.

use std::fs;

use anyhow::Result;
use audica_core::Package;

/// Print the identity hash and weak hash of a package
pub fn run(path: &str) -> Result<()> {
    let package = Package::open(path)?;
    let file_length = fs::metadata(path)?.len();

    println!("identity: {}", package.identity_hash());
    println!("weak:     {}", package.weak_hash(file_length));

    Ok(())
}
