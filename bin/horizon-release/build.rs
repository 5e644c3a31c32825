//! ---
//! ems_section: "05-networking-external-interfaces"
//! ems_subsection: "binary"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "Release CLI propagating versions across package manifests."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // No `fail_on_error`: release tarballs are built outside a git checkout.
    EmitBuilder::builder()
        .all_build()
        .all_cargo()
        .git_sha(true)
        .emit()?;
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
