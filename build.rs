#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_max_radix(&outdir_path, "max_radix.rs")?;

    println!("cargo:rustc-check-cfg=cfg(property_tests)");
    Ok(())
}

/// Create max_radix.rs, containing definition of constant MAX_RADIX
fn write_max_radix(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{
    let max_radix = env::var("RUST_INTKIT_MAX_RADIX")
        .map(|s| s.parse::<u8>().expect("$RUST_INTKIT_MAX_RADIX must be an integer in [2, 255]"))
        .unwrap_or(36u8);
    assert!(max_radix >= 2, "$RUST_INTKIT_MAX_RADIX must be at least 2");

    let max_radix_rs_path = outdir_path.join(filename);

    let max_radix_def = format!("const MAX_RADIX: u8 = {max_radix};");

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&max_radix_rs_path) {
        Ok(existing_contents) if existing_contents == max_radix_def => {},
        _ => {
            let mut max_radix_rs = File::create(&max_radix_rs_path)
                .expect("Could not create max_radix.rs");
            write!(max_radix_rs, "{max_radix_def}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", max_radix_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_INTKIT_MAX_RADIX");

    Ok(())
}
