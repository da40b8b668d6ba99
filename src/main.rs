//! Kodegen Bundle Arch - application bundle architecture inventory.
//!
//! This binary lists the application bundles under a directory (by default
//! `/Applications`) grouped by the architecture of their main executable.

use std::process;

fn main() {
    // Logging is initialised by the CLI once verbosity flags are known
    let exit_code = match kodegen_bundle_arch::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
