//! Exposes a short digest of `static/css/main.css` as `CSS_HASH`.
//!
//! Templates append it to the stylesheet URL so browsers refetch the file
//! whenever its content changes.

use std::path::PathBuf;

use sha2::{Digest, Sha256};

const STYLESHEET: &str = "static/css/main.css";

fn main() {
    let stylesheet = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(STYLESHEET);
    println!("cargo:rerun-if-changed={}", stylesheet.display());

    let hash = match std::fs::read(&stylesheet) {
        Ok(bytes) => short_digest(&bytes),
        Err(e) => {
            println!("cargo:warning=cannot hash {STYLESHEET}: {e}");
            "dev".to_string()
        }
    };

    println!("cargo:rustc-env=CSS_HASH={hash}");
}

/// First 8 hex characters of the SHA-256 digest.
fn short_digest(bytes: &[u8]) -> String {
    let digest = format!("{:x}", Sha256::digest(bytes));
    digest.chars().take(8).collect()
}
