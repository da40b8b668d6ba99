//! Shared helpers for building application bundle trees on disk

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Thin 64-bit Mach-O header as written by arm64 toolchains
pub const MACHO_64: [u8; 4] = [0xcf, 0xfa, 0xed, 0xfe];

/// Thin 32-bit Mach-O header
pub const MACHO_32: [u8; 4] = [0xce, 0xfa, 0xed, 0xfe];

/// Fat header (stored big-endian)
pub const FAT: [u8; 4] = [0xca, 0xfe, 0xba, 0xbe];

/// Temporary directory standing in for `/Applications`
pub struct AppsDir {
    dir: TempDir,
}

impl AppsDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp apps dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates `<dir>/Contents/Info.plist` with the given manifest body.
    pub fn bundle_with_manifest(&self, dir: &str, manifest: &str) -> PathBuf {
        let contents = self.path().join(dir).join("Contents");
        fs::create_dir_all(contents.join("MacOS")).expect("create bundle dirs");
        let manifest_path = contents.join("Info.plist");
        fs::write(&manifest_path, manifest).expect("write manifest");
        manifest_path
    }

    /// Creates a bundle declaring `executable`, optionally writing its header.
    pub fn bundle(&self, dir: &str, executable: &str, header: Option<&[u8]>) -> PathBuf {
        let manifest_path = self.bundle_with_manifest(dir, &plist(executable));
        if let Some(bytes) = header {
            let binary = self
                .path()
                .join(dir)
                .join("Contents/MacOS")
                .join(executable);
            fs::write(binary, bytes).expect("write executable");
        }
        manifest_path
    }

    /// Creates a directory with no manifest at all.
    pub fn plain_dir(&self, dir: &str) {
        fs::create_dir_all(self.path().join(dir).join("Contents")).expect("create dir");
    }
}

/// Minimal XML Info.plist declaring `executable`
pub fn plist(executable: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>CFBundleExecutable</key>
	<string>{executable}</string>
	<key>CFBundlePackageType</key>
	<string>APPL</string>
</dict>
</plist>
"#
    )
}
