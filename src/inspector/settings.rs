//! Scan configuration and the bundle layout convention.

use std::path::{Path, PathBuf};

/// Directory scanned when no root is given.
pub const DEFAULT_ROOT: &str = "/Applications";

/// Manifest location relative to a bundle directory.
pub const DEFAULT_MANIFEST_PATH: &str = "Contents/Info.plist";

/// Executable directory relative to the manifest's directory.
pub const DEFAULT_EXECUTABLE_DIR: &str = "MacOS";

/// Settings for a single inventory pass.
///
/// Constructed via [`ScanSettingsBuilder`]. Every immediate subdirectory of
/// [`root`](Self::root) is a candidate bundle.
#[derive(Clone, Debug)]
pub struct ScanSettings {
    /// Directory whose children are inspected.
    root: PathBuf,

    /// Manifest path relative to each bundle.
    manifest_path: PathBuf,

    /// Executable directory relative to the manifest's parent.
    executable_dir: PathBuf,

    /// Treat symlinks to directories as bundles.
    follow_links: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            executable_dir: PathBuf::from(DEFAULT_EXECUTABLE_DIR),
            follow_links: true,
        }
    }
}

impl ScanSettings {
    /// Returns the scanned root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns whether directory symlinks are followed.
    pub fn follow_links(&self) -> bool {
        self.follow_links
    }

    /// Manifest location for a bundle directory.
    ///
    /// `/Applications/Safari.app` -> `/Applications/Safari.app/Contents/Info.plist`
    pub fn manifest_for(&self, bundle_dir: &Path) -> PathBuf {
        bundle_dir.join(&self.manifest_path)
    }

    /// Executable location for a manifest and a declared executable name.
    ///
    /// The name is always treated as relative to the executable directory.
    pub fn executable_for(&self, manifest: &Path, name: &str) -> PathBuf {
        let contents_dir = manifest.parent().unwrap_or_else(|| Path::new(""));
        contents_dir
            .join(&self.executable_dir)
            .join(name.trim_start_matches('/'))
    }
}

/// Builder for constructing [`ScanSettings`].
///
/// # Examples
///
/// ```
/// use kodegen_bundle_arch::inspector::ScanSettingsBuilder;
///
/// let settings = ScanSettingsBuilder::new()
///     .root("/Volumes/Backup/Applications")
///     .build();
/// assert_eq!(settings.root().to_str(), Some("/Volumes/Backup/Applications"));
/// ```
#[derive(Default)]
pub struct ScanSettingsBuilder {
    root: Option<PathBuf>,
    manifest_path: Option<PathBuf>,
    executable_dir: Option<PathBuf>,
    follow_links: Option<bool>,
}

impl ScanSettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the directory to scan.
    ///
    /// Default: `/Applications`
    pub fn root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the manifest path relative to each bundle.
    ///
    /// Default: `Contents/Info.plist`
    pub fn manifest_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.manifest_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the executable directory relative to the manifest's directory.
    ///
    /// Default: `MacOS`
    pub fn executable_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.executable_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets whether symlinked bundle directories are followed.
    ///
    /// Default: true
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = Some(follow);
        self
    }

    /// Builds the settings, filling unset fields with defaults.
    pub fn build(self) -> ScanSettings {
        let defaults = ScanSettings::default();
        ScanSettings {
            root: self.root.unwrap_or(defaults.root),
            manifest_path: self.manifest_path.unwrap_or(defaults.manifest_path),
            executable_dir: self.executable_dir.unwrap_or(defaults.executable_dir),
            follow_links: self.follow_links.unwrap_or(defaults.follow_links),
        }
    }
}
