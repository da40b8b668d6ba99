//! Per-bundle inspection: manifest -> executable name -> header -> record.

use super::arch::{self, Architecture};
use super::settings::ScanSettings;
use crate::error::InspectError;
use crate::manifest;
use std::path::{Path, PathBuf};

/// Classification of one bundle directory that carries a manifest.
///
/// Immutable once built. `architecture` is [`Architecture::Unknown`]
/// whenever `executable_name` is empty or the executable could not be
/// read or recognized.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct BundleRecord {
    executable_name: String,
    manifest_path: PathBuf,
    architecture: Architecture,
}

impl BundleRecord {
    /// Creates a record. An empty name always yields an `Unknown` record.
    pub fn new(
        executable_name: String,
        manifest_path: PathBuf,
        architecture: Architecture,
    ) -> Self {
        let architecture = if executable_name.is_empty() {
            Architecture::Unknown
        } else {
            architecture
        };

        Self {
            executable_name,
            manifest_path,
            architecture,
        }
    }

    /// Executable name declared by the manifest (may be empty)
    pub fn executable_name(&self) -> &str {
        &self.executable_name
    }

    /// Manifest the record was built from
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Classified architecture
    pub fn architecture(&self) -> Architecture {
        self.architecture
    }
}

/// Result of inspecting a candidate bundle.
#[derive(Debug)]
pub struct Inspection {
    /// Fully populated record, `Unknown` on any failure
    pub record: BundleRecord,
    /// Why the record is `Unknown`, if it is
    pub diagnostic: Option<InspectError>,
}

impl Inspection {
    fn classified(record: BundleRecord) -> Self {
        Self {
            record,
            diagnostic: None,
        }
    }

    fn unclassified(executable_name: String, manifest_path: &Path, error: InspectError) -> Self {
        Self {
            record: BundleRecord::new(
                executable_name,
                manifest_path.to_path_buf(),
                Architecture::Unknown,
            ),
            diagnostic: Some(error),
        }
    }
}

/// Turns bundle directories into [`BundleRecord`]s.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundle_arch::inspector::{BundleInspector, ScanSettings};
/// use std::path::Path;
///
/// let settings = ScanSettings::default();
/// let inspector = BundleInspector::new(&settings);
///
/// if let Some(inspection) = inspector.inspect(Path::new("/Applications/Safari.app")) {
///     println!("{:?}", inspection.record.architecture());
/// }
/// ```
#[derive(Debug)]
pub struct BundleInspector<'a> {
    settings: &'a ScanSettings,
}

impl<'a> BundleInspector<'a> {
    /// Creates an inspector using the layout from `settings`.
    pub fn new(settings: &'a ScanSettings) -> Self {
        Self { settings }
    }

    /// Inspects one bundle directory.
    ///
    /// Returns `None` when the directory has no manifest: it is not a
    /// candidate and produces neither a record nor a diagnostic.
    pub fn inspect(&self, bundle_dir: &Path) -> Option<Inspection> {
        let manifest_path = self.settings.manifest_for(bundle_dir);
        if !manifest_path.exists() {
            log::trace!("Skipping {}: no manifest", bundle_dir.display());
            return None;
        }

        Some(self.inspect_manifest(&manifest_path))
    }

    /// Inspects the bundle owning an existing manifest path.
    pub fn inspect_manifest(&self, manifest_path: &Path) -> Inspection {
        let name = match self.executable_name(manifest_path) {
            Ok(name) => name,
            Err(e) => return Inspection::unclassified(String::new(), manifest_path, e),
        };

        let executable = self.settings.executable_for(manifest_path, &name);
        match arch::classify_path(&executable) {
            Ok(Architecture::Unknown) => Inspection::unclassified(
                name,
                manifest_path,
                InspectError::UnrecognizedFormat { path: executable },
            ),
            Ok(architecture) => {
                log::debug!("{} -> {:?}", executable.display(), architecture);
                Inspection::classified(BundleRecord::new(
                    name,
                    manifest_path.to_path_buf(),
                    architecture,
                ))
            }
            Err(source) => Inspection::unclassified(
                name,
                manifest_path,
                InspectError::ExecutableUnreadable {
                    path: executable,
                    source,
                },
            ),
        }
    }

    fn executable_name(&self, manifest_path: &Path) -> Result<String, InspectError> {
        let content = manifest::read_manifest(manifest_path).map_err(|source| {
            InspectError::ManifestUnreadable {
                path: manifest_path.to_path_buf(),
                source,
            }
        })?;

        manifest::executable_name(&content).ok_or_else(|| InspectError::ExecutableNameMissing {
            path: manifest_path.to_path_buf(),
        })
    }
}
