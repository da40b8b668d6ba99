//! CPU architecture classification from Mach-O magic numbers.

use goblin::mach::fat::FAT_MAGIC;
use goblin::mach::header::{MH_MAGIC, MH_MAGIC_64};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Architecture of a bundle's main executable.
///
/// Produced exactly once per inspected bundle.
///
/// # Examples
///
/// ```
/// use kodegen_bundle_arch::inspector::{Architecture, classify_bytes};
///
/// let header = 0xfeed_facf_u32.to_le_bytes();
/// assert_eq!(classify_bytes(&header), Architecture::AppleSilicon64);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Architecture {
    /// Missing, unreadable or unrecognized executable
    Unknown,
    /// Fat binary carrying several architecture slices
    Universal,
    /// Thin 32-bit Mach-O header.
    ///
    /// The 32-bit magic does not name a CPU; it is reported as legacy Intel
    /// for compatibility with existing inventories.
    Intel64,
    /// Thin 64-bit Mach-O header
    AppleSilicon64,
}

impl Architecture {
    /// Title of the report section listing this architecture.
    ///
    /// `None` for [`Architecture::Unknown`], which never has a section.
    pub fn section_title(self) -> Option<&'static str> {
        match self {
            Self::Intel64 => Some("Intel (x86_64) Binaries"),
            Self::AppleSilicon64 => Some("Apple Silicon (arm64) Binaries"),
            Self::Universal => Some("Universal Binaries"),
            Self::Unknown => None,
        }
    }
}

/// Byte order a signature matched in, relative to the host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ByteOrder {
    /// Header stored in host byte order (`*_MAGIC`)
    Native,
    /// Header byte-swapped relative to the host (`*_CIGAM`)
    Swapped,
}

impl ByteOrder {
    const PASSES: [ByteOrder; 2] = [ByteOrder::Native, ByteOrder::Swapped];

    fn apply(self, magic: u32) -> u32 {
        match self {
            Self::Native => magic,
            Self::Swapped => magic.swap_bytes(),
        }
    }
}

/// Known signatures in decision order. Cigam forms are derived per pass.
const SIGNATURES: [(Architecture, u32); 3] = [
    (Architecture::Universal, FAT_MAGIC),
    (Architecture::Intel64, MH_MAGIC),
    (Architecture::AppleSilicon64, MH_MAGIC_64),
];

/// Matches a header word against the signature table.
///
/// Runs two passes, native then swapped, and returns the first hit.
pub fn match_signature(word: u32) -> Option<(Architecture, ByteOrder)> {
    ByteOrder::PASSES.iter().find_map(|&order| {
        SIGNATURES
            .iter()
            .find(|(_, magic)| order.apply(*magic) == word)
            .map(|&(arch, _)| (arch, order))
    })
}

/// Classifies the leading bytes of a candidate executable.
///
/// Fewer than 4 bytes classify as [`Architecture::Unknown`].
pub fn classify_bytes(header: &[u8]) -> Architecture {
    let Some(word) = header.first_chunk::<4>() else {
        return Architecture::Unknown;
    };

    match match_signature(u32::from_ne_bytes(*word)) {
        Some((arch, order)) => {
            log::trace!("Matched {:?} signature ({:?} byte order)", arch, order);
            arch
        }
        None => Architecture::Unknown,
    }
}

/// Reads exactly the 4-byte magic from `reader` and classifies it.
///
/// A stream ending before 4 bytes is `Ok(Unknown)`; any other read failure
/// is returned to the caller.
pub fn classify_reader<R: Read>(reader: &mut R) -> io::Result<Architecture> {
    let mut magic = [0u8; 4];
    match reader.read_exact(&mut magic) {
        Ok(()) => Ok(classify_bytes(&magic)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(Architecture::Unknown),
        Err(e) => Err(e),
    }
}

/// Opens `path` read-only and classifies its header.
pub fn classify_path(path: &Path) -> io::Result<Architecture> {
    let mut file = File::open(path)?;
    classify_reader(&mut file)
}

/// Best-effort classification: any I/O failure is [`Architecture::Unknown`].
pub fn classify_file(path: &Path) -> Architecture {
    classify_path(path).unwrap_or_else(|e| {
        log::debug!("Cannot classify {}: {}", path.display(), e);
        Architecture::Unknown
    })
}
