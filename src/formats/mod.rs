pub mod binary;
pub mod kv;

use std::path::Path;

use crate::util::has_extension;

/// Extension of plain-text config files.
pub const TEXT_EXTENSION: &str = "cntconfig";
/// Extension of obfuscated binary config files.
pub const BINARY_EXTENSION: &str = "cntconfigbin";

/// On-disk config formats, selected by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `name=value` lines, see [`kv`]
    Text,
    /// XOR-obfuscated length-prefixed records, see [`binary`]
    Binary,
}

impl ConfigFormat {
    /// File extension without the leading dot
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => TEXT_EXTENSION,
            Self::Binary => BINARY_EXTENSION,
        }
    }

    /// Detect the format from the extension of `path`, ignoring ASCII case.
    pub fn from_path(path: &Path) -> Option<Self> {
        [Self::Text, Self::Binary]
            .into_iter()
            .find(|format| format.matches(path))
    }

    /// Returns true when `path` carries this format's extension, ignoring ASCII case.
    pub fn matches(self, path: &Path) -> bool {
        has_extension(path, self.extension())
    }
}
