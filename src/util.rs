//! Path helpers shared by the file formats.

use std::path::Path;

/// Get the file extension, if any.
///
/// The extension is whatever follows the last `.` of the file name, so a
/// dot-file such as `.cntconfig` still reports `cntconfig`.
pub fn file_extension(path: &Path) -> Option<&str> {
    path.file_name()?
        .to_str()?
        .rsplit_once('.')
        .map(|(_, ext)| ext)
}

/// Returns true when the extension of `path` equals `expected`, ignoring ASCII case.
pub fn has_extension(path: &Path, expected: &str) -> bool {
    file_extension(path).is_some_and(|ext| ext.eq_ignore_ascii_case(expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(Path::new("app.cntconfig")), Some("cntconfig"));
        assert_eq!(file_extension(Path::new("dir.d/app.tar.gz")), Some("gz"));
        assert_eq!(file_extension(Path::new(".cntconfig")), Some("cntconfig"));
        assert_eq!(file_extension(Path::new("dir.d/noext")), None);
        assert_eq!(file_extension(Path::new("")), None);
    }

    #[test]
    fn test_has_extension_ignores_case() {
        assert!(has_extension(Path::new("A.CNTCONFIG"), "cntconfig"));
        assert!(has_extension(Path::new("a.CntConfigBin"), "cntconfigbin"));
        assert!(!has_extension(Path::new("a.cntconfigbin"), "cntconfig"));
        assert!(!has_extension(Path::new("a.cntconfig.bak"), "cntconfig"));
    }
}
