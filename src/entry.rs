use std::fmt;

/// A single name/value pair held by a [`ConfigStore`](crate::ConfigStore).
///
/// Two entries are equal when both fields match exactly (case-sensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Entry {
    pub name: String,
    pub value: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parse one line of a text config file.
    ///
    /// Returns `None` for blank lines, `#` comments and lines without an `=`.
    /// Only the first `=` separates name from value, and both halves are trimmed.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let (name, value) = line.split_once('=')?;
        Some(Self::new(name.trim(), value.trim()))
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Entry {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(Entry::parse_line("foo=bar"), Some(Entry::new("foo", "bar")));
        assert_eq!(
            Entry::parse_line("  key name =  some value \t"),
            Some(Entry::new("key name", "some value"))
        );
        // everything after the first '=' belongs to the value
        assert_eq!(
            Entry::parse_line("url=http://host/?a=b"),
            Some(Entry::new("url", "http://host/?a=b"))
        );
        assert_eq!(Entry::parse_line("empty="), Some(Entry::new("empty", "")));
        assert_eq!(Entry::parse_line("=orphan"), Some(Entry::new("", "orphan")));
    }

    #[test]
    fn test_parse_line_skips() {
        assert_eq!(Entry::parse_line(""), None);
        assert_eq!(Entry::parse_line("   \t "), None);
        assert_eq!(Entry::parse_line("# foo=bar"), None);
        assert_eq!(Entry::parse_line("   #indented comment"), None);
        assert_eq!(Entry::parse_line("no separator here"), None);
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        assert_eq!(Entry::new("a", "1"), Entry::from(("a", "1")));
        assert_ne!(Entry::new("a", "1"), Entry::new("A", "1"));
        assert_ne!(Entry::new("a", "x"), Entry::new("a", "X"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Entry::new("host", "localhost").to_string(), "host=localhost");
    }
}
