//! Plain-text config format (`.cntconfig`)
//!
//! Each non-blank, non-comment line holds one entry. The first `=` splits the
//! name from the value and surrounding whitespace is discarded.
//!
//! Example format:
//!
//! ```plaintext
//! # database settings
//! host = localhost
//! port = 5432
//! ```
//!
//! Lines that do not contain an `=`, and lines whose name is empty, are
//! skipped rather than reported. Values are written back verbatim with no
//! escaping, so names containing `=` or values containing a newline will not
//! survive a save/load cycle.

use std::io::{BufRead, Write};

use crate::Entry;
use crate::error::Result;

/// Parse every entry out of a text config stream, in file order.
pub fn read_entries<R: BufRead>(reader: R) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        match Entry::parse_line(&line) {
            Some(entry) if !entry.name.is_empty() => entries.push(entry),
            Some(_) => {
                tracing::trace!(line = line_num + 1, "Skipping entry with empty name");
            }
            None => {
                tracing::trace!(line = line_num + 1, "Skipping line without entry");
            }
        }
    }

    Ok(entries)
}

/// Write entries as `name=value` lines.
pub fn write_entries<'a, W, I>(writer: &mut W, entries: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Entry>,
{
    for entry in entries {
        writeln!(writer, "{entry}")?;
    }
    Ok(())
}
