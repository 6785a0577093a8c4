//! # Obfuscated binary config format (`.cntconfigbin`)
//!
//! The payload is a flat sequence of records, one per entry, with no header
//! and no record count. Records are read until the end of the stream.
//!
//! # Record Layout
//! - 0x00: Name length `n` (u32, little endian)
//! - 0x04: Name (`n` bytes, UTF-8)
//! - 0x04 + n: Value length `v` (u32, little endian)
//! - 0x08 + n: Value (`v` bytes, UTF-8)
//!
//! Every byte of the payload, length prefixes included, is XORed with
//! [`OBFUSCATION_KEY`] before it reaches the disk. The XOR step hides the
//! contents from a casual glance and nothing more; it is not encryption.

use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};

use binrw::prelude::*;

use crate::Entry;
use crate::error::{Error, Result};
use crate::io::{OBFUSCATION_KEY, XorReader, XorWriter};

#[binrw]
#[brw(little)]
#[derive(Debug, Clone, PartialEq, Eq)]
/// One length-prefixed name/value record, as it appears once the XOR layer is removed
///
/// Records are built through `TryFrom<&Entry>`, which rejects fields too long
/// for their `u32` length prefix.
pub struct BinaryEntry {
    #[br(temp)]
    #[bw(calc = name.len() as u32)]
    name_len: u32,
    /// Raw UTF-8 bytes of the name
    #[br(count = name_len)]
    name: Vec<u8>,
    #[br(temp)]
    #[bw(calc = value.len() as u32)]
    value_len: u32,
    /// Raw UTF-8 bytes of the value
    #[br(count = value_len)]
    value: Vec<u8>,
}

impl BinaryEntry {
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }
}

/// Length prefix for a field of `len` bytes
fn prefix_len(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| {
        Error::InvalidData(format!(
            "field of {len} bytes does not fit a u32 length prefix"
        ))
    })
}

impl TryFrom<&Entry> for BinaryEntry {
    type Error = Error;

    fn try_from(entry: &Entry) -> Result<Self> {
        prefix_len(entry.name.len())?;
        prefix_len(entry.value.len())?;

        Ok(Self {
            name: entry.name.as_bytes().to_vec(),
            value: entry.value.as_bytes().to_vec(),
        })
    }
}

impl TryFrom<BinaryEntry> for Entry {
    type Error = Error;

    fn try_from(record: BinaryEntry) -> Result<Self> {
        let name = String::from_utf8(record.name)
            .map_err(|e| Error::InvalidData(format!("name is not valid UTF-8: {e}")))?;
        let value = String::from_utf8(record.value)
            .map_err(|e| Error::InvalidData(format!("value for {name:?} is not valid UTF-8: {e}")))?;
        Ok(Entry { name, value })
    }
}

/// Decode every entry from an obfuscated stream, starting at its current position.
pub fn read_entries<R: Read + Seek>(reader: R) -> Result<Vec<Entry>> {
    let mut reader = XorReader::new(reader, OBFUSCATION_KEY);

    let start = reader.stream_position()?;
    let end = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(start))?;

    let mut entries = Vec::new();
    loop {
        let offset = reader.stream_position()?;
        if offset >= end {
            break;
        }

        let record: BinaryEntry = reader.read_le().map_err(|e| match Error::from(e) {
            Error::Io(io) if io.kind() == ErrorKind::UnexpectedEof => {
                Error::InvalidData(format!("truncated record at offset {offset:#x}"))
            }
            other => other,
        })?;

        tracing::trace!(
            offset = format!("{:08X}", offset),
            name_len = record.name.len(),
            value_len = record.value.len(),
            "Decoded binary record"
        );
        entries.push(Entry::try_from(record)?);
    }

    Ok(entries)
}

/// Encode entries into an obfuscated stream.
pub fn write_entries<'a, W, I>(writer: &mut W, entries: I) -> Result<()>
where
    W: Write + Seek,
    I: IntoIterator<Item = &'a Entry>,
{
    let mut writer = XorWriter::new(writer, OBFUSCATION_KEY);
    for entry in entries {
        BinaryEntry::try_from(entry)?.write_le(&mut writer)?;
    }
    writer.flush()?;
    Ok(())
}
