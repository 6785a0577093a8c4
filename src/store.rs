//! The in-memory config store and its file operations.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Seek, Write};
use std::ops::{Index, IndexMut};
use std::path::{Path, PathBuf};

use crate::Entry;
use crate::error::{Error, Result};
use crate::formats::{ConfigFormat, binary, kv};

/// Ordered collection of name/value entries
///
/// Insertion order is preserved and decides which entry wins a lookup: every
/// query returns the first match. Names are not unique. [`add`](Self::add)
/// appends unconditionally, while [`set`](Self::set) treats the name as a key
/// and updates the first match in place.
///
/// Lookups by name or value return an empty string when nothing matches, so
/// an absent key reads the same as a key holding an empty value. Use
/// [`contains`](Self::contains) to tell them apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    entries: Vec<Entry>,
    source_path: Option<PathBuf>,
}

impl ConfigStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store and fill it from `path`.
    ///
    /// An empty path gives an empty store. Otherwise the file is loaded with
    /// [`load_file`](Self::load_file) and any error it raises is returned.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut store = Self::new();
        if !path.as_os_str().is_empty() {
            store.load_file(path)?;
        }
        Ok(store)
    }

    /// Path of the last file loaded into this store, if any
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Set the value of the first entry named `name`, or append a new entry.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        *self.value_mut(name) = value.into();
    }

    /// Mutable access to the value of the first entry named `name`.
    ///
    /// An entry with an empty value is appended when the name is not present yet.
    pub fn value_mut(&mut self, name: impl Into<String>) -> &mut String {
        let name = name.into();
        let idx = match self.position_by_name(&name) {
            Some(idx) => idx,
            None => {
                self.entries.push(Entry::new(name, ""));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].value
    }

    /// Append an entry, even if one with the same name or value already exists.
    ///
    /// Accepts an [`Entry`] or a `(name, value)` tuple.
    pub fn add(&mut self, entry: impl Into<Entry>) {
        self.entries.push(entry.into());
    }

    /// Remove every entry named `name`. Returns whether anything was removed.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        self.remove_where(|entry| entry.name == name)
    }

    /// Remove every entry whose value is `value`. Returns whether anything was removed.
    pub fn remove_by_value(&mut self, value: &str) -> bool {
        self.remove_where(|entry| entry.value == value)
    }

    /// Remove the entry at `index`, shifting later entries down by one.
    ///
    /// Negative or out of range indices leave the store untouched and return `false`.
    pub fn remove_by_index<I: TryInto<usize>>(&mut self, index: I) -> bool {
        match index.try_into() {
            Ok(index) if index < self.entries.len() => {
                self.entries.remove(index);
                true
            }
            _ => false,
        }
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Value of the first entry named `name`, or `""` when there is none
    pub fn get_value(&self, name: &str) -> &str {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map_or("", |entry| entry.value.as_str())
    }

    /// Name of the first entry whose value is `value`, or `""` when there is none
    pub fn get_name(&self, value: &str) -> &str {
        self.entries
            .iter()
            .find(|entry| entry.value == value)
            .map_or("", |entry| entry.name.as_str())
    }

    /// Returns true when any entry is named `name`
    pub fn contains(&self, name: &str) -> bool {
        self.position_by_name(name).is_some()
    }

    /// Number of entries
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries, same as [`count`](Self::count)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, or `None` when out of range
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Mutable entry at `index`, or `None` when out of range
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterate over the entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Iterate mutably over the entries in insertion order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Entry> {
        self.entries.iter_mut()
    }

    /// Replace the contents with the entries of a text config stream.
    pub fn read_text<R: BufRead>(&mut self, reader: R) -> Result<()> {
        self.entries = kv::read_entries(reader)?;
        Ok(())
    }

    /// Write every entry as a `name=value` line.
    pub fn write_text<W: Write>(&self, writer: &mut W) -> Result<()> {
        kv::write_entries(writer, &self.entries)
    }

    /// Replace the contents with the entries of an obfuscated binary stream.
    pub fn read_binary<R: Read + Seek>(&mut self, reader: R) -> Result<()> {
        self.entries = binary::read_entries(reader)?;
        Ok(())
    }

    /// Write every entry as an obfuscated binary record.
    pub fn write_binary<W: Write + Seek>(&self, writer: &mut W) -> Result<()> {
        binary::write_entries(writer, &self.entries)
    }

    /// Replace the contents with a `.cntconfig` file.
    ///
    /// The store is only modified once the whole file has been read.
    pub fn load_text(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        check_extension(path, ConfigFormat::Text)?;

        let reader = BufReader::new(File::open(path)?);
        let entries = kv::read_entries(reader)?;

        tracing::debug!(path = %path.display(), entries = entries.len(), "Loaded text config");
        self.replace(entries, path);
        Ok(())
    }

    /// Write the store to a `.cntconfig` file, overwriting it.
    pub fn save_text(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        check_extension(path, ConfigFormat::Text)?;

        let mut writer = BufWriter::new(File::create(path)?);
        self.write_text(&mut writer)?;
        writer.flush()?;

        tracing::debug!(path = %path.display(), entries = self.entries.len(), "Saved text config");
        Ok(())
    }

    /// Replace the contents with a `.cntconfigbin` file.
    ///
    /// The store is only modified once the whole file has been decoded.
    pub fn load_binary(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        check_extension(path, ConfigFormat::Binary)?;

        let reader = BufReader::new(File::open(path)?);
        let entries = binary::read_entries(reader)?;

        tracing::debug!(path = %path.display(), entries = entries.len(), "Loaded binary config");
        self.replace(entries, path);
        Ok(())
    }

    /// Write the store to a `.cntconfigbin` file, overwriting it.
    pub fn save_binary(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        check_extension(path, ConfigFormat::Binary)?;

        let mut writer = BufWriter::new(File::create(path)?);
        self.write_binary(&mut writer)?;

        tracing::debug!(path = %path.display(), entries = self.entries.len(), "Saved binary config");
        Ok(())
    }

    /// Load a file in whichever format its extension names.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match ConfigFormat::from_path(path) {
            Some(ConfigFormat::Text) => self.load_text(path),
            Some(ConfigFormat::Binary) => self.load_binary(path),
            None => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Save to a file in whichever format its extension names.
    pub fn save_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match ConfigFormat::from_path(path) {
            Some(ConfigFormat::Text) => self.save_text(path),
            Some(ConfigFormat::Binary) => self.save_binary(path),
            None => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }

    fn position_by_name(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    fn remove_where(&mut self, mut pred: impl FnMut(&Entry) -> bool) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| !pred(entry));
        self.entries.len() != before
    }

    fn replace(&mut self, entries: Vec<Entry>, path: &Path) {
        self.entries = entries;
        self.source_path = Some(path.to_path_buf());
    }
}

fn check_extension(path: &Path, format: ConfigFormat) -> Result<()> {
    if format.matches(path) {
        Ok(())
    } else {
        Err(Error::InvalidExtension {
            path: path.to_path_buf(),
            expected: format.extension(),
        })
    }
}

impl<'a> Index<&'a str> for ConfigStore {
    type Output = str;

    fn index(&self, name: &'a str) -> &str {
        self.get_value(name)
    }
}

impl Index<usize> for ConfigStore {
    type Output = Entry;

    fn index(&self, index: usize) -> &Entry {
        &self.entries[index]
    }
}

impl IndexMut<usize> for ConfigStore {
    fn index_mut(&mut self, index: usize) -> &mut Entry {
        &mut self.entries[index]
    }
}

impl<E: Into<Entry>> FromIterator<E> for ConfigStore {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
            source_path: None,
        }
    }
}

impl<E: Into<Entry>> Extend<E> for ConfigStore {
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        self.entries.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for ConfigStore {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConfigStore {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a mut ConfigStore {
    type Item = &'a mut Entry;
    type IntoIter = std::slice::IterMut<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter_mut()
    }
}
