//! Ordered name/value configuration store.
//!
//! A [`ConfigStore`] keeps entries in insertion order and can be loaded from or
//! saved to two file formats, picked by extension:
//!
//! - `.cntconfig`: plain `name=value` lines, see [`formats::kv`]
//! - `.cntconfigbin`: XOR-obfuscated length-prefixed records, see [`formats::binary`]

pub mod entry;
pub mod error;
pub mod formats;
pub mod io;
pub mod store;
pub mod util;

pub use entry::Entry;
pub use error::{Error, Result};
pub use formats::{BINARY_EXTENSION, ConfigFormat, TEXT_EXTENSION};
pub use io::OBFUSCATION_KEY;
pub use store::ConfigStore;
