use std::io::{Read, Result, Seek, SeekFrom, Write};

/// Fixed single-byte key used to obfuscate `.cntconfigbin` payloads.
///
/// This is obfuscation only. Anyone holding the file can recover the payload.
pub const OBFUSCATION_KEY: u8 = 0xBB;

/// XOR every byte of `buf` with `key` in place
pub fn xor_in_place(buf: &mut [u8], key: u8) {
    for byte in buf.iter_mut() {
        *byte ^= key;
    }
}

/// Reader that removes the XOR obfuscation as data is read
///
/// A single-byte key does not depend on the stream offset, so seeking is
/// passed straight to the inner reader.
pub struct XorReader<R: Read> {
    inner: R,
    key: u8,
}

impl<R: Read> XorReader<R> {
    pub fn new(inner: R, key: u8) -> Self {
        Self { inner, key }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for XorReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let bytes_read = self.inner.read(buf)?;
        xor_in_place(&mut buf[..bytes_read], self.key);
        Ok(bytes_read)
    }
}

impl<R: Read + Seek> Seek for XorReader<R> {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        self.inner.seek(pos)
    }
}

/// Writer that applies the XOR obfuscation before handing data to the inner writer
pub struct XorWriter<W: Write> {
    inner: W,
    key: u8,
    scratch: Vec<u8>,
}

impl<W: Write> XorWriter<W> {
    pub fn new(inner: W, key: u8) -> Self {
        Self {
            inner,
            key,
            scratch: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for XorWriter<W> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.scratch.clear();
        self.scratch.extend_from_slice(buf);
        xor_in_place(&mut self.scratch, self.key);
        // Only as many bytes as the inner writer accepted count as written.
        self.inner.write(&self.scratch)
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }
}

impl<W: Write + Seek> Seek for XorWriter<W> {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        self.inner.seek(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_xor_in_place_is_an_involution() {
        let mut data = b"name=value".to_vec();
        xor_in_place(&mut data, OBFUSCATION_KEY);
        assert_ne!(&data, b"name=value");
        assert_eq!(data[0], b'n' ^ 0xBB);

        xor_in_place(&mut data, OBFUSCATION_KEY);
        assert_eq!(&data, b"name=value");
    }

    #[test]
    fn test_xor_writer_then_reader() {
        let mut writer = XorWriter::new(Cursor::new(Vec::new()), OBFUSCATION_KEY);
        writer.write_all(&[0x00, 0xBB, 0xFF, b'a']).unwrap();
        writer.flush().unwrap();

        let raw = writer.into_inner().into_inner();
        assert_eq!(raw, vec![0xBB, 0x00, 0x44, b'a' ^ 0xBB]);

        let mut reader = XorReader::new(Cursor::new(raw), OBFUSCATION_KEY);
        let mut decoded = Vec::new();
        reader.read_to_end(&mut decoded).unwrap();
        assert_eq!(decoded, vec![0x00, 0xBB, 0xFF, b'a']);
    }

    #[test]
    fn test_xor_reader_seek() {
        let raw: Vec<u8> = b"0123456789".iter().map(|b| b ^ OBFUSCATION_KEY).collect();
        let mut reader = XorReader::new(Cursor::new(raw), OBFUSCATION_KEY);

        reader.seek(SeekFrom::Start(4)).unwrap();
        let mut buf = [0u8; 3];
        reader.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"456");

        assert_eq!(reader.seek(SeekFrom::End(0)).unwrap(), 10);
    }
}
