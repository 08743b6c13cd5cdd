//! `.dbin` container framing.
//!
//! Layout: 4 magic bytes `dbin`, 1 version byte, 3 ASCII bytes of content
//! type, 2 ASCII bytes of content version, then frames. Each frame is a
//! big-endian u32 length followed by that many opaque bytes.

use std::fmt;
use std::io::{ErrorKind, Read};

use crate::error::DbinError;

const MAGIC: [u8; 4] = *b"dbin";
const SUPPORTED_VERSION: u8 = 0;

/// Parsed container header. Must be readable before any frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbinHeader {
    pub version: u8,
    pub content_type: String,
    pub content_version: String,
}

impl DbinHeader {
    /// Reads magic + header fields from the start of a container.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, DbinError> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if magic != MAGIC {
            return Err(DbinError::BadMagic);
        }
        Self::read_after_magic(reader)
    }

    /// Reads the header fields that follow the magic. Used both at file start
    /// and when a concatenated follow-on file begins mid-stream.
    pub fn read_after_magic<R: Read>(reader: &mut R) -> Result<Self, DbinError> {
        let mut version = [0u8; 1];
        reader.read_exact(&mut version)?;
        if version[0] != SUPPORTED_VERSION {
            return Err(DbinError::UnsupportedVersion(version[0]));
        }

        let mut content_type = [0u8; 3];
        reader.read_exact(&mut content_type)?;
        let content_type = String::from_utf8(content_type.to_vec())?;

        let mut content_version = [0u8; 2];
        reader.read_exact(&mut content_version)?;
        let content_version = String::from_utf8(content_version.to_vec())?;

        Ok(Self {
            version: version[0],
            content_type,
            content_version,
        })
    }
}

impl fmt::Display for DbinHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dbin v{} content_type={} content_version={}",
            self.version, self.content_type, self.content_version
        )
    }
}

/// A fully read container: header plus every frame, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbinFile {
    pub header: DbinHeader,
    pub messages: Vec<Vec<u8>>,
}

impl DbinFile {
    /// Reads the header and drains every frame until clean EOF.
    pub fn try_from_read<R: Read>(reader: &mut R) -> Result<Self, DbinError> {
        let header = DbinHeader::read_from(reader)?;
        let mut messages: Vec<Vec<u8>> = vec![];

        while let Some(message) = Self::read_message(reader)? {
            messages.push(message);
        }

        Ok(DbinFile { header, messages })
    }

    /// Reads one length-prefixed frame. Returns `Ok(None)` on clean EOF at a
    /// frame boundary; EOF anywhere inside the length prefix or the frame
    /// body is `TruncatedFrame`. A length prefix equal to the magic means a
    /// concatenated file starts here and is reported as `StartOfNewFile`.
    pub fn read_message<R: Read>(reader: &mut R) -> Result<Option<Vec<u8>>, DbinError> {
        let mut prefix = [0u8; 4];
        if !read_exact_or_eof(reader, &mut prefix)? {
            return Ok(None);
        }
        if prefix == MAGIC {
            return Err(DbinError::StartOfNewFile);
        }

        let size = u32::from_be_bytes(prefix) as usize;
        let mut content = vec![0u8; size];
        reader.read_exact(&mut content).map_err(|err| {
            if err.kind() == ErrorKind::UnexpectedEof {
                DbinError::TruncatedFrame
            } else {
                DbinError::Io(err)
            }
        })?;

        Ok(Some(content))
    }
}

/// Fills `buf` completely, or reports `Ok(false)` when the reader was already
/// at EOF. EOF after a partial fill is a truncation.
fn read_exact_or_eof<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<bool, DbinError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) if filled == 0 => return Ok(false),
            Ok(0) => return Err(DbinError::TruncatedFrame),
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(DbinError::Io(err)),
        }
    }
    Ok(true)
}
