//! zlib compression for BLOB payloads.

use std::io::{self, Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use ci_library::constants::{COMPRESSION_BEST, COMPRESSION_DEFAULT};

use crate::error::{DatabaseError, Result};

/// Compress `data` at `level` (-1 for the zlib default, otherwise 0..=9).
///
/// A failure while finishing the stream is logged and the buffered output
/// dropped; callers never see a truncated payload.
pub fn compress(level: i32, data: &[u8]) -> Result<Vec<u8>> {
    let compression = match level {
        COMPRESSION_DEFAULT => Compression::default(),
        0..=COMPRESSION_BEST => Compression::new(level.unsigned_abs()),
        _ => {
            return Err(DatabaseError::CompressionFailure(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid compression level {level}"),
            )))
        }
    };

    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), compression);
    encoder
        .write_all(data)
        .map_err(DatabaseError::CompressionFailure)?;
    encoder.finish().map_err(|err| {
        tracing::error!(error = %err, level, "unable to finish zlib stream, discarding output");
        DatabaseError::CompressionFailure(err)
    })
}

/// Inflate a zlib stream produced at any level.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(data);
    let mut inflated = Vec::with_capacity(data.len() * 2);
    decoder
        .read_to_end(&mut inflated)
        .map_err(DatabaseError::DecompressionFailure)?;
    Ok(inflated)
}

/// Compress an optional BLOB column in place. NULL stays NULL.
pub(crate) fn compress_field(level: i32, field: &mut Option<Vec<u8>>) -> Result<()> {
    if let Some(data) = field.as_mut() {
        *data = compress(level, data)?;
    }
    Ok(())
}

/// Decompress an optional BLOB column in place. NULL stays NULL.
pub(crate) fn decompress_field(field: &mut Option<Vec<u8>>) -> Result<()> {
    if let Some(data) = field.as_mut() {
        *data = decompress(data)?;
    }
    Ok(())
}
