use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;

/// Compressed entries start with this magic, followed by the little endian uncompressed size and
/// a zlib stream.
pub const COMPRESSED_MAGIC: &[u8; 4] = b"CMPZ";
const HEADER_SIZE: usize = 8;

pub fn is_compressed(data: &[u8]) -> bool {
    data.len() >= HEADER_SIZE && data.starts_with(COMPRESSED_MAGIC)
}

/// Inflates `data` if it carries the compression header and passes it through otherwise.
pub fn decompress(data: Vec<u8>) -> Result<Vec<u8>, std::io::Error> {
    if !is_compressed(&data) {
        return Ok(data);
    }

    let mut size_bytes = [0u8; 4];
    size_bytes.copy_from_slice(&data[4..HEADER_SIZE]);
    let expected = u32::from_le_bytes(size_bytes) as usize;

    let mut buf = Vec::new();
    ZlibDecoder::new(&data[HEADER_SIZE..]).read_to_end(&mut buf)?;

    if buf.len() != expected {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Inflated {} bytes, header announced {}", buf.len(), expected),
        ));
    }
    Ok(buf)
}

pub fn compress(data: &[u8]) -> Result<Vec<u8>, std::io::Error> {
    let mut out = Vec::with_capacity(HEADER_SIZE + data.len() / 2);
    out.extend_from_slice(COMPRESSED_MAGIC);
    out.extend_from_slice(&(data.len() as u32).to_le_bytes());

    let mut encoder = ZlibEncoder::new(out, Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
