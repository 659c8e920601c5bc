use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::ParserError;
use crate::common::types::{C3Vector, C4Quaternion, IffChunk, VersionChunk};

pub(crate) trait Parseable<T> {
    fn parse<R: Read>(rdr: &mut R) -> Result<T, ParserError>;
}

impl Parseable<C3Vector> for C3Vector {
    fn parse<R: Read>(rdr: &mut R) -> Result<C3Vector, ParserError> {
        Ok(C3Vector {
            x: rdr.read_f32::<LittleEndian>()?,
            y: rdr.read_f32::<LittleEndian>()?,
            z: rdr.read_f32::<LittleEndian>()?,
        })
    }
}

impl Parseable<C4Quaternion> for C4Quaternion {
    fn parse<R: Read>(rdr: &mut R) -> Result<C4Quaternion, ParserError> {
        Ok(C4Quaternion {
            x: rdr.read_f32::<LittleEndian>()?,
            y: rdr.read_f32::<LittleEndian>()?,
            z: rdr.read_f32::<LittleEndian>()?,
            w: rdr.read_f32::<LittleEndian>()?,
        })
    }
}

impl Parseable<i16> for i16 {
    fn parse<R: Read>(rdr: &mut R) -> Result<i16, ParserError> {
        Ok(rdr.read_i16::<LittleEndian>()?)
    }
}

impl Parseable<u32> for u32 {
    fn parse<R: Read>(rdr: &mut R) -> Result<u32, ParserError> {
        Ok(rdr.read_u32::<LittleEndian>()?)
    }
}

impl Parseable<f32> for f32 {
    fn parse<R: Read>(rdr: &mut R) -> Result<f32, ParserError> {
        Ok(rdr.read_f32::<LittleEndian>()?)
    }
}

pub(crate) fn read_cstring<R: Read>(rdr: &mut R) -> Result<String, ParserError> {
    let mut buf = Vec::new();
    loop {
        let c = rdr.read_u8()?;
        if c == 0 {
            return Ok(String::from_utf8(buf)?);
        }
        buf.push(c);
    }
}

/// Parses consecutive `T` records until the chunk data is exhausted. A record that is cut off
/// halfway is an error, not the end of the array.
pub(crate) fn read_chunk_array<T: Parseable<T>>(data: &[u8]) -> Result<Vec<T>, ParserError> {
    let mut rdr = Cursor::new(data);
    let mut list = Vec::<T>::new();
    while (rdr.position() as usize) < data.len() {
        list.push(T::parse(&mut rdr)?);
    }
    Ok(list)
}

/// Splits a whole file into its chunks. Running out of data exactly at a chunk boundary ends the
/// list, a truncated chunk is reported as I/O error.
pub(crate) fn read_chunk_list<R: Read>(rdr: &mut R) -> Result<Vec<IffChunk>, ParserError> {
    let mut buf = Vec::new();
    rdr.read_to_end(&mut buf)?;
    if buf.is_empty() {
        return Err(ParserError::EmptySource);
    }

    let mut cursor = Cursor::new(buf.as_slice());
    let mut chunk_list = Vec::<IffChunk>::new();
    while (cursor.position() as usize) < buf.len() {
        chunk_list.push(IffChunk::read_next_chunk(&mut cursor)?);
    }
    Ok(chunk_list)
}

/// Checks that the first chunk is the version chunk `chunk_magic` and carries `expected`.
pub(crate) fn check_version_chunk(
    chunk_list: &[IffChunk],
    chunk_magic: &'static str,
    format: &'static str,
    expected: u32,
) -> Result<(), ParserError> {
    let Some(first) = chunk_list.first() else {
        return Err(ParserError::EmptySource);
    };

    if first.magic_str() != chunk_magic {
        return Err(ParserError::InvalidMagicValue { magic: first.magic });
    }

    let version = first.parse::<VersionChunk>()?.version;
    if version != expected {
        return Err(ParserError::UnsupportedVersion { format, version });
    }
    Ok(())
}

pub(crate) fn get_mandatory_chunk_by_name<'a>(
    chunk_list: &'a [IffChunk],
    chunk_magic: &'static str,
) -> Result<&'a IffChunk, ParserError> {
    chunk_list
        .iter()
        .find(|chunk| chunk.magic_str() == chunk_magic)
        .ok_or(ParserError::MissingChunk(chunk_magic))
}

pub(crate) fn get_chunks_by_name<'a>(
    chunk_list: &'a [IffChunk],
    chunk_magic: &'static str,
) -> impl Iterator<Item = &'a IffChunk> {
    chunk_list
        .iter()
        .filter(move |chunk| chunk.magic_str() == chunk_magic)
}

pub(crate) fn parse_number<T: std::str::FromStr>(text: &str, reason: &'static str) -> Result<T, ParserError> {
    text.trim().parse::<T>().map_err(|_| {
        log::trace!("Cannot parse {:?}: {}", text, reason);
        ParserError::FormatError { reason }
    })
}
