use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::ParserError;
use crate::common::reader::Parseable;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct C3Vector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct C4Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for C4Quaternion {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }
}

/// Packs a four character code the way chunk magics are stored, so that
/// [`IffChunk::magic_str`] yields the characters in reading order.
pub const fn fourcc(code: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*code)
}

#[derive(Debug)]
pub(crate) struct IffChunk {
    pub magic: u32,
    pub size: u32,
    pub data: Vec<u8>,
}

impl IffChunk {
    pub fn magic_str(&self) -> String {
        String::from_utf8_lossy(&self.magic.to_be_bytes()[..]).into_owned()
    }

    pub fn parse<T: Parseable<T>>(&self) -> Result<T, ParserError> {
        T::parse(&mut Cursor::new(&self.data))
    }

    pub fn read_next_chunk<R: Read>(rdr: &mut R) -> Result<IffChunk, ParserError> {
        let magic = rdr.read_u32::<LittleEndian>()?;
        let size = rdr.read_u32::<LittleEndian>()?;
        // size is untrusted, so don't preallocate it.
        let mut data = Vec::new();
        rdr.by_ref().take(size as u64).read_to_end(&mut data)?;
        if data.len() != size as usize {
            return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
        }

        Ok(IffChunk { magic, size, data })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct VersionChunk {
    pub version: u32,
}

impl Parseable<VersionChunk> for VersionChunk {
    fn parse<R: Read>(rdr: &mut R) -> Result<VersionChunk, ParserError> {
        Ok(VersionChunk {
            version: rdr.read_u32::<LittleEndian>()?,
        })
    }
}
