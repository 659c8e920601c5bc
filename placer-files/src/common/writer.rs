use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::common::types::{C3Vector, C4Quaternion, fourcc};

pub(crate) trait Writeable {
    fn write<W: Write>(&self, w: &mut W) -> Result<(), std::io::Error>;
}

impl Writeable for C3Vector {
    fn write<W: Write>(&self, w: &mut W) -> Result<(), std::io::Error> {
        w.write_f32::<LittleEndian>(self.x)?;
        w.write_f32::<LittleEndian>(self.y)?;
        w.write_f32::<LittleEndian>(self.z)
    }
}

impl Writeable for C4Quaternion {
    fn write<W: Write>(&self, w: &mut W) -> Result<(), std::io::Error> {
        w.write_f32::<LittleEndian>(self.x)?;
        w.write_f32::<LittleEndian>(self.y)?;
        w.write_f32::<LittleEndian>(self.z)?;
        w.write_f32::<LittleEndian>(self.w)
    }
}

pub(crate) fn write_cstring<W: Write>(w: &mut W, value: &str) -> Result<(), std::io::Error> {
    w.write_all(value.as_bytes())?;
    w.write_u8(0)
}

pub(crate) fn write_chunk<W: Write>(w: &mut W, magic: &[u8; 4], data: &[u8]) -> Result<(), std::io::Error> {
    w.write_u32::<LittleEndian>(fourcc(magic))?;
    w.write_u32::<LittleEndian>(data.len() as u32)?;
    w.write_all(data)
}

pub(crate) fn write_version_chunk<W: Write>(w: &mut W, magic: &[u8; 4], version: u32) -> Result<(), std::io::Error> {
    write_chunk(w, magic, &version.to_le_bytes())
}
