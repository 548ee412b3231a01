use io_util::RecordReader;

use crate::{MdlResult, StudioRecord};

/// mstudiotexture_t
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
  pub name: String,
  pub flags: i32,
  pub used: i32
}

impl StudioRecord for Texture {
  const SIZE: usize = 16 * 4;
  const NAME: &'static str = "textures";

  fn read(data: &[u8], offset: usize) -> MdlResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let name_offset = read.read_i32()?;
    let flags = read.read_i32()?;
    let used = read.read_i32()?;
    // unused, material and clientmaterial pointers, unused[10]

    Ok(Self {
      name: read.read_relative_string(name_offset)?.unwrap_or_default(),
      flags,
      used
    })
  }
}

/// One entry of the cdtexture table: a file-relative offset to a search path.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDirectory {
  pub path: String
}

impl StudioRecord for TextureDirectory {
  const SIZE: usize = 4;
  const NAME: &'static str = "texture directories";

  fn read(data: &[u8], offset: usize) -> MdlResult<Self> {
    let path_offset = RecordReader::new(data, offset).read_i32()?;
    let path = RecordReader::new(data, 0).read_relative_string(path_offset)?;
    Ok(Self {
      path: path.unwrap_or_default()
    })
  }
}
