use io_util::{ReadError, RecordReader};

use crate::MdlResult;

/// studiohdr2_t, located through `Header::studio_hdr2_index`.
#[derive(Debug, Clone, PartialEq)]
pub struct Header2 {
  pub src_bone_transform_count: i32,
  pub src_bone_transform_index: i32,

  pub illum_position_attachment_index: i32,

  pub max_eye_deflection: f32,

  pub linear_bone_index: i32,

  /// Long model name. Only set by compilers that overflow the 64 byte header name.
  pub name: Option<String>
}

impl Header2 {
  pub const SIZE: usize = 5 * 4 + 64 * 4;

  pub fn read(data: &[u8], offset: usize) -> MdlResult<Self> {
    // The reserved block is part of the record even though only its first slot is read.
    if offset.checked_add(Self::SIZE).map_or(true, |end| end > data.len()) {
      return Err(ReadError::Bounds {
        offset: offset as i64,
        size: Self::SIZE,
        len: data.len()
      }.into());
    }

    let mut read = RecordReader::new(data, offset);
    let src_bone_transform_count = read.read_i32()?;
    let src_bone_transform_index = read.read_i32()?;

    let illum_position_attachment_index = read.read_i32()?;

    let max_eye_deflection = read.read_f32()?;

    let linear_bone_index = read.read_i32()?;

    // First slot of the reserved block.
    let name_index = read.read_i32()?;
    let name = read.read_relative_string(name_index)?;

    Ok(Self {
      src_bone_transform_count,
      src_bone_transform_index,
      illum_position_attachment_index,
      max_eye_deflection,
      linear_bone_index,
      name
    })
  }
}
