use io_util::RecordReader;

use crate::VtxResult;

pub const VTX_VERSION: i32 = 7;

/// FileHeader_t. Offsets are relative to the start of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
  pub version: i32,
  pub vert_cache_size: i32,
  pub max_bones_per_strip: u16,
  pub max_bones_per_tri: u16,
  pub max_bones_per_vert: i32,

  /// Must match the checksum of the studio model it was compiled with.
  pub checksum: i32,

  pub lods_count: i32,

  pub material_replacement_list_offset: i32,

  pub body_parts_count: i32,
  pub body_parts_offset: i32
}

impl Header {
  pub const SIZE: usize = 36;

  pub fn read(data: &[u8]) -> VtxResult<Self> {
    let mut read = RecordReader::new(data, 0);
    let version = read.read_i32()?;
    let vert_cache_size = read.read_i32()?;
    let max_bones_per_strip = read.read_u16()?;
    let max_bones_per_tri = read.read_u16()?;
    let max_bones_per_vert = read.read_i32()?;

    let checksum = read.read_i32()?;

    let lods_count = read.read_i32()?;

    let material_replacement_list_offset = read.read_i32()?;

    let body_parts_count = read.read_i32()?;
    let body_parts_offset = read.read_i32()?;
    debug_assert_eq!(read.consumed(), Self::SIZE);

    Ok(Self {
      version,
      vert_cache_size,
      max_bones_per_strip,
      max_bones_per_tri,
      max_bones_per_vert,
      checksum,
      lods_count,
      material_replacement_list_offset,
      body_parts_count,
      body_parts_offset
    })
  }
}
