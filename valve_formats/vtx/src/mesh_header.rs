use io_util::RecordReader;

use crate::record::read_child_records;
use crate::{StripGroupHeader, VtxRecord, VtxResult};

bitflags! {
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
  pub struct MeshFlags : u8 {
    const IS_TEETH = 0x01;
    const IS_EYES = 0x02;
  }
}

/// MeshHeader_t
#[derive(Debug, Clone, PartialEq)]
pub struct MeshHeader {
  pub strip_groups: Vec<StripGroupHeader>,
  pub flags: MeshFlags
}

impl VtxRecord for MeshHeader {
  const SIZE: usize = 9;
  const NAME: &'static str = "render meshes";

  fn read(data: &[u8], offset: usize) -> VtxResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let strip_groups_count = read.read_i32()?;
    let strip_group_header_offset = read.read_i32()?;
    let flags = MeshFlags::from_bits_retain(read.read_u8()?);
    Ok(Self {
      strip_groups: read_child_records(&read, strip_groups_count, strip_group_header_offset)?,
      flags
    })
  }
}
