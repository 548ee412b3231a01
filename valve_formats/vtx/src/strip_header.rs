use io_util::RecordReader;

use crate::{VtxRecord, VtxResult};

bitflags! {
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
  pub struct StripFlags : u8 {
    const IS_TRI_LIST = 0x01;
    const IS_TRI_STRIP = 0x02;
  }
}

/// StripHeader_t
#[derive(Debug, Clone, PartialEq)]
pub struct StripHeader {
  /// Range inside the strip group's index table, counted in indices.
  pub indices_count: i32,
  pub index_offset: i32,

  /// Range inside the strip group's vertex table, counted in vertices.
  pub verts_count: i32,
  pub vert_offset: i32,

  pub bones_count: i16,

  pub flags: StripFlags,

  /// The bone state change table is left undecoded.
  pub bone_state_changes_count: i32,
  pub bone_state_change_offset: i32
}

impl VtxRecord for StripHeader {
  const SIZE: usize = 27;
  const NAME: &'static str = "strips";

  fn read(data: &[u8], offset: usize) -> VtxResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let indices_count = read.read_i32()?;
    let index_offset = read.read_i32()?;
    let verts_count = read.read_i32()?;
    let vert_offset = read.read_i32()?;
    let bones_count = read.read_i16()?;
    let flags = StripFlags::from_bits_retain(read.read_u8()?);
    let bone_state_changes_count = read.read_i32()?;
    let bone_state_change_offset = read.read_i32()?;
    Ok(Self {
      indices_count,
      index_offset,
      verts_count,
      vert_offset,
      bones_count,
      flags,
      bone_state_changes_count,
      bone_state_change_offset
    })
  }
}

impl StripHeader {
  /// Index range of this strip inside its strip group's index table.
  pub fn index_range(&self) -> Option<std::ops::Range<usize>> {
    let start = usize::try_from(self.index_offset).ok()?;
    let count = usize::try_from(self.indices_count).ok()?;
    Some(start..start.checked_add(count)?)
  }
}
