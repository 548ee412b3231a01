use io_util::RecordReader;

use crate::{VtxRecord, VtxResult};

/// Vertex_t, a reference from a strip group into the studio mesh's vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
  pub bone_weight_index: [u8; 3],
  pub bones_count: u8,

  /// Index of the vertex inside the studio mesh it belongs to.
  pub orig_mesh_vert_id: u16,

  pub bone_id: [i8; 3]
}

impl VtxRecord for Vertex {
  const SIZE: usize = 9;
  const NAME: &'static str = "strip group vertices";

  fn read(data: &[u8], offset: usize) -> VtxResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let bone_weight_index = [
      read.read_u8()?,
      read.read_u8()?,
      read.read_u8()?
    ];
    let bones_count = read.read_u8()?;
    let orig_mesh_vert_id = read.read_u16()?;
    let bone_id = [
      read.read_i8()?,
      read.read_i8()?,
      read.read_i8()?
    ];
    Ok(Self {
      bone_weight_index,
      bones_count,
      orig_mesh_vert_id,
      bone_id
    })
  }
}
