use io_util::{locate, PrimitiveRead, RecordReader};

use crate::record::{read_child_records, read_records};
use crate::{StripHeader, Vertex, VtxRecord, VtxResult};

bitflags! {
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
  pub struct StripGroupFlags : u8 {
    const IS_FLEXED = 0x01;
    const IS_HWSKINNED = 0x02;
    const IS_DELTA_FLEXED = 0x04;
    const SUPPRESS_HW_MORPH = 0x08;
  }
}

const INDEX_SIZE: usize = 2;

/// StripGroupHeader_t
///
/// The packed vertex and index tables are not decoded here. Their absolute
/// addresses are computed from the group's start and kept for
/// [`StripGroupHeader::read_vertices`] and [`StripGroupHeader::read_indices`].
/// Non-empty tables are checked against the buffer while decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct StripGroupHeader {
  pub verts_count: usize,
  pub vertex_data_start: Option<usize>,

  pub indices_count: usize,
  pub index_data_start: Option<usize>,

  pub strips: Vec<StripHeader>,

  pub flags: StripGroupFlags
}

impl VtxRecord for StripGroupHeader {
  const SIZE: usize = 33;
  const NAME: &'static str = "strip groups";

  fn read(data: &[u8], offset: usize) -> VtxResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let verts_count = read.read_i32()?;
    let vert_offset = read.read_i32()?;
    let indices_count = read.read_i32()?;
    let indices_offset = read.read_i32()?;
    let strips_count = read.read_i32()?;
    let strips_offset = read.read_i32()?;
    let flags = StripGroupFlags::from_bits_retain(read.read_u8()?);
    // numTopologyIndices, topologyOffset
    read.skip(8);

    let vertex_data_start = read.resolve(vert_offset)?;
    let index_data_start = read.resolve(indices_offset)?;
    let vertices = locate(data, Vertex::NAME, vertex_data_start, verts_count, Vertex::SIZE)?;
    let indices = locate(data, "strip group indices", index_data_start, indices_count, INDEX_SIZE)?;

    Ok(Self {
      verts_count: vertices.count,
      vertex_data_start,
      indices_count: indices.count,
      index_data_start,
      strips: read_child_records(&read, strips_count, strips_offset)?,
      flags
    })
  }
}

impl StripGroupHeader {
  /// Reads the packed vertex table. `data` must be the buffer this group was decoded from.
  pub fn read_vertices(&self, data: &[u8]) -> VtxResult<Vec<Vertex>> {
    read_records(data, self.vertex_data_start, self.verts_count as i32)
  }

  /// Reads the 16-bit index table. Indices refer to [`StripGroupHeader::read_vertices`].
  pub fn read_indices(&self, data: &[u8]) -> VtxResult<Vec<u16>> {
    let lump = locate(data, "strip group indices", self.index_data_start, self.indices_count as i32, INDEX_SIZE)?;
    let mut indices = Vec::with_capacity(lump.count);
    for offset in lump.offsets() {
      indices.push(data.read_u16(offset)?);
    }
    Ok(indices)
  }
}
