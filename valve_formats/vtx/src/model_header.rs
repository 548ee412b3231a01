use io_util::RecordReader;

use crate::record::read_child_records;
use crate::{ModelLODHeader, VtxRecord, VtxResult};

/// ModelHeader_t
#[derive(Debug, Clone, PartialEq)]
pub struct ModelHeader {
  pub lods: Vec<ModelLODHeader>
}

impl VtxRecord for ModelHeader {
  const SIZE: usize = 8;
  const NAME: &'static str = "render models";

  fn read(data: &[u8], offset: usize) -> VtxResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let lods_count = read.read_i32()?;
    let lod_offset = read.read_i32()?;
    Ok(Self {
      lods: read_child_records(&read, lods_count, lod_offset)?
    })
  }
}
