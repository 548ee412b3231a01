use io_util::RecordReader;

use crate::record::read_child_records;
use crate::{ModelHeader, VtxRecord, VtxResult};

/// BodyPartHeader_t
#[derive(Debug, Clone, PartialEq)]
pub struct BodyPartHeader {
  pub models: Vec<ModelHeader>
}

impl VtxRecord for BodyPartHeader {
  const SIZE: usize = 8;
  const NAME: &'static str = "render body parts";

  fn read(data: &[u8], offset: usize) -> VtxResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let models_count = read.read_i32()?;
    let model_offset = read.read_i32()?;
    Ok(Self {
      models: read_child_records(&read, models_count, model_offset)?
    })
  }
}
