use io_util::RecordReader;

use crate::record::read_child_records;
use crate::{MdlResult, Model, StudioRecord};

/// mstudiobodyparts_t
#[derive(Debug, Clone, PartialEq)]
pub struct BodyPart {
  pub name: String,
  pub base: i32,
  pub models: Vec<Model>
}

impl StudioRecord for BodyPart {
  const SIZE: usize = 16;
  const NAME: &'static str = "body parts";

  fn read(data: &[u8], offset: usize) -> MdlResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let name_index = read.read_i32()?;
    let models_count = read.read_i32()?;
    let base = read.read_i32()?;
    let model_index = read.read_i32()?;

    Ok(Self {
      name: read.read_relative_string(name_index)?.unwrap_or_default(),
      base,
      models: read_child_records(&read, models_count, model_index)?
    })
  }
}
