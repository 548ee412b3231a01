use io_util::RecordReader;

use crate::{MdlResult, StudioRecord};

/// mstudiomodelgroup_t
#[derive(Debug, Clone, PartialEq)]
pub struct IncludeModel {
  pub label: String,
  pub name: String
}

impl StudioRecord for IncludeModel {
  const SIZE: usize = 8;
  const NAME: &'static str = "include models";

  fn read(data: &[u8], offset: usize) -> MdlResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let label_offset = read.read_i32()?;
    let name_offset = read.read_i32()?;
    Ok(Self {
      label: read.read_relative_string(label_offset)?.unwrap_or_default(),
      name: read.read_relative_string(name_offset)?.unwrap_or_default()
    })
  }
}
