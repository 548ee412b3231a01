use io_util::RecordReader;

use crate::record::read_child_records;
use crate::{VtxRecord, VtxResult};

/// MaterialReplacementHeader_t
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialReplacement {
  pub material_id: i16,
  pub name: String
}

impl VtxRecord for MaterialReplacement {
  const SIZE: usize = 6;
  const NAME: &'static str = "material replacements";

  fn read(data: &[u8], offset: usize) -> VtxResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let material_id = read.read_i16()?;
    let name_offset = read.read_i32()?;
    Ok(Self {
      material_id,
      name: read.read_relative_string(name_offset)?.unwrap_or_default()
    })
  }
}

/// MaterialReplacementListHeader_t, one per LOD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialReplacementList {
  pub replacements: Vec<MaterialReplacement>
}

impl VtxRecord for MaterialReplacementList {
  const SIZE: usize = 8;
  const NAME: &'static str = "material replacement lists";

  fn read(data: &[u8], offset: usize) -> VtxResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let replacements_count = read.read_i32()?;
    let replacement_offset = read.read_i32()?;
    Ok(Self {
      replacements: read_child_records(&read, replacements_count, replacement_offset)?
    })
  }
}

impl MaterialReplacementList {
  pub fn replacement_for(&self, material_id: i16) -> Option<&str> {
    self
      .replacements
      .iter()
      .find(|replacement| replacement.material_id == material_id)
      .map(|replacement| replacement.name.as_str())
  }
}
