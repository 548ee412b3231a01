use io_util::RecordReader;

use crate::{MdlResult, StudioRecord};

/// mstudiobonecontroller_t
#[derive(Debug, Clone, PartialEq)]
pub struct BoneController {
  pub bone: i32,
  /// X, Y, Z, XR, YR, ZR or M
  pub bone_controller_type: i32,
  pub start: f32,
  pub end: f32,
  pub rest: i32,
  pub input_field: i32
}

impl StudioRecord for BoneController {
  const SIZE: usize = 56;
  const NAME: &'static str = "bone controllers";

  fn read(data: &[u8], offset: usize) -> MdlResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let bone = read.read_i32()?;
    let bone_controller_type = read.read_i32()?;
    let start = read.read_f32()?;
    let end = read.read_f32()?;
    let rest = read.read_i32()?;
    let input_field = read.read_i32()?;

    Ok(Self {
      bone,
      bone_controller_type,
      start,
      end,
      rest,
      input_field
    })
  }
}
