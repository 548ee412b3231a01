use bevy_math::{Quat, Vec3, Vec4};
use io_util::{ReadResult, RecordReader};

pub(crate) trait VectorRead {
  fn read_vec3(&mut self) -> ReadResult<Vec3>;
  fn read_vec4(&mut self) -> ReadResult<Vec4>;
  fn read_quat(&mut self) -> ReadResult<Quat>;
  fn read_matrix3x4(&mut self) -> ReadResult<[Vec4; 3]>;
}

impl VectorRead for RecordReader<'_> {
  fn read_vec3(&mut self) -> ReadResult<Vec3> {
    Ok(Vec3::new(self.read_f32()?, self.read_f32()?, self.read_f32()?))
  }

  fn read_vec4(&mut self) -> ReadResult<Vec4> {
    Ok(Vec4::new(self.read_f32()?, self.read_f32()?, self.read_f32()?, self.read_f32()?))
  }

  // Stored x, y, z, w.
  fn read_quat(&mut self) -> ReadResult<Quat> {
    Ok(Quat::from_vec4(self.read_vec4()?))
  }

  fn read_matrix3x4(&mut self) -> ReadResult<[Vec4; 3]> {
    Ok([self.read_vec4()?, self.read_vec4()?, self.read_vec4()?])
  }
}
