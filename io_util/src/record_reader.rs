use crate::{resolve, PrimitiveRead, ReadResult, StringRead};

/// Sequential reader over one fixed-layout record.
///
/// Fields are read in declaration order starting at the record's absolute start
/// address. Offsets stored inside the record are resolved against that start.
pub struct RecordReader<'a> {
  data: &'a [u8],
  start: usize,
  position: usize
}

impl<'a> RecordReader<'a> {
  pub fn new(data: &'a [u8], start: usize) -> Self {
    Self {
      data,
      start,
      position: start
    }
  }

  pub fn data(&self) -> &'a [u8] {
    self.data
  }

  /// Absolute start address of the record.
  pub fn start(&self) -> usize {
    self.start
  }

  /// Number of bytes consumed since the start of the record.
  pub fn consumed(&self) -> usize {
    self.position - self.start
  }

  pub fn skip(&mut self, len: usize) {
    self.position += len;
  }

  /// Resolves an offset stored in this record against the record's start.
  pub fn resolve(&self, stored_offset: i32) -> ReadResult<Option<usize>> {
    resolve(self.start, stored_offset)
  }

  /// Reads the null-terminated string referenced by a record-relative offset.
  /// An absent offset yields `None`.
  pub fn read_relative_string(&self, stored_offset: i32) -> ReadResult<Option<String>> {
    match self.resolve(stored_offset)? {
      Some(address) => self.data.read_null_terminated_string(address).map(Some),
      None => Ok(None)
    }
  }

  pub fn read_fixed_length_string(&mut self, length: usize) -> ReadResult<String> {
    let value = self.data.read_fixed_length_null_terminated_string(self.position, length)?;
    self.position += length;
    Ok(value)
  }

  pub fn read_u8(&mut self) -> ReadResult<u8> {
    let value = self.data.read_u8(self.position)?;
    self.position += 1;
    Ok(value)
  }

  pub fn read_u16(&mut self) -> ReadResult<u16> {
    let value = self.data.read_u16(self.position)?;
    self.position += 2;
    Ok(value)
  }

  pub fn read_u32(&mut self) -> ReadResult<u32> {
    let value = self.data.read_u32(self.position)?;
    self.position += 4;
    Ok(value)
  }

  pub fn read_i8(&mut self) -> ReadResult<i8> {
    let value = self.data.read_i8(self.position)?;
    self.position += 1;
    Ok(value)
  }

  pub fn read_i16(&mut self) -> ReadResult<i16> {
    let value = self.data.read_i16(self.position)?;
    self.position += 2;
    Ok(value)
  }

  pub fn read_i32(&mut self) -> ReadResult<i32> {
    let value = self.data.read_i32(self.position)?;
    self.position += 4;
    Ok(value)
  }

  pub fn read_f32(&mut self) -> ReadResult<f32> {
    let value = self.data.read_f32(self.position)?;
    self.position += 4;
    Ok(value)
  }
}
