use std::ops::Range;

use crate::{ReadError, ReadResult};

/// Turns an offset stored in a record into an absolute buffer address.
///
/// A stored offset of zero means the referenced data is absent. `base` must be the
/// address the offset is relative to: the start of the file for top-level header
/// fields, the start of the record holding the offset everywhere else.
pub fn resolve(base: usize, stored_offset: i32) -> ReadResult<Option<usize>> {
  if stored_offset == 0 {
    return Ok(None);
  }
  let address = base as i64 + stored_offset as i64;
  if address < 0 {
    return Err(ReadError::Bounds {
      offset: address,
      size: 0,
      len: 0
    });
  }
  Ok(Some(address as usize))
}

/// A validated array of fixed-stride records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lump {
  pub start: usize,
  pub count: usize,
  pub stride: usize
}

impl Lump {
  pub fn empty(stride: usize) -> Self {
    Self {
      start: 0,
      count: 0,
      stride
    }
  }

  pub fn is_empty(&self) -> bool {
    self.count == 0
  }

  pub fn byte_range(&self) -> Range<usize> {
    self.start..self.start + self.count * self.stride
  }

  /// Start address of every record in order.
  pub fn offsets(&self) -> impl ExactSizeIterator<Item = usize> {
    let Lump { start, count, stride } = *self;
    (0..count).map(move |index| start + index * stride)
  }
}

/// Checks a declared `(count, address)` pair against the buffer before anything is allocated.
///
/// A start address at or past the end of the buffer is a bounds error. A negative count,
/// a count without an address, or records running past the end are malformed counts.
pub fn locate(data: &[u8], what: &'static str, start: Option<usize>, count: i32, stride: usize) -> ReadResult<Lump> {
  let malformed = |offset: usize| ReadError::MalformedCount {
    what,
    count: count as i64,
    offset,
    stride,
    len: data.len()
  };

  if count < 0 {
    return Err(malformed(start.unwrap_or(0)));
  }
  if count == 0 {
    return Ok(Lump::empty(stride));
  }
  let start = start.ok_or_else(|| malformed(0))?;
  if start >= data.len() {
    return Err(ReadError::Bounds {
      offset: start as i64,
      size: stride,
      len: data.len()
    });
  }

  let count = count as usize;
  let end = count
    .checked_mul(stride)
    .and_then(|size| size.checked_add(start))
    .ok_or_else(|| malformed(start))?;
  if end > data.len() {
    return Err(malformed(start));
  }

  Ok(Lump { start, count, stride })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_resolve_zero_is_absent() {
    assert_eq!(resolve(100, 0), Ok(None));
  }

  #[test]
  fn test_resolve_adds_to_base() {
    assert_eq!(resolve(100, 16), Ok(Some(116)));
    assert_eq!(resolve(100, -40), Ok(Some(60)));
  }

  #[test]
  fn test_resolve_before_file_start() {
    assert!(matches!(resolve(8, -9), Err(ReadError::Bounds { offset: -1, .. })));
  }

  #[test]
  fn test_locate_empty_lump_ignores_offset() {
    let data = [0u8; 8];
    let lump = locate(&data, "bones", None, 0, 216).unwrap();
    assert!(lump.is_empty());
    assert_eq!(lump.offsets().count(), 0);
  }

  #[test]
  fn test_locate_offsets() {
    let data = [0u8; 64];
    let lump = locate(&data, "textures", Some(16), 3, 16).unwrap();
    assert_eq!(lump.offsets().collect::<Vec<_>>(), vec![16, 32, 48]);
    assert_eq!(lump.byte_range(), 16..64);
  }

  #[test]
  fn test_locate_negative_count() {
    let data = [0u8; 64];
    assert!(matches!(locate(&data, "bones", Some(8), -1, 4), Err(ReadError::MalformedCount { count: -1, .. })));
  }

  #[test]
  fn test_locate_count_too_large() {
    let data = [0u8; 64];
    assert!(matches!(locate(&data, "meshes", Some(8), 15, 4), Err(ReadError::MalformedCount { what: "meshes", .. })));
    assert!(matches!(locate(&data, "meshes", Some(8), i32::MAX, 116), Err(ReadError::MalformedCount { .. })));
  }

  #[test]
  fn test_locate_start_outside_buffer() {
    let data = [0u8; 64];
    assert!(matches!(locate(&data, "bones", Some(64), 1, 4), Err(ReadError::Bounds { offset: 64, .. })));
  }

  #[test]
  fn test_locate_count_without_offset() {
    let data = [0u8; 64];
    assert!(matches!(locate(&data, "bones", None, 2, 4), Err(ReadError::MalformedCount { .. })));
  }
}
