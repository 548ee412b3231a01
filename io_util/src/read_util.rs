use crate::{ReadError, ReadResult};

/// Little-endian scalar reads at absolute offsets.
///
/// Every read checks `[offset, offset + size)` against the buffer before the
/// bytes are interpreted.
pub trait PrimitiveRead {
  fn read_u8(&self, offset: usize) -> ReadResult<u8>;
  fn read_u16(&self, offset: usize) -> ReadResult<u16>;
  fn read_u32(&self, offset: usize) -> ReadResult<u32>;
  fn read_i8(&self, offset: usize) -> ReadResult<i8>;
  fn read_i16(&self, offset: usize) -> ReadResult<i16>;
  fn read_i32(&self, offset: usize) -> ReadResult<i32>;
  fn read_f32(&self, offset: usize) -> ReadResult<f32>;
}

pub trait StringRead {
  /// Scans forward from `offset` until a null byte.
  fn read_null_terminated_string(&self, offset: usize) -> ReadResult<String>;

  /// Scans forward from `offset` until a null byte or `length` bytes have been consumed.
  fn read_fixed_length_null_terminated_string(&self, offset: usize, length: usize) -> ReadResult<String>;
}

fn read_array<const N: usize>(data: &[u8], offset: usize) -> ReadResult<[u8; N]> {
  let end = offset.checked_add(N).filter(|end| *end <= data.len()).ok_or(ReadError::Bounds {
    offset: offset as i64,
    size: N,
    len: data.len()
  })?;
  let mut buffer = [0u8; N];
  buffer.copy_from_slice(&data[offset..end]);
  Ok(buffer)
}

impl PrimitiveRead for [u8] {
  fn read_u8(&self, offset: usize) -> ReadResult<u8> {
    Ok(u8::from_le_bytes(read_array(self, offset)?))
  }

  fn read_u16(&self, offset: usize) -> ReadResult<u16> {
    Ok(u16::from_le_bytes(read_array(self, offset)?))
  }

  fn read_u32(&self, offset: usize) -> ReadResult<u32> {
    Ok(u32::from_le_bytes(read_array(self, offset)?))
  }

  fn read_i8(&self, offset: usize) -> ReadResult<i8> {
    Ok(i8::from_le_bytes(read_array(self, offset)?))
  }

  fn read_i16(&self, offset: usize) -> ReadResult<i16> {
    Ok(i16::from_le_bytes(read_array(self, offset)?))
  }

  fn read_i32(&self, offset: usize) -> ReadResult<i32> {
    Ok(i32::from_le_bytes(read_array(self, offset)?))
  }

  fn read_f32(&self, offset: usize) -> ReadResult<f32> {
    Ok(f32::from_le_bytes(read_array(self, offset)?))
  }
}

fn scan_string(data: &[u8], offset: usize, max_length: Option<usize>) -> ReadResult<String> {
  let mut end = offset;
  loop {
    if max_length.is_some_and(|max| end - offset >= max) {
      break;
    }
    let char = data.get(end).copied().ok_or(ReadError::Bounds {
      offset: end as i64,
      size: 1,
      len: data.len()
    })?;
    if char == 0 {
      break;
    }
    end += 1;
  }
  String::from_utf8(data[offset..end].to_vec()).map_err(|_| ReadError::InvalidString { offset })
}

impl StringRead for [u8] {
  fn read_null_terminated_string(&self, offset: usize) -> ReadResult<String> {
    scan_string(self, offset, None)
  }

  fn read_fixed_length_null_terminated_string(&self, offset: usize, length: usize) -> ReadResult<String> {
    scan_string(self, offset, Some(length))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_reads_little_endian_scalars() {
    let data = [0x01u8, 0x02, 0x03, 0x04, 0x00, 0x00, 0x80, 0x3f];
    assert_eq!(data.read_u8(0).unwrap(), 0x01);
    assert_eq!(data.read_u16(0).unwrap(), 0x0201);
    assert_eq!(data.read_i32(0).unwrap(), 0x04030201);
    assert_eq!(data.read_u32(0).unwrap(), 0x04030201);
    assert_eq!(data.read_f32(4).unwrap(), 1.0f32);
    assert_eq!([0xffu8, 0xff].read_i16(0).unwrap(), -1);
    assert_eq!([0xfeu8].read_i8(0).unwrap(), -2);
  }

  #[test]
  fn test_read_past_end_is_bounds_error() {
    let data = [0u8; 6];
    assert_eq!(data.read_i32(2).unwrap(), 0);
    assert_eq!(
      data.read_i32(3),
      Err(ReadError::Bounds { offset: 3, size: 4, len: 6 })
    );
    assert!(matches!(data.read_u8(6), Err(ReadError::Bounds { .. })));
  }

  #[test]
  fn test_read_near_usize_max_does_not_overflow() {
    let data = [0u8; 4];
    assert!(matches!(data.read_i32(usize::MAX - 1), Err(ReadError::Bounds { .. })));
  }

  #[test]
  fn test_null_terminated_string() {
    let data = b"\0\0bone_root\0tail";
    assert_eq!(data.read_null_terminated_string(2).unwrap(), "bone_root");
    assert_eq!(data.read_null_terminated_string(0).unwrap(), "");
  }

  #[test]
  fn test_unterminated_string_is_bounds_error() {
    let data = b"abc";
    assert!(matches!(data.read_null_terminated_string(0), Err(ReadError::Bounds { offset: 3, .. })));
  }

  #[test]
  fn test_fixed_length_string_stops_at_length() {
    let data = b"abcdef";
    assert_eq!(data.read_fixed_length_null_terminated_string(0, 4).unwrap(), "abcd");
    assert_eq!(b"ab\0def".read_fixed_length_null_terminated_string(0, 6).unwrap(), "ab");
  }

  #[test]
  fn test_invalid_utf8_string() {
    let data = [0xffu8, 0xfe, 0];
    assert_eq!(data.read_null_terminated_string(0), Err(ReadError::InvalidString { offset: 0 }));
  }
}
