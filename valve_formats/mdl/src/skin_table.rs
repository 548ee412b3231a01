use io_util::{locate, PrimitiveRead, ReadError};

use crate::MdlResult;

/// Maps a skin family and a mesh material slot to a texture index.
///
/// Rows are stored back to back, so every family has exactly `reference_count` entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkinTable {
  reference_count: usize,
  family_count: usize,
  indices: Vec<u16>
}

impl SkinTable {
  pub fn read(data: &[u8], start: Option<usize>, reference_count: i32, family_count: i32) -> MdlResult<Self> {
    if reference_count < 0 {
      return Err(ReadError::MalformedCount {
        what: "skin references",
        count: reference_count as i64,
        offset: start.unwrap_or(0),
        stride: 2,
        len: data.len()
      }.into());
    }
    let reference_count = reference_count as usize;
    if reference_count == 0 {
      // Zero-width rows occupy no bytes, so nothing in the buffer backs a family count.
      if family_count < 0 {
        return Err(ReadError::MalformedCount {
          what: "skin families",
          count: family_count as i64,
          offset: start.unwrap_or(0),
          stride: 0,
          len: data.len()
        }.into());
      }
      return Ok(Self::default());
    }

    let lump = locate(data, "skin families", start, family_count, reference_count * 2)?;
    let mut indices = Vec::with_capacity(lump.count * reference_count);
    for row_start in lump.offsets() {
      for reference in 0..reference_count {
        indices.push(data.read_u16(row_start + reference * 2)?);
      }
    }

    Ok(Self {
      reference_count,
      family_count: lump.count,
      indices
    })
  }

  pub fn reference_count(&self) -> usize {
    self.reference_count
  }

  pub fn family_count(&self) -> usize {
    self.family_count
  }

  pub fn family(&self, index: usize) -> Option<&[u16]> {
    if index >= self.family_count {
      return None;
    }
    let start = index * self.reference_count;
    Some(&self.indices[start..start + self.reference_count])
  }

  pub fn families(&self) -> impl ExactSizeIterator<Item = &[u16]> {
    (0..self.family_count).map(move |index| {
      let start = index * self.reference_count;
      &self.indices[start..start + self.reference_count]
    })
  }

  /// Texture index used by `material` when `family` is the active skin.
  pub fn texture_index(&self, family: usize, material: usize) -> Option<u16> {
    self.family(family)?.get(material).copied()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn table_bytes(rows: &[&[u16]]) -> Vec<u8> {
    let mut data = vec![0u8; 4];
    for row in rows {
      for index in *row {
        data.extend_from_slice(&index.to_le_bytes());
      }
    }
    data
  }

  #[test]
  fn test_rows_have_reference_count_entries() {
    let data = table_bytes(&[&[0, 1, 2], &[3, 1, 4]]);
    let table = SkinTable::read(&data, Some(4), 3, 2).unwrap();
    assert_eq!(table.family_count(), 2);
    assert!(table.families().all(|row| row.len() == 3));
    assert_eq!(table.family(1), Some(&[3u16, 1, 4][..]));
    assert_eq!(table.texture_index(1, 2), Some(4));
    assert_eq!(table.texture_index(2, 0), None);
    assert_eq!(table.texture_index(0, 3), None);
  }

  #[test]
  fn test_rows_past_end_are_rejected() {
    let data = table_bytes(&[&[0, 1, 2]]);
    assert!(matches!(
      SkinTable::read(&data, Some(4), 3, 2),
      Err(crate::MdlError::Read(ReadError::MalformedCount { .. }))
    ));
  }

  #[test]
  fn test_negative_reference_count() {
    let data = table_bytes(&[&[0]]);
    assert!(SkinTable::read(&data, Some(4), -1, 1).is_err());
  }

  #[test]
  fn test_zero_width_rows_hold_no_families() {
    let table = SkinTable::read(&[0u8; 8], Some(4), 0, i32::MAX).unwrap();
    assert_eq!(table.family_count(), 0);
    assert_eq!(table.families().len(), 0);
    assert!(SkinTable::read(&[0u8; 8], Some(4), 0, -1).is_err());
  }

  #[test]
  fn test_no_families() {
    let table = SkinTable::read(&[], None, 4, 0).unwrap();
    assert_eq!(table.family_count(), 0);
    assert_eq!(table.families().count(), 0);
  }
}
