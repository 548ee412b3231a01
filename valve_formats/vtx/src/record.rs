use io_util::{locate, RecordReader};
use log::trace;

use crate::VtxResult;

/// A fixed-stride record stored in a counted array.
pub trait VtxRecord: Sized {
  const SIZE: usize;
  const NAME: &'static str;

  fn read(data: &[u8], offset: usize) -> VtxResult<Self>;
}

pub(crate) fn read_records<T: VtxRecord>(data: &[u8], start: Option<usize>, count: i32) -> VtxResult<Vec<T>> {
  let lump = locate(data, T::NAME, start, count, T::SIZE)?;
  trace!("Reading {} {} at {}", lump.count, T::NAME, lump.start);
  lump.offsets().map(|offset| T::read(data, offset)).collect()
}

/// Reads the children of the record `read` is positioned on. Their offset is
/// relative to that record's start, never to an ancestor's.
pub(crate) fn read_child_records<T: VtxRecord>(read: &RecordReader, count: i32, stored_offset: i32) -> VtxResult<Vec<T>> {
  let start = if count > 0 { read.resolve(stored_offset)? } else { None };
  read_records(read.data(), start, count)
}
