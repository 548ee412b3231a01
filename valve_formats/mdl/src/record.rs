use io_util::{locate, RecordReader};
use log::trace;

use crate::MdlResult;

/// A fixed-stride record stored in a counted array.
pub trait StudioRecord: Sized {
  const SIZE: usize;
  const NAME: &'static str;

  fn read(data: &[u8], offset: usize) -> MdlResult<Self>;
}

/// Reads `count` records starting at the absolute address `start`.
///
/// The whole array is checked against the buffer before the first record is decoded.
pub(crate) fn read_records<T: StudioRecord>(data: &[u8], start: Option<usize>, count: i32) -> MdlResult<Vec<T>> {
  let lump = locate(data, T::NAME, start, count, T::SIZE)?;
  trace!("Reading {} {} at {}", lump.count, T::NAME, lump.start);
  lump.offsets().map(|offset| T::read(data, offset)).collect()
}

/// Reads an array whose offset is stored inside the record `read` is positioned on.
pub(crate) fn read_child_records<T: StudioRecord>(read: &RecordReader, count: i32, stored_offset: i32) -> MdlResult<Vec<T>> {
  let start = if count > 0 { read.resolve(stored_offset)? } else { None };
  read_records(read.data(), start, count)
}
