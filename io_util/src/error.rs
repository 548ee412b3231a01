use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
  #[error("read of {size} bytes at offset {offset} exceeds buffer of {len} bytes")]
  Bounds {
    offset: i64,
    size: usize,
    len: usize
  },

  #[error("{what}: {count} records of {stride} bytes at offset {offset} do not fit into buffer of {len} bytes")]
  MalformedCount {
    what: &'static str,
    count: i64,
    offset: usize,
    stride: usize,
    len: usize
  },

  #[error("string at offset {offset} is not valid UTF-8")]
  InvalidString {
    offset: usize
  }
}
