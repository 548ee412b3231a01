mod error;
mod lump;
mod read_util;
mod record_reader;
mod version;

pub use self::error::ReadError;
pub use self::lump::{locate, resolve, Lump};
pub use self::read_util::{PrimitiveRead, StringRead};
pub use self::record_reader::RecordReader;
pub use self::version::VersionPolicy;

pub type ReadResult<T> = Result<T, ReadError>;
