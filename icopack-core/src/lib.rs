pub mod convert;
pub mod error;
pub mod ico_dir;
pub mod probe;
pub mod sizes;

pub use convert::{convert, ConversionReport};
pub use error::IconError;
pub use ico_dir::{read_directory, IcoDirectory, IcoEntry};
pub use probe::ensure_decoder;
pub use sizes::{SizeList, DEFAULT_SIZES, MAX_ICO_SIZE};

/// Convenience result type for the conversion crate.
pub type Result<T> = std::result::Result<T, IconError>;
