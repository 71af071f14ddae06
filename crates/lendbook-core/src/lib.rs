pub mod chit;
pub mod duration;
pub mod error;
pub mod interest;
pub mod numfmt;
pub mod types;

pub use error::LendbookError;
pub use types::*;

/// Standard result type for all lendbook operations
pub type LendbookResult<T> = Result<T, LendbookError>;
