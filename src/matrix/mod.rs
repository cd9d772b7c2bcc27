//! Dense matrix storage: the [`Matrix`] type, its constructors and accessors

mod core;
mod format;

pub use self::core::Matrix;
