#![no_std]

extern crate alloc;

pub mod error;
pub use error::AbsentError;

// Maybe module
pub mod maybe;
pub use maybe::*;

pub mod iter;
pub use iter::{IntoIter, Iter};

pub mod monad;
pub use monad::{map2, sequence};

#[cfg(feature = "serde")]
mod codec;
