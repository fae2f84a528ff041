#![forbid(unsafe_code)]

mod error;
mod registry;

pub use crate::error::{RuntimeError, RuntimeResult};
pub use crate::registry::Registry;
