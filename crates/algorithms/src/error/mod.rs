//! Error handling for the mode-of-operation layer
//!
//! Every crate in the workspace shares [`modecrypt_api::Error`]; this module
//! re-exports it together with the validation helpers.

pub use modecrypt_api::error::{validate, Error, Result, ResultExt};
