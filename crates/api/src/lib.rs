//! Public API types for the modecrypt library
//!
//! This crate provides the error type shared by every modecrypt crate together
//! with the two selectors a caller hands to the mode engine: which mode of
//! operation to run ([`Mode`]) and in which [`Direction`].

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{Direction, IntoDirection, Mode, Schedule};
