//! Internal utilities for the modecrypt library
//!
//! Not part of the public API; semver guarantees do not apply.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
