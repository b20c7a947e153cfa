//! Constant values for the modecrypt library

#![no_std]

pub mod utils;
