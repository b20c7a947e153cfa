//! Size and layout constants

pub mod symmetric;
