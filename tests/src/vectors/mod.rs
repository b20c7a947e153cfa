//! Golden-vector suites
//!
//! Each file under `src/vectors/data` is one suite: a primitive and a list
//! of cases. The runner encrypts every plaintext and decrypts every
//! ciphertext through the engine and compares both results byte for byte.

pub mod error;

pub use error::{Result, VectorError};
pub use loader::{load_all, load_suite};
pub use model::{PrimitiveKind, VectorCase, VectorSuite};
pub use runner::{run_suite, Report};
