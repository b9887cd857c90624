//! lesionseg-test - Regression test harness for lesionseg
//!
//! Provides [`RegParams`], which numbers and records each comparison made
//! by a regression test and reports every failure at the end instead of
//! stopping at the first one, and [`synth`], a set of deterministic
//! synthetic images standing in for real radiographs.
//!
//! # Usage
//!
//! ```ignore
//! use lesionseg_test::RegParams;
//!
//! let mut rp = RegParams::new("threshold");
//! rp.compare_values(4452.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: "display" prints per-check details; anything else
//!   runs quietly and only reports failures

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
