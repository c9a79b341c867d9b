//! pixelator-test - Regression test framework for the pixelator workspace
//!
//! Provides a small regression-test parameter object used by the
//! `tests/*_reg.rs` suites across the workspace:
//!
//! - **Compare**: fail the test on any mismatched comparison (default)
//! - **Display**: log mismatches without failing, for inspection
//!
//! # Usage
//!
//! ```
//! use pixelator_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(1.0, 1.0, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "display" to log without failing

mod params;

pub use params::{RegParams, RegTestMode};
