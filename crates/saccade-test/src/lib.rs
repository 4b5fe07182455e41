//! saccade-test - Regression test framework for saccade
//!
//! This crate provides a small regression harness in the style of indexed
//! "reg" tests: each check bumps an index, failures are collected instead
//! of aborting, and `cleanup()` reports the outcome.
//!
//! # Usage
//!
//! ```ignore
//! use saccade_test::RegParams;
//!
//! let mut rp = RegParams::new("region_crop");
//! rp.compare_values(5.0, width as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"
//! - `RUST_LOG`: Filter for library log output shown during tests

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use saccade_core::{MASK_ON, Mat};

/// Build a single-channel mask from rows of text.
///
/// `#` marks a member pixel, `.` a non-member. All rows must have the same
/// length.
///
/// ```
/// let mask = saccade_test::mask_from_rows(&["#.", ".#"]).unwrap();
/// assert_eq!(mask.count_nonzero(), 2);
/// ```
pub fn mask_from_rows(rows: &[&str]) -> TestResult<Mat> {
    let width = rows.first().map_or(0, |r| r.chars().count());
    let mut data = Vec::with_capacity(width * rows.len());
    for (row, line) in rows.iter().enumerate() {
        if line.chars().count() != width {
            return Err(TestError::InvalidFixture {
                row,
                message: format!("expected {} columns, got {}", width, line.chars().count()),
            });
        }
        for c in line.chars() {
            data.push(match c {
                '#' => MASK_ON,
                '.' => 0,
                other => {
                    return Err(TestError::InvalidFixture {
                        row,
                        message: format!("unexpected character '{}'", other),
                    });
                }
            });
        }
    }
    Ok(Mat::from_vec(width as u32, rows.len() as u32, 1, data)?)
}

/// Build a single-channel image whose samples encode their own position
/// (`value = (x + y * width) % 256`), useful for checking where pixels land.
pub fn ramp(width: u32, height: u32) -> TestResult<Mat> {
    let data = (0..width * height).map(|v| (v % 256) as u8).collect();
    Ok(Mat::from_vec(width, height, 1, data)?)
}

/// Install a `tracing` subscriber that honors `RUST_LOG`.
///
/// Safe to call repeatedly; only the first call installs a subscriber.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
