//! Regression test parameters and operations

use saccade_core::{Mat, Region};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare computed values against expectations (default)
    #[default]
    Compare,
    /// Also print every compared value
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "region_crop")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// Also installs the test log subscriber (see [`crate::init_logging`]).
    pub fn new(test_name: &str) -> Self {
        crate::init_logging();
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        if self.display() {
            eprintln!("[{:02}] expected = {}, actual = {}", self.index, expected, actual);
        }
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare a boolean condition against its expected value
    pub fn compare_bool(&mut self, expected: bool, actual: bool) -> bool {
        self.compare_values(expected as u8 as f64, actual as u8 as f64, 0.0)
    }

    /// Compare two optional regions for exact equality
    pub fn compare_regions(&mut self, expected: Option<&Region>, actual: Option<&Region>) -> bool {
        self.index += 1;
        if self.display() {
            eprintln!("[{:02}] expected = {:?}, actual = {:?}", self.index, expected, actual);
        }
        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: region comparison for index {}\n\
                 expected = {:?}, actual = {:?}",
                self.test_name, self.index, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two rasters for exact equality
    ///
    /// # Returns
    ///
    /// `true` if shape and every sample match, `false` otherwise.
    pub fn compare_mats(&mut self, mat1: &Mat, mat2: &Mat) -> bool {
        self.index += 1;

        if !mat1.same_shape(mat2) {
            let msg = format!(
                "Failure in {}_reg: mat comparison for index {} - shape mismatch \
                 ({}x{}x{} vs {}x{}x{})",
                self.test_name,
                self.index,
                mat1.width(),
                mat1.height(),
                mat1.channels(),
                mat2.width(),
                mat2.height(),
                mat2.channels()
            );
            return self.fail(msg);
        }

        for y in 0..mat1.height() {
            for x in 0..mat1.width() {
                if mat1.get_pixel(x, y) != mat2.get_pixel(x, y) {
                    let msg = format!(
                        "Failure in {}_reg: mat comparison for index {} - pixel mismatch at ({}, {})",
                        self.test_name, self.index, x, y
                    );
                    return self.fail(msg);
                }
            }
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_regions() {
        let mut rp = RegParams::new("test");
        let r = Region::new(1, 2, 3, 4);
        assert!(rp.compare_regions(Some(&r), Some(&r)));
        assert!(!rp.compare_regions(Some(&r), None));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_mats() {
        let mut rp = RegParams::new("test");
        let a = Mat::filled(2, 2, 1, 1).unwrap();
        assert!(rp.compare_mats(&a, &a.deep_clone()));
        assert!(!rp.compare_mats(&a, &Mat::new(2, 2, 1).unwrap()));
        assert!(!rp.compare_mats(&a, &Mat::new(2, 2, 3).unwrap()));
    }
}
