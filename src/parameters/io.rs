use std::fs;
use std::path::Path;

use crate::error::{ParameterError, Result};

use super::ShapeParameters;

/// Header comment naming the stored fields in order.
const FILE_HEADER: &str = "# A1, B1, A2, B2";

impl ShapeParameters {
    /// Writes the parameters to `path`: a header comment line, then the four
    /// values at six decimal places, one per line.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Io`] if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut contents = String::from(FILE_HEADER);
        contents.push('\n');
        for value in self.as_array() {
            contents.push_str(&format!("{value:.6}\n"));
        }
        fs::write(path, contents).map_err(ParameterError::from)?;
        Ok(())
    }

    /// Reads a parameter file written by [`ShapeParameters::save`].
    ///
    /// Blank lines and `#` comments are skipped; values may be one per line
    /// or comma-separated. Parsed values go through the usual arity and
    /// bounds validation.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Io`] if the file cannot be read,
    /// [`ParameterError::Parse`] for unparseable values, then the errors of
    /// [`ShapeParameters::from_slice`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(ParameterError::from)?;
        let mut values = Vec::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            for field in line.split(',') {
                let field = field.trim();
                if field.is_empty() {
                    continue;
                }
                let value = field.parse::<f64>().map_err(|_| ParameterError::Parse {
                    text: field.to_owned(),
                })?;
                values.push(value);
            }
        }
        Self::from_slice(&values)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CochlisError;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cochlis-{}-{name}", std::process::id()))
    }

    #[test]
    fn round_trip_is_exact_at_written_precision() {
        let path = temp_path("round-trip.txt");
        let saved = ShapeParameters::new(5.123456789, 3.95, 3.26, 2.85).unwrap();
        saved.save(&path).unwrap();
        let loaded = ShapeParameters::load(&path).unwrap();
        for (a, b) in saved.as_array().iter().zip(loaded.as_array()) {
            assert!((a - b).abs() < 1e-6);
        }
        fs::remove_file(&path).ok();
    }

    #[test]
    fn mean_round_trip_is_bit_exact() {
        // The mean values are exact at six decimals, so re-parsing recovers
        // the identical doubles.
        let path = temp_path("mean.txt");
        ShapeParameters::mean().save(&path).unwrap();
        let loaded = ShapeParameters::load(&path).unwrap();
        assert_eq!(loaded, ShapeParameters::mean());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn file_starts_with_header_comment() {
        let path = temp_path("header.txt");
        ShapeParameters::mean().save(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().next().unwrap(), "# A1, B1, A2, B2");
        assert_eq!(contents.lines().count(), 5);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn load_accepts_comma_delimited_layout() {
        let path = temp_path("comma.txt");
        fs::write(&path, "# A1, B1, A2, B2\n\n5.97, 3.95, 3.26, 2.85\n").unwrap();
        let loaded = ShapeParameters::load(&path).unwrap();
        assert_eq!(loaded, ShapeParameters::mean());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn unparseable_value_is_reported() {
        let path = temp_path("garbled.txt");
        fs::write(&path, "5.97\nthree point nine\n3.26\n2.85\n").unwrap();
        let err = ShapeParameters::load(&path).unwrap_err();
        match err {
            CochlisError::Parameter(ParameterError::Parse { text }) => {
                assert_eq!(text, "three point nine");
            }
            other => panic!("unexpected error: {other}"),
        }
        fs::remove_file(&path).ok();
    }

    #[test]
    fn wrong_value_count_is_rejected() {
        let path = temp_path("short.txt");
        fs::write(&path, "5.97\n3.95\n").unwrap();
        assert!(matches!(
            ShapeParameters::load(&path),
            Err(CochlisError::Parameter(ParameterError::Arity { got: 2 }))
        ));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn loaded_values_are_bounds_checked() {
        let path = temp_path("out-of-bounds.txt");
        fs::write(&path, "3.0\n3.95\n3.26\n2.85\n").unwrap();
        assert!(matches!(
            ShapeParameters::load(&path),
            Err(CochlisError::Parameter(ParameterError::OutOfBounds { .. }))
        ));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let missing = temp_path("does-not-exist.txt");
        assert!(matches!(
            ShapeParameters::load(&missing),
            Err(CochlisError::Parameter(ParameterError::Io(_)))
        ));
    }
}
