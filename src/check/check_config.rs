use serde::{Serialize, Deserialize};

use crate::error::Result;

/// Settings for `grad_check_sparse`.
///
/// # Fields
/// - `num_checks` — how many randomly chosen entries of W to probe
/// - `step`       — half-width h of the centered difference
/// - `seed`       — fixes which entries are probed; `None` draws from entropy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradCheckConfig {
    pub num_checks: usize,
    pub step: f64,
    pub seed: Option<u64>,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            num_checks: 10,
            step: 1e-5,
            seed: None,
        }
    }
}

impl GradCheckConfig {
    /// Default settings with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        GradCheckConfig { seed: Some(seed), ..Default::default() }
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads a config from JSON. Missing fields take their defaults.
    pub fn load_json(path: &str) -> Result<GradCheckConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LossError;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: GradCheckConfig = serde_json::from_str(r#"{ "num_checks": 3 }"#).unwrap();
        assert_eq!(cfg.num_checks, 3);
        assert_eq!(cfg.step, 1e-5);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn json_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("grad_check_{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        let cfg = GradCheckConfig { num_checks: 4, step: 1e-6, seed: Some(9) };
        cfg.save_json(path).unwrap();
        assert_eq!(GradCheckConfig::load_json(path).unwrap(), cfg);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = GradCheckConfig::load_json("/nonexistent/grad_check.json").unwrap_err();
        assert!(matches!(err, LossError::Io(_)));
    }
}
