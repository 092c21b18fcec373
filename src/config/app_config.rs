use serde::{Deserialize, Serialize};

use crate::data::layout::DIGIT_NAMES;
use crate::error::{DigitError, Result};
use crate::train::train_config::TrainConfig;

/// Settings shared by the training driver and the drawing pad.
///
/// Every field has a default, so a config file only needs the keys it wants
/// to change. An absent file means all defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Side of the square input grid; the classifier sees `image_size²` pixels.
    pub image_size: u32,
    pub classes: usize,
    pub epochs: usize,
    pub learning_rate: f64,
    pub weights_path: String,
    pub dataset_root: String,
    pub samples_per_class: usize,
    /// Fixed seed for weight initialisation; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub pad_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            image_size: 100,
            classes: 10,
            epochs: 20_000,
            learning_rate: 0.5,
            weights_path: "weights.bin".into(),
            dataset_root: ".".into(),
            samples_per_class: 20,
            seed: None,
            pad_addr: "127.0.0.1:7878".into(),
        }
    }
}

impl AppConfig {
    pub fn input_size(&self) -> usize {
        (self.image_size as usize) * (self.image_size as usize)
    }

    pub fn train_config(&self) -> TrainConfig {
        TrainConfig::new(self.epochs, self.learning_rate)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a config from a JSON file.
    pub fn load_json(path: &str) -> Result<AppConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: AppConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn from_optional_path(path: Option<&str>) -> Result<AppConfig> {
        match path {
            Some(p) => AppConfig::load_json(p),
            None => Ok(AppConfig::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| -> Result<()> { Err(DigitError::InvalidConfig(msg.to_string())) };
        if self.image_size == 0 {
            return invalid("image_size must be positive");
        }
        if self.classes != DIGIT_NAMES.len() {
            return Err(DigitError::InvalidConfig(format!(
                "classes must be {} to match the digit image folders, got {}",
                DIGIT_NAMES.len(),
                self.classes
            )));
        }
        if self.epochs == 0 {
            return invalid("epochs must be positive");
        }
        if !(self.learning_rate > 0.0) {
            return invalid("learning_rate must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_setup() {
        let c = AppConfig::default();
        assert_eq!(c.input_size(), 10_000);
        assert_eq!(c.classes, 10);
        assert_eq!(c.train_config(), TrainConfig::new(20_000, 0.5));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let c: AppConfig = serde_json::from_str(r#"{ "epochs": 5, "seed": 42 }"#).unwrap();
        assert_eq!(c.epochs, 5);
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.weights_path, "weights.bin");
    }

    #[test]
    fn json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("digit_nn_config_{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        let mut c = AppConfig::default();
        c.image_size = 28;
        c.seed = Some(1);
        c.save_json(path).unwrap();
        let loaded = AppConfig::load_json(path).unwrap();
        std::fs::remove_file(path).ok();
        assert_eq!(loaded, c);
    }

    #[test]
    fn rejects_non_positive_learning_rate() {
        let c = AppConfig { learning_rate: 0.0, ..AppConfig::default() };
        assert!(matches!(c.validate(), Err(DigitError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_class_count_other_than_ten_digits() {
        for classes in [0, 3, 12] {
            let c = AppConfig { classes, ..AppConfig::default() };
            assert!(matches!(c.validate(), Err(DigitError::InvalidConfig(_))), "classes = {classes}");
        }
    }

    #[test]
    fn class_count_mismatch_is_caught_when_loading_file() {
        let path = std::env::temp_dir().join(format!("digit_nn_config_classes_{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        std::fs::write(path, r#"{ "classes": 3, "image_size": 2, "epochs": 1 }"#).unwrap();
        let err = AppConfig::load_json(path).unwrap_err();
        std::fs::remove_file(path).ok();
        assert!(matches!(err, DigitError::InvalidConfig(_)));
    }

    #[test]
    fn missing_path_means_defaults() {
        assert_eq!(AppConfig::from_optional_path(None).unwrap(), AppConfig::default());
    }
}
