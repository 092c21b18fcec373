use std::path::{Path, PathBuf};

use log::info;

use crate::data::dataset::Dataset;
use crate::data::image::decode_binary_file;
use crate::error::Result;

/// English names used for per-digit directories and file stems.
pub const DIGIT_NAMES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// On-disk arrangement of the digit training images.
///
/// Sample `n` (1-based) of digit `d` lives at
/// `<root>/<name>/<name><n>.bmp`, e.g. `./seven/seven3.bmp`.
#[derive(Debug, Clone)]
pub struct DatasetLayout {
    pub root: PathBuf,
    pub samples_per_class: usize,
}

impl DatasetLayout {
    pub fn new<P: Into<PathBuf>>(root: P, samples_per_class: usize) -> Self {
        DatasetLayout { root: root.into(), samples_per_class }
    }

    /// Path of sample `index` (1-based) for `digit`.
    ///
    /// # Panics
    /// Panics if `digit >= DIGIT_NAMES.len()`.
    pub fn sample_path(&self, digit: usize, index: usize) -> PathBuf {
        let name = DIGIT_NAMES[digit];
        self.root.join(name).join(format!("{name}{index}.bmp"))
    }

    /// Decodes every sample into a `side × side` binary input.
    ///
    /// Fails on the first file that is missing or cannot be decoded.
    pub fn load(&self, side: u32) -> Result<Dataset> {
        let mut dataset = Dataset::new(DIGIT_NAMES.len());
        for digit in 0..DIGIT_NAMES.len() {
            for index in 1..=self.samples_per_class {
                let input = decode_binary_file(self.sample_path(digit, index), side)?;
                dataset.push(digit, input)?;
            }
        }
        info!(
            "loaded {} images from {}",
            dataset.len(),
            display_root(&self.root)
        );
        Ok(dataset)
    }
}

fn display_root(root: &Path) -> String {
    root.canonicalize()
        .unwrap_or_else(|_| root.to_path_buf())
        .display()
        .to_string()
}
