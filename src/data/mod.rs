pub mod dataset;
pub mod image;
pub mod layout;

pub use dataset::Dataset;
pub use self::image::{decode_binary, decode_binary_file};
pub use layout::{DatasetLayout, DIGIT_NAMES};
