pub mod classifier;

pub use classifier::{argmax, Classifier};
