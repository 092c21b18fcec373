pub mod error;
pub mod math;
pub mod activation;
pub mod classifier;
pub mod store;
pub mod train;
pub mod data;
pub mod session;
pub mod config;

// Convenience re-exports
pub use error::{DigitError, Result};
pub use math::matrix::Matrix;
pub use activation::activation::sigmoid;
pub use classifier::classifier::{argmax, Classifier};
pub use train::train_config::TrainConfig;
pub use train::loop_fn::{one_hot, train_loop};
pub use train::progress::ProgressBar;
pub use data::dataset::Dataset;
pub use session::session::{DrawingSession, Prediction, SessionState};
pub use config::app_config::AppConfig;
