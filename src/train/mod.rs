pub mod train_config;
pub mod loop_fn;
pub mod progress;

pub use train_config::TrainConfig;
pub use loop_fn::{one_hot, train_loop};
pub use progress::ProgressBar;
