/// Hyperparameters for a `train_loop` run.
///
/// # Fields
/// - `epochs`        — number of full passes over the dataset, at least 1
/// - `learning_rate` — delta-rule step size, strictly positive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
}

impl TrainConfig {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig { epochs, learning_rate }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig { epochs: 20_000, learning_rate: 0.5 }
    }
}
