use std::time::Instant;

use log::{debug, info};

use crate::classifier::classifier::Classifier;
use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `classifier` in place for `config.epochs` epochs.
///
/// Each epoch walks `dataset` label-major (ascending label, then insertion
/// order) and applies one delta-rule update per sample with a one-hot target
/// for its label. Nothing is shuffled, so the same initial weights and
/// dataset always produce the same final weights.
///
/// `progress(epoch, total)` is called once after every completed epoch with a
/// 1-based epoch number. Persisting the result is left to the caller.
///
/// # Errors
/// Returns `ShapeMismatch` if a sample's length differs from the classifier's
/// input size or the dataset has more labels than the classifier has outputs.
/// Updates applied before the offending sample are kept.
pub fn train_loop<F>(
    classifier: &mut Classifier,
    dataset: &Dataset,
    config: &TrainConfig,
    mut progress: F,
) -> Result<()>
where
    F: FnMut(usize, usize),
{
    assert!(config.epochs > 0, "epochs must be at least 1");
    assert!(config.learning_rate > 0.0, "learning_rate must be positive");

    info!(
        "training on {} samples for {} epochs (lr = {})",
        dataset.len(),
        config.epochs,
        config.learning_rate
    );
    let t_start = Instant::now();

    for epoch in 1..=config.epochs {
        run_one_epoch(classifier, dataset, config.learning_rate)?;
        debug!("epoch {epoch}/{} done", config.epochs);
        progress(epoch, config.epochs);
    }

    info!("training finished in {} ms", t_start.elapsed().as_millis());
    Ok(())
}

/// One-hot vector of length `size` with 1.0 at `label`.
pub fn one_hot(label: usize, size: usize) -> Vec<f64> {
    let mut target = vec![0.0; size];
    if let Some(slot) = target.get_mut(label) {
        *slot = 1.0;
    }
    target
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn run_one_epoch(classifier: &mut Classifier, dataset: &Dataset, learning_rate: f64) -> Result<()> {
    let outputs = classifier.output_size();
    for label in 0..dataset.num_classes() {
        let target = one_hot(label, outputs.max(label + 1));
        for input in dataset.class(label) {
            classifier.update(input, &target, learning_rate)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classifier::argmax;
    use crate::error::DigitError;
    use crate::math::matrix::Matrix;

    fn toy_dataset() -> Dataset {
        Dataset::from_classes(vec![
            vec![vec![1.0, 0.0, 0.0, 0.0]],
            vec![vec![0.0, 0.0, 0.0, 1.0]],
        ])
    }

    #[test]
    fn one_hot_marks_single_slot() {
        assert_eq!(one_hot(2, 4), vec![0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn progress_reported_once_per_epoch() {
        let mut c = Classifier::seeded(4, 2, 1);
        let mut seen = Vec::new();
        train_loop(&mut c, &toy_dataset(), &TrainConfig::new(3, 0.1), |e, n| seen.push((e, n))).unwrap();
        assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn epoch_matches_manual_label_major_updates() {
        let ds = Dataset::from_classes(vec![
            vec![vec![1.0, 0.0, 1.0], vec![0.0, 1.0, 1.0]],
            vec![vec![1.0, 1.0, 0.0]],
        ]);
        let start = Matrix::from_vec(2, 3, vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]).unwrap();

        let mut trained = Classifier::from_weights(start.clone());
        train_loop(&mut trained, &ds, &TrainConfig::new(2, 0.3), |_, _| {}).unwrap();

        let mut manual = Classifier::from_weights(start);
        for _ in 0..2 {
            manual.update(&[1.0, 0.0, 1.0], &[1.0, 0.0], 0.3).unwrap();
            manual.update(&[0.0, 1.0, 1.0], &[1.0, 0.0], 0.3).unwrap();
            manual.update(&[1.0, 1.0, 0.0], &[0.0, 1.0], 0.3).unwrap();
        }
        assert_eq!(trained.weights(), manual.weights());
    }

    #[test]
    fn separates_toy_classes() {
        let mut c = Classifier::seeded(4, 2, 2024);
        train_loop(&mut c, &toy_dataset(), &TrainConfig::new(500, 0.5), |_, _| {}).unwrap();
        assert_eq!(argmax(&c.predict(&[1.0, 0.0, 0.0, 0.0]).unwrap()), Some(0));
        assert_eq!(argmax(&c.predict(&[0.0, 0.0, 0.0, 1.0]).unwrap()), Some(1));
    }

    #[test]
    fn mis_shaped_sample_aborts_training() {
        let ds = Dataset::from_classes(vec![vec![vec![1.0, 0.0]]]);
        let mut c = Classifier::seeded(4, 2, 1);
        let mut calls = 0;
        let err = train_loop(&mut c, &ds, &TrainConfig::new(5, 0.5), |_, _| calls += 1).unwrap_err();
        assert!(matches!(err, DigitError::ShapeMismatch { what: "input", .. }));
        assert_eq!(calls, 0);
    }

    #[test]
    fn extra_labels_are_shape_mismatch() {
        let ds = Dataset::from_classes(vec![vec![], vec![], vec![vec![1.0; 4]]]);
        let mut c = Classifier::seeded(4, 2, 1);
        let err = train_loop(&mut c, &ds, &TrainConfig::new(1, 0.5), |_, _| {}).unwrap_err();
        assert!(matches!(err, DigitError::ShapeMismatch { what: "target", expected: 2, got: 3 }));
    }
}
