use std::path::Path;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::activation::activation::sigmoid;
use crate::error::{DigitError, Result};
use crate::math::matrix::Matrix;
use crate::store::weight_store;

/// Single fully-connected layer mapping `input_size` pixels onto
/// `output_size` class scores through a sigmoid. There is no bias and no
/// hidden layer.
///
/// Vectors of the wrong length are rejected with
/// [`DigitError::ShapeMismatch`] before any arithmetic runs, so a failed
/// call never touches the weights.
///
/// `update` mutates the weights in place; callers sharing one classifier
/// between threads must serialise access themselves.
#[derive(Debug, Clone)]
pub struct Classifier {
    input_size: usize,
    output_size: usize,
    weights: Matrix,
}

impl Classifier {
    /// Builds a classifier with weights drawn from an entropy-seeded RNG.
    ///
    /// # Panics
    /// Panics if either size is zero.
    pub fn new(input_size: usize, output_size: usize) -> Classifier {
        Classifier::with_rng(input_size, output_size, &mut StdRng::from_entropy())
    }

    /// Builds a classifier whose initial weights are fully determined by `seed`.
    pub fn seeded(input_size: usize, output_size: usize, seed: u64) -> Classifier {
        Classifier::with_rng(input_size, output_size, &mut StdRng::seed_from_u64(seed))
    }

    /// Builds a classifier drawing each weight uniformly from [0, 1) out of `rng`.
    pub fn with_rng<R: Rng + ?Sized>(input_size: usize, output_size: usize, rng: &mut R) -> Classifier {
        assert!(input_size > 0 && output_size > 0, "classifier sizes must be positive");
        Classifier {
            input_size,
            output_size,
            weights: Matrix::random_uniform(output_size, input_size, rng),
        }
    }

    /// Wraps an existing `output_size × input_size` weight matrix.
    pub fn from_weights(weights: Matrix) -> Classifier {
        assert!(!weights.is_empty(), "classifier sizes must be positive");
        Classifier {
            input_size: weights.cols,
            output_size: weights.rows,
            weights,
        }
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    /// Forward pass: `y[o] = sigmoid(Σ_i input[i] * W[o][i])`.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>> {
        self.check_len("input", self.input_size, input.len())?;
        Ok(self.weights.mul_vec(input).into_iter().map(sigmoid).collect())
    }

    /// One delta-rule step: `W[o][i] += learning_rate * (target[o] - y[o]) * input[i]`.
    ///
    /// Targets may be arbitrary reals; one-hot is only how training uses it.
    pub fn update(&mut self, input: &[f64], target: &[f64], learning_rate: f64) -> Result<()> {
        self.check_len("target", self.output_size, target.len())?;
        let output = self.predict(input)?;

        for (o, (t, y)) in target.iter().zip(output.iter()).enumerate() {
            let step = learning_rate * (t - y);
            for (w, x) in self.weights.row_mut(o).iter_mut().zip(input) {
                *w += step * x;
            }
        }
        Ok(())
    }

    /// Writes the current weights to `path`. See [`weight_store::save`].
    pub fn save_weights<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        weight_store::save(&self.weights, path)
    }

    /// Reads weights from `path` over the current ones.
    ///
    /// A short file only overwrites the leading weights; see
    /// [`weight_store::load_into`].
    pub fn load_weights<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        weight_store::load_into(path, &mut self.weights)
    }

    fn check_len(&self, what: &'static str, expected: usize, got: usize) -> Result<()> {
        if expected != got {
            return Err(DigitError::ShapeMismatch { what, expected, got });
        }
        Ok(())
    }
}

/// Index of the largest entry; ties go to the lowest index.
///
/// Returns `None` for an empty slice. NaN entries never win.
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b || v.is_nan() => {}
            None if v.is_nan() => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}
