use rand::Rng;

/// Dense row-major matrix of `f64`.
///
/// Element `(r, c)` lives at `data[r * cols + c]`. The classifier uses one
/// row per output unit and one column per input pixel, so iterating `data`
/// front to back visits output units in order and, within each, every input.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Fills a `rows × cols` matrix with independent uniform draws in [0, 1).
    ///
    /// Draw order follows storage order, so a seeded `rng` always produces
    /// the same matrix.
    pub fn random_uniform<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let data = (0..rows * cols).map(|_| rng.gen::<f64>()).collect();
        Matrix { rows, cols, data }
    }

    /// Wraps an existing row-major buffer. Returns `None` when the buffer
    /// length is not `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Option<Matrix> {
        if data.len() != rows * cols {
            return None;
        }
        Some(Matrix { rows, cols, data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Matrix-vector product `self · v`, one dot product per row.
    ///
    /// # Panics
    /// Panics if `v.len() != self.cols`.
    pub fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(v.len(), self.cols, "vector length must equal column count");
        (0..self.rows)
            .map(|r| self.row(r).iter().zip(v).map(|(w, x)| w * x).sum())
            .collect()
    }
}
