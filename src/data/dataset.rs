use crate::error::{DigitError, Result};

/// Labelled training inputs grouped by class.
///
/// Labels run `0..classes`. Iteration is label-major in ascending order and,
/// within a label, in insertion order. Training relies on that order being
/// stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    classes: Vec<Vec<Vec<f64>>>,
}

impl Dataset {
    pub fn new(classes: usize) -> Dataset {
        Dataset { classes: vec![Vec::new(); classes] }
    }

    /// Builds a dataset from one collection per label, label `i` at index `i`.
    pub fn from_classes(classes: Vec<Vec<Vec<f64>>>) -> Dataset {
        Dataset { classes }
    }

    pub fn push(&mut self, label: usize, input: Vec<f64>) -> Result<()> {
        let classes = self.classes.len();
        let bucket = self
            .classes
            .get_mut(label)
            .ok_or(DigitError::UnknownLabel { label, classes })?;
        bucket.push(input);
        Ok(())
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Inputs recorded for `label`, empty if the label is out of range.
    pub fn class(&self, label: usize) -> &[Vec<f64>] {
        self.classes.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of samples across all labels.
    pub fn len(&self) -> usize {
        self.classes.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(label, input)` pairs, label-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[f64])> + '_ {
        self.classes
            .iter()
            .enumerate()
            .flat_map(|(label, inputs)| inputs.iter().map(move |x| (label, x.as_slice())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_label_major_in_insertion_order() {
        let mut ds = Dataset::new(3);
        ds.push(2, vec![2.0]).unwrap();
        ds.push(0, vec![0.0]).unwrap();
        ds.push(2, vec![2.5]).unwrap();
        ds.push(1, vec![1.0]).unwrap();

        let order: Vec<(usize, f64)> = ds.iter().map(|(l, x)| (l, x[0])).collect();
        assert_eq!(order, vec![(0, 0.0), (1, 1.0), (2, 2.0), (2, 2.5)]);
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn rejects_labels_outside_range() {
        let mut ds = Dataset::new(2);
        let err = ds.push(2, vec![1.0]).unwrap_err();
        assert!(matches!(err, DigitError::UnknownLabel { label: 2, classes: 2 }));
        assert!(ds.is_empty());
    }

    #[test]
    fn class_out_of_range_is_empty() {
        let ds = Dataset::new(1);
        assert!(ds.class(5).is_empty());
    }
}
