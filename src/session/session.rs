use serde::Serialize;

use crate::classifier::classifier::{argmax, Classifier};
use crate::error::{DigitError, Result};

/// Lifecycle of the drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Nothing drawn since the last prediction.
    Idle,
    /// A finished stroke has been captured and is waiting to be classified.
    HasPendingDrawing(Vec<f64>),
}

/// Result of classifying one drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub digit: usize,
    pub outputs: Vec<f64>,
}

/// Owns the classifier used for interactive recognition and tracks whether
/// a drawing is ready to be classified.
#[derive(Debug)]
pub struct DrawingSession {
    classifier: Classifier,
    state: SessionState,
}

impl DrawingSession {
    pub fn new(classifier: Classifier) -> Self {
        DrawingSession { classifier, state: SessionState::Idle }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Records a captured drawing, replacing any earlier pending one.
    pub fn submit(&mut self, input: Vec<f64>) -> Result<()> {
        let expected = self.classifier.input_size();
        if input.len() != expected {
            return Err(DigitError::ShapeMismatch { what: "drawing", expected, got: input.len() });
        }
        self.state = SessionState::HasPendingDrawing(input);
        Ok(())
    }

    /// Classifies the pending drawing and returns to `Idle`.
    ///
    /// Returns `None` when nothing is pending.
    pub fn take_prediction(&mut self) -> Option<Result<Prediction>> {
        match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Idle => None,
            SessionState::HasPendingDrawing(input) => Some(self.classify(&input)),
        }
    }

    pub fn clear(&mut self) {
        self.state = SessionState::Idle;
    }

    fn classify(&self, input: &[f64]) -> Result<Prediction> {
        let outputs = self.classifier.predict(input)?;
        // predict never returns an empty vector for a constructed classifier
        let digit = argmax(&outputs).unwrap_or(0);
        Ok(Prediction { digit, outputs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;

    fn session() -> DrawingSession {
        let w = Matrix::from_vec(3, 2, vec![-5.0, -5.0, 5.0, -5.0, -5.0, 5.0]).unwrap();
        DrawingSession::new(Classifier::from_weights(w))
    }

    #[test]
    fn starts_idle_and_predicts_nothing() {
        let mut s = session();
        assert_eq!(s.state(), &SessionState::Idle);
        assert!(s.take_prediction().is_none());
    }

    #[test]
    fn pending_drawing_is_consumed_by_prediction() {
        let mut s = session();
        s.submit(vec![0.0, 1.0]).unwrap();
        assert!(matches!(s.state(), SessionState::HasPendingDrawing(_)));

        let p = s.take_prediction().unwrap().unwrap();
        assert_eq!(p.digit, 2);
        assert_eq!(p.outputs.len(), 3);
        assert_eq!(s.state(), &SessionState::Idle);
        assert!(s.take_prediction().is_none());
    }

    #[test]
    fn later_drawing_replaces_earlier_one() {
        let mut s = session();
        s.submit(vec![0.0, 1.0]).unwrap();
        s.submit(vec![1.0, 0.0]).unwrap();
        assert_eq!(s.take_prediction().unwrap().unwrap().digit, 1);
    }

    #[test]
    fn wrong_size_drawing_keeps_state() {
        let mut s = session();
        assert!(s.submit(vec![1.0; 5]).is_err());
        assert_eq!(s.state(), &SessionState::Idle);
    }

    #[test]
    fn clear_discards_pending_drawing() {
        let mut s = session();
        s.submit(vec![1.0, 1.0]).unwrap();
        s.clear();
        assert!(s.take_prediction().is_none());
    }
}
