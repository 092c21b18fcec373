use std::f64::consts::E;

/// Logistic sigmoid, range (0, 1). The only output nonlinearity the
/// classifier uses.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}
