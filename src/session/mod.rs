pub mod session;

pub use session::{DrawingSession, Prediction, SessionState};
