use std::sync::{Arc, Mutex};

use digit_nn::DrawingSession;

/// Everything the request handlers share.
pub struct PadState {
    pub session:    DrawingSession,
    /// Side of the capture grid the page renders; `image_size²` cells.
    pub image_size: u32,
}

impl PadState {
    pub fn new(session: DrawingSession, image_size: u32) -> Self {
        PadState { session, image_size }
    }
}

/// Shared state type — an `Arc<Mutex<PadState>>` passed to every handler.
pub type SharedState = Arc<Mutex<PadState>>;
