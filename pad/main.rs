//! digit-nn drawing pad
//!
//! Serves a browser canvas for freehand digits and classifies each drawing
//! with the weights written by the training driver.
//!
//! Run with:
//!   cargo run --release --bin pad -- [config.json]
//! Then open http://127.0.0.1:7878

mod state;
mod routes;
mod handlers;
mod util;

use std::process;
use std::sync::{Arc, Mutex};

use log::{error, info};
use tiny_http::Server;

use digit_nn::{store, AppConfig, DrawingSession, Result};

fn build_session(config: &AppConfig) -> Result<DrawingSession> {
    let weights = store::load(&config.weights_path, config.input_size(), config.classes)?;
    Ok(DrawingSession::new(digit_nn::Classifier::from_weights(weights)))
}

fn main() {
    env_logger::init();

    let config_path = std::env::args().nth(1);
    let config = match AppConfig::from_optional_path(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let session = match build_session(&config) {
        Ok(s) => s,
        Err(e) => {
            error!("cannot load weights from {}: {e}; run the trainer first", config.weights_path);
            process::exit(1);
        }
    };

    let server = match Server::http(&config.pad_addr) {
        Ok(s) => s,
        Err(e) => {
            error!("failed to bind {}: {e}", config.pad_addr);
            process::exit(1);
        }
    };
    info!("drawing pad listening at http://{}", config.pad_addr);
    println!("Open http://{} and draw a digit; press Enter to recognise it.", config.pad_addr);

    let shared_state = Arc::new(Mutex::new(state::PadState::new(session, config.image_size)));

    for request in server.incoming_requests() {
        let state_clone = shared_state.clone();
        std::thread::spawn(move || {
            routes::dispatch(request, state_clone);
        });
    }
}
