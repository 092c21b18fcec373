//! digit-nn training driver
//!
//! Trains the digit classifier from the image folders (or resumes from a
//! saved weight file) and writes the weights for the drawing pad.
//!
//! Run with:
//!   cargo run --release -- [fresh|resume] [config.json]
//!
//! `fresh` (the default) always trains from random weights. `resume` loads
//! the saved weights and skips training, falling back to a fresh run if the
//! file cannot be opened.

use std::env;
use std::process;

use log::{error, info, warn};

use digit_nn::data::DatasetLayout;
use digit_nn::{train_loop, AppConfig, Classifier, ProgressBar, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Fresh,
    Resume,
}

fn parse_args() -> (Mode, Option<String>) {
    let mut mode = Mode::Fresh;
    let mut config_path = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "fresh" | "0" => mode = Mode::Fresh,
            "resume" | "1" => mode = Mode::Resume,
            _ => config_path = Some(arg),
        }
    }
    (mode, config_path)
}

fn new_classifier(config: &AppConfig) -> Classifier {
    match config.seed {
        Some(seed) => Classifier::seeded(config.input_size(), config.classes, seed),
        None => Classifier::new(config.input_size(), config.classes),
    }
}

fn train(classifier: &mut Classifier, config: &AppConfig) -> Result<()> {
    let layout = DatasetLayout::new(&config.dataset_root, config.samples_per_class);
    let dataset = layout.load(config.image_size)?;

    println!("Training the classifier...");
    let mut bar = ProgressBar::default();
    train_loop(classifier, &dataset, &config.train_config(), |epoch, total| {
        bar.draw(epoch, total);
    })?;
    println!("\nTraining complete.");

    classifier.save_weights(&config.weights_path)
}

fn run() -> Result<()> {
    let (mode, config_path) = parse_args();
    let config = AppConfig::from_optional_path(config_path.as_deref())?;
    let mut classifier = new_classifier(&config);

    let resumed = mode == Mode::Resume
        && match classifier.load_weights(&config.weights_path) {
            Ok(()) => {
                info!("resumed from {}", config.weights_path);
                true
            }
            Err(e) => {
                warn!("could not load {}: {e}; training from scratch", config.weights_path);
                false
            }
        };

    if !resumed {
        train(&mut classifier, &config)?;
    }

    println!("Weights ready at {}.", config.weights_path);
    println!("Start the drawing pad with `cargo run --release --bin pad` and open http://{}", config.pad_addr);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        error!("{e}");
        process::exit(1);
    }
}
