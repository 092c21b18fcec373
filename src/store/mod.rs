pub mod weight_store;

pub use weight_store::{load, load_into, save};
