pub mod page;
pub mod draw;
