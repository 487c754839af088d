pub mod config;
pub mod ctrl;
pub mod model;

mod book;
pub use book::*;
