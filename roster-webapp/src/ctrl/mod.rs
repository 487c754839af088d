mod error;
pub use error::*;

mod contacts;
pub use contacts::*;
