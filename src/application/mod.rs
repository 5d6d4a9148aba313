// Application layer: the service the CLI drives, plus report shapes.

pub mod error;
pub mod reporting;
mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
