mod repository;

pub use repository::*;
pub(crate) use repository::write_pretty_json;
