mod expense;
mod ledger;
mod money;
mod summary;

pub use expense::*;
pub use ledger::*;
pub use money::*;
pub use summary::*;
