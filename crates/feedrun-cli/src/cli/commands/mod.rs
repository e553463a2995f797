//! CLI command handlers.

mod list;
mod run;

pub use list::run_list;
pub use run::run_batch;
