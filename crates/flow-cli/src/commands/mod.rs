//! Command implementations for flow-cli

pub mod choices;
pub mod run;
pub mod status;

pub use choices::run_choices;
pub use run::{RunOptions, run_action};
pub use status::run_status;
