//! Command implementations for revid-cli

pub mod describe;
pub mod exec;
pub mod options;

pub use describe::{run_describe, run_generate};
pub use exec::run_exec;
pub use options::run_options;
