//! Option file parsing for revid
//!
//! Turns free-form `KEY = value` text into an [`OptionTable`] and exposes
//! typed lookups (string, list, integer, enum) that fall back to caller
//! defaults instead of failing.

pub mod accessors;
pub mod cancel;
pub mod error;
pub mod keys;
pub mod parser;

pub use accessors::{OptionEnum, OptionLookup};
pub use cancel::CancellationFlag;
pub use error::{Error, Result};
pub use keys::ConfigKey;
pub use parser::{OptionTable, load_options, parse_lines, parse_options, split_lines};
