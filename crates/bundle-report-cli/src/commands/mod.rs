//! Command implementations.
//!
//! - [`convert`] - Metafile to report JSON
//! - [`upload`] - Metafile to report, uploaded from GitHub Actions
//! - [`check`] - Metafile summary
//!
//! Each command provides an `execute` function taking its parsed arguments.

pub mod check;
pub mod convert;
pub mod upload;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use convert::execute as convert_execute;
pub use upload::execute as upload_execute;
