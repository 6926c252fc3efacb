//! Command handlers.
//!
//! One module per subcommand.  Handlers translate CLI arguments into core
//! service calls and display results; no business logic lives here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod scan;
