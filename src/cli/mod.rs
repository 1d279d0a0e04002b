//! CLI command handlers
//!
//! This module contains the interactive front-end and the small commands
//! around it, bridging the clap argument parsing with the ledger.

pub mod menu;
pub mod session;

pub use menu::{run_menu, MenuChoice};
pub use session::Session;
