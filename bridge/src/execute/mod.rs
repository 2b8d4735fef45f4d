//! Execute handlers for the Stream Bridge contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `outgoing` - Stream intent handlers
//! - `dispatch` - Value split, nonce assignment and publish
//! - `config` - Target chain, arbiter fee and consistency level
//! - `admin` - Pause, unpause, admin transfer and claims

mod admin;
mod config;
mod dispatch;
mod outgoing;

pub use admin::*;
pub use config::*;
pub use dispatch::*;
pub use outgoing::*;
