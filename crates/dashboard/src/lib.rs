//! The dashboard aggregator.
//!
//! Fans out to the user and product services, folds both outcomes into one
//! UI state, and re-synchronizes from authoritative server state after every
//! mutation. All state transitions go through the pure reducer in [`state`];
//! the controller in [`controller`] owns the network side.

pub mod client;
pub mod controller;
pub mod state;
pub mod ui;

pub use controller::Dashboard;
