//! Domain models for the countdown.
//!
//! - `event` - The single configured countdown and its fired reminder markers
//! - `reminder` - Reminder thresholds and per-tick fire decisions
//! - `tick` - Plans and reports produced by one reconciliation tick
//! - `command` - Parameters and results of the chat command operations

pub mod command;
pub mod event;
pub mod reminder;
pub mod tick;
