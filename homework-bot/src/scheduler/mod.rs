//! Scheduler layer for the bot
//!
//! This layer drives the poll cycle: fetch statuses, validate, interpret,
//! notify on change, sleep, repeat.

pub mod poller;

pub use poller::StatusPoller;
