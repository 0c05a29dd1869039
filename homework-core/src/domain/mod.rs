//! Core domain types
//!
//! Types shared between the pure validation/interpretation logic and the bot
//! that polls the review API.

pub mod cursor;
pub mod homework;
