//! Homework Core
//!
//! Core types and pure logic for the homework status bot.
//!
//! This crate contains:
//! - Domain types: review status codes, the verdict mapping, the request cursor
//! - Validation: shape checks on the raw review API payload
//! - Interpretation: turning a submission record into notification text
//!
//! Nothing in here performs I/O; the bot crate wires these pieces to the
//! HTTP clients.

pub mod domain;
pub mod error;
pub mod interpreter;
pub mod validator;

pub use domain::cursor::Cursor;
pub use domain::homework::HomeworkStatus;
pub use error::{InterpretError, SchemaError};
pub use interpreter::parse_status;
pub use validator::check_response;
