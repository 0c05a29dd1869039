//! Service layer
//!
//! Services hold the bot's business rules on top of the repositories.
//! Currently that is notification delivery, which must never fail loudly.

mod notifier;

pub use notifier::Notifier;
