//! Repository layer
//!
//! Repositories are thin adapters over the HTTP clients. They give the
//! scheduler narrow, trait-based interfaces to the review API and to the
//! chat, without any business logic.
//!
//! All repositories are trait-based to enable testing and mocking.

mod messages;
mod statuses;

// Re-export traits
pub use messages::MessageRepository;
pub use statuses::StatusRepository;

// Re-export implementations
pub use messages::TelegramMessageRepository;
pub use statuses::HttpStatusRepository;
