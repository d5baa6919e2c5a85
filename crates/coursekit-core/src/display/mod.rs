//! Display formatting functions and wrapper types.
//!
//! This module provides the presentation side of the library: helpers that
//! turn raw values (minutes, prices, difficulty levels) into readable text,
//! `Display` implementations for the domain models, wrapper types for
//! collections, and user-facing notifications.
//!
//! # Architecture: Display Functions and Wrappers
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Format Functions│    │   Formatted     │
//! │ (Course, ...)   │───▶│ & Wrappers      │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`format`]: Duration and price formatting
//! - [`collections`]: Collection wrapper types (Courses, ProgramListing,
//!   Programs)
//! - [`status`]: User notifications (Notification, NotificationLevel)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use coursekit_core::display::{format_duration, format_price, Notification};
//!
//! assert_eq!(format_duration(45), "45 min");
//! assert_eq!(format_duration(150), "2 h 30 min");
//! assert_eq!(format_price(0.0), "Free");
//!
//! let note = Notification::success("Program saved");
//! assert!(note.to_string().contains("Program saved"));
//! ```
//!
//! All formatters produce markdown suitable for the CLI's terminal renderer.

pub mod collections;
pub mod datetime;
pub mod format;
pub mod models;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{Courses, ProgramListing, Programs};
pub use datetime::LocalDateTime;
pub use format::{format_duration, format_price};
pub use status::{Notification, NotificationLevel};
