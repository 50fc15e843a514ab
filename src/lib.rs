//! # Festival Bot
//!
//! A Telegram bot for keeping track of who goes to which festival.
//!
//! ## Features
//! - Register with `/login` and list everyone with `/users`
//! - Add festivals with dates and an optional link, list them by start date
//! - Mark yourself as attending, maybe attending or holding a ticket
//! - Persistent storage with SQLite

/// Bot command parsing and handlers
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database models, connections, and migrations
pub mod database;
/// Error type shared by the festival operations
pub mod error;
/// Festival operations and the health endpoint
pub mod services;
/// Utility functions for dates, validation, and reply formatting
pub mod utils;
