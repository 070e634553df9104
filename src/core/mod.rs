//! Core business logic, independent of the HTTP layer.
//!
//! Every store access goes through these modules; handlers only translate
//! requests into calls here and results into responses.

/// Popularity aggregates, recommendations and subscriber statistics
pub mod analytics;
/// Menu catalog operations
pub mod menu;
/// Out-of-band order recording
pub mod order;
/// Starter menu seeding
pub mod seed;
/// Sign-ups and subscriber queries
pub mod subscription;
/// Image upload storage
pub mod upload;
