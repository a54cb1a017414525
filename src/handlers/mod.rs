//! HTTP handlers.

/// Health check endpoint.
pub mod health;
/// Server-rendered paste page.
pub mod page;
/// Generic create/view API handlers, instantiated per variant.
pub mod records;
