//! Data models for stored records and API responses.

/// Stored record entity and response shapes.
pub mod record;

#[cfg(test)]
mod tests;
