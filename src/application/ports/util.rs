// src/application/ports/util.rs

/// Normalizes free text into a URL-safe token. Total and deterministic;
/// may return an empty string.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Strips markup from user-supplied free text before persistence.
/// Implementations must be idempotent.
pub trait Sanitizer: Send + Sync {
    fn sanitize(&self, input: &str) -> String;
}
