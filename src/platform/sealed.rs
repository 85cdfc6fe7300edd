// ABOUTME: Sealed trait pattern for platform traits.
// ABOUTME: Prevents external implementations, allowing non-breaking evolution.

/// Sealed trait to prevent external implementations.
///
/// Only types that implement Sealed (our internal platform clients) can
/// implement the platform traits.
pub trait Sealed {}
