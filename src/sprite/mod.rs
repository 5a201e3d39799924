//! Sprite assembly: the clip fold and the timeline map derived from it.

/// Clip concatenation and frame-offset bookkeeping.
pub mod assembler;
/// Loop membership.
pub mod loops;
/// Timeline entries and the exported manifest.
pub mod timeline;
