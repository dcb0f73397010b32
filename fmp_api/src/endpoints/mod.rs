//! Typed endpoint wrappers, implemented as methods on [`Client`](crate::Client).
//!
//! Each wrapper is a fixed composition of parameter resolution, one GET
//! request, and body decoding, plus any endpoint-specific quirk handling.

pub mod earnings;
pub mod quote;
pub mod ticker;
