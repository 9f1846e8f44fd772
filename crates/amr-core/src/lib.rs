//! AMR core: transparent asset URL rewriting.
//!
//! Resolves outgoing asset URLs against an ordered redirect rule table,
//! verifies that the substitute asset actually exists on the mirror before
//! redirecting, and caches decisions (in-memory existence results for the
//! process lifetime, resolved URLs persistently across runs).
//!
//! The engine is synchronous and single-threaded by design; async hosts
//! should drive it from `spawn_blocking` or equivalent.

pub mod config;
pub mod logging;

pub mod cache;
pub mod existence;
pub mod observer;
pub mod probe;
pub mod resolve;
pub mod rules;
