//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer provides the execution modes a sampling run can take: eager
//! batch materialization of a full trace, or lazy streaming of one sample
//! at a time.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Eager batch sampling.
pub mod batch;

/// Lazy one-sample-at-a-time iteration.
pub mod streaming;
