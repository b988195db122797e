//! Common types and utilities for the hooklint analyzer.
//!
//! This crate provides foundational types used across all hooklint crates:
//! - Source spans and locations (`Span`, `SourceLocation`)
//! - Centralized analysis limits and thresholds
//! - String normalization helpers shared by catalogs and checks

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::{SourceLocation, Span};

// Centralized limits and thresholds
pub mod limits;

// Path/identifier normalization helpers
pub mod text;
