//! This module defines data structures for representing coordinates on a
//! single record.
//!
//! It provides two main structures:
//!
//! - [`Span`]: a contiguous half-open interval `[start, end)`.
//! - [`Location`]: the location of a feature, either a single span or a
//!   compound of several disjoint parts, with a strand.
//!
//! Coordinates are 0-based and end-exclusive throughout the crate.


mod location;
mod span;

pub use location::Location;
pub use span::Span;
