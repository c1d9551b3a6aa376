//! Braze Core - Builder protocol and builder kinds for the braze kernel.
//!
//! This crate provides the accumulator side of the braze transformation
//! layer:
//!
//! - `Builder`: the accumulator capability (merge one element, finish into a
//!   collection), with linear use tracked by an explicit state flag
//! - `SplitBuilder`: the partitioning contract that makes parallel execution
//!   safe (split into independent parts, join in ascending part order)
//! - `Appender`: the default order-preserving builder kind
//! - `Merger` / `DictMerger`: reduction and keyed-consolidation builder kinds
//! - `Error`: error types for builder contract violations
//!
//! # Example
//!
//! ```rust
//! use braze_core::{Appender, Builder, SplitBuilder};
//!
//! let mut appender = Appender::new();
//! appender.merge(1).unwrap();
//! appender.merge(2).unwrap();
//! assert_eq!(appender.finish().unwrap(), vec![1, 2]);
//!
//! // A finished builder cannot be reused.
//! assert!(appender.merge(3).is_err());
//!
//! // Split parts joined in order reproduce the sequential result.
//! let mut parts = Appender::new().split(2).unwrap();
//! parts[0].merge("left").unwrap();
//! parts[1].merge("right").unwrap();
//! let mut joined = Appender::join(parts).unwrap();
//! assert_eq!(joined.finish().unwrap(), vec!["left", "right"]);
//! ```

#![no_std]

extern crate alloc;

mod appender;
mod builder;
mod dict_merger;
mod error;
mod merger;

pub use appender::Appender;
pub use builder::{Builder, SplitBuilder};
pub use dict_merger::DictMerger;
pub use error::{Error, Result};
pub use merger::{Combine, MaxCombine, Merger, MinCombine, SumCombine};
