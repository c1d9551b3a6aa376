//! Braze Ops - map / filter / flatten over the braze builder protocol.
//!
//! The three operations are thin compositions of an `Appender` and a loop
//! driver: map merges the transformed element for every index, filter merges
//! the element only when the predicate holds, and flatten runs a nested loop
//! that merges every inner element into the same outer builder. All of them
//! are all-or-nothing: the first failure aborts the operation and no partial
//! result is produced.
//!
//! With the `parallel` feature (on by default), each operation also has a
//! `par_*` variant taking an `ExecConfig`; results are identical to the
//! sequential forms, including element order.
//!
//! # Example
//!
//! ```rust
//! use braze_ops::{filter, flatten, map};
//!
//! assert_eq!(map(&[1, 2, 3], |&x| x * 2).unwrap(), vec![2, 4, 6]);
//! assert_eq!(filter(&[1, 2, 3, 4], |&x| x % 2 == 0).unwrap(), vec![2, 4]);
//!
//! let nested = [vec![1, 2], vec![], vec![3]];
//! assert_eq!(flatten(&nested).unwrap(), vec![1, 2, 3]);
//! ```

#![no_std]

extern crate alloc;

mod filter;
mod flatten;
mod map;

pub use filter::{filter, try_filter};
pub use flatten::flatten;
pub use map::{map, map_zip, try_map};

#[cfg(feature = "parallel")]
pub use filter::par_filter;
#[cfg(feature = "parallel")]
pub use flatten::par_flatten;
#[cfg(feature = "parallel")]
pub use map::par_map;

#[cfg(feature = "parallel")]
pub use braze_exec::ExecConfig;
