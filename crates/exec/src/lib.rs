//! Braze Exec - Iteration drivers for the braze kernel.
//!
//! This crate provides the loop side of the braze transformation layer: an
//! index-ordered traversal that threads a builder through a step function.
//!
//! - `for_each`: sequential driver over one collection; the step receives the
//!   builder, the element index, and the element, and returns the builder
//! - `for_each_zip`: lockstep driver over two collections of equal length
//! - `par_for_each` / `par_for_each_zip` (feature `parallel`): chunked
//!   drivers that split the builder, run each chunk sequentially against a
//!   private part, and join the parts in chunk order
//! - `ExecConfig`: worker count and sequential-fallback threshold
//!
//! Nesting composes directly: a step may call `for_each` again with the
//! builder it was handed, and return the inner result as its own result.
//!
//! # Example
//!
//! ```rust
//! use braze_core::{Appender, Builder};
//! use braze_exec::for_each;
//!
//! let data = [1, 2, 3];
//! let mut built = for_each(&data, Appender::new(), |mut b, _i, &x| {
//!     b.merge(x * 2)?;
//!     Ok(b)
//! })
//! .unwrap();
//! assert_eq!(built.finish().unwrap(), vec![2, 4, 6]);
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "parallel")]
extern crate std;

mod config;
mod driver;
#[cfg(feature = "parallel")]
mod parallel;

pub use config::ExecConfig;
pub use driver::{for_each, for_each_zip};
#[cfg(feature = "parallel")]
pub use parallel::{par_for_each, par_for_each_zip};
