//! Filter operation.

use alloc::vec::Vec;
use braze_core::{Appender, Builder, Result};
use braze_exec::for_each;

#[cfg(feature = "parallel")]
use braze_exec::{par_for_each, ExecConfig};

/// Keeps the elements of `data` satisfying `pred`, in their original order.
///
/// The result is the order-preserving subsequence of `data` on which `pred`
/// holds; its length is not known until the operation completes.
pub fn filter<T, F>(data: &[T], pred: F) -> Result<Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    let mut built = for_each(data, Appender::new(), |mut b, _i, item| {
        if pred(item) {
            b.merge(item.clone())?;
        }
        Ok(b)
    })?;
    built.finish()
}

/// Fallible variant of `filter`: the first `pred` error aborts the whole
/// operation and no partial result is produced.
pub fn try_filter<T, F>(data: &[T], pred: F) -> Result<Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> Result<bool>,
{
    let mut built = for_each(data, Appender::new(), |mut b, _i, item| {
        if pred(item)? {
            b.merge(item.clone())?;
        }
        Ok(b)
    })?;
    built.finish()
}

/// Parallel variant of `filter`. Produces exactly the sequential result.
#[cfg(feature = "parallel")]
pub fn par_filter<T, F>(data: &[T], config: &ExecConfig, pred: F) -> Result<Vec<T>>
where
    T: Clone + Send + Sync,
    F: Fn(&T) -> bool + Sync,
{
    let mut built = par_for_each(data, Appender::new(), config, |mut b, _i, item| {
        if pred(item) {
            b.merge(item.clone())?;
        }
        Ok(b)
    })?;
    built.finish()
}
