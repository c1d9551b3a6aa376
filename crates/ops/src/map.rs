//! Map operation.

use alloc::vec::Vec;
use braze_core::{Appender, Builder, Result};
use braze_exec::{for_each, for_each_zip};

#[cfg(feature = "parallel")]
use braze_exec::{par_for_each, ExecConfig};

/// Applies `func` to every element of `data` in index order.
///
/// The result has the same length as `data`, and `result[i]` is
/// `func(&data[i])` for every index.
pub fn map<T, U, F>(data: &[T], func: F) -> Result<Vec<U>>
where
    F: Fn(&T) -> U,
{
    let mut built = for_each(data, Appender::with_capacity(data.len()), |mut b, _i, item| {
        b.merge(func(item))?;
        Ok(b)
    })?;
    built.finish()
}

/// Fallible variant of `map`: the first `func` error aborts the whole
/// operation and no partial result is produced.
pub fn try_map<T, U, F>(data: &[T], func: F) -> Result<Vec<U>>
where
    F: Fn(&T) -> Result<U>,
{
    let mut built = for_each(data, Appender::with_capacity(data.len()), |mut b, _i, item| {
        b.merge(func(item)?)?;
        Ok(b)
    })?;
    built.finish()
}

/// Applies `func` across two collections in lockstep.
///
/// Fails with `Error::LengthMismatch` if the inputs have different lengths.
pub fn map_zip<L, R, U, F>(left: &[L], right: &[R], func: F) -> Result<Vec<U>>
where
    F: Fn(&L, &R) -> U,
{
    let mut built = for_each_zip(
        left,
        right,
        Appender::with_capacity(left.len()),
        |mut b, _i, l, r| {
            b.merge(func(l, r))?;
            Ok(b)
        },
    )?;
    built.finish()
}

/// Parallel variant of `map`. Produces exactly the sequential result;
/// `func` must not rely on cross-element evaluation order.
#[cfg(feature = "parallel")]
pub fn par_map<T, U, F>(data: &[T], config: &ExecConfig, func: F) -> Result<Vec<U>>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync,
{
    let mut built = par_for_each(
        data,
        Appender::with_capacity(data.len()),
        config,
        |mut b, _i, item| {
            b.merge(func(item))?;
            Ok(b)
        },
    )?;
    built.finish()
}
