//! Flatten operation.

use alloc::vec::Vec;
use braze_core::{Appender, Builder, Result};
use braze_exec::for_each;

#[cfg(feature = "parallel")]
use braze_exec::{par_for_each, ExecConfig};

/// Concatenates a collection of collections in order.
///
/// The outer loop iterates `data`; for each outer element an inner loop
/// merges every element into the same accumulating builder, so the result
/// preserves both outer and inner orders and its length is the sum of the
/// inner lengths. The element type is this function's type parameter,
/// resolved by inference at the call site (annotate when nothing constrains
/// it).
pub fn flatten<C, T>(data: &[C]) -> Result<Vec<T>>
where
    C: AsRef<[T]>,
    T: Clone,
{
    let mut built = for_each(data, Appender::new(), |b, _i, inner| {
        for_each(inner.as_ref(), b, |mut b, _j, item| {
            b.merge(item.clone())?;
            Ok(b)
        })
    })?;
    built.finish()
}

/// Parallel variant of `flatten`: outer elements are chunked across workers,
/// inner loops stay sequential within their chunk. Produces exactly the
/// sequential result.
#[cfg(feature = "parallel")]
pub fn par_flatten<C, T>(data: &[C], config: &ExecConfig) -> Result<Vec<T>>
where
    C: AsRef<[T]> + Sync,
    T: Clone + Send,
{
    let mut built = par_for_each(data, Appender::new(), config, |b, _i, inner| {
        for_each(inner.as_ref(), b, |mut b, _j, item| {
            b.merge(item.clone())?;
            Ok(b)
        })
    })?;
    built.finish()
}
