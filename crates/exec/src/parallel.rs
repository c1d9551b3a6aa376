//! Chunked parallel drivers.
//!
//! The index range is partitioned into contiguous chunks; the builder is
//! split into exactly as many parts, each chunk runs the sequential step
//! against its private part, and the finished parts are joined in ascending
//! chunk order. The join is the only synchronization point: no shared
//! mutable state crosses chunk boundaries.

use crate::config::ExecConfig;
use crate::driver::{for_each, for_each_zip};
use alloc::vec::Vec;
use braze_core::{Error, Result, SplitBuilder};
use rayon::prelude::*;

/// Parallel variant of `for_each`.
///
/// Produces exactly the sequential result, including element order, for any
/// worker count. Falls back to the sequential driver for small inputs or a
/// single worker. Any chunk error aborts the whole run; the other chunks'
/// partial builders are discarded.
pub fn par_for_each<T, B, F>(data: &[T], builder: B, config: &ExecConfig, step: F) -> Result<B>
where
    T: Sync,
    B: SplitBuilder + Send,
    F: Fn(B, usize, &T) -> Result<B> + Sync,
{
    let workers = config.effective_workers();
    if workers <= 1 || data.len() <= config.sequential_threshold {
        log::trace!(
            "par_for_each: sequential fallback for {} elements",
            data.len()
        );
        return for_each(data, builder, step);
    }

    let chunk_len = data.len().div_ceil(workers);
    let chunks = data.len().div_ceil(chunk_len);
    log::debug!(
        "par_for_each: {} elements in {} chunks of up to {}",
        data.len(),
        chunks,
        chunk_len
    );

    let parts = builder.split(chunks)?;
    let merged: Result<Vec<B>> = data
        .par_chunks(chunk_len)
        .zip(parts.into_par_iter())
        .enumerate()
        .map(|(chunk_index, (chunk, part))| {
            let base = chunk_index * chunk_len;
            for_each(chunk, part, |b, i, item| step(b, base + i, item))
        })
        .collect();

    B::join(merged?)
}

/// Parallel variant of `for_each_zip`.
///
/// Both inputs are chunked identically so every step still sees aligned
/// elements under their global index.
pub fn par_for_each_zip<L, R, B, F>(
    left: &[L],
    right: &[R],
    builder: B,
    config: &ExecConfig,
    step: F,
) -> Result<B>
where
    L: Sync,
    R: Sync,
    B: SplitBuilder + Send,
    F: Fn(B, usize, &L, &R) -> Result<B> + Sync,
{
    if left.len() != right.len() {
        return Err(Error::length_mismatch(left.len(), right.len()));
    }

    let workers = config.effective_workers();
    if workers <= 1 || left.len() <= config.sequential_threshold {
        log::trace!(
            "par_for_each_zip: sequential fallback for {} element pairs",
            left.len()
        );
        return for_each_zip(left, right, builder, step);
    }

    let chunk_len = left.len().div_ceil(workers);
    let chunks = left.len().div_ceil(chunk_len);
    log::debug!(
        "par_for_each_zip: {} element pairs in {} chunks of up to {}",
        left.len(),
        chunks,
        chunk_len
    );

    let parts = builder.split(chunks)?;
    let merged: Result<Vec<B>> = left
        .par_chunks(chunk_len)
        .zip(right.par_chunks(chunk_len))
        .zip(parts.into_par_iter())
        .enumerate()
        .map(|(chunk_index, ((left_chunk, right_chunk), part))| {
            let base = chunk_index * chunk_len;
            for_each_zip(left_chunk, right_chunk, part, |b, i, l, r| {
                step(b, base + i, l, r)
            })
        })
        .collect();

    B::join(merged?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use braze_core::{Appender, Builder, Error, Merger, SumCombine};

    fn small_config() -> ExecConfig {
        ExecConfig::with_workers(4).sequential_below(0)
    }

    #[test]
    fn test_par_for_each_matches_sequential() {
        let data: Vec<i64> = (0..5000).collect();
        let mut built = par_for_each(&data, Appender::new(), &small_config(), |mut b, _i, &x| {
            b.merge(x * 2)?;
            Ok(b)
        })
        .unwrap();

        let expected: Vec<i64> = data.iter().map(|&x| x * 2).collect();
        assert_eq!(built.finish().unwrap(), expected);
    }

    #[test]
    fn test_par_for_each_preserves_global_indices() {
        let data: Vec<i64> = (0..2000).collect();
        let mut built = par_for_each(&data, Appender::new(), &small_config(), |mut b, i, _x| {
            b.merge(i)?;
            Ok(b)
        })
        .unwrap();

        let expected: Vec<usize> = (0..2000).collect();
        assert_eq!(built.finish().unwrap(), expected);
    }

    #[test]
    fn test_par_for_each_empty_input() {
        let data: Vec<i64> = Vec::new();
        let mut built = par_for_each(&data, Appender::new(), &small_config(), |mut b, _i, &x| {
            b.merge(x)?;
            Ok(b)
        })
        .unwrap();

        assert!(built.finish().unwrap().is_empty());
    }

    #[test]
    fn test_par_for_each_more_workers_than_elements() {
        let data = [1i64, 2, 3];
        let config = ExecConfig::with_workers(16).sequential_below(0);
        let mut built = par_for_each(&data, Appender::new(), &config, |mut b, _i, &x| {
            b.merge(x)?;
            Ok(b)
        })
        .unwrap();

        assert_eq!(built.finish().unwrap(), [1, 2, 3]);
    }

    #[test]
    fn test_par_for_each_fail_fast_discards_partial_work() {
        let data: Vec<i64> = (0..3000).collect();
        let result = par_for_each(&data, Appender::new(), &small_config(), |mut b, _i, &x| {
            if x == 1500 {
                return Err(Error::user_function("boom"));
            }
            b.merge(x)?;
            Ok(b)
        });

        assert!(matches!(result, Err(Error::UserFunction { .. })));
    }

    #[test]
    fn test_par_for_each_reduction() {
        let data: Vec<i64> = (1..=4000).collect();
        let mut built = par_for_each(
            &data,
            Merger::<i64, SumCombine>::new(),
            &small_config(),
            |mut b, _i, &x| {
                b.merge(x)?;
                Ok(b)
            },
        )
        .unwrap();

        assert_eq!(built.finish().unwrap(), (1..=4000i64).sum::<i64>());
    }

    #[test]
    fn test_par_for_each_zip_matches_sequential() {
        let left: Vec<i64> = (0..3000).collect();
        let right: Vec<i64> = (0..3000).rev().collect();
        let mut built = par_for_each_zip(
            &left,
            &right,
            Appender::new(),
            &small_config(),
            |mut b, _i, &l, &r| {
                b.merge(l + r)?;
                Ok(b)
            },
        )
        .unwrap();

        let result = built.finish().unwrap();
        assert_eq!(result.len(), 3000);
        assert!(result.iter().all(|&v| v == 2999));
    }

    #[test]
    fn test_par_for_each_zip_length_mismatch() {
        let left = [1i64, 2, 3];
        let right = [1i64];
        let result = par_for_each_zip(
            &left,
            &right,
            Appender::new(),
            &small_config(),
            |mut b, _i, &l, &r| {
                b.merge(l + r)?;
                Ok(b)
            },
        );

        assert_eq!(result.unwrap_err(), Error::length_mismatch(3, 1));
    }

    #[test]
    fn test_sequential_fallback_below_threshold() {
        let data = [1i64, 2, 3];
        let config = ExecConfig::with_workers(8).sequential_below(1024);
        let mut built = par_for_each(&data, Appender::new(), &config, |mut b, _i, &x| {
            b.merge(x)?;
            Ok(b)
        })
        .unwrap();

        assert_eq!(built.finish().unwrap(), [1, 2, 3]);
    }
}
