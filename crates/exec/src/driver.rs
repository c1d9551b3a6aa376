//! Sequential loop drivers.

use braze_core::{Builder, Error, Result};

/// Applies `step` once per element of `data` in strict index order,
/// threading `builder` through each call.
///
/// The builder state observed by `step` at index `i` reflects exactly the
/// elements at indices `0..i` having been merged, in that order. The first
/// step error aborts the loop; no partial builder is returned.
///
/// A step may itself invoke `for_each` on a nested collection, passing the
/// builder it was handed as the inner initial builder and returning the
/// inner result — this is how multi-level flattening composes.
pub fn for_each<T, B, F>(data: &[T], builder: B, mut step: F) -> Result<B>
where
    B: Builder,
    F: FnMut(B, usize, &T) -> Result<B>,
{
    log::trace!("for_each over {} elements", data.len());
    let mut builder = builder;
    for (index, item) in data.iter().enumerate() {
        builder = step(builder, index, item)?;
    }
    Ok(builder)
}

/// Applies `step` once per index over `left` and `right` in lockstep.
///
/// Fails with `Error::LengthMismatch` before visiting any element if the
/// inputs have different lengths.
pub fn for_each_zip<L, R, B, F>(left: &[L], right: &[R], builder: B, mut step: F) -> Result<B>
where
    B: Builder,
    F: FnMut(B, usize, &L, &R) -> Result<B>,
{
    if left.len() != right.len() {
        return Err(Error::length_mismatch(left.len(), right.len()));
    }
    log::trace!("for_each_zip over {} element pairs", left.len());
    let mut builder = builder;
    for (index, (l, r)) in left.iter().zip(right.iter()).enumerate() {
        builder = step(builder, index, l, r)?;
    }
    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use braze_core::Appender;

    #[test]
    fn test_for_each_index_order() {
        let data = [10, 20, 30];
        let mut built = for_each(&data, Appender::new(), |mut b, i, &x| {
            b.merge((i, x))?;
            Ok(b)
        })
        .unwrap();

        assert_eq!(built.finish().unwrap(), vec![(0, 10), (1, 20), (2, 30)]);
    }

    #[test]
    fn test_for_each_empty() {
        let data: [i32; 0] = [];
        let mut built = for_each(&data, Appender::new(), |mut b, _i, &x| {
            b.merge(x)?;
            Ok(b)
        })
        .unwrap();

        assert_eq!(built.finish().unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_for_each_observes_prior_merges() {
        // The builder seen at index i holds exactly i elements.
        let data = [7, 7, 7];
        for_each(&data, Appender::new(), |mut b, i, &x| {
            assert_eq!(b.len(), i);
            b.merge(x)?;
            Ok(b)
        })
        .unwrap();
    }

    #[test]
    fn test_for_each_nested_shares_builder() {
        let data = [vec![1, 2], vec![], vec![3]];
        let mut built = for_each(&data, Appender::new(), |b, _i, inner| {
            for_each(inner, b, |mut b, _j, &x| {
                b.merge(x)?;
                Ok(b)
            })
        })
        .unwrap();

        assert_eq!(built.finish().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_for_each_fail_fast() {
        let data = [1, 2, 3];
        let mut visited = 0;
        let result = for_each(&data, Appender::new(), |mut b, _i, &x| {
            visited += 1;
            if x == 2 {
                return Err(Error::user_function("boom"));
            }
            b.merge(x)?;
            Ok(b)
        });

        assert!(matches!(result, Err(Error::UserFunction { .. })));
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_for_each_zip_lockstep() {
        let left = [1, 2, 3];
        let right = [10, 20, 30];
        let mut built = for_each_zip(&left, &right, Appender::new(), |mut b, _i, &l, &r| {
            b.merge(l + r)?;
            Ok(b)
        })
        .unwrap();

        assert_eq!(built.finish().unwrap(), vec![11, 22, 33]);
    }

    #[test]
    fn test_for_each_zip_length_mismatch() {
        let left = [1, 2, 3, 4];
        let right = [10, 20];
        let result = for_each_zip(&left, &right, Appender::new(), |mut b, _i, &l, &r| {
            b.merge(l + r)?;
            Ok(b)
        });

        assert_eq!(result.unwrap_err(), Error::length_mismatch(4, 2));
    }
}
