use thiserror::Error;
use tml_cmp::Compare;

/// Reported by [`verify_sorted`] for the first out-of-order element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("element at index {index} sorts before its predecessor")]
    OutOfOrder { index: usize },
}

/// Checks that no element of `v` sorts strictly before its predecessor.
pub fn verify_sorted<T, C>(v: &[T], cmp: &C) -> Result<(), SortError>
where
    C: Compare<T> + ?Sized,
{
    match (1..v.len()).find(|&i| cmp.less(&v[i], &v[i - 1])) {
        Some(index) => Err(SortError::OutOfOrder { index }),
        None => Ok(()),
    }
}

/// `true` when `v` is in non-decreasing order under `cmp`.
pub fn is_sorted_with<T, C>(v: &[T], cmp: &C) -> bool
where
    C: Compare<T> + ?Sized,
{
    verify_sorted(v, cmp).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tml_cmp::{Natural, Reversed};

    #[test]
    fn test_verify_sorted() {
        assert_eq!(verify_sorted::<i32, _>(&[], &Natural), Ok(()));
        assert_eq!(verify_sorted(&[1, 1, 2], &Natural), Ok(()));
        assert_eq!(
            verify_sorted(&[1, 3, 2, 4], &Natural),
            Err(SortError::OutOfOrder { index: 2 })
        );
        assert!(is_sorted_with(&[3, 2, 2, 1], &Reversed(Natural)));
    }

    #[test]
    fn test_error_message() {
        let err = SortError::OutOfOrder { index: 7 };
        assert_eq!(err.to_string(), "element at index 7 sorts before its predecessor");
    }
}
