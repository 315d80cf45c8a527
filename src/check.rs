use eyre::{ensure, eyre, Result};

use crate::{
    binary_search::{index_of_bounded, index_of_insertion, SearchMode},
    predicate::OrdTarget,
};

pub fn is_sorted<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Scan adjacent pairs and report the first one out of order.
pub fn check_sorted<T: Ord + std::fmt::Debug>(values: &[T]) -> Result<()> {
    match values.windows(2).position(|pair| pair[0] > pair[1]) {
        None => Ok(()),
        Some(pos) => Err(eyre!(
            "sequence of length {} unsorted at {pos}: {:?} > {:?}",
            values.len(),
            values[pos],
            values[pos + 1]
        )),
    }
}

/// Compare the bounded searches for `target` against a linear scan.
pub fn check_bounds<T: Ord + std::fmt::Debug>(values: &[T], target: &T) -> Result<()> {
    let predicates = OrdTarget(target);
    let first = index_of_bounded(values, SearchMode::FirstEqual, &predicates);
    let last = index_of_bounded(values, SearchMode::LastEqual, &predicates);
    let expected_first = values.iter().position(|x| x == target);
    let expected_last = values.iter().rposition(|x| x == target);
    ensure!(
        first == expected_first,
        "first index of {target:?} in sequence of length {}: expected {expected_first:?}, found {first:?}",
        values.len()
    );
    ensure!(
        last == expected_last,
        "last index of {target:?} in sequence of length {}: expected {expected_last:?}, found {last:?}",
        values.len()
    );
    Ok(())
}

/// Check that inserting `target` at its insertion index keeps `values` sorted.
pub fn check_insertion<T: Ord + std::fmt::Debug>(values: &[T], target: &T) -> Result<usize> {
    let index = index_of_insertion(values, &OrdTarget(target));
    ensure!(
        index <= values.len(),
        "insertion index {index} past the end of sequence of length {}",
        values.len()
    );
    let fits_below = index == 0 || values[index - 1] <= *target;
    let fits_above = index == values.len() || *target <= values[index];
    ensure!(
        fits_below && fits_above,
        "inserting {target:?} at {index} breaks the order of a sequence of length {}",
        values.len()
    );
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_sorted() {
        assert!(check_sorted::<u32>(&[]).is_ok());
        assert!(check_sorted(&[1, 1, 2]).is_ok());
        let error = check_sorted(&[1, 3, 2]).unwrap_err();
        assert!(error.to_string().contains("unsorted at 1"));
        assert!(!is_sorted(&[2, 1]));
    }

    #[test]
    fn test_check_bounds() {
        let values = [1, 2, 2, 2, 3];
        for target in 0..5 {
            assert!(check_bounds(&values, &target).is_ok());
        }
    }

    #[test]
    fn test_check_insertion() {
        let values = [5, 6, 7, 8, 9];
        assert_eq!(0, check_insertion(&values, &4).unwrap());
        assert_eq!(5, check_insertion(&values, &10).unwrap());
    }
}
