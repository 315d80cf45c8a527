use std::cmp::Ordering;

use crate::{
    binary_search::index_of_insertion,
    predicate::{CmpTarget, OrdTarget, Predicates},
    sequence::InsertSequence,
};

/// Insert `item` at the position `predicates` choose and return that position.
///
/// `predicates` must describe `item` itself as the target, usually by closing
/// over a copy of its key. `seq` must already be sorted consistently with them;
/// it stays sorted afterwards.
pub fn insert_sorted_with<S, P>(seq: &mut S, item: S::Item, predicates: &P) -> usize
where
    S: InsertSequence + ?Sized,
    P: Predicates<S::Item> + ?Sized,
{
    let index = index_of_insertion(seq, predicates);
    seq.insert_at(index, item);
    index
}

/// Insert `item` into a sequence sorted by `compare`, returning its index.
///
/// ```
/// # use sorted_search::sorted_insert::insert_sorted_by;
/// let mut descending = vec![9, 6, 2];
/// let index = insert_sorted_by(&mut descending, 4, |a: &i32, b: &i32| b.cmp(a));
/// assert_eq!(index, 2);
/// assert_eq!(descending, [9, 6, 4, 2]);
/// ```
pub fn insert_sorted_by<S, F>(seq: &mut S, item: S::Item, compare: F) -> usize
where
    S: InsertSequence + ?Sized,
    F: Fn(&S::Item, &S::Item) -> Ordering,
{
    let index = index_of_insertion(seq, &CmpTarget(|element: &S::Item| compare(element, &item)));
    seq.insert_at(index, item);
    index
}

/// Insert `item` into a sequence sorted by its natural order, returning its
/// index.
///
/// ```
/// # use sorted_search::sorted_insert::insert_sorted;
/// let mut seq = vec![1, 4, 9];
/// assert_eq!(insert_sorted(&mut seq, 5), 2);
/// assert_eq!(seq, [1, 4, 5, 9]);
/// ```
pub fn insert_sorted<S>(seq: &mut S, item: S::Item) -> usize
where
    S: InsertSequence + ?Sized,
    S::Item: Ord,
{
    let index = index_of_insertion(seq, &OrdTarget(&item));
    seq.insert_at(index, item);
    index
}
