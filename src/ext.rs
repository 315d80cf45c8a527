use crate::{
    binary_search::{index_of_bounded, index_of_insertion, search_index, SearchMode},
    predicate::OrdTarget,
    sequence::{InsertSequence, OrderedSequence},
    sorted_insert::insert_sorted,
};

/// Searches over sequences of naturally ordered items.
///
/// ```
/// # use sorted_search::ext::SortedSearch;
/// let seq = vec![2, 4, 4, 4, 6];
/// assert_eq!(seq.first_index_of(&4), Some(1));
/// assert_eq!(seq.last_index_of(&4), Some(3));
/// assert_eq!(seq.insertion_index_of(&5), 4);
/// ```
pub trait SortedSearch: OrderedSequence
where
    Self::Item: Ord,
{
    /// Search for `item` according to `mode`.
    fn search_index_of(&self, item: &Self::Item, mode: SearchMode) -> Option<usize> {
        search_index(self, mode, &OrdTarget(item))
    }

    fn first_index_of(&self, item: &Self::Item) -> Option<usize> {
        index_of_bounded(self, SearchMode::FirstEqual, &OrdTarget(item))
    }

    fn last_index_of(&self, item: &Self::Item) -> Option<usize> {
        index_of_bounded(self, SearchMode::LastEqual, &OrdTarget(item))
    }

    fn insertion_index_of(&self, item: &Self::Item) -> usize {
        index_of_insertion(self, &OrdTarget(item))
    }
}

impl<S> SortedSearch for S
where
    S: OrderedSequence + ?Sized,
    S::Item: Ord,
{
}

pub trait SortedInsert: InsertSequence
where
    Self::Item: Ord,
{
    /// Insert `item` where it keeps the sequence sorted and return its index.
    fn insert_sorted(&mut self, item: Self::Item) -> usize {
        insert_sorted(self, item)
    }
}

impl<S> SortedInsert for S
where
    S: InsertSequence + ?Sized,
    S::Item: Ord,
{
}
