use std::collections::VecDeque;

/// A finite, randomly indexable sequence the search algorithms can probe.
///
/// Every search assumes the sequence is sorted in non-decreasing order under
/// the same ordering its predicates describe. This is never checked; an
/// unsorted sequence gives an unspecified (but memory safe) result.
pub trait OrderedSequence {
    type Item;

    fn len(&self) -> usize;

    /// The element at `index`. Callers only pass indices below `len()`.
    fn element(&self, index: usize) -> &Self::Item;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An ordered sequence that can grow by inserting at any position.
pub trait InsertSequence: OrderedSequence {
    /// Insert `item` at `index`, shifting everything after it one place up.
    fn insert_at(&mut self, index: usize, item: Self::Item);
}

impl<T> OrderedSequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn element(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> OrderedSequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn element(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> OrderedSequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn element(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> InsertSequence for Vec<T> {
    fn insert_at(&mut self, index: usize, item: T) {
        self.insert(index, item);
    }
}

impl<T> InsertSequence for VecDeque<T> {
    fn insert_at(&mut self, index: usize, item: T) {
        self.insert(index, item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first<S: OrderedSequence + ?Sized>(seq: &S) -> Option<&S::Item> {
        (!seq.is_empty()).then(|| seq.element(0))
    }

    #[test]
    fn test_slice_and_vec_agree() {
        let vec = vec![1, 2, 3];
        assert_eq!(3, OrderedSequence::len(&vec));
        assert_eq!(3, OrderedSequence::len(vec.as_slice()));
        assert_eq!(Some(&1), first(&vec));
        assert_eq!(Some(&1), first(vec.as_slice()));
        assert_eq!(None, first::<[i32]>(&[]));
    }

    #[test]
    fn test_insert_at() {
        let mut vec = vec![1, 3];
        vec.insert_at(1, 2);
        assert_eq!(vec![1, 2, 3], vec);

        let mut deque: VecDeque<i32> = VecDeque::from(vec![1, 3]);
        deque.insert_at(2, 4);
        deque.insert_at(0, 0);
        assert_eq!(vec![0, 1, 3, 4], deque.into_iter().collect::<Vec<_>>());
    }
}
