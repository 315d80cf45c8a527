use std::cmp::Ordering;

/// Three comparisons of an element against a fixed search target.
///
/// For any element exactly one of the three must hold, and they must agree
/// with the order the searched sequence is sorted by. Inconsistent predicates
/// are not detected and give an unspecified result.
pub trait Predicates<T: ?Sized> {
    /// The element equals the target.
    fn equals(&self, element: &T) -> bool;

    /// The element sorts after the target.
    fn greater_than(&self, element: &T) -> bool;

    /// The element sorts before the target.
    fn less_than(&self, element: &T) -> bool;
}

/// Caller supplied closures, typically capturing the target.
///
/// ```
/// # use sorted_search::predicate::*;
/// let target = 7;
/// let triple = PredicateTriple::new(
///     |x: &i32| *x == target,
///     |x: &i32| *x > target,
///     |x: &i32| *x < target,
/// );
/// assert!(triple.equals(&7));
/// assert!(triple.greater_than(&8));
/// assert!(triple.less_than(&6));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PredicateTriple<E, G, L> {
    equals: E,
    greater_than: G,
    less_than: L,
}

impl<E, G, L> PredicateTriple<E, G, L> {
    pub fn new(equals: E, greater_than: G, less_than: L) -> Self {
        Self {
            equals,
            greater_than,
            less_than,
        }
    }
}

impl<T, E, G, L> Predicates<T> for PredicateTriple<E, G, L>
where
    T: ?Sized,
    E: Fn(&T) -> bool,
    G: Fn(&T) -> bool,
    L: Fn(&T) -> bool,
{
    fn equals(&self, element: &T) -> bool {
        (self.equals)(element)
    }

    fn greater_than(&self, element: &T) -> bool {
        (self.greater_than)(element)
    }

    fn less_than(&self, element: &T) -> bool {
        (self.less_than)(element)
    }
}

/// Predicates taken from the target's own total order.
#[derive(Debug, Clone, Copy)]
pub struct OrdTarget<'a, T: ?Sized>(pub &'a T);

impl<T: Ord + ?Sized> Predicates<T> for OrdTarget<'_, T> {
    fn equals(&self, element: &T) -> bool {
        element == self.0
    }

    fn greater_than(&self, element: &T) -> bool {
        element > self.0
    }

    fn less_than(&self, element: &T) -> bool {
        element < self.0
    }
}

/// Predicates from a single closure giving the element's ordering relative to
/// the target, e.g. `|x| x.cmp(&target)`.
#[derive(Debug, Clone, Copy)]
pub struct CmpTarget<F>(pub F);

impl<T, F> Predicates<T> for CmpTarget<F>
where
    T: ?Sized,
    F: Fn(&T) -> Ordering,
{
    fn equals(&self, element: &T) -> bool {
        (self.0)(element) == Ordering::Equal
    }

    fn greater_than(&self, element: &T) -> bool {
        (self.0)(element) == Ordering::Greater
    }

    fn less_than(&self, element: &T) -> bool {
        (self.0)(element) == Ordering::Less
    }
}
