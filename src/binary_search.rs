use crate::{
    math::{midpoint, step_down},
    predicate::Predicates,
    sequence::OrderedSequence,
};

/// Which index a search reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchMode {
    /// The leftmost element equal to the target.
    FirstEqual,
    /// The rightmost element equal to the target.
    LastEqual,
    /// Where the target belongs, whether or not it is present.
    #[default]
    InsertionIndex,
}

/// Binary search for an element satisfying `predicates.equals`.
///
/// With [`SearchMode::FirstEqual`] or [`SearchMode::LastEqual`] the search
/// keeps narrowing past a hit to find the leftmost or rightmost match. With
/// [`SearchMode::InsertionIndex`] it stops at the first match it probes.
///
/// `seq` must be sorted consistently with `predicates`; this is not checked.
///
/// ```
/// # use sorted_search::{binary_search::*, predicate::OrdTarget};
/// let seq = [1, 3, 3, 3, 8];
/// assert_eq!(index_of_bounded(&seq[..], SearchMode::FirstEqual, &OrdTarget(&3)), Some(1));
/// assert_eq!(index_of_bounded(&seq[..], SearchMode::LastEqual, &OrdTarget(&3)), Some(3));
/// assert_eq!(index_of_bounded(&seq[..], SearchMode::FirstEqual, &OrdTarget(&4)), None);
/// ```
pub fn index_of_bounded<S, P>(seq: &S, mode: SearchMode, predicates: &P) -> Option<usize>
where
    S: OrderedSequence + ?Sized,
    P: Predicates<S::Item> + ?Sized,
{
    let mut lo = 0;
    let mut hi = seq.len();
    let mut best = None;

    while lo <= hi {
        let mid = midpoint(lo, hi);
        if mid >= seq.len() {
            break;
        }

        let element = seq.element(mid);
        if predicates.equals(element) {
            best = Some(mid);
            match mode {
                SearchMode::FirstEqual => {
                    let Some(below) = step_down(mid) else { break };
                    hi = below;
                }
                SearchMode::LastEqual => lo = mid + 1,
                SearchMode::InsertionIndex => break,
            }
        } else if predicates.greater_than(element) {
            let Some(below) = step_down(mid) else { break };
            hi = below;
        } else {
            lo = mid + 1;
        }
    }

    best
}

/// The index at which the target can be inserted while keeping `seq` sorted.
///
/// Returns the index of an equal element as soon as one is probed, so among
/// duplicates any of their positions may come back. The result is always in
/// `0..=seq.len()`.
///
/// `seq` must be sorted consistently with `predicates`; this is not checked.
///
/// ```
/// # use sorted_search::{binary_search::*, predicate::OrdTarget};
/// let seq = [5, 6, 7, 8, 9];
/// assert_eq!(index_of_insertion(&seq[..], &OrdTarget(&4)), 0);
/// assert_eq!(index_of_insertion(&seq[..], &OrdTarget(&10)), 5);
/// assert_eq!(index_of_insertion(&seq[..], &OrdTarget(&7)), 2);
/// ```
pub fn index_of_insertion<S, P>(seq: &S, predicates: &P) -> usize
where
    S: OrderedSequence + ?Sized,
    P: Predicates<S::Item> + ?Sized,
{
    if seq.is_empty() {
        return 0;
    }

    let mut lo = 0;
    let mut hi = seq.len();
    let mut mid = 0;

    while lo < hi {
        mid = midpoint(lo, hi);
        let element = seq.element(mid);
        if predicates.equals(element) {
            return mid;
        } else if predicates.greater_than(element) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    // the last probe is either just below or just above the insertion point
    if predicates.less_than(seq.element(mid)) {
        mid + 1
    } else {
        mid
    }
}

/// Search `seq` according to `mode`.
///
/// [`SearchMode::InsertionIndex`] always finds a position and so always
/// returns `Some`; the bounded modes return `None` when nothing is equal.
pub fn search_index<S, P>(seq: &S, mode: SearchMode, predicates: &P) -> Option<usize>
where
    S: OrderedSequence + ?Sized,
    P: Predicates<S::Item> + ?Sized,
{
    match mode {
        SearchMode::InsertionIndex => Some(index_of_insertion(seq, predicates)),
        SearchMode::FirstEqual | SearchMode::LastEqual => index_of_bounded(seq, mode, predicates),
    }
}
