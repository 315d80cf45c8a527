use proptest::prelude::*;
use sorted_search::{
    binary_search::{index_of_bounded, index_of_insertion, search_index, SearchMode},
    check::is_sorted,
    ext::{SortedInsert, SortedSearch},
    predicate::{CmpTarget, OrdTarget},
    sorted_insert::insert_sorted_by,
};

fn arb_sorted(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50..50_i32, 0..max_len).prop_map(|mut values| {
        values.sort_unstable();
        values
    })
}

proptest! {
    #[test]
    fn bounded_search_finds_extreme_matches(values in arb_sorted(64), pick in any::<prop::sample::Index>()) {
        prop_assume!(!values.is_empty());
        let target = values[pick.index(values.len())];
        let first = values.iter().position(|&x| x == target);
        let last = values.iter().rposition(|&x| x == target);
        prop_assert_eq!(first, values.first_index_of(&target));
        prop_assert_eq!(last, values.last_index_of(&target));
    }

    #[test]
    fn bounded_search_misses_absent(values in arb_sorted(64), target in -60..60_i32) {
        prop_assume!(!values.contains(&target));
        for mode in [SearchMode::FirstEqual, SearchMode::LastEqual] {
            prop_assert_eq!(None, index_of_bounded(&values, mode, &OrdTarget(&target)));
        }
    }

    #[test]
    fn insertion_index_keeps_order(values in arb_sorted(64), target in -60..60_i32) {
        let index = index_of_insertion(&values, &OrdTarget(&target));
        prop_assert!(index <= values.len());
        let mut inserted = values.clone();
        inserted.insert(index, target);
        prop_assert!(is_sorted(&inserted));
        prop_assert_eq!(Some(index), search_index(&values, SearchMode::InsertionIndex, &OrdTarget(&target)));
    }

    #[test]
    fn repeated_insertion_stays_sorted(inserts in prop::collection::vec(any::<i16>(), 0..128)) {
        let mut values: Vec<i16> = Vec::new();
        for value in inserts {
            let index = values.insert_sorted(value);
            prop_assert_eq!(value, values[index]);
            prop_assert!(is_sorted(&values));
            let first = values.first_index_of(&value);
            let last = values.last_index_of(&value);
            prop_assert!(first.is_some_and(|first| first <= index));
            prop_assert!(last.is_some_and(|last| index <= last));
        }
    }

    #[test]
    fn comparator_insertion_matches_ord(inserts in prop::collection::vec(0..1000_u32, 0..64)) {
        let mut by_ord: Vec<u32> = Vec::new();
        let mut by_cmp: Vec<u32> = Vec::new();
        for value in inserts {
            by_ord.insert_sorted(value);
            insert_sorted_by(&mut by_cmp, value, |a: &u32, b: &u32| a.cmp(b));
        }
        prop_assert_eq!(&by_ord, &by_cmp);
        for value in &by_ord {
            let by_closure = CmpTarget(|x: &u32| x.cmp(value));
            prop_assert_eq!(
                by_ord.first_index_of(value),
                index_of_bounded(&by_ord, SearchMode::FirstEqual, &by_closure)
            );
        }
    }
}

#[test]
fn empty_sequence() {
    let values: Vec<i32> = Vec::new();
    assert_eq!(None, values.first_index_of(&1));
    assert_eq!(None, values.last_index_of(&1));
    assert_eq!(0, values.insertion_index_of(&1));
}
