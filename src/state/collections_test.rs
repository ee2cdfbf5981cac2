use super::*;

fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|id| (*id).to_owned()).collect()
}

// =============================================================
// Compare list
// =============================================================

#[test]
fn add_to_compare_appends_in_order() {
    let mut lists = Collections::default();
    assert_eq!(lists.add_to_compare("a", 4), Ok(()));
    assert_eq!(lists.add_to_compare("b", 4), Ok(()));
    assert_eq!(lists.compare(), ids(&["a", "b"]).as_slice());
}

#[test]
fn add_to_compare_rejects_duplicate() {
    let mut lists = Collections::default();
    lists.add_to_compare("a", 4).expect("first add");
    assert_eq!(lists.add_to_compare("a", 4), Err(ListError::AlreadyPresent));
    assert_eq!(lists.compare().len(), 1);
}

#[test]
fn add_to_compare_rejects_when_full() {
    let mut lists = Collections::default();
    for id in ["a", "b", "c", "d"] {
        lists.add_to_compare(id, 4).expect("room left");
    }
    assert_eq!(lists.add_to_compare("e", 4), Err(ListError::LimitReached { limit: 4 }));
    assert_eq!(lists.compare(), ids(&["a", "b", "c", "d"]).as_slice());
}

#[test]
fn duplicate_check_wins_over_limit_check() {
    let mut lists = Collections::default();
    for id in ["a", "b", "c", "d"] {
        lists.add_to_compare(id, 4).expect("room left");
    }
    assert_eq!(lists.add_to_compare("b", 4), Err(ListError::AlreadyPresent));
}

#[test]
fn any_add_sequence_stays_bounded_and_unique() {
    let mut lists = Collections::default();
    let sequence = ["a", "b", "a", "c", "c", "d", "e", "a", "f", "b"];
    for id in sequence {
        let _ = lists.add_to_compare(id, 4);
        assert!(lists.compare().len() <= 4);
        let mut seen = lists.compare().to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), lists.compare().len());
    }
}

#[test]
fn add_then_remove_restores_compare_list() {
    let mut lists = Collections::default();
    lists.add_to_compare("a", 4).expect("add");
    let before = lists.clone();
    lists.add_to_compare("b", 4).expect("add");
    assert!(lists.remove_from_compare("b"));
    assert_eq!(lists, before);
}

#[test]
fn remove_missing_from_compare_is_noop() {
    let mut lists = Collections::default();
    lists.add_to_compare("a", 4).expect("add");
    assert!(!lists.remove_from_compare("zzz"));
    assert_eq!(lists.compare(), ids(&["a"]).as_slice());
}

#[test]
fn limit_reached_message_names_limit() {
    assert_eq!(ListError::LimitReached { limit: 4 }.to_string(), "You can compare up to 4 products at once!");
    assert_eq!(ListError::AlreadyPresent.to_string(), "Product is already in comparison list!");
}

// =============================================================
// Cart and favorites
// =============================================================

#[test]
fn cart_accepts_duplicates_and_removes_one_at_a_time() {
    let mut lists = Collections::default();
    lists.add_to_cart("a");
    lists.add_to_cart("a");
    lists.add_to_cart("b");
    assert!(lists.remove_from_cart("a"));
    assert_eq!(lists.cart(), ids(&["a", "b"]).as_slice());
    assert!(!lists.remove_from_cart("zzz"));
}

#[test]
fn clear_cart_empties_only_cart() {
    let mut lists = Collections::default();
    lists.add_to_cart("a");
    lists.add_to_favorites("f");
    lists.add_to_compare("c", 4).expect("add");
    lists.clear_cart();
    assert!(lists.cart().is_empty());
    assert_eq!(lists.favorites(), ids(&["f"]).as_slice());
    assert_eq!(lists.compare(), ids(&["c"]).as_slice());
}

#[test]
fn favorites_remove_and_clear() {
    let mut lists = Collections::default();
    lists.add_to_favorites("a");
    lists.add_to_favorites("b");
    assert!(lists.remove_favorite("a"));
    assert_eq!(lists.favorites(), ids(&["b"]).as_slice());
    lists.clear_favorites();
    assert!(lists.favorites().is_empty());
}

// =============================================================
// from_persisted
// =============================================================

#[test]
fn from_persisted_dedupes_and_caps_compare_list() {
    let lists = Collections::from_persisted(ids(&["a", "a", "b", "c", "d", "e"]), ids(&["x", "x"]), Vec::new(), 4);
    assert_eq!(lists.compare(), ids(&["a", "b", "c", "d"]).as_slice());
    assert_eq!(lists.cart(), ids(&["x", "x"]).as_slice());
}
