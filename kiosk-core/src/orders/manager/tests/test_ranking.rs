use super::*;

#[test]
fn test_priority_orders_pop_before_normal() {
    let manager = create_test_manager();

    let p1 = place_single(&manager, true, "C1");
    let p2 = place_single(&manager, true, "C2");
    let n1 = place_single(&manager, false, "C3");

    // Both priority orders first, in placement order between themselves
    assert_eq!(manager.retrieve_next().unwrap().id, p1.id);
    assert_eq!(manager.retrieve_next().unwrap().id, p2.id);
    assert_eq!(manager.retrieve_next().unwrap().id, n1.id);
}

#[test]
fn test_priority_overtakes_older_normal() {
    let manager = create_test_manager();

    let n1 = place_single(&manager, false, "C1");
    let p1 = place_single(&manager, true, "C2");

    assert_eq!(manager.retrieve_next().unwrap().id, p1.id);
    assert_eq!(manager.retrieve_next().unwrap().id, n1.id);
}

#[test]
fn test_fifo_within_same_class() {
    let manager = create_test_manager();

    let placed: Vec<String> = (0..4)
        .map(|_| place_single(&manager, false, "C1").id)
        .collect();

    let retrieved: Vec<String> = (0..4)
        .map(|_| manager.retrieve_next().unwrap().id)
        .collect();

    assert_eq!(retrieved, placed);
}

#[test]
fn test_same_instant_ties_break_by_insertion_order() {
    let manager = create_test_manager();

    // A tight loop places many orders within the same millisecond;
    // created_at ties must resolve to insertion order, never ambiguity
    let placed: Vec<String> = (0..20)
        .map(|_| place_single(&manager, true, "C1").id)
        .collect();

    let retrieved: Vec<String> = (0..20)
        .map(|_| manager.retrieve_next().unwrap().id)
        .collect();

    assert_eq!(retrieved, placed);
}

#[test]
fn test_priority_stream_defers_normal_indefinitely() {
    let manager = create_test_manager();
    let normal = place_single(&manager, false, "N");

    // Newly arriving priority orders keep winning over the old normal order
    for _ in 0..5 {
        place_single(&manager, true, "P");
        assert!(manager.retrieve_next().unwrap().is_priority);
    }

    assert_eq!(manager.retrieve_next().unwrap().id, normal.id);
}

#[test]
fn test_peek_pending_is_ranked_and_detached() {
    let manager = create_test_manager();

    let n1 = place_single(&manager, false, "C1");
    let p1 = place_single(&manager, true, "C2");

    let mut snapshot = manager.peek_pending();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].id, p1.id);
    assert_eq!(snapshot[1].id, n1.id);

    // Mutating the snapshot must not reach manager state
    snapshot.clear();
    assert_eq!(manager.pending_len(), 2);
    assert_eq!(manager.retrieve_next().unwrap().id, p1.id);
}
