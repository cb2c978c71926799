use orx_ordered_map::*;
use std::hash::{DefaultHasher, Hash, Hasher};
use test_case::test_case;

fn hash_single<H: Hash>(val: H) -> u64 {
    let mut hasher = DefaultHasher::new();
    val.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn clone() {
    let mut list: LinkedList<String> = LinkedList::new();

    let idx1 = list.push_front(0.to_string());
    let idx2 = list.push_front(1.to_string());

    assert_ne!(idx1, idx2);

    let cloned = idx1;

    assert_eq!(idx1, cloned);
    assert_ne!(idx2, cloned);
}

#[test]
fn hash() {
    let mut list: LinkedList<String> = LinkedList::new();

    let idx1 = list.push_front(0.to_string());
    let idx2 = list.push_front(1.to_string());

    assert_ne!(hash_single(idx1), hash_single(idx2));
    assert_eq!(hash_single(idx1), hash_single(idx1));
}

#[test]
fn foreign_collection() {
    let mut a: LinkedList<u32> = LinkedList::new();
    let mut b: LinkedList<u32> = LinkedList::new();

    let idx_a = a.push_back(1);
    let idx_b = b.push_back(2);

    assert!(idx_a.is_valid_for(&a));
    assert!(!idx_a.is_valid_for(&b));
    assert_eq!(b.idx_err(idx_a), Some(NodeIdxError::ForeignCollection));

    assert_eq!(b.get(idx_a), None);
    assert_eq!(b.remove(idx_a), None);
    assert_eq!(b.insert_after(3, idx_a), None);
    b.move_to_front(idx_a);

    assert!(b.iter().eq(&[2]));
    assert_eq!(b.get(idx_b), Some(&2));
    assert_eq!(a.get(idx_a), Some(&1));
}

#[test]
fn removed_node() {
    let mut list: LinkedList<char, MemoryReclaimNever> = LinkedList::new();
    let a = list.push_back('a');
    list.push_back('b');

    assert_eq!(list.remove(a), Some('a'));
    assert_eq!(list.idx_err(a), Some(NodeIdxError::RemovedNode));
    assert!(!list.is_valid(a));

    assert_eq!(list.remove(a), None);
    assert_eq!(list.get(a), None);
    assert_eq!(list.next_idx(a), None);
    assert_eq!(list.insert_before('x', a), None);
    assert!(list.iter().eq(&['b']));
}

#[test_case(true ; "manual reclaim")]
#[test_case(false ; "clear")]
fn reorganized_collection(manual_reclaim: bool) {
    let mut list: LinkedList<u32, MemoryReclaimNever> = LinkedList::new();
    let indices: Vec<_> = (0..5).map(|x| list.push_back(x)).collect();
    list.remove(indices[1]);

    let state = list.memory_state();
    match manual_reclaim {
        true => assert!(list.reclaim_closed_nodes()),
        false => list.clear(),
    }
    assert_ne!(list.memory_state(), state);

    for idx in indices.iter() {
        assert!(!idx.is_in_state(list.memory_state()));
        assert_eq!(
            list.idx_err(*idx),
            Some(NodeIdxError::ReorganizedCollection)
        );
        assert_eq!(list.get(*idx), None);
    }
}

#[test]
fn never_policy_keeps_indices_valid() {
    let mut list: LinkedList<u32, MemoryReclaimNever> = LinkedList::new();
    let indices: Vec<_> = (0..100).map(|x| list.push_back(x)).collect();

    for idx in indices.iter().take(90) {
        list.remove(*idx);
    }

    assert_eq!(list.utilization().num_closed_nodes, 90);
    for (i, idx) in indices.iter().enumerate().skip(90) {
        assert_eq!(list.get(*idx), Some(&(i as u32)));
    }
}

#[test_case(0)]
#[test_case(1)]
#[test_case(2)]
#[test_case(3)]
fn threshold_policy_invalidates_and_compacts(num_kept: usize) {
    let mut list: LinkedList<usize, MemoryReclaimOnThreshold<2>> = LinkedList::new();
    let indices: Vec<_> = (0..16).map(|x| list.push_back(x)).collect();
    let state = list.memory_state();

    while list.len() > num_kept {
        list.pop_back();
    }

    assert_ne!(list.memory_state(), state);
    assert_eq!(list.len(), num_kept);
    assert!(list.iter().copied().eq(0..num_kept));
    for idx in indices.iter() {
        assert_eq!(
            list.idx_err(*idx),
            Some(NodeIdxError::ReorganizedCollection)
        );
    }

    let utilization = list.utilization();
    let used = utilization.num_active_nodes + utilization.num_closed_nodes;
    assert!(utilization.num_closed_nodes <= used >> 2);
}

#[test]
fn display() {
    assert_eq!(NodeIdxError::RemovedNode.to_string(), "RemovedNode");
    assert_eq!(
        NodeIdxError::ForeignCollection.to_string(),
        "ForeignCollection"
    );

    let error: Box<dyn std::error::Error> = Box::new(NodeIdxError::OutOfBounds);
    assert_eq!(error.to_string(), "OutOfBounds");
}
