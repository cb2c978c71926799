use orx_ordered_map::*;
use test_case::test_case;

fn pairs<K: Clone, V: Clone>(map: &OrderedMap<K, V>) -> Vec<(K, V)> {
    map.iterate().collect()
}

#[test]
fn empty() {
    let map = OrderedMap::<String, u32>::new();

    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.get("x"), None);
    assert_eq!(map.front(), None);
    assert_eq!(map.back(), None);
    assert_eq!(map.iterate().count(), 0);
    assert!(map.to_vec().is_empty());
}

#[test]
fn update_keeps_position() {
    let mut map = OrderedMap::new();
    assert!(map.set("one", 1));
    assert!(map.set("two", 2));
    assert!(map.set("three", 3));
    assert!(!map.set("two", 22));

    assert_eq!(map.len(), 3);
    assert_eq!(pairs(&map), vec![("one", 1), ("two", 22), ("three", 3)]);
}

#[test]
fn delete_middle_key() {
    let mut map = OrderedMap::new();
    for (i, key) in ["one", "two", "three", "four"].into_iter().enumerate() {
        map.set(key, i);
    }

    assert!(map.delete("two"));
    assert!(!map.delete("two"));
    assert!(!map.contains_key("two"));

    let keys: Vec<_> = map.iterate().map(|(key, _)| key).collect();
    assert_eq!(keys, ["one", "three", "four"]);
    assert_eq!(map.len(), 3);
}

#[test]
fn lookups() {
    let mut map: OrderedMap<String, u32> = OrderedMap::with_capacity(4);
    map.set("a".to_string(), 1);
    map.set("b".to_string(), 2);

    assert_eq!(map.get("a"), Some(&1));
    assert_eq!(map.get("c"), None);
    assert_eq!(map.get_key_value("b"), Some((&"b".to_string(), &2)));
    assert!(map.contains_key("b"));

    if let Some(value) = map.get_mut("a") {
        *value += 10;
    }
    assert_eq!(map.get("a"), Some(&11));

    assert_eq!(map.front(), Some((&"a".to_string(), &11)));
    assert_eq!(map.back(), Some((&"b".to_string(), &2)));
}

#[test]
fn remove_variants() {
    let mut map: OrderedMap<char, u32> = [('a', 1), ('b', 2), ('c', 3)].into();

    assert_eq!(map.remove(&'b'), Some(2));
    assert_eq!(map.remove(&'b'), None);
    assert_eq!(map.remove_entry(&'a'), Some(('a', 1)));
    assert_eq!(map.remove_entry(&'a'), None);
    assert_eq!(pairs(&map), vec![('c', 3)]);
}

#[test]
fn readding_a_deleted_key_moves_it_to_the_back() {
    let mut map: OrderedMap<char, u32> = [('a', 1), ('b', 2), ('c', 3)].into();

    map.delete(&'a');
    assert!(map.set('a', 4));

    assert_eq!(pairs(&map), vec![('b', 2), ('c', 3), ('a', 4)]);
}

#[test]
fn snapshot_excludes_later_keys() {
    let mut map = OrderedMap::new();
    map.set("one", 1);
    map.set("two", 2);

    let snapshot = map.iterate();
    map.set("three", 3);
    map.set("one", 11);

    assert_eq!(map.len(), 3);
    assert_eq!(snapshot.collect::<Vec<_>>(), vec![("one", 1), ("two", 2)]);
}

#[test]
fn many_abandoned_snapshots() {
    let map: OrderedMap<u32, u32> = (0..50).map(|x| (x, x * x)).collect();

    for _ in 0..10_000 {
        let mut snapshot = map.iterate();
        assert_eq!(snapshot.next(), Some((0, 0)));
    }

    assert_eq!(map.len(), 50);
    assert_eq!(map.iterate().len(), 50);
}

#[test]
fn to_vec_is_a_snapshot() {
    let mut map: OrderedMap<u32, String> = OrderedMap::new();
    map.set(2, "b".to_string());
    map.set(1, "a".to_string());

    let values = map.to_vec();
    map.set(3, "c".to_string());

    assert_eq!(values, ["b", "a"]);
}

#[test]
fn iterators() {
    let map: OrderedMap<char, u32> = [('z', 26), ('a', 1), ('m', 13)].into();

    assert!(map.keys().eq(&['z', 'a', 'm']));
    assert!(map.values().eq(&[26, 1, 13]));
    assert!(map.iter().rev().eq([(&'m', &13), (&'a', &1), (&'z', &26)]));
    assert_eq!(map.iter().len(), 3);
}

#[test]
fn copy_is_independent() {
    let mut map: OrderedMap<String, Vec<u32>> = OrderedMap::new();
    map.set("a".to_string(), vec![1]);
    map.set("b".to_string(), vec![2]);

    let mut copy = map.copy();
    let clone = map.clone();
    assert_eq!(copy, map);
    assert_eq!(clone, map);

    copy.set("c".to_string(), vec![3]);
    if let Some(x) = copy.get_mut("a") {
        x.push(100);
    }
    copy.delete("b");

    assert_eq!(map.len(), 2);
    assert_eq!(map.get("a"), Some(&vec![1]));
    assert_eq!(map.get("b"), Some(&vec![2]));
    assert_eq!(copy.len(), 2);
    assert!(copy.keys().eq(["a", "c"]));
}

#[test]
fn clear() {
    let mut map: OrderedMap<u32, u32> = (0..10).map(|x| (x, x)).collect();
    map.clear();

    assert!(map.is_empty());
    assert_eq!(map.get(&3), None);

    map.set(3, 30);
    assert_eq!(pairs(&map), vec![(3, 30)]);
}

#[test_case(1 ; "every key")]
#[test_case(2 ; "every other key")]
#[test_case(7 ; "sparse keys")]
fn length_matches_after_mixed_operations(step: u32) {
    let mut map: OrderedMap<u32, u32> = OrderedMap::new();

    for round in 0..5 {
        for i in 0..200 {
            map.set(i, i + round);
            assert_eq!(map.len(), map.keys().count());
        }
        for i in (0..200).step_by(step as usize) {
            map.delete(&i);
            assert_eq!(map.len(), map.keys().count());
        }
        for i in 0..200 {
            match i % step == 0 {
                true => assert_eq!(map.get(&i), None),
                false => assert_eq!(map.get(&i), Some(&(i + round))),
            }
        }
    }
}

#[test]
fn relative_order_survives_compaction() {
    let mut map: OrderedMap<u32, char> = OrderedMap::new();
    for i in 0..100 {
        map.set(i, 'x');
    }
    for i in 0..90 {
        map.delete(&i);
    }
    map.set(95, 'y');
    map.set(1000, 'z');

    let keys: Vec<_> = map.keys().copied().collect();
    let expected: Vec<_> = (90..100).chain([1000]).collect();
    assert_eq!(keys, expected);
    assert_eq!(map.get(&95), Some(&'y'));
    assert_eq!(map.get(&1000), Some(&'z'));
}

#[test]
fn never_reclaiming_map() {
    let mut map: OrderedMap<u32, u32, hashbrown::DefaultHashBuilder, MemoryReclaimNever> =
        OrderedMap::default();
    for i in 0..10 {
        map.set(i, i);
    }
    for i in 0..9 {
        map.delete(&i);
    }

    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&9), Some(&9));
    assert_eq!(pairs_of(&map), vec![(9, 9)]);
}

fn pairs_of<S, M: MemoryPolicy>(map: &OrderedMap<u32, u32, S, M>) -> Vec<(u32, u32)> {
    map.iter().map(|(k, v)| (*k, *v)).collect()
}
