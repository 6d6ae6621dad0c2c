use ipart::{
    fixed_length_partitions, ordered_partitions, unordered_partitions, Partition, Partitions,
    Request,
};

fn lists(v: Vec<Partition>) -> Vec<Vec<u32>> {
    v.into_iter().map(Partition::into_vec).collect()
}

#[test]
fn unordered_counts_follow_partition_numbers() {
    // p(0..=12)
    let expected = [1, 1, 2, 3, 5, 7, 11, 15, 22, 30, 42, 56, 77];
    for (n, &p) in expected.iter().enumerate() {
        assert_eq!(unordered_partitions(n as i64).unwrap().len(), p, "p({n})");
    }
}

#[test]
fn ordered_counts_are_powers_of_two() {
    assert_eq!(ordered_partitions(0).unwrap().len(), 1);
    for n in 1..=12i64 {
        assert_eq!(ordered_partitions(n).unwrap().len(), 1usize << (n - 1), "n={n}");
    }
}

#[test]
fn fixed_length_ordered_counts_are_binomials() {
    // C(n + k - 1, k - 1) weak compositions of n into k parts
    assert_eq!(fixed_length_partitions(4, 2, true).unwrap().len(), 5);
    assert_eq!(fixed_length_partitions(5, 3, true).unwrap().len(), 21);
    assert_eq!(fixed_length_partitions(6, 4, true).unwrap().len(), 84);
    assert_eq!(fixed_length_partitions(0, 5, true).unwrap().len(), 1);
}

#[test]
fn fixed_length_unordered_counts() {
    // partitions of n into at most k parts
    assert_eq!(fixed_length_partitions(6, 2, false).unwrap().len(), 4);
    assert_eq!(fixed_length_partitions(6, 3, false).unwrap().len(), 7);
    assert_eq!(fixed_length_partitions(10, 10, false).unwrap().len(), 42);
    assert_eq!(fixed_length_partitions(3, 1, false).unwrap().len(), 1);
}

#[test]
fn four_into_two_ordered_slots() {
    assert_eq!(
        lists(fixed_length_partitions(4, 2, true).unwrap()),
        vec![vec![4, 0], vec![3, 1], vec![2, 2], vec![1, 3], vec![0, 4]]
    );
}

#[test]
fn zero_length() {
    assert_eq!(lists(fixed_length_partitions(0, 0, false).unwrap()), vec![Vec::<u32>::new()]);
    assert!(fixed_length_partitions(5, 0, false).unwrap().is_empty());
}

#[test]
fn negative_inputs_fail_with_invalid_input() {
    assert!(ordered_partitions(-1).unwrap_err().is_invalid_input());
    assert!(unordered_partitions(-1).unwrap_err().is_invalid_input());
    assert!(fixed_length_partitions(-1, 2, false).unwrap_err().is_invalid_input());
    assert!(fixed_length_partitions(2, -1, true).unwrap_err().is_invalid_input());
}

#[test]
fn compositions_of_four_in_order() {
    let got: Vec<String> = ordered_partitions(4)
        .unwrap()
        .iter()
        .map(|p| p.to_string())
        .collect();
    assert_eq!(got, ["4", "3,1", "2,2", "2,1,1", "1,3", "1,2,1", "1,1,2", "1,1,1,1"]);
}

#[test]
fn fixed_length_far_beyond_call_stack_depth() {
    let eager = fixed_length_partitions(3, 200_000, false).unwrap();
    assert_eq!(eager.len(), 3);
    assert!(eager.iter().all(|p| p.len() == 200_000 && p.sum() == 3));

    let req = Request::fixed_length(3, 200_000, false).unwrap();
    let lazy: Vec<Partition> = Partitions::new(&req).collect();
    assert_eq!(lazy, eager);
}

#[test]
fn fixed_length_zero_sum_is_all_zeros() {
    assert_eq!(lists(fixed_length_partitions(0, 4, true).unwrap()), vec![vec![0; 4]]);
    assert_eq!(lists(fixed_length_partitions(0, 4, false).unwrap()), vec![vec![0; 4]]);
}
