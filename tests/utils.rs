use minilearn::prelude::*;

use rand::SeedableRng;
use rand::rngs::StdRng;


#[test]
fn entropy_of_label_counts() {
    let h = information_content(&[5.0, 4.0, 0.0, 2.0, 5.0, 0.0]);
    assert!((1.9..2.0).contains(&h));

    let h = information_content(&[1.5, 2.5]);
    assert!((0.9..1.0).contains(&h));
}


#[test]
fn entropy_of_degenerate_multisets() {
    assert_eq!(information_content(&[]), 0.0);
    assert_eq!(information_content(&[7.0]), 0.0);
    assert_eq!(information_content(&[0.0, 0.0]), 0.0);
    assert_eq!(information_content(&[1.0, 1.0]), 1.0);
}


#[test]
fn entropy_stays_within_its_bounds() {
    let multisets: [&[f64]; 4] = [
        &[5.0, 4.0, 2.0, 5.0],
        &[1.5, 2.5],
        &[0.3, 0.3, 0.3, 0.1],
        &[10.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    ];

    for weights in multisets {
        let h = information_content(weights);
        let distinct = weights.iter().filter(|w| **w > 0.0).count() as f64;
        assert!(h >= 0.0);
        assert!(h <= distinct.log2() + 1e-12);
    }
}


#[test]
fn mode_takes_total_weight() {
    let values = ['a', 'b', 'b', 'a', 'a'];
    let weights = [1.0, 2.0, 3.0, 1.0, 2.0];
    assert_eq!(weighted_mode(&values, &weights), Some('b'));
}


#[test]
fn mode_ties_keep_first_value() {
    let values = ['x', 'y'];
    let weights = [2.0, 2.0];
    assert_eq!(weighted_mode(&values, &weights), Some('x'));

    let empty: [char; 0] = [];
    assert_eq!(weighted_mode(&empty, &[]), None);
}


#[test]
fn replicate_with_integral_shares() {
    let mut rng = StdRng::seed_from_u64(0);
    let vs = weighted_replicate(
        &['A', 'B', 'C'], &[1.0, 2.0, 1.0], 4, &mut rng
    );
    assert_eq!(vs, vec!['A', 'B', 'B', 'C']);
}


#[test]
fn replicate_keeps_requested_size() {
    let mut rng = StdRng::seed_from_u64(1);
    for n in [1usize, 3, 10, 57] {
        let vs = weighted_replicate(
            &[0, 1, 2], &[0.2, 0.5, 0.3], n, &mut rng
        );
        assert_eq!(vs.len(), n);
    }
}


#[test]
fn sampling_ignores_zero_weight() {
    let mut rng = StdRng::seed_from_u64(2);
    let vs = weighted_sample_with_replacement(
        &['p', 'q', 'r'], &[0.0, 1.0, 0.0], 100, &mut rng
    );
    assert!(vs.iter().all(|v| *v == 'q'));
}
