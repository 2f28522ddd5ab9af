use minilearn::prelude::*;


const IRIS: &str = "tests/dataset/iris.csv";


fn read_iris() -> Sample {
    SampleReader::new()
        .file(IRIS)
        .has_header(true)
        .target_feature("class")
        .read()
        .unwrap()
}


fn held_out_points(sample: &Sample) -> Vec<(Vec<f64>, i64)> {
    let setosa = sample.label_of("setosa").unwrap();
    let versicolor = sample.label_of("versicolor").unwrap();
    let virginica = sample.label_of("virginica").unwrap();

    vec![
        (vec![5.0, 3.0, 1.0, 0.1], setosa),
        (vec![5.1, 3.3, 1.1, 0.1], setosa),
        (vec![6.0, 5.0, 3.0, 1.0], versicolor),
        (vec![6.1, 2.2, 3.5, 1.0], versicolor),
        (vec![7.5, 4.1, 6.2, 2.3], virginica),
        (vec![7.3, 4.0, 6.1, 2.4], virginica),
    ]
}


#[test]
fn boosted_stumps_beat_chance() {
    let sample = read_iris();

    let weak_learner = DecisionTreeBuilder::new(&sample)
        .max_depth(2)
        .build();
    let mut booster = AdaBoost::init(&sample).n_rounds(5);
    let f = booster.run(&weak_learner);

    let tests = held_out_points(&sample);
    assert!(grade(&f, &tests).unwrap() > 2.0 / 3.0);
    assert!(error_ratio(&f, &sample).unwrap() < 0.25);
}


#[test]
fn zero_rounds_yield_an_empty_vote() {
    let sample = read_iris();

    let weak_learner = DecisionTreeBuilder::new(&sample)
        .max_depth(1)
        .build();
    let mut booster = AdaBoost::init(&sample).n_rounds(0);
    let f = booster.run(&weak_learner);

    assert!(f.is_empty());
    assert_eq!(f.predict(&[5.0, 3.0, 1.0, 0.1]), Err(Error::EmptyEnsemble));
}


#[test]
fn perfect_hypothesis_stops_the_process() {
    let sample = read_iris();

    // An unbounded tree reproduces the sample on its own.
    let weak_learner = DecisionTreeBuilder::new(&sample).build();
    let mut booster = AdaBoost::init(&sample).n_rounds(10);
    let f = booster.run(&weak_learner);

    assert_eq!(f.len(), 1);
    assert_eq!(booster.terminated(), 1);
    assert_eq!(error_ratio(&f, &sample).unwrap(), 0.0);
}


#[test]
fn boosts_a_resampled_learner() {
    let sample = read_iris();

    let weak_learner = Resampling::new(
        DecisionTreeBuilder::new(&sample).max_depth(2).build(),
        0,
    );
    let mut booster = AdaBoost::init(&sample).n_rounds(5);
    let f = booster.run(&weak_learner);

    assert!(!f.is_empty());
    assert!(error_ratio(&f, &sample).unwrap() < 0.5);
}


#[test]
fn resampling_follows_the_distribution() {
    let sample = read_iris();
    let n_sample = sample.shape().0;

    // One-hot distribution: the replicate is 150 copies of row 100.
    let mut dist = vec![0.0; n_sample];
    dist[100] = 1.0;

    let weak_learner = Resampling::new(Plurality::new(), 0);
    let f = weak_learner.produce(&sample, &dist[..]);

    let (x, y) = sample.at(0);
    let (_, y100) = sample.at(100);
    assert_eq!(f.predict(&x).unwrap(), y100 as i64);
    assert_ne!(y as i64, y100 as i64);
}
