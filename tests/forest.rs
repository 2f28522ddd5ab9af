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
fn forest_classifies_held_out_points() {
    let sample = read_iris();
    let forest = RandomForestBuilder::new(&sample)
        .n_trees(20)
        .build();
    let f = forest.fit(&sample);

    assert_eq!(f.len(), 20);

    let tests = held_out_points(&sample);
    assert!(grade(&f, &tests).unwrap() >= 1.0 / 3.0);
}


#[test]
fn forest_fits_its_training_sample() {
    let sample = read_iris();
    let forest = RandomForestBuilder::new(&sample)
        .n_trees(15)
        .build();
    let f = forest.fit(&sample);

    assert!(error_ratio(&f, &sample).unwrap() < 0.1);
}


#[test]
fn same_seed_same_forest() {
    let sample = read_iris();
    let tests = held_out_points(&sample);

    let build = || {
        RandomForestBuilder::new(&sample)
            .n_trees(10)
            .n_features(2)
            .seed(7)
            .build()
            .fit(&sample)
    };
    let f = build();
    let g = build();

    for (x, _) in &tests {
        assert_eq!(f.predict(x).unwrap(), g.predict(x).unwrap());
    }
}


#[test]
fn feature_subsets_stay_in_range() {
    let sample = read_iris();
    let forest = RandomForestBuilder::new(&sample)
        .n_trees(5)
        .n_features(100)
        .build();

    // More features than the sample has falls back to all of them.
    let f = forest.fit(&sample);
    assert!(error_ratio(&f, &sample).unwrap() < 0.1);
}
