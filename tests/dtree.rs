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


#[test]
fn classifies_new_iris_points() {
    let sample = read_iris();
    let tree = DecisionTreeBuilder::new(&sample).build();
    let f = tree.fit(&sample);

    let points = [
        (vec![5.0, 3.0, 1.0, 0.1], "setosa"),
        (vec![6.0, 5.0, 3.0, 1.5], "versicolor"),
        (vec![7.5, 4.0, 6.0, 2.0], "virginica"),
    ];
    for (x, class) in points {
        let label = f.predict(&x).unwrap();
        assert_eq!(sample.class_name(label), Some(class));
    }
}


#[test]
fn reproduces_its_training_sample() {
    let sample = read_iris();
    let tree = DecisionTreeBuilder::new(&sample).build();
    let f = tree.fit(&sample);

    assert_eq!(error_ratio(&f, &sample).unwrap(), 0.0);
}


#[test]
fn repeated_predictions_agree() {
    let sample = read_iris();
    let tree = DecisionTreeBuilder::new(&sample).build();
    let f = tree.fit(&sample);

    let x = vec![6.0, 5.0, 3.0, 1.5];
    assert_eq!(f.predict(&x).unwrap(), f.predict(&x).unwrap());
    assert_eq!(
        f.predict_all(&sample).unwrap(),
        f.predict_all(&sample).unwrap(),
    );
}


#[test]
fn depth_zero_is_a_single_leaf() {
    let sample = read_iris();
    let tree = DecisionTreeBuilder::new(&sample)
        .max_depth(0)
        .build();
    let f = tree.fit(&sample);

    // Equal class masses, so the tie goes to the lowest label.
    let predictions = f.predict_all(&sample).unwrap();
    assert!(predictions.iter().all(|&p| p == predictions[0]));
}


#[test]
fn shallow_tree_is_still_accurate() {
    let sample = read_iris();
    let tree = DecisionTreeBuilder::new(&sample)
        .max_depth(2)
        .criterion(Criterion::Gini)
        .build();
    let f = tree.fit(&sample);

    assert!(error_ratio(&f, &sample).unwrap() < 0.1);
}


#[test]
fn rejects_wrong_arity() {
    let sample = read_iris();
    let tree = DecisionTreeBuilder::new(&sample).build();
    let f = tree.fit(&sample);

    let ret = f.predict(&[5.0, 3.0, 1.0]);
    assert_eq!(ret, Err(Error::InvalidInput { expected: 4, got: 3 }));
}


#[test]
fn splits_categorical_features() {
    let sample = SampleReader::new()
        .file("tests/dataset/restaurant.csv")
        .has_header(true)
        .target_feature("wait")
        .read()
        .unwrap();

    assert_eq!(sample.shape(), (12, 10));
    assert!(sample.features().iter().all(Feature::is_categorical));

    let tree = DecisionTreeBuilder::new(&sample).build();
    let f = tree.fit(&sample);

    assert_eq!(error_ratio(&f, &sample).unwrap(), 0.0);
}


#[test]
fn unseen_category_falls_back() {
    let sample = SampleReader::new()
        .file("tests/dataset/restaurant.csv")
        .has_header(true)
        .target_feature("wait")
        .read()
        .unwrap();

    let tree = DecisionTreeBuilder::new(&sample).build();
    let f = tree.fit(&sample);

    // A code no training example carries still yields a prediction.
    let (mut x, _) = sample.at(0);
    for value in x.iter_mut() {
        *value = 9.0;
    }
    assert!(f.predict(&x).is_ok());
}


#[test]
fn ignores_examples_outside_the_distribution() {
    let sample = read_iris();
    let n_sample = sample.shape().0;

    // All the mass sits on the setosa examples.
    let mut dist = vec![0.0; n_sample];
    let setosa = sample.label_of("setosa").unwrap();
    let chosen = sample.target()
        .iter()
        .enumerate()
        .filter_map(|(i, &y)| (y as i64 == setosa).then_some(i))
        .collect::<Vec<_>>();
    for &i in &chosen {
        dist[i] = 1.0 / chosen.len() as f64;
    }

    let tree = DecisionTreeBuilder::new(&sample).build();
    let f = tree.produce(&sample, &dist[..]);

    // The tree never saw another class.
    let predictions = f.predict_all(&sample).unwrap();
    assert!(predictions.iter().all(|&p| p == setosa));
}
