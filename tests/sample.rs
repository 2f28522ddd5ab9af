use minilearn::prelude::*;

use approx::assert_abs_diff_eq;


/// Path to the iris dataset.
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
fn iris_shape_and_classes() {
    let sample = read_iris();

    assert_eq!(sample.shape(), (150, 4));
    assert_eq!(sample.classes(), &["setosa", "versicolor", "virginica"]);

    assert_eq!(sample.label_of("setosa"), Some(0));
    assert_eq!(sample.label_of("virginica"), Some(2));
    assert_eq!(sample.class_name(1), Some("versicolor"));
    assert_eq!(sample.class_name(3), None);
}


#[test]
fn iris_means_and_deviations() {
    let sample = read_iris();
    let (means, deviations) = sample.find_means_and_deviations();

    // Sepal length, per class.
    assert_abs_diff_eq!(means[&0][0], 5.006, epsilon = 1e-3);
    assert_abs_diff_eq!(means[&1][0], 5.936, epsilon = 1e-3);
    assert_abs_diff_eq!(means[&2][0], 6.588, epsilon = 1e-3);

    assert_abs_diff_eq!(deviations[&0][0], 0.352, epsilon = 1e-3);
    assert_abs_diff_eq!(deviations[&1][0], 0.516, epsilon = 1e-3);
    assert_abs_diff_eq!(deviations[&2][0], 0.636, epsilon = 1e-3);
}


#[test]
fn relabel_classes() {
    let sample = read_iris();

    let mut relabeled = read_iris();
    relabeled.classes_to_numbers(&["virginica", "setosa", "versicolor"])
        .unwrap();

    assert_eq!(relabeled.label_of("virginica"), Some(0));
    assert_eq!(relabeled.label_of("setosa"), Some(1));

    // Every example keeps its class, only the code changes.
    let before = sample.target();
    let after = relabeled.target();
    for (b, a) in before.iter().zip(after.iter()) {
        let name = sample.class_name(*b as i64).unwrap();
        assert_eq!(relabeled.label_of(name), Some(*a as i64));
    }
}


#[test]
fn relabel_rejects_numeric_target() {
    let mut sample = SampleReader::new()
        .file("tests/dataset/zoo.csv")
        .has_header(true)
        .target_feature("legs")
        .read()
        .unwrap();

    // A numeric target interns no classes, so there is
    // nothing to re-encode.
    assert!(sample.classes().is_empty());
    let ret = sample.classes_to_numbers(&["mammal"]);
    assert!(matches!(ret, Err(Error::UnknownClass(_))));
}


#[test]
fn relabel_rejects_missing_class() {
    let mut sample = read_iris();
    let ret = sample.classes_to_numbers(&["setosa", "versicolor"]);
    assert_eq!(ret, Err(Error::UnknownClass(String::from("virginica"))));
}


#[test]
fn exclude_drops_columns() {
    let sample = SampleReader::new()
        .file(IRIS)
        .has_header(true)
        .exclude(&["sepal_width"])
        .target_feature("class")
        .read()
        .unwrap();

    assert_eq!(sample.shape(), (150, 3));
    assert_eq!(sample.features()[0].name(), "sepal_length");
    assert_eq!(sample.features()[1].name(), "petal_length");
}


#[test]
fn subsample_repeats_rows() {
    let sample = read_iris();
    let sub = sample.subsample(&[0, 0, 149]);

    assert_eq!(sub.shape(), (3, 4));
    let (x0, y0) = sub.at(0);
    let (x1, y1) = sub.at(1);
    assert_eq!(x0, x1);
    assert_eq!(y0, y1);

    let (_, y2) = sub.at(2);
    assert_eq!(sub.class_name(y2 as i64), Some("virginica"));
}
