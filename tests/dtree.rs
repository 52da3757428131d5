use minitrees::prelude::*;
use polars::prelude::*;


// Toy example
//
//  row | col1 | col2 | class
// -----+------+------+-------
//   0  |   1  |   x  |   a
//   1  |   2  |   y  |   a
//   2  |   1  |   x  |   b
//   3  |   1  |   y  |   b
//   4  |   1  |   x  |   b
//
// Both criteria split on `col1` first.
// Gini:    col1 <= 1 | col1 > 1
// Entropy: col1 <  2 | col1 >= 2
fn toy_data() -> (DataFrame, Series) {
    let col1 = Series::new("col1", &[1i64, 2, 1, 1, 1]);
    let col2 = Series::new("col2", &["x", "y", "x", "y", "x"]);
    let data = DataFrame::new(vec![col1, col2]).unwrap();
    let target = Series::new("class", &["a", "a", "b", "b", "b"]);
    (data, target)
}


fn trained(criterion: Criterion) -> DecisionTree {
    let (data, target) = toy_data();
    let mut tree = DecisionTreeBuilder::new()
        .criterion(criterion)
        .build();
    tree.train(&data, &target).unwrap();
    tree
}


#[test]
fn two_attributes_no_max_depth_predicts_b() {
    for criterion in [Criterion::Gini, Criterion::Entropy] {
        let tree = trained(criterion);
        let row = Row::new().with("col1", 1).with("col2", "x");
        let res = tree.predict(&row).unwrap();
        let exp = Some(Value::from("b"));
        assert_eq!(exp, res, "{criterion}: expected {exp:?}, got {res:?}.");
    }
}


#[test]
fn two_attributes_no_max_depth_predicts_a() {
    for criterion in [Criterion::Gini, Criterion::Entropy] {
        let tree = trained(criterion);
        let row = Row::new().with("col1", 3).with("col2", "x");
        let res = tree.predict(&row).unwrap();
        let exp = Some(Value::from("a"));
        assert_eq!(exp, res, "{criterion}: expected {exp:?}, got {res:?}.");
    }
}


#[test]
fn root_splits_on_numeric_attribute() {
    let tree = trained(Criterion::Gini);
    let paths = tree.paths()
        .into_iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>();
    let exp = vec![
        "col1 <= 1 -> col2 = x -> b",
        "col1 <= 1 -> col2 != x -> b",
        "col1 > 1 -> a",
    ];
    assert_eq!(exp, paths, "expected {exp:?}, got {paths:?}.");
}


#[test]
fn entropy_splits_categorical_attribute_multiway() {
    let tree = trained(Criterion::Entropy);
    let paths = tree.paths()
        .into_iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>();
    let exp = vec![
        "col1 < 2 -> col2 = x -> b",
        "col1 < 2 -> col2 = y -> b",
        "col1 >= 2 -> a",
    ];
    assert_eq!(exp, paths, "expected {exp:?}, got {paths:?}.");
}


#[test]
fn attributes_are_used_once_per_path() {
    for criterion in [Criterion::Gini, Criterion::Entropy] {
        let tree = trained(criterion);
        for path in tree.paths() {
            let mut names = path.steps.iter()
                .map(|s| s.attribute.as_str())
                .collect::<Vec<_>>();
            let n = names.len();
            names.sort();
            names.dedup();
            assert_eq!(n, names.len(), "{criterion}: repeated attribute in {path}.");
        }
    }
}


#[test]
fn unseen_category_yields_no_prediction() {
    let tree = trained(Criterion::Entropy);
    let row = Row::new().with("col1", 1).with("col2", "z");
    let res = tree.predict(&row).unwrap();
    assert_eq!(None, res, "expected no prediction, got {res:?}.");
}


#[test]
fn missing_attribute_yields_no_prediction() {
    let tree = trained(Criterion::Gini);
    let row = Row::new().with("col2", "x");
    let res = tree.predict(&row).unwrap();
    assert_eq!(None, res, "expected no prediction, got {res:?}.");
}


#[test]
fn unknown_column_is_an_error() {
    let tree = trained(Criterion::Gini);
    let row = Row::new().with("col1", 1).with("col3", 0);
    let res = tree.predict(&row);
    assert!(
        matches!(res, Err(TreeError::UnknownColumn(ref name)) if name == "col3"),
        "expected an unknown column error, got {res:?}."
    );
}


#[test]
fn predict_dataframe_matches_row_predictions() {
    let tree = trained(Criterion::Gini);
    let col1 = Series::new("col1", &[1i64, 3, 2]);
    let col2 = Series::new("col2", &["x", "x", "y"]);
    let data = DataFrame::new(vec![col1, col2]).unwrap();

    let res = tree.predict_dataframe(&data).unwrap();
    let exp = vec![
        Some(Value::from("b")),
        Some(Value::from("a")),
        Some(Value::from("a")),
    ];
    assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");

    for (i, p) in res.into_iter().enumerate() {
        let row = Row::from_dataframe(&data, i).unwrap();
        assert_eq!(p, tree.predict(&row).unwrap(), "row {i}");
    }
}


#[test]
fn predict_dataframe_rejects_unknown_column() {
    let tree = trained(Criterion::Gini);
    let col9 = Series::new("col9", &[1i64]);
    let data = DataFrame::new(vec![col9]).unwrap();
    let res = tree.predict_dataframe(&data);
    assert!(
        matches!(res, Err(TreeError::UnknownColumn(_))),
        "expected an unknown column error, got {res:?}."
    );
}


#[test]
fn regression_leaf_is_the_mean() {
    let data = DataFrame::default();
    let target = Series::new("y", &[2i64, 1, 2, 2]);

    let mut tree = DecisionTreeBuilder::new().build();
    tree.train(&data, &target).unwrap();

    let res = tree.predict(&Row::new()).unwrap();
    let exp = Some(Value::from(1.75));
    assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
}


#[test]
fn regression_tree_separates_levels() {
    let x = Series::new("x", &[1.0, 2.0, 3.0, 4.0]);
    let data = DataFrame::new(vec![x]).unwrap();
    let target = Series::new("y", &[1.0, 1.0, 5.0, 5.0]);

    let mut tree = DecisionTreeBuilder::new().build();
    tree.train(&data, &target).unwrap();

    let low = tree.predict(&Row::new().with("x", 2.0)).unwrap();
    let high = tree.predict(&Row::new().with("x", 10.0)).unwrap();
    assert_eq!(Some(Value::from(1.0)), low);
    assert_eq!(Some(Value::from(5.0)), high);
}


#[test]
fn depth_limit_forces_leaves() {
    let (data, target) = toy_data();
    let mut tree = DecisionTreeBuilder::new()
        .max_depth(1)
        .build();
    tree.train(&data, &target).unwrap();

    let root = tree.root().unwrap();
    assert_eq!(1, root.depth(), "got {root:?}.");

    // The `col1 <= 1` side holds `[a, b, b, b]`.
    let row = Row::new().with("col1", 1).with("col2", "y");
    let res = tree.predict(&row).unwrap();
    assert_eq!(Some(Value::from("b")), res);
}


#[test]
fn unsupported_dtype_is_rejected_at_entry() {
    let col1 = Series::new("col1", &[1i64, 2]);
    let list = Series::new("nested", &[
        Series::new("", &[1i64]),
        Series::new("", &[2i64]),
    ]);
    let data = DataFrame::new(vec![col1, list]).unwrap();
    let target = Series::new("class", &["a", "b"]);

    let mut tree = DecisionTreeBuilder::new().build();
    let res = tree.train(&data, &target);
    assert!(
        matches!(res, Err(TreeError::UnsupportedDtype { ref column, .. }) if column == "nested"),
        "expected an unsupported dtype error, got {res:?}."
    );
    assert!(!tree.is_trained());
}


#[test]
fn null_values_are_rejected_at_entry() {
    let col1 = Series::new("col1", &[Some(1i64), None]);
    let data = DataFrame::new(vec![col1]).unwrap();
    let target = Series::new("class", &["a", "b"]);

    let mut tree = DecisionTreeBuilder::new().build();
    let res = tree.train(&data, &target);
    assert!(
        matches!(res, Err(TreeError::NullValue(ref column)) if column == "col1"),
        "expected a null value error, got {res:?}."
    );
}


#[test]
fn display_lists_every_path() {
    let tree = trained(Criterion::Gini);
    let res = tree.to_string();
    assert!(res.contains("Leaves: 3"), "got {res}.");
    assert!(res.contains("col1 > 1 -> a"), "got {res}.");
}


#[test]
fn nan_values_are_rejected_before_fitting() {
    // A NaN in the first row or in a later one never reaches the tree.
    for vals in [vec![f64::NAN, 1.0, 2.0], vec![1.0, f64::NAN, 2.0]] {
        let features = vec![Feature::numeric("x", vals)];
        let target = Feature::categorical("y", ["b", "a", "c"]);
        let mut tree = DecisionTreeBuilder::new().build();

        let res = Sample::new(features, target)
            .and_then(|sample| tree.fit(&sample));
        assert!(
            matches!(res, Err(TreeError::NanValue(ref column)) if column == "x"),
            "expected a NaN error, got {res:?}."
        );
        assert!(!tree.is_trained());
    }
}
