use minitrees::prelude::*;

use polars::prelude::*;


fn dataset_path(name: &str) -> std::path::PathBuf {
    let mut path = std::env::current_dir().unwrap();
    path.push("tests/dataset");
    path.push(name);
    path
}


#[test]
fn reader_trims_cells_and_skips_blank_lines() {
    let s = SampleReader::new()
        .file(dataset_path("messy.data"))
        .attribute_names(["outlook", "temp", "humidity", "play"])
        .target_feature("play")
        .read()
        .unwrap();

    // Two blank-ish lines are skipped, three data rows remain.
    assert_eq!(s.shape(), (3, 4));

    assert_eq!(s.value(0, 0), "sunny");
    assert_eq!(s.value(0, 3), "yes");
    assert_eq!(s.value(1, 1), "cool");

    // The empty cell survives as an empty string.
    assert_eq!(s.value(1, 2), "");
}


#[test]
fn headerless_files_get_dummy_attribute_names() {
    let s = Sample::from_csv(dataset_path("messy.data"), false).unwrap();

    assert_eq!(s.shape(), (3, 4));
    assert_eq!(s.names()[0], "Feat. [1]");
    assert_eq!(s.names()[3], "Feat. [4]");
}


#[test]
fn header_rows_name_the_attributes() {
    let s = Sample::from_csv(dataset_path("play_tennis.csv"), true)
        .unwrap()
        .set_target("PlayTennis")
        .unwrap();

    assert_eq!(s.shape(), (14, 5));
    assert_eq!(s.names()[0], "Outlook");
    assert_eq!(s.target_index().unwrap(), 4);
    assert_eq!(s.feature_indices(), vec![0, 1, 2, 3]);
}


#[test]
fn ragged_rows_are_rejected() {
    let rows = vec![
        vec!["a".to_string(), "b".to_string()],
        vec!["c".to_string()],
    ];
    let err = Sample::from_rows(["x", "y"], rows).unwrap_err();

    assert!(matches!(
        err,
        MiniTreesError::RaggedRow { row: 1, expected: 2, found: 1 }
    ));
}


#[test]
fn unknown_target_names_are_rejected() {
    let rows = vec![vec!["a".to_string(), "yes".to_string()]];
    let err = Sample::from_rows(["x", "y"], rows)
        .unwrap()
        .set_target("z")
        .unwrap_err();

    assert!(matches!(err, MiniTreesError::TargetNotFound(name) if name == "z"));
}


#[test]
fn attribute_name_count_must_match_the_columns() {
    let err = SampleReader::new()
        .file(dataset_path("play_tennis.csv"))
        .has_header(true)
        .attribute_names(["only", "three", "names"])
        .target_feature("only")
        .read()
        .unwrap_err();

    assert!(matches!(
        err,
        MiniTreesError::NameCountMismatch { n_names: 3, n_columns: 5 }
    ));
}


#[test]
fn reading_without_a_file_is_an_error() {
    let err = SampleReader::<&str, &str>::new().read().unwrap_err();
    assert!(matches!(err, MiniTreesError::NoInputFile));
}


#[test]
fn dataframes_convert_with_every_column_as_strings() {
    let s1 = Series::new("Outlook", &["Sunny", "Rain"]);
    let s2 = Series::new("Count", &[1_i64, 2]);
    let df = DataFrame::new(vec![s1, s2]).unwrap();

    let s = Sample::from_dataframe(df)
        .unwrap()
        .set_target("Outlook")
        .unwrap();

    assert_eq!(s.shape(), (2, 2));
    assert_eq!(s.value(0, 0), "Sunny");
    assert_eq!(s.value(0, 1), "1");
    assert_eq!(s.value(1, 1), "2");
    assert_eq!(s.target_index().unwrap(), 0);
}
