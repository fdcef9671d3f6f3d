use approx::assert_relative_eq;
use camino::Utf8PathBuf;
use cosmodist::series::Series;

/// Parameter file shipped with the crate.
pub fn sample_parameters_path() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data_input/sn_parameters.yaml")
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn assert_series_close(actual: &Series, expected: &[f64], max_relative: f64) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_relative_eq!(*a, *e, max_relative = max_relative);
    }
}
