//! Unit tests for error construction and display.

use camino::Utf8Path;
use rstest::rstest;
use std::error::Error as _;

use super::LocaleError;

#[rstest]
fn file_error_names_the_path_and_keeps_the_source() {
    let err = LocaleError::file(
        Utf8Path::new("translations/es_GT.csv"),
        std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("translations/es_GT.csv"), "{rendered}");
    assert!(err.source().is_some(), "source error should be preserved");
}

#[rstest]
fn directory_error_preserves_io_kind() {
    let err = LocaleError::directory(
        Utf8Path::new("missing"),
        std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    );
    match err {
        LocaleError::Directory { path, source } => {
            assert_eq!(path, "missing");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Directory, got {other:?}"),
    }
}

#[rstest]
#[case(LocaleError::SelectorAlreadyRegistered, "locale selector")]
#[case(LocaleError::SourceAlreadyRegistered, "translation source")]
fn registration_errors_describe_the_conflict(#[case] err: LocaleError, #[case] needle: &str) {
    assert!(err.to_string().contains(needle));
}

#[rstest]
fn figment_errors_convert_into_settings_errors() {
    let err: LocaleError = figment::Error::from("bad value").into();
    assert!(matches!(err, LocaleError::Settings(_)));
    assert!(err.to_string().contains("bad value"));
}
