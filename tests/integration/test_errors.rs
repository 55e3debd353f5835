//! Integration tests for error handling

use lcount::{Error, ScanOptions, StrategyKind};
use lcount::services::crawl;
use tempfile::TempDir;

#[test]
fn test_invalid_path_error() {
    let result = lcount::scan_summary("/definitely/does/not/exist/xyz123", &ScanOptions::default());

    match result {
        Err(Error::InvalidInput(msg)) => assert!(msg.contains("does not exist"), "{msg}"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_file_instead_of_directory() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    let result = lcount::scan_summary(temp_file.path(), &ScanOptions::default());

    assert!(result.is_err());
    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("not a directory"), "{error_msg}");
}

#[test]
fn test_empty_root_is_no_files_error() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("empty/nested")).unwrap();

    let result = lcount::scan_summary(temp_dir.path(), &ScanOptions::default());
    match result {
        Err(err @ Error::NoFiles { .. }) => assert!(err.to_string().contains("No files found")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_crawl_of_missing_root_is_directory_error() {
    for kind in [StrategyKind::Portable, StrategyKind::Posix] {
        match crawl::crawl_with("/definitely/does/not/exist/xyz123", kind) {
            Err(Error::DirectoryAccess { path, source }) => {
                assert!(path.ends_with("xyz123"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected result for {kind}: {other:?}"),
        }
    }
}

#[test]
fn test_crawl_of_file_root_is_directory_error() {
    let temp_file = tempfile::NamedTempFile::new().unwrap();

    for kind in [StrategyKind::Portable, StrategyKind::Posix] {
        let result = crawl::crawl_with(temp_file.path(), kind);
        assert!(
            matches!(result, Err(Error::DirectoryAccess { .. })),
            "{kind}: {result:?}"
        );
    }
}

#[test]
fn test_error_source_chain() {
    use std::error::Error as _;

    let err = crawl::crawl("/definitely/does/not/exist/xyz123").unwrap_err();
    assert!(err.source().is_some());
    assert!(err.to_string().starts_with("failed to read directory"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_nested_directory_fails_crawl() {
    use crate::fixtures::write_lines;
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let locked = temp_dir.path().join("outer/locked");
    write_lines(locked.join("inner.txt"), 3).unwrap();
    write_lines(temp_dir.path().join("ok.txt"), 1).unwrap();

    fs::set_permissions(&locked, Permissions::from_mode(0o000)).unwrap();
    // Privileged users read through mode 000; nothing to check then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let outcomes: Vec<_> = [StrategyKind::Portable, StrategyKind::Posix]
        .into_iter()
        .map(|kind| (kind, crawl::crawl_with(temp_dir.path(), kind)))
        .collect();
    fs::set_permissions(&locked, Permissions::from_mode(0o755)).unwrap();

    for (kind, result) in outcomes {
        match result {
            Err(Error::DirectoryAccess { path, source }) => {
                assert!(path.ends_with("outer/locked"), "{kind}: {path}");
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied, "{kind}");
            }
            other => panic!("unexpected result for {kind}: {other:?}"),
        }
    }
}
