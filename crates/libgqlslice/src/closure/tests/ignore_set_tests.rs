use crate::closure::IgnoreSet;
use crate::closure::IgnoreSetError;
use crate::file_reader::ReadContentError;
use std::path::PathBuf;

#[test]
fn trailing_newline_counts_as_a_line() {
    let ignored = IgnoreSet::from_lines("job_job\ncompany_company\n");
    assert_eq!(ignored.line_count(), 3);
    assert_eq!(ignored.len(), 2);
    assert!(ignored.contains("job_job"));
    assert!(ignored.contains("company_company"));
    assert!(!ignored.contains(""));
}

#[test]
fn empty_content_has_one_line_and_no_entries() {
    let ignored = IgnoreSet::from_lines("");
    assert_eq!(ignored.line_count(), 1);
    assert!(ignored.is_empty());
}

#[test]
fn entries_are_trimmed() {
    let ignored = IgnoreSet::from_lines("  job_job \r\n\n\tuuid");
    assert_eq!(ignored.line_count(), 3);
    assert!(ignored.contains("job_job"));
    assert!(ignored.contains("uuid"));
}

#[test]
fn collects_from_names() {
    let ignored: IgnoreSet = ["a", "b", "a"].into_iter().collect();
    assert_eq!(ignored.len(), 2);
    assert_eq!(ignored.line_count(), 2);
}

#[test]
fn missing_file_is_an_error() {
    let path = PathBuf::from("/definitely/not/here/ignored.txt");
    assert_eq!(
        IgnoreSet::from_file(&path),
        Err(IgnoreSetError::FileReadError(Box::new(
            ReadContentError::PathIsNotAFile(path.clone()),
        ))),
    );
}
