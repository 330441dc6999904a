use super::*;

#[test]
fn failure_message_includes_status() {
    assert_eq!(download_failed_message(404), "cv download failed: 404");
    assert_eq!(download_failed_message(500), "cv download failed: 500");
}

#[test]
fn cv_path_and_filename_agree() {
    assert!(CV_PATH.starts_with('/'));
    assert_eq!(&CV_PATH[1..], CV_FILENAME);
    assert!(CV_FILENAME.ends_with(".pdf"));
}
