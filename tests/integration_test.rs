//! 통합 테스트 모듈
//!
//! junzip의 전체 기능을 테스트합니다.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 테스트용 JSONZ(gzip) 파일 생성 헬퍼
fn create_jsonz_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    fs::write(&path, encoder.finish().unwrap()).unwrap();
    path
}

/// 테스트용 디렉토리 구조 생성
fn setup_test_directory() -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    create_jsonz_file(
        temp_dir.path(),
        "events1.jsonz",
        "{\"id\": 1, \"name\": \"First\"}\n{\"id\": 2, \"name\": \"Second\"}\n",
    );
    create_jsonz_file(
        temp_dir.path(),
        "events2.jsonz",
        "{\"id\": 3, \"type\": \"summary\", \"value\": 100}\n",
    );
    create_jsonz_file(
        temp_dir.path(),
        "metrics.jsonz",
        "{\"cpu\": 0.5}\n{\"cpu\": 0.7}\n{\"cpu\": 0.9}\n",
    );

    // 패턴에 걸리지 않아야 하는 파일
    fs::write(temp_dir.path().join("notes.txt"), "not compressed").unwrap();

    temp_dir
}

/// 깨진 gzip 파일이 섞인 테스트 디렉토리 생성
fn setup_mixed_directory() -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    create_jsonz_file(temp_dir.path(), "good1.jsonz", "{\"id\": 1}\n");
    create_jsonz_file(temp_dir.path(), "good2.jsonz", "{\"id\": 2}\n");
    fs::write(temp_dir.path().join("broken.jsonz"), b"this is not gzip").unwrap();

    temp_dir
}

mod pattern_tests {
    use super::*;
    use junzip::{JUnzipError, PathSpec};

    #[test]
    fn test_resolve_and_enumerate() {
        let temp_dir = setup_test_directory();
        let raw = format!("{}/*.jsonz", temp_dir.path().display());

        let spec = PathSpec::parse(&raw).unwrap();
        let files = spec.list_files().unwrap();

        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_question_mark_pattern() {
        let temp_dir = setup_test_directory();
        let raw = format!("{}/events?.jsonz", temp_dir.path().display());

        let spec = PathSpec::parse(&raw).unwrap();
        let files = spec.list_files().unwrap();

        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_no_files_matched_is_not_error() {
        let temp_dir = setup_test_directory();
        let raw = format!("{}/*.doesnotexist", temp_dir.path().display());

        let spec = PathSpec::parse(&raw).unwrap();
        let files = spec.list_files().unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_invalid_directory_is_fatal() {
        let result = PathSpec::parse("/no/such/dir/*.jsonz");
        assert!(matches!(result, Err(JUnzipError::InvalidDirectory { .. })));
    }
}

mod decompress_tests {
    use super::*;
    use junzip::{decompress_lines, JUnzipError};

    #[test]
    fn test_round_trip_preserves_lines() {
        let temp_dir = TempDir::new().unwrap();
        let lines = ["{\"a\": 1}", "{\"b\": 2}", "{\"c\": 3}"];
        let content = lines.join("\n") + "\n";
        let path = create_jsonz_file(temp_dir.path(), "data.jsonz", &content);

        let decoded = decompress_lines(&path).unwrap();

        assert_eq!(decoded, lines);
    }

    #[test]
    fn test_corrupt_stream_reported_as_such() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.jsonz");
        fs::write(&path, b"garbage bytes").unwrap();

        let result = decompress_lines(&path);
        assert!(matches!(result, Err(JUnzipError::CorruptStream { .. })));
    }

    #[test]
    fn test_missing_file_reported_as_such() {
        let result = decompress_lines(Path::new("/no/such/file.jsonz"));
        assert!(matches!(result, Err(JUnzipError::FileNotFound { .. })));
    }
}

mod batch_tests {
    use super::*;
    use junzip::{process_file, OutputTarget, PathSpec, TaskResult};
    use rayon::prelude::*;

    /// 파일 싱크로 전체 배치 실행 헬퍼
    fn run_batch(input_dir: &Path, out_dir: &Path) -> Vec<TaskResult> {
        let raw = format!("{}/*.jsonz", input_dir.display());
        let spec = PathSpec::parse(&raw).unwrap();
        let files = spec.list_files().unwrap();

        let target = OutputTarget::File {
            dir: out_dir.to_path_buf(),
        };

        files
            .into_par_iter()
            .map(|path| process_file(path, &target))
            .collect()
    }

    #[test]
    fn test_n_files_yield_n_outputs() {
        let input_dir = setup_test_directory();
        let out_dir = TempDir::new().unwrap();

        let results = run_batch(input_dir.path(), out_dir.path());

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.succeeded));

        for name in ["events1.json", "events2.json", "metrics.json"] {
            assert!(out_dir.path().join(name).exists(), "{} missing", name);
        }
    }

    #[test]
    fn test_output_content_matches_source_lines() {
        let input_dir = setup_test_directory();
        let out_dir = TempDir::new().unwrap();

        run_batch(input_dir.path(), out_dir.path());

        let written = fs::read_to_string(out_dir.path().join("metrics.json")).unwrap();
        assert_eq!(written, "{\"cpu\": 0.5}\n{\"cpu\": 0.7}\n{\"cpu\": 0.9}\n");
    }

    #[test]
    fn test_one_corrupt_file_does_not_abort_batch() {
        let input_dir = setup_mixed_directory();
        let out_dir = TempDir::new().unwrap();

        let results = run_batch(input_dir.path(), out_dir.path());

        assert_eq!(results.len(), 3);
        assert_eq!(results.iter().filter(|r| r.succeeded).count(), 2);
        assert_eq!(results.iter().filter(|r| !r.succeeded).count(), 1);

        let failed = results.iter().find(|r| !r.succeeded).unwrap();
        assert_eq!(failed.path.file_name().unwrap(), "broken.jsonz");
        assert!(failed.error.is_some());

        assert!(out_dir.path().join("good1.json").exists());
        assert!(out_dir.path().join("good2.json").exists());
        assert!(!out_dir.path().join("broken.json").exists());
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let input_dir = setup_test_directory();
        let out_dir = TempDir::new().unwrap();

        run_batch(input_dir.path(), out_dir.path());
        let first = fs::read(out_dir.path().join("events1.json")).unwrap();

        run_batch(input_dir.path(), out_dir.path());
        let second = fs::read(out_dir.path().join("events1.json")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_output_dir_is_independent_of_source_dir() {
        // 출력은 원본 위치와 무관하게 지정된 출력 루트에 생성됨
        let input_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        create_jsonz_file(input_dir.path(), "far.jsonz", "{\"x\": 1}\n");

        let results = run_batch(input_dir.path(), out_dir.path());

        assert!(results[0].succeeded);
        assert!(out_dir.path().join("far.json").exists());
        assert!(!input_dir.path().join("far.json").exists());
    }
}

mod cli_tests {
    use clap::Parser;
    use junzip::Args;

    #[test]
    fn test_console_flag_variants() {
        for token in ["w", "-w", "--w", "-W", "W"] {
            let args = Args::try_parse_from(["junzip", "*.jsonz", token]).unwrap();
            assert!(
                args.console_output(),
                "token {:?} should select console output",
                token
            );
        }
    }

    #[test]
    fn test_default_is_file_output() {
        let args = Args::try_parse_from(["junzip", "*.jsonz"]).unwrap();
        assert!(!args.console_output());
    }

    #[test]
    fn test_no_arguments_shows_usage() {
        let result = Args::try_parse_from(["junzip"]);
        assert!(result.is_err());
    }
}

mod error_tests {
    use junzip::JUnzipError;
    use std::path::PathBuf;

    #[test]
    fn test_invalid_directory_display() {
        let error = JUnzipError::InvalidDirectory {
            path: PathBuf::from("/nonexistent"),
        };
        let msg = error.to_string();
        assert!(msg.contains("디렉토리를 찾을 수 없습니다"));
        assert!(msg.contains("/nonexistent"));
    }

    #[test]
    fn test_corrupt_stream_display() {
        let error = JUnzipError::CorruptStream {
            file: PathBuf::from("bad.jsonz"),
            reason: "invalid gzip header".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("gzip 스트림 해제 실패"));
        assert!(msg.contains("bad.jsonz"));
    }
}
