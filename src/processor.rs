//! 파일 단위 처리 모듈
//!
//! 개별 JSONZ 파일에 대한 해제-쓰기 파이프라인과 그 결과 타입을 정의합니다.
//! 모든 에러는 이 경계에서 잡혀 실패 결과로 변환되며, 병렬 작업 경계를
//! 넘어 전파되지 않습니다.

use std::fs;
use std::path::{Path, PathBuf};

use crate::decompress::decompress_lines;
use crate::error::Result;
use crate::output::{write_lines, OutputTarget};

/// 파일 하나에 대한 처리 결과
#[derive(Debug)]
pub struct TaskResult {
    /// 처리된 원본 파일 경로
    pub path: PathBuf,
    /// 생성된 출력 파일 경로 (파일 싱크 성공 시)
    pub output: Option<PathBuf>,
    /// 성공 여부
    pub succeeded: bool,
    /// 에러 메시지 (실패 시)
    pub error: Option<String>,
    /// 압축된 원본 크기
    pub bytes_read: u64,
    /// 해제되어 기록된 크기 (라인 종결자 포함)
    pub bytes_written: u64,
}

impl TaskResult {
    /// 성공 결과 생성
    pub fn success(
        path: PathBuf,
        output: Option<PathBuf>,
        bytes_read: u64,
        bytes_written: u64,
    ) -> Self {
        Self {
            path,
            output,
            succeeded: true,
            error: None,
            bytes_read,
            bytes_written,
        }
    }

    /// 실패 결과 생성
    pub fn failure(path: PathBuf, error: String, bytes_read: u64) -> Self {
        Self {
            path,
            output: None,
            succeeded: false,
            error: Some(error),
            bytes_read,
            bytes_written: 0,
        }
    }
}

/// 단일 JSONZ 파일 처리 (해제 후 싱크에 기록)
///
/// 파이프라인 내부에서 발생한 모든 에러는 실패 `TaskResult`로 변환됩니다.
pub fn process_file(path: PathBuf, target: &OutputTarget) -> TaskResult {
    let bytes_read = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

    match process_file_internal(&path, target) {
        Ok((output, bytes_written)) => TaskResult::success(path, output, bytes_read, bytes_written),
        Err(e) => TaskResult::failure(path, e.to_string(), bytes_read),
    }
}

fn process_file_internal(path: &Path, target: &OutputTarget) -> Result<(Option<PathBuf>, u64)> {
    let lines = decompress_lines(path)?;

    // 각 라인 + 라인 종결자 1바이트
    let bytes_written = lines.iter().map(|l| l.len() as u64 + 1).sum();

    let output = write_lines(path, &lines, target)?;
    Ok((output, bytes_written))
}
