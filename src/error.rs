//! 에러 타입 정의 모듈
//!
//! junzip에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//!
//! 디렉토리/패턴 에러는 실행 전체를 중단시키는 치명적 에러이고,
//! 나머지는 파일 단위 경계에서 잡혀 해당 파일의 실패로만 기록됩니다.

use std::path::PathBuf;
use thiserror::Error;

/// junzip에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum JUnzipError {
    /// 입력 경로의 디렉토리 부분이 존재하지 않음 (치명적)
    #[error("디렉토리를 찾을 수 없습니다: {path}")]
    InvalidDirectory { path: PathBuf },

    /// 유효하지 않은 글로브 패턴 (치명적)
    #[error("유효하지 않은 패턴: {pattern}")]
    InvalidPattern { pattern: String },

    /// 입력 파일이 존재하지 않음
    #[error("파일을 찾을 수 없습니다: {file}")]
    FileNotFound { file: PathBuf },

    /// 입력 파일 접근 권한 없음
    #[error("파일 접근 권한이 없습니다: {file}")]
    AccessDenied { file: PathBuf },

    /// 그 외 파일 열기/읽기 실패
    #[error("파일을 열 수 없습니다 ({file}): {reason}")]
    FileOpen { file: PathBuf, reason: String },

    /// gzip 프레이밍이 깨졌거나 스트림이 중간에 잘림
    #[error("gzip 스트림 해제 실패 ({file}): {reason}")]
    CorruptStream { file: PathBuf, reason: String },

    /// 출력 파일(또는 콘솔) 쓰기 실패
    #[error("출력 쓰기 실패 ({path}): {reason}")]
    OutputWrite { path: PathBuf, reason: String },

    /// 스레드 풀 초기화 실패
    #[error("스레드 풀 초기화 실패: {reason}")]
    ThreadPool { reason: String },
}

impl JUnzipError {
    /// `io::Error`를 입력 파일 열기 에러로 변환
    pub fn from_open_error(file: PathBuf, err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => JUnzipError::FileNotFound { file },
            std::io::ErrorKind::PermissionDenied => JUnzipError::AccessDenied { file },
            _ => JUnzipError::FileOpen {
                file,
                reason: err.to_string(),
            },
        }
    }
}

/// junzip 결과 타입 별칭
pub type Result<T> = std::result::Result<T, JUnzipError>;
