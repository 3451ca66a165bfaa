//! gzip 해제 모듈
//!
//! 단일 JSONZ 파일을 메모리로 완전히 해제하여 텍스트 라인 목록으로 반환합니다.

use flate2::bufread::MultiGzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{JUnzipError, Result};

/// 단일 gzip 파일을 해제하여 라인 목록으로 반환
///
/// 스트림 전체를 메모리로 읽은 뒤 라인 단위로 분리합니다.
/// 라인 종결자(`\n`, `\r\n`)는 제거되며, 바이트는 UTF-8로 간주됩니다
/// (유효하지 않은 시퀀스는 대체 문자로 치환, 별도 검증 없음).
/// 파일 핸들은 함수 종료 시(실패 경로 포함) 항상 해제됩니다.
///
/// # Errors
/// * `FileNotFound` / `AccessDenied` / `FileOpen` - 파일을 열 수 없음
/// * `CorruptStream` - gzip 프레이밍이 아니거나 스트림이 중간에 잘림
pub fn decompress_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .map_err(|e| JUnzipError::from_open_error(path.to_path_buf(), &e))?;

    let mut decoder = MultiGzDecoder::new(BufReader::new(file));
    let mut decoded = Vec::new();
    decoder
        .read_to_end(&mut decoded)
        .map_err(|e| JUnzipError::CorruptStream {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let text = String::from_utf8_lossy(&decoded);
    Ok(text.lines().map(str::to_string).collect())
}
