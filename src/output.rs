//! 출력 쓰기 모듈
//!
//! 해제된 라인들을 파일 싱크 또는 콘솔 싱크로 내보냅니다.
//! 싱크 종류는 실행당 한 번 선택되어 모든 파일에 동일하게 적용됩니다.

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{JUnzipError, Result};

/// 해제 결과를 내보낼 싱크
///
/// `File`의 `dir`은 실행 시작 시점에 한 번 캡처한 출력 루트 디렉토리입니다.
/// 전역 상태(현재 작업 디렉토리)를 암묵적으로 읽지 않고 명시적으로 전달받아
/// 컴포넌트를 독립적으로 테스트할 수 있게 합니다.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// 출력 루트 디렉토리에 `<원본 파일 이름(확장자 제외)>.json` 파일 생성
    File { dir: PathBuf },
    /// 표준 출력으로 라인 출력
    Console,
}

/// 원본 파일에 대한 출력 파일 경로 계산
///
/// 원본 파일의 확장자를 제거한 이름에 `.json`을 붙여 `dir` 아래에 둡니다.
/// 원본이 어디에 있든 출력은 항상 `dir`에 생성됩니다.
pub fn destination_path(source: &Path, dir: &Path) -> PathBuf {
    let stem = source.file_stem().unwrap_or_else(|| OsStr::new("output"));
    let mut name = stem.to_os_string();
    name.push(".json");
    dir.join(name)
}

/// 해제된 라인들을 싱크에 기록
///
/// 파일 싱크는 기존 출력 파일이 있으면 삭제한 뒤 새로 생성하며,
/// 각 라인 뒤에 라인 종결자를 붙여 기록합니다. 생성된 출력 파일 경로를
/// 반환합니다. 콘솔 싱크는 표준 출력 잠금을 잡은 상태에서 라인들을
/// 기록하고 `None`을 반환합니다.
///
/// # Errors
/// 싱크 생성/쓰기 실패 시 `OutputWrite`를 반환합니다.
pub fn write_lines(source: &Path, lines: &[String], target: &OutputTarget) -> Result<Option<PathBuf>> {
    match target {
        OutputTarget::File { dir } => {
            let dest = destination_path(source, dir);
            write_file(&dest, lines)?;
            Ok(Some(dest))
        }
        OutputTarget::Console => {
            write_console(lines)?;
            Ok(None)
        }
    }
}

fn write_file(dest: &Path, lines: &[String]) -> Result<()> {
    let write_err = |e: io::Error| JUnzipError::OutputWrite {
        path: dest.to_path_buf(),
        reason: e.to_string(),
    };

    if dest.exists() {
        fs::remove_file(dest).map_err(write_err)?;
    }

    let file = File::create(dest).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    Ok(())
}

fn write_console(lines: &[String]) -> Result<()> {
    let write_err = |e: io::Error| JUnzipError::OutputWrite {
        path: PathBuf::from("<stdout>"),
        reason: e.to_string(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{}", line).map_err(write_err)?;
    }
    out.flush().map_err(write_err)?;

    Ok(())
}
