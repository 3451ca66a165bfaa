//! 경로 해석 및 패턴 매칭 모듈
//!
//! 입력 경로 문자열을 (디렉토리, 글로브 패턴)으로 분리하고,
//! 디렉토리 최상위 레벨에서 패턴과 일치하는 파일을 나열합니다.

use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{JUnzipError, Result};

/// 해석된 경로 스펙 (디렉토리 + 컴파일된 파일 이름 패턴)
pub struct PathSpec {
    directory: PathBuf,
    pattern: Pattern,
}

impl PathSpec {
    /// 경로 문자열을 해석하여 `PathSpec` 생성
    ///
    /// 마지막 경로 구분자를 기준으로 디렉토리와 패턴을 분리합니다.
    /// 구분자가 없으면 현재 작업 디렉토리(`.`)를 디렉토리로 사용합니다.
    /// 패턴은 glob 크레이트의 POSIX 스타일 문법(`*`, `?`, `[...]`)을 따르며
    /// 대소문자를 구분합니다.
    ///
    /// # Errors
    /// 디렉토리 부분이 존재하지 않으면 `InvalidDirectory`,
    /// 패턴이 컴파일되지 않으면 `InvalidPattern`을 반환합니다.
    ///
    /// # Examples
    /// ```
    /// use junzip::pattern::PathSpec;
    ///
    /// let spec = PathSpec::parse("*.jsonz").unwrap();
    /// assert!(spec.matches("data.jsonz"));
    /// assert!(!spec.matches("data.json"));
    /// ```
    pub fn parse(spec: &str) -> Result<Self> {
        let (directory, name_pattern) = match spec.rfind(std::path::is_separator) {
            Some(idx) => {
                let dir = &spec[..idx];
                let dir = if dir.is_empty() {
                    std::path::MAIN_SEPARATOR_STR
                } else {
                    dir
                };
                (PathBuf::from(dir), &spec[idx + 1..])
            }
            None => (PathBuf::from("."), spec),
        };

        if !directory.is_dir() {
            return Err(JUnzipError::InvalidDirectory { path: directory });
        }

        let pattern = Pattern::new(name_pattern).map_err(|_| JUnzipError::InvalidPattern {
            pattern: name_pattern.to_string(),
        })?;

        Ok(Self { directory, pattern })
    }

    /// 파일 이름이 패턴과 일치하는지 확인
    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.matches(file_name)
    }

    /// 해석된 디렉토리 반환
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// 패턴 문자열 반환
    pub fn pattern_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// 디렉토리 최상위 레벨에서 패턴과 일치하는 파일 목록 반환
    ///
    /// 하위 디렉토리는 탐색하지 않습니다. 일치하는 파일이 없으면
    /// 에러가 아니라 빈 벡터를 반환합니다. 목록은 파일 이름 순으로
    /// 정렬되지만, 처리 순서에 대한 보장은 아닙니다.
    pub fn list_files(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.directory).map_err(|e| JUnzipError::FileOpen {
            file: self.directory.clone(),
            reason: e.to_string(),
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map(|name| self.pattern.matches(name))
                    .unwrap_or(false)
            })
            .map(|e| e.path())
            .collect();

        files.sort();
        Ok(files)
    }
}
