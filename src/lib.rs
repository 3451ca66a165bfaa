//! junzip - JSONZ DECOMPRESSOR
//!
//! gzip으로 압축된 JSONZ(JSON Lines) 파일들을 일괄 해제하여
//! `.json` 파일 또는 표준 출력으로 내보내는 고성능 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🚀 **병렬 처리**: Rayon을 활용한 파일별 독립 병렬 해제
//! - 🛡️ **부분 실패 허용**: 한 파일의 실패가 나머지 배치를 중단하지 않음
//! - 🔍 **글로브 매칭**: `*`, `?`, `[...]` 형식의 파일 이름 매칭
//! - 📄 **결정적 출력**: 기존 출력 파일 삭제 후 재생성 (재실행 시 동일 결과)
//! - 🖥️ **콘솔 모드**: 파일 생성 없이 해제된 라인을 표준 출력으로
//! - 📈 **상세 통계**: 성공/실패 파일 수, 압축/해제 용량, 처리 시간 표시
//! - 🎨 **컬러 출력**: 가독성 높은 컬러 터미널 출력
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법: 일치하는 모든 파일을 현재 디렉토리에 .json으로 해제
//! junzip "./data/*.jsonz"
//!
//! # 콘솔로 출력
//! junzip data.jsonz -w
//!
//! # 스레드 수 지정 + 상세 출력
//! junzip "*.jsonz" -j 4 --verbose
//! ```

pub mod cli;
pub mod decompress;
pub mod error;
pub mod output;
pub mod pattern;
pub mod processor;
pub mod stats;

// Re-exports for convenient access
pub use cli::Args;
pub use decompress::decompress_lines;
pub use error::{JUnzipError, Result};
pub use output::{destination_path, write_lines, OutputTarget};
pub use pattern::PathSpec;
pub use processor::{process_file, TaskResult};
pub use stats::{format_bytes, format_duration, Statistics};
