//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;

/// junzip CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "junzip",
    author = "YourName <your@email.com>",
    version,
    about = "JSONZ DECOMPRESSOR - gzip으로 압축된 JSONZ 파일들을 JSON으로 해제하는 고성능 CLI 도구",
    arg_required_else_help = true,
    long_about = r#"
JSONZ DECOMPRESSOR
==================

지정된 경로 패턴과 일치하는 모든 JSONZ(gzip 압축 JSON Lines) 파일을
해제하여 현재 작업 디렉토리에 .json 파일로 저장합니다.
콘솔 토큰(w, -w, --w)을 주면 파일 대신 표준 출력으로 내보냅니다.

특징:
  • 파일별 독립 병렬 처리 (한 파일의 실패가 전체를 중단하지 않음)
  • 기존 .json 출력 파일은 삭제 후 새로 생성 (재실행 시 동일 결과)
  • 진행률 표시 및 상세 통계
  • 글로브 형식의 파일 이름 매칭 (*, ?, [...])

예제:
  junzip data.jsonz
  junzip "./logs/*.jsonz"
  junzip "*.jsonz" -w
  junzip "*.jsonz" --verbose -j 4
"#
)]
pub struct Args {
    /// 입력 경로 또는 글로브 패턴 (예: "./data/*.jsonz", "log?.jsonz")
    pub path: String,

    /// 콘솔 출력 토큰 (w, -w, --w 중 하나, 대소문자 무시)
    #[arg(allow_hyphen_values = true)]
    pub console: Option<String>,

    /// 병렬 처리 스레드 수 (기본값: CPU 코어 수)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// 상세 출력 모드
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 콘솔 출력 토큰이 주어졌는지 확인
    ///
    /// `w`와 정확히 일치하거나 `-w`를 포함하는 토큰(대소문자 무시)이면
    /// 파일 대신 표준 출력으로 내보냅니다.
    pub fn console_output(&self) -> bool {
        match &self.console {
            Some(token) => {
                let token = token.to_ascii_lowercase();
                token == "w" || token.contains("-w")
            }
            None => false,
        }
    }
}
