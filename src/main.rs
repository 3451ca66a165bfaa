//! junzip - JSONZ DECOMPRESSOR
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::env;
use std::path::PathBuf;

use junzip::{
    cli::Args,
    output::OutputTarget,
    pattern::PathSpec,
    processor::{process_file, TaskResult},
    stats::Statistics,
};

fn main() -> Result<()> {
    let args = Args::parse();

    // 스레드 풀 설정
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("스레드 풀 초기화 실패")?;
    }

    // 경로 해석 (디렉토리 검증 포함)
    let path_spec = PathSpec::parse(&args.path).map_err(|e| anyhow::anyhow!("{}", e))?;

    // 파일 수집
    let files = path_spec.list_files().map_err(|e| anyhow::anyhow!("{}", e))?;

    if files.is_empty() {
        println!("{}", "⚠️ 조건에 맞는 파일이 없습니다.".yellow());
        return Ok(());
    }

    let to_console = args.console_output();

    // 출력 싱크 선택 (실행당 한 번; 파일 싱크는 현재 작업 디렉토리 캡처)
    let target = if to_console {
        OutputTarget::Console
    } else {
        let cwd = env::current_dir().context("현재 작업 디렉토리를 확인할 수 없습니다")?;
        OutputTarget::File { dir: cwd }
    };

    // 콘솔 모드에서는 해제된 라인만 출력 (배너/진행률/통계 생략)
    if !to_console {
        print_header(&path_spec, files.len());
    }

    let stats = Statistics::new(files.len());
    let pb = if to_console {
        ProgressBar::hidden()
    } else {
        create_progress_bar(files.len())
    };

    // 병렬 디스패치; collect()가 모든 작업의 완료를 기다리는 조인 지점
    let results: Vec<TaskResult> = files
        .into_par_iter()
        .map(|path| {
            let result = process_file(path, &target);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();

    // 결과 집계
    let mut errors: Vec<(PathBuf, String)> = Vec::new();

    for result in results {
        stats.add_bytes_read(result.bytes_read);

        if result.succeeded {
            stats.add_bytes_written(result.bytes_written);
            stats.increment_success();

            if args.verbose && !to_console {
                if let Some(ref output) = result.output {
                    println!(
                        "  {} {:?} → {:?}",
                        "✓".green(),
                        result.path.file_name().unwrap_or_default(),
                        output.file_name().unwrap_or_default()
                    );
                }
            }
        } else {
            stats.increment_error();
            errors.push((result.path, result.error.unwrap_or_default()));
        }
    }

    // 에러 출력 (콘솔 모드 포함; 실패는 항상 보고)
    print_errors(&errors);

    // 통계 출력
    if !to_console {
        stats.print_summary();
    }

    Ok(())
}

/// 헤더 출력
fn print_header(path_spec: &PathSpec, file_count: usize) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!("{}", " 🚀 JSONZ DECOMPRESSOR".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());
    println!(
        "  {} 입력 디렉토리: {:?}",
        "📂".bright_cyan(),
        path_spec.directory()
    );
    println!(
        "  {} 패턴: {}",
        "🔍".bright_magenta(),
        path_spec.pattern_str()
    );
    println!(
        "  {} 발견된 파일 수: {}",
        "📋".bright_white(),
        file_count.to_string().bright_green()
    );
    println!("{}", "═".repeat(50).bright_blue());
    println!("\n{}", "⚡ 병렬 해제 중...".bright_cyan());
}

/// 진행률 바 생성
fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb
}

/// 에러 목록 출력
fn print_errors(errors: &[(PathBuf, String)]) {
    if errors.is_empty() {
        return;
    }

    println!("\n{}", "❌ 오류 발생 파일:".bright_red());
    for (path, error) in errors {
        println!("  {} {:?}: {}", "•".red(), path, error);
    }
}
