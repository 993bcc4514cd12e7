//! hangul-namer - 라틴 문자 이름을 한글로 옮기는 명령줄 도구

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use hangul_namer::config::load_config;
use hangul_namer::{
    detect_language, detect_script, romanize, ConversionResult, EngineConfig, NameConverter,
    SegmentRole,
};

/// 명령줄 인자
#[derive(Parser, Debug)]
#[command(name = "hangul-namer")]
#[command(about = "라틴 문자 이름을 한글 이름과 로마자 표기로 변환")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// 원어 코드 (en, es, fr, de, it, pt, ... 또는 auto)
    #[arg(short, long, default_value = "auto", env = "HANGUL_NAMER_LANG")]
    lang: String,

    /// 설정 파일 경로 (JSON)
    #[arg(short, long, env = "HANGUL_NAMER_CONFIG")]
    config: Option<PathBuf>,

    /// 결과를 JSON으로 출력
    #[arg(long)]
    json: bool,

    /// 감지한 언어와 문자 체계도 출력
    #[arg(long)]
    detect: bool,

    /// 변환할 이름 (여러 단어는 공백으로 이어 붙임)
    name: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 한글을 로마자 표기로 변환
    Romanize {
        /// 한글 텍스트
        #[arg(required = true)]
        hangul: Vec<String>,
    },
}

fn main() {
    // 로깅 초기화 (error/warn만 출력, RUST_LOG로 변경 가능)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Some(Command::Romanize { hangul }) = &args.command {
        println!("{}", romanize(&hangul.join(" ")));
        return;
    }

    if args.name.is_empty() {
        eprintln!("변환할 이름을 입력해주세요. (--help 참고)");
        process::exit(2);
    }
    let name = args.name.join(" ");

    let config = match &args.config {
        Some(path) => load_config(path),
        None => EngineConfig::default(),
    };
    let converter = NameConverter::new(config);

    if args.detect {
        let script = detect_script(&name)
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("language: {}, script: {}", detect_language(&name), script);
    }

    let result = match converter.convert(&name, &args.lang) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("JSON 직렬화 실패: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_result(&result);
    }
}

fn print_result(result: &ConversionResult) {
    println!("{} ({})", result.korean_name, result.romanization);
    for segment in &result.breakdown {
        let label = match segment.role {
            SegmentRole::Family => "성",
            SegmentRole::Given => "이름",
            SegmentRole::Syllable => "음절",
        };
        println!("  {:<4} {} ({})", label, segment.hangul, segment.romanization);
    }
    if result.unmapped > 0 {
        log::warn!("매핑 없는 문자 {}개를 기본 모음으로 대체함", result.unmapped);
    }
}
