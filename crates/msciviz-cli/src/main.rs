//! MSCI World 시각화 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 여섯 개 차트 전부 렌더링
//! msciviz all
//!
//! # 히트맵만 렌더링
//! msciviz heatmap
//!
//! # 입력 CSV와 출력 디렉터리 지정
//! msciviz all -i data/MSCI_World_daily.csv -o img
//!
//! # 설정 파일 사용
//! msciviz -c config/default.toml all
//! ```

use clap::{Parser, Subcommand};
use tracing::{error, info};

mod commands;

use commands::render::{render_all, render_chart, ChartKind};
use msciviz_core::{init_logging, AppConfig, LogConfig};

#[derive(Parser)]
#[command(name = "msciviz")]
#[command(about = "MSCI World 지수 시각화 - 일별 가격 CSV에서 인터랙티브 HTML 차트 생성", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로 (기본: config/default.toml, 없으면 기본값)
    #[arg(short, long)]
    config: Option<String>,

    /// 입력 CSV 경로 (설정 파일 값 덮어쓰기)
    #[arg(short, long)]
    input: Option<String>,

    /// 출력 디렉터리 (설정 파일 값 덮어쓰기)
    #[arg(short, long)]
    output_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 시작 연도 × 보유 기간 수익률 히트맵
    Heatmap,

    /// 보유 기간별 연환산 수익률 범위 곡선
    LongTerm,

    /// 연도별 일간 프로파일 겹침 차트 (슬라이더 강조)
    Multiple,

    /// 수익률 구간별 연도 블록 차트
    ReturnsOne,

    /// 연간 수익률 막대 차트 (선형/log2 전환)
    ReturnsTwo,

    /// 주간 가격 프로파일 (선형/log2 전환)
    Single,

    /// 여섯 개 차트 전부 렌더링
    All,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 설정 로드: 파일 지정이 없으면 기본 경로, 그것도 없으면 기본값
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_default()?,
    };
    if let Some(input) = cli.input {
        config.data.input_path = input;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output.dir = output_dir;
    }

    // 트레이싱 초기화
    let log_config = LogConfig::new(&config.logging.level)
        .with_format(config.logging.format.parse().unwrap_or_default());
    init_logging(log_config).map_err(|e| anyhow::anyhow!("failed to init logging: {e}"))?;

    let result = match cli.command {
        Commands::Heatmap => render_chart(&config, ChartKind::Heatmap).map(|p| vec![p]),
        Commands::LongTerm => render_chart(&config, ChartKind::LongTerm).map(|p| vec![p]),
        Commands::Multiple => render_chart(&config, ChartKind::Multiple).map(|p| vec![p]),
        Commands::ReturnsOne => render_chart(&config, ChartKind::ReturnsOne).map(|p| vec![p]),
        Commands::ReturnsTwo => render_chart(&config, ChartKind::ReturnsTwo).map(|p| vec![p]),
        Commands::Single => render_chart(&config, ChartKind::Single).map(|p| vec![p]),
        Commands::All => render_all(&config),
    };

    match result {
        Ok(paths) => {
            info!("✅ Rendered {} chart(s)", paths.len());
            println!("\n차트 렌더링 완료: {}개", paths.len());
            for path in paths {
                println!("저장 위치: {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            error!("Rendering failed: {e:#}");
            Err(e)
        }
    }
}
