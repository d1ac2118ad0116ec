//! 부동산 포트폴리오 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 포트폴리오 요약 (오늘 기준)
//! estate summary -s data/sample_portfolio.json
//!
//! # 특정 평가일 기준 JSON 출력
//! estate summary -s data/sample_portfolio.json -n 2025-10-18 -f json
//!
//! # 이탈리아 자산을 월세 내림차순으로 조회
//! estate properties -s data/sample_portfolio.json --search italy --sort rent --desc
//!
//! # 대시보드 개요 (스냅샷 검증 포함)
//! estate --validate dashboard -s data/sample_portfolio.json
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

use estate_analytics::{MetricsCache, SortDirection, SortKey};
use estate_cli::commands::dashboard::run_dashboard;
use estate_cli::commands::properties::{run_properties, PropertiesQuery};
use estate_cli::commands::show_config::run_show_config;
use estate_cli::commands::summary::run_summary;
use estate_cli::commands::{load_snapshot, resolve_now, write_output, OutputFormat};
use estate_core::{init_logging, portfolio_span, AppConfig, LogConfig, PortfolioSnapshot};

#[derive(Parser)]
#[command(name = "estate")]
#[command(about = "Estate portfolio CLI - 임대 수익/수익률 지표 계산", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 (TOML). 지정하지 않으면 config/default.toml이 있을 때 사용
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// 평가 전에 스냅샷 검증
    #[arg(long, global = true, default_value = "false")]
    validate: bool,

    #[command(subcommand)]
    command: Commands,
}

/// 스냅샷을 읽는 명령어의 공통 인자.
#[derive(Args)]
struct SnapshotArgs {
    /// 포트폴리오 스냅샷 파일 (JSON)
    #[arg(short, long)]
    snapshot: PathBuf,

    /// 평가일 (YYYY-MM-DD, 기본: 오늘)
    #[arg(short, long)]
    now: Option<String>,

    /// 출력 형식 (table, json)
    #[arg(short, long, default_value = "table")]
    format: String,

    /// 출력 파일 경로 (지정하지 않으면 stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// 포트폴리오 요약 지표
    Summary {
        #[command(flatten)]
        args: SnapshotArgs,
    },

    /// 자산별 지표 (검색/정렬)
    Properties {
        #[command(flatten)]
        args: SnapshotArgs,

        /// 검색 키워드 (이름, 주소, 도시, 국가, 유형, 임차인, 메모)
        #[arg(long)]
        search: Option<String>,

        /// 정렬 기준 (name, value, rent, city, type)
        #[arg(long)]
        sort: Option<String>,

        /// 내림차순 정렬
        #[arg(long, default_value = "false")]
        desc: bool,
    },

    /// 대시보드 개요
    Dashboard {
        #[command(flatten)]
        args: SnapshotArgs,
    },

    /// 적용된 설정 출력
    Config {
        /// 출력 형식 (table = TOML, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() -> Result<()> {
    // .env가 없어도 무시
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => AppConfig::load_default().context("Failed to load default config")?,
    };

    init_logging(LogConfig::from(&config.logging)).context("Failed to initialize logging")?;

    if let Err(e) = run(cli, &config) {
        error!("Command failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}

fn run(cli: Cli, config: &AppConfig) -> Result<()> {
    match cli.command {
        Commands::Summary { args } => {
            let (snapshot, now, format) = prepare(&args, cli.validate)?;
            let _span = portfolio_span!("summary", snapshot.len(), now).entered();
            let cache = MetricsCache::new(config.metrics.cache_ttl());
            let content = run_summary(&snapshot, now, &cache, format, &config.metrics)?;
            write_output(&content, args.output.as_deref())?;
        }

        Commands::Properties {
            args,
            search,
            sort,
            desc,
        } => {
            let sort = sort
                .as_deref()
                .map(str::parse::<SortKey>)
                .transpose()
                .context("Invalid --sort value")?;

            let query = PropertiesQuery {
                search,
                sort,
                direction: if desc {
                    SortDirection::Descending
                } else {
                    SortDirection::Ascending
                },
            };

            let (snapshot, now, format) = prepare(&args, cli.validate)?;
            let _span = portfolio_span!("properties", snapshot.len(), now).entered();
            let content = run_properties(&snapshot, now, &query, format, &config.metrics)?;
            write_output(&content, args.output.as_deref())?;
        }

        Commands::Dashboard { args } => {
            let (snapshot, now, format) = prepare(&args, cli.validate)?;
            let _span = portfolio_span!("dashboard", snapshot.len(), now).entered();
            let content = run_dashboard(&snapshot, now, format, &config.metrics)?;
            write_output(&content, args.output.as_deref())?;
        }

        Commands::Config { format } => {
            let format = OutputFormat::parse(&format)?;
            let content = run_show_config(config, format)?;
            write_output(&content, None)?;
        }
    }

    Ok(())
}

/// 공통 인자를 해석하고 스냅샷을 읽습니다. 평가일은 여기서 한 번만 정합니다.
fn prepare(
    args: &SnapshotArgs,
    validate: bool,
) -> Result<(PortfolioSnapshot, NaiveDate, OutputFormat)> {
    let format = OutputFormat::parse(&args.format)?;
    let now = resolve_now(args.now.as_deref())?;
    let snapshot = load_snapshot(&args.snapshot, validate)?;

    info!(
        snapshot = %args.snapshot.display(),
        now = %now,
        properties = snapshot.len(),
        "Evaluating portfolio"
    );

    Ok((snapshot, now, format))
}
