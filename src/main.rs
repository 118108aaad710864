use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
mod config;
mod error;
mod model;
mod navigation;
mod services;
mod utils;

use config::Config;
use model::Direction;
use services::{create_window_source, FocusNavigator, NavigationOutcome};

#[derive(Parser, Debug)]
#[command(name = "keynav")]
#[command(about = "Переключение фокуса на ближайшее окно в заданном направлении")]
struct Args {
    /// Направление: up, down, left или right
    direction: Direction,

    /// Путь к файлу конфигурации
    #[arg(short, long, default_value = "keynav.toml")]
    config: String,

    /// Источник окон: auto, sway, x11, snapshot или dry-run
    #[arg(long)]
    backend: Option<String>,

    /// JSON-снимок экрана вместо оконного менеджера
    #[arg(long, conflicts_with = "backend")]
    snapshot: Option<PathBuf>,

    /// Режим сухого запуска (без реальных действий)
    #[arg(long, conflicts_with_all = ["backend", "snapshot"])]
    dry_run: bool,

    /// Не поднимать найденное окно, только передать фокус
    #[arg(long)]
    no_raise: bool,

    /// Напечатать снимок экрана в JSON и выйти
    #[arg(long)]
    dump: bool,

    /// Уровень логирования (по умолчанию из конфигурации)
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    /// Наложить флаги командной строки на конфигурацию
    fn apply_to(&self, config: &mut Config) {
        if let Some(backend) = &self.backend {
            config.source.backend = backend.clone();
        }
        if let Some(path) = &self.snapshot {
            config.source.backend = "snapshot".to_string();
            config.source.snapshot_path = path.clone();
        }
        if self.dry_run {
            config.source.backend = "dry-run".to_string();
        }
        if self.no_raise {
            config.focus.raise = false;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Загрузка конфигурации
    let mut config = Config::load(&args.config)?;
    args.apply_to(&mut config);
    config.validate()?;

    // Инициализация системы логирования
    init_tracing(&config.logging.level, &config.logging.format)?;

    info!("Запуск keynav v{}", env!("CARGO_PKG_VERSION"));

    if args.dry_run {
        warn!("Режим сухого запуска - фокус не передаётся");
    }

    let config = Arc::new(config);
    let source = create_window_source(&config)?;

    if args.dump {
        let snapshot = source.snapshot().await?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let navigator = FocusNavigator::new(config.clone(), source);
    let outcome = navigator.navigate(args.direction).await?;

    match outcome {
        NavigationOutcome::Focused(_) => info!("Готово: {}", outcome),
        _ => info!("Фокус не изменён: {}", outcome),
    }

    Ok(())
}

fn init_tracing(level: &str, format: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    // Логи в stderr, чтобы не смешивать их с выводом --dump
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        "full" => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init(),
    }

    Ok(())
}
