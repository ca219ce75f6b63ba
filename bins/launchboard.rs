use tracing::{error, info, warn};
use uuid::Uuid;

use models::feed::FeedFilter;
use service::ServiceContext;

fn load_config() -> configs::AppConfig {
    // 优先读取 config.toml（或 CONFIG_PATH），失败时使用默认配置
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("config not loaded ({e}); using defaults");
            configs::AppConfig::default()
        }
    }
}

fn init_logging(format: &str) {
    common::utils::logging::init_logging_with_format(format);
    info!(service = "launchboard", event = "logger_init", log_format = format, "tracing subscriber initialized");
}

async fn run(cfg: configs::AppConfig, filter: FeedFilter) -> anyhow::Result<()> {
    if let Some(dir) = cfg.seed.dir.as_deref() {
        common::env::ensure_seed_dir(dir).await?;
    }
    let ctx = ServiceContext::from_config(&cfg).await?;

    if let FeedFilter::Category(slug) = &filter {
        if let Err(e) = ctx.categories.get_by_slug(slug).await {
            warn!(%slug, error = %e, "feed requested for unknown category");
        }
    }

    let products = ctx.products.feed(&filter).await;
    info!(service = "launchboard", event = "feed_loaded", count = products.len(), ?filter, "feed ready");
    println!("{}", serde_json::to_string_pretty(&products)?);
    Ok(())
}

fn main() -> std::process::ExitCode {
    let dotenv_path = common::env::load_dotenv();
    let cfg = load_config();
    init_logging(&cfg.logging.format);
    if let Some(path) = dotenv_path {
        info!(service = "launchboard", event = "dotenv_loaded", path = %path.display(), "loaded .env");
    }

    let run_id = Uuid::new_v4();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "launchboard", event = "panic", %run_id, message = %info, "unhandled panic occurred");
    }));

    let filter = FeedFilter::parse(&std::env::args().nth(1).unwrap_or_default());
    info!(service = "launchboard", event = "start", %run_id, version, ?filter, "launchboard starting");

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "launchboard", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    match rt.block_on(run(cfg, filter)) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(service = "launchboard", event = "run_failed", error = %e, "launchboard run failed");
            std::process::ExitCode::FAILURE
        }
    }
}
