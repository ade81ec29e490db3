use anyhow::Result;
use logcall::{config::Config, run};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) settings ─────────────────────────────────────────────────
    let cfg = Config::load()?;
    info!(
        log_dir = %cfg.log_dir.display(),
        pattern = %cfg.pattern,
        output = %cfg.output.display(),
        "startup"
    );

    // ─── 3) select → parse → emit ────────────────────────────────────
    let summary = run(&cfg)?;
    info!(
        "done: {} → {} ({} statements)",
        summary.source.display(),
        summary.output.display(),
        summary.statements
    );
    Ok(())
}
