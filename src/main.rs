use barrage::errors::{Result, report_failure};
use barrage::{BenchmarkRunner, Config};
use std::process;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Configuration errors happen before the subscriber exists
        report_failure(&mut std::io::stderr(), &e);
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Parse and validate configuration
    let config = Config::from_args()?;

    // Initialize logging based on verbosity
    init_logging(&config);

    info!("Barrage - concurrent HTTP latency benchmark");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    config.print_summary();

    BenchmarkRunner::new(config)
        .run()
        .await
        .map(|_| {
            info!("Benchmark completed successfully");
        })
}

/// Initialize logging based on configuration
fn init_logging(config: &Config) {
    let barrage_level = if config.output.verbose {
        "debug"
    } else {
        "info"
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(
                    format!("barrage={}", barrage_level)
                        .parse()
                        .expect("Invalid filter directive"),
                )
                .add_directive("hyper=warn".parse().expect("Invalid filter directive"))
                .add_directive("reqwest=warn".parse().expect("Invalid filter directive")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default subscriber");

    if config.output.verbose {
        info!("Verbose logging enabled");
    }
}
