use anyhow::Result;
use shape_report::config::Config;
use shape_report::generate_report;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr, so stdout carries only the report)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shape_report=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!("Rendering report in {}", config.language.name());

    let shapes = config.load_shapes()?;
    info!("Loaded {} shapes", shapes.len());

    println!("{}", generate_report(&shapes, config.language));
    Ok(())
}
