use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use shadegen::{
    ColorCollector, FileEmitter, LinePrompter, TintShadeDeriver, config::AppConfig,
    render_stylesheet, render_tailwind_config,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "shadegen")]
#[command(about = "Generate Tailwind color scales and CSS variables from base colors")]
struct Args {
    /// Directory to write the generated files into
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// File name for the Tailwind configuration fragment
    #[arg(long)]
    tailwind_file: Option<String>,

    /// File name for the CSS variables stylesheet
    #[arg(long)]
    css_file: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging on stderr so it never interleaves with prompts
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::builder()
            .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
            .parse_lossy("shadegen=info")
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(dir) = args.out_dir {
        config.output.dir = dir;
    }
    if let Some(name) = args.tailwind_file {
        config.output.tailwind_file = name;
    }
    if let Some(name) = args.css_file {
        config.output.stylesheet_file = name;
    }
    tracing::debug!("Using configuration: {:?}", config);

    // Checked before prompting so a bad layout fails fast
    let emitter =
        FileEmitter::from_config(&config.output).context("Invalid output configuration")?;

    let deriver = TintShadeDeriver::with_labels(&config.shades.scale);
    if deriver.steps().is_empty() {
        tracing::warn!("No known shade labels configured, generated files will be empty");
    }

    let collector = ColorCollector::new(Arc::new(deriver));
    let mut prompter = LinePrompter::stdio();
    let collection = collector
        .collect(&mut prompter)
        .context("Failed to collect colors")?;
    tracing::info!("Collected {} color(s)", collection.palette.len());

    let tailwind_config = render_tailwind_config(&collection.palette.theme);
    let stylesheet = render_stylesheet(&collection.palette.styles);

    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    let report = rt.block_on(emitter.emit(&tailwind_config, &stylesheet));
    report.print().context("Failed to print write report")?;

    // Write failures are reported above and do not change the exit status
    if !report.all_succeeded() {
        tracing::warn!("{} artifact(s) could not be written", report.failures().count());
    }

    Ok(())
}
