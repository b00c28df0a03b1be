use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use scenetemplate::{create_template_file, load_records, write_templates};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Turn a JSON array of attribute records into a scene template file", long_about = None)]
struct Cli {
    /// JSON file holding an array of records, each with a `name` entry
    #[arg(value_name = "RECORDS_JSON")]
    records: Utf8PathBuf,

    /// Template file to write; prints to stdout when omitted
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<Utf8PathBuf>,

    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let records = load_records(&cli.records)
        .with_context(|| format!("Failed to load records from {}", cli.records))?;

    match &cli.output {
        Some(output) => {
            let written = create_template_file(&records, output)
                .with_context(|| format!("Failed to write {}", output))?;
            info!("wrote {} templates to {}", written, output);
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            write_templates(&mut lock, &records).context("Failed to write templates")?;
        }
    }
    Ok(())
}
