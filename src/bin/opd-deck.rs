use clap::Parser;
use opd_deck::Error;
use opd_deck::presentation::{BuildReport, DeckBuilder, DeckFile, content};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Build the OPD-EMR overview deck as a .pptx file.
#[derive(Parser)]
#[clap(author, version, about)]
struct DeckArgs {
    /// YAML deck file to build instead of the built-in deck
    #[clap(short, long)]
    deck: Option<PathBuf>,
    #[clap(short, long, default_value = content::DEFAULT_OUTPUT)]
    output: PathBuf,
    #[clap(short, long)]
    log_level: Option<String>,
    /// Print the built-in deck as YAML and exit
    #[clap(long)]
    print_deck: bool,
}

fn main() -> ExitCode {
    let args = DeckArgs::parse();
    setup_logging(args.log_level.as_deref());

    if args.print_deck {
        print!("{}", content::opd_emr_yaml());
        return ExitCode::SUCCESS;
    }

    match build(&args) {
        Ok(report) => {
            println!(
                "✅ PowerPoint presentation created successfully: {}",
                report.path.display()
            );
            ExitCode::SUCCESS
        },
        Err(err) => {
            match &err {
                Error::DependencyMissing { .. } => println!("❌ Error: {err}"),
                Error::Build(cause) => println!("❌ Error creating presentation: {cause}"),
            }
            ExitCode::from(err.exit_code())
        },
    }
}

fn build(args: &DeckArgs) -> Result<BuildReport, Error> {
    let deck = match &args.deck {
        Some(path) => DeckFile::load(path)?,
        None => content::opd_emr_deck()?,
    };
    DeckBuilder::new(deck.palette)
        .with_metadata(deck.metadata)
        .build(&deck.slides, &args.output)
}

fn setup_logging(log_level: Option<&str>) {
    let log_level = match log_level.unwrap_or("warn").to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "error" => "error",
        _ => "warn",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("opd_deck={log_level}")))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
