use clap::{Parser, Subcommand};
use docnav::{config, output, scan, synth};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "docnav")]
#[command(about = "Navigation and landing-page generator for markdown docs sites")]
#[command(long_about = "\
Navigation and landing-page generator for markdown docs sites

Your filesystem is the data source. Top-level directories become nav
categories, nested directories become sidebar groups, and markdown files
become article links. Every directory gets a generated index.md landing
page listing its children.

Content structure:

  docs/
  ├── config.toml                  # Site config (optional)
  ├── index.md                     # Generated landing page (overwritten)
  ├── Frontend/                    # Category → nav entry
  │   ├── index.md
  │   ├── basics.md                # Article → sidebar leaf
  │   └── Vue/                     # Sub-section → dropdown item + own sidebar
  │       ├── pinia.md
  │       └── router.md
  └── Backend/                     # Category without sub-sections → direct link
      └── sql.md

Hook 'docnav build' into the site generator twice: before configuration is
assembled and after the build finishes. Both runs are idempotent.

Run 'docnav gen-config' to print a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    /// Theme configuration output file
    #[arg(long, default_value = "theme.json", global = true)]
    output: PathBuf,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite every directory's generated landing page
    Index,
    /// Derive nav and sidebar config and write the theme file
    Scan,
    /// Run both passes: index, then scan
    Build,
    /// Derive nav and sidebar config without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Index => {
            let site = config::load_config(&cli.source)?;
            let report = synth::synthesize(&cli.source, &site);
            output::print_index_output(&report);
        }
        Command::Scan => {
            let site = config::load_config(&cli.source)?;
            let theme = scan::scan(&cli.source, &site);
            let json = serde_json::to_string_pretty(&theme)?;
            std::fs::write(&cli.output, json)?;
            output::print_scan_output(&theme);
        }
        Command::Build => {
            let site = config::load_config(&cli.source)?;

            println!("==> Pass 1: Landing pages in {}", cli.source.display());
            let report = synth::synthesize(&cli.source, &site);
            output::print_index_output(&report);

            println!("==> Pass 2: Scanning {}", cli.source.display());
            let theme = scan::scan(&cli.source, &site);
            let json = serde_json::to_string_pretty(&theme)?;
            std::fs::write(&cli.output, json)?;
            output::print_scan_output(&theme);

            println!("==> Theme config written to {}", cli.output.display());
        }
        Command::Check => {
            let site = config::load_config(&cli.source)?;
            println!("==> Checking {}", cli.source.display());
            let theme = scan::scan(&cli.source, &site);
            output::print_scan_output(&theme);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Initialize tracing based on the -v count; RUST_LOG still wins.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match verbose {
        0 => "docnav=warn",
        1 => "docnav=debug",
        _ => "docnav=trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
