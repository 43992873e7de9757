use clap::{Parser, Subcommand};
use hic_gallery::{config, output, pipeline::Gallery};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "hic-gallery")]
#[command(about = "Build the data.json manifest of a Hi-C gallery")]
#[command(long_about = "\
Build the data.json manifest of a Hi-C gallery

Your filesystem is the data source. Case directories become gallery cases,
image names carry the variant type, and sidecar .txt files hold captions.

Gallery structure:

  <root>/
  ├── gallery.toml                     # Optional config (title, paths, extensions)
  ├── data.json                        # Generated manifest
  └── images/
      ├── Dmel_Smith/                  # <speciesID>_<authorID>
      │   ├── cover.png                # Generic cover (optional)
      │   ├── cover_inversion.png      # Per-type cover (optional, wins)
      │   ├── inversion_Dmel_Smith_01.png
      │   ├── inversion_Dmel_Smith_01.txt   # Caption
      │   └── duplication_Dmel_Smith_01.png # Same folder, second case
      └── case_Hsap_Lee/               # Optional case_ prefix
          └── translocation_Hsap_Lee_01.png

Types: inversion, translocation, duplication. Indices are two digits (01-99).

By default the manifest is always written and problems are printed as
warnings. With --check nothing is written and any problem fails the run.

Run 'hic-gallery gen-config' to print a documented gallery.toml.")]
#[command(version)]
struct Cli {
    /// Gallery root (contains the images directory)
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Config file [default: <root>/gallery.toml if present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Validate only: list every problem and exit non-zero if any
    #[arg(long)]
    check: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    if let Some(Command::GenConfig) = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(ExitCode::SUCCESS);
    }

    let gallery = Gallery::open(&cli.root, cli.config.as_deref())?;

    if cli.check {
        println!("==> Checking {}", gallery.images_path().display());
        let problems = gallery.check()?;
        output::print_check_report(&problems);
        return Ok(if problems.is_empty() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    println!("==> Scanning {}", gallery.images_path().display());
    let report = gallery.build()?;
    output::print_warnings(&report.problems);
    output::print_build_summary(&report.manifest);
    let path = gallery.write(&report.manifest)?;
    println!("==> Wrote {}", path.display());

    Ok(ExitCode::SUCCESS)
}
