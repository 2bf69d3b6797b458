use clap::Parser;
use frameloop::assemble::{self, AssemblyError};
use frameloop::{config, output};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "frameloop")]
#[command(about = "Assemble a directory of still images into an animated GIF")]
#[command(long_about = "\
Assemble a directory of still images into an animated GIF

Every supported image directly inside INPUT_DIR becomes one frame
(.jpg, .jpeg, .png, .bmp, .gif — other files are skipped). The first
frame in sort order sets the output dimensions; every later frame is
stretch-resized to match.

Layout:

  shots/
  ├── frameloop.toml     # Optional defaults (duration_ms, loop_count, sort)
  ├── 001.png            # Frame 1 under --sort name
  ├── 002.png            # Frame 2
  ├── 003.png            # Frame 3
  └── notes.txt          # Ignored — extension not on the allow-list

A run either writes the complete GIF or nothing: one corrupt frame
aborts the whole assembly and any previous file at the output path is
left untouched.

Exit codes: 0 success, 1 no frames / unreadable input, 2 decode error,
3 write error, 4 invalid configuration.")]
#[command(version)]
struct Cli {
    /// Directory containing the source frames (scanned non-recursively)
    input_dir: PathBuf,

    /// Destination GIF path
    #[arg(short, long, default_value = "output.gif")]
    output: PathBuf,

    /// Per-frame delay in milliseconds, uniform across all frames
    #[arg(long, value_name = "MS")]
    duration_ms: Option<u32>,

    /// Times the animation replays; 0 loops forever
    #[arg(long, value_name = "N")]
    loop_count: Option<u16>,

    /// Frame ordering: 'name' (filename) or 'mtime' (modification time)
    #[arg(long, value_name = "MODE")]
    sort: Option<String>,

    /// Emit the result as JSON instead of the status line
    #[arg(long)]
    json: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
    #[error(transparent)]
    Report(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) => 4,
            CliError::Assembly(AssemblyError::Scan(_)) => 1,
            CliError::Assembly(AssemblyError::FrameDecode(_)) => 2,
            CliError::Assembly(AssemblyError::Encode(_)) => 3,
            CliError::Report(_) => 3,
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = config::resolve(
        cli.input_dir.clone(),
        cli.output.clone(),
        config::Overrides {
            frame_duration_ms: cli.duration_ms,
            loop_count: cli.loop_count,
            sort: cli.sort.clone(),
        },
    )?;

    let report = assemble::assemble(&config)?;

    if cli.json {
        println!("{}", output::format_report_json(&report)?);
    } else {
        output::print_report(&report);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&err);
            ExitCode::from(err.exit_code())
        }
    }
}
