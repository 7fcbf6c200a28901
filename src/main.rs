use clap::Parser;
use clap::error::ErrorKind;
use crop::config::CropConfig;
use crop::process::{self, EXIT_USAGE, ProcessError};
use crop::{logging, output};
use std::path::PathBuf;
use std::process::ExitCode;

/// Package version, suffixed with `-dev` and the commit off a release tag.
const VERSION: &str = env!("CROP_VERSION");

#[derive(Parser)]
#[command(name = "crop")]
#[command(about = "Center-crop an image to a target aspect ratio and resize it")]
#[command(long_about = "\
Center-crop an image to a target aspect ratio and resize it

The largest centered region with the WIDTH:HEIGHT aspect ratio is cut from the
input, scaled to exactly WIDTH x HEIGHT pixels (bilinear) and written as PNG
next to the input:

  crop photos/beach.jpg 300 200   →   photos/beach-300x200.png

The input format is detected from the file content, not its extension.

Exit status:
  0  success
  2  usage error (wrong arguments, dimension not positive or too large)
  3  width or height is not an integer
  4  input cannot be opened or output cannot be created
  5  input is not a decodable image
  6  output could not be encoded")]
#[command(version = VERSION)]
struct Cli {
    /// Image to crop
    path: PathBuf,

    /// Target width in pixels
    #[arg(allow_negative_numbers = true)]
    width: String,

    /// Target height in pixels
    #[arg(allow_negative_numbers = true)]
    height: String,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Do not print the summary on success
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE,
            };
            // Help goes to stdout, errors to stderr
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), ProcessError> {
    let config = CropConfig::from_args(cli.path.clone(), &cli.width, &cli.height)?;
    let outcome = process::run(&config)?;
    if !cli.quiet {
        output::print_outcome(&outcome);
    }
    Ok(())
}
