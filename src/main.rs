use clap::{Parser, Subcommand};
use framecrop::imaging::{BoundsPolicy, RustBackend};
use framecrop::process::BatchConfig;
use framecrop::{config, output, process};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "framecrop")]
#[command(about = "Crop a fixed window out of every TIFF in a directory")]
#[command(long_about = "\
Crop a fixed window out of every TIFF in a directory

Every file ending in .tiff (case-sensitive) in the input directory is
cropped to the same window and written under its original filename into
the output directory, which must already exist. Frames are processed in
filename order, and the first failure aborts the run.

The stock window is 512x96 pixels at offset (220, 45):

  ┌────────────────────────────┐
  │   (220,45)                 │
  │      ┌──────────┐          │
  │      │  512x96  │          │
  │      └──────────┘          │
  └────────────────────────────┘

Settings come from three layers, later overriding earlier:

  1. stock defaults (the window above, bounds = pad)
  2. framecrop.toml in the input directory
  3. command-line flags

Frames smaller than the window are handled per the bounds mode:

  pad    black-fill the missing area (output always full size)
  clamp  shrink the window to the frame
  fail   abort the run

Run 'framecrop gen-config' to print a documented framecrop.toml.")]
#[command(version)]
struct Cli {
    /// Directory holding the source frames
    #[arg(long, default_value = "Test_images/Slight under focus", global = true)]
    input: PathBuf,

    /// Directory the cropped frames are written to (must exist)
    #[arg(long, default_value = "Test_images/512x96crop", global = true)]
    output: PathBuf,

    /// Crop window left edge, in pixels from the frame's left
    #[arg(long, global = true)]
    left: Option<u32>,

    /// Crop window top edge, in pixels from the frame's top
    #[arg(long, global = true)]
    top: Option<u32>,

    /// Crop window width in pixels
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Crop window height in pixels
    #[arg(long, global = true)]
    height: Option<u32>,

    /// Out-of-bounds handling: pad, clamp, or fail
    #[arg(long, global = true)]
    bounds: Option<BoundsPolicy>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Crop every matching frame into the output directory
    Run,
    /// Show matched frames and their sizes without writing anything
    List,
    /// Print a stock framecrop.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run => {
            let job = resolve_job(&cli)?;
            let batch = BatchConfig {
                input_dir: cli.input.clone(),
                output_dir: cli.output.clone(),
                job,
            };
            let backend = RustBackend::new();

            output::print_run_header(&batch);
            let report = process::run(&backend, &batch, output::print_crop_event)?;
            if report.cropped == 0 {
                output::print_no_matches(&batch.input_dir);
            } else {
                output::print_summary(&report);
            }
        }
        Command::List => {
            let job = resolve_job(&cli)?;
            let backend = RustBackend::new();
            let entries = process::inspect(&backend, &cli.input, &job)?;
            output::print_list_output(&cli.input, &entries);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Resolve the effective job settings for this invocation: stock defaults,
/// then framecrop.toml from the input directory, then command-line flags.
fn resolve_job(cli: &Cli) -> Result<config::JobConfig, config::ConfigError> {
    let mut job = config::load_config(&cli.input)?;
    job.apply(&config::Overrides {
        left: cli.left,
        top: cli.top,
        width: cli.width,
        height: cli.height,
        bounds: cli.bounds,
    });
    job.validate()?;
    Ok(job)
}
