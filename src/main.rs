use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use icon_resizer::{resize_with_progress, IconConfig, IconError, ProgressEvent};

#[derive(Parser, Debug)]
#[command(name = "icon-resizer")]
#[command(about = "Generate square PNG icons at several sizes from one source image")]
struct Cli {
    /// JSON config file with `input`, `output_dir` and `sizes`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Source image [default: assets/logo.png]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory the icons are written to [default: src/images]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Icon edge lengths in pixels, comma-separated [default: 16,48,128]
    #[arg(short, long, value_delimiter = ',', value_parser = clap::value_parser!(u32).range(1..))]
    sizes: Option<Vec<u32>>,

    /// Only print warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Flags win over the config file, which wins over the built-in defaults.
    fn into_config(self) -> Result<IconConfig, IconError> {
        let mut config = match &self.config {
            Some(path) => IconConfig::load(path)?,
            None => IconConfig::default(),
        };

        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(sizes) = self.sizes {
            config.sizes = sizes;
        }

        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    if let Err(e) = run(cli, quiet) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Base directory for relative paths; the run stops if it is unknown.
fn project_root(current_dir: io::Result<PathBuf>) -> Result<PathBuf, IconError> {
    current_dir.map_err(|e| IconError::WorkingDirUnavailable {
        reason: e.to_string(),
    })
}

fn run(cli: Cli, quiet: bool) -> Result<(), IconError> {
    let project_root = project_root(std::env::current_dir())?;
    let config = cli.into_config()?.resolve_against(&project_root);

    if !quiet {
        println!("Input: {}", config.input.display());
        println!("Output Directory: {}", config.output_dir.display());
    }

    resize_with_progress(&config, |event| match event {
        ProgressEvent::NotSquare { width, height } => {
            eprintln!(
                "Warning: input image is {}x{}, not square. Icons will be stretched to square.",
                width, height
            );
        }
        ProgressEvent::Generated { path, .. } => {
            if !quiet {
                println!("Generated {}", path.display());
            }
        }
    })?;

    Ok(())
}
