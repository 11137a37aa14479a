//! Driver for triangle matrix exports
//!
//! Matrices for degree `d` live in `<export>/<d>/`; each degree is
//! written to `<export>/resample_<d+1>` with the chosen extension.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use mmcast::{collect_matrices, write_json, write_xml, MatrixCollection};

#[derive(Parser)]
#[command(version, about = "Convert per-degree triangle matrix exports to JSON or XML")]
struct Cli {
    /// Directory holding the per-degree export subdirectories
    #[arg(long, default_value = "export")]
    export_dir: std::path::PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Copy, Clone, clap::ValueEnum)]
enum Format {
    Json,
    Xml,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> mmcast::Result<()> {
    for degree in 1..=6u32 {
        println!("Converting degree {degree}...");
        let matrices = collect_matrices(cli.export_dir.join(degree.to_string()))?;
        let dest = cli.export_dir.join(format!("resample_{}", degree + 1));
        write(&dest, &matrices, cli.format)?;
    }
    Ok(())
}

fn write(dest: &Path, matrices: &MatrixCollection, format: Format) -> mmcast::Result<()> {
    match format {
        Format::Json => write_json(dest, matrices),
        Format::Xml => write_xml(dest, matrices),
    }
}
