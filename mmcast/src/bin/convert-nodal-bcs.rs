//! Driver for nodal boundary condition matrix exports
//!
//! The export directory is flat, with the degree embedded in the file
//! names. For each degree this picks the matrices whose name ends in
//! that degree, strips the degree from the name, and writes one output
//! file per degree into a separate output directory.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use mmcast::{
    collect_matrices, matches_degree, strip_degree, write_json, write_xml, ConvertError,
    MatrixCollection,
};

#[derive(Parser)]
#[command(version, about = "Convert nodal boundary matrix exports to JSON or XML")]
struct Cli {
    /// Directory holding the flat matrix export
    #[arg(long, default_value = "export")]
    export_dir: std::path::PathBuf,

    /// Directory receiving the per-degree output files
    #[arg(long, default_value = "export_json")]
    out_dir: std::path::PathBuf,

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
    let matrices = collect_matrices(&cli.export_dir)?;
    std::fs::create_dir_all(&cli.out_dir)?;

    for degree in 1..=6u32 {
        println!("Converting degree {degree}...");
        let mut selected = MatrixCollection::new();
        for (name, matrix) in &matrices {
            if !matches_degree(name, degree) {
                continue;
            }
            let stripped = strip_degree(name).map_err(|e| ConvertError::name(name, e))?;
            selected.insert(stripped, matrix.clone());
        }
        println!("{:?}", selected.keys().collect::<Vec<_>>());
        let dest = cli
            .out_dir
            .join(format!("nodalBoundary_matrices_{}", degree + 1));
        write(&dest, &selected, cli.format)?;
    }
    Ok(())
}

fn write(dest: &Path, matrices: &MatrixCollection, format: Format) -> mmcast::Result<()> {
    match format {
        Format::Json => write_json(dest, matrices),
        Format::Xml => write_xml(dest, matrices),
    }
}
