use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use glyph_sheet::{GlyphSheetGenerator, OutputNames};
use log::info;

#[derive(Parser, Debug)]
#[command(
    name = "glyph-sheet",
    author,
    version,
    about = "Render the first 256 code points of a font into a 16x16 raw RGB glyph sheet"
)]
struct Cli {
    /// Scalable font file (TrueType or OpenType)
    font_file: PathBuf,
    /// Pixel size of each glyph cell and of the rendered font
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    font_width: u32,
    /// Directory receiving the .bin and .png files
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

#[derive(Debug)]
enum Invocation {
    Run(Cli),
    Usage,
}

fn main() -> Result<()> {
    let cli = match parse_args(std::env::args_os()) {
        Ok(Invocation::Run(cli)) => cli,
        Ok(Invocation::Usage) => {
            println!("{}", usage());
            return Ok(());
        },
        Err(err) => err.exit(),
    };

    env_logger::Builder::new().filter_level(cli.verbose.log_level_filter()).init();

    run(cli)
}

/// Wrong positional counts are a usage message rather than an error.
fn parse_args<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Invocation::Run(cli)),
        Err(err) => match err.kind() {
            ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument => {
                Ok(Invocation::Usage)
            },
            _ => Err(err),
        },
    }
}

fn usage() -> String {
    format!("Usage: {} <font_file> <font_width>", Cli::command().get_name())
}

fn run(cli: Cli) -> Result<()> {
    let generator = GlyphSheetGenerator::new(cli.font_width)
        .with_context(|| format!("invalid font width {}", cli.font_width))?;
    let names = OutputNames::from_font_path(&cli.font_file, &cli.out_dir)?;

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("failed to create output directory {:?}", cli.out_dir))?;

    let sheet = generator
        .generate_font(&cli.font_file)
        .with_context(|| format!("failed to render {:?}", cli.font_file))?;
    let artifacts = generator
        .write_artifacts(&sheet, &names)
        .with_context(|| format!("failed to write glyph sheet {:?}", names.basename()))?;

    info!(
        "{} -> {:?} ({} bytes), {:?}",
        cli.font_file.display(),
        artifacts.binary,
        artifacts.binary_len,
        artifacts.png
    );
    Ok(())
}
