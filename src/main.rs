//! xmind2docx - convert XMind mind maps to DOCX

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use xmind2docx::{convert, Error, Options};

#[derive(Parser)]
#[command(name = "xmind2docx")]
#[command(version, about = "Convert XMind mind maps to DOCX (headings, bullets, images, TOC)", long_about = None)]
#[command(after_help = "EXAMPLES:
    xmind2docx plan.xmind               Write plan.docx next to the source
    xmind2docx plan.xmind -o out.docx   Pick the output path
    xmind2docx plan.xmind --no-toc      Skip the table of contents")]
struct Cli {
    /// XMind file to convert
    #[arg(value_name = "SOURCE")]
    source: String,

    /// Output DOCX path (defaults to the source path with a .docx extension)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Width of embedded images, in inches
    #[arg(long, default_value_t = 6.0, value_name = "INCHES")]
    img_width: f64,

    /// Do not insert the table-of-contents field
    #[arg(long)]
    no_toc: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("Wrote DOCX: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf, Error> {
    let source = normalize_source(&cli.source);
    if !source.exists() {
        return Err(Error::SourceNotFound(source));
    }

    let mut output = cli
        .output
        .clone()
        .unwrap_or_else(|| source.with_extension("docx"));
    if output.parent().map_or(true, |p| p.as_os_str().is_empty()) {
        output = std::env::current_dir()?.join(output);
    }

    let options = Options {
        img_width: cli.img_width,
        toc: !cli.no_toc,
    };
    convert(&source, &output, &options)?;
    Ok(output)
}

/// Drop surrounding quote characters and normalize back-slash separators,
/// both common when a path is pasted from a file manager.
fn normalize_source(raw: &str) -> PathBuf {
    let trimmed = raw.trim().trim_matches(|c| c == '"' || c == '\'');
    PathBuf::from(trimmed.replace('\\', "/"))
}
