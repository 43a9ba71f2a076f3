//! `siderea-cli` reads one JSON chart request from stdin (or a file) and
//! writes the generated SVG to stdout (or `--out`). Diagnostics go to stderr
//! through `tracing`; stdout carries only the diagram.
//!
//! When the pipeline fails, the fallback placeholder diagram is still written
//! to stdout and the process exits non-zero so callers can tell the two
//! apart.

use std::io::Read;

use siderea::ChartService;
use siderea::render::CommandRenderer;

const DEFAULT_RENDERER: &str = "kerykeion-bridge";
const RENDERER_ENV: &str = "SIDEREA_RENDERER";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "Invalid request JSON: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    out: Option<String>,
    renderer: Option<String>,
}

const USAGE: &str = "Usage: siderea-cli [--renderer CMD] [--out FILE] [INPUT.json]\n\
  INPUT.json       request file (default: stdin)\n\
  --renderer CMD   wheel renderer bridge command (default: $SIDEREA_RENDERER or kerykeion-bridge)\n\
  --out FILE       write the SVG to FILE instead of stdout";

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut iter = argv.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(USAGE)),
            "--renderer" => {
                args.renderer = Some(
                    iter.next()
                        .ok_or(CliError::Usage("--renderer requires a value"))?
                        .clone(),
                );
            }
            "--out" => {
                args.out = Some(
                    iter.next()
                        .ok_or(CliError::Usage("--out requires a value"))?
                        .clone(),
                );
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(USAGE));
            }
            other => {
                if args.input.is_some() {
                    return Err(CliError::Usage("at most one input file is accepted"));
                }
                args.input = Some(other.to_string());
            }
        }
    }
    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_output(out: Option<&str>, svg: &str) -> Result<(), CliError> {
    match out {
        None => {
            println!("{svg}");
            Ok(())
        }
        Some(path) => Ok(std::fs::write(path, svg)?),
    }
}

fn run(argv: &[String]) -> Result<i32, CliError> {
    let args = parse_args(argv)?;

    let request: serde_json::Value = serde_json::from_str(&read_input(args.input.as_deref())?)?;

    let renderer_cmd = args
        .renderer
        .or_else(|| std::env::var(RENDERER_ENV).ok())
        .unwrap_or_else(|| DEFAULT_RENDERER.to_string());
    let service = ChartService::new(CommandRenderer::new(renderer_cmd));

    match service.try_generate(&request) {
        Ok(svg) => {
            write_output(args.out.as_deref(), &svg)?;
            Ok(0)
        }
        Err(err) => {
            tracing::error!(error = %err, "chart generation failed");
            write_output(args.out.as_deref(), &siderea::render::fallback_svg(&err.to_string()))?;
            Ok(1)
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    match run(&argv) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    }
}
