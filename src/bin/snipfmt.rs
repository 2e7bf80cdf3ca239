use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use snipfmt::{EolStyle, FormatKind, Formatter};

/// Auto-detecting formatter for pasted JSON and JavaScript snippets.
///
/// snipfmt reads a blob of text from stdin or files, decides whether it is
/// JSON or JavaScript-like source, and prints a normalized, indented
/// rendition. JSON goes through a real parser (with a permissive fallback
/// for unquoted keys, single quotes and trailing commas); JavaScript is
/// re-laid out with line-based heuristics and never rejected.
#[derive(Parser, Debug)]
#[command(name = "snipfmt")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s). If not specified, reads from stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output file. If not specified, writes to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Renderer to use instead of auto-detection.
    #[arg(short, long, value_enum, default_value = "auto")]
    kind: KindArg,

    /// Number of spaces per indentation level in JavaScript output.
    #[arg(short, long, default_value = "2")]
    indent: usize,

    /// Width used when expanding tabs in JavaScript input.
    #[arg(long, default_value = "4")]
    tab_width: usize,

    /// Line ending style.
    #[arg(long, value_enum, default_value = "lf")]
    eol: EolStyleArg,

    /// Keep single-line statement runs on one line instead of breaking at
    /// braces and semicolons.
    #[arg(long)]
    no_split: bool,

    /// Report the detected format on stderr.
    #[arg(short = 'd', long)]
    detected: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Auto,
    Json,
    Javascript,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EolStyleArg {
    Lf,
    Crlf,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("snipfmt: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let inputs = read_inputs(&args)?;

    let mut formatter = Formatter::new();
    formatter.options.indent_spaces = args.indent;
    formatter.options.tab_width = args.tab_width;
    formatter.options.split_statements = !args.no_split;
    formatter.options.eol_style = match args.eol {
        EolStyleArg::Lf => EolStyle::Lf,
        EolStyleArg::Crlf => EolStyle::Crlf,
    };

    let mut outputs = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let result = match args.kind {
            KindArg::Auto => formatter.format(input)?,
            KindArg::Json => formatter.format_as(input, FormatKind::Json)?,
            KindArg::Javascript => formatter.format_as(input, FormatKind::Javascript)?,
        };
        if args.detected {
            eprintln!("detected: {}", result.kind);
        }
        outputs.push(result.code);
    }
    let output = outputs.join("\n\n");

    if let Some(path) = args.output {
        fs::write(&path, &output)
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e))?;
    } else {
        let mut stdout = io::stdout();
        stdout.write_all(output.as_bytes())?;
        stdout.write_all(b"\n")?;
    }

    Ok(())
}

fn read_inputs(args: &Args) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    if args.files.is_empty() {
        if io::stdin().is_terminal() {
            return Err("no input: pass a file or pipe text to stdin".into());
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(vec![buffer]);
    }

    let mut inputs = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
        inputs.push(content);
    }
    Ok(inputs)
}
