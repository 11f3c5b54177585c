//! tagcheck CLI
//!
//! Checks that the tags of an HTML document are well-formed and properly
//! nested, and prints one diagnostic per line.
//!
//! Exit status: 0 when the document passed, 1 when problems were found,
//! 2 when the document or the tag dictionary could not be loaded.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use tagcheck_common::warning::{clear_warnings, set_color_enabled};
use tagcheck_dict::TagDictionary;
use tagcheck_html::{SUCCESS_MESSAGE, Validation, Validator, ValidatorOptions, report};

/// tagcheck: HTML tag nesting and attribute checker
#[derive(Parser, Debug)]
#[command(name = "tagcheck")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Check a file
    tagcheck index.html

    # Check standard input
    cat index.html | tagcheck -

    # Check an inline snippet
    tagcheck --html '<div><span></div>'

    # Save the report as JSON
    tagcheck index.html --format json -o report.json

    # Use a custom tag dictionary
    tagcheck --dict my_tags.json index.html
"#)]
struct Cli {
    /// HTML file to check; omit or use `-` to read standard input
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Check this HTML string instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Tag dictionary JSON file (default: the bundled dictionary)
    #[arg(long, value_name = "FILE")]
    dict: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also write the report to this file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Refuse documents larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    max_bytes: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print every tag in the dictionary and exit
    #[arg(long)]
    list_tags: bool,
}

/// How the report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One message per line
    Text,
    /// Machine-readable JSON
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    set_color_enabled(!cli.no_color);
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            let colored = !cli.no_color && io::stderr().is_terminal();
            eprintln!("{} {e:#}", error_prefix(colored));
            ExitCode::from(2)
        }
    }
}

fn error_prefix(colored: bool) -> String {
    if colored {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Returns whether the document passed.
fn run(cli: &Cli) -> Result<bool> {
    let dictionary = load_dictionary(cli.dict.as_deref())?;

    if cli.list_tags {
        print_tags(&dictionary);
        return Ok(true);
    }

    let input = read_input(cli)?;
    let options = ValidatorOptions {
        max_input_bytes: cli.max_bytes,
    };
    let validation = Validator::with_options(&dictionary, options)
        .validate_bytes(&input)
        .context("cannot validate input")?;

    let rendered = render(&validation, cli.format)?;
    if let Some(ref output) = cli.output {
        fs::write(output, format!("{rendered}\n"))
            .with_context(|| format!("failed to write report to '{}'", output.display()))?;
    }

    let color = !cli.no_color && io::stdout().is_terminal();
    if color && cli.format == Format::Text {
        print_colored(&validation);
    } else {
        println!("{rendered}");
    }

    Ok(validation.is_passed())
}

fn load_dictionary(path: Option<&Path>) -> Result<TagDictionary> {
    clear_warnings();
    let dictionary = match path {
        Some(path) => TagDictionary::load(path)?,
        None => TagDictionary::bundled()?,
    };
    Ok(dictionary)
}

/// Raw bytes of the document from `--html`, a file, or standard input.
fn read_input(cli: &Cli) -> Result<Vec<u8>> {
    if let Some(ref html) = cli.html {
        return Ok(html.as_bytes().to_vec());
    }

    match cli.path.as_deref() {
        Some(path) if path != Path::new("-") => {
            fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))
        }
        _ => {
            let mut buffer = Vec::new();
            let _ = io::stdin()
                .read_to_end(&mut buffer)
                .context("failed to read standard input")?;
            Ok(buffer)
        }
    }
}

fn render(validation: &Validation, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(report::render_text(validation)),
        Format::Json => report::render_json(validation).context("failed to encode JSON report"),
    }
}

fn print_colored(validation: &Validation) {
    if validation.is_passed() {
        println!("{}", SUCCESS_MESSAGE.green());
        return;
    }

    for diagnostic in validation.diagnostics() {
        let kind = format!("[{}]", diagnostic.kind);
        match diagnostic.line {
            Some(line) => println!(
                "{} {} {}",
                format!("Line {line}:").red().bold(),
                diagnostic.message,
                kind.dimmed()
            ),
            None => println!("{} {}", diagnostic.message.yellow(), kind.dimmed()),
        }
    }
    eprintln!("{}", report::summary(validation).bold());
}

fn print_tags(dictionary: &TagDictionary) {
    for tag in dictionary.iter() {
        let void = if tag.is_void { "void" } else { "" };
        println!("{:<12} {:<4}  {}", tag.name, void, tag.description);
    }
    println!("{} tags", dictionary.len());
}
