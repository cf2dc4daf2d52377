//! Command-line interface for xsd2xpath

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use std::process::ExitCode;

#[cfg(feature = "cli")]
use xsd2xpath::{
    generate_xpaths_reporting, ErrorKind, GeneratorOptions, Limits, Location,
    DEFAULT_ROOT_ELEMENT,
};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "xsd2xpath")]
#[command(author, version, about = "List the leaf XPath expressions described by an XSD schema", long_about = None)]
struct Cli {
    /// Path to the XSD schema file
    #[arg(long, value_name = "PATH")]
    xsd: PathBuf,

    /// Name of the element the paths start from
    #[arg(long, value_name = "NAME", default_value = DEFAULT_ROOT_ELEMENT)]
    root: String,

    /// Do not annotate repeating elements with [minOccurs,maxOccurs]
    #[arg(long)]
    no_occurs: bool,

    /// Give up once the schema nests deeper than this
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Largest schema file accepted, in bytes
    #[arg(long, value_name = "BYTES")]
    max_size: Option<usize>,
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut limits = Limits::default().with_max_depth(cli.max_depth);
    if let Some(size) = cli.max_size {
        limits = limits.with_max_schema_size(size);
    }
    let options = GeneratorOptions::new()
        .with_annotate_occurrence(!cli.no_occurs)
        .with_limits(limits);

    let mut failed = false;
    let paths = generate_xpaths_reporting(
        &Location::from(cli.xsd),
        &cli.root,
        &options,
        |err| {
            failed = true;
            match err.kind() {
                ErrorKind::MalformedDocument => eprintln!("Error parsing XSD file: {}", err),
                ErrorKind::UnexpectedFailure => eprintln!("Error: {}", err),
            }
        },
    );

    for path in &paths {
        println!("{}", path);
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
