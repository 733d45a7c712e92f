//! CLI for xhtml2odt - XHTML to ODT converter

use clap::Parser;
use std::path::PathBuf;
use xhtml2odt::{ConvertOptions, Xhtml2Odt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input XHTML file path
    input: PathBuf,

    /// Output file path (optional, prints to stdout if not specified)
    output: Option<PathBuf>,

    /// Write everything on one line instead of indenting lists
    #[arg(long)]
    compact: bool,

    /// Fail on malformed lists and definition lists instead of skipping
    #[arg(long)]
    strict: bool,

    /// Wrap the fragment in an office:document-content document
    #[arg(long)]
    standalone: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let options = ConvertOptions {
        pretty_print: !args.compact,
        strict: args.strict,
        standalone: args.standalone,
        ..Default::default()
    };

    let converter = Xhtml2Odt::new(options);

    match converter.convert_file(&args.input) {
        Ok(odt) => {
            if let Some(output) = args.output {
                if let Err(e) = std::fs::write(&output, &odt) {
                    eprintln!("Error writing output: {}", e);
                    std::process::exit(1);
                }
                log::info!("converted {:?} to {:?}", args.input, output);
            } else {
                println!("{}", odt);
            }
        }
        Err(e) => {
            eprintln!("Error converting XHTML: {}", e);
            std::process::exit(1);
        }
    }
}
