//! html-contacts CLI - converts an HTML contact table to JSON.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use html_contacts::{convert, extract, Error, Options, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(name = "html-contacts")]
#[command(version)]
#[command(about = "Extract alias/name/phone rows from an HTML table into JSON", long_about = None)]
struct Cli {
    /// Source HTML file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Destination JSON file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Fail on malformed rows instead of skipping them
    #[arg(long)]
    strict: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = Options { strict: cli.strict };

    match run(&cli, &options) {
        Ok(()) => {}
        Err(Error::NoContacts) => {
            eprintln!(
                "\n{}: No contact data was found in the HTML file.",
                "Warning".yellow().bold()
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("\n{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli, options: &Options) -> Result<(), Error> {
    println!("-> Reading input file: '{}'", cli.input.display());
    let html = convert::read_input(&cli.input)?;

    println!("-> Parsing HTML content...");
    let result = extract::extract_contacts(&html, options)?;
    if result.is_empty() {
        return Err(Error::NoContacts);
    }
    log::info!(
        "{} of {} rows skipped",
        result.rows_skipped,
        result.rows_seen
    );

    println!("-> Found {} contacts.", result.contacts.len());
    println!("-> Writing to output file: '{}'", cli.output.display());
    let json = convert::to_json(&result.contacts)?;
    convert::write_output(&cli.output, &json)?;

    println!(
        "\n{}: '{}' has been created successfully.",
        "Success".green().bold(),
        cli.output.display()
    );
    Ok(())
}
