use bough::{
    Value,
    cli::{self, CliError, MergeOptions, RenameOptions},
    to_json_text, to_json_text_pretty,
};
use clap::{Parser as ClapParser, Subcommand};
use std::{
    fs,
    io::{self, Read},
};

#[derive(ClapParser)]
#[command(name = "bough")]
#[command(about = "Bough - deep merge, filter and reshape nested JSON trees")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Pretty-print the output
    #[arg(short, long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deep-merge JSON files left to right
    Merge {
        /// Files to merge; `-` reads stdin and may be given once
        #[arg(required = true)]
        files: Vec<String>,

        /// Keep existing values, only fill in missing keys
        #[arg(long)]
        only_undefined: bool,
    },

    /// Remove falsy entries at every depth
    Filter {
        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Remove entries equal to a sentinel string at every depth
    Strip {
        /// The string to remove
        #[arg(short, long, default_value = "null")]
        sentinel: String,

        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Rename keys matching a regex at every depth
    Rename {
        /// Regex matched against named keys
        #[arg(long)]
        pattern: String,

        /// Replacement, may use capture groups like $1
        #[arg(long)]
        replace: String,

        /// Only rename below this dot-separated path
        #[arg(long)]
        under: Option<String>,

        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Turn a list of {"key": ..} records into a keyed object
    Records {
        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Merge {
            files,
            only_undefined,
        } => run_merge(files, only_undefined),
        Commands::Filter { input } => read_input(input).and_then(|text| cli::execute_filter(&text)),
        Commands::Strip { sentinel, input } => {
            read_input(input).and_then(|text| cli::execute_strip(&text, &sentinel))
        }
        Commands::Rename {
            pattern,
            replace,
            under,
            input,
        } => {
            let options = RenameOptions {
                pattern,
                replace,
                under,
            };
            read_input(input).and_then(|text| cli::execute_rename(&text, &options))
        }
        Commands::Records { input } => read_input(input).and_then(|text| cli::execute_records(&text)),
    };

    match result {
        Ok(output) => print_output(&output, cli.pretty),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run_merge(files: Vec<String>, only_undefined: bool) -> Result<Value, CliError> {
    cli::check_sources(&files)?;

    let documents = files
        .iter()
        .map(|file| {
            if file == cli::STDIN_SOURCE {
                read_stdin()
            } else {
                fs::read_to_string(file).map_err(CliError::Io)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    cli::execute_merge(&MergeOptions {
        documents,
        only_undefined,
    })
}

fn read_input(input: Option<String>) -> Result<String, CliError> {
    match input {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => read_stdin(),
        None => Err(CliError::NoInput),
    }
}

fn read_stdin() -> Result<String, CliError> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
    Ok(buffer)
}

fn print_output(output: &Value, pretty: bool) {
    let json = if pretty {
        to_json_text_pretty(output)
    } else {
        to_json_text(output)
    };
    println!("{}", json);
}
