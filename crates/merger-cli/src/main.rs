//! CSV Merger CLI
//!
//! Command-line tool for appending and combining CSV files with different headers.

mod logger;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use merger_core::{
    append, combine, discover, headers, load_config, numbered_headers, select_columns,
    MergeJob, MergeReport, DEFAULT_OUTPUT_FILE,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "merger")]
#[command(about = "Combine CSV files with different headers into a single CSV file", long_about = None)]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append every row of every file, headers included
    Append {
        /// CSV files or directories containing them
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Combine files, keeping only the requested columns
    #[command(group(ArgGroup::new("source").required(true).args(["columns", "config", "job"])))]
    Combine {
        /// CSV files or directories containing them
        #[arg(required_unless_present = "job")]
        paths: Vec<PathBuf>,

        /// Columns to keep, in output order (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Use the columns saved in a config file from a previous run
        #[arg(long)]
        config: Option<PathBuf>,

        /// Run a job file (JSON) describing inputs, columns and output
        #[arg(long, conflicts_with_all = ["paths", "negate", "emit_config", "output"])]
        job: Option<PathBuf>,

        /// Columns whose values get their minus sign stripped (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        negate: Vec<String>,

        /// Save the requested columns to a config file for future runs
        #[arg(long)]
        emit_config: bool,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the headers of each input file
    Plan {
        /// CSV files or directories containing them
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = PlanFormat::Text)]
        format: PlanFormat,
    },

    /// Pick columns by number, combine, and save them as config
    Pick {
        /// CSV files or directories containing them
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Columns whose values get their minus sign stripped (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        negate: Vec<String>,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PlanFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        logger::level_from_env()
    };
    logger::init(level);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> merger_core::Result<()> {
    match command {
        Commands::Append { paths, output } => cmd_append(&paths, output),
        Commands::Combine {
            paths,
            columns,
            config,
            job,
            negate,
            emit_config,
            output,
        } => {
            let job = match job {
                Some(job) => MergeJob::load(job)?,
                None => {
                    let columns = match config {
                        Some(config) => load_config(config)?,
                        None => columns,
                    };
                    MergeJob::new(discover(&paths)?, columns)
                        .with_negate(negate)
                        .with_output(output)
                        .with_emit_config(emit_config)
                }
            };
            cmd_combine(&job)
        }
        Commands::Plan { paths, format } => cmd_plan(&paths, format),
        Commands::Pick {
            paths,
            negate,
            output,
        } => cmd_pick(&paths, negate, output),
    }
}

fn cmd_append(paths: &[PathBuf], output: Option<PathBuf>) -> merger_core::Result<()> {
    let files = discover(paths)?;
    if files.is_empty() {
        println!("No CSV files found");
        return Ok(());
    }

    let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));
    let report = append(&files, output)?;
    print_report(&report);

    Ok(())
}

fn cmd_combine(job: &MergeJob) -> merger_core::Result<()> {
    if job.inputs.is_empty() {
        println!("No CSV files found");
        return Ok(());
    }

    let report = combine(job)?;
    print_report(&report);

    Ok(())
}

fn cmd_plan(paths: &[PathBuf], format: PlanFormat) -> merger_core::Result<()> {
    let files = discover(paths)?;
    let headers = headers(&files)?;

    match format {
        PlanFormat::Text => print!("{}", numbered_headers(&headers)),
        PlanFormat::Json => println!("{}", serde_json::to_string_pretty(&headers)?),
    }

    Ok(())
}

fn cmd_pick(
    paths: &[PathBuf],
    negate: Vec<String>,
    output: Option<PathBuf>,
) -> merger_core::Result<()> {
    let files = discover(paths)?;
    if files.is_empty() {
        println!("No CSV files found");
        return Ok(());
    }

    let headers = headers(&files)?;
    println!("{}", numbered_headers(&headers));

    let selected = read_selection(io::stdin().lock())?;
    let columns = select_columns(&headers, &selected)?;

    let job = MergeJob::new(files, columns)
        .with_negate(negate)
        .with_output(output)
        .with_emit_config(true);
    cmd_combine(&job)
}

/// Read one column number per line until an empty line or end of input
fn read_selection<R: BufRead>(mut input: R) -> io::Result<Vec<String>> {
    println!("Press RETURN when finished.");

    let mut selected = Vec::new();
    loop {
        print!("Enter column number: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        selected.push(line.to_string());
    }

    Ok(selected)
}

fn print_report(report: &MergeReport) {
    for line in report.progress_lines() {
        println!("{}", line);
    }
    if let Some(config) = &report.config {
        println!("generated {}", config.display());
    }
}
