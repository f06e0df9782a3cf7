use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Args;
use datefind_engine::{FilesFinder, MatchPolicy, SearchOptions};
use datefind_runtime::PROGRAM_NAME;
use log::error;

use crate::printer::{OutputFormat, StatusWriter, StdoutWriter, print_summary};

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Directory to scan, defaults to the working directory
    pub root: Option<PathBuf>,

    /// First day of the range, YYYY-MM-DD (YYYY-MM-DD HH:MM:SS with --include-time).
    /// Defaults to seven days ago
    #[arg(long, short = 's', value_name = "DATE")]
    pub start: Option<String>,

    /// Last day of the range, same format as --start. Defaults to today
    #[arg(long, short = 'e', value_name = "DATE")]
    pub end: Option<String>,

    /// Accept a time of day in --start and --end
    #[arg(long, short = 't')]
    pub include_time: bool,

    /// Where the reports are written, defaults to ROOT
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Extensions to keep, case-insensitive, dot optional. Repeat or separate with commas
    #[arg(long = "ext", short = 'x', value_name = "EXT", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Also write founded_list_sorted.txt and founded_table_sorted.txt
    #[arg(long)]
    pub sort: bool,

    /// Timestamps that must fall in range: any, all, created, modified, accessed
    #[arg(long = "match", value_name = "POLICY", default_value = "any")]
    pub policy: MatchPolicy,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl FindArgs {
    pub fn to_options(&self) -> SearchOptions {
        SearchOptions {
            root: self.root.clone(),
            start_date: self.start.clone(),
            end_date: self.end.clone(),
            include_time: self.include_time,
            output_info_to: self.output_dir.clone(),
            extensions: (!self.extensions.is_empty()).then(|| self.extensions.clone()),
            sort_info: self.sort,
            match_policy: self.policy,
        }
    }

    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

pub fn run(args: FindArgs) -> ExitCode {
    match execute(&args, &mut StdoutWriter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("[error] {e:#}");
            eprintln!("[{PROGRAM_NAME}] {e:#}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: &FindArgs, out: &mut dyn StatusWriter) -> Result<()> {
    let finder = FilesFinder::new(args.to_options())?;
    let summary = finder.find_files()?;

    print_summary(out, &summary, args.format()).context("printing summary")?;
    Ok(())
}
