use std::path::PathBuf;

use clap::Args;

use crate::cli::{collect_queries, print_matches, OutputFormat, WhitelistArgs};

#[derive(Args)]
pub struct SubstringsArgs {
    #[command(flatten)]
    pub whitelist: WhitelistArgs,

    /// Reads (or read segments) to search
    pub reads: Vec<String>,

    /// File with one read per line
    #[arg(short, long)]
    pub reads_file: Option<PathBuf>,
}

pub fn run(args: SubstringsArgs, format: OutputFormat) -> anyhow::Result<()> {
    let reads = collect_queries(args.reads, args.reads_file.as_ref())?;
    let set = args.whitelist.load()?;

    let results = reads
        .into_iter()
        .map(|read| {
            let matches = set.lookup_substrings(&read)?;
            Ok((read, matches))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    print_matches(&results, format)
}
