use std::path::PathBuf;

use clap::Args;

use crate::cli::{collect_queries, print_matches, OutputFormat, WhitelistArgs};

#[derive(Args)]
pub struct LookupArgs {
    #[command(flatten)]
    pub whitelist: WhitelistArgs,

    /// Barcodes to correct
    pub queries: Vec<String>,

    /// File with one query per line
    #[arg(short, long)]
    pub queries_file: Option<PathBuf>,

    /// Treat all queries as one group and report only the overall best matches
    #[arg(long)]
    pub batch: bool,
}

pub fn run(args: LookupArgs, format: OutputFormat) -> anyhow::Result<()> {
    let queries = collect_queries(args.queries, args.queries_file.as_ref())?;
    let set = args.whitelist.load()?;

    let results = if args.batch {
        let matches = set.lookup_batch(queries.iter().map(String::as_str))?;
        vec![(queries.join(","), matches)]
    } else {
        queries
            .into_iter()
            .map(|query| {
                let matches = set.lookup(&query)?;
                Ok((query, matches))
            })
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    print_matches(&results, format)
}
