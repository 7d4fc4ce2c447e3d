use clap::Args;

use crate::cli::{OutputFormat, WhitelistArgs};
use crate::index::store::IndexStats;

#[derive(Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub whitelist: WhitelistArgs,
}

pub fn run(args: StatsArgs, format: OutputFormat) -> anyhow::Result<()> {
    let set = args.whitelist.load()?;
    let stats = set.stats();

    match format {
        OutputFormat::Text => print_text_stats(&stats),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Tsv => print_tsv_stats(&stats),
    }

    Ok(())
}

fn lengths_to_string(lengths: &[usize]) -> String {
    lengths
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn print_text_stats(stats: &IndexStats) {
    println!("Index Statistics");
    println!("{}", "=".repeat(60));
    println!("  Barcodes: {}", stats.barcodes);
    println!("  Lengths: {}", lengths_to_string(&stats.lengths));
    println!("  Max distance: {}", stats.max_dist);
    println!("  Segments: {}", stats.segments);
    println!("  Deletions per segment: {}", stats.segment_deletions);
    println!("  Keys: {}", stats.keys);
    println!("  Postings: {}", stats.postings);
}

fn print_tsv_stats(stats: &IndexStats) {
    println!("barcodes\tlengths\tmax_dist\tsegments\tsegment_deletions\tkeys\tpostings");
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        stats.barcodes,
        lengths_to_string(&stats.lengths),
        stats.max_dist,
        stats.segments,
        stats.segment_deletions,
        stats.keys,
        stats.postings,
    );
}
