use anyhow::Result;
use clap::Parser;
use siwo::cluster::stats;
use siwo::{data, storage, Mean, PostProcessing, SiwoConfig, SiwoPlus};
use std::time::Instant;

#[derive(Parser, Debug)]
#[clap(
    name = "siwo",
    about = "SIWO+ community detection on weighted edge lists"
)]
struct Cli {
    /// Input edge list (`id1 id2 weight` per line) or Parquet edge table
    input: String,

    /// Output file, one community per line
    output: String,

    /// Triangle weight aggregator: a (arithmetic) or g (geometric)
    #[clap(long, default_value = "a")]
    mean: Mean,

    /// Seed for start-node selection
    #[clap(long, default_value = "1")]
    seed: u64,

    /// Merge communities smaller than --min-community-size into their closest neighbour
    #[clap(long)]
    merge_small: bool,

    /// Skip moving degree-1 nodes into their neighbour's community
    #[clap(long)]
    no_merge_dangling: bool,

    /// Minimum community size kept by --merge-small
    #[clap(long, default_value = "3")]
    min_community_size: usize,

    /// JSON configuration file; replaces the flags above when given
    #[clap(long)]
    config: Option<String>,

    /// Write a JSON run summary to this path
    #[clap(long)]
    summary: Option<String>,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

impl Cli {
    fn siwo_config(&self) -> Result<SiwoConfig> {
        if let Some(path) = &self.config {
            return SiwoConfig::from_json_file(path);
        }

        Ok(SiwoConfig::new(
            self.mean,
            self.seed,
            PostProcessing {
                merge_small: self.merge_small,
                merge_dangling: !self.no_merge_dangling,
            },
            self.min_community_size,
        ))
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let config = args.siwo_config()?;
    log::info!("Starting SIWO+ community detection");
    log::info!("Input: {}", args.input);
    log::info!("Output: {}", args.output);

    let start = Instant::now();

    // 1. Load graph
    let graph = data::load_graph(&args.input)?;

    // 2. Detect communities and run the correction passes
    let mut siwo = SiwoPlus::new(graph, config);
    siwo.run();

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    log::info!("Detection finished in {:.3}ms", elapsed_ms);

    // 3. Save results
    storage::write_communities(&args.output, siwo.graph(), siwo.communities())?;

    if let Some(path) = &args.summary {
        let (summary, community_stats) = stats::summarize(siwo.graph(), siwo.communities());
        storage::save_summary(path, siwo.config(), &summary, &community_stats, elapsed_ms)?;
    }

    log::info!("Analysis complete. Results saved to {}", args.output);

    Ok(())
}
