use anyhow::Result;
use gather_core::Address;
use gather_engine::{heaviest_item, sum_of_matching, FanoutConfig, GatherSettings, ReqwestFetcher};

// Public demo API from the original latency-problems exercise set.
const DEFAULT_SOURCES: [&str; 3] = [
    "https://my-json-server.typicode.com/jabrena/latency-problems/greek",
    "https://my-json-server.typicode.com/jabrena/latency-problems/roman",
    "https://my-json-server.typicode.com/jabrena/latency-problems/nordic",
];
const DEFAULT_SECONDARY_BASE: &str = "https://en.wikipedia.org/wiki";
const TARGET_LETTER: char = 'n';

#[tokio::main]
async fn main() -> Result<()> {
    engine_logging::initialize_terminal();

    let overrides: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<&str> = if overrides.is_empty() {
        DEFAULT_SOURCES.to_vec()
    } else {
        overrides.iter().map(String::as_str).collect()
    };
    let sources = inputs
        .iter()
        .map(|input| Address::parse(input))
        .collect::<Result<Vec<_>, _>>()?;

    let fetcher = ReqwestFetcher::new();
    let settings = GatherSettings::default();
    log::info!("gathering {} sources", sources.len());

    let sum = sum_of_matching(&sources, &fetcher, settings, TARGET_LETTER).await?;
    println!("sum of names starting with '{TARGET_LETTER}': {sum}");

    let config = FanoutConfig {
        listing: sources[0].clone(),
        secondary_base: Address::parse(DEFAULT_SECONDARY_BASE)?,
        settings,
    };
    match heaviest_item(&config, &fetcher).await? {
        Some(item) => println!("most documented item: {item}"),
        None => println!("no items available for the fan-out stage"),
    }

    Ok(())
}
