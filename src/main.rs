//! recipe-rec - recommend recipes for a restaurant menu or free text.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use recipe_recommender::ingest::{JsonLinesCorpus, JsonLinesRestaurants};
use recipe_recommender::{Error, Recommendation, Recommender, RecommenderConfig, Result};

#[derive(Debug, Parser)]
#[command(name = "recipe-rec", version, about = "Recommend recipes using TF-IDF cosine similarity")]
#[command(group(ArgGroup::new("input").required(true).args(["restaurant", "query"])))]
struct Cli {
    /// Recipes as JSON lines (`rec_id`, `title`, `ingredients`)
    #[arg(long)]
    recipes: PathBuf,

    /// Restaurants as JSON lines (`name`, `menu.items`, `menu.descriptions`)
    #[arg(long, requires = "restaurant")]
    restaurants: Option<PathBuf>,

    /// Restaurant whose menu is the query
    #[arg(long, requires = "restaurants")]
    restaurant: Option<String>,

    /// Free query text
    #[arg(long)]
    query: Option<String>,

    /// Number of recommendations [default: top_k from config, else 5]
    #[arg(short = 'k', long = "top")]
    top: Option<usize>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => RecommenderConfig::from_file(path)?,
        None => RecommenderConfig::default(),
    };
    let k = cli.top.unwrap_or(config.top_k);

    let mut recommender = Recommender::new(config);
    recommender.fit_from(&JsonLinesCorpus::new(&cli.recipes))?;

    let recs = match (&cli.restaurant, &cli.restaurants, &cli.query) {
        (Some(name), Some(path), _) => {
            let restaurants = JsonLinesRestaurants::open(path)?;
            recommender.recommend_for(&restaurants, name, k)?
        }
        (None, _, Some(text)) => recommender.recommend(text, k)?,
        _ => {
            return Err(Error::invalid_argument(
                "pass --query, or --restaurant together with --restaurants",
            ))
        }
    };

    print_recommendations(&recs, cli.json)
}

fn print_recommendations(recs: &[Recommendation], json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(recs).map_err(std::io::Error::from)?;
        println!("{out}");
        return Ok(());
    }
    for rec in recs {
        println!("{}\t{:.6}", rec.label(), rec.score);
    }
    Ok(())
}
