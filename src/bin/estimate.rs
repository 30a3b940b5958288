use freight_estimator::config::FreightConfig;
use freight_estimator::db::{
    HubRepository, PgHubRepository, PgProductCatalog, ProductCatalog, StaticHubRepository,
    StaticProductCatalog,
};
use freight_estimator::models::{EstimateResponse, HubSource};
use freight_estimator::services::FreightEstimator;
use std::env;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        "\
Usage: estimate --city=NAME --weight=TEXT [OPTIONS]

Options:
  --city=NAME           Destination city
  --weight=TEXT         Weight in kg, or a quantity such as \"200 units\" or \"2 t\"
  --product=NAME        Derive the weight from this catalog product's unit weight
  --offline             Skip the database; measure from the fallback hub only
  --json                Print the JSON response envelope
  --help                Show this help message"
    );
}

fn print_summary(response: &EstimateResponse) {
    match (&response.data, &response.error) {
        (Some(data), _) => {
            println!("Hub:            {}", data.hub);
            if let HubSource::Fallback { reason } = data.hub_source {
                println!("                (fallback hub, registry {:?})", reason);
            }
            println!("Distance:       {} km", data.distance_km);
            println!(
                "Weight:         {} kg{}",
                data.weight_kg,
                if data.auto_calculated {
                    " (from product unit weight)"
                } else {
                    ""
                }
            );
            println!("Load:           {}", data.tier);
            println!("Rate:           {}", data.rate_info);
            println!("Estimated cost: {:.0}", data.estimated_cost);
        }
        (None, Some(error)) => println!("Estimate failed: {}", error),
        (None, None) => println!("Estimate failed"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (quiet unless RUST_LOG says otherwise)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "freight_estimator=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse CLI args
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }

    let city = args.iter().find_map(|a| a.strip_prefix("--city="));
    let weight = args.iter().find_map(|a| a.strip_prefix("--weight="));
    let product = args.iter().find_map(|a| a.strip_prefix("--product="));
    let offline = args.iter().any(|a| a == "--offline");
    let json_output = args.iter().any(|a| a == "--json");

    let (Some(city), Some(weight)) = (city, weight) else {
        print_help();
        std::process::exit(2);
    };

    dotenv::dotenv().ok();
    let config = FreightConfig::from_env().map_err(|e| format!("Config error: {}", e))?;
    let cities = config
        .load_city_registry()
        .map_err(|e| format!("City registry error: {}", e))?;

    let database_url = env::var("DATABASE_URL").ok().filter(|_| !offline);
    let hub_repo: Arc<dyn HubRepository>;
    let catalog: Arc<dyn ProductCatalog>;
    match database_url {
        Some(url) => {
            let pool = freight_estimator::db::create_pool(&url).await?;
            hub_repo = Arc::new(PgHubRepository::new(pool.clone()));
            catalog = Arc::new(PgProductCatalog::new(pool));
        }
        None => {
            tracing::info!("Running offline: no hub registry or product catalog");
            hub_repo = Arc::new(StaticHubRepository::default());
            catalog = Arc::new(StaticProductCatalog::default());
        }
    }

    let estimator = FreightEstimator::new(&config, Arc::new(cities), hub_repo, catalog);
    let response = estimator.estimate_freight(city, weight, product).await;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_summary(&response);
    }

    if !response.success {
        std::process::exit(1);
    }

    Ok(())
}
