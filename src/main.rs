use clap::Parser;
use storefront_backend::BackendOptions;
use storefront_frontend::launch::LaunchRoute;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the product catalog and fill a cart", long_about = None)]
struct Cli {
    /// Launch link, e.g. `products.html?category=jewelery&id=3`
    link: Option<String>,

    /// Catalog API base URL, overrides the configuration file
    #[arg(long)]
    catalog_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()?;

    let cli = Cli::parse();
    let launch = match cli.link.as_deref().map(LaunchRoute::parse) {
        Some(Ok(route)) => route,
        Some(Err(e)) => {
            log::warn!("Ignoring invalid launch link: {e}");
            LaunchRoute::default()
        }
        None => LaunchRoute::default(),
    };

    let channels = storefront_bridge::BridgeChannels::default();
    storefront_backend::run(
        channels.backend_rx,
        channels.backend_tx,
        BackendOptions {
            catalog_url: cli.catalog_url,
        },
    );
    storefront_frontend::run(launch, channels.frontend_rx, channels.frontend_tx)
}
