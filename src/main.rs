use anyhow::Result;
use impact_society_client::app::{AppContext, NavItem};
use impact_society_client::config::Config;
use impact_society_client::document::DocumentAttributes;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("impact_society_client=info".parse()?),
        )
        .init();

    info!("Starting Impact Society client");

    let config = Config::from_env()?;
    let document = Arc::new(DocumentAttributes::new());
    let context = AppContext::from_config(&config, document.clone())?;

    // Step 1: restore language and session
    context.start().await;
    info!(
        "Document attributes: dir={} lang={}",
        document.dir().unwrap_or_default(),
        document.lang().unwrap_or_default()
    );

    // Step 2: report the navigation bar for the restored session
    for item in context.nav_links() {
        match item {
            NavItem::Link { route, label } => info!("Nav link: {} -> {}", label, route),
            NavItem::Logout { label } => info!("Nav action: {}", label),
        }
    }

    // Step 3: evaluate any paths given on the command line
    for path in std::env::args().skip(1) {
        let navigation = context.resolve_navigation(&path).await;
        info!("{} -> {:?} {:?}", path, navigation.route, navigation.decision);
    }

    Ok(())
}
