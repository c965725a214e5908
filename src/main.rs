use std::{env, error::Error, path::Path};

use candle_catalog::{gateway::Gateway, models::config::Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let subscriber = tracing_subscriber::fmt().with_env_filter(env_filter).finish();
  tracing::subscriber::set_global_default(subscriber)?;

  let config_path = env::var("CATALOG_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());
  let config = if Path::new(&config_path).exists() {
    Config::load(&config_path)?
  } else {
    info!(path = %config_path, "no config file found, using defaults");
    Config::default()
  };

  let gateway = Gateway::from_config(&config);
  let (products, reviews) = tokio::join!(gateway.list_products(), gateway.list_reviews());
  let (products, reviews) = (products?, reviews?);

  for product in &products {
    info!(id = %product.id, collection = %product.collection_name, rating = product.rating, "{}", product.name);
  }
  for review in &reviews {
    info!(id = %review.id, date = %review.date, rating = review.rating, "{}", review.name);
  }
  info!(products = products.len(), reviews = reviews.len(), "catalog loaded");

  Ok(())
}
