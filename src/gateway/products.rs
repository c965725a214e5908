use crate::{
  data::defaults::default_products,
  gateway::{Gateway, snapshot::Catalog},
  models::{
    errors::GatewayError,
    products::{Product, ProductDraft},
  },
  store::{local::PRODUCTS_KEY, remote::Collection},
};

const PRODUCTS: Catalog<Product> = Catalog {
  collection: Collection::Products,
  key: PRODUCTS_KEY,
  order: None,
  defaults: default_products,
};

impl Gateway {
  /// Never empty: an empty or failing remote collection reads as the local
  /// snapshot, which is seeded on first use.
  pub async fn list_products(&self) -> Result<Vec<Product>, GatewayError> {
    Ok(self.list_catalog(&PRODUCTS).await?)
  }

  pub async fn create_product(&self, draft: ProductDraft) -> Result<Product, GatewayError> {
    draft.is_valid()?;
    Ok(self.create_in_catalog(&PRODUCTS, draft.into_product()).await?)
  }
}
