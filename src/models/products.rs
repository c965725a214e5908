use serde::{Deserialize, Serialize};

use crate::{models::errors::AppError, utils::ids::new_id};

pub const PRODUCT_DEFAULT_RATING: f64 = 5.0;
pub const PRODUCT_NAME_MAX_LENGTH: usize = 120;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: String,
  pub name: String,
  #[serde(rename = "collection")]
  pub collection_name: String,
  pub description: String,
  #[serde(rename = "image")]
  pub image_ref: String,
  pub rating: f64,
  pub review_count: u32,
}

/// Admin form input; the gateway fills in id, rating and review count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
  pub name: String,
  #[serde(rename = "collection")]
  pub collection_name: String,
  pub description: String,
  #[serde(rename = "image")]
  pub image_ref: String,
}

impl ProductDraft {
  pub fn is_valid(&self) -> Result<(), AppError> {
    let where_ = "catalog.products.is_valid";
    let name_len = self.name.trim().chars().count();
    if name_len == 0 {
      return Err(AppError::new(where_, "name", "products.name.required"));
    }
    if name_len > PRODUCT_NAME_MAX_LENGTH {
      return Err(AppError::new(where_, "name", "products.name.too_long"));
    }

    Ok(())
  }

  pub fn into_product(self) -> Product {
    Product {
      id: new_id(),
      name: self.name,
      collection_name: self.collection_name,
      description: self.description,
      image_ref: self.image_ref,
      rating: PRODUCT_DEFAULT_RATING,
      review_count: 0,
    }
  }
}
