use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{
  models::{errors::AppError, time::format_long_date},
  utils::{ids::new_id, net::encode_uri_component},
};

pub const REVIEW_RATING_MIN: u8 = 1;
pub const REVIEW_RATING_MAX: u8 = 5;

const AVATAR_BASE_URL: &str = "https://ui-avatars.com/api/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
  pub id: String,
  pub name: String,
  pub date: String,
  pub rating: u8,
  pub text: String,
  pub avatar_url: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub product_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
  pub name: String,
  pub text: String,
  pub rating: u8,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub avatar_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub product_image_url: Option<String>,
}

pub fn avatar_url_for(name: &str) -> String {
  format!("{}?name={}&background=E91E63&color=fff", AVATAR_BASE_URL, encode_uri_component(name))
}

impl ReviewDraft {
  pub fn is_valid(&self) -> Result<(), AppError> {
    let where_ = "catalog.reviews.is_valid";
    if self.name.trim().is_empty() {
      return Err(AppError::new(where_, "name", "reviews.name.required"));
    }
    if self.text.trim().is_empty() {
      return Err(AppError::new(where_, "text", "reviews.text.required"));
    }
    if !(REVIEW_RATING_MIN..=REVIEW_RATING_MAX).contains(&self.rating) {
      return Err(AppError::new(where_, "rating", "reviews.rating.out_of_range"));
    }

    Ok(())
  }

  pub fn into_review(self, at: DateTime<FixedOffset>) -> Review {
    let avatar_url = match self.avatar_url {
      Some(url) if !url.is_empty() => url,
      _ => avatar_url_for(&self.name),
    };

    Review {
      id: new_id(),
      date: format_long_date(at),
      rating: self.rating,
      avatar_url,
      name: self.name,
      text: self.text,
      product_image_url: self.product_image_url,
    }
  }
}
