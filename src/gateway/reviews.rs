use crate::{
  data::defaults::default_reviews,
  gateway::{Gateway, snapshot::Catalog},
  models::{
    errors::GatewayError,
    reviews::{Review, ReviewDraft},
  },
  store::{
    local::REVIEWS_KEY,
    remote::{Collection, Order},
  },
};

const REVIEWS: Catalog<Review> = Catalog {
  collection: Collection::Reviews,
  key: REVIEWS_KEY,
  order: Some(Order::desc("date")),
  defaults: default_reviews,
};

impl Gateway {
  /// Remote rows come newest date first; the local snapshot keeps insertion
  /// order, which is newest-created first.
  pub async fn list_reviews(&self) -> Result<Vec<Review>, GatewayError> {
    Ok(self.list_catalog(&REVIEWS).await?)
  }

  pub async fn create_review(&self, draft: ReviewDraft) -> Result<Review, GatewayError> {
    draft.is_valid()?;
    let review = draft.into_review(self.clock.now());
    Ok(self.create_in_catalog(&REVIEWS, review).await?)
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use chrono::{FixedOffset, TimeZone, Utc};
  use serde_json::json;

  use crate::{
    gateway::{
      GatewayArgs, LocalDelays,
      testing::{FakeRemote, InsertBehavior, SelectBehavior, local_gateway, remote_gateway},
    },
    models::{reviews::avatar_url_for, time::FixedClock},
    store::local::{FileKvStore, MemoryKvStore},
  };

  use super::*;

  fn ada() -> ReviewDraft {
    ReviewDraft { name: "Ada".into(), text: "Lovely".into(), rating: 5, ..Default::default() }
  }

  #[tokio::test]
  async fn test_create_review_stamps_fixed_date_and_avatar() {
    let gw = local_gateway(Arc::new(MemoryKvStore::new()));

    let review = gw.create_review(ada()).await.unwrap();
    assert_eq!(review.date, "October 5, 2024");
    assert_eq!(review.avatar_url, avatar_url_for("Ada"));
    assert_eq!(review.avatar_url, "https://ui-avatars.com/api/?name=Ada&background=E91E63&color=fff");
    assert_eq!(review.product_image_url, None);
    assert!(!review.id.is_empty());
  }

  #[tokio::test]
  async fn test_review_date_follows_local_calendar_day() {
    // 03:00 UTC is still the evening before at UTC-7
    let instant = Utc.with_ymd_and_hms(2024, 10, 5, 3, 0, 0).unwrap();
    let mountain = instant.with_timezone(&FixedOffset::west_opt(7 * 3600).unwrap());
    let gw = Gateway::new(GatewayArgs {
      remote: None,
      local: Arc::new(MemoryKvStore::new()),
      delays: LocalDelays::none(),
      clock: Arc::new(FixedClock(mountain)),
    });

    let review = gw.create_review(ada()).await.unwrap();
    assert_eq!(review.date, "October 4, 2024");
    assert_eq!(gw.list_reviews().await.unwrap()[0].date, "October 4, 2024");
  }

  #[tokio::test]
  async fn test_reviews_seed_and_prepend() {
    let local = Arc::new(MemoryKvStore::new());
    let gw = local_gateway(local.clone());

    assert_eq!(gw.list_reviews().await.unwrap(), default_reviews());

    let first = gw.create_review(ada()).await.unwrap();
    let grace = ReviewDraft {
      name: "Grace".into(),
      text: "Warm and even burn".into(),
      rating: 4,
      ..Default::default()
    };
    let second = gw.create_review(grace).await.unwrap();

    let listed = gw.list_reviews().await.unwrap();
    assert_eq!(listed.len(), default_reviews().len() + 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
    assert_eq!(local.writes(), 3);
  }

  #[tokio::test]
  async fn test_invalid_review_rejected() {
    let local = Arc::new(MemoryKvStore::new());
    let gw = local_gateway(local.clone());

    let err = gw.create_review(ReviewDraft { text: "".into(), ..ada() }).await.unwrap_err();
    assert_eq!(err.as_invalid().unwrap().id, "reviews.text.required");

    let err = gw.create_review(ReviewDraft { rating: 9, ..ada() }).await.unwrap_err();
    assert_eq!(err.as_invalid().unwrap().field, "rating");
    assert_eq!(local.writes(), 0);
  }

  #[tokio::test]
  async fn test_remote_reviews_requested_newest_first() {
    let remote = Arc::new(FakeRemote::new(SelectBehavior::Rows(vec![json!({
      "id": "r9", "name": "Lin", "date": "May 2, 2024", "rating": 5,
      "text": "Beautiful", "avatarUrl": "https://cdn.example.com/lin.png"
    })])));
    let gw = remote_gateway(remote.clone(), Arc::new(MemoryKvStore::new()));

    let reviews = gw.list_reviews().await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].name, "Lin");
    assert_eq!(reviews[0].product_image_url, None);
    assert_eq!(remote.last_order(), Some(Order::desc("date")));
  }

  #[tokio::test]
  async fn test_remote_empty_reviews_fall_back() {
    let remote = Arc::new(FakeRemote::new(SelectBehavior::Empty));
    let gw = remote_gateway(remote, Arc::new(MemoryKvStore::new()));

    assert_eq!(gw.list_reviews().await.unwrap(), default_reviews());
  }

  #[tokio::test]
  async fn test_remote_review_insert() {
    let local = Arc::new(MemoryKvStore::new());
    let remote =
      Arc::new(FakeRemote::new(SelectBehavior::Empty).with_insert(InsertBehavior::Echo));
    let gw = remote_gateway(remote.clone(), local.clone());

    let review = gw.create_review(ada()).await.unwrap();
    assert_eq!(review.date, "October 5, 2024");
    assert_eq!(remote.inserted()[0]["avatarUrl"], json!(avatar_url_for("Ada")));
    assert!(remote.inserted()[0].get("productImageUrl").is_none());
    assert_eq!(local.writes(), 0);
  }

  #[tokio::test]
  async fn test_reviews_persist_across_gateways_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    let created = {
      let gw = local_gateway(Arc::new(FileKvStore::new(dir.path())));
      gw.create_review(ada()).await.unwrap()
    };

    let reopened = local_gateway(Arc::new(FileKvStore::new(dir.path())));
    let listed = reopened.list_reviews().await.unwrap();
    assert_eq!(listed[0], created);
    assert_eq!(listed.len(), default_reviews().len() + 1);
  }
}
