use crate::models::{products::Product, reviews::Review};

struct ProductSeed {
  id: &'static str,
  name: &'static str,
  collection: &'static str,
  description: &'static str,
  image: &'static str,
  rating: f64,
  review_count: u32,
}

struct ReviewSeed {
  id: &'static str,
  name: &'static str,
  date: &'static str,
  text: &'static str,
  avatar_url: &'static str,
  product_image_url: Option<&'static str>,
}

const PRODUCT_SEEDS: [ProductSeed; 6] = [
  ProductSeed {
    id: "1",
    name: "Vanilla Dreams",
    collection: "Signature Collection",
    description: "Warm vanilla bean blended with hints of caramel and cream for a comforting embrace.",
    image: "https://images.unsplash.com/photo-1602874801006-e24946a9a1c2?w=800&h=600&fit=crop",
    rating: 5.0,
    review_count: 248,
  },
  ProductSeed {
    id: "2",
    name: "Lavender Fields",
    collection: "Relaxation Collection",
    description: "Pure lavender essence with subtle chamomile notes to create a peaceful sanctuary.",
    image: "https://images.unsplash.com/photo-1587556930116-0c6e4d6e34c5?w=800&h=600&fit=crop",
    rating: 5.0,
    review_count: 192,
  },
  ProductSeed {
    id: "3",
    name: "Citrus Burst",
    collection: "Energizing Collection",
    description: "Bright blend of orange, lemon, and grapefruit to invigorate your senses.",
    image: "https://images.unsplash.com/photo-1603006905003-be475563bc59?w=800&h=600&fit=crop",
    rating: 5.0,
    review_count: 156,
  },
  ProductSeed {
    id: "4",
    name: "Autumn Spice",
    collection: "Seasonal Collection",
    description: "Cinnamon, nutmeg, and clove create the perfect cozy autumn atmosphere.",
    image: "https://images.unsplash.com/photo-1570823336316-016f6b2169b1?w=800&h=600&fit=crop",
    rating: 5.0,
    review_count: 203,
  },
  ProductSeed {
    id: "5",
    name: "Rose Garden",
    collection: "Floral Collection",
    description: "Delicate rose petals with jasmine undertones for a romantic ambiance.",
    image: "https://images.unsplash.com/photo-1572295629910-4829373eb431?w=800&h=600&fit=crop",
    rating: 4.0,
    review_count: 178,
  },
  ProductSeed {
    id: "6",
    name: "Cedar & Sage",
    collection: "Woodsy Collection",
    description: "Earthy cedar wood and fresh sage bring the outdoors inside.",
    image: "https://images.unsplash.com/photo-1608181114410-db2bb24d346d?w=800&h=600&fit=crop",
    rating: 5.0,
    review_count: 165,
  },
];

const REVIEW_SEEDS: [ReviewSeed; 3] = [
  ReviewSeed {
    id: "1",
    name: "Sarah Mitchell",
    date: "March 15, 2024",
    text: "The Vanilla Dreams candle has transformed my living room into the coziest space. The scent is absolutely divine and lasts for hours!",
    avatar_url: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop",
    product_image_url: Some(
      "https://images.unsplash.com/photo-1602874801006-e24946a9a1c2?w=400&h=200&fit=crop",
    ),
  },
  ReviewSeed {
    id: "2",
    name: "James Rodriguez",
    date: "March 10, 2024",
    text: "I've tried many candles, but nothing compares to the quality and craftsmanship of Trinkets and Beyond. The Lavender Fields is my bedtime essential!",
    avatar_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop",
    product_image_url: None,
  },
  ReviewSeed {
    id: "3",
    name: "Emily Chen",
    date: "March 8, 2024",
    text: "The attention to detail is incredible. Each candle feels like a work of art. The Citrus Burst gives me energy every morning!",
    avatar_url: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop",
    product_image_url: Some(
      "https://images.unsplash.com/photo-1587556930116-0c6e4d6e34c5?w=400&h=200&fit=crop",
    ),
  },
];

pub fn default_products() -> Vec<Product> {
  PRODUCT_SEEDS
    .iter()
    .map(|s| Product {
      id: s.id.to_string(),
      name: s.name.to_string(),
      collection_name: s.collection.to_string(),
      description: s.description.to_string(),
      image_ref: s.image.to_string(),
      rating: s.rating,
      review_count: s.review_count,
    })
    .collect()
}

pub fn default_reviews() -> Vec<Review> {
  REVIEW_SEEDS
    .iter()
    .map(|s| Review {
      id: s.id.to_string(),
      name: s.name.to_string(),
      date: s.date.to_string(),
      rating: 5,
      text: s.text.to_string(),
      avatar_url: s.avatar_url.to_string(),
      product_image_url: s.product_image_url.map(str::to_string),
    })
    .collect()
}
