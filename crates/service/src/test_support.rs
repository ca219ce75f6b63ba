#![cfg(test)]
use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use models::{category::Category, product::Product, seed::Seed, vote::Vote};

use crate::clock::FixedClock;
use crate::context::ServiceContext;
use crate::latency::NoLatency;

/// Reference "now" for every fixture: 2026-10-19 15:00 UTC.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 15, 0, 0).single().expect("valid fixture time")
}

pub fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(now()))
}

pub fn product(id: u64, title: &str, category: &str, votes: u32, launched_ago: Duration) -> Product {
    let launched = now() - launched_ago;
    Product {
        id,
        title: title.to_string(),
        tagline: format!("{title} tagline"),
        description: format!("{title} does one thing well"),
        url: format!("https://{}.example.com", title.to_lowercase()),
        category: category.to_string(),
        maker_name: "Test Maker".to_string(),
        images: vec![],
        launch_date: launched,
        vote_count: votes,
        has_voted: false,
        created_at: launched,
        updated_at: None,
    }
}

pub fn category(id: u32, name: &str, slug: &str) -> Category {
    Category { id, name: name.to_string(), slug: slug.to_string(), color: "#000000".to_string() }
}

/// Three products with votes [5, 3, 3], two categories, one ledger vote.
pub fn seed() -> Seed {
    Seed {
        categories: vec![category(1, "AI", "ai"), category(2, "Developer Tools", "developer-tools")],
        products: vec![
            product(1, "Alpha", "AI", 5, Duration::hours(12)),
            product(2, "Beta", "Developer Tools", 3, Duration::days(2)),
            product(3, "Gamma", "ai", 3, Duration::days(10)),
        ],
        votes: vec![Vote { product_id: 1, timestamp: now() - Duration::hours(1) }],
    }
}

pub fn context() -> ServiceContext {
    context_with(seed())
}

pub fn context_with(seed: Seed) -> ServiceContext {
    ServiceContext::new(seed, Arc::new(NoLatency), clock())
}
