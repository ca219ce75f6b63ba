use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, TimeZone, Utc};
use configs::LatencyConfig;
use models::product::{NewProduct, Product, ProductPatch};
use models::seed::Seed;
use models::timeframe::Timeframe;
use service::clock::FixedClock;
use service::latency::{NoLatency, SimulatedLatency};
use service::optimistic::vote_optimistically;
use service::ServiceContext;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

fn launch(id: u64, title: &str, category: &str, votes: u32, age: Duration) -> Product {
    Product {
        id,
        title: title.into(),
        tagline: format!("{title} in one line"),
        description: format!("{title} description"),
        url: format!("https://{}.example", title.to_lowercase()),
        category: category.into(),
        maker_name: "Maker".into(),
        images: vec![],
        launch_date: now() - age,
        vote_count: votes,
        has_voted: false,
        created_at: now() - age,
        updated_at: None,
    }
}

fn scenario_seed() -> Seed {
    Seed {
        categories: vec![],
        products: vec![
            launch(1, "Five", "AI", 5, Duration::hours(1)),
            launch(2, "ThreeA", "Design", 3, Duration::hours(12)),
            launch(3, "ThreeB", "AI", 3, Duration::days(2)),
        ],
        votes: vec![],
    }
}

fn context(seed: Seed) -> ServiceContext {
    ServiceContext::new(seed, Arc::new(NoLatency), Arc::new(FixedClock::new(now())))
}

fn counts(products: &[Product]) -> Vec<u32> {
    products.iter().map(|p| p.vote_count).collect()
}

fn submission() -> NewProduct {
    NewProduct {
        title: "Nova".into(),
        tagline: "Launch notes".into(),
        description: "Keeps a changelog for you".into(),
        url: "https://nova.example".into(),
        category: "AI".into(),
        maker_name: "Kai".into(),
        images: vec![],
    }
}

#[tokio::test]
async fn vote_reorders_the_feed() -> Result<(), anyhow::Error> {
    let ctx = context(scenario_seed());

    let all = ctx.products.get_all().await;
    assert_eq!(counts(&all), vec![5, 3, 3]);
    assert_eq!(all[1].title, "ThreeA");
    assert_eq!(all[2].title, "ThreeB");

    let voted = ctx.products.vote(all[2].id).await?;
    assert_eq!(voted.vote_count, 4);

    let all = ctx.products.get_all().await;
    assert_eq!(counts(&all), vec![5, 4, 3]);
    assert_eq!(all[1].title, "ThreeB");
    Ok(())
}

#[tokio::test]
async fn created_products_start_voted() -> Result<(), anyhow::Error> {
    let ctx = context(scenario_seed());
    let created = ctx.products.create(submission()).await?;
    assert_eq!((created.vote_count, created.has_voted), (1, true));
    assert_eq!(created.id, 4);

    // the creator's vote toggles off like any other
    let toggled = ctx.products.vote(created.id).await?;
    assert_eq!((toggled.vote_count, toggled.has_voted), (0, false));
    Ok(())
}

#[tokio::test]
async fn double_vote_is_identity_except_at_floor() -> Result<(), anyhow::Error> {
    let mut seed = scenario_seed();
    let mut corrupt = launch(9, "Corrupt", "AI", 0, Duration::hours(2));
    corrupt.has_voted = true;
    seed.products.push(corrupt);
    let ctx = context(seed);

    for id in [1, 2, 3] {
        let before = ctx.products.get_by_id(id).await?.vote_state();
        ctx.products.vote(id).await?;
        let after = ctx.products.vote(id).await?.vote_state();
        assert_eq!(before, after);
    }

    assert_eq!(ctx.products.vote(9).await?.vote_state(), (0, false));
    assert_eq!(ctx.products.vote(9).await?.vote_state(), (1, true));
    Ok(())
}

#[tokio::test]
async fn category_and_window_filters() {
    let ctx = context(scenario_seed());

    let ai: Vec<_> = ctx.products.get_by_category("ai").await.into_iter().map(|p| p.id).collect();
    assert_eq!(ai, vec![1, 3]);

    let day: Vec<_> = ctx.products.get_top_products(Timeframe::Day).await.into_iter().map(|p| p.id).collect();
    assert_eq!(day, vec![1, 2]);
}

#[tokio::test]
async fn missing_ids_fail_with_not_found() {
    let ctx = context(scenario_seed());
    assert!(ctx.products.vote(77).await.unwrap_err().is_not_found());
    assert!(ctx.products.delete(77).await.unwrap_err().is_not_found());
    assert!(ctx.products.update(77, ProductPatch::default()).await.unwrap_err().is_not_found());
    assert!(ctx.products.get_by_id(77).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn caller_mutation_does_not_leak() -> Result<(), anyhow::Error> {
    let ctx = context(scenario_seed());
    let mut all = ctx.products.get_all().await;
    all[0].title = "x".into();
    assert_eq!(ctx.products.get_all().await[0].title, "Five");
    Ok(())
}

#[tokio::test]
async fn optimistic_vote_survives_round_trip() -> Result<(), anyhow::Error> {
    let ctx = context(scenario_seed());
    let mut card = ctx.products.get_by_id(2).await?;
    vote_optimistically(&ctx.products, &mut card).await?;
    assert_eq!(card, ctx.products.get_by_id(2).await?);
    Ok(())
}

#[tokio::test]
async fn builtin_dataset_supports_every_feed() -> Result<(), anyhow::Error> {
    let ctx = ServiceContext::new(Seed::builtin()?, Arc::new(NoLatency), Arc::new(FixedClock::new(now())));
    let all = ctx.products.get_all().await;
    assert!(all.windows(2).all(|w| w[0].vote_count >= w[1].vote_count));

    let categories = ctx.categories.get_all().await;
    let ai = ctx.categories.get_by_slug("ai").await?;
    assert!(categories.contains(&ai));
    assert!(!ctx.products.get_by_category(&ai.slug).await.is_empty());

    let today = ctx.products.get_by_date(now().date_naive()).await;
    assert!(today.iter().all(|p| p.launch_date.date_naive() == now().date_naive()));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn simulated_latency_delays_every_call() -> Result<(), anyhow::Error> {
    let latency = Arc::new(SimulatedLatency::new(LatencyConfig::default()));
    let ctx = ServiceContext::new(scenario_seed(), latency, Arc::new(FixedClock::new(now())));

    let start = tokio::time::Instant::now();
    ctx.products.get_all().await;
    assert!(start.elapsed() >= StdDuration::from_millis(300));

    let start = tokio::time::Instant::now();
    ctx.products.create(submission()).await?;
    assert!(start.elapsed() >= StdDuration::from_millis(400));

    let start = tokio::time::Instant::now();
    ctx.categories.get_all().await;
    assert!(start.elapsed() >= StdDuration::from_millis(200));
    Ok(())
}
