//! Probe — drives a running gateway through the client adapter and prints the cards.
//! Run with gateway up: cargo run --bin namecraft-probe
//! Target comes from NAMECRAFT_GATEWAY_URL (default http://127.0.0.1:8000).

use std::time::Instant;

use namecraft_core::{Gender, LengthPreference, NameClient, NameSuggestion, Popularity, SuggestionCriteria};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn sample_criteria() -> Vec<SuggestionCriteria> {
    vec![
        SuggestionCriteria::new(Gender::Girl)
            .with_heritage(["greek"])
            .with_meanings(["strength"]),
        SuggestionCriteria::new(Gender::Boy)
            .with_heritage(["norse", "celtic"])
            .with_meanings(["courage", "nature"])
            .with_length(LengthPreference::Short),
        SuggestionCriteria::new(Gender::Neutral)
            .with_heritage(["japanese"])
            .with_meanings(["light"])
            .with_first_letter('H')
            .with_popularity(Popularity::Unique),
    ]
}

fn print_card(n: &NameSuggestion) {
    match n.original_script() {
        Some(script) => println!("  ┌ {} ({})", n.name, script),
        None => println!("  ┌ {}", n.name),
    }
    println!("  │ origin:  {}", n.origin);
    println!("  │ meaning: {}", n.meaning);
    println!("  └ {}", n.explanation);
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = NameClient::from_env();

    for criteria in sample_criteria() {
        let started = Instant::now();
        let names = client.fetch_suggestions(&criteria).await;
        println!(
            "[PROBE] {} / {} / {} -> {} name(s) in {} ms",
            criteria.gender,
            criteria.heritage.join(","),
            criteria.meanings.join(","),
            names.len(),
            started.elapsed().as_millis()
        );
        for n in &names {
            print_card(n);
        }

        if let Some(first) = names.first() {
            let meaning = client.fetch_meaning(&first.name).await;
            println!("[PROBE] meaning of {}: {}", first.name, meaning);
        }
    }
}
