use anyhow::Result;
use conference_hub::{discover_providers, ConferenceService};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let data_dir = args.get(1).map(String::as_str).unwrap_or("data");

    println!("🎪 Conference Hub - Graph Normalizer");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let dir = Path::new(data_dir);
    if !dir.is_dir() {
        eprintln!("❌ Data directory not found: {}", dir.display());
        eprintln!("   Usage: conference-hub [data-dir]");
        std::process::exit(1);
    }

    // 1. Discover conference documents
    println!("\n📂 Scanning {} ...", dir.display());
    let providers = discover_providers(dir)?;
    println!("✓ Found {} conference document(s)", providers.len());

    // 2. Normalize each document into a canonical graph
    println!("\n🔗 Normalizing...");
    let service = ConferenceService::from_providers(&providers);

    for conference in service.list() {
        println!(
            "✓ {} ({}) - {} events, {} speakers, {} tracks, {} languages",
            conference.name,
            conference.id,
            conference.events.len(),
            conference.speakers.len(),
            conference.meta_data.tracks.len(),
            conference.meta_data.languages.len(),
        );
    }

    for failure in service.failures() {
        eprintln!("⚠️  Skipped: {failure}");
    }

    // 3. Summary
    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "✅ {} conference(s) normalized, {} skipped",
        service.list().len(),
        service.failures().len()
    );

    if service.list().is_empty() && !service.failures().is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
