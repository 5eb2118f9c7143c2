use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{error, info, warn};

mod annotate;
mod barter;
mod config;
mod data;
mod enrich;
mod error;
mod fmt;
mod i18n;
mod index;
mod locale;
mod pricing;
mod rarity;
mod usage;

use config::ModConfig;
use data::snapshot::DatabaseSnapshot;
use enrich::Enricher;
use i18n::TranslationBundle;
use index::RefIndex;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("item_info=info".parse().unwrap()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config_dir = PathBuf::from(args.next().unwrap_or_else(|| "config".to_string()));
    let database_dir = PathBuf::from(args.next().unwrap_or_else(|| "database".to_string()));

    let config = load_config(&config_dir.join("config.toml"));
    let i18n = load_translations(&config_dir.join("translations.toml"));

    let mut snapshot = match DatabaseSnapshot::load_from_directory(&database_dir) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to load database snapshot: {}", e);
            std::process::exit(1);
        }
    };

    // Let other data-mutating extensions settle before reading the
    // snapshot. One-shot, fixed interval.
    if config.delay.enabled {
        info!(
            "Compatibility delay enabled ({} seconds), waiting for other mods to load...",
            config.delay.seconds
        );
        tokio::time::sleep(Duration::from_secs(config.delay.seconds)).await;
    }

    info!("Processing items...");

    let output = {
        let ix = match RefIndex::new(&snapshot) {
            Ok(ix) => ix,
            Err(e) => {
                error!("Snapshot is unusable: {}", e);
                std::process::exit(1);
            }
        };

        match Enricher::new(&config, &i18n, &ix).run() {
            Ok(output) => output,
            Err(e) => {
                error!("Enrichment pass aborted: {}", e);
                std::process::exit(1);
            }
        }
    };

    // Play the host's part: fold the transforms into the locale tables and
    // the colors into the item templates.
    let changed = output.transforms.apply(&mut snapshot.locales);
    for (item_id, color) in &output.background_colors {
        if let Some(item) = snapshot.items.get_mut(item_id) {
            item.props.background_color = Some(color.clone());
        }
    }

    info!(
        "{} items annotated ({} skipped), {} locale strings rewritten, {} background colors set",
        output.processed,
        output.skipped,
        changed,
        output.background_colors.len(),
    );
    info!("Item Info loaded!");
}

fn load_config(path: &Path) -> ModConfig {
    match ModConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; using default configuration", e);
            ModConfig::default()
        }
    }
}

fn load_translations(path: &Path) -> TranslationBundle {
    match TranslationBundle::load(path) {
        Ok(bundle) => bundle,
        Err(e) => {
            warn!("{}; using built-in English strings", e);
            TranslationBundle::builtin_english()
        }
    }
}
