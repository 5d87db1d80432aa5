//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `menagerie_core` linkage and the JSON store end to end.
//! - Seed the store with sample animals the first time it runs.

use menagerie_core::{
    init_logging, seed_animals, AnimalRegistry, JsonFileAnimalRepository, StoreConfig,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("menagerie_core ping={}", menagerie_core::ping());
    println!("menagerie_core version={}", menagerie_core::core_version());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = StoreConfig::from_env()?;
    if let Some(log_dir) = &config.log_dir {
        init_logging(config.log_level, log_dir)?;
    }

    let mut registry = AnimalRegistry::new(JsonFileAnimalRepository::new(&config.store_path));
    registry.load()?;
    if registry.is_empty() {
        for animal in seed_animals()? {
            registry.add(animal);
        }
        registry.save()?;
        log::info!(
            "event=store_seeded module=cli status=ok count={}",
            registry.len()
        );
    }

    println!("store={}", registry.repository().path().display());
    for animal in registry.list() {
        println!("{animal}");
    }
    for line in registry.make_all_sounds() {
        println!("{line}");
    }
    Ok(())
}
