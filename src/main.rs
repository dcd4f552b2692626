use std::path::Path;

use anyhow::{Context, Result};
use tarot_cardgen::{generate_deck, OUTPUT_DIR};

fn main() -> Result<()> {
    println!("Generating tarot card images...");
    println!("Output directory: {OUTPUT_DIR}");

    let written = generate_deck(Path::new(OUTPUT_DIR), |card| {
        println!("Creating card {}: {}...", card.index, card.name);
    })
    .context("deck generation failed")?;

    println!("Successfully generated {written} tarot card images!");

    Ok(())
}
