//! Deck driver: walks the table, writes one PNG per card plus a manifest.
//!
//! Strictly sequential, one-shot. All inputs are compile-time constants, so
//! the only failure modes are filesystem ones: an uncreatable or unwritable
//! output directory, or a PNG encode/write error. Both are fatal and
//! propagate to the caller.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::deck::{CardSpec, Category, DECK};
use crate::render::{render_card, FontStack};

/// Default output directory, matching the layout the consuming app loads
/// card assets from.
pub const OUTPUT_DIR: &str = "public/assets";

/// Filename of the JSON deck manifest written next to the images.
pub const MANIFEST_FILE: &str = "deck.json";

/// Fatal generation failures.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to create output directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write card image {path}")]
    WriteImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write deck manifest {path}")]
    WriteManifest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One manifest row, serialized into `deck.json`.
#[derive(Debug, Serialize)]
struct ManifestEntry {
    index: u8,
    name: &'static str,
    category: Category,
    file: String,
}

/// Generate the full deck into `out_dir`, creating it (and parents) first.
///
/// `progress` is invoked once per card before it is rendered; the library
/// itself never prints. Existing files are overwritten, and because the
/// table and renderer are deterministic the overwrite is pixel-identical.
///
/// Returns the number of images written.
pub fn generate_deck<F>(out_dir: &Path, mut progress: F) -> Result<usize, GenerateError>
where
    F: FnMut(&CardSpec),
{
    fs::create_dir_all(out_dir).map_err(|source| GenerateError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let fonts = FontStack::load_system();

    for spec in &DECK {
        progress(spec);
        let path = out_dir.join(spec.filename());
        let img = render_card(spec, &fonts);
        img.save(&path)
            .map_err(|source| GenerateError::WriteImage { path, source })?;
    }

    write_manifest(out_dir)?;

    Ok(DECK.len())
}

/// Write `deck.json`: index, name, category, and image filename for every
/// card, in deck order.
fn write_manifest(out_dir: &Path) -> Result<(), GenerateError> {
    let entries: Vec<ManifestEntry> = DECK
        .iter()
        .map(|spec| ManifestEntry {
            index: spec.index,
            name: spec.name,
            category: spec.category,
            file: spec.filename(),
        })
        .collect();

    let path = out_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(&entries)
        .expect("manifest serialization cannot fail for static data");
    fs::write(&path, json).map_err(|source| GenerateError::WriteManifest { path, source })
}
