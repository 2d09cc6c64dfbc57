//! Layout Export
//!
//! Serializes the current exhibit positions so an operator can paste the
//! edited layout back into the gallery's display config. The format is a
//! human-facing convenience, not a wire contract.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::scene::ExhibitSet;

/// One exported exhibit placement. Stands sit on the floor, so only the
/// horizontal coordinates travel; values are rounded to two decimals for
/// pasteability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExhibitPlacement {
    pub id: String,
    pub x: f32,
    pub z: f32,
}

/// Round to two decimals, matching the hand-edited config format.
fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

/// Snapshot the layout of every exhibit, in scene order.
pub fn layout_of(scene: &ExhibitSet) -> Vec<ExhibitPlacement> {
    scene
        .iter()
        .map(|exhibit| ExhibitPlacement {
            id: exhibit.id.clone(),
            x: round2(exhibit.position.x),
            z: round2(exhibit.position.z),
        })
        .collect()
}

/// Serialize the layout as pretty JSON.
pub fn layout_json(scene: &ExhibitSet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&layout_of(scene))
}

/// Write the layout to a JSON file, creating parent directories as needed.
pub fn save_layout(scene: &ExhibitSet, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = layout_json(scene).map_err(std::io::Error::other)?;
    std::fs::write(path, json)?;
    log::info!("exported {} placements to {}", scene.len(), path.display());
    Ok(())
}
