use std::path::Path;

use anyhow::Result;
use lm_atlas::reorder_frame;
use lm_core::config::ReorderConfig;
use lm_core::grid::CellGrid;
use lm_source::{load_atlas, save_atlas};

/// Exécute la transformation complète : décodage → réordonnancement →
/// encodage, avec le rapport sur stdout.
///
/// Le rapport (taille d'image, taille d'atlas, taille de cellule dynamique,
/// chemin de sortie) part sur stdout ; les diagnostics passent par `log`.
///
/// # Errors
/// Retourne une erreur si l'entrée est illisible, si l'image est plus
/// petite qu'une cellule, ou si l'écriture de la sortie échoue.
pub fn run(input: &Path, output: &Path, config: &ReorderConfig) -> Result<()> {
    config.validate()?;

    log::info!("Étape 1/3 : Chargement de {}", input.display());
    let frame = load_atlas(input)?;

    let grid = CellGrid::derive(frame.width, frame.height, config.effective_cell_size())?;

    println!("Image size: {}x{}", frame.width, frame.height);
    println!(
        "Calculated Atlas Size (cols x rows): ({}, {})",
        grid.columns, grid.rows
    );
    println!(
        "Calculated Dynamic Cell Size: {}x{}",
        grid.cell_w, grid.cell_h
    );

    log::info!(
        "Étape 2/3 : Réordonnancement de {} cellules",
        grid.cell_count()
    );
    let atlas = reorder_frame(&frame, config)?;

    log::info!("Étape 3/3 : Écriture de {}", output.display());
    save_atlas(&atlas, output)?;

    println!("Reorganized font atlas saved to {}", output.display());
    Ok(())
}
