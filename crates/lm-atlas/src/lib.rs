/// Atlas transformation for lumatlas: luminance scoring and recomposition.
///
/// Opère uniquement sur des buffers en mémoire (`lm_core::FrameBuffer`) ;
/// le décodage et l'encodage de fichiers vivent dans `lm-source`.

pub mod recompose;
pub mod score;

pub use recompose::recompose;
pub use score::{CellScore, score_cells};

use lm_core::config::ReorderConfig;
use lm_core::error::CoreError;
use lm_core::frame::FrameBuffer;
use lm_core::grid::CellGrid;

/// Réordonne un atlas par luminance croissante, en un seul appel.
///
/// Pipeline pur : dérivation de grille → plan de luminance → scores →
/// recomposition. Aucun effet de bord ; le buffer d'entrée n'est jamais
/// modifié.
///
/// # Errors
/// `ImageTooSmall` si l'image est plus petite que la taille de cellule
/// effective, `Config` si la configuration est hors bornes.
///
/// # Example
/// ```
/// use lm_core::config::ReorderConfig;
/// use lm_core::frame::FrameBuffer;
/// use lm_atlas::reorder_frame;
///
/// let mut fb = FrameBuffer::new(2, 2);
/// fb.set_pixel(0, 0, (255, 255, 255, 255));
/// let config = ReorderConfig { cell_size: 1, ..Default::default() };
/// let out = reorder_frame(&fb, &config).unwrap();
/// // Le pixel clair migre en fin de grille.
/// assert_eq!(out.pixel(1, 1), (255, 255, 255, 255));
/// assert_eq!(out.pixel(0, 0).0, 0);
/// ```
pub fn reorder_frame(
    frame: &FrameBuffer,
    config: &ReorderConfig,
) -> Result<FrameBuffer, CoreError> {
    config.validate()?;
    let grid = CellGrid::derive(frame.width, frame.height, config.effective_cell_size())?;
    let scores = score_cells(&frame.to_luma(), &grid);
    Ok(recompose(frame, &grid, scores, config.rank_offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorder_rejects_undersized_image() {
        let fb = FrameBuffer::new(100, 100);
        let err = reorder_frame(&fb, &ReorderConfig::default()).unwrap_err();
        assert!(matches!(err, CoreError::ImageTooSmall { .. }));
    }

    #[test]
    fn reorder_rejects_invalid_config() {
        let fb = FrameBuffer::new(256, 256);
        let config = ReorderConfig {
            cell_scale: 0.0,
            ..Default::default()
        };
        assert!(reorder_frame(&fb, &config).is_err());
    }

    #[test]
    fn cell_scale_changes_grid_granularity() {
        // 256 px avec scale 0.5 → cellules de 64 px, grille 4×4.
        let mut fb = FrameBuffer::new(256, 256);
        fb.set_pixel(0, 0, (255, 255, 255, 255));
        let config = ReorderConfig {
            cell_scale: 0.5,
            ..Default::default()
        };
        let out = reorder_frame(&fb, &config).unwrap();
        assert_eq!((out.width, out.height), (256, 256));
        // La cellule contenant le pixel clair finit dernière de 16 : ses
        // 64×64 px d'origine (dont le pixel clair en coin) migrent en (3,3).
        assert_eq!(out.pixel(192, 192), (255, 255, 255, 255));
    }

    #[test]
    fn reorder_preserves_input_buffer() {
        let mut fb = FrameBuffer::new(128, 128);
        fb.set_pixel(5, 5, (200, 10, 30, 255));
        let before = fb.data.clone();
        let _ = reorder_frame(&fb, &ReorderConfig::default()).unwrap();
        assert_eq!(fb.data, before);
    }
}
