use lm_core::frame::FrameBuffer;
use lm_core::grid::CellGrid;

use crate::score::CellScore;

/// Trie les cellules par luminance croissante et recompose l'atlas.
///
/// Tri stable (`sort_by` + `total_cmp`) : les égalités de luminance gardent
/// l'ordre row-major de production des scores. Le rang 0-based de chaque
/// cellule triée, décalé de `rank_offset` modulo le nombre de cellules,
/// donne sa cellule destination (`dest / columns`, `dest % columns`, avec
/// le compte de colonnes de la grille d'origine). Les pixels sont copiés
/// depuis le buffer RGBA d'origine, jamais depuis le plan de luminance.
///
/// Le fond de sortie est noir opaque ; les bandes restantes d'une division
/// non exacte ne sont jamais écrites.
///
/// # Example
/// ```
/// use lm_core::frame::FrameBuffer;
/// use lm_core::grid::CellGrid;
/// use lm_atlas::score::score_cells;
/// use lm_atlas::recompose::recompose;
///
/// let mut fb = FrameBuffer::new(2, 1);
/// fb.fill(0, 0, 0, 255);
/// fb.set_pixel(0, 0, (255, 255, 255, 255));
/// let grid = CellGrid::derive(2, 1, 1).unwrap();
/// let scores = score_cells(&fb.to_luma(), &grid);
/// let out = recompose(&fb, &grid, scores, 0);
/// // La cellule sombre passe devant, la claire derrière.
/// assert_eq!(out.pixel(0, 0), (0, 0, 0, 255));
/// assert_eq!(out.pixel(1, 0), (255, 255, 255, 255));
/// ```
#[must_use]
pub fn recompose(
    frame: &FrameBuffer,
    grid: &CellGrid,
    mut scores: Vec<CellScore>,
    rank_offset: usize,
) -> FrameBuffer {
    scores.sort_by(|a, b| a.luminance.total_cmp(&b.luminance));

    let mut out = FrameBuffer::new(frame.width, frame.height);
    out.fill(0, 0, 0, 255);

    let total = grid.cell_count();
    for (rank, score) in scores.iter().enumerate() {
        let dest = (rank + rank_offset) % total;
        let new_row = (dest / grid.columns as usize) as u32;
        let new_col = (dest % grid.columns as usize) as u32;

        let (src_x, src_y) = grid.origin(score.row, score.col);
        let (dst_x, dst_y) = grid.origin(new_row, new_col);
        out.copy_rect_from(frame, src_x, src_y, dst_x, dst_y, grid.cell_w, grid.cell_h);
    }

    log::debug!("{total} cellules recomposées (offset {rank_offset})");
    out
}
