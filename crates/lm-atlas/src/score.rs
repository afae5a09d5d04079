use lm_core::frame::LumaPlane;
use lm_core::grid::CellGrid;

/// Score d'une cellule : luminance moyenne et position d'origine.
#[derive(Clone, Copy, Debug)]
pub struct CellScore {
    /// Luminance moyenne de la cellule, sans arrondi.
    pub luminance: f64,
    /// Row d'origine dans la grille.
    pub row: u32,
    /// Colonne d'origine dans la grille.
    pub col: u32,
}

/// Score chaque cellule de la grille par sa luminance moyenne.
///
/// Parcourt les positions en ordre row-major (row externe, colonne interne) ;
/// cet ordre de production est le tie-break du tri stable en aval. La moyenne
/// est arithmétique, en `f64`, sur le plan de luminance précalculé.
///
/// # Example
/// ```
/// use lm_core::frame::FrameBuffer;
/// use lm_core::grid::CellGrid;
/// use lm_atlas::score::score_cells;
///
/// let mut fb = FrameBuffer::new(2, 2);
/// fb.fill(255, 255, 255, 255);
/// let grid = CellGrid::derive(2, 2, 1).unwrap();
/// let scores = score_cells(&fb.to_luma(), &grid);
/// assert_eq!(scores.len(), 4);
/// assert!((scores[0].luminance - 255.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn score_cells(luma: &LumaPlane, grid: &CellGrid) -> Vec<CellScore> {
    let pixels_per_cell = u64::from(grid.cell_w) * u64::from(grid.cell_h);
    let mut scores = Vec::with_capacity(grid.cell_count());

    for (row, col) in grid.positions() {
        let (x, y) = grid.origin(row, col);
        let mut sum = 0u64;
        for dy in 0..grid.cell_h {
            for dx in 0..grid.cell_w {
                sum += u64::from(luma.value(x + dx, y + dy));
            }
        }
        scores.push(CellScore {
            luminance: sum as f64 / pixels_per_cell as f64,
            row,
            col,
        });
    }

    log::debug!(
        "{} cellules scorées ({} px chacune)",
        scores.len(),
        pixels_per_cell
    );
    scores
}
