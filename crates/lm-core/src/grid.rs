use crate::error::CoreError;

/// Grille de cellules uniforme dérivée des dimensions de l'image.
///
/// `columns` et `rows` viennent de la division entière par la taille de
/// cellule demandée ; `cell_w` et `cell_h` sont recalculés à partir des
/// comptes dérivés, pas de la taille demandée. Les bandes restantes d'une
/// division non exacte n'appartiennent à aucune cellule.
///
/// # Example
/// ```
/// use lm_core::grid::CellGrid;
/// let grid = CellGrid::derive(256, 256, 128).unwrap();
/// assert_eq!((grid.columns, grid.rows), (2, 2));
/// assert_eq!((grid.cell_w, grid.cell_h), (128, 128));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellGrid {
    /// Number of cell columns.
    pub columns: u32,
    /// Number of cell rows.
    pub rows: u32,
    /// Actual cell width in pixels.
    pub cell_w: u32,
    /// Actual cell height in pixels.
    pub cell_h: u32,
}

impl CellGrid {
    /// Dérive la grille depuis les dimensions de l'image.
    ///
    /// # Errors
    /// `ImageTooSmall` si l'image est plus petite que `cell_size` dans l'une
    /// des deux dimensions (la grille serait dégénérée), `Config` si
    /// `cell_size` vaut zéro.
    ///
    /// # Example
    /// ```
    /// use lm_core::grid::CellGrid;
    /// let grid = CellGrid::derive(300, 200, 128).unwrap();
    /// assert_eq!((grid.columns, grid.rows), (2, 1));
    /// assert_eq!((grid.cell_w, grid.cell_h), (150, 200));
    /// assert!(CellGrid::derive(100, 100, 128).is_err());
    /// ```
    pub fn derive(width: u32, height: u32, cell_size: u32) -> Result<Self, CoreError> {
        if cell_size == 0 {
            return Err(CoreError::Config("cell_size doit être ≥ 1".to_string()));
        }
        if width < cell_size || height < cell_size {
            return Err(CoreError::ImageTooSmall {
                width,
                height,
                cell_size,
            });
        }
        let columns = width / cell_size;
        let rows = height / cell_size;
        Ok(Self {
            columns,
            rows,
            cell_w: width / columns,
            cell_h: height / rows,
        })
    }

    /// Nombre total de cellules.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Origine pixel (x, y) de la cellule (row, col).
    ///
    /// # Example
    /// ```
    /// use lm_core::grid::CellGrid;
    /// let grid = CellGrid::derive(256, 256, 128).unwrap();
    /// assert_eq!(grid.origin(1, 1), (128, 128));
    /// ```
    #[inline]
    #[must_use]
    pub fn origin(&self, row: u32, col: u32) -> (u32, u32) {
        (col * self.cell_w, row * self.cell_h)
    }

    /// Itère les positions (row, col) en ordre row-major.
    ///
    /// L'ordre de production est le tie-break du tri stable en aval.
    pub fn positions(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |col| (row, col)))
    }
}
