use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Taille de cellule par défaut, en pixels.
pub const DEFAULT_CELL_SIZE: u32 = 128;

/// Configuration complète de la réorganisation d'atlas.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut qui reproduit
/// le comportement de référence : cellules de 128 px, aucun décalage de
/// rang, échelle 1.0.
///
/// # Example
/// ```
/// use lm_core::config::ReorderConfig;
/// let config = ReorderConfig::default();
/// assert_eq!(config.cell_size, 128);
/// assert_eq!(config.effective_cell_size(), 128);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ReorderConfig {
    /// Taille de cellule demandée, en pixels.
    pub cell_size: u32,
    /// Rotation du mapping rang → cellule destination, modulo le nombre
    /// de cellules. 0 = mapping identité.
    pub rank_offset: usize,
    /// Facteur d'échelle appliqué à `cell_size` avant dérivation de la
    /// grille. 1.0 = neutre.
    pub cell_scale: f32,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            rank_offset: 0,
            cell_scale: 1.0,
        }
    }
}

impl ReorderConfig {
    /// Taille de cellule effective après application de `cell_scale`.
    ///
    /// Arrondie au pixel, jamais en dessous de 1.
    ///
    /// # Example
    /// ```
    /// use lm_core::config::ReorderConfig;
    /// let config = ReorderConfig { cell_scale: 0.5, ..Default::default() };
    /// assert_eq!(config.effective_cell_size(), 64);
    /// ```
    #[must_use]
    pub fn effective_cell_size(&self) -> u32 {
        let scaled = (self.cell_size as f32 * self.cell_scale).round();
        scaled.max(1.0) as u32
    }

    /// Valide les bornes de la configuration.
    ///
    /// # Errors
    /// `Config` si `cell_size` vaut zéro ou si `cell_scale` n'est pas un
    /// réel strictement positif.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.cell_size == 0 {
            return Err(CoreError::Config("cell_size doit être ≥ 1".to_string()));
        }
        if !self.cell_scale.is_finite() || self.cell_scale <= 0.0 {
            return Err(CoreError::Config(format!(
                "cell_scale doit être > 0, reçu {}",
                self.cell_scale
            )));
        }
        Ok(())
    }
}

/// Fichier de configuration TOML. Tous les champs sont optionnels et
/// fusionnés par-dessus les défauts.
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    atlas: AtlasSection,
}

#[derive(Deserialize, Default)]
struct AtlasSection {
    cell_size: Option<u32>,
    rank_offset: Option<usize>,
    cell_scale: Option<f32>,
}

/// Parse une configuration depuis son contenu TOML.
///
/// # Errors
/// Retourne une erreur si le TOML est invalide ou si les valeurs sont
/// hors bornes.
///
/// # Example
/// ```
/// use lm_core::config::from_toml;
/// let config = from_toml("[atlas]\ncell_size = 64\n").unwrap();
/// assert_eq!(config.cell_size, 64);
/// assert_eq!(config.rank_offset, 0);
/// ```
pub fn from_toml(content: &str) -> Result<ReorderConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = ReorderConfig::default();
    let a = file.atlas;
    if let Some(v) = a.cell_size {
        config.cell_size = v;
    }
    if let Some(v) = a.rank_offset {
        config.rank_offset = v;
    }
    if let Some(v) = a.cell_scale {
        config.cell_scale = v;
    }

    config.validate()?;
    Ok(config)
}

/// Charge une configuration TOML depuis le disque.
///
/// # Errors
/// Retourne une erreur si le fichier est illisible ou invalide.
///
/// # Example
/// ```no_run
/// use lm_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ReorderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    from_toml(&content).with_context(|| format!("Configuration invalide : {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_reference_behavior() {
        let config = ReorderConfig::default();
        assert_eq!(config.cell_size, 128);
        assert_eq!(config.rank_offset, 0);
        assert!((config.cell_scale - 1.0).abs() < f32::EPSILON);
        assert_eq!(config.effective_cell_size(), 128);
    }

    #[test]
    fn cell_scale_rounds_to_nearest_pixel() {
        let config = ReorderConfig {
            cell_scale: 0.5,
            ..Default::default()
        };
        assert_eq!(config.effective_cell_size(), 64);

        let config = ReorderConfig {
            cell_size: 3,
            cell_scale: 0.5,
            ..Default::default()
        };
        assert_eq!(config.effective_cell_size(), 2);
    }

    #[test]
    fn tiny_scale_clamps_to_one_pixel() {
        let config = ReorderConfig {
            cell_scale: 0.001,
            ..Default::default()
        };
        assert_eq!(config.effective_cell_size(), 1);
    }

    #[test]
    fn invalid_scale_is_rejected() {
        let config = ReorderConfig {
            cell_scale: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ReorderConfig {
            cell_scale: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn from_toml_merges_over_defaults() {
        let config = from_toml("[atlas]\ncell_size = 64\ncell_scale = 2.0\n").unwrap();
        assert_eq!(config.cell_size, 64);
        assert!((config.cell_scale - 2.0).abs() < f32::EPSILON);
        assert_eq!(config.rank_offset, 0);
        assert_eq!(config.effective_cell_size(), 128);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = from_toml("").unwrap();
        assert_eq!(config.cell_size, 128);
    }

    #[test]
    fn out_of_range_toml_is_rejected() {
        assert!(from_toml("[atlas]\ncell_size = 0\n").is_err());
        assert!(from_toml("[atlas]\ncell_scale = -1.0\n").is_err());
    }
}
