use std::path::PathBuf;

use clap::Parser;

/// lumatlas — Luminance-ordered font atlas reorganizer.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Atlas d'entrée : chemin vers une image (PNG, JPEG, BMP, GIF).
    pub input: PathBuf,

    /// Atlas de sortie ; format déduit de l'extension.
    pub output: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
