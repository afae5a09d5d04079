use std::path::Path;

use anyhow::{Context, Result};
use lm_core::frame::FrameBuffer;

/// Charge un atlas depuis le disque dans un FrameBuffer RGBA.
///
/// Tout format décodable par le backend `image` est accepté (PNG, JPEG,
/// BMP, GIF selon les features activées).
///
/// # Errors
/// Returns an error if the image cannot be loaded or decoded.
///
/// # Example
/// ```no_run
/// use lm_source::image::load_atlas;
/// use std::path::Path;
/// let frame = load_atlas(Path::new("atlas.png")).unwrap();
/// ```
pub fn load_atlas(path: &Path) -> Result<FrameBuffer> {
    let img =
        image::open(path).with_context(|| format!("Impossible de charger {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("Atlas chargé : {width}×{height} px");
    Ok(FrameBuffer {
        data: rgba.into_raw(),
        width,
        height,
    })
}

/// Écrit un FrameBuffer sur le disque, format déduit de l'extension.
///
/// Le JPEG ne porte pas d'alpha : le buffer RGBA est aplati en RGB avant
/// encodage pour cette cible.
///
/// # Errors
/// Returns an error if the extension is unsupported or if encoding fails.
///
/// # Example
/// ```no_run
/// use lm_core::frame::FrameBuffer;
/// use lm_source::image::save_atlas;
/// use std::path::Path;
/// let frame = FrameBuffer::new(256, 256);
/// save_atlas(&frame, Path::new("out.png")).unwrap();
/// ```
pub fn save_atlas(frame: &FrameBuffer, path: &Path) -> Result<()> {
    let buffer: image::RgbaImage =
        image::ImageBuffer::from_raw(frame.width, frame.height, frame.data.clone()).context(
            "Buffer incohérent : la taille des données ne correspond pas aux dimensions",
        )?;

    let format = image::ImageFormat::from_path(path)
        .with_context(|| format!("Extension de sortie non supportée : {}", path.display()))?;

    if format == image::ImageFormat::Jpeg {
        image::DynamicImage::ImageRgba8(buffer)
            .to_rgb8()
            .save(path)
            .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
    } else {
        buffer
            .save(path)
            .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
    }

    log::debug!("Atlas écrit : {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker_frame(width: u32, height: u32) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let v = if (x + y) % 2 == 0 { 255 } else { 40 };
                fb.set_pixel(x, y, (v, v, v, 255));
            }
        }
        fb
    }

    #[test]
    fn png_roundtrip_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atlas.png");

        let fb = checker_frame(8, 6);
        save_atlas(&fb, &path).unwrap();
        let reloaded = load_atlas(&path).unwrap();

        assert_eq!((reloaded.width, reloaded.height), (8, 6));
        assert_eq!(reloaded.data, fb.data);
    }

    #[test]
    fn jpeg_output_is_flattened_and_decodable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atlas.jpg");

        let fb = checker_frame(16, 16);
        save_atlas(&fb, &path).unwrap();
        let reloaded = load_atlas(&path).unwrap();

        assert_eq!((reloaded.width, reloaded.height), (16, 16));
        // JPEG sans alpha : le décodage réhydrate un canal opaque.
        assert_eq!(reloaded.pixel(0, 0).3, 255);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atlas.atlasbin");
        let fb = checker_frame(4, 4);
        assert!(save_atlas(&fb, &path).is_err());
    }

    #[test]
    fn missing_input_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_atlas(&dir.path().join("absent.png")).is_err());
    }
}
