//! Hangul-capable font discovery. egui's bundled fonts have no CJK glyphs.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use eframe::egui;

const FONT_NAME: &str = "hangul";

const SYSTEM_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/Library/Fonts/AppleGothic.ttf",
    "C:\\Windows\\Fonts\\malgun.ttf",
];

/// Configured path first, then the platform candidates.
pub fn candidates(configured: Option<&Path>) -> Vec<PathBuf> {
    configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_CANDIDATES.iter().map(PathBuf::from))
        .collect()
}

pub fn first_existing(paths: &[PathBuf]) -> Option<&PathBuf> {
    paths.iter().find(|path| path.is_file())
}

/// Installs the first readable candidate as a fallback for both font families.
/// Returns the path that was loaded.
pub fn install(ctx: &egui::Context, configured: Option<&Path>) -> Option<PathBuf> {
    let paths = candidates(configured);
    let path = first_existing(&paths)?.clone();
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to read font");
            return None;
        }
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        FONT_NAME.to_owned(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);
    tracing::info!(path = %path.display(), "hangul font loaded");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_path_is_tried_first() {
        let list = candidates(Some(Path::new("/opt/fonts/custom.ttf")));
        assert_eq!(list[0], PathBuf::from("/opt/fonts/custom.ttf"));
        assert_eq!(list.len(), SYSTEM_CANDIDATES.len() + 1);
    }

    #[test]
    fn picks_the_first_file_that_exists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let present = dir.path().join("present.ttf");
        fs::write(&present, b"not really a font").expect("write");
        let paths = vec![dir.path().join("missing.ttf"), present.clone()];
        assert_eq!(first_existing(&paths), Some(&present));
    }

    #[test]
    fn directories_are_not_fonts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = vec![dir.path().to_path_buf()];
        assert_eq!(first_existing(&paths), None);
    }
}
