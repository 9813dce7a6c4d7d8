use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::assets::domain::overlay_assets::OverlayAssets;
use crate::classification::domain::expression::ExpressionCategory;
use crate::imaging::infrastructure::conversion::frame_from_dynamic;

#[derive(Error, Debug)]
pub enum AssetLoadError {
    #[error("overlay directory not found: {0}")]
    MissingDirectory(PathBuf),
    #[error("failed to decode overlay {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Conventional overlay file name for each expression.
pub fn overlay_file_name(category: ExpressionCategory) -> &'static str {
    match category {
        ExpressionCategory::Smiling => "smile.png",
        ExpressionCategory::Frowning => "frown.png",
        ExpressionCategory::LeftWinkSmiling => "leftwink.png",
        ExpressionCategory::RightWinkSmiling => "rightwink.png",
        ExpressionCategory::LeftWinkFrowning => "leftwinkfrown.png",
        ExpressionCategory::RightWinkFrowning => "rightwinkfrown.png",
        ExpressionCategory::ClosedEyesSmiling => "closed_smile.png",
        ExpressionCategory::ClosedEyesFrowning => "closed_frown.png",
    }
}

/// Loads overlays from a directory laid out with [`overlay_file_name`].
///
/// Absent files leave their category unmapped; a present file that fails
/// to decode is an error.
pub fn load_overlay_directory(dir: &Path) -> Result<OverlayAssets, AssetLoadError> {
    if !dir.is_dir() {
        return Err(AssetLoadError::MissingDirectory(dir.to_path_buf()));
    }

    let mut assets = OverlayAssets::new();
    for &category in ExpressionCategory::ALL {
        let path = dir.join(overlay_file_name(category));
        if !path.is_file() {
            log::warn!("No overlay for {category}: {} not found", path.display());
            continue;
        }
        let img = image::open(&path).map_err(|source| AssetLoadError::Decode {
            path: path.clone(),
            source,
        })?;
        let frame = frame_from_dynamic(img);
        log::debug!(
            "Loaded {category} overlay {}x{} from {}",
            frame.width(),
            frame.height(),
            path.display()
        );
        assets.insert(category, frame);
    }

    log::info!(
        "Loaded {} of {} overlays from {}",
        assets.len(),
        ExpressionCategory::ALL.len(),
        dir.display()
    );
    Ok(assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn write_overlay(dir: &Path, name: &str, w: u32, h: u32) {
        let img = image::RgbaImage::from_pixel(w, h, image::Rgba([255, 200, 0, 255]));
        img.save(dir.join(name)).unwrap();
    }

    #[test]
    fn test_file_names_are_distinct() {
        let names: HashSet<_> = ExpressionCategory::ALL
            .iter()
            .map(|&c| overlay_file_name(c))
            .collect();
        assert_eq!(names.len(), ExpressionCategory::ALL.len());
    }

    #[test]
    fn test_loads_all_present_overlays() {
        let dir = tempfile::tempdir().unwrap();
        for &c in ExpressionCategory::ALL {
            write_overlay(dir.path(), overlay_file_name(c), 8, 6);
        }

        let assets = load_overlay_directory(dir.path()).unwrap();

        assert_eq!(assets.len(), 8);
        let smile = assets.get(ExpressionCategory::Smiling).unwrap();
        assert_eq!((smile.width(), smile.height(), smile.channels()), (8, 6, 4));
    }

    #[test]
    fn test_missing_files_leave_categories_unmapped() {
        let dir = tempfile::tempdir().unwrap();
        write_overlay(dir.path(), "smile.png", 4, 4);
        write_overlay(dir.path(), "closed_frown.png", 4, 4);

        let assets = load_overlay_directory(dir.path()).unwrap();

        assert_eq!(assets.len(), 2);
        assert!(assets.get(ExpressionCategory::ClosedEyesFrowning).is_some());
        assert!(assets.get(ExpressionCategory::Frowning).is_none());
    }

    #[test]
    fn test_missing_directory_is_error() {
        let err = load_overlay_directory(Path::new("/nonexistent/overlays")).unwrap_err();
        assert!(matches!(err, AssetLoadError::MissingDirectory(_)));
    }

    #[test]
    fn test_corrupt_overlay_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("frown.png"), b"not a png").unwrap();

        let err = load_overlay_directory(dir.path()).unwrap_err();

        assert!(matches!(err, AssetLoadError::Decode { .. }));
    }
}
