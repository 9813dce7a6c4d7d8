use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::face::FaceObservation;
use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum FaceSidecarError {
    #[error("failed to read face observations from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed face observations in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads observations exported by an external vision tool from a JSON file.
///
/// The file holds an array of objects with `x`, `y`, `width`, `height`,
/// `smiling`, `left_eye_open` and `right_eye_open`. It is read lazily on the
/// first `detect` call and replayed afterwards.
pub struct SidecarFaceDetector {
    path: PathBuf,
    faces: Option<Vec<FaceObservation>>,
}

impl SidecarFaceDetector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            faces: None,
        }
    }

    pub fn load(path: &Path) -> Result<Vec<FaceObservation>, FaceSidecarError> {
        let json = fs::read_to_string(path).map_err(|source| FaceSidecarError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| FaceSidecarError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl FaceDetector for SidecarFaceDetector {
    fn detect(&mut self, _frame: &Frame) -> Result<Vec<FaceObservation>, Box<dyn std::error::Error>> {
        if self.faces.is_none() {
            let faces = Self::load(&self.path)?;
            log::info!("Loaded {} face observations from {}", faces.len(), self.path.display());
            self.faces = Some(faces);
        }
        Ok(self.faces.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn frame() -> Frame {
        Frame::filled(10, 10, &[0, 0, 0])
    }

    fn write_sidecar(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("faces.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_reads_faces_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sidecar(
            dir.path(),
            r#"[
                {"x": 10, "y": 20, "width": 30, "height": 40,
                 "smiling": 0.9, "left_eye_open": 0.8, "right_eye_open": 0.7},
                {"x": 50.5, "y": 0, "width": 12, "height": 12,
                 "smiling": 0.0, "left_eye_open": 0.1, "right_eye_open": 0.2}
            ]"#,
        );
        let mut detector = SidecarFaceDetector::new(&path);

        let faces = detector.detect(&frame()).unwrap();

        assert_eq!(faces.len(), 2);
        assert_relative_eq!(faces[0].x, 10.0);
        assert_relative_eq!(faces[0].smiling, 0.9);
        assert_relative_eq!(faces[1].x, 50.5);
        assert_relative_eq!(faces[1].right_eye_open, 0.2);
    }

    #[test]
    fn test_empty_array_is_no_faces() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sidecar(dir.path(), "[]");
        let mut detector = SidecarFaceDetector::new(path);
        assert!(detector.detect(&frame()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = SidecarFaceDetector::load(Path::new("/nonexistent/faces.json")).unwrap_err();
        assert!(matches!(err, FaceSidecarError::Read { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sidecar(dir.path(), r#"[{"x": 1}]"#);
        let err = SidecarFaceDetector::load(&path).unwrap_err();
        assert!(matches!(err, FaceSidecarError::Parse { .. }));
        assert!(err.to_string().contains("faces.json"));
    }

    #[test]
    fn test_file_is_read_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sidecar(dir.path(), "[]");
        let mut detector = SidecarFaceDetector::new(&path);
        detector.detect(&frame()).unwrap();

        fs::remove_file(&path).unwrap();

        assert!(detector.detect(&frame()).is_ok());
    }
}
