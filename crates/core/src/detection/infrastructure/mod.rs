pub mod sidecar_face_detector;
pub mod static_face_detector;
