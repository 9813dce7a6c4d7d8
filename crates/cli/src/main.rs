mod settings;

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use emojify_core::assets::infrastructure::directory_overlay_store::load_overlay_directory;
use emojify_core::classification::domain::expression::ExpressionThresholds;
use emojify_core::compositing::infrastructure::cpu_overlay_compositor::CpuOverlayCompositor;
use emojify_core::detection::infrastructure::sidecar_face_detector::SidecarFaceDetector;
use emojify_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use emojify_core::imaging::infrastructure::image_file_writer::ImageFileWriter;
use emojify_core::pipeline::emojify_image_use_case::EmojifyImageUseCase;
use emojify_core::pipeline::notifier::Notifier;
use emojify_core::shared::constants::IMAGE_EXTENSIONS;

use settings::Settings;

/// Overlay expression emoji on the faces in a photo.
#[derive(Parser)]
#[command(name = "emojify")]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Output image file.
    output: PathBuf,

    /// JSON face observations for the input (defaults to <input>.faces.json).
    #[arg(long)]
    faces: Option<PathBuf>,

    /// Directory holding the overlay PNGs (smile.png, frown.png, ...).
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Smiling probability above which a face counts as smiling (0.0-1.0).
    #[arg(long)]
    smile_threshold: Option<f32>,

    /// Eye-open probability above which an eye counts as open (0.0-1.0).
    #[arg(long)]
    eye_open_threshold: Option<f32>,

    /// Settings file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Run parameters after merging settings and flags.
#[derive(Debug, PartialEq)]
struct RunConfig {
    faces: PathBuf,
    assets: PathBuf,
    thresholds: ExpressionThresholds,
}

struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref());
    let config = resolve(&cli, &settings)?;
    validate(&cli, &config)?;

    let assets = load_overlay_directory(&config.assets)?;
    if assets.is_empty() {
        return Err(format!("No overlays found in {}", config.assets.display()).into());
    }
    let missing = assets.missing();
    if !missing.is_empty() {
        let names: Vec<_> = missing.iter().map(|c| c.name()).collect();
        log::warn!("Faces classified as {} will not get an overlay", names.join(", "));
    }
    let mut use_case = EmojifyImageUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(ImageFileWriter::new()),
        Box::new(SidecarFaceDetector::new(config.faces)),
        Box::new(CpuOverlayCompositor::new()),
        assets,
        Box::new(StderrNotifier),
    )
    .with_thresholds(config.thresholds);

    let report = use_case.execute(&cli.input, &cli.output)?;
    for (i, face) in report.faces.iter().enumerate() {
        log::info!(
            "Face {i}: {}{}",
            face.category,
            if face.overlay_applied { "" } else { " (no overlay)" }
        );
    }
    log::info!("Output written to {}", cli.output.display());
    Ok(())
}

fn resolve(cli: &Cli, settings: &Settings) -> Result<RunConfig, Box<dyn std::error::Error>> {
    let assets = cli
        .assets
        .clone()
        .or_else(|| settings.assets_dir.clone())
        .ok_or("Overlay directory is required: pass --assets or set assets_dir in settings")?;
    let faces = cli
        .faces
        .clone()
        .unwrap_or_else(|| default_faces_path(&cli.input));
    let thresholds = ExpressionThresholds::new(
        cli.smile_threshold.unwrap_or(settings.smile_threshold),
        cli.eye_open_threshold.unwrap_or(settings.eye_open_threshold),
    );
    Ok(RunConfig {
        faces,
        assets,
        thresholds,
    })
}

fn validate(cli: &Cli, config: &RunConfig) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if !is_image(&cli.output) {
        return Err(format!(
            "Output must have an image extension ({}), got {}",
            IMAGE_EXTENSIONS.join(", "),
            cli.output.display()
        )
        .into());
    }
    if !config.faces.exists() {
        return Err(format!("Face observations not found: {}", config.faces.display()).into());
    }
    if !config.assets.is_dir() {
        return Err(format!("Overlay directory not found: {}", config.assets.display()).into());
    }
    if !(0.0..=1.0).contains(&config.thresholds.smile) {
        return Err(format!(
            "Smile threshold must be between 0.0 and 1.0, got {}",
            config.thresholds.smile
        )
        .into());
    }
    if !(0.0..=1.0).contains(&config.thresholds.eye_open) {
        return Err(format!(
            "Eye-open threshold must be between 0.0 and 1.0, got {}",
            config.thresholds.eye_open
        )
        .into());
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// `photo.jpg` → `photo.faces.json`, next to the input.
fn default_faces_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}.faces.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("emojify").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_faces_path_sits_next_to_input() {
        assert_eq!(
            default_faces_path(Path::new("/photos/party.jpg")),
            PathBuf::from("/photos/party.faces.json")
        );
    }

    #[test]
    fn test_is_image_case_insensitive() {
        assert!(is_image(Path::new("out.PNG")));
        assert!(is_image(Path::new("out.jpeg")));
        assert!(!is_image(Path::new("out.txt")));
        assert!(!is_image(Path::new("out")));
    }

    #[test]
    fn test_flags_override_settings() {
        let settings = Settings {
            smile_threshold: 0.3,
            eye_open_threshold: 0.7,
            assets_dir: Some(PathBuf::from("/settings/emoji")),
        };
        let c = cli(&[
            "in.png",
            "out.png",
            "--assets",
            "/flag/emoji",
            "--smile-threshold",
            "0.2",
        ]);

        let config = resolve(&c, &settings).unwrap();

        assert_eq!(config.assets, PathBuf::from("/flag/emoji"));
        assert_eq!(config.thresholds, ExpressionThresholds::new(0.2, 0.7));
        assert_eq!(config.faces, PathBuf::from("in.faces.json"));
    }

    #[test]
    fn test_settings_fill_missing_flags() {
        let settings = Settings {
            assets_dir: Some(PathBuf::from("/settings/emoji")),
            ..Settings::default()
        };
        let c = cli(&["in.png", "out.png", "--faces", "f.json"]);

        let config = resolve(&c, &settings).unwrap();

        assert_eq!(config.assets, PathBuf::from("/settings/emoji"));
        assert_eq!(config.faces, PathBuf::from("f.json"));
        assert_eq!(config.thresholds, ExpressionThresholds::default());
    }

    #[test]
    fn test_missing_assets_everywhere_is_error() {
        let c = cli(&["in.png", "out.png"]);
        assert!(resolve(&c, &Settings::default()).is_err());
    }

    fn valid_fixture(dir: &Path) -> (Cli, RunConfig) {
        let input = dir.join("in.png");
        let faces = dir.join("in.faces.json");
        fs::write(&input, b"").unwrap();
        fs::write(&faces, b"[]").unwrap();
        let c = cli(&[
            input.to_str().unwrap(),
            dir.join("out.png").to_str().unwrap(),
            "--assets",
            dir.to_str().unwrap(),
        ]);
        let config = resolve(&c, &Settings::default()).unwrap();
        (c, config)
    }

    #[test]
    fn test_validate_accepts_complete_setup() {
        let dir = tempfile::tempdir().unwrap();
        let (c, config) = valid_fixture(dir.path());
        assert!(validate(&c, &config).is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let (c, mut config) = valid_fixture(dir.path());
        config.thresholds.eye_open = 1.5;
        let err = validate(&c, &config).unwrap_err();
        assert!(err.to_string().contains("Eye-open threshold"));
    }

    #[test]
    fn test_validate_rejects_missing_faces_file() {
        let dir = tempfile::tempdir().unwrap();
        let (c, mut config) = valid_fixture(dir.path());
        config.faces = dir.path().join("absent.json");
        assert!(validate(&c, &config).is_err());
    }

    #[test]
    fn test_validate_rejects_non_image_output() {
        let dir = tempfile::tempdir().unwrap();
        let (mut c, config) = valid_fixture(dir.path());
        c.output = dir.path().join("out.txt");
        assert!(validate(&c, &config).is_err());
    }
}
