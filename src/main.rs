//! rwscene: import/export tool for layered parallax scene folders
//!
//! A scene folder holds one split PNG per layer unit (image half above,
//! depth half below) plus two parallel manifests: layers.txt and
//! positions.txt. `open` rebuilds the layer stack into an editable
//! workspace directory; `save` recombines a workspace back into a scene
//! folder. Two actions, no resident UI; paths fall back to native file
//! dialogs when omitted.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod document;
mod error;
mod export;
mod import;
mod known_scenes;
mod manifest;
mod workspace;

use std::path::PathBuf;
use std::process::ExitCode;

use indicatif::{ProgressBar, ProgressStyle};

use error::SceneError;

const USAGE: &str = "\
rwscene - layered parallax scene import/export

Usage:
  rwscene open [SCENE] [-w WORKSPACE]   import a scene folder into a workspace
  rwscene save [WORKSPACE] [-o DEST]    export a workspace back to a scene folder

SCENE may be the scene folder or its positions.txt. When SCENE, WORKSPACE
or DEST are omitted, a file dialog asks for them. The workspace defaults
to a '<scene>-workspace' directory next to the scene.
";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("open") => cmd_open(&args[1..]),
        Some("save") => cmd_save(&args[1..]),
        Some("--version" | "-V") => {
            println!("rwscene {}", VERSION);
            return ExitCode::SUCCESS;
        }
        Some("--help" | "-h") | None => {
            print!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Some(other) => {
            eprintln!("unknown command: {}\n\n{}", other, USAGE);
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Split one positional path and one `-flag value` path out of the args
fn parse_args(
    args: &[String],
    flag: &str,
) -> Result<(Option<PathBuf>, Option<PathBuf>), SceneError> {
    let mut positional = None;
    let mut flagged = None;
    let mut it = args.iter();
    while let Some(arg) = it.next() {
        if arg == flag {
            let value = it
                .next()
                .ok_or_else(|| SceneError::Format(format!("{} requires a path argument", flag)))?;
            flagged = Some(PathBuf::from(value));
        } else if positional.is_none() {
            positional = Some(PathBuf::from(arg));
        } else {
            return Err(SceneError::Format(format!("unexpected argument: {}", arg)));
        }
    }
    Ok((positional, flagged))
}

fn cmd_open(args: &[String]) -> Result<(), SceneError> {
    let (scene_arg, workspace_arg) = parse_args(args, "-w")?;

    let scene_dir = match scene_arg {
        Some(path) => scene_folder_from(path)?,
        None => pick_scene_folder()?,
    };

    let manifest = import::read_manifest(&scene_dir)?;
    let workspace_dir = workspace_arg.unwrap_or_else(|| {
        scene_dir.with_file_name(format!("{}-workspace", manifest.scene_name))
    });

    let pb = ProgressBar::new(manifest.names.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Loading scene [{bar:30}] {pos}/{len} {msg}")
            .unwrap(),
    );
    let doc = import::import_scene_from(&manifest, &scene_dir, |name| {
        pb.set_message(name.to_string());
        pb.inc(1);
    })?;
    pb.finish_and_clear();

    workspace::save_workspace(&doc, &workspace_dir)?;
    println!(
        "Opened scene {:?} ({} layers) into {}",
        doc.name,
        doc.layers.len(),
        workspace_dir.display()
    );
    Ok(())
}

fn cmd_save(args: &[String]) -> Result<(), SceneError> {
    let (workspace_arg, dest_arg) = parse_args(args, "-o")?;

    let workspace_dir = match workspace_arg {
        Some(path) => path,
        None => pick_folder("Select the workspace to export")?,
    };
    let dest = match dest_arg {
        Some(path) => path,
        None => pick_folder("The folder to save the scene")?,
    };

    let doc = workspace::load_workspace(&workspace_dir)?;
    let unit_count = doc.paired_units()?.len();

    let pb = ProgressBar::new(unit_count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Saving scene [{bar:30}] {pos}/{len} {msg}")
            .unwrap(),
    );
    let exported = export::export_scene_with(&doc, |name| {
        pb.set_message(name.to_string());
        pb.inc(1);
    })?;
    pb.finish_and_clear();

    export::write_scene(&exported, &dest)?;
    println!(
        "Saved {} layer units to {}",
        exported.units.len(),
        dest.display()
    );
    Ok(())
}

/// Accept either the scene folder itself or its positions.txt
fn scene_folder_from(path: PathBuf) -> Result<PathBuf, SceneError> {
    if path.is_dir() {
        return Ok(path);
    }
    if path
        .file_name()
        .map(|n| n == manifest::POSITIONS_FILE)
        .unwrap_or(false)
    {
        if let Some(parent) = path.parent() {
            return Ok(parent.to_path_buf());
        }
    }
    Err(SceneError::MissingManifest(path))
}

/// Ask for a scene by its positions.txt, like the editor dialog did
fn pick_scene_folder() -> Result<PathBuf, SceneError> {
    let picked = rfd::FileDialog::new()
        .set_title("select positions.txt for the scene")
        .add_filter("positions.txt", &["txt"])
        .pick_file()
        .ok_or_else(|| SceneError::MissingManifest(PathBuf::new()))?;
    scene_folder_from(picked)
}

fn pick_folder(title: &str) -> Result<PathBuf, SceneError> {
    rfd::FileDialog::new()
        .set_title(title)
        .pick_folder()
        .ok_or_else(|| SceneError::InvalidDestination(PathBuf::new()))
}
