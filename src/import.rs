//! Scene importer
//!
//! Rebuilds a scene document from a scene folder: the positions manifest,
//! a layer list (per-folder file or known-scenes fallback), and one split
//! source PNG per layer unit. Single pass, no recovery; any failure aborts
//! the whole import and the partially built document is simply dropped.

use std::fs;
use std::path::Path;

use image::imageops;

use crate::document::{self, SceneDocument, SceneLayer, DPT_SUFFIX, IMG_SUFFIX};
use crate::error::SceneError;
use crate::known_scenes;
use crate::manifest::{self, Offset};

/// The decoded pair of manifest files for a scene folder
#[derive(Debug)]
pub struct SceneManifest {
    /// Scene folder base name; becomes the document name
    pub scene_name: String,
    /// Ordered layer unit base names
    pub names: Vec<String>,
    /// Placement offsets, parallel to `names`
    pub offsets: Vec<Offset>,
}

/// Read and cross-validate both manifest files of a scene folder
pub fn read_manifest(folder: &Path) -> Result<SceneManifest, SceneError> {
    let positions_path = folder.join(manifest::POSITIONS_FILE);
    if !positions_path.exists() {
        return Err(SceneError::MissingManifest(folder.to_path_buf()));
    }
    let offsets = manifest::decode_positions(&fs::read_to_string(&positions_path)?)?;

    let scene_name = folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let names = resolve_layer_list(folder, &scene_name)?;

    manifest::check_lengths(names.len(), offsets.len())?;
    Ok(SceneManifest { scene_name, names, offsets })
}

/// Resolve the ordered layer-name list for a scene folder.
///
/// `layers.txt` is canonical; `{folder}_map.txt` is read for compatibility
/// with older scene folders; the known-scenes table covers legacy scenes
/// that never shipped either file.
fn resolve_layer_list(folder: &Path, scene_name: &str) -> Result<Vec<String>, SceneError> {
    let canonical = folder.join(manifest::LAYERS_FILE);
    if canonical.exists() {
        return Ok(manifest::decode_layer_list(&fs::read_to_string(canonical)?));
    }
    let legacy = folder.join(manifest::legacy_layers_file(scene_name));
    if legacy.exists() {
        return Ok(manifest::decode_layer_list(&fs::read_to_string(legacy)?));
    }
    if let Some(names) = known_scenes::lookup(scene_name) {
        return Ok(names.iter().map(|n| n.to_string()).collect());
    }
    Err(SceneError::MissingLayerList(folder.to_path_buf()))
}

/// Load one unit's source PNG and split it into its two facet layers.
///
/// Returns `(depth, image)`: the depth facet comes back hidden, the image
/// facet visible, both placed at the unit's canvas position. The source
/// file holds the image half in its upper rows and the depth half in its
/// lower rows; an odd pixel row is truncated.
pub fn load_unit(
    folder: &Path,
    name: &str,
    offset: Offset,
) -> Result<(SceneLayer, SceneLayer), SceneError> {
    let path = folder.join(format!("{}.png", name));
    if !path.exists() {
        return Err(SceneError::MissingSourceImage(path));
    }
    let source = image::open(&path)
        .map_err(|e| SceneError::MalformedSourceImage(format!("{}: {}", path.display(), e)))?
        .to_rgba8();

    let w = source.width();
    let h = source.height() / 2;
    if h == 0 {
        return Err(SceneError::MalformedSourceImage(format!(
            "{}: height {} cannot hold two facets",
            path.display(),
            source.height()
        )));
    }

    let image_half = imageops::crop_imm(&source, 0, 0, w, h).to_image();
    let depth_half = imageops::crop_imm(&source, 0, h, w, h).to_image();

    let (x, y) = document::placement(offset, h);

    let mut depth = SceneLayer::new(format!("{}{}", name, DPT_SUFFIX), depth_half);
    depth.move_to(x, y);
    depth.visible = false;

    let mut img = SceneLayer::new(format!("{}{}", name, IMG_SUFFIX), image_half);
    img.move_to(x, y);

    Ok((depth, img))
}

/// Realize an already-read manifest into a fresh document, reporting each
/// unit name as it loads.
///
/// Callers that need the manifest up front (for unit counts or the scene
/// name) read it once with [`read_manifest`] and hand it here; the files
/// are not touched again.
pub fn import_scene_from(
    scene: &SceneManifest,
    folder: &Path,
    mut on_unit: impl FnMut(&str),
) -> Result<SceneDocument, SceneError> {
    let mut doc = SceneDocument::new(&scene.scene_name);
    for (name, offset) in scene.names.iter().zip(&scene.offsets) {
        on_unit(name);
        let (depth, img) = load_unit(folder, name, *offset)?;
        doc.add_layer(depth);
        doc.add_layer(img);
    }

    // The editor flood-fills the bottommost layer with the foreground color
    // at full opacity after loading; black is the post-reset default.
    doc.init_background(image::Rgba([0, 0, 0, 255]));
    Ok(doc)
}

/// Import a scene folder into a fresh document, reporting each unit name
/// as it loads
pub fn import_scene_with(
    folder: &Path,
    on_unit: impl FnMut(&str),
) -> Result<SceneDocument, SceneError> {
    let scene = read_manifest(folder)?;
    import_scene_from(&scene, folder, on_unit)
}

/// Import a scene folder into a fresh document
pub fn import_scene(folder: &Path) -> Result<SceneDocument, SceneError> {
    import_scene_with(folder, |_| {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    /// Write a split source PNG: image half red, depth half blue
    fn write_unit_png(dir: &Path, name: &str, w: u32, h: u32) {
        let mut img = RgbaImage::new(w, 2 * h);
        for y in 0..h {
            for x in 0..w {
                img.put_pixel(x, y, Rgba([255, 0, 0, 255]));
                img.put_pixel(x, y + h, Rgba([0, 0, 255, 255]));
            }
        }
        img.save(dir.join(format!("{}.png", name))).unwrap();
    }

    fn write_scene(dir: &Path, units: &[(&str, i32, i32)], w: u32, h: u32) {
        let names: Vec<String> = units.iter().map(|(n, _, _)| n.to_string()).collect();
        std::fs::write(dir.join("layers.txt"), names.join("\n")).unwrap();
        let positions: String = units
            .iter()
            .map(|(_, dx, dy)| format!("{}, {}\n", dx, dy))
            .collect();
        std::fs::write(dir.join("positions.txt"), positions).unwrap();
        for (name, _, _) in units {
            write_unit_png(dir, name, w, h);
        }
    }

    #[test]
    fn test_missing_positions_file() {
        let dir = TempDir::new().unwrap();
        let err = import_scene(dir.path()).unwrap_err();
        assert!(matches!(err, SceneError::MissingManifest(_)));
    }

    #[test]
    fn test_missing_layer_list() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("positions.txt"), "0, 0\n").unwrap();
        let err = import_scene(dir.path()).unwrap_err();
        assert!(matches!(err, SceneError::MissingLayerList(_)));
    }

    #[test]
    fn test_known_scene_fallback_resolves_names() {
        let dir = TempDir::new().unwrap();
        let scene = dir.path().join("White Ghost Slugcat");
        std::fs::create_dir(&scene).unwrap();
        std::fs::write(scene.join("positions.txt"), "0, 0\n0, 0\n0, 0\n").unwrap();
        // Table gives three names; no PNGs exist, so the first one fails.
        let err = import_scene(&scene).unwrap_err();
        match err {
            SceneError::MissingSourceImage(p) => {
                assert!(p.ends_with("White Ghost Bkg.png"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_legacy_map_file_is_read() {
        let dir = TempDir::new().unwrap();
        let scene = dir.path().join("somewhere");
        std::fs::create_dir(&scene).unwrap();
        std::fs::write(scene.join("positions.txt"), "3, 4\n").unwrap();
        std::fs::write(scene.join("somewhere_map.txt"), "Only").unwrap();
        write_unit_png(&scene, "Only", 8, 4);

        let doc = import_scene(&scene).unwrap();
        assert_eq!(doc.layers.len(), 2);
        assert_eq!(doc.layers[1].name, "Only[img]");
    }

    #[test]
    fn test_length_mismatch_fails_fast() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("positions.txt"), "0, 0\n1, 1\n").unwrap();
        std::fs::write(dir.path().join("layers.txt"), "A\n").unwrap();
        let err = import_scene(dir.path()).unwrap_err();
        assert!(matches!(err, SceneError::LengthMismatch { names: 1, positions: 2 }));
    }

    #[test]
    fn test_unit_split_and_placement() {
        let dir = TempDir::new().unwrap();
        write_scene(dir.path(), &[("Hills", 10, 5)], 60, 200);

        let doc = import_scene(dir.path()).unwrap();
        assert_eq!(doc.width, 1920);
        assert_eq!(doc.height, 1080);
        assert_eq!(doc.layers.len(), 2);

        let depth = &doc.layers[0];
        let img = &doc.layers[1];
        assert_eq!(depth.name, "Hills[dpt]");
        assert!(!depth.visible);
        assert_eq!(img.name, "Hills[img]");
        assert!(img.visible);

        // x = 277 + 10, y = 1080 - 156 - 200 - 5
        assert_eq!((img.x, img.y), (287, 719));
        assert_eq!((depth.x, depth.y), (287, 719));
        assert_eq!(img.pixels.dimensions(), (60, 200));

        // Image facet is the upper file half (red); depth is the lower
        // (blue). The background fill blackens the bottom layer, which is
        // the depth facet here, so check the image facet for color.
        assert_eq!(img.pixels.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_odd_height_is_floored() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("layers.txt"), "Odd").unwrap();
        std::fs::write(dir.path().join("positions.txt"), "0, 0\n").unwrap();
        let img = RgbaImage::new(4, 7);
        img.save(dir.path().join("Odd.png")).unwrap();

        let doc = import_scene(dir.path()).unwrap();
        assert_eq!(doc.layers[1].pixels.dimensions(), (4, 3));
    }

    #[test]
    fn test_one_pixel_tall_source_is_malformed() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("layers.txt"), "Sliver").unwrap();
        std::fs::write(dir.path().join("positions.txt"), "0, 0\n").unwrap();
        let img = RgbaImage::new(4, 1);
        img.save(dir.path().join("Sliver.png")).unwrap();

        let err = import_scene(dir.path()).unwrap_err();
        assert!(matches!(err, SceneError::MalformedSourceImage(_)));
    }

    #[test]
    fn test_undecodable_png_is_malformed() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("layers.txt"), "Bad").unwrap();
        std::fs::write(dir.path().join("positions.txt"), "0, 0\n").unwrap();
        std::fs::write(dir.path().join("Bad.png"), b"not a png").unwrap();

        let err = import_scene(dir.path()).unwrap_err();
        assert!(matches!(err, SceneError::MalformedSourceImage(_)));
    }

    #[test]
    fn test_stacking_order_matches_list_order() {
        let dir = TempDir::new().unwrap();
        write_scene(dir.path(), &[("Far", 0, 0), ("Near", 1, 2)], 8, 4);

        let doc = import_scene(dir.path()).unwrap();
        let names: Vec<_> = doc.layers.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Far[dpt]", "Far[img]", "Near[dpt]", "Near[img]"]);
    }

    #[test]
    fn test_import_from_read_manifest_matches_direct_import() {
        let dir = TempDir::new().unwrap();
        write_scene(dir.path(), &[("Far", 3, 4), ("Near", -1, 2)], 8, 4);

        // Reading the manifest once and realizing it is the same as the
        // one-shot import; the manifest files are not decoded twice.
        let scene = read_manifest(dir.path()).unwrap();
        let mut seen = Vec::new();
        let from_manifest =
            import_scene_from(&scene, dir.path(), |name| seen.push(name.to_string())).unwrap();
        let direct = import_scene(dir.path()).unwrap();

        assert_eq!(seen, vec!["Far", "Near"]);
        assert_eq!(from_manifest.layers.len(), direct.layers.len());
        for (a, b) in from_manifest.layers.iter().zip(&direct.layers) {
            assert_eq!(a.name, b.name);
            assert_eq!((a.x, a.y), (b.x, b.y));
            assert_eq!(a.visible, b.visible);
        }
    }

    #[test]
    fn test_background_initialized_opaque() {
        let dir = TempDir::new().unwrap();
        write_scene(dir.path(), &[("Far", 0, 0)], 8, 4);

        let doc = import_scene(dir.path()).unwrap();
        let background = &doc.layers[0];
        assert_eq!(background.opacity, 255);
        assert_eq!(background.pixels.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    }
}
