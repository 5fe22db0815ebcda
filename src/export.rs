//! Scene exporter
//!
//! Walks a document's paired layers, recombines each pair into one split
//! PNG (image half above, depth half below) and produces the two manifest
//! texts. The compute step is pure; writing to disk is a separate step so
//! a failure in the middle of pairing or encoding leaves no files behind.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{imageops, ExtendedColorType, ImageEncoder, RgbaImage};

use crate::document::{self, LayerPair, SceneDocument};
use crate::error::SceneError;
use crate::manifest::{self, Offset};

/// One exported layer unit: its split PNG bytes and manifest offset
#[derive(Debug)]
pub struct ExportedUnit {
    pub name: String,
    pub png: Vec<u8>,
    pub offset: Offset,
}

/// Everything a scene folder is made of, computed but not yet written
#[derive(Debug)]
pub struct SceneExport {
    /// Units in document stacking order
    pub units: Vec<ExportedUnit>,
    /// layers.txt content
    pub layer_list: String,
    /// positions.txt content
    pub positions: String,
}

/// Export a document's paired layers, reporting each unit name as it is
/// composed
pub fn export_scene_with(
    doc: &SceneDocument,
    mut on_unit: impl FnMut(&str),
) -> Result<SceneExport, SceneError> {
    let pairs = doc.paired_units()?;

    let mut units = Vec::with_capacity(pairs.len());
    let mut offsets = Vec::with_capacity(pairs.len());
    for pair in &pairs {
        on_unit(pair.base);
        let (png, offset) = compose_unit(pair)?;
        offsets.push(offset);
        units.push(ExportedUnit { name: pair.base.to_string(), png, offset });
    }

    let names: Vec<&str> = pairs.iter().map(|p| p.base).collect();
    Ok(SceneExport {
        units,
        layer_list: manifest::encode_layer_list(&names),
        positions: manifest::encode_positions(&offsets),
    })
}

/// Export a document's paired layers into split PNGs plus manifest texts
pub fn export_scene(doc: &SceneDocument) -> Result<SceneExport, SceneError> {
    export_scene_with(doc, |_| {})
}

/// Recombine one layer pair into its split PNG and manifest offset.
///
/// Both facets are read at the union of their bounds so they stay aligned
/// even when one extends past the other.
fn compose_unit(pair: &LayerPair<'_>) -> Result<(Vec<u8>, Offset), SceneError> {
    let bounds = pair.image.bounds().united(&pair.depth.bounds());
    let image_half = pair.image.read_region(bounds);
    let depth_half = pair.depth.read_region(bounds);

    let mut combined = RgbaImage::new(bounds.w, 2 * bounds.h);
    imageops::replace(&mut combined, &image_half, 0, 0);
    imageops::replace(&mut combined, &depth_half, 0, bounds.h as i64);

    let png = encode_png(&combined)?;
    Ok((png, document::offset_of(bounds.x, bounds.y, bounds.h)))
}

/// Encode an RGBA buffer as a PNG with alpha, default zlib level,
/// non-indexed color
fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, SceneError> {
    let mut bytes = Vec::new();
    let encoder = PngEncoder::new_with_quality(
        Cursor::new(&mut bytes),
        CompressionType::Default,
        FilterType::Adaptive,
    );
    encoder
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)
        .map_err(|e| {
            SceneError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("PNG encoding failed: {}", e),
            ))
        })?;
    Ok(bytes)
}

/// Write an export to a scene folder: one PNG per unit plus the two
/// manifest files. The destination must already exist.
pub fn write_scene(export: &SceneExport, dest: &Path) -> Result<(), SceneError> {
    if dest.as_os_str().is_empty() || !dest.is_dir() {
        return Err(SceneError::InvalidDestination(dest.to_path_buf()));
    }
    for unit in &export.units {
        fs::write(dest.join(format!("{}.png", unit.name)), &unit.png)?;
    }
    fs::write(dest.join(manifest::LAYERS_FILE), &export.layer_list)?;
    fs::write(dest.join(manifest::POSITIONS_FILE), &export.positions)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{SceneLayer, DPT_SUFFIX, IMG_SUFFIX};
    use crate::import;
    use image::Rgba;
    use tempfile::TempDir;

    fn solid(w: u32, h: u32, color: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(w, h, color)
    }

    fn unit_doc(base: &str, x: i32, y: i32, w: u32, h: u32) -> SceneDocument {
        let mut doc = SceneDocument::new("scene");
        let mut depth = SceneLayer::new(
            format!("{}{}", base, DPT_SUFFIX),
            solid(w, h, Rgba([0, 0, 255, 255])),
        );
        depth.move_to(x, y);
        depth.visible = false;
        doc.add_layer(depth);

        let mut img = SceneLayer::new(
            format!("{}{}", base, IMG_SUFFIX),
            solid(w, h, Rgba([255, 0, 0, 255])),
        );
        img.move_to(x, y);
        doc.add_layer(img);
        doc
    }

    #[test]
    fn test_offset_inversion() {
        // Bounds x=287, y=719, h=200 must come back as dx=10, dy=5.
        let doc = unit_doc("Hills", 287, 719, 60, 200);
        let export = export_scene(&doc).unwrap();
        assert_eq!(export.units[0].offset, Offset::new(10, 5));
        assert_eq!(export.positions, "10, 5\n");
        assert_eq!(export.layer_list, "Hills");
    }

    #[test]
    fn test_composed_png_layout() {
        let doc = unit_doc("Hills", 287, 719, 6, 4);
        let export = export_scene(&doc).unwrap();

        let decoded = image::load_from_memory(&export.units[0].png)
            .unwrap()
            .to_rgba8();
        assert_eq!(decoded.dimensions(), (6, 8));
        // Image half above, depth half below.
        assert_eq!(decoded.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(decoded.get_pixel(0, 4), &Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_union_bounds_keep_facets_aligned() {
        let mut doc = SceneDocument::new("scene");
        let mut depth = SceneLayer::new("A[dpt]", solid(2, 2, Rgba([0, 0, 255, 255])));
        depth.move_to(10, 10);
        doc.add_layer(depth);
        let mut img = SceneLayer::new("A[img]", solid(2, 2, Rgba([255, 0, 0, 255])));
        img.move_to(12, 11);
        doc.add_layer(img);

        let export = export_scene(&doc).unwrap();
        let decoded = image::load_from_memory(&export.units[0].png)
            .unwrap()
            .to_rgba8();
        // Union covers x 10..14, y 10..13 -> 4x3 per half.
        assert_eq!(decoded.dimensions(), (4, 6));
        // Image facet sits at its own corner of the union, padded elsewhere.
        assert_eq!(decoded.get_pixel(2, 1), &Rgba([255, 0, 0, 255]));
        assert_eq!(decoded.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
        // Depth facet occupies the top-left of the lower half.
        assert_eq!(decoded.get_pixel(0, 3), &Rgba([0, 0, 255, 255]));
        assert_eq!(decoded.get_pixel(3, 5), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_unpaired_layer_fails_before_composing() {
        let mut doc = SceneDocument::new("scene");
        doc.add_layer(SceneLayer::new("B[dpt]", solid(1, 1, Rgba([0; 4]))));
        doc.add_layer(SceneLayer::new("B[img]", solid(1, 1, Rgba([0; 4]))));
        doc.add_layer(SceneLayer::new("A[img]", solid(1, 1, Rgba([0; 4]))));

        // Pairing happens before any unit is composed, so a bad pair at the
        // top of the stack still yields no output at all.
        let err = export_scene(&doc).unwrap_err();
        match err {
            SceneError::UnpairedLayer(name) => assert_eq!(name, "A"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_write_scene_rejects_missing_destination() {
        let export = export_scene(&unit_doc("A", 0, 0, 2, 2)).unwrap();
        let err = write_scene(&export, Path::new("/no/such/folder")).unwrap_err();
        assert!(matches!(err, SceneError::InvalidDestination(_)));
    }

    #[test]
    fn test_write_scene_output_files() {
        let dir = TempDir::new().unwrap();
        // Same placement as test_offset_inversion: bounds at (287, 719)
        // with facet height 200 encode as "10, 5".
        let doc = unit_doc("Hills", 287, 719, 60, 200);
        let export = export_scene(&doc).unwrap();
        write_scene(&export, dir.path()).unwrap();

        assert!(dir.path().join("Hills.png").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("layers.txt")).unwrap(),
            "Hills"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("positions.txt")).unwrap(),
            "10, 5\n"
        );
    }

    #[test]
    fn test_export_import_round_trip() {
        let dir = TempDir::new().unwrap();

        let mut doc = SceneDocument::new("scene");
        for (i, base) in ["Far", "Mid", "Near"].iter().enumerate() {
            let mut depth = SceneLayer::new(
                format!("{}{}", base, DPT_SUFFIX),
                solid(20, 10, Rgba([0, 0, 200, 255])),
            );
            depth.move_to(300 + i as i32 * 7, 700 - i as i32 * 11);
            depth.visible = false;
            doc.add_layer(depth);
            let mut img = SceneLayer::new(
                format!("{}{}", base, IMG_SUFFIX),
                solid(20, 10, Rgba([200, 0, 0, 255])),
            );
            img.move_to(300 + i as i32 * 7, 700 - i as i32 * 11);
            doc.add_layer(img);
        }

        let export = export_scene(&doc).unwrap();
        write_scene(&export, dir.path()).unwrap();

        let reimported = import::import_scene(dir.path()).unwrap();
        let re_export = export_scene(&reimported).unwrap();

        assert_eq!(re_export.layer_list, export.layer_list);
        assert_eq!(re_export.positions, export.positions);
    }
}
