//! Workspace persistence
//!
//! A workspace is the editable form of an imported scene: a directory with
//! a `document.ron` describing the layer stack and one PNG per layer
//! holding that layer's pixels. Layer pixel files are numbered, not named,
//! because legacy scenes may repeat a layer name.
//!
//! `document.ron` is written brotli-compressed; reading auto-detects plain
//! RON by its first byte, so hand-edited documents keep working.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::{SceneDocument, SceneLayer};
use crate::error::SceneError;

/// Document metadata file inside a workspace directory
pub const DOCUMENT_FILE: &str = "document.ron";

/// Validation limits for loaded workspace documents
pub mod limits {
    /// Maximum number of layers in a document
    pub const MAX_LAYERS: usize = 512;
    /// Maximum layer or document name length
    pub const MAX_NAME_LEN: usize = 256;
    /// Maximum canvas or layer buffer dimension
    pub const MAX_DIM: u32 = 16384;
}

#[derive(Debug, Serialize, Deserialize)]
struct DocumentMeta {
    name: String,
    width: u32,
    height: u32,
    layers: Vec<LayerMeta>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LayerMeta {
    name: String,
    x: i32,
    y: i32,
    visible: bool,
    opacity: u8,
    /// Pixel PNG file name within the workspace directory
    file: String,
}

fn validate_meta(meta: &DocumentMeta) -> Result<(), SceneError> {
    if meta.layers.len() > limits::MAX_LAYERS {
        return Err(SceneError::ValidationError(format!(
            "too many layers ({} > {})",
            meta.layers.len(),
            limits::MAX_LAYERS
        )));
    }
    if meta.name.len() > limits::MAX_NAME_LEN {
        return Err(SceneError::ValidationError("document name too long".to_string()));
    }
    if meta.width == 0 || meta.height == 0 || meta.width > limits::MAX_DIM || meta.height > limits::MAX_DIM {
        return Err(SceneError::ValidationError(format!(
            "invalid canvas size {}x{}",
            meta.width, meta.height
        )));
    }
    for layer in &meta.layers {
        if layer.name.len() > limits::MAX_NAME_LEN {
            return Err(SceneError::ValidationError(format!(
                "layer name too long ({} chars)",
                layer.name.len()
            )));
        }
        if layer.file.contains('/') || layer.file.contains('\\') {
            return Err(SceneError::ValidationError(format!(
                "layer file {:?} must be a bare file name",
                layer.file
            )));
        }
    }
    Ok(())
}

/// Save a document to a workspace directory, creating it if needed
pub fn save_workspace(doc: &SceneDocument, dir: &Path) -> Result<(), SceneError> {
    fs::create_dir_all(dir)?;

    let mut layers = Vec::with_capacity(doc.layers.len());
    for (i, layer) in doc.layers.iter().enumerate() {
        let file = format!("layer-{:03}.png", i);
        layer.pixels.save(dir.join(&file)).map_err(|e| {
            SceneError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("failed to write layer pixels: {}", e),
            ))
        })?;
        layers.push(LayerMeta {
            name: layer.name.clone(),
            x: layer.x,
            y: layer.y,
            visible: layer.visible,
            opacity: layer.opacity,
            file,
        });
    }

    let meta = DocumentMeta {
        name: doc.name.clone(),
        width: doc.width,
        height: doc.height,
        layers,
    };

    let config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());
    let ron_string = ron::ser::to_string_pretty(&meta, config)?;

    // Compress with brotli (quality 6, window 22 - good balance of speed/ratio)
    let mut compressed = Vec::new();
    brotli::BrotliCompress(
        &mut Cursor::new(ron_string.as_bytes()),
        &mut compressed,
        &brotli::enc::BrotliEncoderParams {
            quality: 6,
            lgwin: 22,
            ..Default::default()
        },
    )
    .map_err(|e| {
        SceneError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("brotli compression failed: {}", e),
        ))
    })?;

    fs::write(dir.join(DOCUMENT_FILE), compressed)?;
    Ok(())
}

/// Load a document from a workspace directory (plain or compressed RON)
pub fn load_workspace(dir: &Path) -> Result<SceneDocument, SceneError> {
    let bytes = fs::read(dir.join(DOCUMENT_FILE))?;

    // Detect format: RON files start with '(' or whitespace, brotli is binary
    let is_plain_ron = bytes
        .first()
        .map(|&b| b == b'(' || b == b' ' || b == b'\n' || b == b'\r' || b == b'\t')
        .unwrap_or(false);

    let contents = if is_plain_ron {
        String::from_utf8(bytes).map_err(|e| {
            SceneError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("invalid UTF-8: {}", e),
            ))
        })?
    } else {
        let mut decompressed = Vec::new();
        brotli::BrotliDecompress(&mut Cursor::new(&bytes), &mut decompressed).map_err(|e| {
            SceneError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("brotli decompression failed: {}", e),
            ))
        })?;
        String::from_utf8(decompressed).map_err(|e| {
            SceneError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("invalid UTF-8 after decompression: {}", e),
            ))
        })?
    };

    let meta: DocumentMeta = ron::from_str(&contents)?;
    validate_meta(&meta)?;

    let mut doc = SceneDocument {
        name: meta.name,
        width: meta.width,
        height: meta.height,
        layers: Vec::with_capacity(meta.layers.len()),
    };
    for layer in meta.layers {
        let path = dir.join(&layer.file);
        let pixels = image::open(&path)
            .map_err(|e| {
                SceneError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("{}: {}", path.display(), e),
                ))
            })?
            .to_rgba8();
        if pixels.width() > limits::MAX_DIM || pixels.height() > limits::MAX_DIM {
            return Err(SceneError::ValidationError(format!(
                "layer buffer {} too large",
                layer.file
            )));
        }
        let mut scene_layer = SceneLayer::new(layer.name, pixels);
        scene_layer.move_to(layer.x, layer.y);
        scene_layer.visible = layer.visible;
        scene_layer.opacity = layer.opacity;
        doc.layers.push(scene_layer);
    }
    Ok(doc)
}
