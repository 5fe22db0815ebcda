//! In-memory scene document
//!
//! Stands in for the image editor the tool drives: a fixed-size canvas with
//! an ordered stack of named layers, each holding its own pixel buffer and
//! canvas position. The importer builds one of these from a scene folder and
//! the exporter walks one to produce the folder again. Passed explicitly to
//! every operation; there is no ambient document singleton.

use image::RgbaImage;

/// Canvas width every scene document uses
pub const CANVAS_WIDTH: u32 = 1920;
/// Canvas height every scene document uses
pub const CANVAS_HEIGHT: u32 = 1080;

/// Nominal reference frame centred inside the canvas; manifest offsets are
/// measured relative to this frame's lower-left corner
pub const REFERENCE_WIDTH: u32 = 1366;
pub const REFERENCE_HEIGHT: u32 = 768;

/// Horizontal anchor: (1920 - 1366) / 2 = 277
pub const ANCHOR_X: i32 = ((CANVAS_WIDTH - REFERENCE_WIDTH) / 2) as i32;
/// Vertical anchor: (1080 - 768) / 2 = 156
pub const ANCHOR_Y: i32 = ((CANVAS_HEIGHT - REFERENCE_HEIGHT) / 2) as i32;

/// Name suffix of a unit's visible color layer
pub const IMG_SUFFIX: &str = "[img]";
/// Name suffix of a unit's parallax-depth layer
pub const DPT_SUFFIX: &str = "[dpt]";

/// Canvas placement of a layer unit with facet height `h`, from its
/// manifest offset. Offsets grow up and right from the anchor; canvas y
/// grows down, so the vertical term is flipped.
pub fn placement(offset: crate::manifest::Offset, h: u32) -> (i32, i32) {
    let x = ANCHOR_X + offset.dx;
    let y = CANVAS_HEIGHT as i32 - ANCHOR_Y - h as i32 - offset.dy;
    (x, y)
}

/// Manifest offset of a layer unit from its extracted bounds, the exact
/// inverse of [`placement`]
pub fn offset_of(x: i32, y: i32, h: u32) -> crate::manifest::Offset {
    crate::manifest::Offset::new(
        x - ANCHOR_X,
        CANVAS_HEIGHT as i32 - ANCHOR_Y - y - h as i32,
    )
}

/// An axis-aligned pixel rectangle in canvas space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    /// Smallest rectangle covering both `self` and `other`
    pub fn united(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, (right - x) as u32, (bottom - y) as u32)
    }
}

/// One layer of a scene document
#[derive(Debug, Clone)]
pub struct SceneLayer {
    /// Layer name, usually `{base}[img]` or `{base}[dpt]`
    pub name: String,
    /// Canvas position of the buffer's top-left corner
    pub x: i32,
    pub y: i32,
    pub visible: bool,
    /// 0-255, matches the editor's per-layer opacity
    pub opacity: u8,
    /// The layer's own pixels; the buffer extent is the layer's bounds
    pub pixels: RgbaImage,
}

impl SceneLayer {
    pub fn new(name: impl Into<String>, pixels: RgbaImage) -> Self {
        Self {
            name: name.into(),
            x: 0,
            y: 0,
            visible: true,
            opacity: 255,
            pixels,
        }
    }

    /// Canvas-space extent of this layer's painted pixels
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.pixels.width(), self.pixels.height())
    }

    /// Move the layer's top-left corner to a canvas position
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Read a canvas-space region of this layer into a fresh buffer.
    ///
    /// Pixels outside the layer's own extent come back transparent, so a
    /// union bounding box larger than this layer reads correctly.
    pub fn read_region(&self, region: Rect) -> RgbaImage {
        let mut out = RgbaImage::new(region.w, region.h);
        let bounds = self.bounds();
        for oy in 0..region.h {
            let cy = region.y + oy as i32;
            if cy < bounds.y || cy >= bounds.bottom() {
                continue;
            }
            for ox in 0..region.w {
                let cx = region.x + ox as i32;
                if cx < bounds.x || cx >= bounds.right() {
                    continue;
                }
                let px = *self.pixels.get_pixel((cx - bounds.x) as u32, (cy - bounds.y) as u32);
                out.put_pixel(ox, oy, px);
            }
        }
        out
    }
}

/// A layer unit paired up for export: base name plus its two facets,
/// borrowed from the document in stacking order
#[derive(Debug)]
pub struct LayerPair<'a> {
    pub base: &'a str,
    pub image: &'a SceneLayer,
    pub depth: &'a SceneLayer,
}

/// An ordered stack of layers on a fixed-size canvas
#[derive(Debug, Clone)]
pub struct SceneDocument {
    /// Document name, normally the scene folder's base name
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Bottommost layer first, matching insertion order at the editor root
    pub layers: Vec<SceneLayer>,
}

impl SceneDocument {
    /// Create an empty document at the fixed scene canvas size
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            layers: Vec::new(),
        }
    }

    /// Append a layer on top of the stack
    pub fn add_layer(&mut self, layer: SceneLayer) {
        self.layers.push(layer);
    }

    /// Find a layer by exact name
    pub fn layer_by_name(&self, name: &str) -> Option<&SceneLayer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Pair up `{base}[img]` layers with their `{base}[dpt]` counterparts,
    /// preserving the stacking order of the image facets.
    ///
    /// Fails with [`SceneError::UnpairedLayer`](crate::error::SceneError)
    /// on the first image facet with no depth counterpart, before any
    /// caller gets a chance to write output. Layers carrying neither
    /// suffix are ignored.
    pub fn paired_units(&self) -> Result<Vec<LayerPair<'_>>, crate::error::SceneError> {
        let mut pairs = Vec::new();
        for layer in &self.layers {
            let Some(base) = layer.name.strip_suffix(IMG_SUFFIX) else {
                continue;
            };
            let depth_name = format!("{}{}", base, DPT_SUFFIX);
            let depth = self
                .layer_by_name(&depth_name)
                .ok_or_else(|| crate::error::SceneError::UnpairedLayer(base.to_string()))?;
            pairs.push(LayerPair { base, image: layer, depth });
        }
        Ok(pairs)
    }

    /// Force the bottommost layer opaque and flood it with a solid color.
    ///
    /// Mirrors the editor's post-import step of filling the background
    /// layer with the current foreground color at full opacity. No-op on
    /// an empty document.
    pub fn init_background(&mut self, color: image::Rgba<u8>) {
        if let Some(background) = self.layers.first_mut() {
            for px in background.pixels.pixels_mut() {
                *px = color;
            }
            background.opacity = 255;
        }
    }
}
