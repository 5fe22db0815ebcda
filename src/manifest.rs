//! Scene manifest codec
//!
//! A scene folder carries two parallel text files: a layer list (one base
//! name per line) and a positions list (one "dx, dy" pair per line). The
//! two are correlated by line position, so their decoded lengths must match
//! before anything is zipped by index.

use crate::error::SceneError;

/// File name of the positions manifest inside a scene folder
pub const POSITIONS_FILE: &str = "positions.txt";

/// Canonical file name of the layer list inside a scene folder
pub const LAYERS_FILE: &str = "layers.txt";

/// Legacy layer-list file name for a scene folder named `name`
///
/// Older scene folders keyed the list to the folder name. Accepted on read
/// only; new exports always write [`LAYERS_FILE`].
pub fn legacy_layers_file(folder_name: &str) -> String {
    format!("{}_map.txt", folder_name)
}

/// Canvas-space placement offset of one layer unit, relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Decode a layer list: one base name per line, blank lines dropped
///
/// Order and duplicates are preserved. A few legacy known-scene lists repeat
/// a name on purpose (the same art used at two depths), so no deduplication.
pub fn decode_layer_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decode a positions list: one "dx, dy" pair per line, blank lines dropped
pub fn decode_positions(text: &str) -> Result<Vec<Offset>, SceneError> {
    let mut offsets = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let mut fields = line.split(", ");
        let dx = parse_coord(fields.next(), line)?;
        let dy = parse_coord(fields.next(), line)?;
        // Extra fields are ignored; only the first two are meaningful.
        offsets.push(Offset::new(dx, dy));
    }
    Ok(offsets)
}

fn parse_coord(field: Option<&str>, line: &str) -> Result<i32, SceneError> {
    let field = field.ok_or_else(|| {
        SceneError::Format(format!("expected \"dx, dy\" pair, got {:?}", line))
    })?;
    field.parse::<i32>().map_err(|_| {
        SceneError::Format(format!("invalid integer {:?} in line {:?}", field, line))
    })
}

/// Encode a layer list: newline-joined, no trailing newline
pub fn encode_layer_list<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|n| n.as_ref())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Encode a positions list: one "dx, dy" line per offset, each terminated
pub fn encode_positions(offsets: &[Offset]) -> String {
    let mut out = String::new();
    for o in offsets {
        out.push_str(&format!("{}, {}\n", o.dx, o.dy));
    }
    out
}

/// Require the two manifest halves to line up before zipping by index
pub fn check_lengths(names: usize, positions: usize) -> Result<(), SceneError> {
    if names != positions {
        return Err(SceneError::LengthMismatch { names, positions });
    }
    Ok(())
}
