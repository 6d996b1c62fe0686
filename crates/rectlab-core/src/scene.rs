//! Named rectangles loaded from a TOML file.
//!
//! Names are opaque identifiers chosen by whoever writes the scene; the
//! engine never looks at them.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::error::SceneError;

/// The showcase rectangles, grouped by the relationship they demonstrate.
pub(crate) const DEMO_GROUPS: &[(&str, &[(&str, i32, i32, i32, i32)])] = &[
    (
        "Not intersecting",
        &[
            ("harbor", 10, 25, 150, 150),
            ("meadow", 170, 25, 150, 150),
        ],
    ),
    (
        "Intersecting",
        &[
            ("cinder", 10, 195, 150, 150),
            ("lantern", 140, 225, 100, 100),
        ],
    ),
    (
        "Contained",
        &[
            ("fortress", 400, 25, 300, 300),
            ("keep", 400, 25, 100, 100),
        ],
    ),
    (
        "Adjacent",
        &[
            ("west", 300, 400, 50, 50),
            ("east", 350, 400, 50, 50),
            ("short", 150, 400, 50, 45),
            ("tall", 200, 400, 50, 50),
            ("block", 700, 400, 100, 100),
            ("nub", 800, 425, 50, 50),
        ],
    ),
];

/// A rectangle with a caller-chosen name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRect {
    pub name: String,
    pub rect: Rect,
}

impl NamedRect {
    pub fn new(name: impl Into<String>, rect: Rect) -> Self {
        Self {
            name: name.into(),
            rect,
        }
    }
}

/// An ordered collection of uniquely named rectangles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Scene {
    rects: Vec<NamedRect>,
}

/// On-disk form: a top-level `[[rect]]` array of tables.
#[derive(Debug, Deserialize)]
struct SceneFile {
    #[serde(default)]
    rect: Vec<RectEntry>,
}

#[derive(Debug, Deserialize)]
struct RectEntry {
    name: String,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Scene {
    /// Builds a scene, rejecting repeated names.
    pub fn new(rects: Vec<NamedRect>) -> Result<Self, SceneError> {
        let mut seen = HashSet::new();
        if let Some(dup) = rects.iter().find(|r| !seen.insert(r.name.as_str())) {
            return Err(SceneError::DuplicateName(dup.name.clone()));
        }
        Ok(Self { rects })
    }

    /// Parses a scene from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SceneError> {
        parse(content, "<scene>")
    }

    /// Reads and parses a scene file.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&content, &path.display().to_string())
    }

    /// The built-in showcase scene: two rectangles apart, two
    /// intersecting, a contained pair and three touching pairs.
    pub fn demo() -> Self {
        let rects = DEMO_GROUPS
            .iter()
            .flat_map(|(_, rects)| rects.iter())
            .filter_map(|&(name, x, y, w, h)| {
                Rect::new(x, y, w, h).ok().map(|r| NamedRect::new(name, r))
            })
            .collect();
        Self { rects }
    }

    /// Looks up a rectangle by name.
    pub fn get(&self, name: &str) -> Result<&NamedRect, SceneError> {
        self.rects
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| SceneError::UnknownRectangle(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedRect> {
        self.rects.iter()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

fn parse(content: &str, origin: &str) -> Result<Scene, SceneError> {
    let file: SceneFile = toml::from_str(content).map_err(|e| SceneError::Parse {
        origin: origin.to_string(),
        message: e.to_string(),
    })?;
    let rects = file
        .rect
        .into_iter()
        .map(|e| match Rect::new(e.x, e.y, e.width, e.height) {
            Ok(rect) => Ok(NamedRect::new(e.name, rect)),
            Err(source) => Err(SceneError::InvalidRect {
                name: e.name,
                source,
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Scene::new(rects)
}
