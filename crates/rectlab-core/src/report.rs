//! Relationship reports built on the engine.
//!
//! [`compare`] answers every question about one pair of rectangles.
//! [`evaluate`] checks one named rectangle against the rest of a scene and
//! phrases each finding as a sentence naming both rectangles.

use std::fmt;

use serde::Serialize;

use crate::Rect;
use crate::adjacency::{Adjacency, adjacency};
use crate::error::SceneError;
use crate::features::{Feature, features};
use crate::intersect::{contains_with, intersect};
use crate::scene::{NamedRect, Scene};

/// Everything the engine can say about two rectangles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairReport {
    pub a: Rect,
    pub b: Rect,
    pub overlap: Option<Rect>,
    pub a_contains_b: bool,
    pub b_contains_a: bool,
    pub features: Vec<Feature>,
    pub adjacency: Vec<Adjacency>,
}

/// Runs every relationship query on `a` and `b`.
pub fn compare(a: &Rect, b: &Rect) -> PairReport {
    let overlap = intersect(a, b);
    PairReport {
        a: *a,
        b: *b,
        overlap,
        a_contains_b: contains_with(a, b, overlap.as_ref()),
        b_contains_a: contains_with(b, a, overlap.as_ref()),
        features: features(overlap.as_ref(), a, b),
        adjacency: adjacency(a, b),
    }
}

/// One finding about two named rectangles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "relation", rename_all = "snake_case")]
pub enum Relation {
    Adjacent {
        subject: String,
        object: String,
        adjacency: Adjacency,
    },
    Contains {
        outer: String,
        inner: String,
        overlap: Rect,
    },
    ContainedWithin {
        inner: String,
        outer: String,
        overlap: Rect,
    },
    Intersects {
        subject: String,
        object: String,
        overlap: Rect,
        features: Vec<Feature>,
    },
}

impl Relation {
    /// One-line summary, e.g. `"keep is contained within fortress"`.
    pub fn message(&self) -> String {
        match self {
            Self::Adjacent {
                subject,
                object,
                adjacency,
            } => adjacency.describe(subject, object),
            Self::Contains { outer, inner, .. } => format!("{outer} contains {inner}"),
            Self::ContainedWithin { inner, outer, .. } => {
                format!("{inner} is contained within {outer}")
            }
            Self::Intersects {
                subject, object, ..
            } => format!("{subject} intersects with {object}"),
        }
    }

    /// Crossing points and segments, for intersections only.
    pub fn features(&self) -> &[Feature] {
        match self {
            Self::Intersects { features, .. } => features,
            _ => &[],
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// All findings for one rectangle of a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub name: String,
    pub relations: Vec<Relation>,
}

/// Checks the rectangle called `name` against every other rectangle in
/// `scene`, in scene order.
pub fn evaluate(scene: &Scene, name: &str) -> Result<Evaluation, SceneError> {
    let target = scene.get(name)?;
    Ok(evaluate_one(scene, target))
}

/// Evaluates every rectangle of `scene`.
pub fn evaluate_all(scene: &Scene) -> Vec<Evaluation> {
    scene
        .iter()
        .map(|target| evaluate_one(scene, target))
        .collect()
}

fn evaluate_one(scene: &Scene, target: &NamedRect) -> Evaluation {
    let relations = scene
        .iter()
        .filter(|other| other.name != target.name)
        .flat_map(|other| relate(target, other))
        .collect();
    Evaluation {
        name: target.name.clone(),
        relations,
    }
}

fn relate(target: &NamedRect, other: &NamedRect) -> Vec<Relation> {
    let mut relations: Vec<Relation> = adjacency(&other.rect, &target.rect)
        .into_iter()
        .map(|adjacency| Relation::Adjacent {
            subject: other.name.clone(),
            object: target.name.clone(),
            adjacency,
        })
        .collect();

    let Some(overlap) = intersect(&other.rect, &target.rect) else {
        return relations;
    };
    let relation = if contains_with(&target.rect, &other.rect, Some(&overlap)) {
        Relation::Contains {
            outer: target.name.clone(),
            inner: other.name.clone(),
            overlap,
        }
    } else if contains_with(&other.rect, &target.rect, Some(&overlap)) {
        Relation::ContainedWithin {
            inner: target.name.clone(),
            outer: other.name.clone(),
            overlap,
        }
    } else {
        Relation::Intersects {
            subject: other.name.clone(),
            object: target.name.clone(),
            overlap,
            features: features(Some(&overlap), &other.rect, &target.rect),
        }
    };
    relations.push(relation);
    relations
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::adjacency::AdjacencyKind;
    use crate::geometry::{Point, Segment};

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect::new(x, y, w, h).unwrap()
    }

    fn messages(name: &str) -> Vec<String> {
        evaluate(&Scene::demo(), name)
            .unwrap()
            .relations
            .iter()
            .map(Relation::message)
            .collect()
    }

    #[test]
    fn compare_overlapping_pair() {
        // Arrange
        let a = rect(0, 0, 20, 30);
        let b = rect(10, 10, 30, 40);

        // Act
        let report = compare(&a, &b);

        // Assert
        assert_eq!(report.overlap, Some(rect(10, 10, 10, 20)));
        assert!(!report.a_contains_b);
        assert!(!report.b_contains_a);
        assert!(report.adjacency.is_empty());
        let found: HashSet<Feature> = report.features.into_iter().collect();
        assert_eq!(
            found,
            HashSet::from([
                Feature::Point(Point::new(20, 10)),
                Feature::Point(Point::new(10, 30)),
            ])
        );
    }

    #[test]
    fn compare_disjoint_pair() {
        let report = compare(&rect(0, 0, 20, 30), &rect(400, 400, 10, 10));

        assert_eq!(report.overlap, None);
        assert!(report.features.is_empty());
        assert!(report.adjacency.is_empty());
    }

    #[test]
    fn compare_contained_pair() {
        let report = compare(&rect(0, 0, 30, 30), &rect(5, 5, 5, 5));

        assert!(report.a_contains_b);
        assert!(!report.b_contains_a);
    }

    #[test]
    fn compare_touching_pair() {
        // Act
        let report = compare(&rect(0, 0, 20, 30), &rect(0, 30, 20, 30));

        // Assert
        assert_eq!(report.overlap, None);
        assert_eq!(report.adjacency.len(), 1);
        assert_eq!(report.adjacency[0].kind, AdjacencyKind::Proper);
    }

    #[test]
    fn container_reports_contains() {
        assert_eq!(messages("fortress"), vec!["fortress contains keep"]);
    }

    #[test]
    fn contained_reports_contained_within() {
        assert_eq!(messages("keep"), vec!["keep is contained within fortress"]);
    }

    #[test]
    fn intersecting_pair_lists_crossings() {
        // Act
        let evaluation = evaluate(&Scene::demo(), "cinder").unwrap();

        // Assert
        assert_eq!(evaluation.relations.len(), 1);
        let relation = &evaluation.relations[0];
        assert_eq!(relation.message(), "lantern intersects with cinder");
        let found: HashSet<Feature> = relation.features().iter().copied().collect();
        assert_eq!(
            found,
            HashSet::from([
                Feature::Point(Point::new(160, 225)),
                Feature::Point(Point::new(160, 325)),
            ])
        );
    }

    #[test]
    fn touching_pairs_report_adjacency_kind() {
        assert_eq!(messages("west"), vec!["east is Proper Adjacent to west"]);
        assert_eq!(messages("short"), vec!["tall is Sub-Line Adjacent to short"]);
        assert_eq!(messages("block"), vec!["nub is Sub-Line Adjacent to block"]);
    }

    #[test]
    fn adjacency_relation_carries_segment() {
        // Act
        let evaluation = evaluate(&Scene::demo(), "short").unwrap();

        // Assert
        let Relation::Adjacent { adjacency, .. } = &evaluation.relations[0] else {
            panic!("expected adjacency, got {:?}", evaluation.relations[0]);
        };
        assert_eq!(
            adjacency.segment,
            Segment::new(Point::new(200, 400), Point::new(200, 445))
        );
    }

    #[test]
    fn isolated_rect_has_no_relations() {
        assert!(messages("harbor").is_empty());
        assert!(messages("meadow").is_empty());
    }

    #[test]
    fn unknown_target_is_an_error() {
        let result = evaluate(&Scene::demo(), "nobody");

        assert!(matches!(result, Err(SceneError::UnknownRectangle(_))));
    }

    #[test]
    fn evaluate_all_covers_every_rectangle() {
        // Arrange
        let scene = Scene::demo();

        // Act
        let all = evaluate_all(&scene);

        // Assert
        assert_eq!(all.len(), scene.len());
        for evaluation in &all {
            assert_eq!(evaluation, &evaluate(&scene, &evaluation.name).unwrap());
        }
    }

    #[test]
    fn relations_serialize_with_tag() {
        // Arrange
        let evaluation = evaluate(&Scene::demo(), "keep").unwrap();

        // Act
        let json = serde_json::to_value(&evaluation).unwrap();

        // Assert
        assert_eq!(json["name"], "keep");
        assert_eq!(json["relations"][0]["relation"], "contained_within");
        assert_eq!(json["relations"][0]["outer"], "fortress");
    }
}
