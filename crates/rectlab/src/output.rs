//! Text and JSON rendering of engine results.

use std::fmt;

use serde::Serialize;

use rectlab_core::config::{OutputConfig, OutputFormat};
use rectlab_core::{Evaluation, PairReport, Scene};

use crate::commands::fail;

/// Prints `value` as pretty JSON or through `render`, per `out.format`.
pub fn emit<T: Serialize + ?Sized>(
    out: &OutputConfig,
    value: &T,
    render: impl FnOnce(&T) -> String,
) {
    match out.format {
        OutputFormat::Json => match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{json}"),
            Err(e) => fail(format!("could not serialize report: {e}")),
        },
        OutputFormat::Text => print!("{}", render(value)),
    }
}

pub fn render_pair(report: &PairReport) -> String {
    PairText(report).to_string()
}

pub fn render_evaluations(evaluations: &[Evaluation], describe_features: bool) -> String {
    EvaluationsText {
        evaluations,
        describe_features,
    }
    .to_string()
}

pub fn render_scene(scene: &Scene) -> String {
    SceneText(scene).to_string()
}

struct PairText<'a>(&'a PairReport);

impl fmt::Display for PairText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "a: {}", report.a)?;
        writeln!(f, "b: {}", report.b)?;
        match &report.overlap {
            Some(overlap) => {
                writeln!(f, "overlap: {overlap}")?;
                writeln!(f, "a contains b: {}", yes_no(report.a_contains_b))?;
                writeln!(f, "b contains a: {}", yes_no(report.b_contains_a))?;
                if report.features.is_empty() {
                    writeln!(f, "crossings: none")?;
                } else {
                    writeln!(f, "crossings:")?;
                    for feature in &report.features {
                        writeln!(f, "  {feature}")?;
                    }
                }
            }
            None => writeln!(f, "overlap: none")?,
        }
        if report.adjacency.is_empty() {
            return writeln!(f, "adjacency: none");
        }
        writeln!(f, "adjacency:")?;
        for adj in &report.adjacency {
            writeln!(f, "  {adj}")?;
        }
        Ok(())
    }
}

struct EvaluationsText<'a> {
    evaluations: &'a [Evaluation],
    describe_features: bool,
}

impl fmt::Display for EvaluationsText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for evaluation in self.evaluations {
            writeln!(f, "{}:", evaluation.name)?;
            if evaluation.relations.is_empty() {
                writeln!(f, "  no relations")?;
            }
            for relation in &evaluation.relations {
                writeln!(f, "  {relation}")?;
                if self.describe_features {
                    for feature in relation.features() {
                        writeln!(f, "    {feature}")?;
                    }
                }
            }
        }
        Ok(())
    }
}

struct SceneText<'a>(&'a Scene);

impl fmt::Display for SceneText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scene = self.0;
        let width = scene.iter().map(|r| r.name.len()).max().unwrap_or(0);
        for named in scene.iter() {
            writeln!(f, "{:<width$}  {}", named.name, named.rect)?;
        }
        writeln!(f, "{} rectangles", scene.len())
    }
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rectlab_core::{Rect, compare, evaluate};

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect::new(x, y, w, h).unwrap()
    }

    #[test]
    fn pair_text_lists_crossings() {
        // Arrange
        let report = compare(&rect(0, 0, 20, 30), &rect(10, 10, 30, 40));

        // Act
        let text = render_pair(&report);

        // Assert
        assert!(text.contains("overlap: (10,10) 10x20"), "{text}");
        assert!(text.contains("  (20,10)\n"), "{text}");
        assert!(text.contains("  (10,30)\n"), "{text}");
        assert!(text.contains("adjacency: none"), "{text}");
    }

    #[test]
    fn pair_text_lists_adjacency() {
        let report = compare(&rect(0, 0, 20, 30), &rect(20, 10, 20, 40));

        let text = render_pair(&report);

        assert!(text.contains("overlap: none"), "{text}");
        assert!(
            text.contains("Partial Adjacent along (20,10) to (20,30)"),
            "{text}"
        );
    }

    #[test]
    fn evaluation_text_indents_features() {
        // Arrange
        let evaluation = evaluate(&Scene::demo(), "cinder").unwrap();

        // Act
        let with = render_evaluations(std::slice::from_ref(&evaluation), true);
        let without = render_evaluations(&[evaluation], false);

        // Assert
        assert!(with.starts_with("cinder:\n  lantern intersects with cinder\n"), "{with}");
        assert!(with.contains("    (160,225)\n"), "{with}");
        assert!(!without.contains("(160,225)"), "{without}");
    }

    #[test]
    fn evaluation_without_relations_says_so() {
        let evaluation = evaluate(&Scene::demo(), "harbor").unwrap();

        let text = render_evaluations(&[evaluation], true);

        assert_eq!(text, "harbor:\n  no relations\n");
    }

    #[test]
    fn scene_text_aligns_names() {
        let text = render_scene(&Scene::demo());

        assert!(text.contains("keep      (400,25) 100x100\n"), "{text}");
        assert!(text.ends_with("12 rectangles\n"), "{text}");
    }
}
