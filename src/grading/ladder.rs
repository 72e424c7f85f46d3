/// Ordinal threshold ladders used by the grading policies.
///
/// Each ladder is plain data so the grade, badge, and feedback scales can be
/// tuned independently even though their default boundaries loosely line up.

/// One band of a ladder: applies to any value at or above `min`.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub min: u32,
    pub label: String,
}

/// A descending list of bands plus a fallback for values below every band.
#[derive(Debug, Clone, PartialEq)]
pub struct Ladder {
    bands: Vec<Band>,
    fallback: String,
}

impl Ladder {
    /// Bands must be given in descending `min` order; the first band the
    /// value reaches wins.
    pub fn new(bands: Vec<(u32, &str)>, fallback: &str) -> Self {
        Ladder {
            bands: bands
                .into_iter()
                .map(|(min, label)| Band {
                    min,
                    label: label.to_string(),
                })
                .collect(),
            fallback: fallback.to_string(),
        }
    }

    pub fn pick(&self, value: u32) -> &str {
        self.bands
            .iter()
            .find(|b| value >= b.min)
            .map(|b| b.label.as_str())
            .unwrap_or(&self.fallback)
    }

    /// Letter-grade scale for the weighted 0-100 score.
    pub fn default_grades() -> Self {
        Ladder::new(
            vec![
                (95, "A+"),
                (90, "A"),
                (85, "A-"),
                (80, "B+"),
                (75, "B"),
                (70, "B-"),
                (65, "C+"),
                (60, "C"),
                (50, "D"),
            ],
            "F",
        )
    }

    /// Qualitative badge scale.
    pub fn default_badges() -> Self {
        Ladder::new(
            vec![(95, "Champion"), (85, "Star"), (75, "Solid"), (60, "Rising")],
            "Needs Work",
        )
    }

    /// Feedback sentences, one per score band.
    pub fn default_feedback() -> Self {
        Ladder::new(
            vec![
                (90, "Exceptional contribution. Clear team leader in effort and output."),
                (80, "Strong performance. Consistent and reliable team member."),
                (70, "Good effort. A few more contributions would push you to the top."),
                (60, "Adequate participation. Consider logging more frequent updates."),
            ],
            "Low contribution detected. Improvement needed to avoid free-rider flag.",
        )
    }
}

/// Band of the marks ladder: a grade plus its fixed one-line remark.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkBand {
    pub min: u32,
    pub grade: String,
    pub remark: String,
}

/// Grade-plus-remark ladder for the percentage-share policy. Thresholds are
/// on a 0-100 scale regardless of the configured marks ceiling.
#[derive(Debug, Clone, PartialEq)]
pub struct MarksLadder {
    bands: Vec<MarkBand>,
    fallback: MarkBand,
}

impl MarksLadder {
    pub fn new(bands: Vec<(u32, &str, &str)>, fallback_grade: &str, fallback_remark: &str) -> Self {
        MarksLadder {
            bands: bands
                .into_iter()
                .map(|(min, grade, remark)| MarkBand {
                    min,
                    grade: grade.to_string(),
                    remark: remark.to_string(),
                })
                .collect(),
            fallback: MarkBand {
                min: 0,
                grade: fallback_grade.to_string(),
                remark: fallback_remark.to_string(),
            },
        }
    }

    pub fn pick(&self, marks: u32) -> (&str, &str) {
        let band = self
            .bands
            .iter()
            .find(|b| marks >= b.min)
            .unwrap_or(&self.fallback);
        (&band.grade, &band.remark)
    }

    pub fn default_marks() -> Self {
        MarksLadder::new(
            vec![
                (90, "A+", "Outstanding share of the project work."),
                (80, "A", "Excellent contribution to the team."),
                (70, "B+", "Good, above-average contribution."),
                (60, "B", "Solid contribution with room to grow."),
                (50, "C+", "Fair participation."),
                (40, "C", "Below-average participation."),
                (30, "D+", "Minimal contribution logged."),
                (20, "D", "Very low contribution."),
            ],
            "F",
            "No meaningful contribution recorded.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_ladder_boundaries() {
        let grades = Ladder::default_grades();
        assert_eq!(grades.pick(100), "A+");
        assert_eq!(grades.pick(95), "A+");
        assert_eq!(grades.pick(94), "A");
        assert_eq!(grades.pick(85), "A-");
        assert_eq!(grades.pick(60), "C");
        assert_eq!(grades.pick(59), "D");
        assert_eq!(grades.pick(50), "D");
        assert_eq!(grades.pick(49), "F");
        assert_eq!(grades.pick(0), "F");
    }

    #[test]
    fn test_badge_ladder_boundaries() {
        let badges = Ladder::default_badges();
        assert_eq!(badges.pick(95), "Champion");
        assert_eq!(badges.pick(85), "Star");
        assert_eq!(badges.pick(75), "Solid");
        assert_eq!(badges.pick(60), "Rising");
        assert_eq!(badges.pick(59), "Needs Work");
    }

    #[test]
    fn test_feedback_ladder_bands() {
        let feedback = Ladder::default_feedback();
        assert!(feedback.pick(90).starts_with("Exceptional"));
        assert!(feedback.pick(80).starts_with("Strong"));
        assert!(feedback.pick(70).starts_with("Good effort"));
        assert!(feedback.pick(60).starts_with("Adequate"));
        assert!(feedback.pick(59).starts_with("Low contribution"));
    }

    #[test]
    fn test_marks_ladder_boundaries() {
        let marks = MarksLadder::default_marks();
        assert_eq!(marks.pick(90).0, "A+");
        assert_eq!(marks.pick(85).0, "A");
        assert_eq!(marks.pick(20).0, "D");
        assert_eq!(marks.pick(19).0, "F");
    }

    #[test]
    fn test_ladders_are_independently_configurable() {
        let custom = Ladder::new(vec![(42, "pass")], "fail");
        assert_eq!(custom.pick(42), "pass");
        assert_eq!(custom.pick(41), "fail");
        // Defaults unaffected
        assert_eq!(Ladder::default_grades().pick(42), "F");
    }
}
