use crate::grading::GradeResult;
use crate::team::TeamMember;

/// One row of the grading report, in the ranked order grading produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub member: String,
    pub percentage: u32,
    pub marks: u32,
    pub grade: String,
    pub remarks: String,
}

/// Build report rows from a grading run, keeping the ranked order.
/// Percentage is looked up from the team statistics the run was fed.
pub fn build_report(results: &[GradeResult], members: &[TeamMember]) -> Vec<ReportRow> {
    results
        .iter()
        .map(|r| {
            let percentage = members
                .iter()
                .find(|m| m.member == r.member)
                .map(|m| m.percentage)
                .unwrap_or(0);
            ReportRow {
                member: r.member.to_string(),
                percentage,
                marks: r.score,
                grade: r.grade.clone(),
                remarks: r.feedback.clone(),
            }
        })
        .collect()
}

/// Serialize report rows to CSV with a header line. Fields containing a
/// comma, quote, or newline are quoted with doubled inner quotes.
pub fn to_csv(rows: &[ReportRow]) -> String {
    let mut out = String::from("member,percentage,marks,grade,remarks\n");
    for row in rows {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            escape(&row.member),
            row.percentage,
            row.marks,
            escape(&row.grade),
            escape(&row.remarks),
        ));
    }
    out
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
