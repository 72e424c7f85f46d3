use std::io::IsTerminal;

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::grading::{GradeResult, GradingSummary};
use crate::team::TeamStats;
use crate::timeline::{Task, TaskStatus};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn score_bar(score: u32, max: u32) -> String {
    let width = 10usize;
    let filled = if max > 0 {
        (score as usize * width).div_euclid(max as usize).min(width)
    } else {
        0
    };
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

/// Colorize a (possibly padded) grade string by its letter. Padding must
/// happen before colorizing so ANSI escapes do not count toward the width.
fn colored_grade(grade: &str) -> String {
    match grade.trim_start().chars().next() {
        Some('A') => grade.green().bold().to_string(),
        Some('B') => grade.blue().bold().to_string(),
        Some('C') => grade.yellow().bold().to_string(),
        _ => grade.red().bold().to_string(),
    }
}

/// Format ranked grading results as a table.
/// Columns: rank, member, grade, score bar, score, reward.
pub fn format_grade_table(results: &[GradeResult], use_colors: bool) -> String {
    if results.is_empty() {
        return "No members to grade yet.".to_string();
    }

    let mut lines: Vec<String> = results
        .iter()
        .enumerate()
        .map(|(idx, r)| {
            let rank = format!("{:>2}.", idx + 1);
            let bar = score_bar(r.score, 100);
            let grade = format!("{:>3}", r.grade);
            if use_colors {
                format!(
                    "{} {:<20} {} [{}] {:>3}  {} reward",
                    rank,
                    r.member.short(),
                    colored_grade(&grade),
                    bar,
                    r.score,
                    r.reward_amount.yellow(),
                )
            } else {
                format!(
                    "{} {:<20} {} [{}] {:>3}  {} reward",
                    rank,
                    r.member.short(),
                    grade,
                    bar,
                    r.score,
                    r.reward_amount,
                )
            }
        })
        .collect();

    let summary = GradingSummary::of(results);
    lines.push(String::new());
    lines.push(format!(
        "Team average: {} | Total reward pool: {:.1} | Sent: {}/{}",
        summary.average_score, summary.total_reward, summary.sent, summary.total
    ));
    lines.join("\n")
}

/// Multi-line detail for one result (verbose mode): breakdown bars,
/// badge, and feedback.
pub fn format_grade_detail(result: &GradeResult, use_colors: bool) -> String {
    let mut lines = Vec::new();
    let header = if use_colors {
        format!(
            "{}  {} ({}/100)",
            result.member.short().bold(),
            colored_grade(&result.grade),
            result.score
        )
    } else {
        format!("{}  {} ({}/100)", result.member.short(), result.grade, result.score)
    };
    lines.push(header);

    for part in &result.breakdown {
        lines.push(format!(
            "  {:<14} {:>2}/{:<2} [{}]",
            part.label,
            part.points,
            part.max,
            score_bar(part.points, part.max)
        ));
    }
    if let Some(badge) = &result.badge {
        lines.push(format!("  Badge: {}", badge));
    }
    lines.push(format!("  Feedback: {}", result.feedback));
    lines.push(format!(
        "  Reward: {} ({})",
        result.reward_amount, result.reward_status
    ));
    if let Some(tx) = &result.tx_ref {
        lines.push(format!("  Tx: {}", tx));
    }
    lines.join("\n")
}

/// Format the task list, flagging overdue tasks.
pub fn format_task_table(tasks: &[Task], today: NaiveDate, use_colors: bool) -> String {
    if tasks.is_empty() {
        return "No tasks yet.".to_string();
    }

    let term_width = get_terminal_width();

    tasks
        .iter()
        .map(|t| {
            let status = match t.status {
                TaskStatus::Todo => "todo",
                TaskStatus::InProgress => "in-progress",
                TaskStatus::Done => "done",
            };
            let overdue = if t.is_overdue(today) { "  OVERDUE" } else { "" };

            // Id, status, assignee, and date columns are fixed; the title
            // absorbs whatever width remains.
            let fixed_width =
                5 + 14 + t.assigned_to.short().len() + 5 + 10 + overdue.len();
            let title = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_text(&t.title, width - fixed_width)
                }
                // Very narrow terminal, show truncated
                Some(_) => truncate_text(&t.title, 20),
                // No terminal (pipe), don't truncate
                None => t.title.clone(),
            };

            let line = format!(
                "#{:<3} [{:<11}] {:<30} {} due {}{}",
                t.id,
                status,
                title,
                t.assigned_to.short(),
                t.due_date,
                overdue,
            );
            if use_colors && t.is_overdue(today) {
                line.red().to_string()
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Dashboard stats summary line.
pub fn format_stats(stats: &TeamStats) -> String {
    format!(
        "{} contributions | {} hours | {} members",
        stats.total_contributions, stats.total_hours, stats.team_size
    )
}
