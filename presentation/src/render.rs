use application::SlotSummary;
use colored::{ColoredString, Colorize};
use domain::Draft;

pub const TITLE: &str = "CrossFit Class Schedule";

/// `count / capacity`, green with room to spare, yellow when two or fewer
/// places are left, red when full.
pub fn count_badge(count: usize, capacity: usize) -> ColoredString {
    let text = format!("{} / {}", count, capacity);
    if count >= capacity {
        text.red().bold()
    } else if capacity - count <= 2 {
        text.yellow()
    } else {
        text.green()
    }
}

pub fn slot_header(summary: &SlotSummary<'_>) -> String {
    format!(
        "{}  {}",
        summary.slot.label.bold(),
        count_badge(summary.count, summary.capacity)
    )
}

pub fn render_slot(summary: &SlotSummary<'_>) -> String {
    let mut out = slot_header(summary);
    if summary.students.is_empty() {
        out.push_str(&format!("\n  {}", "no students yet".italic().dimmed()));
    }
    for (idx, student) in summary.students.iter().enumerate() {
        let line = format!("{:>2}. {}", idx + 1, student);
        // zebra rows
        let line = if idx % 2 == 0 { line.normal() } else { line.dimmed() };
        out.push_str(&format!("\n  {}", line));
    }
    out
}

pub fn render_roster(summaries: &[SlotSummary<'_>]) -> String {
    let mut out = format!("{}\n", TITLE.bold().underline());
    for summary in summaries {
        out.push('\n');
        out.push_str(&render_slot(summary));
        out.push('\n');
    }
    out
}

pub fn render_draft(draft: &Draft, slot_label: &str) -> String {
    let plan = draft
        .plan
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{} {}\n  Student: {}\n  Plan:    {}",
        "New student for".bold(),
        slot_label.bold(),
        if draft.name.is_empty() { "-" } else { draft.name.as_str() },
        plan
    )
}
