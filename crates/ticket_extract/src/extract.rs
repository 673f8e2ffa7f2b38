use std::sync::LazyLock;

use regex::Regex;

use crate::TicketRecord;

/// Title assigned to a section that carries no recognizable title marker.
pub const UNTITLED: &str = "Untitled";

/// The labeled fields a section may carry, in the fixed order they are
/// rendered into the ticket description.
const LABELS: [&str; 4] = [
    "Problem Statement",
    "Description",
    "User Story",
    "Acceptance Criteria",
];

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| regex::Regex::new(r"^\d+\.\s+(.*)$").unwrap());

static NUMBERED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| regex::Regex::new(r"^\s*\d+\.\s+(.*)$").unwrap());

/// Parses summary text into an ordered sequence of ticket records.
///
/// Sections are split on horizontal-rule lines (three or more consecutive
/// dashes on an otherwise blank line). Blank sections are dropped; every
/// other section yields exactly one record, in input order.
#[tracing::instrument(skip(summary))]
pub fn extract_tickets(summary: &str) -> Vec<TicketRecord> {
    let tickets: Vec<TicketRecord> = split_sections(summary)
        .iter()
        .filter(|section| !section.trim().is_empty())
        .map(|section| extract_section(section))
        .collect();

    tracing::debug!(count = tickets.len(), "Extracted ticket records");
    tickets
}

fn split_sections(summary: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current = String::new();

    for line in summary.lines() {
        if is_delimiter_line(line) {
            sections.push(std::mem::take(&mut current));
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    sections.push(current);

    sections
}

fn is_delimiter_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 3 && trimmed.chars().all(|c| c == '-')
}

fn extract_section(section: &str) -> TicketRecord {
    let spans = scan_bold_spans(section);

    let title = spans
        .iter()
        .find(|span| matches!(span.kind, SpanKind::Heading))
        .map(|span| span.name.clone())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());

    TicketRecord {
        title,
        description: compose_description(section, &spans),
    }
}

#[derive(Debug, PartialEq)]
enum SpanKind {
    /// A bold label introducing a field value, e.g. `**User Story:**`.
    Field,
    /// A bold numbered section heading, e.g. `**1. Login Bug**`.
    Heading,
}

#[derive(Debug)]
struct BoldSpan {
    kind: SpanKind,
    /// Label name without the trailing colon, or the heading's title text.
    name: String,
    /// Byte offset of the opening `**`.
    start: usize,
    /// Byte offset just past the closing `**`.
    value_start: usize,
}

/// Scans a section for bold spans that act as structural boundaries.
///
/// Inline emphasis (bold text that is neither a label nor a numbered
/// heading) is ignored, so it never terminates a field capture.
fn scan_bold_spans(section: &str) -> Vec<BoldSpan> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(found) = section[pos..].find("**") {
        let open = pos + found;
        let inner_start = open + 2;
        let Some(found_close) = section[inner_start..].find("**") else {
            break;
        };
        let close = inner_start + found_close;
        let inner = &section[inner_start..close];
        pos = close + 2;

        // boundary markers are single-line tokens
        if inner.contains('\n') {
            continue;
        }

        let trimmed = inner.trim();
        if let Some(label) = trimmed.strip_suffix(':') {
            spans.push(BoldSpan {
                kind: SpanKind::Field,
                name: label.trim().to_string(),
                start: open,
                value_start: close + 2,
            });
        } else if let Some(caps) = HEADING_RE.captures(trimmed) {
            spans.push(BoldSpan {
                kind: SpanKind::Heading,
                name: caps[1].trim().to_string(),
                start: open,
                value_start: close + 2,
            });
        }
    }

    spans
}

/// Captures the value of a labeled field: everything from just past the
/// label up to the next boundary span, or the end of the section.
fn field_value(section: &str, spans: &[BoldSpan], label: &str) -> Option<String> {
    let (idx, span) = spans
        .iter()
        .enumerate()
        .find(|(_, span)| span.kind == SpanKind::Field && span.name == label)?;

    let end = spans
        .get(idx + 1)
        .map(|next| next.start)
        .unwrap_or(section.len());

    let value = section[span.value_start..end].trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn compose_description(section: &str, spans: &[BoldSpan]) -> String {
    let mut blocks = Vec::with_capacity(LABELS.len());

    for label in LABELS {
        let rendered = match field_value(section, spans, label) {
            Some(value) if label == "Acceptance Criteria" => render_acceptance_criteria(&value),
            Some(value) => value,
            None => format!("[Missing {label}]"),
        };
        blocks.push(format!("**{label}:**\n{rendered}"));
    }

    blocks.join("\n\n")
}

/// Re-renders numbered acceptance-criteria lines as bullets. A block with no
/// numbered lines becomes a single bullet of the raw text.
fn render_acceptance_criteria(value: &str) -> String {
    let bullets: Vec<String> = value
        .lines()
        .filter_map(|line| NUMBERED_LINE_RE.captures(line))
        .map(|caps| format!("- {}", caps[1].trim()))
        .collect();

    if bullets.is_empty() {
        format!("- {}", value.trim())
    } else {
        bullets.join("\n")
    }
}
