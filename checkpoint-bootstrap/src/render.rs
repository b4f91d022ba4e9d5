// Console and JSON rendering for command output

use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;

use checkpoint_application::commands::ReviewReport;
use checkpoint_application::MetricsSnapshot;
use checkpoint_domain::{DecisionResult, Student};

const RULE: &str = "----------------------------------------";

#[derive(Debug, Clone, Serialize)]
pub struct EvaluatedEntry {
    pub position: usize,
    pub result: DecisionResult,
    pub explanation: Option<String>,
}

impl EvaluatedEntry {
    pub fn new(position: usize, result: DecisionResult) -> Self {
        let explanation = result.breakdown().map(|breakdown| breakdown.explanation());
        Self {
            position,
            result,
            explanation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RejectedEntry {
    pub position: usize,
    pub name: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewOutput {
    pub seed_rejections: Vec<String>,
    pub report: ReviewReport,
    pub students_with_violations: Vec<Student>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsSnapshot>,
}

#[derive(Serialize)]
struct EvaluationOutput<'a> {
    results: &'a [EvaluatedEntry],
    rejected: &'a [RejectedEntry],
}

pub fn render_evaluation_json(
    evaluated: &[EvaluatedEntry],
    rejected: &[RejectedEntry],
) -> Result<String> {
    Ok(serde_json::to_string_pretty(&EvaluationOutput {
        results: evaluated,
        rejected,
    })?)
}

pub fn render_review_json(output: &ReviewOutput) -> Result<String> {
    Ok(serde_json::to_string_pretty(output)?)
}

pub fn render_evaluation_text(evaluated: &[EvaluatedEntry], rejected: &[RejectedEntry]) -> String {
    let mut out = String::new();
    for entry in evaluated {
        push_result(&mut out, &format!("Item {}", entry.position), &entry.result);
    }
    if !rejected.is_empty() {
        out.push_str("Rejected intake records:\n");
        for entry in rejected {
            let _ = writeln!(out, "  {}. {}: {}", entry.position, entry.name, entry.error);
        }
    }
    let _ = write!(
        out,
        "Evaluated {} item(s), rejected {}.",
        evaluated.len(),
        rejected.len()
    );
    out
}

pub fn render_review_text(output: &ReviewOutput) -> String {
    let report = &output.report;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Evaluated: {}  Failed: {}  Alerts: {}\n",
        report.evaluations.len(),
        report.failures.len(),
        report.alerts().count()
    );

    for evaluation in &report.evaluations {
        let mut label = format!("Item {}", evaluation.item_id);
        if evaluation.released {
            label.push_str(" (released)");
        }
        push_result(&mut out, &label, &evaluation.result);
    }

    if !report.failures.is_empty() {
        out.push_str("Failed evaluations:\n");
        for failure in &report.failures {
            let _ = writeln!(out, "  {}: {}", failure.item_id, failure.error);
        }
        out.push('\n');
    }

    if output.students_with_violations.is_empty() {
        out.push_str("No students with recorded violations.\n");
    } else {
        out.push_str("Students with violations:\n");
        for student in &output.students_with_violations {
            let items: Vec<String> = student.item_ids().iter().map(ToString::to_string).collect();
            let _ = writeln!(
                out,
                "  {} {} ({}) - {} item(s): {}",
                student.id(),
                student.name(),
                student.course(),
                student.violation_count(),
                items.join(", ")
            );
        }
    }

    if !output.seed_rejections.is_empty() {
        out.push_str("\nRejected intake records:\n");
        for rejection in &output.seed_rejections {
            let _ = writeln!(out, "  {}", rejection);
        }
    }
    out
}

fn push_result(out: &mut String, label: &str, result: &DecisionResult) {
    let threat = result.threat_level();
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{}: {}  {}", label, result.item().name(), threat.status_label());
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Decision: {}", result.decision());
    let _ = writeln!(out, "Threat Level: {}", threat);
    if let Some(score) = result.risk_score() {
        let _ = writeln!(out, "Risk Score: {}", score);
    }
    let _ = writeln!(out, "Reason: {}", result.reason());
    if result.requires_immediate_alert() {
        out.push_str("*** IMMEDIATE ALERT REQUIRED ***\n");
    }
    let _ = writeln!(out, "\n{}\n", result.action_recommendation());
    if let Some(breakdown) = result.breakdown() {
        let _ = writeln!(out, "{}\n", breakdown.explanation());
    }
}
