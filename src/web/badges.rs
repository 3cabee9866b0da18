//! Badge rendering for status, severity, risk, and hazard values.

use html_escape::encode_text;

use crate::models::label;

const DEFAULT_COLOR: &str = "#6b7280";

#[must_use]
pub fn report_status_color(status: &str) -> &'static str {
    match status {
        "submitted" => "#3b82f6",
        "under_review" => "#f59e0b",
        "approved" => "#10b981",
        "rejected" => "#dc2626",
        "completed" => "#6366f1",
        "revision_requested" => "#8b5cf6",
        _ => DEFAULT_COLOR,
    }
}

#[must_use]
pub fn risk_color(level: &str) -> &'static str {
    match level {
        "low" => "#10b981",
        "medium" => "#f59e0b",
        "high" => "#dc2626",
        "critical" => "#7c2d12",
        _ => DEFAULT_COLOR,
    }
}

#[must_use]
pub fn hazard_color(level: &str) -> &'static str {
    match level {
        "low" => "#10b981",
        "medium" => "#f59e0b",
        "high" => "#dc2626",
        "extreme" => "#7c2d12",
        _ => DEFAULT_COLOR,
    }
}

#[must_use]
pub fn severity_color(severity: &str) -> &'static str {
    match severity {
        "critical" => "#7c2d12",
        "major" => "#dc2626",
        "minor" => "#f59e0b",
        _ => DEFAULT_COLOR,
    }
}

#[must_use]
pub fn violation_status_color(status: &str) -> &'static str {
    match status {
        "pending" => "#3b82f6",
        "rectified" => "#10b981",
        "overdue" => "#dc2626",
        "escalated" => "#8b5cf6",
        "waived" => "#6b7280",
        _ => DEFAULT_COLOR,
    }
}

#[must_use]
pub fn follow_up_status_color(status: &str) -> &'static str {
    match status {
        "pending" => "#3b82f6",
        "scheduled" => "#8b5cf6",
        "in_progress" => "#f59e0b",
        "completed" => "#10b981",
        "cancelled" => "#6b7280",
        "overdue" => "#dc2626",
        "due_soon" => "#f97316",
        _ => DEFAULT_COLOR,
    }
}

#[must_use]
pub fn validity_color(status: &str) -> &'static str {
    match status {
        "valid" => "#10b981",
        "expiring_soon" => "#f59e0b",
        "expired" => "#dc2626",
        "revoked" => "#6b7280",
        _ => DEFAULT_COLOR,
    }
}

/// CSS class bucket for a 0-100 compliance score.
#[must_use]
pub const fn compliance_class(score: i32) -> &'static str {
    if score >= 80 {
        "compliance-high"
    } else if score >= 60 {
        "compliance-medium"
    } else if score >= 40 {
        "compliance-low"
    } else {
        "compliance-critical"
    }
}

/// `#rrggbb` -> `r, g, b` for rgba() backgrounds.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> String {
    let hex = hex.trim_start_matches('#');
    let component = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };

    match hex.len() {
        3 => {
            let expand = |i: usize| {
                hex.get(i..=i)
                    .and_then(|s| u8::from_str_radix(&format!("{s}{s}"), 16).ok())
                    .unwrap_or(0)
            };
            format!("{}, {}, {}", expand(0), expand(1), expand(2))
        }
        _ => format!(
            "{}, {}, {}",
            component(0..2),
            component(2..4),
            component(4..6)
        ),
    }
}

/// Pill badge with a translucent background in the given color.
#[must_use]
pub fn badge(value: &str, color: &str) -> String {
    let rgb = hex_to_rgb(color);
    format!(
        r#"<span class="badge" style="background: rgba({rgb}, 0.1); color: {color}; border-color: rgba({rgb}, 0.3);">{}</span>"#,
        encode_text(&label(value)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_rgb_handles_long_and_short_forms() {
        assert_eq!(hex_to_rgb("#dc2626"), "220, 38, 38");
        assert_eq!(hex_to_rgb("#fff"), "255, 255, 255");
        assert_eq!(hex_to_rgb("10b981"), "16, 185, 129");
    }

    #[test]
    fn unknown_values_fall_back_to_gray() {
        assert_eq!(report_status_color("draft"), DEFAULT_COLOR);
        assert_eq!(severity_color("unknown"), DEFAULT_COLOR);
    }

    #[test]
    fn compliance_buckets() {
        assert_eq!(compliance_class(95), "compliance-high");
        assert_eq!(compliance_class(80), "compliance-high");
        assert_eq!(compliance_class(65), "compliance-medium");
        assert_eq!(compliance_class(45), "compliance-low");
        assert_eq!(compliance_class(10), "compliance-critical");
    }

    #[test]
    fn badges_escape_and_humanize() {
        let html = badge("under_review", "#f59e0b");
        assert!(html.contains("Under Review"));
        assert!(html.contains("rgba(245, 158, 11, 0.1)"));
    }
}
