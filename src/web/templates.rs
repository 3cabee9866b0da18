//! HTML templates for the admin dashboards.
//!
//! Pages are assembled from plain string builders; every interpolated value
//! goes through `html_escape`. Client-side scripts live at the bottom of the
//! file as raw constants.

use html_escape::encode_text;

use super::badges;
use crate::db::{
    CertificateListRow, CertificateStats, FollowUpListRow, FollowUpStats, ReportListRow,
    ReportStats, User, ViolationListRow, ViolationStats,
};
use crate::models::label;

/// Base layout: sidebar navigation, topbar with the signed-in admin, page
/// content, shared modal/toast scaffolding.
#[must_use]
pub fn layout(title: &str, active: &str, user: &User, content: &str, script: &str) -> String {
    let nav = [
        ("/admin/reports", "reports", "Approve Reports"),
        ("/admin/violations", "violations", "Review Violations"),
        ("/admin/certificates", "certificates", "Issue Certificates"),
        ("/admin/follow-ups", "follow-ups", "Track Follow-Up"),
    ]
    .iter()
    .map(|(href, key, text)| {
        let class = if *key == active {
            "nav-item active"
        } else {
            "nav-item"
        };
        format!(r#"<a class="{class}" href="{href}">{text}</a>"#)
    })
    .collect::<String>();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} - Bantay</title>
<link rel="stylesheet" href="/static/dashboard.css">
</head>
<body>
<nav class="sidebar">
<a class="brand" href="/">Bantay</a>
{nav}
</nav>
<main>
<div class="topbar">
<h1>{title}</h1>
<div class="user-chip">{user_name} ({role}) &middot;
<form method="post" action="/api/auth/logout"><button type="submit">Log out</button></form>
</div>
</div>
{content}
<div class="toast" id="toast"></div>
</main>
<script>
{base_script}
{script}
</script>
</body>
</html>"#,
        title = encode_text(title),
        user_name = encode_text(&user.full_name),
        role = encode_text(&user.role),
        base_script = BASE_SCRIPT,
    )
}

#[must_use]
pub fn login_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Sign in - Bantay</title>
<link rel="stylesheet" href="/static/dashboard.css">
</head>
<body>
<div class="login-wrap">
<h1>Bantay</h1>
<p>Fire safety inspection administration</p>
<div class="form-group"><label for="username">Username</label>
<input id="username" autocomplete="username"></div>
<div class="form-group"><label for="password">Password</label>
<input id="password" type="password" autocomplete="current-password"></div>
<button class="btn btn-primary" id="login-btn" style="width: 100%;">Sign in</button>
<p id="login-error" style="color: var(--danger); display: none;"></p>
</div>
<script>{LOGIN_SCRIPT}</script>
</body>
</html>"#
    )
}

#[must_use]
pub fn unauthorized_page() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Unauthorized - Bantay</title>
<link rel="stylesheet" href="/static/dashboard.css">
</head>
<body>
<div class="login-wrap">
<h1>Access denied</h1>
<p>This area is restricted to administrators.</p>
<a class="btn btn-primary" href="/login">Back to sign in</a>
</div>
</body>
</html>"#
        .to_string()
}

/// `2026-08-06` -> `Aug 6, 2026`; anything unparseable renders N/A.
#[must_use]
pub fn format_date(value: &str) -> String {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").map_or_else(
        |_| "N/A".to_string(),
        |date| date.format("%b %-d, %Y").to_string(),
    )
}

fn stat_card(label_text: &str, value: i64, color: &str) -> String {
    format!(
        r#"<div class="stat-card"><div class="stat-value" style="color: {color};">{value}</div><div class="stat-label">{}</div></div>"#,
        encode_text(label_text),
    )
}

fn select_field(name: &str, label_text: &str, options: &[(String, String)], selected: &str) -> String {
    let mut out = format!(
        r#"<div class="filter-group"><label for="{name}">{}</label><select id="{name}" name="{name}">"#,
        encode_text(label_text),
    );
    for (value, text) in options {
        let marker = if value == selected { " selected" } else { "" };
        out.push_str(&format!(
            r#"<option value="{}"{marker}>{}</option>"#,
            encode_text(value),
            encode_text(text),
        ));
    }
    out.push_str("</select></div>");
    out
}

fn text_field(name: &str, label_text: &str, value: &str, placeholder: &str) -> String {
    format!(
        r#"<div class="filter-group"><label for="{name}">{}</label><input id="{name}" name="{name}" value="{}" placeholder="{}"></div>"#,
        encode_text(label_text),
        encode_text(value),
        encode_text(placeholder),
    )
}

fn filter_options(
    fixed: &[(&str, &str)],
    dynamic: Option<&[String]>,
) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = fixed
        .iter()
        .map(|(v, t)| ((*v).to_string(), (*t).to_string()))
        .collect();
    if let Some(values) = dynamic {
        options.extend(values.iter().map(|v| (v.clone(), label(v))));
    }
    options
}

fn empty_state(message: &str) -> String {
    format!(
        r#"<div class="empty-state"><p>{}</p></div>"#,
        encode_text(message)
    )
}

/// Quick status tabs above the table. Other active filters survive the
/// status switch via the query string.
fn status_tabs(base: &str, tabs: &[(&str, &str, i64)], echo: &FilterEcho) -> String {
    let mut keep = String::new();
    for (key, value) in [
        ("date", &echo.date),
        ("search", &echo.search),
        ("barangay", &echo.barangay),
        ("severity", &echo.severity),
        ("establishment_type", &echo.establishment_type),
    ] {
        if !value.is_empty() {
            keep.push_str(&format!("&{key}={}", urlencoding::encode(value)));
        }
    }

    let mut out = String::from(r#"<div class="filter-tabs">"#);
    for (value, text, count) in tabs {
        let class = if echo.status == *value {
            "filter-tab active"
        } else {
            "filter-tab"
        };
        out.push_str(&format!(
            r#"<a class="{class}" href="{base}?status={value}{keep}">{text} <span class="tab-count">{count}</span></a>"#
        ));
    }
    out.push_str("</div>");
    out
}

/// Echoed raw GET parameters, used to re-select filter controls.
#[derive(Debug, Default)]
pub struct FilterEcho {
    pub status: String,
    pub kind: String,
    pub severity: String,
    pub date: String,
    pub search: String,
    pub barangay: String,
    pub establishment: String,
    pub establishment_type: String,
    pub assigned_to: String,
}

// ---------------------------------------------------------------------------
// Reports page
// ---------------------------------------------------------------------------

#[must_use]
pub fn reports_page(
    user: &User,
    echo: &FilterEcho,
    rows: &[ReportListRow],
    stats: &ReportStats,
    barangays: &[String],
    establishment_types: &[String],
) -> String {
    let stats_html = format!(
        r#"<div class="stats-grid">{}{}{}{}{}{}{}</div>"#,
        stat_card("Total Reports", stats.total, "#3b82f6"),
        stat_card("Pending Review", stats.pending_review, "#f59e0b"),
        stat_card("Submitted", stats.submitted, "#3b82f6"),
        stat_card("Under Review", stats.under_review, "#8b5cf6"),
        stat_card("Approved", stats.approved, "#10b981"),
        stat_card("Rejected", stats.rejected, "#dc2626"),
        stat_card("Critical Risk", stats.critical_risk, "#7c2d12"),
    );

    let tabs = status_tabs(
        "/admin/reports",
        &[
            ("all", "All", stats.total),
            ("pending_review", "Pending Review", stats.pending_review),
            ("submitted", "Submitted", stats.submitted),
            ("under_review", "Under Review", stats.under_review),
            ("approved", "Approved", stats.approved),
            ("rejected", "Rejected", stats.rejected),
        ],
        echo,
    );

    let status_options = filter_options(
        &[
            ("all", "All Reports"),
            ("pending_review", "Pending Review"),
            ("submitted", "Submitted"),
            ("under_review", "Under Review"),
            ("approved", "Approved"),
            ("rejected", "Rejected"),
            ("completed", "Completed"),
            ("revision_requested", "Revision Requested"),
        ],
        None,
    );
    let date_options = filter_options(
        &[
            ("", "All Dates"),
            ("today", "Today"),
            ("yesterday", "Yesterday"),
            ("week", "Last 7 Days"),
            ("month", "Last 30 Days"),
            ("year", "Last Year"),
        ],
        None,
    );
    let barangay_options = filter_options(&[("", "All Barangays")], Some(barangays));
    let type_options = filter_options(&[("", "All Types")], Some(establishment_types));

    let filters_html = format!(
        r#"<div class="filters"><form method="get" action="/admin/reports">
{}{}{}{}{}
<div class="filter-actions">
<button class="btn btn-primary" type="submit">Apply</button>
<a class="btn btn-secondary" href="/admin/reports">Clear</a>
<button class="btn btn-secondary" type="button" data-action="summary">Export Summary</button>
</div>
</form></div>"#,
        select_field("status", "Status", &status_options, &echo.status),
        select_field("date", "Inspection Date", &date_options, &echo.date),
        select_field("barangay", "Barangay", &barangay_options, &echo.barangay),
        select_field(
            "establishment_type",
            "Establishment Type",
            &type_options,
            &echo.establishment_type,
        ),
        text_field(
            "search",
            "Search",
            &echo.search,
            "Report #, establishment, owner...",
        ),
    );

    let table_html = if rows.is_empty() {
        empty_state("No inspection reports match the current filters.")
    } else {
        let mut body = String::new();
        for row in rows {
            let establishment_name = row
                .establishment
                .as_ref()
                .map_or("Unknown", |e| e.establishment_name.as_str());
            let establishment_info = row.establishment.as_ref().map_or_else(String::new, |e| {
                format!("{} · {}", e.establishment_type, e.barangay)
            });
            let can_review = matches!(row.report.status.as_str(), "submitted" | "under_review");
            let can_certify = row.report.status == "approved";

            let mut actions = format!(
                r#"<button class="btn btn-small btn-secondary" data-action="view" data-id="{}">View</button>"#,
                row.report.id
            );
            if can_review {
                actions.push_str(&format!(
                    r#"<button class="btn btn-small btn-primary" data-action="review" data-id="{}">Review</button>"#,
                    row.report.id
                ));
            }
            if can_certify {
                actions.push_str(&format!(
                    r#"<button class="btn btn-small btn-secondary" data-action="certificate" data-id="{}">Certificate</button>"#,
                    row.report.id
                ));
            }

            body.push_str(&format!(
                r#"<tr>
<td><span class="cell-title">{report_number}</span><div class="cell-sub">{inspection_date}</div></td>
<td>{establishment}<div class="cell-sub">{establishment_info}</div></td>
<td>{status}</td>
<td><span class="{compliance_class}">{score}%</span></td>
<td>{risk} {hazard}</td>
<td>{violations}</td>
<td>{inspector}</td>
<td><div class="actions">{actions}</div></td>
</tr>"#,
                report_number = encode_text(&row.report.report_number),
                inspection_date = format_date(&row.report.inspection_date),
                establishment = encode_text(establishment_name),
                establishment_info = encode_text(&establishment_info),
                status = badges::badge(
                    &row.report.status,
                    badges::report_status_color(&row.report.status)
                ),
                compliance_class = badges::compliance_class(row.report.overall_compliance_score),
                score = row.report.overall_compliance_score,
                risk = badges::badge(
                    &row.report.risk_assessment,
                    badges::risk_color(&row.report.risk_assessment)
                ),
                hazard = badges::badge(
                    &row.report.fire_hazard_level,
                    badges::hazard_color(&row.report.fire_hazard_level)
                ),
                violations = format!(
                    "{} critical · {} major · {} minor · {} open",
                    row.violations.critical,
                    row.violations.major,
                    row.violations.minor,
                    row.violations.pending
                ),
                inspector = encode_text(row.inspector_name.as_deref().unwrap_or("N/A")),
            ));
        }

        format!(
            r#"<table class="data-table"><thead><tr>
<th>Report</th><th>Establishment</th><th>Status</th><th>Score</th>
<th>Risk / Hazard</th><th>Violations</th><th>Inspector</th><th>Actions</th>
</tr></thead><tbody>{body}</tbody></table>"#
        )
    };

    let modals = r#"
<div class="modal-overlay" id="details-modal"><div class="modal">
<h2>Report Details</h2>
<div id="details-content"></div>
<div class="modal-actions"><button class="btn btn-secondary" data-close="details-modal">Close</button></div>
</div></div>
<div class="modal-overlay" id="review-modal"><div class="modal">
<h2>Review Report</h2>
<input type="hidden" id="review-id">
<div class="form-group"><label for="review-decision">Decision</label>
<select id="review-decision">
<option value="approve">Approve</option>
<option value="reject">Reject</option>
<option value="revision">Request Revision</option>
</select></div>
<div class="form-group"><label for="review-notes">Review Notes</label>
<textarea id="review-notes"></textarea></div>
<div class="modal-actions">
<button class="btn btn-secondary" data-close="review-modal">Cancel</button>
<button class="btn btn-primary" id="review-submit">Submit Review</button>
</div>
</div></div>
<div class="modal-overlay" id="certificate-modal"><div class="modal">
<h2>Issue Certificate</h2>
<input type="hidden" id="certificate-id">
<div class="form-group"><label for="certificate-type">Certificate Type</label>
<select id="certificate-type">
<option value="fsic_business">FSIC (Business)</option>
<option value="fsic_occupancy">FSIC (Occupancy)</option>
<option value="fsic_special">FSIC (Special Use)</option>
</select></div>
<div class="form-group"><label for="certificate-months">Valid for (months)</label>
<input id="certificate-months" type="number" value="12" min="1" max="60"></div>
<div class="modal-actions">
<button class="btn btn-secondary" data-close="certificate-modal">Cancel</button>
<button class="btn btn-primary" id="certificate-submit">Issue</button>
</div>
</div></div>"#;

    let content = format!("{stats_html}{tabs}{filters_html}{table_html}{modals}");
    layout("Approve Inspection Reports", "reports", user, &content, REPORTS_SCRIPT)
}

// ---------------------------------------------------------------------------
// Violations page
// ---------------------------------------------------------------------------

#[must_use]
pub fn violations_page(
    user: &User,
    echo: &FilterEcho,
    rows: &[ViolationListRow],
    stats: &ViolationStats,
    barangays: &[String],
) -> String {
    let stats_html = format!(
        r#"<div class="stats-grid">{}{}{}{}{}{}{}</div>"#,
        stat_card("Total Violations", stats.total, "#3b82f6"),
        stat_card("Pending", stats.pending, "#3b82f6"),
        stat_card("Overdue", stats.overdue, "#dc2626"),
        stat_card("Past Deadline", stats.past_deadline, "#dc2626"),
        stat_card("Rectified", stats.rectified, "#10b981"),
        stat_card("Escalated", stats.escalated, "#8b5cf6"),
        stat_card("Critical", stats.critical, "#7c2d12"),
    );

    let tabs = status_tabs(
        "/admin/violations",
        &[
            ("all", "All", stats.total),
            ("pending", "Pending", stats.pending),
            ("overdue", "Overdue", stats.overdue),
            ("escalated", "Escalated", stats.escalated),
            ("rectified", "Rectified", stats.rectified),
            ("waived", "Waived", stats.waived),
        ],
        echo,
    );

    let status_options = filter_options(
        &[
            ("all", "All Violations"),
            ("pending", "Pending"),
            ("rectified", "Rectified"),
            ("overdue", "Overdue"),
            ("escalated", "Escalated"),
            ("waived", "Waived"),
        ],
        None,
    );
    let severity_options = filter_options(
        &[
            ("", "All Severities"),
            ("critical", "Critical"),
            ("major", "Major"),
            ("minor", "Minor"),
        ],
        None,
    );
    let date_options = filter_options(
        &[
            ("", "All Dates"),
            ("today", "Today"),
            ("week", "Last 7 Days"),
            ("month", "Last 30 Days"),
            ("overdue", "Past Deadline"),
        ],
        None,
    );
    let barangay_options = filter_options(&[("", "All Barangays")], Some(barangays));

    let filters_html = format!(
        r#"<div class="filters"><form method="get" action="/admin/violations">
{}{}{}{}{}
<div class="filter-actions">
<button class="btn btn-primary" type="submit">Apply</button>
<a class="btn btn-secondary" href="/admin/violations">Clear</a>
<button class="btn btn-secondary" type="button" data-action="export">Export Report</button>
</div>
</form></div>"#,
        select_field("status", "Status", &status_options, &echo.status),
        select_field("severity", "Severity", &severity_options, &echo.severity),
        select_field("date", "Date", &date_options, &echo.date),
        select_field("barangay", "Barangay", &barangay_options, &echo.barangay),
        text_field("search", "Search", &echo.search, "Code, description, establishment..."),
    );

    let bulk_bar = r#"<div class="filters" style="display:flex; gap:10px; align-items:center;">
<span class="cell-sub">With selected:</span>
<select id="bulk-select" style="padding: 8px 10px; border-radius: 8px; border: 1px solid var(--border-color);">
<option value="rectify">Mark Rectified</option>
<option value="escalate">Escalate</option>
<option value="waive">Waive</option>
</select>
<button class="btn btn-small btn-primary" id="bulk-apply">Apply</button>
</div>"#;

    let table_html = if rows.is_empty() {
        empty_state("No violations match the current filters.")
    } else {
        let mut body = String::new();
        for row in rows {
            let establishment_name = row
                .establishment
                .as_ref()
                .map_or("Unknown", |e| e.establishment_name.as_str());
            let report_number = row
                .report
                .as_ref()
                .map_or("N/A", |r| r.report_number.as_str());
            let deadline = row
                .violation
                .compliance_deadline
                .as_deref()
                .map_or_else(|| "N/A".to_string(), format_date);
            let fine = row
                .violation
                .fine_amount
                .map_or_else(|| "—".to_string(), |amount| format!("₱{amount:.2}"));
            let actionable = !matches!(row.violation.status.as_str(), "rectified" | "waived");

            let mut actions = format!(
                r#"<button class="btn btn-small btn-secondary" data-action="view" data-id="{id}">View</button>
<button class="btn btn-small btn-secondary" data-action="edit" data-id="{id}">Edit</button>"#,
                id = row.violation.id
            );
            if actionable {
                actions.push_str(&format!(
                    r#"<button class="btn btn-small btn-primary" data-action="rectify" data-id="{id}">Rectify</button>
<button class="btn btn-small btn-secondary" data-action="escalate" data-id="{id}">Escalate</button>
<button class="btn btn-small btn-secondary" data-action="waive" data-id="{id}">Waive</button>"#,
                    id = row.violation.id
                ));
            }

            body.push_str(&format!(
                r#"<tr>
<td><input type="checkbox" class="bulk-check" value="{id}"></td>
<td><span class="cell-title">{code}</span><div class="cell-sub">{report_number}</div></td>
<td>{description}<div class="cell-sub">{establishment}</div></td>
<td>{severity}</td>
<td>{status}</td>
<td>{deadline}</td>
<td>{fine}</td>
<td><div class="actions">{actions}</div></td>
</tr>"#,
                id = row.violation.id,
                code = encode_text(&row.violation.violation_code),
                report_number = encode_text(report_number),
                description = encode_text(&row.violation.violation_description),
                establishment = encode_text(establishment_name),
                severity = badges::badge(
                    &row.violation.severity,
                    badges::severity_color(&row.violation.severity)
                ),
                status = badges::badge(
                    &row.violation.status,
                    badges::violation_status_color(&row.violation.status)
                ),
                deadline = deadline,
                fine = encode_text(&fine),
            ));
        }

        format!(
            r#"<table class="data-table"><thead><tr>
<th></th><th>Code</th><th>Violation</th><th>Severity</th><th>Status</th>
<th>Deadline</th><th>Fine</th><th>Actions</th>
</tr></thead><tbody>{body}</tbody></table>"#
        )
    };

    let modals = r#"
<div class="modal-overlay" id="details-modal"><div class="modal">
<h2>Violation Details</h2>
<div id="details-content"></div>
<div class="modal-actions"><button class="btn btn-secondary" data-close="details-modal">Close</button></div>
</div></div>
<div class="modal-overlay" id="rectify-modal"><div class="modal">
<h2>Mark Rectified</h2>
<input type="hidden" id="rectify-id">
<div class="form-group"><label for="rectify-notes">Notes</label>
<textarea id="rectify-notes"></textarea></div>
<div class="form-group"><label for="rectify-evidence">Evidence (photo or document)</label>
<input id="rectify-evidence" type="file"></div>
<div class="modal-actions">
<button class="btn btn-secondary" data-close="rectify-modal">Cancel</button>
<button class="btn btn-primary" id="rectify-submit">Mark Rectified</button>
</div>
</div></div>
<div class="modal-overlay" id="escalate-modal"><div class="modal">
<h2>Escalate Violation</h2>
<input type="hidden" id="escalate-id">
<div class="form-group"><label for="escalate-notes">Reason for escalation</label>
<textarea id="escalate-notes"></textarea></div>
<div class="modal-actions">
<button class="btn btn-secondary" data-close="escalate-modal">Cancel</button>
<button class="btn btn-primary" id="escalate-submit">Escalate</button>
</div>
</div></div>
<div class="modal-overlay" id="waive-modal"><div class="modal">
<h2>Waive Violation</h2>
<input type="hidden" id="waive-id">
<div class="form-group"><label for="waive-reason">Reason (required)</label>
<textarea id="waive-reason" required></textarea></div>
<div class="modal-actions">
<button class="btn btn-secondary" data-close="waive-modal">Cancel</button>
<button class="btn btn-primary" id="waive-submit">Waive</button>
</div>
</div></div>
<div class="modal-overlay" id="edit-modal"><div class="modal">
<h2>Edit Violation</h2>
<input type="hidden" id="edit-id">
<div class="form-group"><label for="edit-severity">Severity</label>
<select id="edit-severity">
<option value="critical">Critical</option>
<option value="major">Major</option>
<option value="minor">Minor</option>
</select></div>
<div class="form-group"><label for="edit-fine">Fine Amount</label>
<input id="edit-fine" type="number" min="0" step="0.01"></div>
<div class="form-group"><label for="edit-deadline">Compliance Deadline</label>
<input id="edit-deadline" type="date"></div>
<div class="form-group"><label for="edit-notes">Admin Notes</label>
<textarea id="edit-notes"></textarea></div>
<div class="modal-actions">
<button class="btn btn-secondary" data-close="edit-modal">Cancel</button>
<button class="btn btn-primary" id="edit-submit">Save</button>
</div>
</div></div>"#;

    let content = format!("{stats_html}{tabs}{filters_html}{bulk_bar}{table_html}{modals}");
    layout("Review Violations", "violations", user, &content, VIOLATIONS_SCRIPT)
}

// ---------------------------------------------------------------------------
// Follow-ups page
// ---------------------------------------------------------------------------

#[must_use]
#[allow(clippy::too_many_lines)]
pub fn follow_ups_page(
    user: &User,
    echo: &FilterEcho,
    rows: &[FollowUpListRow],
    stats: &FollowUpStats,
    barangays: &[String],
    establishments: &[(i32, String)],
    employees: &[(i32, String)],
) -> String {
    let stats_html = format!(
        r#"<div class="stats-grid">{}{}{}{}{}{}{}</div>"#,
        stat_card("Total Follow-Ups", stats.total, "#3b82f6"),
        stat_card("Overdue", stats.overdue, "#dc2626"),
        stat_card("Due Today", stats.due_today, "#f97316"),
        stat_card("Pending", stats.pending, "#3b82f6"),
        stat_card("Scheduled", stats.scheduled, "#8b5cf6"),
        stat_card("Completed", stats.completed, "#10b981"),
        stat_card("Compliance Verified", stats.compliance_verified, "#10b981"),
    );

    let status_options = filter_options(
        &[
            ("all", "All Statuses"),
            ("overdue", "Overdue"),
            ("due_soon", "Due Soon"),
            ("pending", "Pending"),
            ("scheduled", "Scheduled"),
            ("in_progress", "In Progress"),
            ("completed", "Completed"),
            ("cancelled", "Cancelled"),
        ],
        None,
    );
    let type_options = filter_options(
        &[
            ("all", "All Types"),
            ("compliance_check", "Compliance Check"),
            ("violation_rectification", "Violation Rectification"),
            ("training", "Training"),
            ("re_inspection", "Re-Inspection"),
            ("other", "Other"),
        ],
        None,
    );
    let date_options = filter_options(
        &[
            ("", "All Dates"),
            ("today", "Today"),
            ("tomorrow", "Tomorrow"),
            ("week", "Next 7 Days"),
            ("overdue", "Overdue"),
        ],
        None,
    );
    let barangay_options = filter_options(&[("", "All Barangays")], Some(barangays));

    let mut establishment_options = vec![(String::new(), "All Establishments".to_string())];
    establishment_options.extend(
        establishments
            .iter()
            .map(|(id, name)| (id.to_string(), name.clone())),
    );

    let mut assignee_options = vec![
        (String::new(), "Anyone".to_string()),
        ("unassigned".to_string(), "Unassigned".to_string()),
    ];
    assignee_options.extend(
        employees
            .iter()
            .map(|(id, name)| (id.to_string(), name.clone())),
    );

    let filters_html = format!(
        r#"<div class="filters"><form method="get" action="/admin/follow-ups">
{}{}{}{}{}{}{}
<div class="filter-actions">
<button class="btn btn-primary" type="submit">Apply</button>
<a class="btn btn-secondary" href="/admin/follow-ups">Clear</a>
</div>
</form></div>"#,
        select_field("status", "Status", &status_options, &echo.status),
        select_field("type", "Type", &type_options, &echo.kind),
        select_field("date", "Scheduled", &date_options, &echo.date),
        select_field("barangay", "Barangay", &barangay_options, &echo.barangay),
        select_field(
            "establishment",
            "Establishment",
            &establishment_options,
            &echo.establishment,
        ),
        select_field("assigned_to", "Assigned To", &assignee_options, &echo.assigned_to),
        text_field("search", "Search", &echo.search, "Establishment, owner, report #..."),
    );

    let table_html = if rows.is_empty() {
        empty_state("No follow-ups match the current filters.")
    } else {
        let mut body = String::new();
        for row in rows {
            let establishment_name = row
                .establishment
                .as_ref()
                .map_or("Unknown", |e| e.establishment_name.as_str());
            let due_text = row.days_until_due.map_or_else(String::new, |days| {
                if days < 0 {
                    format!("{} days overdue", -days)
                } else if days == 0 {
                    "due today".to_string()
                } else {
                    format!("in {days} days")
                }
            });
            let terminal = matches!(row.follow_up.status.as_str(), "completed" | "cancelled");

            let mut actions = String::new();
            if !terminal {
                actions.push_str(&format!(
                    r#"<button class="btn btn-small btn-primary" data-action="update" data-id="{id}">Update</button>
<button class="btn btn-small btn-secondary" data-action="assign" data-id="{id}">Assign</button>
<button class="btn btn-small btn-secondary" data-action="reschedule" data-id="{id}">Reschedule</button>"#,
                    id = row.follow_up.id
                ));
            }

            body.push_str(&format!(
                r#"<tr>
<td><span class="cell-title">{report_number}</span><div class="cell-sub">{kind}</div></td>
<td>{establishment}<div class="cell-sub">{barangay}</div></td>
<td>{scheduled}<div class="cell-sub">{due_text}</div></td>
<td>{priority}</td>
<td>{assigned}</td>
<td>{pending_violations}</td>
<td><div class="actions">{actions}</div></td>
</tr>"#,
                report_number = encode_text(row.report_number.as_deref().unwrap_or("N/A")),
                kind = encode_text(&label(&row.follow_up.follow_up_type)),
                establishment = encode_text(establishment_name),
                barangay = encode_text(
                    row.establishment
                        .as_ref()
                        .map_or("", |e| e.barangay.as_str())
                ),
                scheduled = format_date(&row.follow_up.scheduled_date),
                due_text = encode_text(&due_text),
                priority = badges::badge(
                    row.priority.as_str(),
                    badges::follow_up_status_color(row.priority.as_str())
                ),
                assigned = encode_text(row.assigned_name.as_deref().unwrap_or("Unassigned")),
                pending_violations = row.pending_violations,
            ));
        }

        format!(
            r#"<table class="data-table"><thead><tr>
<th>Report / Type</th><th>Establishment</th><th>Scheduled</th><th>Status</th>
<th>Assigned To</th><th>Open Violations</th><th>Actions</th>
</tr></thead><tbody>{body}</tbody></table>"#
        )
    };

    let mut assign_options = String::new();
    for (id, name) in employees {
        assign_options.push_str(&format!(
            r#"<option value="{id}">{}</option>"#,
            encode_text(name)
        ));
    }

    let modals = format!(
        r#"
<div class="modal-overlay" id="status-modal"><div class="modal">
<h2>Update Follow-Up</h2>
<input type="hidden" id="status-id">
<div class="form-group"><label for="status-value">Status</label>
<select id="status-value">
<option value="in_progress">In Progress</option>
<option value="completed">Completed</option>
<option value="cancelled">Cancelled</option>
</select></div>
<div class="form-group"><label for="status-outcome">Outcome</label>
<textarea id="status-outcome"></textarea></div>
<div class="form-group"><label>
<input id="status-verified" type="checkbox" style="margin-right: 6px;">
Compliance verified (rectifies the report's pending violations)
</label></div>
<div class="modal-actions">
<button class="btn btn-secondary" data-close="status-modal">Cancel</button>
<button class="btn btn-primary" id="status-submit">Save</button>
</div>
</div></div>
<div class="modal-overlay" id="assign-modal"><div class="modal">
<h2>Assign Follow-Up</h2>
<input type="hidden" id="assign-id">
<div class="form-group"><label for="assign-user">Assign to</label>
<select id="assign-user">{assign_options}</select></div>
<div class="modal-actions">
<button class="btn btn-secondary" data-close="assign-modal">Cancel</button>
<button class="btn btn-primary" id="assign-submit">Assign</button>
</div>
</div></div>
<div class="modal-overlay" id="reschedule-modal"><div class="modal">
<h2>Reschedule Follow-Up</h2>
<input type="hidden" id="reschedule-id">
<div class="form-group"><label for="reschedule-date">New date</label>
<input id="reschedule-date" type="date" required></div>
<div class="modal-actions">
<button class="btn btn-secondary" data-close="reschedule-modal">Cancel</button>
<button class="btn btn-primary" id="reschedule-submit">Reschedule</button>
</div>
</div></div>"#
    );

    let content = format!("{stats_html}{filters_html}{table_html}{modals}");
    layout("Track Follow-Up", "follow-ups", user, &content, FOLLOW_UPS_SCRIPT)
}

// ---------------------------------------------------------------------------
// Certificates page
// ---------------------------------------------------------------------------

#[must_use]
pub fn certificates_page(
    user: &User,
    echo: &FilterEcho,
    rows: &[CertificateListRow],
    stats: &CertificateStats,
    barangays: &[String],
    establishment_types: &[String],
) -> String {
    let stats_html = format!(
        r#"<div class="stats-grid">{}{}{}{}{}</div>"#,
        stat_card("Total Certificates", stats.total, "#3b82f6"),
        stat_card("Valid", stats.valid, "#10b981"),
        stat_card("Expiring Soon", stats.expiring_soon, "#f59e0b"),
        stat_card("Expired", stats.expired, "#dc2626"),
        stat_card("Revoked", stats.revoked, "#6b7280"),
    );

    let status_options = filter_options(
        &[
            ("all", "All Certificates"),
            ("valid", "Valid"),
            ("expiring_soon", "Expiring Soon"),
            ("expired", "Expired"),
            ("revoked", "Revoked"),
        ],
        None,
    );
    let type_options = filter_options(
        &[
            ("", "All Types"),
            ("fsic_business", "FSIC (Business)"),
            ("fsic_occupancy", "FSIC (Occupancy)"),
            ("fsic_special", "FSIC (Special Use)"),
        ],
        None,
    );
    let date_options = filter_options(
        &[
            ("", "All Dates"),
            ("today", "Today"),
            ("yesterday", "Yesterday"),
            ("week", "Last 7 Days"),
            ("month", "Last 30 Days"),
            ("year", "Last Year"),
        ],
        None,
    );
    let barangay_options = filter_options(&[("", "All Barangays")], Some(barangays));
    let establishment_type_options = filter_options(&[("", "All Types")], Some(establishment_types));

    let filters_html = format!(
        r#"<div class="filters"><form method="get" action="/admin/certificates">
{}{}{}{}{}{}
<div class="filter-actions">
<button class="btn btn-primary" type="submit">Apply</button>
<a class="btn btn-secondary" href="/admin/certificates">Clear</a>
</div>
</form></div>"#,
        select_field("status", "Validity", &status_options, &echo.status),
        select_field("certificate_type", "Certificate Type", &type_options, &echo.kind),
        select_field("date", "Issue Date", &date_options, &echo.date),
        select_field("barangay", "Barangay", &barangay_options, &echo.barangay),
        select_field(
            "establishment_type",
            "Establishment Type",
            &establishment_type_options,
            &echo.establishment_type,
        ),
        text_field("search", "Search", &echo.search, "Certificate #, establishment..."),
    );

    let table_html = if rows.is_empty() {
        empty_state("No certificates match the current filters.")
    } else {
        let mut body = String::new();
        for row in rows {
            let establishment_name = row
                .establishment
                .as_ref()
                .map_or("Unknown", |e| e.establishment_name.as_str());
            let remaining = row.days_remaining.map_or_else(String::new, |days| {
                if days < 0 {
                    format!("expired {} days ago", -days)
                } else {
                    format!("{days} days remaining")
                }
            });

            let mut actions = format!(
                r#"<a class="btn btn-small btn-secondary" href="/api/certificates/{id}/document" target="_blank">Document</a>"#,
                id = row.certificate.id
            );
            if !row.certificate.revoked {
                actions.push_str(&format!(
                    r#"<button class="btn btn-small btn-secondary" data-action="revoke" data-id="{id}">Revoke</button>"#,
                    id = row.certificate.id
                ));
            }

            body.push_str(&format!(
                r#"<tr>
<td><span class="cell-title">{number}</span><div class="cell-sub">{type_full}</div></td>
<td>{establishment}<div class="cell-sub">{report_number}</div></td>
<td>{issued}</td>
<td>{valid_until}<div class="cell-sub">{remaining}</div></td>
<td>{validity}</td>
<td>{issued_by}</td>
<td><div class="actions">{actions}</div></td>
</tr>"#,
                number = encode_text(&row.certificate.certificate_number),
                type_full = encode_text(&row.certificate.certificate_type_full),
                establishment = encode_text(establishment_name),
                report_number = encode_text(
                    row.report
                        .as_ref()
                        .map_or("N/A", |r| r.report_number.as_str())
                ),
                issued = format_date(&row.certificate.issue_date),
                valid_until = format_date(&row.certificate.valid_until),
                remaining = encode_text(&remaining),
                validity = badges::badge(
                    row.validity.as_str(),
                    badges::validity_color(row.validity.as_str())
                ),
                issued_by = encode_text(row.issued_by_name.as_deref().unwrap_or("N/A")),
            ));
        }

        format!(
            r#"<table class="data-table"><thead><tr>
<th>Certificate</th><th>Establishment</th><th>Issued</th><th>Valid Until</th>
<th>Validity</th><th>Issued By</th><th>Actions</th>
</tr></thead><tbody>{body}</tbody></table>"#
        )
    };

    let modals = r#"
<div class="modal-overlay" id="revoke-modal"><div class="modal">
<h2>Revoke Certificate</h2>
<input type="hidden" id="revoke-id">
<div class="form-group"><label for="revoke-reason">Reason (required)</label>
<textarea id="revoke-reason" required></textarea></div>
<div class="modal-actions">
<button class="btn btn-secondary" data-close="revoke-modal">Cancel</button>
<button class="btn btn-primary" id="revoke-submit">Revoke</button>
</div>
</div></div>"#;

    let content = format!("{stats_html}{filters_html}{table_html}{modals}");
    layout("Issue Certificates", "certificates", user, &content, CERTIFICATES_SCRIPT)
}

// ---------------------------------------------------------------------------
// Client-side scripts
// ---------------------------------------------------------------------------

const BASE_SCRIPT: &str = r#"
function openModal(id) { document.getElementById(id).classList.add('active'); }
function closeModal(id) { document.getElementById(id).classList.remove('active'); }

document.addEventListener('click', (e) => {
    const closer = e.target.closest('[data-close]');
    if (closer) closeModal(closer.dataset.close);
    if (e.target.classList && e.target.classList.contains('modal-overlay')) {
        e.target.classList.remove('active');
    }
});

function toast(kind, message) {
    const el = document.getElementById('toast');
    el.className = 'toast show ' + kind;
    el.textContent = message;
    setTimeout(() => { el.className = 'toast'; }, 3000);
}

async function api(method, url, body) {
    try {
        const opts = { method, headers: {} };
        if (body instanceof FormData) {
            opts.body = body;
        } else if (body !== undefined) {
            opts.headers['Content-Type'] = 'application/json';
            opts.body = JSON.stringify(body);
        }
        const response = await fetch(url, opts);
        return await response.json();
    } catch (err) {
        return { success: false, error: 'Network error' };
    }
}

function handle(data, successMessage) {
    if (data.success) {
        toast('success', successMessage);
        setTimeout(() => location.reload(), 1200);
    } else {
        toast('error', data.error || 'Request failed');
    }
}

function detailRow(label, value) {
    if (value === null || value === undefined || value === '') return '';
    return '<p><strong>' + label + ':</strong> ' + String(value)
        .replace(/&/g, '&amp;').replace(/</g, '&lt;').replace(/>/g, '&gt;') + '</p>';
}
"#;

const LOGIN_SCRIPT: &str = r#"
async function signIn() {
    const error = document.getElementById('login-error');
    error.style.display = 'none';
    try {
        const response = await fetch('/api/auth/login', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({
                username: document.getElementById('username').value,
                password: document.getElementById('password').value,
            }),
        });
        const data = await response.json();
        if (data.success) {
            window.location.href = '/admin/reports';
        } else {
            error.textContent = data.error || 'Sign in failed';
            error.style.display = 'block';
        }
    } catch (err) {
        error.textContent = 'Network error';
        error.style.display = 'block';
    }
}

document.getElementById('login-btn').addEventListener('click', signIn);
document.getElementById('password').addEventListener('keydown', (e) => {
    if (e.key === 'Enter') signIn();
});
"#;

const REPORTS_SCRIPT: &str = r#"
document.addEventListener('click', async (e) => {
    const btn = e.target.closest('[data-action]');
    if (!btn) return;
    const id = btn.dataset.id;

    if (btn.dataset.action === 'view') {
        const content = document.getElementById('details-content');
        content.innerHTML = '<p>Loading...</p>';
        openModal('details-modal');
        const data = await api('GET', '/api/reports/' + id);
        if (!data.success) {
            content.innerHTML = '<p style="color: var(--danger);">' +
                (data.error || 'Failed to load report details') + '</p>';
            return;
        }
        const r = data.data;
        const v = r.violations_summary;
        content.innerHTML =
            detailRow('Report', r.report_number) +
            detailRow('Establishment', r.establishment_name) +
            detailRow('Owner', r.owner_name) +
            detailRow('Address', r.address + ', ' + r.barangay) +
            detailRow('Inspection Date', r.inspection_date) +
            detailRow('Status', r.status) +
            detailRow('Compliance Score', r.overall_compliance_score + '%') +
            detailRow('Risk', r.risk_assessment) +
            detailRow('Hazard', r.fire_hazard_level) +
            detailRow('Violations', v.critical + ' critical, ' + v.major + ' major, ' +
                v.minor + ' minor (' + v.pending + ' open)') +
            detailRow('Inspector', r.inspector_name) +
            detailRow('Reviewer', r.reviewer_name) +
            detailRow('Review Notes', r.admin_review_notes) +
            detailRow('Recommendations', r.recommendations) +
            detailRow('Corrective Actions', r.corrective_actions_required) +
            detailRow('Certificate', r.certificate_number);
    }

    if (btn.dataset.action === 'review') {
        document.getElementById('review-id').value = id;
        openModal('review-modal');
    }

    if (btn.dataset.action === 'certificate') {
        document.getElementById('certificate-id').value = id;
        openModal('certificate-modal');
    }

    if (btn.dataset.action === 'summary') {
        toast('success', 'Generating summary...');
        const params = new URLSearchParams(window.location.search);
        const data = await api('POST', '/api/reports/summary', {
            status: params.get('status'),
            date: params.get('date'),
            search: params.get('search'),
            barangay: params.get('barangay'),
            establishment_type: params.get('establishment_type'),
        });
        if (data.success) {
            window.open(data.data.download_url, '_blank');
        } else {
            toast('error', data.error || 'Failed to generate summary');
        }
    }
});

document.getElementById('review-submit').addEventListener('click', async () => {
    const id = document.getElementById('review-id').value;
    const data = await api('POST', '/api/reports/' + id + '/review', {
        decision: document.getElementById('review-decision').value,
        notes: document.getElementById('review-notes').value || null,
    });
    closeModal('review-modal');
    handle(data, 'Report reviewed');
});

document.getElementById('certificate-submit').addEventListener('click', async () => {
    const id = document.getElementById('certificate-id').value;
    const data = await api('POST', '/api/reports/' + id + '/certificate', {
        certificate_type: document.getElementById('certificate-type').value,
        valid_months: parseInt(document.getElementById('certificate-months').value, 10) || 12,
    });
    closeModal('certificate-modal');
    handle(data, 'Certificate issued');
});
"#;

const VIOLATIONS_SCRIPT: &str = r#"
document.addEventListener('click', async (e) => {
    const btn = e.target.closest('[data-action]');
    if (!btn) return;
    const id = btn.dataset.id;

    if (btn.dataset.action === 'view') {
        const content = document.getElementById('details-content');
        content.innerHTML = '<p>Loading...</p>';
        openModal('details-modal');
        const data = await api('GET', '/api/violations/' + id);
        if (!data.success) {
            content.innerHTML = '<p style="color: var(--danger);">' +
                (data.error || 'Failed to load violation details') + '</p>';
            return;
        }
        const v = data.data;
        content.innerHTML =
            detailRow('Code', v.violation_code) +
            detailRow('Description', v.violation_description) +
            detailRow('Section Violated', v.section_violated) +
            detailRow('Severity', v.severity) +
            detailRow('Status', v.status) +
            detailRow('Fine', v.fine_amount) +
            detailRow('Deadline', v.compliance_deadline) +
            detailRow('Report', v.report_number) +
            detailRow('Establishment', v.establishment_name) +
            detailRow('Owner', v.owner_name) +
            detailRow('Inspector', v.inspector_name) +
            detailRow('Rectified At', v.rectified_at) +
            detailRow('Admin Notes', v.admin_notes) +
            (v.rectified_evidence
                ? '<p><strong>Evidence:</strong> <a href="/uploads/' + v.rectified_evidence +
                  '" target="_blank">view file</a></p>'
                : '');
    }

    if (btn.dataset.action === 'rectify') {
        document.getElementById('rectify-id').value = id;
        openModal('rectify-modal');
    }

    if (btn.dataset.action === 'escalate') {
        document.getElementById('escalate-id').value = id;
        openModal('escalate-modal');
    }

    if (btn.dataset.action === 'waive') {
        document.getElementById('waive-id').value = id;
        openModal('waive-modal');
    }

    if (btn.dataset.action === 'edit') {
        const data = await api('GET', '/api/violations/' + id);
        if (!data.success) {
            toast('error', 'Failed to load violation details');
            return;
        }
        const v = data.data;
        document.getElementById('edit-id').value = id;
        document.getElementById('edit-severity').value = v.severity;
        document.getElementById('edit-fine').value = v.fine_amount || '';
        document.getElementById('edit-deadline').value = v.compliance_deadline || '';
        document.getElementById('edit-notes').value = v.admin_notes || '';
        openModal('edit-modal');
    }

    if (btn.dataset.action === 'export') {
        toast('success', 'Generating violation report...');
        const params = new URLSearchParams(window.location.search);
        const data = await api('POST', '/api/violations/report', {
            status: params.get('status'),
            severity: params.get('severity'),
            date: params.get('date'),
            barangay: params.get('barangay'),
            search: params.get('search'),
        });
        if (data.success) {
            window.open(data.data.download_url, '_blank');
        } else {
            toast('error', data.error || 'Failed to generate report');
        }
    }
});

document.getElementById('rectify-submit').addEventListener('click', async () => {
    const id = document.getElementById('rectify-id').value;
    const form = new FormData();
    form.append('notes', document.getElementById('rectify-notes').value);
    const file = document.getElementById('rectify-evidence').files[0];
    if (file) form.append('evidence', file);
    const data = await api('POST', '/api/violations/' + id + '/rectify', form);
    closeModal('rectify-modal');
    handle(data, 'Violation marked rectified');
});

document.getElementById('escalate-submit').addEventListener('click', async () => {
    const id = document.getElementById('escalate-id').value;
    const data = await api('POST', '/api/violations/' + id + '/escalate', {
        notes: document.getElementById('escalate-notes').value || null,
    });
    closeModal('escalate-modal');
    handle(data, 'Violation escalated');
});

document.getElementById('waive-submit').addEventListener('click', async () => {
    const id = document.getElementById('waive-id').value;
    const reason = document.getElementById('waive-reason').value.trim();
    if (!reason) {
        toast('error', 'A reason is required to waive a violation');
        return;
    }
    const data = await api('POST', '/api/violations/' + id + '/waive', { reason });
    closeModal('waive-modal');
    handle(data, 'Violation waived');
});

document.getElementById('edit-submit').addEventListener('click', async () => {
    const id = document.getElementById('edit-id').value;
    const fine = document.getElementById('edit-fine').value;
    const data = await api('PUT', '/api/violations/' + id, {
        severity: document.getElementById('edit-severity').value,
        fine_amount: fine === '' ? null : parseFloat(fine),
        compliance_deadline: document.getElementById('edit-deadline').value || null,
        admin_notes: document.getElementById('edit-notes').value || null,
    });
    closeModal('edit-modal');
    handle(data, 'Violation updated');
});

document.getElementById('bulk-apply').addEventListener('click', async () => {
    const ids = Array.from(document.querySelectorAll('.bulk-check:checked'))
        .map((c) => parseInt(c.value, 10));
    if (ids.length === 0) {
        toast('error', 'Select at least one violation');
        return;
    }
    const action = document.getElementById('bulk-select').value;
    const data = await api('POST', '/api/violations/bulk', { action, ids });
    handle(data, 'Bulk action applied');
});
"#;

const FOLLOW_UPS_SCRIPT: &str = r#"
document.addEventListener('click', (e) => {
    const btn = e.target.closest('[data-action]');
    if (!btn) return;
    const id = btn.dataset.id;

    if (btn.dataset.action === 'update') {
        document.getElementById('status-id').value = id;
        openModal('status-modal');
    }
    if (btn.dataset.action === 'assign') {
        document.getElementById('assign-id').value = id;
        openModal('assign-modal');
    }
    if (btn.dataset.action === 'reschedule') {
        document.getElementById('reschedule-id').value = id;
        openModal('reschedule-modal');
    }
});

document.getElementById('status-submit').addEventListener('click', async () => {
    const id = document.getElementById('status-id').value;
    const data = await api('POST', '/api/follow-ups/' + id + '/status', {
        status: document.getElementById('status-value').value,
        outcome: document.getElementById('status-outcome').value || null,
        compliance_verified: document.getElementById('status-verified').checked,
    });
    closeModal('status-modal');
    handle(data, 'Follow-up updated');
});

document.getElementById('assign-submit').addEventListener('click', async () => {
    const id = document.getElementById('assign-id').value;
    const data = await api('POST', '/api/follow-ups/' + id + '/assign', {
        assigned_to: parseInt(document.getElementById('assign-user').value, 10),
    });
    closeModal('assign-modal');
    handle(data, 'Follow-up assigned');
});

document.getElementById('reschedule-submit').addEventListener('click', async () => {
    const id = document.getElementById('reschedule-id').value;
    const date = document.getElementById('reschedule-date').value;
    if (!date) {
        toast('error', 'Pick a date first');
        return;
    }
    const data = await api('POST', '/api/follow-ups/' + id + '/reschedule', {
        scheduled_date: date,
    });
    closeModal('reschedule-modal');
    handle(data, 'Follow-up rescheduled');
});
"#;

const CERTIFICATES_SCRIPT: &str = r#"
document.addEventListener('click', (e) => {
    const btn = e.target.closest('[data-action]');
    if (!btn) return;

    if (btn.dataset.action === 'revoke') {
        document.getElementById('revoke-id').value = btn.dataset.id;
        openModal('revoke-modal');
    }
});

document.getElementById('revoke-submit').addEventListener('click', async () => {
    const id = document.getElementById('revoke-id').value;
    const reason = document.getElementById('revoke-reason').value.trim();
    if (!reason) {
        toast('error', 'A reason is required to revoke a certificate');
        return;
    }
    const data = await api('POST', '/api/certificates/' + id + '/revoke', { reason });
    closeModal('revoke-modal');
    handle(data, 'Certificate revoked');
});
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_human_readable() {
        assert_eq!(format_date("2026-08-06"), "Aug 6, 2026");
        assert_eq!(format_date("not-a-date"), "N/A");
        assert_eq!(format_date(""), "N/A");
    }

    #[test]
    fn login_page_has_no_admin_chrome() {
        let html = login_page();
        assert!(html.contains("Sign in"));
        assert!(!html.contains("nav-item"));
    }
}
