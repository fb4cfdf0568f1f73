//! Index page renderer.
//!
//! Produces a complete HTML document: add form, actions, summary table and
//! totals. All user-controlled strings are HTML-escaped.

use crate::advisory::Tier;
use crate::summary::{Summary, SummaryRow};
use crate::web::flash::{Notice, NoticeKind};

/// HTML-escape a string for safe insertion into HTML content.
pub fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

fn badge_class(tier: Tier) -> &'static str {
    match tier {
        Tier::Alert => "bg-danger",
        Tier::Warning => "bg-warning text-dark",
        Tier::Ok => "bg-success",
    }
}

fn alert_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "alert-success",
        NoticeKind::Info => "alert-info",
        NoticeKind::Error => "alert-danger",
    }
}

fn render_notice(notice: Option<&Notice>) -> String {
    match notice {
        Some(n) => format!(
            r#"<div class="alert {}" role="alert">{}</div>"#,
            alert_class(n.kind),
            html_escape(&n.message)
        ),
        None => String::new(),
    }
}

fn render_row(row: &SummaryRow) -> String {
    let e = &row.entry;
    format!(
        r#"<tr>
<td>{}</td>
<td>{}</td>
<td>{}</td>
<td>{:.2}</td>
<td>{:.0}</td>
<td><span class="badge {}">{}</span><div>{}</div></td>
</tr>"#,
        html_escape(e.name()),
        e.power_watts(),
        e.hours_per_day(),
        e.monthly_energy_kwh(),
        e.monthly_cost(),
        badge_class(row.tier),
        row.tier.label(),
        html_escape(row.recommendation),
    )
}

fn render_summary(summary: &Summary) -> String {
    if summary.is_empty() {
        return "<p>No appliances recorded yet.</p>".to_string();
    }

    let rows: String = summary.rows.iter().map(render_row).collect();
    let tiers: Vec<String> = summary
        .tier_counts()
        .iter()
        .map(|(tier, count)| format!("{} {}", count, tier.label()))
        .collect();

    format!(
        r#"<table class="table table-sm">
<thead>
<tr><th>Name</th><th>Power (W)</th><th>Hours/day</th><th>kWh/month</th><th>Cost {currency}/month</th><th>Advice</th></tr>
</thead>
<tbody>
{rows}
</tbody>
</table>
<hr>
<p><strong>TOTAL:</strong> {energy:.2} kWh/month | <strong>{cost:.0} {currency}/month</strong></p>
<p class="small text-muted">{tiers}</p>"#,
        currency = summary.currency,
        rows = rows,
        energy = summary.total_energy_kwh,
        cost = summary.total_cost,
        tiers = tiers.join(" · "),
    )
}

/// Render the full index page
pub fn render_index(summary: &Summary, notice: Option<&Notice>) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Household Power Consumption</title>
<link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body class="bg-light">
<nav class="navbar navbar-dark bg-primary mb-4">
<div class="container-fluid"><a class="navbar-brand" href="/">Power Consumption</a></div>
</nav>
<div class="container">
{notice}
<div class="row">
<div class="col-md-5">
<div class="card mb-3">
<div class="card-header">Add appliance</div>
<div class="card-body">
<form method="post" action="/add">
<div class="mb-3"><label class="form-label">Name</label><input class="form-control" name="name" required></div>
<div class="mb-3"><label class="form-label">Power (W)</label><input class="form-control" name="power_watts" type="number" step="any" min="0" required></div>
<div class="mb-3"><label class="form-label">Hours of use per day</label><input class="form-control" name="hours_per_day" type="number" step="any" min="0" required></div>
<button class="btn btn-primary" type="submit">Add</button>
</form>
</div>
</div>
<div class="card">
<div class="card-header">Actions</div>
<div class="card-body">
<a class="btn btn-success mb-2" href="/download">Download CSV</a>
<a class="btn btn-secondary mb-2" href="/clear">Clear data</a>
<p class="small text-muted mt-2">Tariff: <strong>{tariff} {currency}/kWh</strong></p>
</div>
</div>
</div>
<div class="col-md-7">
<div class="card">
<div class="card-header">Consumption summary</div>
<div class="card-body">
{summary}
</div>
</div>
</div>
</div>
<footer class="mt-4 text-center text-muted">Reference tariff: {tariff} {currency}/kWh</footer>
</div>
</body>
</html>"#,
        notice = render_notice(notice),
        tariff = summary.tariff_per_kwh,
        currency = summary.currency,
        summary = render_summary(summary),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ApplianceEntry;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<b>\"Tom's\" & co</b>"), "&lt;b&gt;&quot;Tom&#x27;s&quot; &amp; co&lt;/b&gt;");
    }

    #[test]
    fn test_empty_store_shows_placeholder() {
        let html = render_index(&Summary::build(Vec::new()), None);

        assert!(html.contains("No appliances recorded yet."));
        assert!(!html.contains("<table"));
        assert!(html.contains("Tariff: <strong>700 COP/kWh</strong>"));
    }

    #[test]
    fn test_rows_and_totals_are_rounded_for_display() {
        let summary = Summary::build(vec![
            ApplianceEntry::new("Fridge", 150.0, 24.0),
            ApplianceEntry::new("Lamp", 10.0, 5.0),
        ]);
        let html = render_index(&summary, None);

        assert!(html.contains("<td>108.00</td>"));
        assert!(html.contains("<td>75600</td>"));
        assert!(html.contains("<td>1.50</td>"));
        assert!(html.contains("<td>1050</td>"));
        assert!(html.contains(r#"<span class="badge bg-danger">ALERT</span>"#));
        assert!(html.contains(r#"<span class="badge bg-success">OK</span>"#));
        assert!(html.contains("109.50 kWh/month"));
        assert!(html.contains("76650 COP/month"));
        assert!(html.contains("1 ALERT · 0 WARNING · 1 OK"));
    }

    #[test]
    fn test_names_are_escaped() {
        let summary = Summary::build(vec![ApplianceEntry::new("<script>x</script>", 1.0, 1.0)]);
        let html = render_index(&summary, None);

        assert!(!html.contains("<script>x"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
    }

    #[test]
    fn test_notice_is_rendered() {
        let notice = Notice::error("Could not add appliance: name must not be empty");
        let html = render_index(&Summary::build(Vec::new()), Some(&notice));

        assert!(html.contains(r#"<div class="alert alert-danger" role="alert">Could not add appliance: name must not be empty</div>"#));
    }
}
