use crate::report::Report;

/// Turns a report into a presentation format.
pub trait Renderer {
    fn render(&self, report: &Report) -> String;
}

/// Renders the report as a single HTML table, one row per finding.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, report: &Report) -> String {
        render_html(report)
    }
}

/// Render a deterministic HTML table from a report.
pub fn render_html(report: &Report) -> String {
    let mut output = String::from(
        "<table border='1'><tr><th>Table</th><th>Issue</th><th>Suggestion</th><th>SQL Update</th></tr>",
    );

    for (table, findings) in report.iter() {
        for finding in findings {
            output.push_str("<tr>");
            push_cell(&mut output, table, false);
            push_cell(&mut output, &finding.issue, false);
            push_cell(&mut output, &finding.suggestion, false);
            push_cell(&mut output, &finding.remediation_sql, true);
            output.push_str("</tr>");
        }
    }

    output.push_str("</table>");
    output
}

fn push_cell(output: &mut String, text: &str, code: bool) {
    output.push_str("<td>");
    if code {
        output.push_str("<code>");
    }
    escape_into(output, text);
    if code {
        output.push_str("</code>");
    }
    output.push_str("</td>");
}

fn escape_into(output: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::{Finding, FindingKind};
    use crate::report::ReportBuilder;

    fn primary_key_finding(table: &str) -> Finding {
        Finding {
            kind: FindingKind::MissingPrimaryKey,
            table_name: table.to_string(),
            column: None,
            issue: format!("Table '{table}' does not have a primary key."),
            suggestion: "Consider adding a primary key.".to_string(),
            remediation_sql: format!("ALTER TABLE {table} ADD PRIMARY KEY (column_name);"),
        }
    }

    #[test]
    fn empty_report_renders_header_only() {
        let html = render_html(&Report::default());
        assert_eq!(
            html,
            "<table border='1'><tr><th>Table</th><th>Issue</th><th>Suggestion</th><th>SQL Update</th></tr></table>"
        );
    }

    #[test]
    fn renders_one_row_per_finding_with_code_span() {
        let mut builder = ReportBuilder::new();
        builder
            .add_findings("logs", vec![primary_key_finding("logs")])
            .expect("add logs");
        builder.add_findings("users", Vec::new()).expect("add users");

        let html = HtmlRenderer.render(&builder.finish());

        assert!(html.ends_with(
            "<tr><td>logs</td><td>Table 'logs' does not have a primary key.</td>\
             <td>Consider adding a primary key.</td>\
             <td><code>ALTER TABLE logs ADD PRIMARY KEY (column_name);</code></td></tr></table>"
        ));
        assert_eq!(html.matches("<tr>").count(), 2);
    }

    #[test]
    fn escapes_markup_in_cells() {
        let mut builder = ReportBuilder::new();
        builder
            .add_findings("a<b>&c", vec![primary_key_finding("a<b>&c")])
            .expect("add table");

        let html = render_html(&builder.finish());

        assert!(html.contains("<td>a&lt;b&gt;&amp;c</td>"));
        assert!(!html.contains("a<b>"));
    }
}
