use death_literacy::assessment::AssessmentReport;
use std::fmt::Write;

/// Plain-text rendering of a report for terminal output.
pub(crate) fn render_report(heading: &str, report: &AssessmentReport) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, heading, report);
    out
}

fn write_report(out: &mut String, heading: &str, report: &AssessmentReport) -> std::fmt::Result {
    writeln!(out, "{heading}")?;
    writeln!(out, "Scoring tables: {}", report.tables_version)?;

    let overall = &report.comparisons.overall;
    writeln!(
        out,
        "\nOverall: {:.1} / 10 (benchmark {:.1}, {:+.1}) - {}",
        overall.user_score,
        overall.benchmark,
        overall.difference,
        overall.tier.label()
    )?;

    writeln!(out, "\nDomains")?;
    for entry in &report.comparisons.domains {
        let expected = report
            .coverage
            .iter()
            .find(|coverage| coverage.domain == entry.domain)
            .map(|coverage| coverage.expected)
            .unwrap_or_default();
        writeln!(
            out,
            "- {}: {:.1} (benchmark {:.1}) - {} [{}/{} answered]",
            entry.domain.label(),
            entry.comparison.user_score,
            entry.comparison.benchmark,
            entry.comparison.tier.label(),
            entry.answered,
            expected
        )?;
    }

    let unanswered: Vec<&str> = report
        .comparisons
        .domains
        .iter()
        .filter(|entry| entry.answered == 0)
        .map(|entry| entry.domain.label())
        .collect();
    if !unanswered.is_empty() {
        writeln!(
            out,
            "  Not answered (scored as zero): {}",
            unanswered.join(", ")
        )?;
    }

    let social = &report.social_connection;
    writeln!(
        out,
        "\nSocial connection: {:.2} / 4 (benchmark {:.2}) - {}",
        social.score,
        social.benchmark,
        social.tier.label()
    )?;

    writeln!(out, "\nSummary\n{}", report.feedback.summary)?;
    write_list(out, "Strengths", &report.feedback.strengths)?;
    write_list(out, "Areas to develop", &report.feedback.improvements)?;
    write_list(out, "Recommendations", &report.feedback.recommendations)?;

    Ok(())
}

fn write_list(out: &mut String, title: &str, items: &[String]) -> std::fmt::Result {
    if items.is_empty() {
        return writeln!(out, "\n{title}: none");
    }

    writeln!(out, "\n{title}")?;
    for item in items {
        writeln!(out, "- {item}")?;
    }
    Ok(())
}
