// Colored terminal output for analysis results, history and stats.
//
// This module handles all terminal-specific formatting. main.rs delegates
// here. Colors come from the trust band's severity so the terminal and the
// JSON API never disagree about what counts as a warning.

use colored::{ColoredString, Colorize};

use crate::db::models::{AnalysisResult, Severity, SslState, TrustBand};
use crate::history::{FilterCriterion, ScoreBucket, Stats};
use crate::scoring::domain_age::domain_age_check;

/// Display one analysis in full.
pub fn display_result(result: &AnalysisResult) {
    let band = result.band();
    println!(
        "\n{}",
        format!("=== Analysis of {} ===", result.url).bold()
    );
    println!(
        "  Trust score: {}  {}",
        colorize(&format!("{}/100", result.trust_score), band.severity()).bold(),
        colorize(band.as_str(), band.severity()),
    );
    let verdict = if result.is_legitimate {
        "legitimate".green()
    } else {
        "suspicious".red().bold()
    };
    println!("  Verdict: {verdict}");
    println!();

    let accessible = match (result.is_accessible, result.status_code) {
        (true, Some(code)) => format!("yes (HTTP {code})").green(),
        (true, None) => "yes".green(),
        (false, _) => "no".red(),
    };
    println!("  Accessible: {accessible}");

    let ssl = result.ssl_state();
    let ssl_str = match ssl {
        SslState::Valid => ssl.as_str().green(),
        SslState::Invalid => ssl.as_str().yellow(),
        SslState::Missing => ssl.as_str().red(),
    };
    println!("  SSL: {ssl_str}");

    let age = domain_age_check(result.domain_age_days);
    let age_str = if age.pass {
        age.text.green()
    } else {
        age.text.red()
    };
    println!("  Domain age: {age_str}");

    let warnings = result.pattern_warnings();
    if !warnings.is_empty() {
        println!("\n  {} suspicious patterns:", warnings.len());
        for (pattern, warning) in result.suspicious_patterns.iter().zip(&warnings) {
            println!(
                "    {} {} {}",
                "!".yellow(),
                pattern.pattern,
                format!("({warning})").dimmed()
            );
        }
    }

    println!("\n  {}", result.analysis_summary.dimmed());
    println!(
        "  {}",
        format!("id {} at {}", result.id, result.timestamp.to_rfc3339()).dimmed()
    );
}

/// Display a filtered history list.
pub fn display_history(results: &[&AnalysisResult], criterion: FilterCriterion, search: &str) {
    if results.is_empty() {
        if search.is_empty() && criterion == FilterCriterion::All {
            println!("No analyses yet. Run `rapid score <url>` first.");
        } else {
            println!("No analyses match filter '{criterion}' and search '{search}'.");
        }
        return;
    }

    println!(
        "\n{}",
        format!("=== Recent Analyses ({}) ===", results.len()).bold()
    );
    println!();

    println!(
        "  {:<44} {:>7}  {:<15} {:<10} {:<24} {:>8}",
        "URL".dimmed(),
        "Score".dimmed(),
        "Band".dimmed(),
        "SSL".dimmed(),
        "Domain age".dimmed(),
        "Patterns".dimmed(),
    );
    println!("  {}", "-".repeat(114).dimmed());

    for result in results {
        let band = result.band();
        let ssl = result.ssl_state();
        let ssl_label = if ssl == SslState::Valid {
            "Valid SSL".green()
        } else {
            "SSL Issues".red()
        };
        let age = domain_age_check(result.domain_age_days);
        println!(
            "  {:<44} {:>7}  {:<15} {:<10} {:<24} {:>8}",
            super::truncate_chars(&result.url, 41),
            format!("{}/100", result.trust_score),
            colorize(band.as_str(), band.severity()),
            ssl_label,
            age.text,
            result.suspicious_patterns.len(),
        );
    }
    println!();
}

/// Display dashboard statistics and the score histogram.
pub fn display_stats(stats: &Stats, distribution: &[ScoreBucket]) {
    println!("\n{}", "=== Dashboard ===".bold());
    println!("  Total analyses:    {}", stats.total_analyses);
    println!(
        "  Legitimate:        {}",
        stats.legitimate_count.to_string().green()
    );
    println!(
        "  Suspicious:        {}",
        stats.suspicious_count.to_string().red()
    );
    println!("  Avg trust score:   {}", stats.average_trust_score);

    if stats.total_analyses == 0 {
        return;
    }

    println!("\n  Trust score distribution:");
    let widest = distribution.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    for bucket in distribution {
        let bar_len = bucket.count * 30 / widest;
        let severity = TrustBand::from_score(bucket.min).severity();
        println!(
            "    {:>3}-{:<3} {} {}",
            bucket.min,
            bucket.max,
            colorize(&"#".repeat(bar_len), severity),
            bucket.count
        );
    }
}

/// Colorize text by severity.
fn colorize(text: &str, severity: Severity) -> ColoredString {
    match severity {
        Severity::Success => text.green(),
        Severity::Warning => text.yellow(),
        Severity::Error => text.red(),
    }
}
