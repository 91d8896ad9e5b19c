//! Report formatters for console, JSON, and Markdown output

use crate::config::OutputFormat;
use crate::engine::comparison::CategoryComparison;
use crate::engine::suggestions::{Tip, TipKind};
use crate::engine::MatchReport;
use crate::error::Result;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering a finished match report
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and section headers
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and downstream tooling
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for shareable reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!(
                "\n{} {}\n",
                prefix.color(color).bold(),
                title.color(color).bold()
            )
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_matched_line(&self, label: &str, category: &CategoryComparison) -> String {
        if category.matched.is_empty() {
            format!("{}: {}\n", label, self.colorize("none", Color::BrightBlack))
        } else {
            let skills: Vec<&str> = category.matched.iter().map(|m| m.skill.as_str()).collect();
            format!(
                "{}: {}\n",
                label,
                self.colorize(&skills.join(", "), Color::Green)
            )
        }
    }

    fn push_tips(&self, output: &mut String, tips: &[Tip]) {
        for tip in tips {
            output.push_str(&format!(
                "{} {}\n",
                tip.icon,
                self.colorize(&tip.title, Self::tip_color(&tip.kind))
            ));
            output.push_str(&format!("   {}\n", tip.description));
        }
    }

    fn tip_color(kind: &TipKind) -> Color {
        match kind {
            TipKind::Success => Color::Green,
            TipKind::Warning => Color::Yellow,
            TipKind::Error => Color::Red,
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();
        let comparison = &report.skill_comparison;

        // Header
        output.push_str(&self.format_header("📊 SKILL MATCH ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {}\n",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        // Match summary
        output.push_str(&self.format_header("Match Summary", 2));
        let score_badge = self.format_score_badge(report.match_rate);
        output.push_str(&format!(
            "Match Rate: {}% {}\n",
            report.match_rate, score_badge
        ));
        output.push_str(&format!(
            "Technical: {} of {} required skills | Soft: {} of {} required skills\n",
            comparison.technical.matched.len(),
            comparison.technical.required_count(),
            comparison.soft.matched.len(),
            comparison.soft.required_count(),
        ));

        // Matched skills
        output.push_str(&self.format_header("✅ Matched Skills", 3));
        output.push_str(&self.format_matched_line("Technical", &comparison.technical));
        output.push_str(&self.format_matched_line("Soft", &comparison.soft));

        // Missing skills
        let missing_total = comparison.technical.missing.len() + comparison.soft.missing.len();
        if missing_total > 0 {
            output.push_str(&self.format_header("❌ Missing Skills", 3));
            for (label, category) in [
                ("Technical", &comparison.technical),
                ("Soft", &comparison.soft),
            ] {
                for missing in &category.missing {
                    output.push_str(&format!(
                        "  • {} ({}, job {}x, importance {:.2})\n",
                        self.colorize(&missing.skill, Color::Red),
                        label,
                        missing.job_count,
                        missing.importance
                    ));
                }
            }
        }

        // Recruiter tips
        output.push_str(&self.format_header("💡 Recruiter Tips", 2));
        self.push_tips(&mut output, &report.recruiter_tips);

        // Formatting checks
        if !report.formatting_analysis.is_empty() {
            output.push_str(&self.format_header("📋 Formatting Checks", 2));
            self.push_tips(&mut output, &report.formatting_analysis);
        }

        // Progress overview
        output.push_str(&self.format_header("📈 Progress Overview", 2));
        let stats = &report.progress_stats;
        for (label, area) in [
            ("Searchability", stats.searchability),
            ("Hard Skills", stats.hard_skills),
            ("Soft Skills", stats.soft_skills),
            ("Recruiter Tips", stats.recruiter_tips),
            ("Formatting", stats.formatting),
        ] {
            let noun = if area.issues == 1 { "issue" } else { "issues" };
            output.push_str(&format!(
                "  {:<14} {:>3}% ({} {})\n",
                label, area.progress, area.issues, noun
            ));
        }
        output.push_str(&format!("Total issues: {}\n", stats.total_issues));

        if self.detailed {
            // Per-skill counts and resume-only skills (only in detailed mode)
            output.push_str(&self.format_header("📊 Detailed Analysis", 2));
            for (label, category) in [
                ("Technical", &comparison.technical),
                ("Soft", &comparison.soft),
            ] {
                if !category.matched.is_empty() {
                    output.push_str(&self.format_header(&format!("{} Matches", label), 3));
                    for matched in &category.matched {
                        output.push_str(&format!(
                            "  • {} (resume {}x, job {}x)\n",
                            matched.skill, matched.resume_count, matched.job_count
                        ));
                    }
                }
                if !category.extra.is_empty() {
                    output
                        .push_str(&self.format_header(&format!("Extra {} Skills", label), 3));
                    for extra in &category.extra {
                        output.push_str(&format!(
                            "  • {} (resume {}x)\n",
                            extra.skill, extra.resume_count
                        ));
                    }
                }
            }
        }

        // Footer
        output.push_str(&format!(
            "\n{} Generated by skillmatch v{}\n",
            self.colorize("ℹ️", Color::Blue),
            env!("CARGO_PKG_VERSION")
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();
        let comparison = &report.skill_comparison;
        let categories = [
            ("Technical", &comparison.technical),
            ("Soft", &comparison.soft),
        ];

        // Title
        output.push_str("# 📊 Skill Match Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {}\n\n",
                report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        // Match summary
        output.push_str("## Match Summary\n\n");
        output.push_str(&format!(
            "**Match Rate:** {}% {}\n\n",
            report.match_rate,
            Self::markdown_score_badge(report.match_rate)
        ));

        output.push_str("| Category | Matched | Missing | Extra |\n");
        output.push_str("|----------|---------|---------|-------|\n");
        for (label, category) in categories {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                label,
                category.matched.len(),
                category.missing.len(),
                category.extra.len()
            ));
        }
        output.push('\n');

        // Matched skills
        if categories.iter().any(|(_, c)| !c.matched.is_empty()) {
            output.push_str("## ✅ Matched Skills\n\n");
            output.push_str("| Skill | Category | Resume | Job |\n");
            output.push_str("|-------|----------|--------|-----|\n");
            for (label, category) in categories {
                for matched in &category.matched {
                    output.push_str(&format!(
                        "| {} | {} | {} | {} |\n",
                        matched.skill, label, matched.resume_count, matched.job_count
                    ));
                }
            }
            output.push('\n');
        }

        // Missing skills
        if categories.iter().any(|(_, c)| !c.missing.is_empty()) {
            output.push_str("## ❌ Missing Skills\n\n");
            output.push_str("| Skill | Category | Job Mentions | Importance |\n");
            output.push_str("|-------|----------|--------------|------------|\n");
            for (label, category) in categories {
                for missing in &category.missing {
                    output.push_str(&format!(
                        "| {} | {} | {} | {:.2} |\n",
                        missing.skill, label, missing.job_count, missing.importance
                    ));
                }
            }
            output.push('\n');
        }

        // Extra skills
        if categories.iter().any(|(_, c)| !c.extra.is_empty()) {
            output.push_str("## ➕ Extra Skills\n\n");
            for (label, category) in categories {
                if !category.extra.is_empty() {
                    let names: Vec<&str> =
                        category.extra.iter().map(|e| e.skill.as_str()).collect();
                    output.push_str(&format!("**{}:** `{}`\n", label, names.join("`, `")));
                }
            }
            output.push('\n');
        }

        // Recruiter tips
        output.push_str("## 💡 Recruiter Tips\n\n");
        for tip in &report.recruiter_tips {
            output.push_str(&format!(
                "- {} **{}**: {}\n",
                tip.icon, tip.title, tip.description
            ));
        }
        output.push('\n');

        // Formatting checks
        if !report.formatting_analysis.is_empty() {
            output.push_str("## 📋 Formatting Checks\n\n");
            for check in &report.formatting_analysis {
                output.push_str(&format!(
                    "- {} **{}**: {}\n",
                    check.icon, check.title, check.description
                ));
            }
            output.push('\n');
        }

        // Progress overview
        output.push_str("## 📈 Progress Overview\n\n");
        output.push_str("| Area | Progress | Issues |\n");
        output.push_str("|------|----------|--------|\n");
        let stats = &report.progress_stats;
        for (label, area) in [
            ("Searchability", stats.searchability),
            ("Hard Skills", stats.hard_skills),
            ("Soft Skills", stats.soft_skills),
            ("Recruiter Tips", stats.recruiter_tips),
            ("Formatting", stats.formatting),
        ] {
            output.push_str(&format!(
                "| {} | {}% | {} |\n",
                label, area.progress, area.issues
            ));
        }
        output.push_str(&format!("\n**Total Issues:** {}\n", stats.total_issues));

        // Footer
        if self.include_metadata {
            output.push_str("\n---\n\n");
            output.push_str(&format!(
                "*Generated by skillmatch v{}*\n",
                env!("CARGO_PKG_VERSION")
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl MarkdownFormatter {
    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            90..=100 => "🟢 Excellent",
            80..=89 => "🟡 Very Good",
            70..=79 => "🟠 Good",
            60..=69 => "🔴 Fair",
            50..=59 => "🔴 Below Average",
            _ => "🔴 Poor",
        }
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_match{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_match{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_match{}.md", base_name, timestamp_suffix),
    }
}
