//! Console report formatter.
//!
//! Renders a finished [`Assessment`] as the on-screen report: per-domain
//! scores with 20-segment bars, the overall score and risk label, and the
//! prioritised recommendation list.

use colored::{ColoredString, Colorize};
use riskscope_domain::{Assessment, RiskLevel, recommendations_for};

const BAR_SEGMENTS: usize = 20;

/// Formats assessments for console display
pub struct ConsoleReport;

impl ConsoleReport {
    /// Startup banner shown before the questionnaire begins.
    pub fn banner() -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "=".repeat(62).cyan()));
        output.push_str(&format!("{:^62}\n", "IT RISK ASSESSMENT".bold()));
        output.push_str(&format!(
            "{:^62}\n",
            "Five domains - scored 0-100 - LOW to CRITICAL"
        ));
        output.push_str(&format!("{}\n", "=".repeat(62).cyan()));
        output.push('\n');
        output.push_str("This tool evaluates IT risk across 5 key domains.\n");
        output.push_str("Answer each question honestly for an accurate risk score.\n");
        output
    }

    /// Format the complete report.
    pub fn format(assessment: &Assessment) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("RISK ASSESSMENT REPORT"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Organisation:".cyan().bold(),
            assessment.organisation
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Date:        ".cyan().bold(),
            assessment.timestamp
        ));

        // Domain scores
        output.push_str(&Self::section_header("Domain Scores"));
        for result in &assessment.results {
            let level = result.risk_level();
            output.push_str(&format!("\n  {}\n", result.domain.white().bold()));
            output.push_str(&format!(
                "    [{}] {}\n",
                Self::score_bar(result.score),
                Self::colorize(
                    &format!("{}% — {}", result.score, level.label()),
                    level
                ),
            ));
        }

        // Overall
        let overall = assessment.overall_score();
        let level = assessment.overall_risk_level();
        output.push_str(&Self::section_header("Overall Risk Score"));
        output.push_str(&format!(
            "\n  {}\n",
            Self::colorize(&format!("{}% — {} RISK", overall, level.label()), level).bold()
        ));

        // Recommendations
        output.push_str(&Self::format_recommendations(assessment));
        output.push_str(&Self::footer());

        output
    }

    /// Recommendation section: weak domains ascending by score, each with
    /// its full catalog recommendation list; or a single affirmative
    /// message when nothing is weak.
    fn format_recommendations(assessment: &Assessment) -> String {
        let weak = assessment.weak_domains();
        let mut output = String::new();

        if weak.is_empty() {
            output.push('\n');
            output.push_str(&format!(
                "{}\n",
                "Strong security posture across all domains.".green().bold()
            ));
            output.push_str("Continue regular reviews and maintain current controls.\n");
            return output;
        }

        output.push_str(&Self::section_header("Priority Recommendations"));
        for result in weak {
            output.push_str(&format!(
                "\n  {} {} ({}%)\n",
                "▸".cyan().bold(),
                result.domain.cyan().bold(),
                result.score
            ));
            for rec in recommendations_for(&result.domain) {
                output.push_str(&format!("    • {}\n", rec));
            }
        }
        output
    }

    /// 20-segment bar; filled segments = score / 5 (integer division).
    fn score_bar(score: u8) -> String {
        let filled = (score as usize / 5).min(BAR_SEGMENTS);
        format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(BAR_SEGMENTS - filled)
        )
    }

    fn colorize(text: &str, level: RiskLevel) -> ColoredString {
        match level {
            RiskLevel::Low => text.green(),
            RiskLevel::MediumLow => text.yellow(),
            RiskLevel::Medium => text.truecolor(255, 165, 0),
            RiskLevel::High | RiskLevel::Critical => text.red(),
            RiskLevel::Unknown => text.magenta(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(62);
        format!("{}\n{:^62}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(62).cyan())
    }
}
