use crate::report_generation::domain::{Component, Project, Vulnerabilities};

use super::{display_or_unknown, display_timestamp};

/// ConsoleRenderer - tab-indented plain-text security report
///
/// Pure string assembly over a fully built [`Project`]; no I/O. Detail blocks
/// are emitted per severity tier only when the project-level count for that
/// tier is non-zero.
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    /// Renders the console security report.
    ///
    /// # Arguments
    /// * `project` - The aggregate to report on
    ///
    /// # Returns
    /// The complete report text, ending with a newline
    pub fn render(project: &Project) -> String {
        let counts = project.vulnerabilities();
        let mut output = String::new();

        output.push_str(&format!(
            "Project: {} Version: {} LastUpdatedAt: {}\n",
            display_or_unknown(project.name()),
            display_or_unknown(project.version()),
            display_timestamp(project.last_updated_at())
        ));
        output.push_str("\tVulnerabilities:\n");
        output.push_str(&format!("\t\tCritical: {}\n", counts.critical()));
        output.push_str(&format!("\t\tHigh: {}\n", counts.high()));
        output.push_str(&format!("\t\tMedium: {}\n", counts.medium()));
        output.push_str(&format!("\t\tLow: {}\n", counts.low()));
        output.push('\n');

        if counts.critical() > 0 {
            Self::render_tier(
                &mut output,
                "Critical",
                counts.critical(),
                &project.components_with_critical(),
                Vulnerabilities::critical,
            );
        }
        if counts.high() > 0 {
            Self::render_tier(
                &mut output,
                "High",
                counts.high(),
                &project.components_with_high(),
                Vulnerabilities::high,
            );
        }
        if counts.medium() > 0 {
            Self::render_tier(
                &mut output,
                "Medium",
                counts.medium(),
                &project.components_with_medium(),
                Vulnerabilities::medium,
            );
        }
        if counts.low() > 0 {
            Self::render_tier(
                &mut output,
                "Low",
                counts.low(),
                &project.components_with_low(),
                Vulnerabilities::low,
            );
        }

        output.push('\n');
        output.push_str("\tDirect Dependencies:\n");
        for component in project.direct_dependencies() {
            let total = component.vulnerabilities().total();
            let status = if total == 0 { "PASS" } else { "FAIL" };
            output.push_str(&format!(
                "\t\t  Component: [{}] Id: [{}] Count={} Status={}\n",
                display_or_unknown(component.name()),
                component.id(),
                total,
                status
            ));
        }

        output
    }

    fn render_tier(
        output: &mut String,
        label: &str,
        project_count: u32,
        components: &[&Component],
        tier_count: fn(&Vulnerabilities) -> u32,
    ) {
        output.push_str(&format!("\t\t{}: {}\n", label, project_count));
        for component in components {
            output.push_str(&format!(
                "\t\t  Component: [{}] Id: [{}] Count={}\n",
                display_or_unknown(component.name()),
                component.id(),
                tier_count(component.vulnerabilities())
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn create_test_component(
        name: &str,
        version: &str,
        critical: u32,
        high: u32,
        medium: u32,
        low: u32,
        match_type: &str,
    ) -> Component {
        Component::new(
            name.to_string(),
            version.to_string(),
            format!("{}:{}", name, version),
            Vulnerabilities::new(critical, high, medium, low),
            match_type.to_string(),
        )
    }

    fn create_test_project() -> Project {
        Project::new(
            "Foo".to_string(),
            "1.0".to_string(),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()),
            Vulnerabilities::new(2, 1, 0, 3),
            vec![
                create_test_component("openssl", "1.1.1", 2, 0, 0, 0, "DIRECT_DEPENDENCY"),
                create_test_component("tokio", "1.38.0", 0, 1, 0, 0, "TRANSITIVE_DEPENDENCY"),
                create_test_component("serde", "1.0.0", 0, 0, 0, 3, "DIRECT_DEPENDENCY"),
                create_test_component("base64", "0.22.0", 0, 0, 0, 0, "DIRECT"),
            ],
        )
    }

    #[test]
    fn test_full_report() {
        let report = ConsoleRenderer::render(&create_test_project());
        let expected = concat!(
            "Project: Foo Version: 1.0 LastUpdatedAt: 2024-05-01 12:30:00 UTC\n",
            "\tVulnerabilities:\n",
            "\t\tCritical: 2\n",
            "\t\tHigh: 1\n",
            "\t\tMedium: 0\n",
            "\t\tLow: 3\n",
            "\n",
            "\t\tCritical: 2\n",
            "\t\t  Component: [openssl] Id: [openssl:1.1.1] Count=2\n",
            "\t\tHigh: 1\n",
            "\t\t  Component: [tokio] Id: [tokio:1.38.0] Count=1\n",
            "\t\tLow: 3\n",
            "\t\t  Component: [serde] Id: [serde:1.0.0] Count=3\n",
            "\n",
            "\tDirect Dependencies:\n",
            "\t\t  Component: [base64] Id: [base64:0.22.0] Count=0 Status=PASS\n",
            "\t\t  Component: [openssl] Id: [openssl:1.1.1] Count=2 Status=FAIL\n",
            "\t\t  Component: [serde] Id: [serde:1.0.0] Count=3 Status=FAIL\n",
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn test_zero_tiers_are_skipped() {
        let report = ConsoleRenderer::render(&create_test_project());
        // the summary block lists Medium once; no detail block repeats it
        assert_eq!(report.matches("\t\tMedium:").count(), 1);
        assert_eq!(report.matches("\t\tCritical:").count(), 2);
    }

    #[test]
    fn test_direct_dependencies_sorted_and_flagged() {
        let report = ConsoleRenderer::render(&create_test_project());
        let base64_pos = report.find("[base64:0.22.0]").unwrap();
        let openssl_pos = report.rfind("[openssl:1.1.1]").unwrap();
        let serde_pos = report.rfind("[serde:1.0.0]").unwrap();
        assert!(base64_pos < openssl_pos);
        assert!(openssl_pos < serde_pos);
        assert!(report.contains("Count=0 Status=PASS"));
        assert!(report.contains("Count=2 Status=FAIL"));
    }

    #[test]
    fn test_unknown_placeholders() {
        let project = Project::new(
            String::new(),
            String::new(),
            None,
            Vulnerabilities::default(),
            vec![],
        );
        let report = ConsoleRenderer::render(&project);
        assert!(report.starts_with(
            "Project: Unknown Version: Unknown LastUpdatedAt: Unknown\n"
        ));
    }

    #[test]
    fn test_clean_project_has_no_detail_blocks() {
        let project = Project::new(
            "Clean".to_string(),
            "2.0".to_string(),
            None,
            Vulnerabilities::default(),
            vec![create_test_component("base64", "0.22.0", 0, 0, 0, 0, "DIRECT")],
        );
        let report = ConsoleRenderer::render(&project);
        assert_eq!(report.matches("\t\tCritical:").count(), 1);
        assert_eq!(report.matches("\t\tLow:").count(), 1);
        assert!(report.contains("Count=0 Status=PASS"));
    }
}
