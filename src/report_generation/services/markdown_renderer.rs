use crate::markdown::{
    Alignment, Document, Header, HeaderCell, Inline, List, ListItem, MarkdownError, Paragraph,
    Rule, Table, TableHeader, TableRow,
};
use crate::report_generation::domain::{Component, Project, Vulnerabilities};
use crate::shared::Result;

use super::{display_or_unknown, display_timestamp};

const LOGO_TAG: &str = "<img src=\"https://www.blackduck.com/content/dam/black-duck/en-us/images/BlackDuckLogo-OnDark.svg\" alt=\"BlackDuck Logo\" height=\"50\" />";

// Emoji list: https://gist.github.com/rxaviers/7360908
const CRITICAL_EMOJI: &str = ":x:";
const HIGH_EMOJI: &str = ":red_circle:";
const MEDIUM_EMOJI: &str = ":large_orange_diamond:";

/// MarkdownRenderer - security report assembled through the document model
///
/// Every block goes through the typed nodes in [`crate::markdown`], so the
/// structural invariants (table cell counts, header levels) hold for any
/// report this renderer emits.
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Renders the markdown security report.
    ///
    /// # Arguments
    /// * `project` - The aggregate to report on
    ///
    /// # Returns
    /// The rendered markdown text, ending with a newline
    ///
    /// # Errors
    /// Returns an error when document construction rejects a node; with the
    /// fixed section layout used here that indicates a bug, not bad input.
    pub fn render(project: &Project) -> Result<String> {
        Ok(Self::build_document(project)?.to_string())
    }

    fn build_document(project: &Project) -> std::result::Result<Document, MarkdownError> {
        let counts = project.vulnerabilities();
        let mut document = Document::new();

        document.push(Paragraph::new(Inline::text(LOGO_TAG)));
        document.push(Header::new("BlackDuck Scan Security Report", 1)?);

        document.push(Header::new("Project:", 3)?);
        let mut project_table = Table::new(TableHeader::new(vec![
            HeaderCell::aligned("Name", Alignment::Left),
            HeaderCell::aligned("Version", Alignment::Left),
            HeaderCell::aligned("Last Updated", Alignment::Left),
        ])?);
        project_table.add_row(TableRow::new(vec![
            Inline::code(display_or_unknown(project.name())),
            Inline::code(display_or_unknown(project.version())),
            Inline::code(display_timestamp(project.last_updated_at())),
        ]))?;
        document.push(project_table);

        document.push(Header::new("Security vulnerabilities Summary:", 3)?);
        let mut summary_table = Table::new(TableHeader::new(vec![
            HeaderCell::aligned("Critical", Alignment::Center),
            HeaderCell::aligned("High", Alignment::Center),
            HeaderCell::aligned("Medium", Alignment::Center),
            HeaderCell::aligned("Low", Alignment::Center),
        ])?);
        summary_table.add_row(TableRow::new(vec![
            Inline::text(format!("{} {}", CRITICAL_EMOJI, counts.critical())),
            Inline::text(format!("{} {}", HIGH_EMOJI, counts.high())),
            Inline::text(format!("{} {}", MEDIUM_EMOJI, counts.medium())),
            Inline::text(counts.low().to_string()),
        ]))?;
        document.push(summary_table);

        document.push(Header::new("Security vulnerabilities Details:", 3)?);

        if counts.critical() > 0 {
            document.push(Header::new(
                format!("Critical: {} {}", CRITICAL_EMOJI, counts.critical()),
                4,
            )?);
            document.push(Self::tier_table(
                &project.components_with_critical(),
                Vulnerabilities::critical,
            )?);
        }
        if counts.high() > 0 {
            document.push(Header::new(
                format!("High: {} {}", HIGH_EMOJI, counts.high()),
                4,
            )?);
            document.push(Self::tier_table(
                &project.components_with_high(),
                Vulnerabilities::high,
            )?);
        }
        if counts.medium() > 0 {
            document.push(Header::new(
                format!("Medium: {} {}", MEDIUM_EMOJI, counts.medium()),
                4,
            )?);
            document.push(Self::tier_table(
                &project.components_with_medium(),
                Vulnerabilities::medium,
            )?);
        }
        if counts.low() > 0 {
            document.push(Header::new(format!("Low: {}", counts.low()), 4)?);
            document.push(Self::tier_table(
                &project.components_with_low(),
                Vulnerabilities::low,
            )?);
        }

        document.push(Rule::default());

        document.push(Header::new("Direct Dependencies:", 3)?);
        let direct_dependencies = project.direct_dependencies();
        if direct_dependencies.is_empty() {
            document.push(Paragraph::new(Inline::emphasis(
                "No direct dependencies",
                '*',
            )?));
        } else {
            let mut checklist = List::default();
            for component in direct_dependencies {
                let total = component.vulnerabilities().total();
                checklist.add_item(ListItem::checklist(
                    vec![
                        Inline::code(component.id()),
                        Inline::text(format!(" - {} vulnerabilities", total)),
                    ],
                    total == 0,
                ));
            }
            document.push(checklist);
        }

        Ok(document)
    }

    fn tier_table(
        components: &[&Component],
        tier_count: fn(&Vulnerabilities) -> u32,
    ) -> std::result::Result<Table, MarkdownError> {
        let mut table = Table::new(TableHeader::new(vec![
            HeaderCell::aligned("Component", Alignment::Left),
            HeaderCell::aligned("Id", Alignment::Left),
            HeaderCell::aligned("Count", Alignment::Center),
        ])?);
        for component in components {
            table.add_row(TableRow::new(vec![
                Inline::text(display_or_unknown(component.name())),
                Inline::text(component.id()),
                Inline::text(tier_count(component.vulnerabilities()).to_string()),
            ]))?;
        }
        Ok(table)
    }
}
