use super::records::{ComponentRecord, ProjectVersionRecord, RiskCount};
use crate::report_generation::domain::{Component, Project, Vulnerabilities};

// Pure wire-to-domain mapping. No I/O here: the fetcher hands over fully
// decoded records and receives immutable aggregates.

/// Builds a `Project` aggregate from one project-version record and its
/// fetched component records.
///
/// Project-level counters come from the record's `VULNERABILITY` risk
/// category; component-level counters from each component's own
/// `securityRiskProfile.counts` list (count types matched
/// case-insensitively). Wire counters are signed and clamped to zero.
pub(crate) fn to_project(
    record: &ProjectVersionRecord,
    components: &[ComponentRecord],
) -> Project {
    let category = record
        .risk_profile
        .as_ref()
        .and_then(|profile| profile.categories.as_ref())
        .and_then(|categories| categories.vulnerability.as_ref());

    let vulnerabilities = match category {
        Some(category) => Vulnerabilities::new(
            clamp_count(category.critical),
            clamp_count(category.high),
            clamp_count(category.medium),
            clamp_count(category.low),
        ),
        None => Vulnerabilities::default(),
    };

    Project::new(
        record.project_name.clone().unwrap_or_default(),
        record.version_name.clone().unwrap_or_default(),
        record.last_updated_at,
        vulnerabilities,
        components.iter().map(to_component).collect(),
    )
}

fn to_component(record: &ComponentRecord) -> Component {
    let counts = record
        .security_risk_profile
        .as_ref()
        .map(|profile| profile.counts.as_slice())
        .unwrap_or_default();

    let name = record.component_name.clone().unwrap_or_default();
    let version = record.component_version_name.clone().unwrap_or_default();
    let id = format!("{}:{}", name, version);
    let match_type = record.match_types.first().cloned().unwrap_or_default();

    Component::new(
        name,
        version,
        id,
        Vulnerabilities::new(
            count_for(counts, "CRITICAL"),
            count_for(counts, "HIGH"),
            count_for(counts, "MEDIUM"),
            count_for(counts, "LOW"),
        ),
        match_type,
    )
}

fn count_for(counts: &[RiskCount], count_type: &str) -> u32 {
    clamp_count(
        counts
            .iter()
            .find(|entry| {
                entry
                    .count_type
                    .as_deref()
                    .is_some_and(|name| name.eq_ignore_ascii_case(count_type))
            })
            .and_then(|entry| entry.count),
    )
}

fn clamp_count(value: Option<i64>) -> u32 {
    u32::try_from(value.unwrap_or(0).max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_record(json: &str) -> ProjectVersionRecord {
        serde_json::from_str(json).unwrap()
    }

    fn component_record(json: &str) -> ComponentRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_to_project_maps_identity_and_counts() {
        let record = project_record(
            r#"{
                "projectName": "Foo",
                "versionName": "1.0",
                "lastUpdatedAt": "2023-10-12T14:33:48.502Z",
                "riskProfile": {
                    "categories": {
                        "VULNERABILITY": {"CRITICAL": 2, "HIGH": 0, "MEDIUM": 1, "LOW": 3}
                    }
                }
            }"#,
        );

        let project = to_project(&record, &[]);
        assert_eq!(project.name(), "Foo");
        assert_eq!(project.version(), "1.0");
        assert!(project.last_updated_at().is_some());
        assert_eq!(project.vulnerabilities().critical(), 2);
        assert_eq!(project.vulnerabilities().high(), 0);
        assert_eq!(project.vulnerabilities().medium(), 1);
        assert_eq!(project.vulnerabilities().low(), 3);
        assert!(project.components().is_empty());
    }

    #[test]
    fn test_to_project_without_risk_profile_yields_zero_counts() {
        let record = project_record(r#"{"projectName": "Bare", "versionName": "0.1"}"#);

        let project = to_project(&record, &[]);
        assert_eq!(project.vulnerabilities().critical(), 0);
        assert_eq!(project.vulnerabilities().total(), 0);
    }

    #[test]
    fn test_negative_wire_counters_clamp_to_zero() {
        let record = project_record(
            r#"{
                "projectName": "Foo",
                "versionName": "1.0",
                "riskProfile": {
                    "categories": {
                        "VULNERABILITY": {"CRITICAL": -1, "HIGH": 4, "MEDIUM": -7, "LOW": 0}
                    }
                }
            }"#,
        );

        let project = to_project(&record, &[]);
        assert_eq!(project.vulnerabilities().critical(), 0);
        assert_eq!(project.vulnerabilities().high(), 4);
        assert_eq!(project.vulnerabilities().medium(), 0);
    }

    #[test]
    fn test_component_counts_match_count_type_case_insensitively() {
        let record = component_record(
            r#"{
                "componentName": "openssl",
                "componentVersionName": "1.1.1",
                "securityRiskProfile": {
                    "counts": [
                        {"countType": "critical", "count": 2},
                        {"countType": "High", "count": 1},
                        {"countType": "OK", "count": 40}
                    ]
                },
                "matchTypes": ["DIRECT_DEPENDENCY", "FILE_EXACT"]
            }"#,
        );

        let project = to_project(
            &project_record(r#"{"projectName": "Foo", "versionName": "1.0"}"#),
            &[record],
        );
        let component = &project.components()[0];
        assert_eq!(component.name(), "openssl");
        assert_eq!(component.version(), "1.1.1");
        assert_eq!(component.id(), "openssl:1.1.1");
        assert_eq!(component.vulnerabilities().critical(), 2);
        assert_eq!(component.vulnerabilities().high(), 1);
        assert_eq!(component.vulnerabilities().medium(), 0);
        assert_eq!(component.vulnerabilities().low(), 0);
        assert_eq!(component.match_type(), "DIRECT_DEPENDENCY");
        assert!(component.is_direct_dependency());
    }

    #[test]
    fn test_component_without_match_types_is_not_direct() {
        let record = component_record(
            r#"{"componentName": "zlib", "componentVersionName": "1.3"}"#,
        );

        let project = to_project(
            &project_record(r#"{"projectName": "Foo", "versionName": "1.0"}"#),
            &[record],
        );
        let component = &project.components()[0];
        assert_eq!(component.match_type(), "");
        assert!(!component.is_direct_dependency());
        assert_eq!(component.vulnerabilities().total(), 0);
    }

    #[test]
    fn test_component_with_missing_names_keeps_composite_id_shape() {
        let record = component_record(r#"{}"#);

        let project = to_project(
            &project_record(r#"{"projectName": "Foo", "versionName": "1.0"}"#),
            &[record],
        );
        let component = &project.components()[0];
        assert_eq!(component.name(), "");
        assert_eq!(component.id(), ":");
    }

    #[test]
    fn test_component_negative_count_clamps_to_zero() {
        let record = component_record(
            r#"{
                "componentName": "tokio",
                "componentVersionName": "1.38.0",
                "securityRiskProfile": {
                    "counts": [{"countType": "LOW", "count": -3}]
                }
            }"#,
        );

        let project = to_project(
            &project_record(r#"{"projectName": "Foo", "versionName": "1.0"}"#),
            &[record],
        );
        assert_eq!(project.components()[0].vulnerabilities().low(), 0);
    }
}
