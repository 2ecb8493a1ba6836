#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use casedash_core::record::{sample_records, CaseRecord, CaseStatus, CaseType, Priority, Tone};

#[test]
fn status_badges() {
    let resolved = CaseStatus::Resolved.badge();
    assert_eq!(resolved.tone, Tone::Green);
    assert_eq!(resolved.marker, Some("✓"));
    assert_eq!(CaseStatus::UnderReview.badge().tone, Tone::Yellow);
    assert_eq!(CaseStatus::Investigation.badge().tone, Tone::Blue);
    assert_eq!(CaseStatus::EvidenceCollection.badge().tone, Tone::Purple);
    assert_eq!(CaseStatus::EvidenceCollection.badge().marker, None);
}

#[test]
fn priority_badges() {
    assert_eq!(Priority::Critical.badge().tone, Tone::Red);
    assert_eq!(Priority::Critical.badge().marker, Some("⚠"));
    assert_eq!(Priority::High.badge().tone, Tone::Red);
    assert_eq!(Priority::High.badge().marker, None);
    assert_eq!(Priority::Medium.badge().tone, Tone::Orange);
    assert_eq!(Priority::Low.badge().tone, Tone::Gray);
}

#[test]
fn sample_records_match_dashboard_table() {
    let rows = sample_records();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].id, "CR-1025");
    assert_eq!(rows[4].kind, CaseType::CyberCrime);
    assert_eq!(rows[4].ipc, "IPC 66C");
    assert_eq!(rows[4].priority, Priority::Critical);
}

#[test]
fn record_uses_display_strings_in_yaml() {
    let yaml = r#"
id: "CR-2000"
type: "Cyber Crime"
date: "2023-11-01"
status: "Under Review"
ipc: "IPC 66C"
priority: "Medium"
"#;
    let rec: CaseRecord = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(rec.kind, CaseType::CyberCrime);
    assert_eq!(rec.status, CaseStatus::UnderReview);
    assert_eq!(rec.status.as_str(), "Under Review");
}

#[test]
fn unknown_status_is_rejected() {
    let yaml = r#"
id: "CR-2001"
type: "Theft"
date: "2023-11-01"
status: "Closed"
ipc: "IPC 379"
priority: "Low"
"#;
    assert!(serde_yaml::from_str::<CaseRecord>(yaml).is_err());
}
