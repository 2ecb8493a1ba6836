//! Case records and their badge treatment.
//!
//! Status and priority are closed sets, so the badge mapping below is an
//! exhaustive `match` rather than a chain of string comparisons.

use serde::{Deserialize, Serialize};

/// Display color family shared by badges and stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Blue,
    Purple,
    Green,
    Yellow,
    Orange,
    Red,
    Gray,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Blue => "blue",
            Tone::Purple => "purple",
            Tone::Green => "green",
            Tone::Yellow => "yellow",
            Tone::Orange => "orange",
            Tone::Red => "red",
            Tone::Gray => "gray",
        }
    }
}

/// Badge treatment for one field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub tone: Tone,
    /// Glyph printed before the label, if any.
    pub marker: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseType {
    Theft,
    Assault,
    Fraud,
    Burglary,
    #[serde(rename = "Cyber Crime")]
    CyberCrime,
}

impl CaseType {
    pub fn as_str(self) -> &'static str {
        match self {
            CaseType::Theft => "Theft",
            CaseType::Assault => "Assault",
            CaseType::Fraud => "Fraud",
            CaseType::Burglary => "Burglary",
            CaseType::CyberCrime => "Cyber Crime",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    Resolved,
    #[serde(rename = "Under Review")]
    UnderReview,
    Investigation,
    #[serde(rename = "Evidence Collection")]
    EvidenceCollection,
}

impl CaseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CaseStatus::Resolved => "Resolved",
            CaseStatus::UnderReview => "Under Review",
            CaseStatus::Investigation => "Investigation",
            CaseStatus::EvidenceCollection => "Evidence Collection",
        }
    }

    pub fn badge(self) -> Badge {
        match self {
            CaseStatus::Resolved => Badge { tone: Tone::Green, marker: Some("✓") },
            CaseStatus::UnderReview => Badge { tone: Tone::Yellow, marker: None },
            CaseStatus::Investigation => Badge { tone: Tone::Blue, marker: None },
            CaseStatus::EvidenceCollection => Badge { tone: Tone::Purple, marker: None },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    pub fn badge(self) -> Badge {
        match self {
            Priority::Critical => Badge { tone: Tone::Red, marker: Some("⚠") },
            Priority::High => Badge { tone: Tone::Red, marker: None },
            Priority::Medium => Badge { tone: Tone::Orange, marker: None },
            Priority::Low => Badge { tone: Tone::Gray, marker: None },
        }
    }
}

/// One row of the complaint table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CaseType,
    /// ISO date as shown (`YYYY-MM-DD`).
    pub date: String,
    pub status: CaseStatus,
    /// Penal code section label, e.g. `IPC 379`.
    pub ipc: String,
    pub priority: Priority,
}

/// The stock record list shown when no config overrides it.
pub fn sample_records() -> Vec<CaseRecord> {
    let row = |id: &str, kind, date: &str, status, ipc: &str, priority| CaseRecord {
        id: id.into(),
        kind,
        date: date.into(),
        status,
        ipc: ipc.into(),
        priority,
    };
    vec![
        row(
            "CR-1025",
            CaseType::Theft,
            "2023-10-15",
            CaseStatus::Resolved,
            "IPC 379",
            Priority::High,
        ),
        row(
            "CR-1024",
            CaseType::Assault,
            "2023-10-14",
            CaseStatus::UnderReview,
            "IPC 351",
            Priority::Medium,
        ),
        row(
            "CR-1023",
            CaseType::Fraud,
            "2023-10-12",
            CaseStatus::Resolved,
            "IPC 420",
            Priority::Low,
        ),
        row(
            "CR-1022",
            CaseType::Burglary,
            "2023-10-11",
            CaseStatus::Investigation,
            "IPC 454",
            Priority::High,
        ),
        row(
            "CR-1021",
            CaseType::CyberCrime,
            "2023-10-10",
            CaseStatus::EvidenceCollection,
            "IPC 66C",
            Priority::Critical,
        ),
    ]
}
