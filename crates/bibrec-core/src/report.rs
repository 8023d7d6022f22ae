use bibrec_canonical::JsonPath;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::trace;

/// Stable code of a non-fatal validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiagnosticCode {
    /// A key unknown to the registry was kept verbatim.
    UnknownFieldPreserved,
    /// A creator without a role received the primary role.
    DefaultedCreatorType,
    /// An exact duplicate entry was removed.
    DuplicateRemoved,
    /// A creator role is not legal for the item type.
    InvalidCreatorType,
    /// A creator has both name shapes.
    AmbiguousCreatorName,
    /// A creator has neither name shape.
    EmptyCreatorName,
    /// A creator entry could not be read.
    MalformedCreator,
    /// A date field did not parse to any structure.
    UnparseableDate,
    /// A relation predicate had an empty target list.
    EmptyRelationTarget,
    /// A relation predicate had targets of the wrong shape.
    InvalidRelationTarget,
    /// A value has the wrong JSON kind for its field.
    InvalidFieldValue,
    /// A timestamp field is not a recognizable timestamp.
    InvalidTimestamp,
    /// A tag type is neither 0 nor 1.
    InvalidTagType,
    /// A tag has empty text.
    EmptyTag,
    /// A collection reference is not an object key.
    InvalidCollectionKey,
    /// A parent reference is not an object key.
    InvalidParentItem,
    /// A search condition is missing a member.
    InvalidSearchCondition,
    /// A collection or search has no name.
    MissingName,
}

impl DiagnosticCode {
    /// Wire name of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::UnknownFieldPreserved => "UnknownFieldPreserved",
            DiagnosticCode::DefaultedCreatorType => "DefaultedCreatorType",
            DiagnosticCode::DuplicateRemoved => "DuplicateRemoved",
            DiagnosticCode::InvalidCreatorType => "InvalidCreatorType",
            DiagnosticCode::AmbiguousCreatorName => "AmbiguousCreatorName",
            DiagnosticCode::EmptyCreatorName => "EmptyCreatorName",
            DiagnosticCode::MalformedCreator => "MalformedCreator",
            DiagnosticCode::UnparseableDate => "UnparseableDate",
            DiagnosticCode::EmptyRelationTarget => "EmptyRelationTarget",
            DiagnosticCode::InvalidRelationTarget => "InvalidRelationTarget",
            DiagnosticCode::InvalidFieldValue => "InvalidFieldValue",
            DiagnosticCode::InvalidTimestamp => "InvalidTimestamp",
            DiagnosticCode::InvalidTagType => "InvalidTagType",
            DiagnosticCode::EmptyTag => "EmptyTag",
            DiagnosticCode::InvalidCollectionKey => "InvalidCollectionKey",
            DiagnosticCode::InvalidParentItem => "InvalidParentItem",
            DiagnosticCode::InvalidSearchCondition => "InvalidSearchCondition",
            DiagnosticCode::MissingName => "MissingName",
        }
    }

    /// True for codes that describe expected drift rather than damage.
    pub fn is_informational(self) -> bool {
        matches!(
            self,
            DiagnosticCode::UnknownFieldPreserved
                | DiagnosticCode::DefaultedCreatorType
                | DiagnosticCode::DuplicateRemoved
        )
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One non-fatal finding, located by JSON path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable code.
    pub code: DiagnosticCode,
    /// Location in the payload, e.g. `creators[1].creatorType`.
    pub path: String,
    /// Human-readable detail.
    pub message: String,
}

/// Overall outcome of validating one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    /// No diagnostics.
    Clean,
    /// Only informational diagnostics.
    Drifted,
    /// At least one value was repaired, dropped or kept despite being invalid.
    Degraded,
}

/// Diagnostics collected while validating one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Overall status.
    pub status: ReportStatus,
    /// Findings in payload order.
    pub diagnostics: Vec<Diagnostic>,
    /// Count of diagnostics per code.
    pub metrics: BTreeMap<String, u64>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self {
            status: ReportStatus::Clean,
            diagnostics: Vec::new(),
            metrics: BTreeMap::new(),
        }
    }
}

impl ValidationReport {
    /// Creates an empty, clean report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finding and updates status and metrics.
    pub fn push(&mut self, code: DiagnosticCode, path: &JsonPath, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            code,
            path: path.to_string(),
            message: message.into(),
        };
        trace!(code = code.as_str(), path = %diagnostic.path, message = %diagnostic.message, "diagnostic");
        *self.metrics.entry(code.as_str().to_string()).or_insert(0) += 1;
        self.status = match (self.status, code.is_informational()) {
            (ReportStatus::Degraded, _) | (_, false) => ReportStatus::Degraded,
            (_, true) => ReportStatus::Drifted,
        };
        self.diagnostics.push(diagnostic);
    }

    /// True if any diagnostic carries `code`.
    pub fn has(&self, code: DiagnosticCode) -> bool {
        self.diagnostics.iter().any(|d| d.code == code)
    }

    /// Number of diagnostics carrying `code`.
    pub fn count(&self, code: DiagnosticCode) -> usize {
        self.diagnostics.iter().filter(|d| d.code == code).count()
    }

    /// True when no diagnostics were raised.
    pub fn is_clean(&self) -> bool {
        self.status == ReportStatus::Clean
    }
}

/// A best-effort normalized record with the diagnostics raised on the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Validated<T> {
    /// Normalized record.
    pub record: T,
    /// Diagnostics and status.
    pub report: ValidationReport,
}
