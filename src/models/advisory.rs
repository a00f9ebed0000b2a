use serde::Serialize;

/// Severity doubles as the visual category of an advisory entry.
/// Variant order matters: `overall` status is the maximum severity
/// present, so `Danger` must compare greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Success => "Optimal",
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Danger => "Critical",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "ℹ",
            Severity::Warning => "⚠",
            Severity::Danger => "!",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which rule set the advisory pipeline runs. Basic covers the
/// environment-only checks; Premium adds the nutrient-solution rules.
/// Always an explicit parameter, never process state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    Basic,
    Premium,
}

impl AnalysisMode {
    pub fn is_premium(&self) -> bool {
        matches!(self, AnalysisMode::Premium)
    }
}

/// One advisory message. `icon` is a lucide-style tag for downstream
/// renderers; ordering within an `AnalysisResult` is priority order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryEntry {
    pub severity: Severity,
    pub icon: &'static str,
    pub message: String,
}

impl AdvisoryEntry {
    pub fn new(severity: Severity, icon: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            icon,
            message: message.into(),
        }
    }
}

/// Derived physical metrics, rounded for display. Rules compare against
/// full-precision values; only these fields are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisMetrics {
    /// Vapor pressure deficit in kPa, 2 decimal places.
    pub vpd: f64,
    /// Approximated dew point in °C, 1 decimal place.
    pub dew_point: f64,
    /// Root-zone EC minus supply EC, 2 decimal places. Absent unless
    /// both readings were measured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ec_delta: Option<f64>,
    /// Root-zone pH minus supply pH, 2 decimal places.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ph_trend: Option<f64>,
}

/// Complete output of one advisory pipeline run. Contains no clocks and
/// no randomness: identical inputs produce identical results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub overall: Severity,
    pub metrics: AnalysisMetrics,
    pub advisories: Vec<AdvisoryEntry>,
}
