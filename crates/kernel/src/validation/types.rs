//! Shared types for solid validation.
//!
//! Defines error codes, severity levels, individual findings and the
//! `ValidationReport` returned by `SolidValidator`.

use std::fmt;

/// Severity of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The solid is empty, unbounded or numerically broken.
    Error,
    /// Informational; the renderer still accepts it.
    Warning,
}

/// Enumeration of all validation error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // --- Parameters ---
    /// A center coordinate, size, radius or height is NaN or infinite.
    NonFiniteParameter,
    /// A size, radius or height is zero or negative.
    NonPositiveExtent,
    /// A regular polygon base has fewer than three sides.
    TooFewSides,
    // --- Planes ---
    /// The generated plane count differs from what the family promises.
    PlaneCountMismatch,
    /// A plane component is NaN or infinite.
    NonFinitePlane,
    /// A plane normal has zero length (zero-area face).
    ZeroNormal,
    /// A plane normal is not unit length.
    NonUnitNormal,
    /// The shape's reference point lies outside a half-space.
    ReferencePointOutside,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A single validation finding (error or warning).
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The error code classifying this issue.
    pub code: ErrorCode,
    /// Index into the plane list, for plane-level findings.
    pub plane_index: Option<usize>,
    /// Human-readable description.
    pub message: String,
    pub severity: Severity,
    /// Measured value, e.g. the normal length or signed distance.
    pub numeric_value: Option<f64>,
}

impl ValidationError {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            plane_index: None,
            message: message.into(),
            severity: Severity::Error,
            numeric_value: None,
        }
    }

    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(code, message)
        }
    }

    pub fn at_plane(mut self, index: usize) -> Self {
        self.plane_index = Some(index);
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.numeric_value = Some(value);
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sev = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        match self.plane_index {
            Some(i) => write!(f, "{sev} {} at plane {i}: {}", self.code, self.message)?,
            None => write!(f, "{sev} {}: {}", self.code, self.message)?,
        }
        if let Some(val) = self.numeric_value {
            write!(f, " ({val})")?;
        }
        Ok(())
    }
}

/// Findings for one shape or plane list.
///
/// `valid` is false as soon as there is one error; warnings never affect it.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn new(errors: Vec<ValidationError>, warnings: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub fn errors_of(&self, code: ErrorCode) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.code == code).collect()
    }

    /// True if any error carries `code`.
    pub fn has_error(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Indices of planes named by at least one error, ascending and deduplicated.
    pub fn failing_planes(&self) -> Vec<usize> {
        let mut planes: Vec<usize> = self.errors.iter().filter_map(|e| e.plane_index).collect();
        planes.sort_unstable();
        planes.dedup();
        planes
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.valid { "valid" } else { "invalid" };
        write!(f, "{verdict}: {} error(s), {} warning(s)", self.errors.len(), self.warnings.len())?;
        for finding in self.errors.iter().chain(&self.warnings) {
            write!(f, "\n  {finding}")?;
        }
        Ok(())
    }
}
