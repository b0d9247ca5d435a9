pub mod config;
pub mod types;

pub use config::*;
pub use types::*;

use tracing::{info, instrument};

use crate::geometry::plane::Plane;
use crate::geometry::point::Point3d;
use crate::solids::SolidShape;

/// Raised by [`SolidValidator::checked_planes`] when a shape fails validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SolidError {
    #[error("{family} failed validation with {count} error(s); first: {first}")]
    Invalid {
        family: &'static str,
        count: usize,
        first: String,
    },
}

/// Opt-in checks for shape parameters and generated plane sets.
///
/// The generators never reject input; this layer reports what they would
/// silently produce. Convexity and boundedness are not re-derived: the
/// reference-point check only confirms the intended interior is inside.
pub struct SolidValidator {
    config: ValidationConfig,
}

impl Default for SolidValidator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

impl SolidValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a shape's parameters and, if enabled, the planes it generates.
    #[instrument(skip(self))]
    pub fn validate_shape(&self, shape: &SolidShape) -> ValidationReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.config.check_parameters {
            check_parameters(shape, &mut errors);
        }

        if self.config.check_planes || self.config.check_reference_point {
            let planes = shape.planes();
            if self.config.check_planes && planes.len() != shape.plane_count() {
                errors.push(
                    ValidationError::error(
                        ErrorCode::PlaneCountMismatch,
                        format!("expected {} planes, generated {}", shape.plane_count(), planes.len()),
                    )
                    .with_value(planes.len() as f64),
                );
            }
            let reference = shape.reference_point();
            self.check_plane_set(&planes, Some(&reference), &mut errors, &mut warnings);
        }

        let report = ValidationReport::new(errors, warnings);
        info!(
            family = shape.family(),
            valid = report.valid,
            error_count = report.error_count(),
            warning_count = report.warning_count(),
            "validation complete"
        );
        report
    }

    /// Validate an arbitrary plane list, optionally against a point expected inside.
    pub fn validate_planes(&self, planes: &[Plane], interior: Option<&Point3d>) -> ValidationReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        self.check_plane_set(planes, interior, &mut errors, &mut warnings);
        ValidationReport::new(errors, warnings)
    }

    /// Generate the shape's planes only if it passes validation.
    pub fn checked_planes(&self, shape: &SolidShape) -> Result<Vec<Plane>, SolidError> {
        let report = self.validate_shape(shape);
        if let Some(first) = report.errors.first() {
            return Err(SolidError::Invalid {
                family: shape.family(),
                count: report.error_count(),
                first: first.to_string(),
            });
        }
        Ok(shape.planes())
    }

    fn check_plane_set(
        &self,
        planes: &[Plane],
        interior: Option<&Point3d>,
        errors: &mut Vec<ValidationError>,
        warnings: &mut Vec<ValidationError>,
    ) {
        let tol = &self.config.tolerance;

        for (i, plane) in planes.iter().enumerate() {
            if !plane.is_finite() {
                errors.push(
                    ValidationError::error(ErrorCode::NonFinitePlane, "plane has a non-finite component")
                        .at_plane(i),
                );
                continue;
            }

            if self.config.check_planes {
                let len = plane.normal.length();
                if tol.is_zero_length(len) {
                    errors.push(
                        ValidationError::error(ErrorCode::ZeroNormal, "plane normal has zero length")
                            .at_plane(i)
                            .with_value(len),
                    );
                    continue;
                }
                if !tol.is_unit_length(len) {
                    let finding = if self.config.strict_unit_normals {
                        ValidationError::error(ErrorCode::NonUnitNormal, "plane normal is not unit length")
                    } else {
                        ValidationError::warning(ErrorCode::NonUnitNormal, "plane normal is not unit length")
                    };
                    let finding = finding.at_plane(i).with_value(len);
                    match finding.severity {
                        Severity::Error => errors.push(finding),
                        Severity::Warning => warnings.push(finding),
                    }
                }
            }

            if self.config.check_reference_point {
                if let Some(p) = interior {
                    let dist = plane.signed_distance(p);
                    if !tol.is_inside(dist) {
                        errors.push(
                            ValidationError::error(
                                ErrorCode::ReferencePointOutside,
                                "reference point is on the exterior side of the plane",
                            )
                            .at_plane(i)
                            .with_value(dist),
                        );
                    }
                }
            }
        }
    }
}

fn check_parameters(shape: &SolidShape, errors: &mut Vec<ValidationError>) {
    let (center, extents, sides): (Point3d, Vec<(&str, f64)>, Option<usize>) = match shape {
        SolidShape::Cube(p) => (p.center, vec![("size", p.size)], None),
        SolidShape::Box(p) => (
            p.center,
            vec![("width", p.width), ("height", p.height), ("depth", p.depth)],
            None,
        ),
        SolidShape::Prism(p) => (
            p.center,
            vec![("radius", p.radius), ("height", p.height)],
            Some(p.sides),
        ),
        SolidShape::Pyramid(p) => (
            p.base_center,
            vec![("radius", p.radius), ("height", p.height)],
            Some(p.sides),
        ),
    };

    if !center.is_finite() {
        errors.push(ValidationError::error(
            ErrorCode::NonFiniteParameter,
            format!("center {:?} is not finite", center.to_array()),
        ));
    }

    for (name, value) in extents {
        if !value.is_finite() {
            errors.push(
                ValidationError::error(ErrorCode::NonFiniteParameter, format!("{name} is not finite"))
                    .with_value(value),
            );
        } else if value <= 0.0 {
            errors.push(
                ValidationError::error(ErrorCode::NonPositiveExtent, format!("{name} must be positive"))
                    .with_value(value),
            );
        }
    }

    if let Some(n) = sides {
        if n < 3 {
            errors.push(
                ValidationError::error(ErrorCode::TooFewSides, format!("{n} sides cannot bound a polygon"))
                    .with_value(n as f64),
            );
        }
    }
}
