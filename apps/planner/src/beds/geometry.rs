//! Bed Geometry — validated bed dimensions and the named handle the optimizer runs on.

use serde::Serialize;
use uuid::Uuid;

use crate::errors::PlanError;

/// Longest bed side accepted, in inches. Bounds the candidate sweep.
pub const MAX_BED_SIDE_INCHES: f64 = 10_000.0;

/// Length and width of one rectangular bed, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BedDimensions {
    length: f64,
    width: f64,
}

impl BedDimensions {
    pub fn new(length: f64, width: f64) -> Result<Self, PlanError> {
        let valid = |v: f64| v.is_finite() && v > 0.0 && v <= MAX_BED_SIDE_INCHES;
        if !valid(length) || !valid(width) {
            return Err(PlanError::InvalidDimensions { length, width });
        }
        Ok(Self { length, width })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

/// A named bed handed to the optimizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GardenBed {
    pub id: Uuid,
    pub name: String,
    pub dimensions: BedDimensions,
}

/// Validates the dimensions and returns a handle for `run_optimization`.
pub fn construct_bed(
    name: impl Into<String>,
    length: f64,
    width: f64,
) -> Result<GardenBed, PlanError> {
    Ok(GardenBed {
        id: Uuid::new_v4(),
        name: name.into(),
        dimensions: BedDimensions::new(length, width)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_bed_keeps_name_and_dimensions() {
        let bed = construct_bed("alpha", 108.0, 34.0).unwrap();
        assert_eq!(bed.name, "alpha");
        assert_eq!(bed.dimensions.length(), 108.0);
        assert_eq!(bed.dimensions.width(), 34.0);
    }

    #[test]
    fn test_non_positive_dimensions_rejected() {
        assert_eq!(
            construct_bed("flat", 0.0, 34.0).unwrap_err(),
            PlanError::InvalidDimensions {
                length: 0.0,
                width: 34.0
            }
        );
        assert!(construct_bed("negative", 108.0, -2.0).is_err());
    }

    #[test]
    fn test_non_finite_dimensions_rejected() {
        assert!(BedDimensions::new(f64::INFINITY, 10.0).is_err());
        assert!(BedDimensions::new(12.0, f64::NAN).is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert_eq!(
            construct_bed("field", 4_294_967_300.0, 34.0).unwrap_err(),
            PlanError::InvalidDimensions {
                length: 4_294_967_300.0,
                width: 34.0
            }
        );
        assert!(BedDimensions::new(108.0, MAX_BED_SIDE_INCHES + 0.5).is_err());
        assert!(BedDimensions::new(MAX_BED_SIDE_INCHES, MAX_BED_SIDE_INCHES).is_ok());
    }

    #[test]
    fn test_each_bed_gets_its_own_id() {
        let a = construct_bed("a", 20.0, 10.0).unwrap();
        let b = construct_bed("a", 20.0, 10.0).unwrap();
        assert_ne!(a.id, b.id);
    }
}
