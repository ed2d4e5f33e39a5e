//! Validated prediction inputs.

use wage_predictor_labour_models::{
    AgeGroup, Education, EstablishmentSize, Gender, Industry, Occupation, Province, UnionStatus,
};

use crate::InputError;

/// Employment duration in months, `0..=240`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tenure(u8);

impl Tenure {
    /// Shortest accepted tenure.
    pub const MIN: i64 = 0;
    /// Longest accepted tenure (20 years).
    pub const MAX: i64 = 240;
    /// Tenure used when the caller does not supply one.
    pub const DEFAULT: Self = Self(1);

    /// Validates a tenure in months.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::OutOfRange`] if `months` is outside `0..=240`.
    pub fn new(months: i64) -> Result<Self, InputError> {
        u8::try_from(months)
            .ok()
            .filter(|m| i64::from(*m) <= Self::MAX)
            .map(Self)
            .ok_or_else(|| InputError::OutOfRange {
                field: "tenure",
                value: months.to_string(),
                min: Self::MIN.to_string(),
                max: Self::MAX.to_string(),
            })
    }

    /// The tenure in months.
    #[must_use]
    pub const fn months(self) -> u8 {
        self.0
    }
}

impl Default for Tenure {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Usual weekly hours at the main job, `0.1..=99.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct UsualHours(f64);

impl UsualHours {
    /// Fewest accepted weekly hours.
    pub const MIN: f64 = 0.1;
    /// Most accepted weekly hours.
    pub const MAX: f64 = 99.0;
    /// Hours used when the caller does not supply them.
    pub const DEFAULT: Self = Self(24.0);

    /// Validates a weekly hour count. `NaN` is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::OutOfRange`] if `hours` is outside `0.1..=99`.
    pub fn new(hours: f64) -> Result<Self, InputError> {
        if (Self::MIN..=Self::MAX).contains(&hours) {
            Ok(Self(hours))
        } else {
            Err(InputError::OutOfRange {
                field: "usualhours",
                value: hours.to_string(),
                min: Self::MIN.to_string(),
                max: Self::MAX.to_string(),
            })
        }
    }

    /// Weekly hours.
    #[must_use]
    pub const fn hours(self) -> f64 {
        self.0
    }

    /// Weekly hours in tenths, the unit the model was trained on.
    #[must_use]
    pub fn tenths(self) -> f64 {
        self.0 * 10.0
    }
}

impl Default for UsualHours {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One fully validated set of model inputs.
///
/// [`Default`] yields the documented fallback selection: senior management
/// in agriculture, no schooling, one month of tenure, a small
/// establishment, a 15 to 19 year old unionized man in Newfoundland and
/// Labrador working 24 hours a week.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PredictionRequest {
    /// Occupation group.
    pub occupation: Occupation,
    /// Industry sector.
    pub industry: Industry,
    /// Highest schooling completed.
    pub education: Education,
    /// Months with the current employer.
    pub tenure: Tenure,
    /// Establishment workforce size.
    pub establishment_size: EstablishmentSize,
    /// Gender.
    pub gender: Gender,
    /// Age band.
    pub age: AgeGroup,
    /// Province of employment.
    pub province: Province,
    /// Union status.
    pub union: UnionStatus,
    /// Usual weekly hours.
    pub usual_hours: UsualHours,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenure_bounds_are_inclusive() {
        assert_eq!(Tenure::new(0).unwrap().months(), 0);
        assert_eq!(Tenure::new(240).unwrap().months(), 240);
        assert!(Tenure::new(-1).is_err());
        assert!(Tenure::new(241).is_err());
    }

    #[test]
    fn usual_hours_bounds_are_inclusive() {
        assert!(UsualHours::new(0.1).is_ok());
        assert!(UsualHours::new(99.0).is_ok());
        assert!(UsualHours::new(0.0).is_err());
        assert!(UsualHours::new(100.0).is_err());
        assert!(UsualHours::new(f64::NAN).is_err());
        assert!(UsualHours::new(f64::INFINITY).is_err());
    }

    #[test]
    fn out_of_range_names_the_constraint() {
        let err = Tenure::new(241).unwrap_err();
        assert_eq!(
            err.to_string(),
            "tenure must be between 0 and 240, got 241"
        );

        let err = UsualHours::new(100.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "usualhours must be between 0.1 and 99, got 100"
        );
    }

    #[test]
    fn default_request_uses_fallback_values() {
        let request = PredictionRequest::default();
        assert_eq!(request.occupation, Occupation::SeniorManagement);
        assert_eq!(request.industry, Industry::Agriculture);
        assert_eq!(request.education, Education::NoSchooling);
        assert_eq!(request.tenure.months(), 1);
        assert_eq!(request.establishment_size, EstablishmentSize::LessThan20);
        assert_eq!(request.gender, Gender::Men);
        assert_eq!(request.age, AgeGroup::Age15To19);
        assert_eq!(request.province, Province::NewfoundlandAndLabrador);
        assert_eq!(request.union, UnionStatus::Member);
        assert!((request.usual_hours.hours() - 24.0).abs() < f64::EPSILON);
    }
}
