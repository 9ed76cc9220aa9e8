//! Seniority-based statutory vacation days.
//!
//! A step function from completed years of service to vacation days,
//! stored as ascending `min_years` thresholds. The last step is the cap.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One step of the schedule: from `min_years` onward, `days` of vacation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationStep {
    /// First year of service this step applies to (inclusive).
    pub min_years: u32,
    /// Vacation days granted.
    pub days: u32,
}

/// A validated vacation schedule.
///
/// # Example
///
/// ```
/// use payroll_engine::tables::VacationSchedule;
///
/// let schedule = VacationSchedule::mexico_2024();
/// assert_eq!(schedule.vacation_days(1), 12);
/// assert_eq!(schedule.vacation_days(7), 22);
/// assert_eq!(schedule.vacation_days(40), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<VacationStep>", into = "Vec<VacationStep>")]
pub struct VacationSchedule {
    steps: Vec<VacationStep>,
}

impl VacationSchedule {
    /// Builds a schedule, validating that it starts at zero years, is
    /// strictly ascending in years and non-decreasing in days.
    pub fn new(steps: Vec<VacationStep>) -> EngineResult<Self> {
        match steps.first() {
            None => return Err(EngineError::invalid_config("vacation schedule is empty")),
            Some(first) if first.min_years != 0 => {
                return Err(EngineError::invalid_config(format!(
                    "vacation schedule must start at 0 years, found {}",
                    first.min_years
                )));
            }
            Some(_) => {}
        }

        if let Some(step) = steps.iter().find(|s| s.days == 0) {
            return Err(EngineError::invalid_config(format!(
                "vacation step at {} years grants zero days",
                step.min_years
            )));
        }

        for pair in steps.windows(2) {
            if pair[1].min_years <= pair[0].min_years {
                return Err(EngineError::invalid_config(format!(
                    "vacation steps must be strictly ascending: {} follows {}",
                    pair[1].min_years, pair[0].min_years
                )));
            }
            if pair[1].days < pair[0].days {
                return Err(EngineError::invalid_config(format!(
                    "vacation days must not decrease: {} years grants {} after {}",
                    pair[1].min_years, pair[1].days, pair[0].days
                )));
            }
        }

        Ok(Self { steps })
    }

    /// The "Vacaciones Dignas" schedule in force from 2023 (LFT art. 76).
    ///
    /// ≤1→12, 2→14, 3→16, 4→18, 5→20, 6–10→22, 11–15→24, 16–20→26,
    /// 21–25→28, >25→30.
    pub fn mexico_2024() -> Self {
        let step = |min_years, days| VacationStep { min_years, days };
        Self {
            steps: vec![
                step(0, 12),
                step(2, 14),
                step(3, 16),
                step(4, 18),
                step(5, 20),
                step(6, 22),
                step(11, 24),
                step(16, 26),
                step(21, 28),
                step(26, 30),
            ],
        }
    }

    /// Vacation days for the given completed years of service.
    pub fn vacation_days(&self, years: u32) -> u32 {
        self.steps
            .iter()
            .rfind(|s| s.min_years <= years)
            .map(|s| s.days)
            // Validation guarantees a step at zero years.
            .unwrap_or(0)
    }

    /// The maximum number of days the schedule grants.
    pub fn max_days(&self) -> u32 {
        self.steps.last().map(|s| s.days).unwrap_or(0)
    }

    /// Returns the steps in ascending order.
    pub fn steps(&self) -> &[VacationStep] {
        &self.steps
    }
}

impl TryFrom<Vec<VacationStep>> for VacationSchedule {
    type Error = EngineError;

    fn try_from(steps: Vec<VacationStep>) -> EngineResult<Self> {
        Self::new(steps)
    }
}

impl From<VacationSchedule> for Vec<VacationStep> {
    fn from(schedule: VacationSchedule) -> Self {
        schedule.steps
    }
}
