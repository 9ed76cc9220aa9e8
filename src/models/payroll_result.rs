//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] type and its associated
//! structures that capture all outputs from a payroll calculation, including
//! employer costs and the audit trace of every formula applied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employer-side monthly contributions and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerCost {
    /// Employer IMSS contribution (monthly).
    pub imss_employer: Decimal,
    /// INFONAVIT housing-fund contribution (monthly).
    pub infonavit: Decimal,
    /// State payroll tax (monthly).
    pub isn: Decimal,
    /// Gross plus all employer contributions (monthly).
    pub total_monthly: Decimal,
    /// Annual cost including aguinaldo and vacation premium with their
    /// social-security load.
    pub total_annual: Decimal,
}

/// One slice of the monthly gross, for pie-chart style displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    /// Display name (e.g., "Sueldo Neto").
    pub name: String,
    /// Monthly amount.
    pub value: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute article for this rule.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag figures that are valid outputs but usually mean the
/// inputs deserve a second look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns true if a warning with the given code was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }

    /// Finds the step produced by the given rule.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }
}

/// The complete result of a payroll calculation.
///
/// All amounts are unrounded. Net figures are never clamped: a negative net
/// means withholdings exceed gross and is reported as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Gross pay normalized to a month.
    pub gross_monthly: Decimal,
    /// Monthly gross times twelve.
    pub gross_annual: Decimal,
    /// Monthly gross divided by the average days per month.
    pub daily_salary: Decimal,
    /// Gross minus ISR and worker IMSS (monthly).
    pub net_monthly: Decimal,
    /// Twelve net months plus aguinaldo and vacation premium.
    pub net_annual: Decimal,
    /// ISR withholding (monthly).
    pub isr: Decimal,
    /// Worker IMSS contribution (monthly).
    pub imss_worker: Decimal,
    /// Year-end bonus.
    pub aguinaldo: Decimal,
    /// Statutory vacation days for the worker's seniority.
    pub vacation_days: u32,
    /// Vacation premium.
    pub vacation_premium: Decimal,
    /// Daily contribution base (SBC).
    pub contribution_base: Decimal,
    /// Employer-side contributions and totals.
    pub employer_cost: EmployerCost,
    /// Every formula applied, in order.
    pub audit_trace: AuditTrace,
}

impl PayrollResult {
    /// Splits the monthly gross into net pay, ISR and worker IMSS.
    ///
    /// The three values always add back up to `gross_monthly`.
    pub fn breakdown(&self) -> Vec<BreakdownEntry> {
        vec![
            BreakdownEntry {
                name: "Sueldo Neto".to_string(),
                value: self.net_monthly,
            },
            BreakdownEntry {
                name: "ISR".to_string(),
                value: self.isr,
            },
            BreakdownEntry {
                name: "IMSS (Obrero)".to_string(),
                value: self.imss_worker,
            },
        ]
    }
}
