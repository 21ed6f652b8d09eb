//! Compound-growth investment projection.
//!
//! Pure computation: nothing here touches storage or logging.
//!
//! # Invariants
//! - Terms are coarse buckets of 10, 20 or 40 months, never free input.
//! - Growth compounds annually with a fractional-year exponent.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Investment horizon bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermBucket {
    /// Up to 10 months.
    Short,
    /// 11 to 20 months.
    Medium,
    /// 21 to 40 months.
    Long,
}

impl TermBucket {
    pub const ALL: [TermBucket; 3] = [Self::Short, Self::Medium, Self::Long];

    /// Month count used by the projection, the upper edge of the bucket.
    pub fn months(self) -> u32 {
        match self {
            Self::Short => 10,
            Self::Medium => 20,
            Self::Long => 40,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// Bucket a raw month count falls into; `None` outside 1..=40.
    pub fn from_months(months: u32) -> Option<Self> {
        match months {
            1..=10 => Some(Self::Short),
            11..=20 => Some(Self::Medium),
            21..=40 => Some(Self::Long),
            _ => None,
        }
    }
}

impl FromStr for TermBucket {
    type Err = ProjectionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            "" => Err(ProjectionError::InvalidInput("no term selected".to_string())),
            other => Err(ProjectionError::InvalidInput(format!(
                "unknown term `{other}`; expected short|medium|long"
            ))),
        }
    }
}

/// Result of a projection. Monetary values share the principal's unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub principal: f64,
    pub annual_rate: f64,
    pub term_months: u32,
    pub final_amount: f64,
    pub gain: f64,
    pub yield_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    InvalidInput(String),
}

impl Display for ProjectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(reason) => write!(f, "invalid projection input: {reason}"),
        }
    }
}

impl Error for ProjectionError {}

/// Projects `principal` growing at `annual_rate` (a fraction, `0.125` for
/// 12.5%) over the bucket's month count.
///
/// `final_amount = principal * (1 + annual_rate) ^ (months / 12)`
///
/// # Errors
/// - `principal` is not a finite number greater than zero.
/// - `annual_rate` is not finite or is `<= -1`.
pub fn project(
    principal: f64,
    annual_rate: f64,
    term: TermBucket,
) -> Result<Projection, ProjectionError> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(ProjectionError::InvalidInput(format!(
            "principal must be greater than zero, got {principal}"
        )));
    }
    if !annual_rate.is_finite() || annual_rate <= -1.0 {
        return Err(ProjectionError::InvalidInput(format!(
            "annual rate must be greater than -100%, got {annual_rate}"
        )));
    }

    let term_months = term.months();
    let years = f64::from(term_months) / MONTHS_PER_YEAR;
    let final_amount = principal * (1.0 + annual_rate).powf(years);
    if !final_amount.is_finite() {
        return Err(ProjectionError::InvalidInput(format!(
            "projected amount for principal {principal} at rate {annual_rate} is out of range"
        )));
    }
    let gain = final_amount - principal;

    Ok(Projection {
        principal,
        annual_rate,
        term_months,
        final_amount,
        gain,
        yield_percent: gain / principal * 100.0,
    })
}

/// Text entry point: parses both numbers and the term label, then projects.
///
/// `term_label` is `None` when the caller has not selected a term.
pub fn project_text(
    principal: &str,
    annual_rate: &str,
    term_label: Option<&str>,
) -> Result<Projection, ProjectionError> {
    let principal = parse_number(principal, "principal")?;
    let annual_rate = parse_number(annual_rate, "annual rate")?;
    let term = parse_term(term_label)?;
    project(principal, annual_rate, term)
}

/// Parses a percent rate such as `"12,5"` into the fraction `0.125`.
pub fn parse_percent_rate(text: &str) -> Result<f64, ProjectionError> {
    Ok(parse_number(text, "annual rate")? / 100.0)
}

pub fn parse_term(term_label: Option<&str>) -> Result<TermBucket, ProjectionError> {
    term_label
        .ok_or_else(|| ProjectionError::InvalidInput("no term selected".to_string()))?
        .parse()
}

/// Parses a number entered as text, accepting `,` as decimal separator.
pub fn parse_number(text: &str, field: &str) -> Result<f64, ProjectionError> {
    let normalized = text.trim().replace(',', ".");
    let value = normalized
        .parse::<f64>()
        .map_err(|_| ProjectionError::InvalidInput(format!("{field} `{text}` is not a number")))?;
    if !value.is_finite() {
        return Err(ProjectionError::InvalidInput(format!(
            "{field} `{text}` is not a finite number"
        )));
    }
    Ok(value)
}
