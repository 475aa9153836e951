//! Maturity calculations for the supported savings instruments.
//!
//! Every function here is pure: rates are annual percentages (`7.1` means
//! 7.1%) and nothing is rounded. Formatting to two decimals is left to the
//! caller.
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

/// Outcome of a single maturity calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub invested_amount: f64,
    pub total_interest: f64,
    pub maturity_value: f64,
}

impl CalculationResult {
    fn from_maturity(invested_amount: f64, maturity_value: f64) -> Self {
        CalculationResult {
            invested_amount,
            total_interest: maturity_value - invested_amount,
            maturity_value,
        }
    }

    /// Interest earned per month of the horizon, `0.0` for an empty horizon.
    pub fn average_monthly_interest(&self, months: f64) -> f64 {
        if months > 0.0 {
            self.total_interest / months
        } else {
            0.0
        }
    }
}

/// Future value factor of `periods` contributions of 1 growing at `rate` per
/// period, i.e. `((1 + rate)^periods - 1) / rate`.
///
/// Uses `ln_1p`/`exp_m1` so small rates keep their precision. At a zero rate
/// the factor is its limit, `periods`.
fn annuity_factor(rate: f64, periods: f64) -> f64 {
    if rate == 0.0 {
        return periods;
    }
    (periods * rate.ln_1p()).exp_m1() / rate
}

/// Public Provident Fund: a yearly contribution `p` for `n` years at `i`%.
pub fn calculate_ppf(p: f64, n: f64, i: f64) -> CalculationResult {
    if i == 0.0 {
        debug!("PPF rate is zero, maturity reduces to the sum of contributions");
    }
    let invested = p * n;
    let maturity = p * annuity_factor(i / 100.0, n);
    CalculationResult::from_maturity(invested, maturity)
}

/// Whole-year terms up to this length credit interest year by year.
const MAX_CREDITED_YEARS: f64 = 50.0;

/// Fixed deposit of `p` at `r`% compounded yearly for `t` years.
///
/// Whole-year terms up to `MAX_CREDITED_YEARS` credit interest at each
/// anniversary. Any other term uses `p * (1 + r/100)^t` directly.
pub fn calculate_fd_compound(p: f64, r: f64, t: f64) -> CalculationResult {
    let maturity = if t.fract() == 0.0 && (0.0..=MAX_CREDITED_YEARS).contains(&t) {
        (0..t as u32).fold(p, |balance, _| balance + balance * r / 100.0)
    } else {
        p * (1.0 + r / 100.0).powf(t)
    };
    CalculationResult::from_maturity(p, maturity)
}

/// Fixed deposit of `p` at `r`% simple interest for `t` years.
pub fn calculate_fd_simple(p: f64, r: f64, t: f64) -> CalculationResult {
    CalculationResult {
        invested_amount: p,
        total_interest: p * r * t / 100.0,
        maturity_value: p * (1.0 + r * t / 100.0),
    }
}

/// Systematic investment plan: `p` every month for `t` years, expected to
/// return `r`% a year. Contributions are made at the start of each month.
pub fn calculate_sip(p: f64, r: f64, t: f64) -> CalculationResult {
    if r == 0.0 {
        debug!("SIP rate is zero, maturity reduces to the sum of contributions");
    }
    let months = t * 12.0;
    let monthly_rate = r / 1200.0;
    let invested = p * months;
    let maturity = p * annuity_factor(monthly_rate, months) * (1.0 + monthly_rate);
    CalculationResult::from_maturity(invested, maturity)
}

/// Recurring deposit: `p` every month for `t` years at `r`% a year,
/// compounded quarterly.
///
/// Each installment accrues interest only for the time it remains deposited,
/// so the maturity is summed installment by installment.
pub fn calculate_rd(p: f64, r: f64, t: f64) -> CalculationResult {
    let installments = (t * 12.0).floor().max(0.0) as u32;
    let quarterly_growth = 1.0 + r / 400.0;
    let maturity: f64 = (0..installments)
        .map(|k| p * quarterly_growth.powf(4.0 * (t - f64::from(k) / 12.0)))
        .sum();
    let invested = p * f64::from(installments);
    CalculationResult::from_maturity(invested, maturity)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestType {
    #[default]
    Simple,
    Compound,
}

impl Display for InterestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                InterestType::Simple => "Simple",
                InterestType::Compound => "Compound",
            }
        )
    }
}

impl FromStr for InterestType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(InterestType::Simple),
            "compound" => Ok(InterestType::Compound),
            _ => Err(anyhow::anyhow!("Invalid interest type: {}", s)),
        }
    }
}

/// A fully specified calculation for one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Instrument {
    Ppf {
        yearly_investment: f64,
        years: f64,
        rate: f64,
    },
    FixedDeposit {
        amount: f64,
        rate: f64,
        years: f64,
        interest_type: InterestType,
    },
    Sip {
        monthly_investment: f64,
        rate: f64,
        years: f64,
    },
    RecurringDeposit {
        monthly_investment: f64,
        rate: f64,
        years: f64,
    },
}

impl Instrument {
    pub fn calculate(&self) -> CalculationResult {
        let result = match *self {
            Instrument::Ppf {
                yearly_investment,
                years,
                rate,
            } => calculate_ppf(yearly_investment, years, rate),
            Instrument::FixedDeposit {
                amount,
                rate,
                years,
                interest_type: InterestType::Simple,
            } => calculate_fd_simple(amount, rate, years),
            Instrument::FixedDeposit {
                amount,
                rate,
                years,
                interest_type: InterestType::Compound,
            } => calculate_fd_compound(amount, rate, years),
            Instrument::Sip {
                monthly_investment,
                rate,
                years,
            } => calculate_sip(monthly_investment, rate, years),
            Instrument::RecurringDeposit {
                monthly_investment,
                rate,
                years,
            } => calculate_rd(monthly_investment, rate, years),
        };
        debug!(instrument = self.name(), ?result, "Calculated maturity");
        result
    }

    pub fn name(&self) -> &'static str {
        match self {
            Instrument::Ppf { .. } => "PPF Calculator",
            Instrument::FixedDeposit { .. } => "Fixed Deposit Calculator",
            Instrument::Sip { .. } => "SIP Calculator",
            Instrument::RecurringDeposit { .. } => "RD Calculator",
        }
    }

    pub fn chart_title(&self) -> &'static str {
        match self {
            Instrument::Ppf { .. } => "PPF Investment Breakdown",
            Instrument::FixedDeposit { .. } => "FD Investment Breakdown",
            Instrument::Sip { .. } => "SIP Investment Breakdown",
            Instrument::RecurringDeposit { .. } => "RD Investment Breakdown",
        }
    }
}
