//! Input ranges and resolution of command line values against the config.
use crate::core::calculators::{Instrument, InterestType};
use crate::core::config::AppConfig;
use tracing::{debug, warn};

/// Accepted range of one numeric input, with the granularity it moves in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputRange {
    pub const fn new(name: &'static str, min: f64, max: f64, step: f64) -> Self {
        InputRange {
            name,
            min,
            max,
            step,
        }
    }

    fn snap(&self, value: f64) -> f64 {
        if self.step >= 1.0 {
            (value / self.step).round() * self.step
        } else {
            let scale = self.step.recip().round();
            (value * scale).round() / scale
        }
    }

    /// Clamps `value` into the range and snaps it to the step.
    pub fn apply(&self, value: f64) -> f64 {
        let applied = if value.is_nan() {
            self.min
        } else {
            self.snap(value.clamp(self.min, self.max))
                .clamp(self.min, self.max)
        };
        if applied != value {
            warn!(
                field = self.name,
                requested = value,
                applied,
                "Input adjusted to the accepted range"
            );
        }
        applied
    }
}

pub const PPF_YEARLY_INVESTMENT: InputRange =
    InputRange::new("yearly investment", 500.0, 1_000_000.0, 500.0);
pub const PPF_YEARS: InputRange = InputRange::new("time period", 1.0, 30.0, 1.0);

pub const FD_AMOUNT: InputRange = InputRange::new("total investment", 1000.0, 1_000_000.0, 1000.0);
pub const FD_RATE: InputRange = InputRange::new("rate of interest", 1.0, 15.0, 0.1);
pub const FD_YEARS: InputRange = InputRange::new("time period", 1.0, 10.0, 1.0);

pub const SIP_MONTHLY_INVESTMENT: InputRange =
    InputRange::new("monthly investment", 1000.0, 500_000.0, 1000.0);
pub const SIP_RATE: InputRange = InputRange::new("expected return rate", 8.0, 20.0, 0.1);
pub const SIP_YEARS: InputRange = InputRange::new("time period", 1.0, 30.0, 1.0);

pub const RD_MONTHLY_INVESTMENT: InputRange =
    InputRange::new("monthly investment", 100.0, 100_000.0, 100.0);
pub const RD_RATE: InputRange = InputRange::new("rate of interest", 1.0, 15.0, 0.1);
pub const RD_YEARS: InputRange = InputRange::new("time period", 1.0, 10.0, 1.0);

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PpfRequest {
    pub yearly_investment: Option<f64>,
    pub years: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedDepositRequest {
    pub amount: Option<f64>,
    pub rate: Option<f64>,
    pub years: Option<f64>,
    pub interest_type: Option<InterestType>,
}

/// Inputs shared by the monthly contribution calculators (SIP and RD).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthlyRequest {
    pub monthly_investment: Option<f64>,
    pub rate: Option<f64>,
    pub years: Option<f64>,
}

impl PpfRequest {
    pub fn resolve(&self, config: &AppConfig) -> Instrument {
        let defaults = &config.ppf;
        Instrument::Ppf {
            yearly_investment: PPF_YEARLY_INVESTMENT
                .apply(self.yearly_investment.unwrap_or(defaults.yearly_investment)),
            years: PPF_YEARS.apply(self.years.unwrap_or(defaults.years)),
            rate: defaults.rate,
        }
    }
}

impl FixedDepositRequest {
    pub fn resolve(&self, config: &AppConfig) -> Instrument {
        let defaults = &config.fd;
        Instrument::FixedDeposit {
            amount: FD_AMOUNT.apply(self.amount.unwrap_or(defaults.amount)),
            rate: FD_RATE.apply(self.rate.unwrap_or(defaults.rate)),
            years: FD_YEARS.apply(self.years.unwrap_or(defaults.years)),
            interest_type: self.interest_type.unwrap_or(defaults.interest_type),
        }
    }
}

impl MonthlyRequest {
    pub fn resolve_sip(&self, config: &AppConfig) -> Instrument {
        let defaults = &config.sip;
        Instrument::Sip {
            monthly_investment: SIP_MONTHLY_INVESTMENT
                .apply(self.monthly_investment.unwrap_or(defaults.monthly_investment)),
            rate: SIP_RATE.apply(self.rate.unwrap_or(defaults.rate)),
            years: SIP_YEARS.apply(self.years.unwrap_or(defaults.years)),
        }
    }

    pub fn resolve_rd(&self, config: &AppConfig) -> Instrument {
        let defaults = &config.rd;
        let instrument = Instrument::RecurringDeposit {
            monthly_investment: RD_MONTHLY_INVESTMENT
                .apply(self.monthly_investment.unwrap_or(defaults.monthly_investment)),
            rate: RD_RATE.apply(self.rate.unwrap_or(defaults.rate)),
            years: RD_YEARS.apply(self.years.unwrap_or(defaults.years)),
        };
        debug!(?instrument, "Resolved RD inputs");
        instrument
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_clamps_to_bounds() {
        assert_eq!(PPF_YEARS.apply(0.0), 1.0);
        assert_eq!(PPF_YEARS.apply(45.0), 30.0);
        assert_eq!(FD_RATE.apply(0.5), 1.0);
        assert_eq!(SIP_RATE.apply(25.0), 20.0);
        assert_eq!(RD_MONTHLY_INVESTMENT.apply(-10.0), 100.0);
        assert_eq!(FD_AMOUNT.apply(f64::INFINITY), 1_000_000.0);
    }

    #[test]
    fn test_apply_snaps_to_step() {
        assert_eq!(PPF_YEARLY_INVESTMENT.apply(1234.0), 1000.0);
        assert_eq!(PPF_YEARLY_INVESTMENT.apply(1250.0), 1500.0);
        assert_eq!(SIP_MONTHLY_INVESTMENT.apply(5400.0), 5000.0);
        assert_eq!(FD_RATE.apply(7.14), 7.1);
        assert_eq!(SIP_YEARS.apply(4.6), 5.0);
    }

    #[test]
    fn test_apply_keeps_valid_values() {
        assert_eq!(PPF_YEARLY_INVESTMENT.apply(150000.0), 150000.0);
        assert_eq!(FD_RATE.apply(10.0), 10.0);
        assert_eq!(RD_RATE.apply(8.0), 8.0);
        assert_eq!(SIP_RATE.apply(12.3), 12.3);
    }

    #[test]
    fn test_apply_nan_falls_back_to_minimum() {
        assert_eq!(RD_YEARS.apply(f64::NAN), 1.0);
    }

    #[test]
    fn test_resolve_uses_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(
            PpfRequest::default().resolve(&config),
            Instrument::Ppf {
                yearly_investment: 150000.0,
                years: 15.0,
                rate: 7.1
            }
        );
        assert_eq!(
            FixedDepositRequest::default().resolve(&config),
            Instrument::FixedDeposit {
                amount: 100000.0,
                rate: 10.0,
                years: 5.0,
                interest_type: InterestType::Simple
            }
        );
        assert_eq!(
            MonthlyRequest::default().resolve_sip(&config),
            Instrument::Sip {
                monthly_investment: 5000.0,
                rate: 12.0,
                years: 5.0
            }
        );
        assert_eq!(
            MonthlyRequest::default().resolve_rd(&config),
            Instrument::RecurringDeposit {
                monthly_investment: 5000.0,
                rate: 8.0,
                years: 1.0
            }
        );
    }

    #[test]
    fn test_resolve_prefers_requested_values() {
        let config = AppConfig::default();
        let request = FixedDepositRequest {
            amount: Some(250000.0),
            rate: Some(6.5),
            years: Some(3.0),
            interest_type: Some(InterestType::Compound),
        };
        assert_eq!(
            request.resolve(&config),
            Instrument::FixedDeposit {
                amount: 250000.0,
                rate: 6.5,
                years: 3.0,
                interest_type: InterestType::Compound
            }
        );

        let request = MonthlyRequest {
            monthly_investment: Some(1_000_000.0),
            rate: None,
            years: Some(50.0),
        };
        assert_eq!(
            request.resolve_rd(&config),
            Instrument::RecurringDeposit {
                monthly_investment: 100_000.0,
                rate: 8.0,
                years: 10.0
            }
        );
    }

    #[test]
    fn test_ppf_rate_comes_from_config() {
        let mut config = AppConfig::default();
        config.ppf.rate = 7.6;
        match PpfRequest::default().resolve(&config) {
            Instrument::Ppf { rate, .. } => assert_eq!(rate, 7.6),
            other => panic!("Expected a PPF instrument, got {other:?}"),
        }
    }
}
