//! Donut chart description of an investment breakdown.
//!
//! The chart is a plain description (slices, colors, styling and a center
//! annotation); drawing it is up to whoever consumes it.
use super::format::format_currency;
use serde::{Deserialize, Serialize};

pub const INVESTED_LABEL: &str = "Invested Amount";
pub const INTEREST_LABEL: &str = "Total Interest";
pub const INVESTED_COLOR: &str = "#3366cc";
pub const INTEREST_COLOR: &str = "#708090";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub label: String,
    pub amount: f64,
    /// Share of the total in percent, `0.0..=100.0`.
    pub percentage: f64,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    BottomHorizontal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Fraction of the radius cut out of the middle.
    pub hole: f64,
    /// Start angle of the first slice, in degrees.
    pub rotation: u16,
    pub slice_border: String,
    pub legend: LegendPosition,
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle {
            hole: 0.6,
            rotation: 90,
            slice_border: "#ffffff".to_string(),
            legend: LegendPosition::BottomHorizontal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterLabel {
    pub heading: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub slices: [ChartSlice; 2],
    pub total: f64,
    pub center_label: CenterLabel,
    pub style: ChartStyle,
}

impl ChartSpec {
    pub fn invested(&self) -> &ChartSlice {
        &self.slices[0]
    }

    pub fn interest(&self) -> &ChartSlice {
        &self.slices[1]
    }
}

fn share(amount: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        amount * 100.0 / total
    }
}

/// Splits `invested_amount + total_interest` into the two slices of a donut.
///
/// A zero total yields `0%` for both slices.
pub fn build_chart(invested_amount: f64, total_interest: f64, title: &str) -> ChartSpec {
    let total = invested_amount + total_interest;
    ChartSpec {
        title: title.to_string(),
        slices: [
            ChartSlice {
                label: INVESTED_LABEL.to_string(),
                amount: invested_amount,
                percentage: share(invested_amount, total),
                color: INVESTED_COLOR.to_string(),
            },
            ChartSlice {
                label: INTEREST_LABEL.to_string(),
                amount: total_interest,
                percentage: share(total_interest, total),
                color: INTEREST_COLOR.to_string(),
            },
        ],
        total,
        center_label: CenterLabel {
            heading: "Total Value".to_string(),
            text: format_currency(total, 0),
        },
        style: ChartStyle::default(),
    }
}
