use super::ui;
use crate::core::format::{format_currency, format_percentage};
use crate::core::{CalculationResult, ChartSpec, Instrument, build_chart};
use anyhow::{Context, Result};
use comfy_table::{Cell, Color};
use serde::Serialize;

const BAR_WIDTH: usize = 30;

/// One calculation with everything needed to show it.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub instrument: Instrument,
    pub result: CalculationResult,
    pub chart: ChartSpec,
}

impl Report {
    pub fn new(instrument: Instrument) -> Self {
        let result = instrument.calculate();
        let chart = build_chart(
            result.invested_amount,
            result.total_interest,
            instrument.chart_title(),
        );
        Report {
            instrument,
            result,
            chart,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }

    pub fn display_as_text(&self) -> String {
        let mut output = format!(
            "{}\n\n",
            ui::style_text(self.instrument.name(), ui::StyleType::Title)
        );

        output.push_str(&self.inputs_table());
        output.push_str(&format!(
            "\n\n{}\n",
            ui::style_text("Results", ui::StyleType::Heading)
        ));
        output.push_str(&self.results_table());

        if let Instrument::Sip {
            monthly_investment,
            years,
            ..
        } = self.instrument
        {
            output.push_str(&format!(
                "\n\n{}\n",
                ui::style_text("Monthly Breakdown", ui::StyleType::Heading)
            ));
            let mut table = ui::new_styled_table();
            table.add_row(vec![
                Cell::new("Monthly Investment"),
                ui::value_cell(format_currency(monthly_investment, 2)),
            ]);
            table.add_row(vec![
                Cell::new("Average Monthly Interest"),
                ui::value_cell(format_currency(
                    self.result.average_monthly_interest(years * 12.0),
                    2,
                )),
            ]);
            output.push_str(&table.to_string());
        }

        output.push_str(&format!("\n\n{}\n\n", ui::separator()));
        output.push_str(&self.chart.display_as_donut());
        output
    }

    fn inputs_table(&self) -> String {
        let rows: Vec<(&str, String)> = match self.instrument {
            Instrument::Ppf {
                yearly_investment,
                years,
                rate,
            } => vec![
                ("Yearly Investment", format_currency(yearly_investment, 2)),
                ("Time Period (Years)", format!("{years}")),
                ("Rate of Interest", format!("{rate}%")),
            ],
            Instrument::FixedDeposit {
                amount,
                rate,
                years,
                interest_type,
            } => vec![
                ("Total Investment", format_currency(amount, 2)),
                ("Rate of Interest (%)", format!("{rate}")),
                ("Time Period (Years)", format!("{years}")),
                ("Interest Type", interest_type.to_string()),
            ],
            Instrument::Sip {
                monthly_investment,
                rate,
                years,
            } => vec![
                ("Monthly Investment", format_currency(monthly_investment, 2)),
                ("Expected Return Rate (% p.a)", format!("{rate}")),
                ("Time Period (Years)", format!("{years}")),
            ],
            Instrument::RecurringDeposit {
                monthly_investment,
                rate,
                years,
            } => vec![
                ("Monthly Investment", format_currency(monthly_investment, 2)),
                ("Rate of Interest (% p.a)", format!("{rate}")),
                ("Time Period (Years)", format!("{years}")),
            ],
        };

        let mut table = ui::new_styled_table();
        table.set_header(vec![ui::header_cell("Input"), ui::header_cell("Value")]);
        for (label, value) in rows {
            table.add_row(vec![Cell::new(label), ui::value_cell(value)]);
        }
        table.to_string()
    }

    fn results_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.add_row(vec![
            Cell::new("Invested Amount"),
            ui::value_cell(format_currency(self.result.invested_amount, 2)),
        ]);
        table.add_row(vec![
            Cell::new("Total Interest"),
            ui::value_cell(format_currency(self.result.total_interest, 2)),
        ]);
        table.add_row(vec![
            Cell::new("Maturity Value"),
            ui::highlight_cell(format_currency(self.result.maturity_value, 2)),
        ]);
        table.to_string()
    }
}

impl ChartSpec {
    /// Terminal rendition of the donut: a legend with a bar per slice and the
    /// center total below it.
    pub fn display_as_donut(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell(""),
            ui::header_cell("Component"),
            ui::header_cell("Amount"),
            ui::header_cell("Share"),
            ui::header_cell(""),
        ]);

        for slice in &self.slices {
            let color = ui::hex_color(&slice.color).unwrap_or(Color::Reset);
            table.add_row(vec![
                Cell::new("●").fg(color),
                Cell::new(&slice.label),
                ui::value_cell(format_currency(slice.amount, 2)),
                ui::value_cell(format_percentage(slice.percentage)),
                Cell::new(ui::proportion_bar(slice.percentage, BAR_WIDTH)).fg(color),
            ]);
        }

        format!(
            "{}\n\n{}\n\n{}: {}",
            ui::style_text(&self.title, ui::StyleType::Title),
            table,
            ui::style_text(&self.center_label.heading, ui::StyleType::TotalLabel),
            ui::style_text(&self.center_label.text, ui::StyleType::TotalValue)
        )
    }
}
