use fincalc::cli::inputs::{FixedDepositRequest, MonthlyRequest, PpfRequest};
use fincalc::core::InterestType;
use fincalc::{AppCommand, OutputFormat};
use std::fs;
use tracing::info;

mod test_utils {
    use std::fs;

    pub fn write_config(content: &str) -> tempfile::NamedTempFile {
        let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        fs::write(config_file.path(), content).expect("Failed to write config file");
        config_file
    }
}

#[test_log::test]
fn test_full_app_flow_with_config() {
    let config_file = test_utils::write_config(
        r#"
        ppf:
          yearly_investment: 150000
          years: 15
          rate: 7.1
        "#,
    );

    let result = fincalc::run_command(
        AppCommand::Ppf(PpfRequest::default()),
        Some(config_file.path().to_str().unwrap()),
        OutputFormat::Text,
    );
    assert!(
        result.is_ok(),
        "Main function failed with: {:?}",
        result.err()
    );
}

#[test_log::test]
fn test_command_line_values_override_config() {
    let config_file = test_utils::write_config(
        r#"
        fd:
          amount: 500000
          rate: 5.0
          years: 2
          interest_type: compound
        "#,
    );

    let output = fincalc::render_command(
        AppCommand::FixedDeposit(FixedDepositRequest {
            amount: Some(100000.0),
            rate: Some(10.0),
            years: Some(1.0),
            interest_type: None,
        }),
        Some(config_file.path().to_str().unwrap()),
        OutputFormat::Json,
    )
    .expect("Render failed");
    info!(%output, "Rendered FD report");

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["instrument"]["type"], "fixed_deposit");
    assert_eq!(json["instrument"]["interest_type"], "compound");
    assert_eq!(json["result"]["invested_amount"], 100000.0);
    assert_eq!(json["result"]["maturity_value"], 110000.0);
    assert_eq!(json["chart"]["title"], "FD Investment Breakdown");
}

#[test_log::test]
fn test_out_of_range_inputs_are_clamped() {
    let config_file = test_utils::write_config("{}");

    let output = fincalc::render_command(
        AppCommand::Sip(MonthlyRequest {
            monthly_investment: Some(10.0),
            rate: Some(50.0),
            years: Some(100.0),
        }),
        Some(config_file.path().to_str().unwrap()),
        OutputFormat::Json,
    )
    .expect("Render failed");

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["instrument"]["monthly_investment"], 1000.0);
    assert_eq!(json["instrument"]["rate"], 20.0);
    assert_eq!(json["instrument"]["years"], 30.0);
    assert_eq!(json["result"]["invested_amount"], 360000.0);
}

#[test_log::test]
fn test_rd_text_report() {
    let config_file = test_utils::write_config(
        r#"
        rd:
          monthly_investment: 5000
          rate: 8.0
          years: 1
        "#,
    );

    let output = fincalc::render_command(
        AppCommand::RecurringDeposit(MonthlyRequest::default()),
        Some(config_file.path().to_str().unwrap()),
        OutputFormat::Text,
    )
    .expect("Render failed");

    assert!(output.contains("RD Calculator"));
    assert!(output.contains("₹60,000.00"));
    assert!(output.contains("RD Investment Breakdown"));
    assert!(output.contains("Total Value"));
}

#[test_log::test]
fn test_chart_percentages_sum_to_hundred() {
    let config_file = test_utils::write_config("{}");
    let commands = [
        AppCommand::Ppf(PpfRequest::default()),
        AppCommand::FixedDeposit(FixedDepositRequest {
            interest_type: Some(InterestType::Compound),
            ..Default::default()
        }),
        AppCommand::Sip(MonthlyRequest::default()),
        AppCommand::RecurringDeposit(MonthlyRequest::default()),
    ];

    for command in commands {
        let output = fincalc::render_command(
            command,
            Some(config_file.path().to_str().unwrap()),
            OutputFormat::Json,
        )
        .expect("Render failed");
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        let invested = json["chart"]["slices"][0]["percentage"].as_f64().unwrap();
        let interest = json["chart"]["slices"][1]["percentage"].as_f64().unwrap();
        assert!(
            (invested + interest - 100.0).abs() < 1e-9,
            "{command:?} percentages sum to {}",
            invested + interest
        );
    }
}

#[test_log::test]
fn test_invalid_config_fails() {
    let config_file = test_utils::write_config("fd: [1, 2, 3]");

    let result = fincalc::run_command(
        AppCommand::FixedDeposit(FixedDepositRequest::default()),
        Some(config_file.path().to_str().unwrap()),
        OutputFormat::Text,
    );
    assert!(result.is_err());
}

#[test_log::test]
fn test_setup_then_run() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yaml");

    fincalc::cli::setup::setup_at_path(&config_path).expect("Setup failed");
    assert!(fs::read_to_string(&config_path).unwrap().contains("ppf:"));

    let result = fincalc::run_command(
        AppCommand::Sip(MonthlyRequest::default()),
        Some(config_path.to_str().unwrap()),
        OutputFormat::Text,
    );
    assert!(result.is_ok(), "Run failed with: {:?}", result.err());
}
