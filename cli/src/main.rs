use std::fmt::Write as _;

use clap::{Args, Parser, Subcommand};
use heating::envelope::{CalculationData, Health, Success};
use heating::{CalculationInput, FloorType};
use serde_json::Value;

const CALCULATE_PATH: &str = "/api/v1/underfloor/calculate";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {body}")]
    ServerError { status: u16, body: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("formatting failed")]
    Format(#[from] std::fmt::Error),
}

#[derive(Parser, Debug)]
#[command(name = "heating-cli", about = "Underfloor heating calculator API CLI")]
struct Cli {
    #[arg(long, env = "HEATING_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the API is up.
    Ping,
    /// Run a calculation and print the result.
    Calculate(CalculateArgs),
}

#[derive(Args, Debug)]
struct CalculateArgs {
    /// Floor area in m².
    #[arg(long)]
    area: f64,

    /// Required thermal load in W/m².
    #[arg(long)]
    thermal_load: f64,

    /// Floor finish: PETREO, MADERA_MACIZA, MADERA_FLOTANTE or MOQUETA.
    #[arg(long)]
    floor: FloorType,

    /// Manifold-to-room distance in metres.
    #[arg(long)]
    collector_distance: f64,

    /// Boiler-to-manifold distance in metres.
    #[arg(long)]
    feed_distance: Option<f64>,

    /// Print the raw response instead of a summary.
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl CalculateArgs {
    fn input(&self) -> CalculationInput {
        CalculationInput {
            area: self.area,
            thermal_load: self.thermal_load,
            floor_type: self.floor,
            collector_distance: self.collector_distance,
            feed_distance: self.feed_distance,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Command::Ping => run_ping(&client, &cli.base_url).await,
        Command::Calculate(args) => run_calculate(&client, &cli.base_url, &args).await,
    }
}

async fn run_ping(client: &reqwest::Client, base_url: &str) -> Result<(), CliError> {
    let value = api_request(client, reqwest::Method::GET, &api_url(base_url, "/health"), None).await?;
    let health = serde_json::from_value::<Health>(value)?;
    println!("{} {} v{} at {}", health.status, health.service, health.version, health.timestamp);
    Ok(())
}

async fn run_calculate(client: &reqwest::Client, base_url: &str, args: &CalculateArgs) -> Result<(), CliError> {
    let body = serde_json::to_value(args.input())?;
    let value = api_request(client, reqwest::Method::POST, &api_url(base_url, CALCULATE_PATH), Some(body)).await?;

    if args.json {
        return print_json(&value);
    }
    let response = serde_json::from_value::<Success<CalculationData>>(value)?;
    print!("{}", summary(&response.data)?);
    Ok(())
}

async fn api_request(
    client: &reqwest::Client,
    method: reqwest::Method,
    url: &str,
    body: Option<Value>,
) -> Result<Value, CliError> {
    let request = client.request(method, url);
    let request = if let Some(json) = body { request.json(&json) } else { request };

    let response = request.send().await?;
    let status = response.status();
    let value = response.json::<Value>().await.unwrap_or_else(|_| Value::Null);

    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), body: value.to_string() });
    }

    Ok(value)
}

fn api_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Human-readable report of a calculation and its budget.
fn summary(data: &CalculationData) -> Result<String, CliError> {
    let calc = &data.calculation;
    let budget = &data.budget;
    let mut out = String::new();

    writeln!(out, "Pipe step:          {} cm", calc.step_cm)?;
    writeln!(out, "Pipe density:       {:.2} m/m²", calc.density)?;
    writeln!(out, "Serpentine length:  {:.2} m", calc.serpentine_length)?;
    writeln!(out, "Feed run length:    {:.2} m", calc.feed_run_length)?;
    writeln!(out, "Total length:       {:.2} m", calc.total_length)?;
    writeln!(out, "Circuits:           {}", calc.circuit_count)?;
    writeln!(out, "Max floor power:    {:.0} W/m²", calc.max_floor_power)?;
    writeln!(out, "Note: {}", calc.design_note)?;
    if let Some(advisory) = &calc.advisory {
        writeln!(out, "\n[{:?}] {}", advisory.level, advisory.message)?;
    }

    writeln!(out, "\nBudget:")?;
    for item in &budget.items {
        writeln!(
            out,
            "  {:<14} {:<40} {:>5} {:<6} {:>10.2}",
            item.product_id, item.name, item.quantity, item.unit, item.subtotal
        )?;
    }
    writeln!(out, "Estimated waste:    {:.2} m", budget.estimated_waste_m)?;
    writeln!(out, "Total:              {:.2}", budget.total)?;
    Ok(out)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
