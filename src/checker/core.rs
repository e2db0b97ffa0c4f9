use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::time::Duration;

use crate::client::DeviceClient;
use crate::config::Config;

/// GET a path and hand back the body, failing on anything but a 200.
async fn fetch_ok(client: &DeviceClient, path: &str) -> Result<String> {
    let response = client.get(path).await?;
    let status = response.status();
    if status != reqwest::StatusCode::OK {
        bail!("{}: expected status 200, got {}", path, status.as_u16());
    }
    response
        .text()
        .await
        .with_context(|| format!("{path}: failed to read response body"))
}

fn parse_entries(path: &str, body: &str) -> Result<Vec<Value>> {
    let json: Value = serde_json::from_str(body)
        .with_context(|| format!("{path}: response body is not valid json"))?;
    match json {
        Value::Array(entries) => Ok(entries),
        other => bail!(
            "{}: expected a top-level json array, got {}",
            path,
            json_type(&other)
        ),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The device serves an HTML status page at the root
async fn check_root(client: &DeviceClient) -> Result<()> {
    println!("Testing root endpoint...");
    let body = fetch_ok(client, "/").await?;
    println!("Root endpoint passed!");
    println!("{body}");
    Ok(())
}

/// The monitor page renders measurements as an HTML table
async fn check_monitor(client: &DeviceClient) -> Result<()> {
    println!("Testing monitor endpoint...");
    let body = fetch_ok(client, "/monitor").await?;
    if !body.contains("<table>") {
        bail!("/monitor: response body has no <table> markup");
    }
    println!("Monitor endpoint passed!");
    println!("{body}");
    Ok(())
}

/// Measurements come back as a json array; element shape is up to the firmware
async fn check_data(client: &DeviceClient) -> Result<()> {
    println!("Testing data endpoint...");
    let body = fetch_ok(client, "/data").await?;
    let entries = parse_entries("/data", &body)?;
    println!("Data endpoint passed! ({} entries)", entries.len());
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

/// Same contract as /data, but the device reboots after responding, so give
/// it time to come back up before anyone talks to it again.
async fn check_data_reset(client: &DeviceClient, reset_delay: u64) -> Result<()> {
    println!("Testing data&reset endpoint...");
    let body = fetch_ok(client, "/data&reset").await?;
    let entries = parse_entries("/data&reset", &body)?;
    println!("Data&reset endpoint passed! ({} entries)", entries.len());
    println!("{}", serde_json::to_string_pretty(&entries)?);

    log::debug!("{}: waiting {}s for the device to reset", client.addr(), reset_delay);
    async_std::task::sleep(Duration::from_secs(reset_delay)).await;
    Ok(())
}

/// Run all checks in a fixed order, stopping at the first failure.
pub async fn run(client: &DeviceClient, config: &Config) -> Result<()> {
    check_root(client).await?;
    check_monitor(client).await?;
    check_data(client).await?;
    check_data_reset(client, config.reset_delay()).await?;
    Ok(())
}
