//! Aggregate port profiles from the mock connector and print a short
//! congestion overview. CI-safe: no network access.
//!
//! Run with: `cargo run -p pelorus --example 01_port_overview`

use std::sync::Arc;

use pelorus::{Pelorus, PortRequest};
use pelorus_mock::MockConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pelorus=debug".into()),
        )
        .init();

    let pelorus = Pelorus::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()?;

    let report = pelorus
        .ports_report(&PortRequest {
            region: None,
            limit: Some(5),
        })
        .await;

    println!("top ports ({:?}):", report.origin);
    for port in &report.records {
        println!(
            "  {:6} {:14} congestion={:?} vessels={:?} wait={:?}h",
            port.id, port.name, port.congestion, port.vessel_count, port.avg_wait_hours
        );
    }

    // A second identical request is served from the cache.
    let cached = pelorus
        .ports_report(&PortRequest {
            region: None,
            limit: Some(5),
        })
        .await;
    println!("second call origin: {:?}", cached.origin);

    Ok(())
}
