//! Merge disruption events from the mock feed with vessel projections
//! from the synthetic AIS generator, showing how projection-tagged data
//! stays distinguishable after aggregation. CI-safe: no network access.
//!
//! Run with: `cargo run -p pelorus --example 02_disruption_watch`

use std::sync::Arc;

use pelorus::{
    DisruptionRequest, EntityKind, Pelorus, Reliability, Severity, VesselRequest,
};
use pelorus_feeds::SyntheticConnector;
use pelorus_mock::MockConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mock = Arc::new(MockConnector::new());
    let ais = Arc::new(SyntheticConnector::with_seed(7));

    let pelorus = Pelorus::builder()
        .with_connector(mock.clone())
        .with_connector(ais.clone())
        .prefer_for_kind(EntityKind::Vessel, &[mock, ais])
        .build()?;

    let disruptions = pelorus
        .disruptions(&DisruptionRequest {
            min_severity: Some(Severity::High),
            limit: Some(10),
        })
        .await;
    println!("active high-severity disruptions:");
    for d in &disruptions {
        println!("  [{}] {} ({:?})", d.severity, d.title, d.region);
    }

    let vessels = pelorus
        .vessels(&VesselRequest {
            region: None,
            limit: Some(8),
        })
        .await;
    println!("tracked vessels:");
    for v in &vessels {
        let projected = v
            .sources
            .iter()
            .any(|s| s.reliability == Reliability::Projection);
        println!(
            "  {:9} {:24} -> {:?} {}",
            v.id,
            v.name,
            v.destination,
            if projected { "(projection)" } else { "" }
        );
    }

    Ok(())
}
