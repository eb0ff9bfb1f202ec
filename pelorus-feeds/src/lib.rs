//! pelorus-feeds
//!
//! Production connectors that implement the `pelorus-core` contracts on
//! top of real HTTP sources, plus the synthetic projection connector.
//!
//! - [`client::FallbackClient`]: a resilient fetch primitive that tries a
//!   direct request first and then an ordered list of transport proxies,
//!   unwrapping each proxy's envelope format before declaring success.
//! - [`GovTradeConnector`]: port profiles and tariff lines from a
//!   government trade API.
//! - [`NewsWireConnector`]: disruption events classified from maritime
//!   news RSS feeds (fetched through the proxy chain, since feeds serve
//!   XML that only the item-parsing proxies can unwrap).
//! - [`SyntheticConnector`]: deterministic, seeded vessel projections for
//!   environments without an AIS subscription. Every record it emits is
//!   tagged `Reliability::Projection`.
#![warn(missing_docs)]

/// The fetch-with-fallback HTTP transport.
pub mod client;
/// Government trade API connector (ports, tariffs).
pub mod gov;
/// Maritime news wire connector (disruptions).
pub mod newswire;
/// Seeded synthetic projection connector (vessels).
pub mod synthetic;

pub use client::FallbackClient;
pub use gov::GovTradeConnector;
pub use newswire::NewsWireConnector;
pub use synthetic::SyntheticConnector;
