//! VoltMarket Profiles
//!
//! Read-only profile and reputation aggregation for the VoltMarket EV
//! marketplace. The service fetches raw party, transaction and review
//! records from the upstream marketplace API and renders them into
//! display-ready summaries: rating averages with star decompositions,
//! transactions partitioned into status buckets, and recent reviews
//! cross-linked to the orders they were issued for.
//!
//! The aggregation engine ([`profile::ProfileEngine`]) is pure and
//! synchronous; all I/O lives in [`client`] and the HTTP facade.

pub mod client;
pub mod config;
pub mod currency;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod profile;
pub mod rating;
pub mod routes;
pub mod state;
