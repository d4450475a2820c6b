//! Terminal browser for a hot-coffee catalog.
//!
//! Two screens over one read-only HTTP collection: a list of cards fetched
//! at startup and a detail view for the selected record, which travels
//! across the navigation boundary as a JSON text payload. The fetch
//! lifecycle (loading, error, empty, ready, refresh) is a pure reducer in
//! [`catalog`].

pub mod catalog;
pub mod config;
pub mod logging;
pub mod nav;
pub mod strings;
pub mod ui;
