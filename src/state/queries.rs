//! Read-cache invalidation counters.
//!
//! DESIGN
//! ======
//! Each read key gets a bump counter. Resources read their counter inside
//! the fetcher closure, so bumping after a successful mutation re-runs every
//! dependent fetch. Re-requesting already-fresh state is harmless, which
//! keeps invalidation idempotent under concurrent mutations.

#[cfg(test)]
#[path = "queries_test.rs"]
mod queries_test;

/// One version counter per cached read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryVersions {
    pub series: u64,
    pub printed_assets: u64,
    pub shipments: u64,
    pub shipment_detail: u64,
    pub agency_series: u64,
    pub agency_assets: u64,
    pub dashboard: u64,
}

impl QueryVersions {
    pub fn bump_shipments(&mut self) {
        self.shipments += 1;
    }

    pub fn bump_shipment_detail(&mut self) {
        self.shipment_detail += 1;
    }

    pub fn bump_agency_series(&mut self) {
        self.agency_series += 1;
    }

    pub fn bump_agency_assets(&mut self) {
        self.agency_assets += 1;
    }

    pub fn bump_dashboard(&mut self) {
        self.dashboard += 1;
    }
}
