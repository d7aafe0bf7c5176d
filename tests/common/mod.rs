//! Shared test doubles and helpers.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use dns01_solver::{DnsRecord, Result, SolverError, TxtRecordStore, ZoneResolver};

/// Zone resolver that always answers with a fixed zone.
pub struct FixedZoneResolver(pub String);

#[async_trait]
impl ZoneResolver for FixedZoneResolver {
    async fn find_zone_by_fqdn(&self, _fqdn: &str) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Zone resolver that always fails, for propagation-of-error tests.
pub struct FailingZoneResolver;

#[async_trait]
impl ZoneResolver for FailingZoneResolver {
    async fn find_zone_by_fqdn(&self, fqdn: &str) -> Result<String> {
        Err(SolverError::ZoneResolution {
            fqdn: fqdn.to_string(),
            detail: "no SOA record found".to_string(),
        })
    }
}

/// In-memory record store counting writes, for idempotency tests.
#[derive(Default)]
pub struct InMemoryStore {
    records: Mutex<HashMap<(String, String), DnsRecord>>,
    set_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn set_calls(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn record(&self, zone: &str, record_name: &str) -> Option<DnsRecord> {
        self.records
            .lock()
            .unwrap()
            .get(&(zone.to_string(), record_name.to_string()))
            .cloned()
    }
}

#[async_trait]
impl TxtRecordStore for InMemoryStore {
    async fn get_txt_record(&self, zone: &str, record_name: &str) -> Result<Option<DnsRecord>> {
        if record_name.is_empty() {
            return Err(SolverError::InvalidInput {
                provider: "fake".to_string(),
                detail: "record name cannot be empty".to_string(),
            });
        }
        Ok(self.record(zone, record_name))
    }

    async fn set_txt_record(
        &self,
        zone: &str,
        record_name: &str,
        record: &DnsRecord,
    ) -> Result<()> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .lock()
            .unwrap()
            .insert((zone.to_string(), record_name.to_string()), record.clone());
        Ok(())
    }

    async fn delete_txt_record(&self, zone: &str, record_name: &str) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .lock()
            .unwrap()
            .remove(&(zone.to_string(), record_name.to_string()));
        Ok(())
    }
}
