// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test fixtures for elytron-commands
//!
//! Provides an in-memory recording client so command tests can assert
//! exactly which operations were submitted, in which order, with which
//! payloads — without any server.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use elytron_commands::{Address, ManagementClient, OperationError, RemoveOutcome, Values};

/// One operation observed by the recording client
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    /// `add` with the rendered address and the JSON form of the payload
    Add {
        address: String,
        payload: serde_json::Value,
    },
    /// `remove_if_exists` with the rendered address
    RemoveIfExists { address: String },
    /// `reload_if_required`
    ReloadIfRequired,
}

/// Management client that records every call instead of talking to a server
#[derive(Default)]
pub struct RecordingClient {
    calls: Mutex<Vec<RecordedCall>>,
    existing: Mutex<HashSet<String>>,
    fail_add_with: Option<String>,
}

impl RecordingClient {
    /// Client with no pre-existing resources
    pub fn new() -> Self {
        Self::default()
    }

    /// Client that reports the given addresses as existing resources
    pub fn with_existing<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            existing: Mutex::new(addresses.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Client whose `add` fails with the given server failure description
    pub fn failing_add(message: impl Into<String>) -> Self {
        Self {
            fail_add_with: Some(message.into()),
            ..Self::default()
        }
    }

    /// Snapshot of all recorded calls, in submission order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ManagementClient for RecordingClient {
    async fn add(&self, address: &Address, values: Values) -> Result<(), OperationError> {
        self.record(RecordedCall::Add {
            address: address.to_string(),
            payload: values.to_json(),
        });
        match &self.fail_add_with {
            Some(message) => Err(OperationError::Failed(message.clone())),
            None => Ok(()),
        }
    }

    async fn remove_if_exists(&self, address: &Address) -> Result<RemoveOutcome, OperationError> {
        let rendered = address.to_string();
        self.record(RecordedCall::RemoveIfExists {
            address: rendered.clone(),
        });
        match self.existing.lock().unwrap().remove(&rendered) {
            true => Ok(RemoveOutcome::Removed),
            false => Ok(RemoveOutcome::Absent),
        }
    }

    async fn reload_if_required(&self) -> Result<(), OperationError> {
        self.record(RecordedCall::ReloadIfRequired);
        Ok(())
    }
}
