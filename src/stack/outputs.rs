// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! A stack's published outputs document

use crate::error::{Result, StacklinkError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The key to JSON value map a stack publishes for other stacks to consume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct StackOutputs {
    values: BTreeMap<String, Value>,
}

impl StackOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Get an output that must be present
    pub fn require(&self, key: &str) -> Result<&Value> {
        self.get(key).ok_or_else(|| {
            StacklinkError::OutputError(format!("stack did not export '{}'", key))
        })
    }

    /// Get an output that must be present and a string
    pub fn require_str(&self, key: &str) -> Result<&str> {
        self.require(key)?.as_str().ok_or_else(|| {
            StacklinkError::OutputError(format!("output '{}' is not a string", key))
        })
    }
}
