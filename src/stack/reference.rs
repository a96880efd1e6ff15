// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Stack reference parsing

use crate::error::{Result, StacklinkError};
use std::fmt;
use std::str::FromStr;

/// Org used when a stack reference omits its first segment
pub const DEFAULT_ORG: &str = "organization";

/// A handle to another deployment's published outputs, written as
/// `org/project/stack`. The two-segment form `project/stack` is accepted
/// and resolves against the default org.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackReference {
    pub org: String,
    pub project: String,
    pub stack: String,
}

impl StackReference {
    pub fn new(org: &str, project: &str, stack: &str) -> Self {
        StackReference {
            org: org.to_string(),
            project: project.to_string(),
            stack: stack.to_string(),
        }
    }
}

impl FromStr for StackReference {
    type Err = StacklinkError;

    fn from_str(s: &str) -> Result<Self> {
        let segments: Vec<&str> = s.split('/').collect();
        if segments.iter().any(|seg| seg.is_empty()) {
            return Err(StacklinkError::StackRefError(format!(
                "'{}' contains an empty segment",
                s
            )));
        }
        match segments.as_slice() {
            [project, stack] => Ok(StackReference::new(DEFAULT_ORG, project, stack)),
            [org, project, stack] => Ok(StackReference::new(org, project, stack)),
            _ => Err(StacklinkError::StackRefError(format!(
                "'{}' is not of the form org/project/stack",
                s
            ))),
        }
    }
}

impl fmt::Display for StackReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.org, self.project, self.stack)
    }
}
