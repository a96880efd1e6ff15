// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! File-based stack outputs backend

use crate::constants::backend::OUTPUTS_FILE;
use crate::error::{Result, StacklinkError};
use crate::stack::{StackOutputs, StackReference};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument};

/// Local outputs store, one `outputs.json` per stack under
/// `<root>/<org>/<project>/<stack>/`.
#[derive(Debug, Clone)]
pub struct StackBackend {
    root: PathBuf,
}

impl StackBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        StackBackend { root: root.into() }
    }

    fn outputs_path(&self, stack_ref: &StackReference) -> PathBuf {
        self.root
            .join(&stack_ref.org)
            .join(&stack_ref.project)
            .join(&stack_ref.stack)
            .join(OUTPUTS_FILE)
    }

    /// Read the published outputs of a stack. The value only becomes
    /// concrete when this future resolves.
    #[instrument(skip(self), fields(stack = %stack_ref))]
    pub async fn read_outputs(&self, stack_ref: &StackReference) -> Result<StackOutputs> {
        let path = self.outputs_path(stack_ref);
        debug!("Reading stack outputs from {}", path.display());

        let raw = fs::read(&path).await.map_err(|e| {
            StacklinkError::BackendError(format!(
                "failed to read outputs of stack {}: {}",
                stack_ref, e
            ))
        })?;

        serde_json::from_slice(&raw).map_err(|e| {
            StacklinkError::BackendError(format!(
                "outputs of stack {} are not a valid JSON object: {}",
                stack_ref, e
            ))
        })
    }

    /// Persist a stack's outputs, creating parent directories on demand.
    #[instrument(skip(self, outputs), fields(stack = %stack_ref))]
    pub async fn write_outputs(
        &self,
        stack_ref: &StackReference,
        outputs: &StackOutputs,
    ) -> Result<()> {
        let path = self.outputs_path(stack_ref);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                backend_write_error(stack_ref, parent, &e)
            })?;
        }

        let raw = serde_json::to_vec_pretty(outputs).map_err(|e| {
            StacklinkError::BackendError(format!(
                "failed to serialize outputs of stack {}: {}",
                stack_ref, e
            ))
        })?;

        fs::write(&path, raw)
            .await
            .map_err(|e| backend_write_error(stack_ref, &path, &e))?;

        debug!("Wrote stack outputs to {}", path.display());
        Ok(())
    }
}

fn backend_write_error(
    stack_ref: &StackReference,
    path: &Path,
    e: &std::io::Error,
) -> StacklinkError {
    StacklinkError::BackendError(format!(
        "failed to write outputs of stack {} at {}: {}",
        stack_ref,
        path.display(),
        e
    ))
}
