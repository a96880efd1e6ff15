// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Stack references and the local outputs backend.

pub mod backend;
pub mod outputs;
pub mod reference;

pub use backend::StackBackend;
pub use outputs::StackOutputs;
pub use reference::StackReference;
