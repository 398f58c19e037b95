// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

/// Rejected tuning value.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Friction must be a finite value strictly between 0 and 1.
    #[error("friction must be in the open interval (0, 1), got {0}")]
    FrictionOutOfRange(f64),
}
