// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Error type of the power controller.
//!
//! Hardware that never answers is not an error here: the handshakes wait for
//! it. Errors only describe requests this controller cannot express.

/// Possible errors when requesting a power operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwrcError {
    /// The affinity value does not name a core of this SoC.
    InvalidCore(u64),
    /// The controller has no implementation of the requested operation.
    Unsupported,
}

impl core::fmt::Display for PwrcError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PwrcError::InvalidCore(mpidr) => {
                write!(f, "MPIDR {mpidr:#x} does not name a core on this SoC")
            }
            PwrcError::Unsupported => write!(f, "operation not supported by the power controller"),
        }
    }
}

impl core::error::Error for PwrcError {}

/// Convenience type alias for Result with PwrcError
pub type PwrcResult<T = ()> = Result<T, PwrcError>;
