// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Cluster topology: affinity decoding and the per-cluster register table.
use core::fmt;

use crate::{
    config::*,
    error::{PwrcError, PwrcResult},
};

/// Core number within its cluster (MPIDR Aff0).
pub const MPIDR_CPU_MASK: u64 = 0xFF;
/// Cluster selector (MPIDR Aff1). Non-zero selects the CA53 cluster.
pub const MPIDR_CLUSTER_MASK: u64 = 0xFF00;
const MPIDR_CLUSTER_SHIFT: u32 = 8;

/// Power state reported for a core or a cluster domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    Down,
    Up,
    /// The core does not exist on this part.
    Invalid,
}

/// One of the two clusters of the SoC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cluster {
    /// Cortex-A57 cluster, selected by a clear cluster field.
    Ca57,
    /// Cortex-A53 cluster, selected by a set cluster field.
    Ca53,
}

/// Fixed registers and bit positions of one cluster.
#[derive(Debug, PartialEq, Eq)]
pub struct ClusterRegs {
    /// Wake-up interrupt mask (`WUPMSKCAxx`).
    pub wakeup_mask: usize,
    /// SCU domain power status (`PWRSRn`).
    pub power_status: usize,
    /// SCU domain power-on request (`PWRONCRn`).
    pub power_on_req: usize,
    /// SCU domain power-on error (`PWRERn`).
    pub power_on_err: usize,
    /// Core wake-up request (`CAxxWUPCR`).
    pub wakeup_req: usize,
    /// Core reset control (`CAxxRESCNT`).
    pub reset_ctrl: usize,
    /// SCU bit in `SYSCIER`, `SYSCIMR`, `SYSCISR` and `SYSCISCR`.
    pub scu_bit: u32,
    /// Position of core 0's presence bit in `PRR`.
    pub presence_shift: u32,
    /// Upper half-word that authorizes a write to the reset control register.
    pub reset_magic: u32,
}

static CA57_REGS: ClusterRegs = ClusterRegs {
    wakeup_mask: WUPMSKCA57,
    power_status: PWRSR5,
    power_on_req: PWRONCR5,
    power_on_err: PWRER5,
    wakeup_req: CA57WUPCR,
    reset_ctrl: CA57RESCNT,
    scu_bit: 1 << 12,
    presence_shift: 27,
    reset_magic: 0xA5A5_0000,
};

static CA53_REGS: ClusterRegs = ClusterRegs {
    wakeup_mask: WUPMSKCA53,
    power_status: PWRSR3,
    power_on_req: PWRONCR3,
    power_on_err: PWRER3,
    wakeup_req: CA53WUPCR,
    reset_ctrl: CA53RESCNT,
    scu_bit: 1 << 21,
    presence_shift: 22,
    reset_magic: 0x5A5A_0000,
};

impl Cluster {
    pub const ALL: [Cluster; CLUSTER_COUNT] = [Cluster::Ca57, Cluster::Ca53];

    /// Selects the cluster from the MPIDR cluster field.
    #[inline]
    pub const fn from_mpidr(mpidr: u64) -> Self {
        if mpidr & MPIDR_CLUSTER_MASK != 0 {
            Cluster::Ca53
        } else {
            Cluster::Ca57
        }
    }

    /// Returns the register table of the cluster.
    #[inline]
    pub const fn regs(self) -> &'static ClusterRegs {
        match self {
            Cluster::Ca57 => &CA57_REGS,
            Cluster::Ca53 => &CA53_REGS,
        }
    }

    /// Position of the cluster in [`Cluster::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Cluster::Ca57 => 0,
            Cluster::Ca53 => 1,
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cluster::Ca57 => f.write_str("CA57"),
            Cluster::Ca53 => f.write_str("CA53"),
        }
    }
}

/// A core resolved from its affinity value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoreId {
    cluster: Cluster,
    core: u32,
}

impl CoreId {
    /// Builds the identifier of `core` in `cluster`.
    pub fn new(cluster: Cluster, core: u32) -> PwrcResult<Self> {
        if core as usize >= CORES_PER_CLUSTER {
            let selector = match cluster {
                Cluster::Ca57 => 0,
                Cluster::Ca53 => 1 << MPIDR_CLUSTER_SHIFT,
            };
            return Err(PwrcError::InvalidCore(selector | u64::from(core)));
        }
        Ok(Self { cluster, core })
    }

    /// Decodes an MPIDR affinity value.
    pub fn from_mpidr(mpidr: u64) -> PwrcResult<Self> {
        let core = mpidr & MPIDR_CPU_MASK;
        if core as usize >= CORES_PER_CLUSTER {
            return Err(PwrcError::InvalidCore(mpidr));
        }
        Ok(Self {
            cluster: Cluster::from_mpidr(mpidr),
            core: core as u32,
        })
    }

    /// Canonical MPIDR affinity bits of the core.
    pub const fn mpidr(self) -> u64 {
        ((self.cluster.index() as u64) << MPIDR_CLUSTER_SHIFT) | self.core as u64
    }

    #[inline]
    pub const fn cluster(self) -> Cluster {
        self.cluster
    }

    /// Core number within the cluster.
    #[inline]
    pub const fn core(self) -> u32 {
        self.core
    }

    /// Position of the core in `0..PLATFORM_CORE_COUNT`, CA57 cores first.
    #[inline]
    pub const fn linear(self) -> usize {
        self.cluster.index() * CORES_PER_CLUSTER + self.core as usize
    }

    /// The core's bit in registers indexed by core number.
    #[inline]
    pub const fn bit(self) -> u32 {
        1 << self.core
    }

    #[inline]
    pub const fn regs(self) -> &'static ClusterRegs {
        self.cluster.regs()
    }
}

impl TryFrom<u64> for CoreId {
    type Error = PwrcError;

    fn try_from(mpidr: u64) -> PwrcResult<Self> {
        Self::from_mpidr(mpidr)
    }
}

impl fmt::Display for CoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} core {}", self.cluster, self.core)
    }
}
