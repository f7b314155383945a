// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! The power controller and its lock discipline.
use kbakery::{BakeryGuard, BakeryLock};

use crate::{
    bus::RegisterBus,
    cluster::{Cluster, CoreId, PowerState},
    config::PLATFORM_CORE_COUNT,
    cpu,
    error::{PwrcError, PwrcResult},
    presence, scu,
    wait::{Spin, WaitPolicy},
    wakeup,
};

/// The lock serializing every power operation, one slot per core.
///
/// It must live in memory that stays powered and coherent for every core that
/// may still run, since it arbitrates the power transitions themselves.
pub type PwrcLock = BakeryLock<PLATFORM_CORE_COUNT>;

/// Power controller bound to a register bus and a lock.
///
/// A single lock covers both clusters: at most one power operation is in
/// flight system-wide, and it holds the lock across all of its register
/// accesses.
pub struct Pwrc<'a, B, W = Spin> {
    bus: B,
    wait: W,
    lock: &'a PwrcLock,
    this_cpu: fn() -> usize,
}

impl<'a, B: RegisterBus, W: WaitPolicy> Pwrc<'a, B, W> {
    /// Creates a controller. `this_cpu` returns the lock slot of the calling
    /// core, unique among cores and below [`PLATFORM_CORE_COUNT`].
    pub const fn new(bus: B, wait: W, lock: &'a PwrcLock, this_cpu: fn() -> usize) -> Self {
        Self {
            bus,
            wait,
            lock,
            this_cpu,
        }
    }

    fn acquire(&self) -> BakeryGuard<'a, PLATFORM_CORE_COUNT> {
        self.lock.lock((self.this_cpu)())
    }

    /// Reports whether `core` exists on this part.
    ///
    /// Returns [`PowerState::Down`] for a present core and
    /// [`PowerState::Invalid`] for a fused-off one.
    pub fn status(&self, core: CoreId) -> PowerState {
        let _guard = self.acquire();
        presence::status(&self.bus, core)
    }

    /// Reports whether the shared SCU domain of `cluster` is up.
    pub fn scu_state(&self, cluster: Cluster) -> PowerState {
        let _guard = self.acquire();
        scu::domain_state(&self.bus, cluster.regs())
    }

    /// Brings `core` out of reset, powering its cluster's SCU first if needed.
    ///
    /// Blocks for as long as the SCU handshake does; with [`Spin`] that has no
    /// bound.
    pub fn cpu_on(&self, core: CoreId) {
        let _guard = self.acquire();
        debug!("pwrc: cpu_on {core}");
        cpu::cpu_on(&self.bus, &self.wait, core);
    }

    /// Core power-down is not provided by this controller.
    ///
    /// Always fails with [`PwrcError::Unsupported`] without touching a
    /// register or the lock.
    pub fn cpu_off(&self, core: CoreId) -> PwrcResult {
        warn!("pwrc: cpu_off {core} is not supported");
        Err(PwrcError::Unsupported)
    }

    /// Lets IRQ and FIQ wake `core` up.
    pub fn enable_wakeup_interrupt(&self, core: CoreId) {
        let _guard = self.acquire();
        wakeup::set_masked(&self.bus, core, false);
    }

    /// Stops IRQ and FIQ from waking `core` up.
    pub fn disable_wakeup_interrupt(&self, core: CoreId) {
        let _guard = self.acquire();
        wakeup::set_masked(&self.bus, core, true);
    }
}
