// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! System-wide power controller used by the PSCI layer.
//!
//! [`GlobalPwrc`] holds the controller installed once at boot. On bare-metal
//! AArch64 a single instance drives the SoC through the identity mapping and
//! the free functions of this module forward to it. [`GlobalPwrc::setup`]
//! must run once on the boot core before any other operation.
use lazyinit::LazyInit;

use crate::{
    bus::RegisterBus,
    cluster::{CoreId, PowerState},
    error::PwrcResult,
    pwrc::{Pwrc, PwrcLock},
    wait::WaitPolicy,
};

/// A power controller installed at boot and addressed by MPIDR.
pub struct GlobalPwrc<B, W> {
    lock: &'static PwrcLock,
    lock_coherent: bool,
    pwrc: LazyInit<Pwrc<'static, B, W>>,
}

impl<B: RegisterBus, W: WaitPolicy> GlobalPwrc<B, W> {
    /// Creates an uninstalled controller around `lock`.
    ///
    /// `lock_coherent` states whether `lock` sits in memory that stays
    /// coherent across power transitions.
    pub const fn new(lock: &'static PwrcLock, lock_coherent: bool) -> Self {
        Self {
            lock,
            lock_coherent,
            pwrc: LazyInit::new(),
        }
    }

    /// Resets the lock and installs the controller.
    ///
    /// # Panics
    ///
    /// Panics if called twice, or if the lock is not in coherent memory.
    pub fn setup(&self, bus: B, wait: W, this_cpu: fn() -> usize) {
        if !self.lock_coherent {
            error!("pwrc: lock is not placed in coherent memory");
            panic!("pwrc: coherent memory is required for the power controller lock");
        }
        if self.pwrc.is_inited() {
            panic!("pwrc: setup called twice");
        }
        // SAFETY: runs once on the boot core before any other core is released.
        unsafe { self.lock.init() };
        self.pwrc.init_once(Pwrc::new(bus, wait, self.lock, this_cpu));
        info!("pwrc: power controller ready");
    }

    /// Reports whether the core named by `mpidr` exists. See [`Pwrc::status`].
    pub fn status(&self, mpidr: u64) -> PowerState {
        match CoreId::from_mpidr(mpidr) {
            Ok(core) => self.pwrc.status(core),
            Err(_) => PowerState::Invalid,
        }
    }

    /// Brings the core named by `mpidr` out of reset. See [`Pwrc::cpu_on`].
    pub fn cpu_on(&self, mpidr: u64) -> PwrcResult {
        self.pwrc.cpu_on(CoreId::from_mpidr(mpidr)?);
        Ok(())
    }

    /// See [`Pwrc::cpu_off`].
    pub fn cpu_off(&self, mpidr: u64) -> PwrcResult {
        self.pwrc.cpu_off(CoreId::from_mpidr(mpidr)?)
    }

    pub fn enable_wakeup_interrupt(&self, mpidr: u64) -> PwrcResult {
        self.pwrc.enable_wakeup_interrupt(CoreId::from_mpidr(mpidr)?);
        Ok(())
    }

    pub fn disable_wakeup_interrupt(&self, mpidr: u64) -> PwrcResult {
        self.pwrc.disable_wakeup_interrupt(CoreId::from_mpidr(mpidr)?);
        Ok(())
    }
}

#[cfg(all(target_arch = "aarch64", target_os = "none"))]
pub use self::soc::*;

#[cfg(all(target_arch = "aarch64", target_os = "none"))]
mod soc {
    use aarch64_cpu::registers::{MPIDR_EL1, Readable};

    use super::GlobalPwrc;
    use crate::{
        bus::MmioBus,
        cluster::{CoreId, PowerState},
        error::PwrcResult,
        pwrc::PwrcLock,
        wait::Spin,
    };

    #[cfg_attr(feature = "coherent-mem", unsafe(link_section = "tzfw_coherent_mem"))]
    static PWRC_LOCK: PwrcLock = PwrcLock::new();

    static PWRC: GlobalPwrc<MmioBus, Spin> =
        GlobalPwrc::new(&PWRC_LOCK, cfg!(feature = "coherent-mem"));

    /// Lock slot of the running core.
    fn this_cpu() -> usize {
        let mpidr = MPIDR_EL1.get();
        match CoreId::from_mpidr(mpidr) {
            Ok(core) => core.linear(),
            Err(err) => panic!("pwrc: running core is unknown: {err}"),
        }
    }

    /// Installs the SoC power controller. See [`GlobalPwrc::setup`].
    pub fn setup() {
        // SAFETY: EL3 runs with the register map identity mapped.
        let bus = unsafe { MmioBus::new(0) };
        PWRC.setup(bus, Spin, this_cpu);
    }

    pub fn status(mpidr: u64) -> PowerState {
        PWRC.status(mpidr)
    }

    pub fn cpu_on(mpidr: u64) -> PwrcResult {
        PWRC.cpu_on(mpidr)
    }

    pub fn cpu_off(mpidr: u64) -> PwrcResult {
        PWRC.cpu_off(mpidr)
    }

    pub fn enable_wakeup_interrupt(mpidr: u64) -> PwrcResult {
        PWRC.enable_wakeup_interrupt(mpidr)
    }

    pub fn disable_wakeup_interrupt(mpidr: u64) -> PwrcResult {
        PWRC.disable_wakeup_interrupt(mpidr)
    }
}
