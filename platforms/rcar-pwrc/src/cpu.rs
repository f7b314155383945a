// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Release of a core from reset.
use crate::{bus::RegisterBus, cluster::CoreId, config::CPGWPR, scu, wait::WaitPolicy};

/// Bit of `CAxxRESCNT` holding `core` in reset. Core 0 owns bit 3.
#[inline]
pub(crate) fn reset_bit(core: CoreId) -> u32 {
    1 << (3 - core.core())
}

/// Powers the cluster's SCU if needed, then lets `core` leave reset.
///
/// The core starts fetching from its reset vector; whether it actually comes
/// up is for the caller to observe.
pub(crate) fn cpu_on<B, W>(bus: &B, wait: &W, core: CoreId)
where
    B: RegisterBus,
    W: WaitPolicy,
{
    let regs = core.regs();
    scu::power_up(bus, wait, core.cluster());

    // Unprotect this core's controls only.
    bus.write(CPGWPR, !core.bit());
    bus.write(regs.wakeup_req, core.bit());
    let rescnt = bus.read(regs.reset_ctrl) | regs.reset_magic;
    bus.write(regs.reset_ctrl, rescnt & !reset_bit(core));

    debug!("pwrc: {core} released from reset");
}
