// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Per-core wake-up interrupt masking.
use crate::{bus::RegisterBus, cluster::CoreId};

const WUP_IRQ_SHIFT: u32 = 0;
const WUP_FIQ_SHIFT: u32 = 8;

/// IRQ and FIQ wake-up bits of `core` in `WUPMSKCAxx`.
#[inline]
pub(crate) fn wakeup_bits(core: CoreId) -> u32 {
    (1 << (WUP_IRQ_SHIFT + core.core())) | (1 << (WUP_FIQ_SHIFT + core.core()))
}

/// Sets (`masked`) or clears both wake-up bits of `core`. Other cores' bits
/// are left untouched.
pub(crate) fn set_masked<B: RegisterBus>(bus: &B, core: CoreId, masked: bool) {
    let bits = wakeup_bits(core);
    bus.modify(core.regs().wakeup_mask, |mask| {
        if masked {
            mask | bits
        } else {
            mask & !bits
        }
    });
    trace!(
        "pwrc: {core} wake-up {}",
        if masked { "masked" } else { "unmasked" }
    );
}
