// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Core presence from the product register.
use crate::{
    bus::RegisterBus,
    cluster::{CoreId, PowerState},
    config::PRR,
};

/// `PRR` bit that is set when `core` is fused off.
#[inline]
pub(crate) fn presence_bit(core: CoreId) -> u32 {
    1 << (core.regs().presence_shift + core.core())
}

/// Reports [`PowerState::Down`] for a core present on the part and
/// [`PowerState::Invalid`] for one that is not. Never reports `Up`.
pub(crate) fn status<B: RegisterBus>(bus: &B, core: CoreId) -> PowerState {
    let prr = bus.read(PRR);
    let state = if prr & presence_bit(core) == 0 {
        PowerState::Down
    } else {
        PowerState::Invalid
    };
    debug!("pwrc: {core} status {state:?} (PRR {prr:#010x})");
    state
}
