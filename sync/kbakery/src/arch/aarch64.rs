// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

use core::arch::asm;

#[inline]
pub fn wait_event() {
    aarch64_cpu::asm::wfe();
}

/// The store being announced must be visible before the event is.
#[inline]
pub fn send_event() {
    unsafe { asm!("dsb ish", options(nostack, preserves_flags)) };
    aarch64_cpu::asm::sev();
}
