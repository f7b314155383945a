// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Busy-wait points of the SCU handshake.
//!
//! The hardware gives no timeout: a domain that never answers keeps the caller
//! spinning. [`Spin`] preserves that. [`Bounded`] turns a stuck wait into a
//! panic so a simulated SoC can inject faults without hanging the test.
use crate::bus::RegisterBus;

/// Places where the power controller waits on hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitPoint {
    /// `SYSCSR` has not acknowledged the resume request yet.
    ResumeAck,
    /// The last power-on request was rejected through `PWRERn`.
    PowerOnRejected,
    /// `SYSCISR` has not reported the end of the SCU power-up yet.
    ScuCompletion,
}

/// Called once per unsatisfied poll of a wait point.
pub trait WaitPolicy {
    /// `spins` counts the earlier unsatisfied polls of the same wait.
    fn pause(&self, point: WaitPoint, spins: usize);
}

impl<W: WaitPolicy> WaitPolicy for &W {
    #[inline]
    fn pause(&self, point: WaitPoint, spins: usize) {
        (**self).pause(point, spins)
    }
}

/// Waits forever.
#[derive(Debug, Default, Clone, Copy)]
pub struct Spin;

impl WaitPolicy for Spin {
    #[inline]
    fn pause(&self, _point: WaitPoint, _spins: usize) {
        core::hint::spin_loop();
    }
}

/// Panics once a wait point has been polled `.0` times without success.
#[derive(Debug, Clone, Copy)]
pub struct Bounded(pub usize);

impl WaitPolicy for Bounded {
    fn pause(&self, point: WaitPoint, spins: usize) {
        if spins >= self.0 {
            panic!("{point:?} still pending after {} polls", spins + 1);
        }
        core::hint::spin_loop();
    }
}

/// Polls `addr` until one of the `mask` bits is set and returns the value read.
pub(crate) fn poll_until<B, W>(bus: &B, wait: &W, point: WaitPoint, addr: usize, mask: u32) -> u32
where
    B: RegisterBus,
    W: WaitPolicy,
{
    let mut spins = 0usize;
    loop {
        let value = bus.read(addr);
        if value & mask != 0 {
            return value;
        }
        wait.pause(point, spins);
        spins = spins.wrapping_add(1);
    }
}
