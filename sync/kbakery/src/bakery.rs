// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

use core::sync::atomic::{
    AtomicBool, AtomicU32,
    Ordering::{Relaxed, SeqCst},
};

use crate::arch;

/// A fair lock shared by `N` contender slots.
///
/// Unlike a spinlock the lock carries no data: it only orders the critical
/// sections of its contenders. Slot numbers must be unique per concurrently
/// running contender, which on a multi-core system means one slot per core.
pub struct BakeryLock<const N: usize> {
    /// Set while the slot is drawing its ticket.
    pub(crate) choosing: [AtomicBool; N],
    /// Ticket held by the slot, `0` when the slot is not contending.
    pub(crate) number: [AtomicU32; N],
}

impl<const N: usize> BakeryLock<N> {
    /// Creates a lock with every slot idle.
    pub const fn new() -> Self {
        Self {
            choosing: [const { AtomicBool::new(false) }; N],
            number: [const { AtomicU32::new(0) }; N],
        }
    }

    /// Returns the number of contender slots.
    #[inline]
    pub const fn slots(&self) -> usize {
        N
    }

    /// Returns every slot to idle.
    ///
    /// Needed when the lock lives in a section the loader does not zero.
    ///
    /// # Safety
    ///
    /// No contender may hold or wait for the lock while it is reset.
    pub unsafe fn init(&self) {
        for (choosing, number) in self.choosing.iter().zip(&self.number) {
            choosing.store(false, Relaxed);
            number.store(0, Relaxed);
        }
        arch::send_event();
    }

    /// Blocks until `slot` is admitted, then returns a guard that releases the
    /// lock on drop.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not below `N`.
    pub fn lock(&self, slot: usize) -> BakeryGuard<'_, N> {
        assert!(slot < N, "bakery slot {slot} out of range ({N} slots)");
        debug_assert_eq!(
            self.number[slot].load(Relaxed),
            0,
            "bakery slot {slot} is already contending"
        );

        self.choosing[slot].store(true, SeqCst);
        let ticket = self.next_ticket();
        self.number[slot].store(ticket, SeqCst);
        self.choosing[slot].store(false, SeqCst);
        arch::send_event();

        for other in (0..N).filter(|&other| other != slot) {
            while self.choosing[other].load(SeqCst) {
                arch::wait_event();
            }
            loop {
                let theirs = self.number[other].load(SeqCst);
                if theirs == 0 || (theirs, other) > (ticket, slot) {
                    break;
                }
                arch::wait_event();
            }
        }

        BakeryGuard { lock: self, slot }
    }

    /// Returns the ticket currently drawn by `slot`, `0` if it is idle.
    #[inline]
    pub fn ticket(&self, slot: usize) -> u32 {
        self.number[slot].load(SeqCst)
    }

    /// Tickets grow while the lock stays contended and restart once every slot
    /// is idle. Drawing past `u32::MAX` would let a newcomer overtake the
    /// holder, so that many back-to-back acquisitions without an idle moment
    /// are outside the lock's contract.
    pub(crate) fn next_ticket(&self) -> u32 {
        let highest = self
            .number
            .iter()
            .map(|number| number.load(SeqCst))
            .max()
            .unwrap_or(0);
        debug_assert!(highest < u32::MAX, "bakery tickets exhausted");
        highest.wrapping_add(1).max(1)
    }

    fn unlock(&self, slot: usize) {
        self.number[slot].store(0, SeqCst);
        arch::send_event();
    }
}

impl<const N: usize> Default for BakeryLock<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Proof that a slot has been admitted to the critical section.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct BakeryGuard<'a, const N: usize> {
    lock: &'a BakeryLock<N>,
    slot: usize,
}

impl<const N: usize> BakeryGuard<'_, N> {
    /// Returns the slot holding the lock.
    #[inline]
    pub fn slot(&self) -> usize {
        self.slot
    }
}

impl<const N: usize> Drop for BakeryGuard<'_, N> {
    fn drop(&mut self) {
        self.lock.unlock(self.slot);
    }
}
