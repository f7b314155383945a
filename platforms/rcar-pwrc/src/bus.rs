// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! 32-bit register access.

/// Single-word access to the power controller's registers.
///
/// Each access is assumed atomic and ordered with respect to the others.
pub trait RegisterBus {
    fn read(&self, addr: usize) -> u32;

    fn write(&self, addr: usize, value: u32);

    /// Read-modify-write of one register.
    #[inline]
    fn modify(&self, addr: usize, f: impl FnOnce(u32) -> u32)
    where
        Self: Sized,
    {
        let value = f(self.read(addr));
        self.write(addr, value);
    }
}

impl<B: RegisterBus> RegisterBus for &B {
    #[inline]
    fn read(&self, addr: usize) -> u32 {
        (**self).read(addr)
    }

    #[inline]
    fn write(&self, addr: usize, value: u32) {
        (**self).write(addr, value)
    }
}

/// Volatile MMIO access at a fixed offset from the physical address.
#[derive(Debug, Clone, Copy)]
pub struct MmioBus {
    offset: usize,
}

impl MmioBus {
    /// Creates a bus that accesses physical address `pa` at `pa + offset`.
    ///
    /// # Safety
    ///
    /// Every register in [`crate::config`] must be mapped as device memory at
    /// its physical address plus `offset` for as long as the bus is used.
    pub const unsafe fn new(offset: usize) -> Self {
        Self { offset }
    }
}

impl RegisterBus for MmioBus {
    #[inline]
    fn read(&self, addr: usize) -> u32 {
        // SAFETY: the mapping is guaranteed by the caller of `MmioBus::new`.
        unsafe { core::ptr::read_volatile((addr + self.offset) as *const u32) }
    }

    #[inline]
    fn write(&self, addr: usize, value: u32) {
        // SAFETY: the mapping is guaranteed by the caller of `MmioBus::new`.
        unsafe { core::ptr::write_volatile((addr + self.offset) as *mut u32, value) }
    }
}
