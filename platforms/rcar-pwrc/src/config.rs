// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! R-Car Gen3 register map used by the power controller.
//!
//! All registers are 32 bits wide. Addresses are physical; [`MmioBus`]
//! applies the mapping offset.
//!
//! [`MmioBus`]: crate::MmioBus

/// Number of clusters on the SoC.
pub const CLUSTER_COUNT: usize = 2;
/// Cores in each cluster.
pub const CORES_PER_CLUSTER: usize = 4;
/// Total number of cores, and of bakery lock slots.
pub const PLATFORM_CORE_COUNT: usize = CLUSTER_COUNT * CORES_PER_CLUSTER;

/// Product register. A set bit marks a core that is fused off.
pub const PRR: usize = 0xFFF0_0044;

/// System controller.
pub const SYSC_BASE: usize = 0xE618_0000;
/// Status register; carries the resume-request acknowledge.
pub const SYSCSR: usize = SYSC_BASE + 0x0000;
/// Interrupt status register.
pub const SYSCISR: usize = SYSC_BASE + 0x0004;
/// Interrupt status clear register.
pub const SYSCISCR: usize = SYSC_BASE + 0x0008;
/// Interrupt enable register.
pub const SYSCIER: usize = SYSC_BASE + 0x000C;
/// Interrupt mask register.
pub const SYSCIMR: usize = SYSC_BASE + 0x0010;
pub const WUPMSKCA57: usize = SYSC_BASE + 0x0014;
pub const WUPMSKCA53: usize = SYSC_BASE + 0x0018;
/// CA53-SCU power domain.
pub const PWRSR3: usize = SYSC_BASE + 0x0140;
pub const PWRONCR3: usize = SYSC_BASE + 0x014C;
pub const PWRER3: usize = SYSC_BASE + 0x0158;
/// CA57-SCU power domain.
pub const PWRSR5: usize = SYSC_BASE + 0x0240;
pub const PWRONCR5: usize = SYSC_BASE + 0x024C;
pub const PWRER5: usize = SYSC_BASE + 0x0258;

/// Clock pulse generator.
pub const CPG_BASE: usize = 0xE615_0000;
/// Write protect register guarding the reset and wake-up controls.
pub const CPGWPR: usize = CPG_BASE + 0x0900;

/// Advanced power management unit.
pub const APMU_BASE: usize = 0xE615_0000;
pub const CA57WUPCR: usize = APMU_BASE + 0x1010;
pub const CA53WUPCR: usize = APMU_BASE + 0x2010;

/// Reset controller.
pub const RST_BASE: usize = 0xE616_0000;
pub const CA57RESCNT: usize = RST_BASE + 0x0040;
pub const CA53RESCNT: usize = RST_BASE + 0x0044;
