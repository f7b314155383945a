// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Unit tests for affinity decoding and the cluster tables.

#![cfg(test)]

use crate::{
    Cluster, ClusterRegs, CoreId, PwrcError,
    config::PLATFORM_CORE_COUNT,
    cpu::reset_bit,
    presence::presence_bit,
    wakeup::wakeup_bits,
};

// ========== Register Table Tests ==========

#[test]
fn test_ca53_table_is_literal() {
    assert_eq!(
        Cluster::Ca53.regs(),
        &ClusterRegs {
            wakeup_mask: 0xE618_0018,
            power_status: 0xE618_0140,
            power_on_req: 0xE618_014C,
            power_on_err: 0xE618_0158,
            wakeup_req: 0xE615_2010,
            reset_ctrl: 0xE616_0044,
            scu_bit: 0x0020_0000,
            presence_shift: 22,
            reset_magic: 0x5A5A_0000,
        }
    );
}

#[test]
fn test_ca57_table_is_literal() {
    assert_eq!(
        Cluster::Ca57.regs(),
        &ClusterRegs {
            wakeup_mask: 0xE618_0014,
            power_status: 0xE618_0240,
            power_on_req: 0xE618_024C,
            power_on_err: 0xE618_0258,
            wakeup_req: 0xE615_1010,
            reset_ctrl: 0xE616_0040,
            scu_bit: 0x0000_1000,
            presence_shift: 27,
            reset_magic: 0xA5A5_0000,
        }
    );
}

#[test]
fn test_cluster_registers_never_alias() {
    let a = Cluster::Ca53.regs();
    let b = Cluster::Ca57.regs();
    let addrs = |r: &ClusterRegs| {
        [
            r.wakeup_mask,
            r.power_status,
            r.power_on_req,
            r.power_on_err,
            r.wakeup_req,
            r.reset_ctrl,
        ]
    };
    for x in addrs(a) {
        assert!(!addrs(b).contains(&x), "{x:#x} shared between clusters");
    }
    assert_eq!(a.scu_bit & b.scu_bit, 0);
}

// ========== Affinity Decoding Tests ==========

#[test]
fn test_cluster_selector_set_is_ca53() {
    let core = CoreId::from_mpidr(0x0000_0102).unwrap();
    assert_eq!(core.cluster(), Cluster::Ca53);
    assert_eq!(core.core(), 2);
    assert_eq!(core.regs().reset_magic, 0x5A5A_0000);

    // Any non-zero selector picks the CA53 cluster.
    let core = CoreId::from_mpidr(0x8000_0301).unwrap();
    assert_eq!(core.cluster(), Cluster::Ca53);
    assert_eq!(core.core(), 1);
}

#[test]
fn test_cluster_selector_clear_is_ca57() {
    let core = CoreId::from_mpidr(0x0000_0003).unwrap();
    assert_eq!(core.cluster(), Cluster::Ca57);
    assert_eq!(core.core(), 3);
    assert_eq!(core.regs().reset_magic, 0xA5A5_0000);
}

#[test]
fn test_core_index_out_of_range() {
    assert_eq!(
        CoreId::from_mpidr(0x0000_0104),
        Err(PwrcError::InvalidCore(0x104))
    );
    assert_eq!(
        CoreId::new(Cluster::Ca57, 4),
        Err(PwrcError::InvalidCore(0x4))
    );
    assert_eq!(
        CoreId::try_from(0xFFu64),
        Err(PwrcError::InvalidCore(0xFF))
    );
}

#[test]
fn test_mpidr_round_trip_and_linear_positions() {
    let mut seen = [false; PLATFORM_CORE_COUNT];
    for cluster in Cluster::ALL {
        for n in 0..4 {
            let core = CoreId::new(cluster, n).unwrap();
            assert_eq!(CoreId::from_mpidr(core.mpidr()), Ok(core));
            assert!(!seen[core.linear()]);
            seen[core.linear()] = true;
        }
    }
    assert!(seen.iter().all(|&s| s));
    assert_eq!(CoreId::new(Cluster::Ca57, 0).unwrap().linear(), 0);
    assert_eq!(CoreId::new(Cluster::Ca53, 0).unwrap().linear(), 4);
}

// ========== Bit Position Tests ==========

#[test]
fn test_bit_positions() {
    let ca57_2 = CoreId::new(Cluster::Ca57, 2).unwrap();
    assert_eq!(ca57_2.bit(), 0b0100);
    assert_eq!(presence_bit(ca57_2), 1 << 29);
    assert_eq!(reset_bit(ca57_2), 1 << 1);
    assert_eq!(wakeup_bits(ca57_2), (1 << 2) | (1 << 10));

    let ca53_0 = CoreId::new(Cluster::Ca53, 0).unwrap();
    assert_eq!(presence_bit(ca53_0), 1 << 22);
    assert_eq!(reset_bit(ca53_0), 1 << 3);
    assert_eq!(wakeup_bits(ca53_0), (1 << 0) | (1 << 8));
}

// ========== Display Tests ==========

#[test]
fn test_display_messages() {
    let core = CoreId::new(Cluster::Ca53, 1).unwrap();
    assert_eq!(format!("{core}"), "CA53 core 1");
    assert_eq!(
        format!("{}", PwrcError::InvalidCore(0x104)),
        "MPIDR 0x104 does not name a core on this SoC"
    );
    assert_eq!(
        format!("{}", PwrcError::Unsupported),
        "operation not supported by the power controller"
    );
}
