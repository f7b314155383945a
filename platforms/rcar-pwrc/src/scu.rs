// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Power-up handshake of a cluster's shared SCU domain.
//!
//! The SYSC power sequencer accepts a power-on request only inside its own
//! resume window and reports a request issued outside of it through `PWRERn`.
//! The handshake is therefore:
//!
//! 1. nothing to do unless `PWRSRn` reports the domain down;
//! 2. arm the SCU bit in `SYSCIER` and `SYSCIMR` so completion is latched in
//!    `SYSCISR`;
//! 3. wait for `SYSCSR` to acknowledge the resume request, write `PWRONCRn`,
//!    and start over from the wait while `PWRERn` reports a rejection;
//! 4. wait for the SCU bit in `SYSCISR`, then clear it through `SYSCISCR`.
//!
//! There is no power-down path: a domain only ever goes from down to up here.
use bitflags::bitflags;

use crate::{
    bus::RegisterBus,
    cluster::{Cluster, ClusterRegs, PowerState},
    config::{SYSCIER, SYSCIMR, SYSCISCR, SYSCISR, SYSCSR},
    wait::{WaitPoint, WaitPolicy, poll_until},
};

bitflags! {
    /// `SYSCSR` bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SyscStatus: u32 {
        /// Ready to accept a power-off request.
        const REQ_OFF = 1 << 0;
        /// Ready to accept a resume (power-on) request.
        const REQ_RESUME = 1 << 1;
    }
}

bitflags! {
    /// `PWRSRn` bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DomainStatus: u32 {
        const PWRDOWN = 1 << 0;
        const PWRUP = 1 << 1;
    }
}

/// Value written to `PWRONCRn` to request power-on.
pub const PWRON_REQUEST: u32 = 0x1;
/// `PWRERn` bit reporting a rejected request.
pub const PWRER_REJECTED: u32 = 0x1;

/// Reads the SCU domain state from `PWRSRn`.
pub(crate) fn domain_state<B: RegisterBus>(bus: &B, regs: &ClusterRegs) -> PowerState {
    let status = DomainStatus::from_bits_retain(bus.read(regs.power_status));
    if status.contains(DomainStatus::PWRDOWN) {
        PowerState::Down
    } else {
        PowerState::Up
    }
}

/// Powers up the SCU domain of `cluster` unless it is already up.
pub(crate) fn power_up<B, W>(bus: &B, wait: &W, cluster: Cluster)
where
    B: RegisterBus,
    W: WaitPolicy,
{
    let regs = cluster.regs();
    if domain_state(bus, regs) != PowerState::Down {
        trace!("pwrc: {cluster} SCU already up");
        return;
    }

    debug!("pwrc: powering up {cluster} SCU");
    bus.modify(SYSCIER, |ier| ier | regs.scu_bit);
    bus.modify(SYSCIMR, |imr| imr | regs.scu_bit);

    let mut rejected = 0usize;
    loop {
        poll_until(
            bus,
            wait,
            WaitPoint::ResumeAck,
            SYSCSR,
            SyscStatus::REQ_RESUME.bits(),
        );
        bus.write(regs.power_on_req, PWRON_REQUEST);
        if bus.read(regs.power_on_err) & PWRER_REJECTED == 0 {
            break;
        }
        trace!("pwrc: {cluster} SCU power-on request rejected, retrying");
        wait.pause(WaitPoint::PowerOnRejected, rejected);
        rejected = rejected.wrapping_add(1);
    }

    poll_until(bus, wait, WaitPoint::ScuCompletion, SYSCISR, regs.scu_bit);
    bus.write(SYSCISCR, regs.scu_bit);

    info!("pwrc: {cluster} SCU up ({rejected} rejected requests)");
}
