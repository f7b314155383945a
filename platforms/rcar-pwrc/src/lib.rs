// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Power controller for the R-Car Gen3 CA57 and CA53 clusters.
//!
//! Brings individual cores out of reset, powers up the shared SCU domain of a
//! cluster on first use, masks or unmasks per-core wake-up interrupts and
//! reports which cores exist on the part. Every operation runs under a single
//! bakery lock shared by all cores.
//!
//! Register access and busy-wait points go through [`RegisterBus`] and
//! [`WaitPolicy`] so the handshakes can be driven against a simulated SoC.
#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

pub mod bus;
pub mod cluster;
pub mod config;
mod cpu;
mod error;
pub mod global;
mod presence;
mod pwrc;
pub mod scu;
pub mod wait;
mod wakeup;

#[cfg(test)]
mod test_cluster;

pub use crate::{
    bus::{MmioBus, RegisterBus},
    cluster::{Cluster, ClusterRegs, CoreId, PowerState},
    error::{PwrcError, PwrcResult},
    global::GlobalPwrc,
    pwrc::{Pwrc, PwrcLock},
    wait::{Bounded, Spin, WaitPoint, WaitPolicy},
};
