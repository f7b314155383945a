// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Simulated register file for driving the power controller on the host.

#![allow(unused)]

use std::{
    cell::Cell,
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

use rcar_pwrc::{
    Bounded, Cluster, CoreId, Pwrc, PwrcLock, RegisterBus,
    scu::{DomainStatus, SyscStatus},
};

/// Polls allowed per wait point before a test is considered hung.
pub const POLL_LIMIT: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Read,
    Write,
}

/// One register access, tagged with the lock slot of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    pub cpu: usize,
    pub op: Op,
    pub addr: usize,
    pub value: u32,
}

impl Access {
    pub fn read(addr: usize, value: u32) -> Self {
        Self {
            cpu: this_cpu(),
            op: Op::Read,
            addr,
            value,
        }
    }

    pub fn write(addr: usize, value: u32) -> Self {
        Self {
            cpu: this_cpu(),
            op: Op::Write,
            addr,
            value,
        }
    }
}

thread_local! {
    static CPU: Cell<usize> = const { Cell::new(0) };
}

/// Lock slot of the current thread.
pub fn this_cpu() -> usize {
    CPU.with(Cell::get)
}

/// Makes the current thread act as the core at `slot`.
pub fn set_this_cpu(slot: usize) {
    CPU.with(|cpu| cpu.set(slot));
}

#[derive(Default)]
struct Inner {
    regs: HashMap<usize, u32>,
    scripted: HashMap<usize, VecDeque<u32>>,
    log: Vec<Access>,
}

/// Register file that records every access.
///
/// Reads return the scripted values of a register first, then its stored
/// value. Writes update the stored value.
#[derive(Default)]
pub struct SimBus {
    inner: Mutex<Inner>,
}

impl SimBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` without recording an access.
    pub fn set(&self, addr: usize, value: u32) {
        self.inner.lock().unwrap().regs.insert(addr, value);
    }

    /// Returns the stored value without recording an access.
    pub fn get(&self, addr: usize) -> u32 {
        self.inner
            .lock()
            .unwrap()
            .regs
            .get(&addr)
            .copied()
            .unwrap_or(0)
    }

    /// Queues values returned by the next reads of `addr`.
    pub fn script(&self, addr: usize, values: &[u32]) {
        self.inner
            .lock()
            .unwrap()
            .scripted
            .entry(addr)
            .or_default()
            .extend(values);
    }

    pub fn log(&self) -> Vec<Access> {
        self.inner.lock().unwrap().log.clone()
    }

    /// Recorded writes as `(addr, value)` pairs.
    pub fn writes(&self) -> Vec<(usize, u32)> {
        self.log()
            .into_iter()
            .filter(|a| a.op == Op::Write)
            .map(|a| (a.addr, a.value))
            .collect()
    }

    pub fn clear_log(&self) {
        self.inner.lock().unwrap().log.clear();
    }
}

impl RegisterBus for SimBus {
    fn read(&self, addr: usize) -> u32 {
        let mut inner = self.inner.lock().unwrap();
        let scripted = inner.scripted.get_mut(&addr).and_then(VecDeque::pop_front);
        let value = scripted.unwrap_or_else(|| inner.regs.get(&addr).copied().unwrap_or(0));
        inner.log.push(Access::read(addr, value));
        value
    }

    fn write(&self, addr: usize, value: u32) {
        let mut inner = self.inner.lock().unwrap();
        inner.regs.insert(addr, value);
        inner.log.push(Access::write(addr, value));
    }
}

/// A SoC whose SCU domains are all up and whose sequencer acknowledges at once.
pub fn powered_soc() -> SimBus {
    let bus = SimBus::new();
    for cluster in Cluster::ALL {
        bus.set(cluster.regs().power_status, DomainStatus::PWRUP.bits());
    }
    bus.set(rcar_pwrc::config::SYSCSR, SyscStatus::REQ_RESUME.bits());
    bus
}

/// A SoC with the SCU of `cluster` down. The sequencer acknowledges resume
/// requests and reports completion immediately unless scripted otherwise.
pub fn soc_with_scu_down(cluster: Cluster) -> SimBus {
    let bus = powered_soc();
    let regs = cluster.regs();
    bus.set(regs.power_status, DomainStatus::PWRDOWN.bits());
    bus.set(rcar_pwrc::config::SYSCISR, regs.scu_bit);
    bus
}

pub fn core(cluster: Cluster, n: u32) -> CoreId {
    CoreId::new(cluster, n).unwrap()
}

pub fn controller<'a>(bus: &'a SimBus, lock: &'a PwrcLock) -> Pwrc<'a, &'a SimBus, Bounded> {
    Pwrc::new(bus, Bounded(POLL_LIMIT), lock, this_cpu)
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
