// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Lamport bakery lock for cross-core mutual exclusion.
//!
//! Each contender owns a fixed slot (normally its linear core position). A
//! contender takes a ticket one larger than every ticket currently drawn and is
//! admitted strictly in `(ticket, slot)` order, so no core starves however many
//! others contend.
//!
//! The algorithm only needs plain loads and stores, which keeps it usable from
//! memory that is not cacheable yet or not covered by the exclusive monitor,
//! as long as that memory stays powered and coherent for every participant.
#![cfg_attr(not(test), no_std)]

mod arch;
mod bakery;

pub use bakery::{BakeryGuard, BakeryLock};
