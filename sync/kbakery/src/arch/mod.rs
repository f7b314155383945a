// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

cfg_if::cfg_if! {
    if #[cfg(all(target_arch = "aarch64", target_os = "none"))] {
        mod aarch64;
        pub use self::aarch64::*;
    } else {
        /// Wait for another contender to publish a change.
        #[inline]
        pub fn wait_event() {
            core::hint::spin_loop();
        }

        /// Wake contenders parked in [`wait_event`].
        #[inline]
        pub fn send_event() {}
    }
}
