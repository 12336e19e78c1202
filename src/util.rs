// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Small driver utilities.

use std::thread;
use std::time::Duration;

/// Block the calling thread for the given number of milliseconds.
///
/// Drivers pace command/response cycles with short waits. This parks the
/// thread instead of spinning; no hard real-time spin-wait is required.
pub fn wait(millis: u64) {
    thread::sleep(Duration::from_millis(millis));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_wait_blocks_at_least_requested_time() {
        let start = Instant::now();
        wait(10);
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
