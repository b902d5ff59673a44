// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! conductor-core: task and log record types shared by the executor and its callers

pub mod macros;

pub mod clock;
pub mod id;
pub mod log_message;
pub mod task;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use id::{LogMessageId, TaskId};
pub use log_message::LogMessage;
pub use task::{ExitClass, InvalidExitClass, Task};
