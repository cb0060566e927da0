//! Alien Clock Runner - Terminal driver
//!
//! Runs the alien clock in a terminal:
//!
//! - **Config**: JSON file plus environment overrides
//! - **Session**: key commands for setting the time and the alarm
//! - **Console**: the boxed clock panel and Earth projection
//! - **Runtime**: the tick loop, one alien second per tick period
//!
//! ## Architecture
//!
//! ```text
//!     terminal keys             timer (0.5 s at normal speed)
//!             │                         │
//!             ▼                         ▼
//!   ┌────────────────────────────────────────────┐
//!   │                ClockRunner                 │
//!   │  ┌──────────────────────────────────────┐  │
//!   │  │ Session (prompts, notices)           │  │
//!   │  │   └── AlienClock (current, alarm)    │  │
//!   │  └──────────────────────────────────────┘  │
//!   └──────────────────────┬─────────────────────┘
//!                          │ frames
//!                          ▼
//!                       stdout
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod runtime;
pub mod session;

// Re-export main types
pub use config::ClockConfig;
pub use console::Console;
pub use error::{ConfigError, RunnerError};
pub use runtime::{ClockRunner, RunSummary, StopReason};
pub use session::{Flow, Prompt, Session};
