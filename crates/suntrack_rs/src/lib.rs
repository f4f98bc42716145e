//! One-call almanac for an observer and a civil date.
//!
//! [`snapshot`] runs the Sun service, the Moon service and the calendar for
//! one request and returns a structured [`Snapshot`]. [`DisplaySnapshot`]
//! turns that into display strings exactly once, at the edge.
//!
//! ```rust,ignore
//! use suntrack_rs::*;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
//! let snap = snapshot(&SnapshotRequest::new(date, Observer::kerman(), DEFAULT_ZONE))?;
//! let shown = DisplaySnapshot::from(&snap);
//! println!("sunrise {}", shown.sunrise);
//! ```

pub mod display;
pub mod error;
pub mod snapshot;

pub use display::{DisplayBand, DisplayLive, DisplaySnapshot, UNDETERMINED};
pub use error::SuntrackError;
pub use snapshot::{LiveState, Snapshot, SnapshotRequest, snapshot};

// Re-export the types callers need to build requests and read snapshots.
pub use chrono::NaiveDate;
pub use chrono_tz::Tz;
pub use suntrack_base::{
    MansionInfo, MoonInfo, MoonPhaseInfo, PhaseName, SkyPhase, SunInfo, TwilightBand, TwilightKind,
};
pub use suntrack_calendar::{JalaliDate, LunisolarDate, YearProgress};
pub use suntrack_core::Observer;
pub use suntrack_time::{DEFAULT_ZONE, Instant};
