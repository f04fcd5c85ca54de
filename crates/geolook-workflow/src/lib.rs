//! Location-dependent lookup workflow.
//!
//! Three user-triggered stages — position fix, reverse geocoding, current
//! weather — with per-stage status tracking, read-only snapshots and a
//! notification seam for the presentation layer.

pub mod notify;
pub mod render;
pub mod status;
pub mod workflow;

pub use notify::{LogNotifier, Notice, NoticeKind, Notifier};
pub use status::StageStatus;
pub use workflow::{LocationWorkflow, WorkflowSnapshot};
