//! Framework-agnostic bridge core for devicefacts.
//!
//! The host framework owns the transport; this crate models its contract:
//! named method invocations, each carrying exactly one single-use reply
//! slot. `MethodDispatcher` routes invocations to the platform sources, and
//! `CarrierCoordinator` runs the one stateful exchange, the runtime
//! permission handshake guarding telephony reads.

mod coordinator;
mod dispatcher;
mod reply;

pub use coordinator::{CarrierCoordinator, READ_PHONE_STATE_REQUEST_CODE};
pub use dispatcher::{method_names, MethodDispatcher};
pub use reply::{CapturedReply, ErrorCode, Reply, ReplySlot};
