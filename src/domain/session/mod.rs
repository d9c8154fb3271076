//! Session domain module.
//!
//! A session is one user's working state: the draft scenario, the latest
//! council debate, the results of every follow-up tool and a loading flag
//! per tool.

mod aggregate;
mod errors;
mod tool;

pub use aggregate::{
    CouncilSession, DebateTicket, ToolInput, ToolResult, ToolTicket, EMPTY_SCENARIO_MESSAGE,
};
pub use errors::{SessionError, COUNCIL_UNREACHABLE_MESSAGE, INVALID_RESPONSE_MESSAGE};
pub use tool::{Tool, ToolFlags};
