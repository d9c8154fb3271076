//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assistant;
pub mod identity;
pub mod session;

pub use assistant::{ChatCommand, ChatHandler};
pub use identity::{LoginError, LoginHandler};
pub use session::{
    ApplyPresetCommand, ApplyPresetHandler, CreateSessionHandler, DeleteSessionHandler,
    ExportSessionHandler, GetSessionHandler, LifecycleAction, RunDebateHandler, RunToolCommand,
    RunToolHandler, SessionLifecycleHandler, UpdateScenarioCommand, UpdateScenarioHandler,
};
