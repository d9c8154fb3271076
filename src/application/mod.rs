//! Application layer - the council client, prompts, and handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers lock a session only to move it between states; every model call
//! runs with the lock released.

pub mod council_client;
pub mod handlers;
pub mod preferences;
pub mod prompts;

pub use council_client::{CouncilClient, CouncilClientConfig, CouncilError};
pub use handlers::{
    ApplyPresetCommand, ApplyPresetHandler, ChatCommand, ChatHandler, CreateSessionHandler,
    DeleteSessionHandler, ExportSessionHandler, GetSessionHandler, LifecycleAction, LoginError,
    LoginHandler, RunDebateHandler, RunToolCommand, RunToolHandler, SessionLifecycleHandler,
    UpdateScenarioCommand, UpdateScenarioHandler,
};
pub use preferences::Preferences;
