//! Session command and query handlers.

mod create_session;
mod edit_scenario;
mod export_session;
mod get_session;
mod lifecycle;
mod run_debate;
mod run_tool;
mod tool_runner;

pub use create_session::CreateSessionHandler;
pub use edit_scenario::{
    ApplyPresetCommand, ApplyPresetHandler, UpdateScenarioCommand, UpdateScenarioHandler,
};
pub use export_session::ExportSessionHandler;
pub use get_session::{DeleteSessionHandler, GetSessionHandler};
pub use lifecycle::{LifecycleAction, SessionLifecycleHandler};
pub use run_debate::RunDebateHandler;
pub use run_tool::{RunToolCommand, RunToolHandler};

pub(crate) use tool_runner::load_session;
