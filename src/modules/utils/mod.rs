pub mod io;
pub mod logging;

pub use io::{Prompt, ScriptedPrompt, StdinPrompt};
pub use logging::{initialize_logging, log_auth_event, log_data_operation};
