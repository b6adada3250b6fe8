//! CLI command implementations

pub mod index;
pub mod info;
pub mod interactive;
pub mod search;

use std::process::ExitCode;

use crate::core::PageState;

/// Non-zero when the action ended in an error message.
fn exit_code(state: &PageState) -> ExitCode {
    if state.error_message().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
