use exitcode::ExitCode;

use crate::config::ConfigError;
use crate::pipeline::PipelineError;
use crate::properties::PropertiesError;

/// Maps a fatal error to a sysexits-style process exit code.
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    if err.downcast_ref::<ConfigError>().is_some() {
        return exitcode::USAGE;
    }

    let properties_error = err.downcast_ref::<PropertiesError>().or_else(|| {
        match err.downcast_ref::<PipelineError>() {
            Some(PipelineError::Load(inner)) => Some(inner),
            _ => None,
        }
    });

    match properties_error {
        Some(PropertiesError::Read { .. }) => return exitcode::NOINPUT,
        Some(PropertiesError::Parse { .. }) => return exitcode::DATAERR,
        None => {}
    }

    match err.downcast_ref::<PipelineError>() {
        Some(PipelineError::Create { .. } | PipelineError::Write { .. }) => exitcode::CANTCREAT,
        _ => exitcode::SOFTWARE,
    }
}
