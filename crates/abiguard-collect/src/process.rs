//! Blocking invocation of external tools.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::ToolError;

/// Run `program` with `args` in `cwd` and return its stdout.
///
/// A spawn failure or a non-zero exit status is an error carrying the
/// command line and the trimmed stderr.
pub(crate) fn run_tool<I, S>(program: &str, cwd: &Path, args: I) -> Result<String, ToolError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<S> = args.into_iter().collect();
    let command = std::iter::once(program.to_string())
        .chain(args.iter().map(|a| a.as_ref().to_string_lossy().into_owned()))
        .collect::<Vec<_>>()
        .join(" ");

    debug!(%command, cwd = %cwd.display(), "running tool");

    let output = Command::new(program)
        .args(&args)
        .current_dir(cwd)
        .output()
        .map_err(|e| ToolError {
            command: command.clone(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let reason = if stderr.is_empty() {
            output.status.to_string()
        } else {
            format!("{}: {stderr}", output.status)
        };
        return Err(ToolError { command, reason });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
