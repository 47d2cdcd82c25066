//! Collect operator configuration and write `.env.local`.

use anyhow::Result;

use crate::config::{EnvLocal, ENV_FILE};
use crate::sequencer::StepContext;

/// Prompt for the two configuration values unless the file already exists.
/// Blocks on the context's input reader; there is no non-interactive
/// fallback.
pub fn ensure(ctx: &mut StepContext, project_name: &str) -> Result<String> {
    if EnvLocal::load(ctx.root)?.is_some() {
        return Ok("already configured".to_string());
    }

    let env = EnvLocal::collect(ctx.input, project_name)?;
    env.write(ctx.root)?;
    Ok(format!("wrote {ENV_FILE}"))
}
