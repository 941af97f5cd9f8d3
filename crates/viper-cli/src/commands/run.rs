//! Implementation of the `viper run` command.
//!
//! Responsibility: resolve the profile name and steps, assemble the module
//! around console adapters, and drive the view. No wiring logic lives here.

use tracing::{debug, info, instrument};

use viper_adapters::{ConsoleDisplay, ConsoleNavigator};
use viper_core::{
    application::{ProfileModule, Step},
    domain::Entity,
};

use crate::{
    cli::{RunArgs, StepArg},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `viper run` command.
#[instrument(skip_all)]
pub fn execute(args: RunArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let name = args.name.unwrap_or(config.profile.name);
    let strict = args.strict || config.wiring.strict;
    let steps = resolve_steps(&args.steps);

    debug!(
        name = %name,
        strict,
        format = ?output.format(),
        steps = steps.len(),
        "Run resolved"
    );

    let format = output.line_format();
    let module = ProfileModule::assemble(
        Entity::new(name),
        ConsoleNavigator::stdout(format),
        ConsoleDisplay::stdout(format),
    )?;

    if strict {
        module.verify_wiring()?;
        debug!("Wiring verified");
    }

    module.run_steps(&steps);
    info!(steps = steps.len(), "Profile interaction finished");

    Ok(())
}

/// No steps on the command line means the full scenario.
fn resolve_steps(args: &[StepArg]) -> Vec<Step> {
    if args.is_empty() {
        vec![Step::Arrive, Step::Continue]
    } else {
        args.iter().copied().map(Step::from).collect()
    }
}
