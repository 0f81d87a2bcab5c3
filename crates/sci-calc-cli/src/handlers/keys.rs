//! Keys command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::DisplayPrinter;
use crate::KeysArgs;
use sci_calc::keymap::parse_script;
use sci_calc::{Engine, EngineConfig, RecordingSink};
use std::io::Write;
use tracing::debug;

/// Powers on a fresh engine and presses every key in `script`
///
/// The script is validated before the first keypress, so an unknown token
/// leaves nothing half-applied.
pub fn run_script(config: EngineConfig, script: &str, settle: bool) -> CliResult<Engine<RecordingSink>> {
    let actions = parse_script(script)?;
    let mut engine = Engine::with_config(config, RecordingSink::new());
    engine.power_on();
    engine.sink_mut().clear();

    debug!(count = actions.len(), "running key script");
    for action in actions {
        engine.press(action);
    }
    if settle {
        engine.settle();
    }
    Ok(engine)
}

/// Execute the keys command
pub fn execute_keys<W: Write>(config: &CliConfig, args: &KeysArgs, out: &mut W) -> CliResult<()> {
    let engine = run_script(config.load_engine_config()?, &args.tokens.join(" "), args.settle)?;
    let printer = DisplayPrinter::new(
        config.format,
        config.color.should_color(),
        config.verbosity.is_quiet(),
    );

    if args.trace {
        printer.write_updates(out, engine.sink().updates())
    } else {
        printer.write_update(out, &engine.snapshot())
    }
}
