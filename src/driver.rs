use std::io::Write;

use log::debug;

use crate::compare::compare;
use crate::config::HarnessConfig;
use crate::error::{HarnessError, HarnessResult};
use crate::pipeline::Pipeline;
use crate::process::Executor;
use crate::registry::{self, Selection};
use crate::report::{Reporter, Summary};

/// Validate `arg` against the examples on disk and verify the selection.
/// The first fatal failure ends the whole invocation; mismatches only show
/// up in the returned summary.
pub fn run<E, W>(
    config: &HarnessConfig,
    arg: &str,
    executor: &E,
    reporter: &mut Reporter<W>,
) -> HarnessResult<Summary>
where
    E: Executor + ?Sized,
    W: Write,
{
    let registry = registry::discover(&config.examples_root)?;
    debug!("discovered {} examples: {:?}", registry.len(), registry);
    match registry::select(arg, &registry)? {
        Selection::One(name) => verify(config, &[name], executor, reporter),
        Selection::All => {
            let summary = verify(config, &registry, executor, reporter)?;
            reporter
                .summary(&summary)
                .map_err(|e| HarnessError::io("<stdout>", e))?;
            Ok(summary)
        }
    }
}

/// Build, compile, run and compare each example in order.
pub fn verify<E, W>(
    config: &HarnessConfig,
    names: &[String],
    executor: &E,
    reporter: &mut Reporter<W>,
) -> HarnessResult<Summary>
where
    E: Executor + ?Sized,
    W: Write,
{
    let pipeline = Pipeline::new(config, executor);
    let report_err = |e| HarnessError::io("<stdout>", e);
    let mut summary = Summary::default();
    for name in names {
        let example = pipeline.example(name);
        let built = pipeline.build(&example);
        debug!("build of {} finished with {:?}", example.name, built.code);
        pipeline.compile(&example, Some(&built))?;
        reporter
            .script_written(&example.script_path())
            .map_err(report_err)?;

        let actual = pipeline.run(&example)?;
        let expected = example.expected_output()?;
        let outcome = compare(&actual, expected.as_deref());
        summary.record(outcome.verdict);
        reporter.outcome(&example.name, &outcome).map_err(report_err)?;
    }
    Ok(summary)
}
