use anyhow::Result;

use doxycheck::application::CheckOptions;
use doxycheck::config::Config;
use doxycheck::domain::policies::SpawnFailurePolicy;
use doxycheck::presentation::{create_check_use_case, create_renderer, Cli, OutputFormat};

/// Run one check and return the process exit code.
pub fn cmd_check(cli: Cli) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::load_or_default(&cwd, cli.settings.as_deref())?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    let config = config.with_env_overrides();

    let program = cli.doxygen.unwrap_or(config.generator.program);
    let doxyfile = cli.doxyfile.unwrap_or(config.generator.doxyfile);
    let policy = SpawnFailurePolicy::from_allow_missing(
        cli.allow_missing_doxygen || config.generator.allow_missing,
    );

    let mut exclude = config.filter.exclude;
    exclude.extend(cli.exclude);

    let options = CheckOptions::new(cli.files)
        .with_mode(cli.mode.into())
        .with_doxyfile(Some(doxyfile))
        .with_exclude(exclude)
        .with_overrides(config.overrides)
        .with_spawn_failure(policy);

    tracing::info!(
        mode = %options.mode,
        files = options.files.len(),
        program = %program.display(),
        "starting check"
    );

    let result = create_check_use_case(program).execute(&options)?;

    let renderer = create_renderer(OutputFormat::from_json_flag(cli.json));
    let mut out = std::io::stdout().lock();
    renderer.render(&result, &mut out)?;

    Ok(result.exit_code())
}
