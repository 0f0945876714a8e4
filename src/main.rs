mod cli;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use cli::Cli;
use powerprompt::config::{PromptConfig, config_path};
use powerprompt::path::{CwdError, resolve_working_dir};
use powerprompt::prompt::Prompt;
use powerprompt::segments::{Env, PromptContext, assemble};
use powerprompt::styling;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(line) => print!("{line}"),
        Err(err) => {
            if let Some(cwd_err) = err.downcast_ref::<CwdError>() {
                // The shell still needs something to show
                println!("[powerprompt] {cwd_err}");
                print!("> ");
            } else {
                styling::error(format!("{err:#}"));
            }
            let _ = std::io::stdout().flush();
            std::process::exit(1);
        }
    }
}

/// `-v` enables info, `-vv` debug. `RUST_LOG` wins when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let path = config_path(cli.config.as_deref());
    let mut config = PromptConfig::load(path.as_deref()).with_context(|| match &path {
        Some(path) => format!("Invalid config file {}", path.display()),
        None => "Invalid config".to_string(),
    })?;
    cli.apply(&mut config);

    let env = Env::from_process();
    let cwd = resolve_working_dir(env.pwd.as_deref())?;
    if cwd.is_stale() {
        styling::warn(format!(
            "Your current directory is invalid. Lowest valid directory: {}",
            cwd.valid.display()
        ));
    }
    log::info!(
        "Drawing {} segment kind(s) for {}",
        config.segments.len(),
        config.shell
    );

    let mut prompt = Prompt::new(config.shell, config.mode);
    let ctx = PromptContext {
        env,
        cwd,
        config,
        prev_error: cli.prev_error,
    };
    assemble(&ctx, &mut prompt);
    Ok(prompt.draw())
}
