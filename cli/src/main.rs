use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use vdbstack_core::batch::BatchJob;
use vdbstack_core::command::build_stack_command;
use vdbstack_core::config::Config;
use vdbstack_core::exec::{execute, CommandRunner, DryRunner, ExitPolicy, ShellRunner};

/// Drive vdb_tool and vdb_render from slab plans and mesh directories.
#[derive(Parser)]
#[command(name = "vdbstack", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build slab volumes for each height interval and export them.
    Stack {
        #[command(flatten)]
        run: RunArgs,
        /// Print the interval plans as JSON instead of running anything.
        #[arg(long)]
        json: bool,
    },
    /// Convert every mesh in the source directory, then render it.
    Convert {
        #[command(flatten)]
        run: RunArgs,
        /// Working directory holding the source, output and render directories.
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        /// Skip rendering regardless of the config.
        #[arg(long)]
        no_render: bool,
    },
}

#[derive(Args)]
struct RunArgs {
    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print commands without running them or creating directories.
    #[arg(long)]
    dry_run: bool,
    /// Fail on the first command that exits unsuccessfully.
    #[arg(long)]
    strict: bool,
}

impl RunArgs {
    fn config(&self) -> Result<Config> {
        Config::load_or_default(self.config.as_deref()).context("failed to load configuration")
    }

    fn policy(&self) -> ExitPolicy {
        if self.strict {
            ExitPolicy::Strict
        } else {
            ExitPolicy::Lenient
        }
    }
}

fn main() -> Result<()> {
    // stdout carries commands, progress and JSON; logs go to stderr
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    info!("vdbstack {}", vdbstack_core::version());

    match cli.command {
        Commands::Stack { run, json } => stack(&run, json),
        Commands::Convert { run, dir, no_render } => convert(&run, dir, no_render),
    }
}

fn stack(run: &RunArgs, json: bool) -> Result<()> {
    let cfg = run.config()?.stack;
    let intervals = cfg.intervals().context("invalid interval in configuration")?;
    let built = build_stack_command(&intervals, &cfg.params()).context("failed to plan slabs")?;

    if json {
        println!("{}", built.to_json_pretty()?);
        return Ok(());
    }

    println!("{}", built.command);
    if run.dry_run {
        return Ok(());
    }

    let outcome = execute(&mut ShellRunner::new(), &built.command, run.policy())?;
    info!(code = ?outcome.code, "Stack command finished");
    Ok(())
}

fn convert(run: &RunArgs, dir: PathBuf, no_render: bool) -> Result<()> {
    let mut cfg = run.config()?.batch;
    if no_render {
        cfg.render = false;
    }

    let mut runner: Box<dyn CommandRunner> = if run.dry_run {
        Box::new(DryRunner)
    } else {
        Box::new(ShellRunner::in_dir(&dir))
    };

    let mut job = BatchJob::new(dir, cfg);
    if run.dry_run {
        job = job.without_dir_creation();
    }
    let report = job
        .run(runner.as_mut(), run.policy(), |stem| println!("{}", stem))
        .context("batch conversion failed")?;

    info!(
        "Processed {} meshes, {} failed commands",
        report.processed.len(),
        report.failures
    );
    Ok(())
}
