//! Shellkit binary entry point.

use shellkit::cli::{self, Args};
use shellkit::config::Config;
use shellkit::execution::{Command, ProcessRunner};
use shellkit::{logging, sysinfo, ShellkitError};
use tracing::debug;

#[tokio::main]
async fn main() {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("shellkit: {}", e);
            std::process::exit(2);
        }
    };

    if args.help {
        cli::print_help();
        return;
    }
    if args.version {
        cli::print_version();
        return;
    }

    let config = match Config::load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("shellkit: {}", e);
            std::process::exit(2);
        }
    };

    logging::try_init_with(&config.log_filter()).ok();

    std::process::exit(run(args, config).await);
}

async fn run(args: Args, config: Config) -> i32 {
    if args.env_report {
        return match serde_json::to_string_pretty(&sysinfo::environment()) {
            Ok(json) => {
                println!("{}", json);
                0
            }
            Err(e) => {
                eprintln!("shellkit: {}", e);
                1
            }
        };
    }

    if let Some(ref name) = args.which {
        return match sysinfo::which_checked(name) {
            Ok(path) => {
                println!("{}", path.display());
                0
            }
            Err(e) => {
                eprintln!("shellkit: {}", e);
                1
            }
        };
    }

    if args.command.is_empty() {
        eprintln!("shellkit: no command given (try --help)");
        return 2;
    }

    let mut cmd = Command::new(args.command.join(" "))
        .capture(args.capture)
        .quiet(config.execution.quiet)
        .check(config.execution.check)
        .envs(args.env.clone());
    if let Some(ref dir) = args.chdir {
        cmd = cmd.working_dir(dir);
    }

    match ProcessRunner::new().run(&cmd).await {
        Ok(result) => {
            if cmd.capture && !cmd.quiet {
                if !result.stdout.is_empty() {
                    println!("{}", result.stdout);
                }
                if !result.stderr.is_empty() {
                    eprintln!("{}", result.stderr);
                }
            }
            debug!(exit_code = result.exit_code, "command finished");
            result.exit_code
        }
        Err(e) => {
            eprintln!("shellkit: {}", e);
            match e {
                ShellkitError::CommandFailed { code, .. } => code,
                _ => 1,
            }
        }
    }
}
