use clap::Parser;
use proc_exit::prelude::*;

mod args;
mod debug;
mod init;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = args::Cli::parse();
    cli.color.write_global();
    init_logging(cli.verbose.log_level());

    match &cli.command {
        args::Command::Init(cmd) => cmd.run().with_code(proc_exit::Code::FAILURE)?,
        args::Command::Debug(cmd) => cmd.run().with_code(proc_exit::Code::FAILURE)?,
    }

    proc_exit::Code::SUCCESS.ok()
}

fn init_logging(level: Option<log::Level>) {
    if let Some(level) = level {
        let mut builder = env_logger::Builder::new();
        builder.filter(None, level.to_level_filter());

        if level == log::Level::Trace {
            builder.format_timestamp_secs();
        } else {
            builder.format(|f, record| {
                use std::io::Write as _;
                let level = format!("[{}]", record.level()).to_lowercase();
                writeln!(f, "{level:8} {}", record.args())
            });
        }

        builder.init();
    }
}
