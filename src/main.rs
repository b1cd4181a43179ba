use anyhow::Result;
use structopt::StructOpt;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

mod cmdline;
mod output;
mod splits;
mod util;

use splits::Splits;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Argument to {0} must be an integer greater than 1 and less than 1,000,000")]
    InvalidSplitCount(String),

    #[error("Split count {0} out of range, must be greater than 1 and less than 1,000,000")]
    SplitCountOutOfRange(u64),

    #[error("Cannot run on a platform with unsigned integers of {0} bits, 64 are needed")]
    UnsupportedPlatform(u32),
}

struct Main {
    opt: cmdline::Opt,
    prog: String,
}

impl Main {
    fn new() -> Self {
        let prog = std::env::args_os()
            .next()
            .map(|arg| arg.to_string_lossy().into_owned())
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned());

        Self {
            opt: cmdline::Opt::from_args(),
            prog,
        }
    }

    fn run(&self) -> Result<()> {
        let count = self.opt.split_count(&self.prog)?;
        let splits = Splits::generate(count.get())?;
        debug!(
            intervals = splits.intervals(),
            base_step = splits.base_step(),
            remainder = splits.remainder(),
            "computed step"
        );

        let summary = if self.opt.summary {
            Some(splits.summary())
        } else {
            None
        };

        let lines = output::emit(&self.opt.output, splits)?;
        debug!(lines, output = %self.opt.output, "done");

        if let Some(summary) = summary {
            let base_step = format!("{:016x}", summary.base_step);
            info!(
                intervals = summary.intervals,
                base_step = %base_step,
                remainder = summary.remainder,
                wide = summary.wide,
                lines,
                "wrote splits"
            );
        }

        Ok(())
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
}

fn main() -> Result<()> {
    init_logging();
    Main::new().run()
}
