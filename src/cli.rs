//! Argument handling behind the `resultwrap` binary.

use anyhow::bail;
use log::{debug, info};

use crate::{handle::log_failure, wrap, Outcome};

/// Values accepted from the command line, in order, and their sum.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub accepted: Vec<(String, i64)>,
    pub total: i64,
}

/// Processes every argument. With a leading `--strict` the first invalid
/// argument ends the run with its error; otherwise invalid arguments are
/// logged and skipped.
pub fn run<I>(args: I) -> anyhow::Result<Report>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();
    let strict = args.next_if(|arg| arg == "--strict").is_some();

    let mut report = Report::default();
    for arg in args {
        let outcome = process(&arg);
        debug!("{} -> {:?}", arg, outcome);

        let value = if strict {
            Some(outcome.value_or_throw()?)
        } else {
            outcome.value_or_handle(log_failure)
        };

        if let Some(value) = value {
            info!("accepted {} as {}", arg, value);
            report.total += value;
            report.accepted.push((arg, value));
        }
    }

    Ok(report)
}

/// Parses a non-negative integer and doubles it.
pub fn process(arg: &str) -> Outcome<i64> {
    parse(arg)
        .and_then(non_negative)
        .map(|value| i64::from(value) * 2)
        .context(format!("invalid argument {:?}", arg))
}

fn parse(arg: &str) -> Outcome<i32> {
    wrap(|| arg.trim().parse::<i32>())
}

fn non_negative(value: i32) -> Outcome<i32> {
    wrap(|| {
        if value < 0 {
            bail!("negative value: {}", value);
        }
        Ok(value)
    })
}
