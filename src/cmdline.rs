use super::splits::SplitCount;
use super::Error;
use std::convert::TryFrom;
use structopt::StructOpt;

/// The longest split count we accept, in decimal digits.
const MAX_DIGITS: usize = 6;

#[derive(StructOpt, Debug)]
pub struct Opt {
    // Number of intervals to divide the 64-bit key space into. Must be an integer greater than 1
    // and less than 1,000,000.
    pub splits: Option<String>,

    // Where to write the boundaries, one per line. `-` means stdout.
    #[structopt(short = "-o", long = "output", default_value = "splits")]
    pub output: String,

    // Log a summary of the interval widths once the boundaries are written.
    #[structopt(short = "-s", long = "summary")]
    pub summary: bool,
}

impl Opt {
    pub fn split_count(&self, prog: &str) -> Result<SplitCount, Error> {
        parse_split_count(self.splits.as_deref(), prog)
    }
}

/// Only plain decimal digits are allowed: no sign, no whitespace, no more than `MAX_DIGITS` of
/// them. Leading zeros count towards the limit.
pub fn parse_split_count(arg: Option<&str>, prog: &str) -> Result<SplitCount, Error> {
    let invalid = || Error::InvalidSplitCount(prog.to_owned());

    let arg = arg.ok_or_else(invalid)?;
    if arg.is_empty() || arg.len() > MAX_DIGITS || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let n: u64 = arg.parse().map_err(|_| invalid())?;
    SplitCount::try_from(n).map_err(|_| invalid())
}
