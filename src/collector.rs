//! Interactive collection of investment offers.
//!
//! Each offer is four prompts (name, rate, term, amount). Offers are staged
//! as they are entered and committed together once the sentinel name is
//! typed. Any failure before that point drops the batch, so nothing from the
//! current run is persisted.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::db::{NewOffer, OfferStore};
use crate::error::{OfferError, Result};

/// Name that ends collection (compared case-insensitively)
pub const SENTINEL: &str = "done";

pub const NAME_PROMPT: &str = "Enter bank name (or 'done' to finish): ";

/// A prompting line reader
pub trait LineSource {
    /// Show `prompt` and return the next line without its line terminator.
    fn read_line(&mut self, prompt: &str) -> std::result::Result<String, OfferError>;

    /// Called after an offer has been staged.
    fn offer_recorded(&mut self, _name: &str) {}
}

/// Line source over any reader, echoing prompts to `out`. Used when stdin is
/// piped and in tests.
pub struct BufReadSource<R, W> {
    reader: R,
    out: W,
}

impl<R: BufRead, W: Write> BufReadSource<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<R: BufRead, W: Write> LineSource for BufReadSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> std::result::Result<String, OfferError> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(OfferError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

pub fn is_sentinel(name: &str) -> bool {
    name.to_lowercase() == SENTINEL
}

/// Coerce one numeric answer; surrounding whitespace is ignored.
pub fn parse_field<T: FromStr>(
    field: &'static str,
    input: &str,
) -> std::result::Result<T, OfferError> {
    input.trim().parse().map_err(|_| OfferError::Parse {
        field,
        input: input.to_string(),
    })
}

/// Ask for rate, term and amount of the bank `name`, in that order.
pub fn read_offer<S: LineSource + ?Sized>(
    source: &mut S,
    name: String,
) -> std::result::Result<NewOffer, OfferError> {
    let rate = source.read_line(&format!("Enter interest rate for {} (%): ", name))?;
    let interest_rate = parse_field("interest rate", &rate)?;

    let term = source.read_line(&format!("Enter term (years) for {}: ", name))?;
    let term_years = parse_field("term", &term)?;

    let amount = source.read_line(&format!("Enter the investment amount for {}: ", name))?;
    let amount = parse_field("investment amount", &amount)?;

    Ok(NewOffer {
        name,
        interest_rate,
        term_years,
        amount,
    })
}

/// Prompt for offers until the sentinel, then persist them in one batch.
/// Returns the number of offers committed.
pub fn collect_offers<S: LineSource + ?Sized>(
    source: &mut S,
    store: &mut OfferStore,
) -> Result<usize> {
    let mut batch = store.begin()?;

    loop {
        let name = source.read_line(NAME_PROMPT)?;
        if is_sentinel(&name) {
            break;
        }
        if name.trim().is_empty() {
            debug!("Blank bank name, asking again");
            continue;
        }

        let offer = read_offer(source, name)?;
        let id = batch.insert(&offer)?;
        debug!(id, name = %offer.name, "Staged offer");
        source.offer_recorded(&offer.name);
    }

    batch.persist()
}
