use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::db::Offer;
use crate::error::Result;
use crate::reports::chart::ChartRenderer;
use crate::utils::{format_cents, format_plain, round_cents};

/// Printed instead of a report when the store holds no offers
pub const NO_DATA_MESSAGE: &str = "No banks were entered.";

/// Offer plus its outcome, rounded to cents for display
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedResult {
    pub id: i64,
    pub name: String,
    pub interest_rate: f64,
    pub term_years: i64,
    pub amount: f64,
    pub total_amount: f64,
    pub profit: f64,
}

impl ComputedResult {
    pub fn from_offer(offer: &Offer) -> Self {
        let growth = offer.growth();
        Self {
            id: offer.id,
            name: offer.name.clone(),
            interest_rate: offer.interest_rate,
            term_years: offer.term_years,
            amount: offer.amount,
            total_amount: round_cents(growth.total),
            profit: round_cents(growth.profit),
        }
    }

    /// `Bank: <name>, Interest Rate: <rate>%, Term: <term> years, ...`
    pub fn line(&self) -> String {
        format!(
            "Bank: {}, Interest Rate: {}%, Term: {} years, Investment Amount: {}, Total Amount: {}, Profit: {}",
            self.name,
            format_plain(self.interest_rate),
            self.term_years,
            format_plain(self.amount),
            format_cents(self.total_amount),
            format_cents(self.profit),
        )
    }
}

/// Result of the report step
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    /// No offers stored; nothing beyond the notice was printed
    Empty,
    Reported {
        best: ComputedResult,
        chart_path: PathBuf,
    },
}

/// One result per offer, same order as given
pub fn compute_results(offers: &[Offer]) -> Vec<ComputedResult> {
    offers.iter().map(ComputedResult::from_offer).collect()
}

/// Highest profit; on ties the earliest result wins.
pub fn best_option(results: &[ComputedResult]) -> Option<&ComputedResult> {
    let mut best: Option<&ComputedResult> = None;
    for result in results {
        // A NaN profit only wins when nothing comparable precedes it
        let better = best.map_or(true, |current| {
            result.profit > current.profit || (current.profit.is_nan() && !result.profit.is_nan())
        });
        if better {
            best = Some(result);
        }
    }
    best
}

/// Write the results block and the best-option line.
pub fn write_report<W: Write>(out: &mut W, results: &[ComputedResult]) -> Result<()> {
    writeln!(out, "\nResults:")?;
    for result in results {
        writeln!(out, "{}", result.line())?;
    }

    if let Some(best) = best_option(results) {
        writeln!(
            out,
            "\nThe best bank to invest in is {} with a profit of {}.",
            best.name,
            format_cents(best.profit)
        )?;
    }
    Ok(())
}

/// Report every stored offer and render the profit chart.
pub fn run_report<W: Write>(
    offers: &[Offer],
    out: &mut W,
    chart: &dyn ChartRenderer,
) -> Result<ReportOutcome> {
    if offers.is_empty() {
        writeln!(out, "{}", NO_DATA_MESSAGE)?;
        return Ok(ReportOutcome::Empty);
    }

    let results = compute_results(offers);
    write_report(out, &results)?;
    out.flush()?;

    let best = best_option(&results).unwrap_or(&results[0]).clone();
    info!(best = %best.name, profit = best.profit, "Selected best offer");

    let chart_path = chart.render(&results)?;
    Ok(ReportOutcome::Reported { best, chart_path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct RecordingChart {
        calls: Cell<usize>,
    }

    impl RecordingChart {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
            }
        }
    }

    impl ChartRenderer for RecordingChart {
        fn render(&self, _results: &[ComputedResult]) -> Result<PathBuf> {
            self.calls.set(self.calls.get() + 1);
            Ok(PathBuf::from("chart.svg"))
        }
    }

    fn offer(id: i64, name: &str, rate: f64, term: i64, amount: f64) -> Offer {
        Offer {
            id,
            name: name.to_string(),
            interest_rate: rate,
            term_years: term,
            amount,
        }
    }

    fn with_profit(id: i64, profit: f64) -> ComputedResult {
        ComputedResult {
            id,
            name: format!("Bank{id}"),
            interest_rate: 1.0,
            term_years: 1,
            amount: 100.0,
            total_amount: 100.0 + profit,
            profit,
        }
    }

    #[test]
    fn test_compute_results_rounds_to_cents() {
        let results = compute_results(&[
            offer(1, "BankA", 5.0, 2, 1000.0),
            offer(2, "BankB", 3.0, 5, 2000.0),
        ]);
        assert_eq!(results[0].total_amount, 1102.5);
        assert_eq!(results[0].profit, 102.5);
        assert_eq!(results[1].total_amount, 2318.55);
        assert_eq!(results[1].profit, 318.55);
    }

    #[test]
    fn test_best_option_first_of_ties() {
        let results: Vec<ComputedResult> = [100.0, 250.5, 250.5, 10.0]
            .iter()
            .enumerate()
            .map(|(i, p)| with_profit(i as i64, *p))
            .collect();
        let best = best_option(&results).unwrap();
        assert!(std::ptr::eq(best, &results[1]));
    }

    #[test]
    fn test_best_option_handles_negative_and_empty() {
        assert!(best_option(&[]).is_none());

        let results = vec![with_profit(1, -5.0), with_profit(2, -1.0)];
        assert_eq!(best_option(&results).unwrap().id, 2);
    }

    #[test]
    fn test_result_line_format() {
        let result = ComputedResult::from_offer(&offer(1, "BankA", 5.0, 2, 1000.0));
        assert_eq!(
            result.line(),
            "Bank: BankA, Interest Rate: 5.0%, Term: 2 years, Investment Amount: 1000.0, \
             Total Amount: 1102.50, Profit: 102.50"
        );
    }

    #[test]
    fn test_end_to_end_report() {
        let chart = RecordingChart::new();
        let mut out = Vec::new();
        let outcome = run_report(
            &[
                offer(1, "BankA", 5.0, 2, 1000.0),
                offer(2, "BankB", 3.0, 5, 2000.0),
            ],
            &mut out,
            &chart,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\nResults:\n"));
        assert!(text.contains("Bank: BankA, Interest Rate: 5.0%, Term: 2 years"));
        assert!(text.contains("Total Amount: 2318.55, Profit: 318.55"));
        assert!(text.ends_with("\nThe best bank to invest in is BankB with a profit of 318.55.\n"));

        match outcome {
            ReportOutcome::Reported { best, chart_path } => {
                assert_eq!(best.name, "BankB");
                assert_eq!(chart_path, PathBuf::from("chart.svg"));
            }
            ReportOutcome::Empty => panic!("expected a report"),
        }
        assert_eq!(chart.calls.get(), 1);
    }

    #[test]
    fn test_empty_store_skips_chart() {
        let chart = RecordingChart::new();
        let mut out = Vec::new();
        let outcome = run_report(&[], &mut out, &chart).unwrap();

        assert_eq!(outcome, ReportOutcome::Empty);
        assert_eq!(String::from_utf8(out).unwrap(), "No banks were entered.\n");
        assert_eq!(chart.calls.get(), 0);
    }

    #[test]
    fn test_zero_term_reports_zero_profit() {
        let result = ComputedResult::from_offer(&offer(7, "Flat", 9.0, 0, 500.0));
        assert_eq!(result.total_amount, 500.0);
        assert_eq!(result.profit, 0.0);
        assert!(result.line().ends_with("Total Amount: 500.00, Profit: 0.00"));
    }
}
