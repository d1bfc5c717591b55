// Reports module - profit table, best option and chart

pub mod chart;
pub mod offers;

pub use chart::{ChartRenderer, SvgChart};
pub use offers::{
    best_option, compute_results, run_report, write_report, ComputedResult, ReportOutcome,
    NO_DATA_MESSAGE,
};
