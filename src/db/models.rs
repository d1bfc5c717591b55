use crate::compound::{compound, Growth};

/// Offer as typed at the prompt, before the store assigns an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewOffer {
    pub name: String,
    /// Percent per year (5.0 means 5%)
    pub interest_rate: f64,
    /// Number of yearly compounding periods
    pub term_years: i64,
    pub amount: f64,
}

impl NewOffer {
    pub fn new(name: impl Into<String>, interest_rate: f64, term_years: i64, amount: f64) -> Self {
        Self {
            name: name.into(),
            interest_rate,
            term_years,
            amount,
        }
    }
}

/// Persisted offer row from the `banks` table
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    pub id: i64,
    pub name: String,
    pub interest_rate: f64,
    pub term_years: i64,
    pub amount: f64,
}

impl Offer {
    /// Full-precision compound growth of this offer
    pub fn growth(&self) -> Growth {
        compound(self.amount, self.interest_rate, self.term_years)
    }

    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Offer {
            id: row.get(0)?,
            name: row.get(1)?,
            interest_rate: row.get(2)?,
            term_years: row.get(3)?,
            amount: row.get(4)?,
        })
    }
}
