// Production board rows (editable table of batch tasks)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{DomainError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Station {
    Sauce,
    Soup,
    #[serde(rename = "Garde Manger")]
    GardeManger,
    Grill,
    Fry,
    Pasta,
    Salad,
}

impl Station {
    pub const ALL: [Station; 7] = [
        Station::Sauce,
        Station::Soup,
        Station::GardeManger,
        Station::Grill,
        Station::Fry,
        Station::Pasta,
        Station::Salad,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Station::Sauce => "Sauce",
            Station::Soup => "Soup",
            Station::GardeManger => "Garde Manger",
            Station::Grill => "Grill",
            Station::Fry => "Fry",
            Station::Pasta => "Pasta",
            Station::Salad => "Salad",
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Station {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Station::ALL
            .into_iter()
            .find(|station| station.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::invalid("station", format!("unknown station '{}'", wanted)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionRow {
    pub task: String,
    pub batch: String,
    pub station: Station,
    pub owner: String,
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Fraction 0..=1, absent when the board is empty
    pub progress: Option<f64>,
}

pub fn summary(rows: &[ProductionRow]) -> ProductionSummary {
    let total = rows.len();
    let completed = rows.iter().filter(|row| row.done).count();
    ProductionSummary {
        total,
        completed,
        pending: total - completed,
        progress: (total > 0).then(|| completed as f64 / total as f64),
    }
}

/// Flip the done flag of the row at `index`.
pub fn toggle(rows: &mut [ProductionRow], index: usize) -> Result<bool> {
    let row = rows
        .get_mut(index)
        .ok_or_else(|| DomainError::not_found("Production row", index))?;
    row.done = !row.done;
    Ok(row.done)
}
