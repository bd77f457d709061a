// Prep checklist
//
// Quantity updates drive the item status:
//
//   completed qty == 0        -> pending
//   0 < qty < needed          -> in-progress
//   qty >= needed             -> completed
//
// `behind` is only ever set by the kitchen lead (seed data / display);
// a quantity update moves an item out of it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{DomainError, Result};
use super::labels::{percent, tally, Tally};
use super::priority::Priority;
use super::validation::{required, required_short};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrepStatus {
    Pending,
    InProgress,
    Completed,
    Behind,
}

impl PrepStatus {
    /// Display order within a category: behind first, completed last
    pub fn rank(self) -> u8 {
        match self {
            PrepStatus::Behind => 0,
            PrepStatus::Pending => 1,
            PrepStatus::InProgress => 2,
            PrepStatus::Completed => 3,
        }
    }

    /// Status implied by a completed quantity
    pub fn from_quantity(completed: u32, needed: u32) -> Self {
        if completed >= needed {
            PrepStatus::Completed
        } else if completed > 0 {
            PrepStatus::InProgress
        } else {
            PrepStatus::Pending
        }
    }
}

impl std::fmt::Display for PrepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrepStatus::Pending => write!(f, "pending"),
            PrepStatus::InProgress => write!(f, "in-progress"),
            PrepStatus::Completed => write!(f, "completed"),
            PrepStatus::Behind => write!(f, "behind"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrepCategory {
    MiseEnPlace,
    Protein,
    Sauce,
    Vegetables,
    Garnish,
    Other,
}

impl std::fmt::Display for PrepCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrepCategory::MiseEnPlace => write!(f, "mise-en-place"),
            PrepCategory::Protein => write!(f, "protein"),
            PrepCategory::Sauce => write!(f, "sauce"),
            PrepCategory::Vegetables => write!(f, "vegetables"),
            PrepCategory::Garnish => write!(f, "garnish"),
            PrepCategory::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepItem {
    pub id: String,
    pub name: String,
    pub category: PrepCategory,
    pub quantity_needed: u32,
    pub unit: String,
    pub quantity_completed: u32,
    pub status: PrepStatus,
    pub priority: Priority,
    pub assigned_to: String,
    pub notes: String,
    pub created_date: NaiveDate,
}

impl PrepItem {
    /// Completed share of the needed quantity (may exceed 1 on over-prep)
    pub fn progress(&self) -> f64 {
        if self.quantity_needed == 0 {
            0.0
        } else {
            f64::from(self.quantity_completed) / f64::from(self.quantity_needed)
        }
    }

    /// Record a new completed quantity. Returns false when nothing changed.
    pub fn update_quantity(&mut self, quantity: u32) -> Result<bool> {
        let max = self.quantity_needed.saturating_mul(2);
        if quantity > max {
            return Err(DomainError::invalid(
                "quantity",
                format!("must be between 0 and {} (got {})", max, quantity),
            ));
        }
        if quantity == self.quantity_completed {
            return Ok(false);
        }
        self.quantity_completed = quantity;
        self.status = PrepStatus::from_quantity(quantity, self.quantity_needed);
        Ok(true)
    }

    pub fn complete(&mut self) -> Result<()> {
        if self.status == PrepStatus::Completed {
            return Err(DomainError::transition(self.status, PrepStatus::Completed));
        }
        self.status = PrepStatus::Completed;
        self.quantity_completed = self.quantity_needed;
        Ok(())
    }
}

/// Prep form input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPrepItem {
    pub name: String,
    #[serde(default = "default_category")]
    pub category: PrepCategory,
    #[serde(default = "default_quantity")]
    pub quantity_needed: u32,
    pub unit: String,
    pub assigned_to: String,
    #[serde(default = "default_priority")]
    pub priority: Priority,
    #[serde(default = "default_status")]
    pub status: PrepStatus,
    #[serde(default)]
    pub notes: String,
}

fn default_category() -> PrepCategory {
    PrepCategory::MiseEnPlace
}

fn default_quantity() -> u32 {
    1
}

fn default_priority() -> Priority {
    Priority::Low
}

fn default_status() -> PrepStatus {
    PrepStatus::Pending
}

impl NewPrepItem {
    pub fn into_item(self, id: String, today: NaiveDate) -> Result<PrepItem> {
        let name = required_short("name", &self.name)?;
        let unit = required("unit", &self.unit)?;
        let assigned_to = required("assigned_to", &self.assigned_to)?;
        if self.quantity_needed < 1 {
            return Err(DomainError::invalid("quantity_needed", "must be at least 1"));
        }
        if !matches!(self.status, PrepStatus::Pending | PrepStatus::InProgress) {
            return Err(DomainError::invalid(
                "status",
                "new prep items must be pending or in-progress",
            ));
        }

        Ok(PrepItem {
            id,
            name,
            category: self.category,
            quantity_needed: self.quantity_needed,
            unit,
            quantity_completed: 0,
            status: self.status,
            priority: self.priority,
            assigned_to,
            notes: self.notes,
            created_date: today,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepOverview {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub behind: usize,
    pub completion_percentage: f64,
}

pub fn overview(items: &[PrepItem]) -> PrepOverview {
    let count = |status: PrepStatus| items.iter().filter(|i| i.status == status).count();
    let completed = count(PrepStatus::Completed);
    PrepOverview {
        total: items.len(),
        completed,
        in_progress: count(PrepStatus::InProgress),
        pending: count(PrepStatus::Pending),
        behind: count(PrepStatus::Behind),
        completion_percentage: percent(completed, items.len()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepEntry {
    #[serde(flatten)]
    pub item: PrepItem,
    pub progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepGroup {
    pub category: PrepCategory,
    pub items: Vec<PrepEntry>,
}

/// Items grouped by category in first-appearance order; behind work
/// surfaces first, then by priority.
pub fn by_category(items: &[PrepItem]) -> Vec<PrepGroup> {
    let mut groups: Vec<PrepGroup> = Vec::new();
    for item in items {
        let entry = PrepEntry {
            progress: item.progress(),
            item: item.clone(),
        };
        match groups.iter_mut().find(|g| g.category == item.category) {
            Some(group) => group.items.push(entry),
            None => groups.push(PrepGroup {
                category: item.category,
                items: vec![entry],
            }),
        }
    }
    for group in &mut groups {
        group.items.sort_by_key(|e| (e.item.status.rank(), e.item.priority.rank()));
    }
    groups
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: PrepCategory,
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub behind: usize,
    pub completion_rate: f64,
}

pub fn summary(items: &[PrepItem]) -> Vec<CategorySummary> {
    let mut stats: Vec<CategorySummary> = Vec::new();
    for item in items {
        let idx = match stats.iter().position(|s| s.category == item.category) {
            Some(idx) => idx,
            None => {
                stats.push(CategorySummary {
                    category: item.category,
                    total: 0,
                    completed: 0,
                    in_progress: 0,
                    pending: 0,
                    behind: 0,
                    completion_rate: 0.0,
                });
                stats.len() - 1
            }
        };
        let entry = &mut stats[idx];
        entry.total += 1;
        match item.status {
            PrepStatus::Completed => entry.completed += 1,
            PrepStatus::InProgress => entry.in_progress += 1,
            PrepStatus::Pending => entry.pending += 1,
            PrepStatus::Behind => entry.behind += 1,
        }
    }
    for entry in &mut stats {
        entry.completion_rate = percent(entry.completed, entry.total);
    }
    stats
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRate {
    pub category: PrepCategory,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepAnalytics {
    pub by_status: Vec<Tally>,
    pub by_priority: Vec<Tally>,
    pub completion_by_category: Vec<CompletionRate>,
}

pub fn analytics(items: &[PrepItem]) -> PrepAnalytics {
    PrepAnalytics {
        by_status: tally(items.iter().map(|i| i.status.to_string())),
        by_priority: tally(items.iter().map(|i| i.priority.as_str())),
        completion_by_category: summary(items)
            .into_iter()
            .map(|s| CompletionRate {
                category: s.category,
                rate: s.completion_rate,
            })
            .collect(),
    }
}

/// Complete every outstanding item; returns how many changed.
pub fn mark_all_complete(items: &mut [PrepItem]) -> usize {
    items
        .iter_mut()
        .filter_map(|item| item.complete().ok())
        .count()
}
