// Inventory dashboard: stock classification, alerts, reorder suggestions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::labels::round_to;

/// Reorder threshold relative to the minimum stock level
const REORDER_FACTOR: f64 = 1.2;
/// Low-stock threshold relative to the minimum stock level
const LOW_FACTOR: f64 = 1.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub current_stock: f64,
    pub min_stock: f64,
    pub max_stock: f64,
    pub unit: String,
    pub last_updated: DateTime<Utc>,
    pub supplier: String,
    pub cost_per_unit: f64,
}

impl InventoryItem {
    pub fn status(&self) -> StockStatus {
        stock_status(self.current_stock, self.min_stock)
    }

    pub fn value(&self) -> f64 {
        self.current_stock * self.cost_per_unit
    }

    pub fn needs_reorder(&self) -> bool {
        self.current_stock <= self.min_stock * REORDER_FACTOR
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Critical,
    Low,
    Good,
}

/// Classify a stock level against its minimum.
pub fn stock_status(current: f64, minimum: f64) -> StockStatus {
    if current <= minimum {
        StockStatus::Critical
    } else if current <= minimum * LOW_FACTOR {
        StockStatus::Low
    } else {
        StockStatus::Good
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryOverview {
    pub total_items: usize,
    pub low_stock_items: usize,
    pub critical_stock_items: usize,
    pub total_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAlert {
    pub id: String,
    pub name: String,
    pub current_stock: f64,
    pub min_stock: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAlerts {
    pub critical: Vec<StockAlert>,
    pub low: Vec<StockAlert>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub stock_status: StockStatus,
    pub stock_percentage: f64,
    pub total_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub category: String,
    pub stock: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderSuggestion {
    pub item: String,
    pub current_stock: f64,
    pub reorder_qty: f64,
    pub unit: String,
    pub supplier: String,
    pub total_cost: f64,
    pub urgency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryDashboard {
    pub overview: InventoryOverview,
    pub alerts: StockAlerts,
    pub items: Vec<InventoryRow>,
    pub categories: Vec<CategoryTotals>,
    pub reorder: Vec<ReorderSuggestion>,
    pub total_reorder_cost: f64,
}

pub fn overview(items: &[InventoryItem]) -> InventoryOverview {
    InventoryOverview {
        total_items: items.len(),
        low_stock_items: items
            .iter()
            .filter(|i| i.status() == StockStatus::Low)
            .count(),
        critical_stock_items: items
            .iter()
            .filter(|i| i.status() == StockStatus::Critical)
            .count(),
        total_value: items.iter().map(InventoryItem::value).sum(),
    }
}

pub fn alerts(items: &[InventoryItem]) -> StockAlerts {
    let alert = |item: &InventoryItem| StockAlert {
        id: item.id.clone(),
        name: item.name.clone(),
        current_stock: item.current_stock,
        min_stock: item.min_stock,
        unit: item.unit.clone(),
    };

    StockAlerts {
        critical: items
            .iter()
            .filter(|i| i.status() == StockStatus::Critical)
            .map(alert)
            .collect(),
        low: items
            .iter()
            .filter(|i| i.status() == StockStatus::Low)
            .map(alert)
            .collect(),
    }
}

pub fn rows(items: &[InventoryItem]) -> Vec<InventoryRow> {
    items
        .iter()
        .map(|item| {
            let stock_percentage = if item.max_stock > 0.0 {
                round_to(item.current_stock / item.max_stock * 100.0, 1)
            } else {
                0.0
            };
            InventoryRow {
                stock_status: item.status(),
                stock_percentage,
                total_value: round_to(item.value(), 2),
                item: item.clone(),
            }
        })
        .collect()
}

/// Stock and value per category, in first-appearance order.
pub fn category_totals(items: &[InventoryItem]) -> Vec<CategoryTotals> {
    let mut totals: Vec<CategoryTotals> = Vec::new();
    for item in items {
        match totals.iter_mut().find(|t| t.category == item.category) {
            Some(entry) => {
                entry.stock += item.current_stock;
                entry.value += item.value();
            }
            None => totals.push(CategoryTotals {
                category: item.category.clone(),
                stock: item.current_stock,
                value: item.value(),
            }),
        }
    }
    totals
}

pub fn reorder_suggestions(items: &[InventoryItem]) -> Vec<ReorderSuggestion> {
    items
        .iter()
        .filter(|item| item.needs_reorder())
        .map(|item| {
            let reorder_qty = item.max_stock - item.current_stock;
            let urgency = if item.current_stock <= item.min_stock {
                "Critical"
            } else {
                "Low Stock"
            };
            ReorderSuggestion {
                item: item.name.clone(),
                current_stock: item.current_stock,
                reorder_qty,
                unit: item.unit.clone(),
                supplier: item.supplier.clone(),
                total_cost: reorder_qty * item.cost_per_unit,
                urgency: urgency.to_string(),
            }
        })
        .collect()
}

pub fn dashboard(items: &[InventoryItem]) -> InventoryDashboard {
    let reorder = reorder_suggestions(items);
    let total_reorder_cost = reorder.iter().map(|s| s.total_cost).sum();

    InventoryDashboard {
        overview: overview(items),
        alerts: alerts(items),
        items: rows(items),
        categories: category_totals(items),
        reorder,
        total_reorder_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: &str, current: f64, min: f64, max: f64, cost: f64) -> InventoryItem {
        InventoryItem {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: category.to_string(),
            current_stock: current,
            min_stock: min,
            max_stock: max,
            unit: "lbs".to_string(),
            last_updated: Utc::now(),
            supplier: "Local Farm".to_string(),
            cost_per_unit: cost,
        }
    }

    #[test]
    fn test_stock_status_boundaries() {
        assert_eq!(stock_status(20.0, 20.0), StockStatus::Critical);
        assert_eq!(stock_status(30.0, 20.0), StockStatus::Low);
        assert_eq!(stock_status(31.0, 20.0), StockStatus::Good);
    }

    #[test]
    fn test_overview_counts_and_value() {
        let items = vec![
            item("Salmon", "Protein", 12.0, 15.0, 50.0, 12.0),
            item("Garlic", "Vegetables", 7.0, 5.0, 20.0, 3.5),
            item("Onions", "Vegetables", 25.0, 10.0, 60.0, 1.2),
        ];
        let o = overview(&items);
        assert_eq!(o.total_items, 3);
        assert_eq!(o.critical_stock_items, 1);
        assert_eq!(o.low_stock_items, 1);
        assert!((o.total_value - (144.0 + 24.5 + 30.0)).abs() < 1e-9);
    }

    #[test]
    fn test_reorder_threshold_and_urgency() {
        let items = vec![
            item("Olive Oil", "Pantry", 3.0, 5.0, 15.0, 15.0),
            item("Garlic", "Vegetables", 6.0, 5.0, 20.0, 3.5),
            item("Flour", "Pantry", 18.0, 10.0, 40.0, 2.8),
        ];
        let suggestions = reorder_suggestions(&items);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].urgency, "Critical");
        assert_eq!(suggestions[0].reorder_qty, 12.0);
        assert_eq!(suggestions[0].total_cost, 180.0);
        assert_eq!(suggestions[1].urgency, "Low Stock");
    }

    #[test]
    fn test_category_totals_keep_first_appearance_order() {
        let items = vec![
            item("Onions", "Vegetables", 25.0, 10.0, 60.0, 1.0),
            item("Flour", "Pantry", 18.0, 10.0, 40.0, 2.0),
            item("Garlic", "Vegetables", 8.0, 5.0, 20.0, 1.0),
        ];
        let totals = category_totals(&items);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "Vegetables");
        assert_eq!(totals[0].stock, 33.0);
        assert_eq!(totals[1].value, 36.0);
    }

    #[test]
    fn test_rows_round_percentage() {
        let items = vec![item("Garlic", "Vegetables", 8.0, 5.0, 30.0, 3.5)];
        let r = rows(&items);
        assert_eq!(r[0].stock_percentage, 26.7);
        assert_eq!(r[0].total_value, 28.0);
    }
}
