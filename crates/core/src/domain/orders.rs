// Order guide: running purchase list, grouped by supplier

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::{DomainError, Result};
use super::labels::{tally, Tally};
use super::priority::Priority;
use super::validation::{required, required_short};

/// Order lifecycle: pending -> ordered -> received -> completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Ordered,
    Received,
    Completed,
}

impl OrderStatus {
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Ordered),
            OrderStatus::Ordered => Some(OrderStatus::Received),
            OrderStatus::Received => Some(OrderStatus::Completed),
            OrderStatus::Completed => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Ordered => write!(f, "ordered"),
            OrderStatus::Received => write!(f, "received"),
            OrderStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderCategory {
    Protein,
    Vegetables,
    Pantry,
    Dairy,
    Beverages,
    Other,
}

impl std::fmt::Display for OrderCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderCategory::Protein => "Protein",
            OrderCategory::Vegetables => "Vegetables",
            OrderCategory::Pantry => "Pantry",
            OrderCategory::Dairy => "Dairy",
            OrderCategory::Beverages => "Beverages",
            OrderCategory::Other => "Other",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub item_name: String,
    pub category: OrderCategory,
    pub quantity: u32,
    pub unit: String,
    pub supplier: String,
    pub priority: Priority,
    pub status: OrderStatus,
    pub notes: String,
    pub created_date: NaiveDate,
    pub needed_date: NaiveDate,
    pub estimated_cost: f64,
}

impl OrderItem {
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == OrderStatus::Pending && self.needed_date < today
    }

    /// Move one step along the lifecycle and return the new status.
    pub fn advance(&mut self) -> Result<OrderStatus> {
        let next = self
            .status
            .next()
            .ok_or_else(|| DomainError::transition(self.status, "next"))?;
        self.status = next;
        Ok(next)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    pub contact: String,
    pub delivery_days: String,
}

/// Order form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderItem {
    pub item_name: String,
    #[serde(default = "default_category")]
    pub category: OrderCategory,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub unit: String,
    pub supplier: String,
    #[serde(default = "default_priority")]
    pub priority: Priority,
    pub needed_date: Option<NaiveDate>,
    #[serde(default)]
    pub estimated_cost: f64,
    #[serde(default)]
    pub notes: String,
}

fn default_category() -> OrderCategory {
    OrderCategory::Protein
}

fn default_quantity() -> u32 {
    1
}

fn default_priority() -> Priority {
    Priority::Low
}

impl NewOrderItem {
    pub fn into_item(self, id: String, suppliers: &[Supplier], today: NaiveDate) -> Result<OrderItem> {
        let item_name = required_short("item_name", &self.item_name)?;
        let unit = required("unit", &self.unit)?;
        let supplier = self.supplier.trim().to_string();
        if !suppliers.iter().any(|s| s.name == supplier) {
            return Err(DomainError::invalid(
                "supplier",
                format!("unknown supplier '{}'", supplier),
            ));
        }
        if self.quantity < 1 {
            return Err(DomainError::invalid("quantity", "must be at least 1"));
        }
        if !self.estimated_cost.is_finite() || self.estimated_cost < 0.0 {
            return Err(DomainError::invalid("estimated_cost", "must not be negative"));
        }

        Ok(OrderItem {
            id,
            item_name,
            category: self.category,
            quantity: self.quantity,
            unit,
            supplier,
            priority: self.priority,
            status: OrderStatus::Pending,
            notes: self.notes,
            created_date: today,
            needed_date: self.needed_date.unwrap_or(today + Duration::days(1)),
            estimated_cost: self.estimated_cost,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderOverview {
    pub total: usize,
    pub pending: usize,
    pub urgent: usize,
    pub pending_cost: f64,
}

pub fn overview(items: &[OrderItem]) -> OrderOverview {
    let pending = || items.iter().filter(|i| i.status == OrderStatus::Pending);
    OrderOverview {
        total: items.len(),
        pending: pending().count(),
        urgent: items.iter().filter(|i| i.priority == Priority::Urgent).count(),
        pending_cost: pending().map(|i| i.estimated_cost).sum(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFilter {
    pub supplier: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    pub fn matches(&self, item: &OrderItem) -> bool {
        self.supplier.as_deref().map_or(true, |s| item.supplier == s)
            && self.priority.map_or(true, |p| item.priority == p)
            && self.status.map_or(true, |s| item.status == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    #[serde(flatten)]
    pub item: OrderItem,
    pub overdue: bool,
}

/// Filtered items, most urgent first, then earliest needed.
pub fn list(items: &[OrderItem], filter: &OrderFilter, today: NaiveDate) -> Vec<OrderRow> {
    let mut rows: Vec<OrderRow> = items
        .iter()
        .filter(|i| filter.matches(i))
        .map(|i| OrderRow {
            overdue: i.is_overdue(today),
            item: i.clone(),
        })
        .collect();
    rows.sort_by_key(|r| (r.item.priority.rank(), r.item.needed_date));
    rows
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierOrder {
    pub supplier: String,
    pub item_count: usize,
    pub total_cost: f64,
    pub items: Vec<OrderItem>,
}

/// Pending items per supplier, first-appearance order.
pub fn by_supplier(items: &[OrderItem]) -> Vec<SupplierOrder> {
    let mut groups: Vec<SupplierOrder> = Vec::new();
    for item in items.iter().filter(|i| i.status == OrderStatus::Pending) {
        match groups.iter_mut().find(|g| g.supplier == item.supplier) {
            Some(group) => group.items.push(item.clone()),
            None => groups.push(SupplierOrder {
                supplier: item.supplier.clone(),
                item_count: 0,
                total_cost: 0.0,
                items: vec![item.clone()],
            }),
        }
    }
    for group in &mut groups {
        group.item_count = group.items.len();
        group.total_cost = group.items.iter().map(|i| i.estimated_cost).sum();
    }
    groups
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCost {
    pub category: OrderCategory,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAnalytics {
    pub by_status: Vec<Tally>,
    pub by_priority: Vec<Tally>,
    /// Pending cost per category
    pub pending_cost_by_category: Vec<CategoryCost>,
}

pub fn analytics(items: &[OrderItem]) -> OrderAnalytics {
    let mut costs: Vec<CategoryCost> = Vec::new();
    for item in items.iter().filter(|i| i.status == OrderStatus::Pending) {
        match costs.iter_mut().find(|c| c.category == item.category) {
            Some(entry) => entry.total_cost += item.estimated_cost,
            None => costs.push(CategoryCost {
                category: item.category,
                total_cost: item.estimated_cost,
            }),
        }
    }

    OrderAnalytics {
        by_status: tally(items.iter().map(|i| i.status.to_string())),
        by_priority: tally(items.iter().map(|i| i.priority.as_str())),
        pending_cost_by_category: costs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn order(id: &str, supplier: &str, priority: Priority, needed_offset: i64, cost: f64) -> OrderItem {
        OrderItem {
            id: id.to_string(),
            item_name: format!("Item {}", id),
            category: OrderCategory::Pantry,
            quantity: 5,
            unit: "lbs".to_string(),
            supplier: supplier.to_string(),
            priority,
            status: OrderStatus::Pending,
            notes: String::new(),
            created_date: today(),
            needed_date: today() + Duration::days(needed_offset),
            estimated_cost: cost,
        }
    }

    fn suppliers() -> Vec<Supplier> {
        vec![Supplier {
            name: "Baker Supply".to_string(),
            contact: "(555) 500-6000".to_string(),
            delivery_days: "Mon, Thu".to_string(),
        }]
    }

    #[test]
    fn test_advance_lifecycle() {
        let mut item = order("ORD-001", "Baker Supply", Priority::Low, 1, 10.0);
        assert_eq!(item.advance().unwrap(), OrderStatus::Ordered);
        assert_eq!(item.advance().unwrap(), OrderStatus::Received);
        assert_eq!(item.advance().unwrap(), OrderStatus::Completed);
        assert!(item.advance().is_err());
    }

    #[test]
    fn test_overdue_only_while_pending() {
        let mut item = order("ORD-001", "Baker Supply", Priority::Low, -1, 10.0);
        assert!(item.is_overdue(today()));
        item.advance().unwrap();
        assert!(!item.is_overdue(today()));
    }

    #[test]
    fn test_list_sort_and_filter() {
        let items = vec![
            order("ORD-001", "Fresh Farms", Priority::High, 1, 225.0),
            order("ORD-002", "Ocean Fresh", Priority::Urgent, 0, 75.0),
            order("ORD-003", "Fresh Farms", Priority::High, 0, 10.0),
        ];
        let ids: Vec<String> = list(&items, &OrderFilter::default(), today())
            .into_iter()
            .map(|r| r.item.id)
            .collect();
        assert_eq!(ids, vec!["ORD-002", "ORD-003", "ORD-001"]);

        let filter = OrderFilter {
            supplier: Some("Fresh Farms".to_string()),
            ..Default::default()
        };
        assert_eq!(list(&items, &filter, today()).len(), 2);
    }

    #[test]
    fn test_by_supplier_pending_only() {
        let mut ordered = order("ORD-003", "Fresh Farms", Priority::Low, 1, 99.0);
        ordered.advance().unwrap();
        let items = vec![
            order("ORD-001", "Fresh Farms", Priority::High, 1, 225.0),
            order("ORD-002", "Ocean Fresh", Priority::Medium, 2, 240.0),
            order("ORD-004", "Fresh Farms", Priority::Low, 2, 25.0),
            ordered,
        ];
        let groups = by_supplier(&items);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].supplier, "Fresh Farms");
        assert_eq!(groups[0].item_count, 2);
        assert_eq!(groups[0].total_cost, 250.0);
    }

    #[test]
    fn test_overview_and_analytics() {
        let mut done = order("ORD-003", "Fresh Farms", Priority::Urgent, 1, 99.0);
        done.advance().unwrap();
        let items = vec![order("ORD-001", "Fresh Farms", Priority::Urgent, 1, 75.0), done];
        let o = overview(&items);
        assert_eq!(o.pending, 1);
        assert_eq!(o.urgent, 2);
        assert_eq!(o.pending_cost, 75.0);

        let a = analytics(&items);
        assert_eq!(a.pending_cost_by_category.len(), 1);
        assert_eq!(a.pending_cost_by_category[0].total_cost, 75.0);
        assert_eq!(a.by_status.len(), 2);
    }

    #[test]
    fn test_new_item_defaults_and_checks() {
        let form = NewOrderItem {
            item_name: "Flour".to_string(),
            category: OrderCategory::Pantry,
            quantity: 20,
            unit: "lbs".to_string(),
            supplier: "Baker Supply".to_string(),
            priority: Priority::Medium,
            needed_date: None,
            estimated_cost: 56.0,
            notes: String::new(),
        };
        let item = form.clone().into_item("ORD-007".to_string(), &suppliers(), today()).unwrap();
        assert_eq!(item.status, OrderStatus::Pending);
        assert_eq!(item.needed_date, today() + Duration::days(1));

        let mut negative = form.clone();
        negative.estimated_cost = -1.0;
        assert!(negative.into_item("ORD-007".to_string(), &suppliers(), today()).is_err());

        let mut unknown = form;
        unknown.supplier = "Nowhere".to_string();
        assert!(unknown.into_item("ORD-007".to_string(), &suppliers(), today()).is_err());
    }
}
