// Seed data for the in-memory boards, anchored to the current day

use chrono::{DateTime, Duration, NaiveDate, Utc};

use super::display::{
    HousekeepingKind, HousekeepingNote, ModificationStatus, OrderModification, WhiteboardKind,
    WhiteboardNote,
};
use super::inventory::InventoryItem;
use super::orders::{OrderCategory, OrderItem, OrderStatus, Supplier};
use super::prep::{PrepCategory, PrepItem, PrepStatus};
use super::priority::Priority;
use super::production::{ProductionRow, Station};
use super::reservation::{Reservation, ReservationStatus};
use super::staff::{Employee, EmployeeStatus, EmployeeTask, TaskCategory, WorkStatus};

pub fn inventory(now: DateTime<Utc>) -> Vec<InventoryItem> {
    let item = |id: &str,
                name: &str,
                category: &str,
                stock: (f64, f64, f64),
                unit: &str,
                age: Duration,
                supplier: &str,
                cost: f64| InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        current_stock: stock.0,
        min_stock: stock.1,
        max_stock: stock.2,
        unit: unit.to_string(),
        last_updated: now - age,
        supplier: supplier.to_string(),
        cost_per_unit: cost,
    };

    vec![
        item("1", "Chicken Breast", "Protein", (45.0, 20.0, 100.0), "lbs", Duration::hours(2), "Fresh Farms", 4.50),
        item("2", "Salmon Fillet", "Protein", (12.0, 15.0, 50.0), "lbs", Duration::hours(1), "Ocean Fresh", 12.00),
        item("3", "Onions", "Vegetables", (25.0, 10.0, 60.0), "lbs", Duration::minutes(30), "Local Farm", 1.20),
        item("4", "Garlic", "Vegetables", (8.0, 5.0, 20.0), "lbs", Duration::hours(3), "Local Farm", 3.50),
        item("5", "Olive Oil", "Pantry", (3.0, 5.0, 15.0), "gallons", Duration::hours(4), "Mediterranean Imports", 15.00),
        item("6", "Flour", "Pantry", (18.0, 10.0, 40.0), "lbs", Duration::hours(6), "Baker Supply", 2.80),
        item("7", "Tomatoes", "Vegetables", (35.0, 15.0, 50.0), "lbs", Duration::minutes(45), "Garden Fresh", 2.50),
        item("8", "Pasta", "Pantry", (22.0, 10.0, 30.0), "lbs", Duration::hours(5), "Italian Imports", 3.20),
    ]
}

pub fn production() -> Vec<ProductionRow> {
    let row = |task: &str, batch: &str, station, owner: &str, done| ProductionRow {
        task: task.to_string(),
        batch: batch.to_string(),
        station,
        owner: owner.to_string(),
        done,
    };

    vec![
        row("Beer Cheese Soup", "2x", Station::Sauce, "Alex", false),
        row("Reuben Soup", "1x", Station::Soup, "Sam", false),
        row("Candied Pepitas", "3x", Station::GardeManger, "J", true),
    ]
}

pub fn reservations(today: NaiveDate) -> Vec<Reservation> {
    let tomorrow = today + Duration::days(1);
    let res = |id: &str,
               party: &str,
               phone: &str,
               date: NaiveDate,
               time: &str,
               duration: u32,
               table: u32,
               guests: u32,
               status: ReservationStatus,
               requests: &[&str],
               notes: &str| Reservation {
        id: id.to_string(),
        party_name: party.to_string(),
        phone: phone.to_string(),
        date,
        time: time.to_string(),
        duration,
        table_number: table,
        guest_count: guests,
        status,
        special_requests: requests.iter().map(|r| r.to_string()).collect(),
        notes: notes.to_string(),
    };

    vec![
        res("RES-001", "Smith Party", "(555) 123-4567", today, "18:30", 120, 12, 4,
            ReservationStatus::Confirmed, &["Birthday celebration", "High chair needed"], "VIP customer"),
        res("RES-002", "Johnson Family", "(555) 234-5678", today, "19:15", 90, 8, 6,
            ReservationStatus::Pending, &["Vegetarian options"], ""),
        res("RES-003", "Williams", "(555) 345-6789", today, "20:00", 120, 5, 2,
            ReservationStatus::Seated, &["Anniversary dinner"], "Window table preferred"),
        res("RES-004", "Brown Group", "(555) 456-7890", tomorrow, "19:00", 150, 15, 8,
            ReservationStatus::Confirmed, &["Business dinner", "Quiet table preferred"], "Corporate account"),
        res("RES-005", "Martinez Family", "(555) 567-8901", tomorrow, "18:00", 120, 3, 5,
            ReservationStatus::Confirmed, &["Wheelchair accessible"], ""),
    ]
}

pub fn employees() -> Vec<Employee> {
    let emp = |name: &str, role: &str, status, current_tasks| Employee {
        name: name.to_string(),
        role: role.to_string(),
        status,
        current_tasks,
    };

    vec![
        emp("Chef Mike", "Head Chef", EmployeeStatus::Available, 2),
        emp("Chef Sarah", "Sous Chef", EmployeeStatus::Busy, 3),
        emp("Chef Alex", "Line Cook", EmployeeStatus::Available, 1),
        emp("Manager Lisa", "Kitchen Manager", EmployeeStatus::Available, 1),
        emp("Server John", "Server", EmployeeStatus::Busy, 2),
        emp("Dishwasher Tom", "Dishwasher", EmployeeStatus::Available, 0),
    ]
}

pub fn employee_tasks(today: NaiveDate) -> Vec<EmployeeTask> {
    let task = |id: &str,
                title: &str,
                description: &str,
                who: &str,
                priority,
                status,
                due: i64,
                created: i64,
                minutes,
                category| EmployeeTask {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        assigned_to: who.to_string(),
        priority,
        status,
        due_date: today + Duration::days(due),
        created_date: today + Duration::days(created),
        estimated_duration: minutes,
        category,
    };

    vec![
        task("TASK-001", "Deep clean grill station",
             "Complete deep cleaning of grill station including grates, burners, and surrounding area",
             "Chef Mike", Priority::High, WorkStatus::Pending, 0, -1, 60, TaskCategory::Cleaning),
        task("TASK-002", "Inventory count - protein section",
             "Count and record all protein items in walk-in cooler",
             "Chef Sarah", Priority::Medium, WorkStatus::InProgress, 1, -2, 30, TaskCategory::Inventory),
        task("TASK-003", "Prep mise en place for tomorrow",
             "Prepare all mise en place items for tomorrow's service",
             "Chef Alex", Priority::Urgent, WorkStatus::Pending, 0, 0, 120, TaskCategory::Prep),
        task("TASK-004", "Fix broken dishwasher",
             "Call maintenance and coordinate dishwasher repair",
             "Manager Lisa", Priority::Urgent, WorkStatus::Completed, -1, -3, 45, TaskCategory::Maintenance),
        task("TASK-005", "Update menu boards",
             "Update daily specials on all menu boards",
             "Server John", Priority::Low, WorkStatus::Pending, 0, 0, 15, TaskCategory::Service),
    ]
}

pub fn prep_items(today: NaiveDate) -> Vec<PrepItem> {
    let prep = |id: &str,
                name: &str,
                category,
                (needed, done): (u32, u32),
                unit: &str,
                status,
                priority,
                who: &str,
                notes: &str| PrepItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        quantity_needed: needed,
        unit: unit.to_string(),
        quantity_completed: done,
        status,
        priority,
        assigned_to: who.to_string(),
        notes: notes.to_string(),
        created_date: today,
    };

    vec![
        prep("PREP-001", "Onions diced", PrepCategory::MiseEnPlace, (2, 2), "lbs",
             PrepStatus::Completed, Priority::Medium, "Chef Mike", "For tonight's service"),
        prep("PREP-002", "Garlic minced", PrepCategory::MiseEnPlace, (1, 1), "cup",
             PrepStatus::Completed, Priority::Medium, "Chef Mike", ""),
        prep("PREP-003", "Chicken breast trimmed", PrepCategory::Protein, (15, 12), "pieces",
             PrepStatus::InProgress, Priority::High, "Chef Sarah", "Need 12 portions"),
        prep("PREP-004", "Salmon portioned", PrepCategory::Protein, (3, 0), "lbs",
             PrepStatus::Pending, Priority::Urgent, "Chef Sarah", "VIP table order"),
        prep("PREP-005", "Béarnaise sauce", PrepCategory::Sauce, (1, 0), "batch",
             PrepStatus::Behind, Priority::Urgent, "Sauce Station", "Running low"),
        prep("PREP-006", "Hollandaise ready", PrepCategory::Sauce, (1, 0), "batch",
             PrepStatus::Behind, Priority::Urgent, "Sauce Station", ""),
        prep("PREP-007", "Carrots julienne", PrepCategory::Vegetables, (3, 1), "lbs",
             PrepStatus::InProgress, Priority::Medium, "Prep Station", "For tonight's special"),
        prep("PREP-008", "Mushrooms sautéed", PrepCategory::Vegetables, (2, 0), "lbs",
             PrepStatus::Pending, Priority::High, "Prep Station", ""),
        prep("PREP-009", "Parsley garnish", PrepCategory::Garnish, (1, 1), "bunch",
             PrepStatus::Completed, Priority::Low, "Garnish Station", ""),
        prep("PREP-010", "Lemon wedges", PrepCategory::Garnish, (50, 30), "pieces",
             PrepStatus::InProgress, Priority::Medium, "Garnish Station", ""),
    ]
}

pub fn suppliers() -> Vec<Supplier> {
    let supplier = |name: &str, contact: &str, days: &str| Supplier {
        name: name.to_string(),
        contact: contact.to_string(),
        delivery_days: days.to_string(),
    };

    vec![
        supplier("Fresh Farms", "(555) 100-2000", "Mon, Wed, Fri"),
        supplier("Ocean Fresh", "(555) 200-3000", "Tue, Thu"),
        supplier("Local Farm", "(555) 300-4000", "Mon, Wed, Fri"),
        supplier("Mediterranean Imports", "(555) 400-5000", "Daily"),
        supplier("Baker Supply", "(555) 500-6000", "Mon, Thu"),
        supplier("Garden Fresh", "(555) 600-7000", "Tue, Fri"),
    ]
}

pub fn order_items(today: NaiveDate) -> Vec<OrderItem> {
    let order = |id: &str,
                 name: &str,
                 category,
                 quantity,
                 unit: &str,
                 supplier: &str,
                 priority,
                 notes: &str,
                 needed_in: i64,
                 cost| OrderItem {
        id: id.to_string(),
        item_name: name.to_string(),
        category,
        quantity,
        unit: unit.to_string(),
        supplier: supplier.to_string(),
        priority,
        status: OrderStatus::Pending,
        notes: notes.to_string(),
        created_date: today,
        needed_date: today + Duration::days(needed_in),
        estimated_cost: cost,
    };

    vec![
        order("ORD-001", "Chicken Breast", OrderCategory::Protein, 50, "lbs", "Fresh Farms",
              Priority::High, "For weekend rush", 1, 225.00),
        order("ORD-002", "Salmon Fillet", OrderCategory::Protein, 20, "lbs", "Ocean Fresh",
              Priority::Medium, "Special order", 2, 240.00),
        order("ORD-003", "Organic Onions", OrderCategory::Vegetables, 25, "lbs", "Local Farm",
              Priority::Low, "Weekly order", 3, 30.00),
        order("ORD-004", "Olive Oil", OrderCategory::Pantry, 5, "gallons", "Mediterranean Imports",
              Priority::Urgent, "Running low", 0, 75.00),
        order("ORD-005", "Flour", OrderCategory::Pantry, 20, "lbs", "Baker Supply",
              Priority::Medium, "Bread making", 1, 56.00),
        order("ORD-006", "Tomatoes", OrderCategory::Vegetables, 30, "lbs", "Garden Fresh",
              Priority::High, "Sauce preparation", 1, 75.00),
    ]
}

pub fn modifications(now: DateTime<Utc>) -> Vec<OrderModification> {
    let m = |id: &str, table, item: &str, change: &str, minutes_ago, priority| OrderModification {
        id: id.to_string(),
        table_number: table,
        original_item: item.to_string(),
        modification: change.to_string(),
        timestamp: now - Duration::minutes(minutes_ago),
        status: ModificationStatus::Pending,
        priority,
    };

    vec![
        m("1", 12, "Caesar Salad", "Extra side salad - No dressing", 2, Priority::Medium),
        m("2", 8, "Burger Deluxe", "No onions - Extra pickles", 5, Priority::High),
        m("3", 5, "Fish and Chips", "Substitute fries for sweet potato fries", 8, Priority::Low),
        m("4", 15, "Steak Dinner", "Medium-rare instead of medium", 12, Priority::High),
    ]
}

pub fn housekeeping(now: DateTime<Utc>) -> Vec<HousekeepingNote> {
    let note = |id: &str,
                kind,
                title: &str,
                description: &str,
                table: Option<u32>,
                priority,
                who: &str,
                minutes_ago,
                duration| HousekeepingNote {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        description: description.to_string(),
        table_number: table,
        status: WorkStatus::Pending,
        priority,
        assigned_to: Some(who.to_string()),
        timestamp: now - Duration::minutes(minutes_ago),
        estimated_duration: Some(duration),
    };

    vec![
        note("1", HousekeepingKind::TableMaintenance, "Table 7 - Spill cleanup needed",
             "Large spill on table - needs immediate attention", Some(7), Priority::Urgent,
             "Housekeeping Team", 15, 10),
        note("2", HousekeepingKind::TableMaintenance, "Table 15 - Silverware missing",
             "Need 4 complete sets of silverware", Some(15), Priority::High,
             "Housekeeping Team", 20, 5),
        note("3", HousekeepingKind::Cleaning, "Kitchen Station 1 - Deep clean",
             "Scheduled deep clean for 2 PM", None, Priority::Medium, "Cleaning Crew", 30, 45),
        note("4", HousekeepingKind::SpecialRequest, "Table 10 - Birthday setup",
             "Birthday celebration setup needed - candles, dessert plate", Some(10),
             Priority::Medium, "Server Team", 45, 15),
    ]
}

pub fn whiteboard_notes(now: DateTime<Utc>) -> Vec<WhiteboardNote> {
    let note = |id: &str, kind, title: &str, content: &str, priority, age: Duration, expires: Option<Duration>| {
        WhiteboardNote {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            content: content.to_string(),
            priority,
            timestamp: now - age,
            expires_at: expires.map(|d| now + d),
        }
    };

    vec![
        note("1", WhiteboardKind::Special, "Special of the Day",
             "Pan-seared salmon with lemon butter sauce", Priority::High,
             Duration::hours(1), Some(Duration::hours(24))),
        note("2", WhiteboardKind::EightySix, "86 Items", "Lobster bisque, Caesar salad",
             Priority::High, Duration::minutes(30), None),
        note("3", WhiteboardKind::StaffNote, "Staff Notes", "Dishwasher maintenance at 3 PM",
             Priority::Medium, Duration::minutes(45), None),
        note("4", WhiteboardKind::Goal, "Today's Goals", "Reduce ticket times by 15%",
             Priority::Medium, Duration::hours(2), None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{inventory, reservation};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_seed_sizes() {
        let now = Utc::now();
        assert_eq!(inventory(now).len(), 8);
        assert_eq!(production().len(), 3);
        assert_eq!(reservations(today()).len(), 5);
        assert_eq!(employees().len(), 6);
        assert_eq!(employee_tasks(today()).len(), 5);
        assert_eq!(prep_items(today()).len(), 10);
        assert_eq!(order_items(today()).len(), 6);
        assert_eq!(suppliers().len(), 6);
    }

    #[test]
    fn test_seed_inventory_dashboard() {
        let dash = inventory::dashboard(&inventory(Utc::now()));
        // Salmon and Olive Oil are at or below minimum
        assert_eq!(dash.overview.critical_stock_items, 2);
        assert_eq!(dash.overview.low_stock_items, 0);
        assert_eq!(dash.reorder.len(), 2);
        assert!((dash.overview.total_value - 657.80).abs() < 1e-6);
    }

    #[test]
    fn test_seed_reservations_split_today_tomorrow() {
        let list = reservations(today());
        let o = reservation::overview(&list, today());
        assert_eq!(o.today, 3);
        assert_eq!(o.guests_today, 12);
    }

    #[test]
    fn test_seed_tasks_reference_known_employees() {
        let staff = employees();
        assert!(employee_tasks(today())
            .iter()
            .all(|t| staff.iter().any(|e| e.name == t.assigned_to)));
    }

    #[test]
    fn test_seed_orders_reference_known_suppliers() {
        let known = suppliers();
        assert!(order_items(today())
            .iter()
            .all(|o| known.iter().any(|s| s.name == o.supplier)));
    }
}
