//! Terminal rendering of board views

use colored::{ColoredString, Colorize};
use std::fmt::Display;
use tabled::{Table, Tabled};

use kitchen_core::application::{
    BoardCounts, DisplayAction, NotesBoard, OrdersBoard, PrepBoard, ProductionBoard, StaffBoard,
};
use kitchen_core::domain::display::{DisplayAnalytics, DisplayBoard};
use kitchen_core::domain::inventory::{InventoryDashboard, StockStatus};
use kitchen_core::domain::labels::{status_label, Tally};
use kitchen_core::domain::orders::{OrderAnalytics, SupplierOrder};
use kitchen_core::domain::prep::PrepAnalytics;
use kitchen_core::domain::reservation::{CalendarMonth, Reservation, ReservationOverview, TimeSlot};
use kitchen_core::domain::{Event, Priority, Task};

/// Title-cased label of a wire value ("in-progress" -> "In Progress")
pub fn label(value: &impl Display) -> String {
    status_label(&value.to_string())
}

fn priority(p: Priority) -> ColoredString {
    let text = label(&p);
    match p {
        Priority::Urgent => text.red().bold(),
        Priority::High => text.yellow(),
        Priority::Medium => text.normal(),
        Priority::Low => text.dimmed(),
    }
}

fn heading(text: &str) {
    println!("{}", text.cyan().bold());
}

fn print_table<T: Tabled>(rows: Vec<T>, empty: &str) {
    if rows.is_empty() {
        println!("{}", empty.yellow());
    } else {
        println!("{}", Table::new(rows));
    }
}

pub fn success(message: &str) {
    println!("{}", format!("✓ {}", message).green().bold());
}

#[derive(Tabled)]
struct TaskLine {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Done")]
    done: &'static str,
    #[tabled(rename = "Created")]
    created: String,
}

pub fn tasks(tasks: &[Task]) {
    let rows = tasks
        .iter()
        .map(|t| TaskLine {
            id: t.id,
            title: t.title.clone(),
            done: if t.completed { "✓" } else { "" },
            created: t.created_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect();
    print_table(rows, "No tasks");
}

#[derive(Tabled)]
struct EventLine {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

pub fn events(events: &[Event]) {
    let rows = events
        .iter()
        .map(|e| EventLine {
            id: e.id,
            name: e.name.clone(),
            start: e.start.format("%Y-%m-%d %H:%M").to_string(),
            end: e.end.format("%Y-%m-%d %H:%M").to_string(),
            location: e.location.clone(),
            notes: e.notes.clone().unwrap_or_default(),
        })
        .collect();
    print_table(rows, "No events");
}

#[derive(Tabled)]
struct StockLine {
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Stock")]
    stock: String,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct ReorderLine {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Order")]
    quantity: String,
    #[tabled(rename = "Supplier")]
    supplier: String,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Urgency")]
    urgency: String,
}

pub fn inventory(dashboard: &InventoryDashboard) {
    let o = &dashboard.overview;
    heading("Inventory");
    println!(
        "  {} {}   {} {}   {} {}   {} ${:.2}",
        "Items:".bold(),
        o.total_items,
        "Low:".bold(),
        o.low_stock_items.to_string().yellow(),
        "Critical:".bold(),
        o.critical_stock_items.to_string().red(),
        "Value:".bold(),
        o.total_value
    );
    println!();

    let rows = dashboard
        .items
        .iter()
        .map(|row| {
            let status = label(&serde_label(&row.stock_status));
            StockLine {
                name: row.item.name.clone(),
                category: row.item.category.clone(),
                stock: format!("{} {}", row.item.current_stock, row.item.unit),
                level: format!("{:.0}%", row.stock_percentage),
                status: match row.stock_status {
                    StockStatus::Critical => status.red().to_string(),
                    StockStatus::Low => status.yellow().to_string(),
                    StockStatus::Good => status.green().to_string(),
                },
                value: format!("${:.2}", row.total_value),
            }
        })
        .collect();
    print_table(rows, "No inventory items");

    if !dashboard.reorder.is_empty() {
        println!();
        heading("Reorder suggestions");
        let rows = dashboard
            .reorder
            .iter()
            .map(|r| ReorderLine {
                item: r.item.clone(),
                quantity: format!("{} {}", r.reorder_qty, r.unit),
                supplier: r.supplier.clone(),
                cost: format!("${:.2}", r.total_cost),
                urgency: r.urgency.clone(),
            })
            .collect();
        print_table(rows, "");
        println!("  {} ${:.2}", "Total:".bold(), dashboard.total_reorder_cost);
    }
}

/// Lowercase wire name of a serde unit variant
fn serde_label<T: serde::Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        _ => String::new(),
    }
}

#[derive(Tabled)]
struct ProductionLine {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Task")]
    task: String,
    #[tabled(rename = "Batch")]
    batch: String,
    #[tabled(rename = "Station")]
    station: String,
    #[tabled(rename = "Owner")]
    owner: String,
    #[tabled(rename = "Done")]
    done: &'static str,
}

pub fn production(board: &ProductionBoard) {
    heading(&format!("Production for {}", board.date));
    let rows = board
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| ProductionLine {
            index,
            task: row.task.clone(),
            batch: row.batch.clone(),
            station: row.station.to_string(),
            owner: row.owner.clone(),
            done: if row.done { "✓" } else { "" },
        })
        .collect();
    print_table(rows, "No production rows");

    let s = &board.summary;
    let progress = s
        .progress
        .map(|p| format!("{:.0}%", p * 100.0))
        .unwrap_or_else(|| "-".to_string());
    println!(
        "  {} {}/{} done, {} pending ({})",
        "Progress:".bold(),
        s.completed,
        s.total,
        s.pending,
        progress
    );
}

pub fn notes(board: &NotesBoard) {
    heading("Announcements");
    for a in &board.announcements {
        println!("  [{}] {}: {}", priority(a.priority), a.title.bold(), a.content);
    }
    println!();

    heading("Notes");
    if board.notes.is_empty() {
        println!("{}", "No notes".yellow());
    }
    for note in &board.notes {
        println!(
            "  #{} [{}] {} ({}, {})",
            note.id,
            priority(note.priority),
            note.title.bold(),
            note.author,
            note.timestamp.format("%Y-%m-%d %H:%M")
        );
        println!("      {}", note.content);
    }
}

pub fn reservation_overview(o: &ReservationOverview) {
    heading("Today");
    println!("  {} {}", "Reservations:".bold(), o.today);
    println!("  {} {}", "Confirmed:".bold(), o.confirmed_today);
    println!("  {} {}", "Seated:".bold(), o.seated_today);
    println!("  {} {}", "Guests:".bold(), o.guests_today);
}

#[derive(Tabled)]
struct ReservationLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Party")]
    party: String,
    #[tabled(rename = "Guests")]
    guests: u32,
    #[tabled(rename = "Table")]
    table: u32,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Requests")]
    requests: String,
}

pub fn reservations(reservations: &[Reservation]) {
    let rows = reservations
        .iter()
        .map(|r| ReservationLine {
            id: r.id.clone(),
            time: r.time.clone(),
            party: r.party_name.clone(),
            guests: r.guest_count,
            table: r.table_number,
            status: label(&r.status),
            requests: r.special_requests.join(", "),
        })
        .collect();
    print_table(rows, "No reservations");
}

pub fn calendar(month: &CalendarMonth) {
    heading(&month.title);
    println!("   Mo   Tu   We   Th   Fr   Sa   Su");
    for week in &month.weeks {
        let line: Vec<String> = week
            .iter()
            .map(|cell| {
                if cell.day == 0 {
                    return "     ".to_string();
                }
                let marker = if cell.reservations > 0 { '*' } else { ' ' };
                let text = format!("{:>4}{}", cell.day, marker);
                if cell.is_selected {
                    text.reversed().to_string()
                } else if cell.is_today {
                    text.bold().to_string()
                } else {
                    text
                }
            })
            .collect();
        println!("{}", line.join(""));
    }
}

pub fn slots(slots: &[TimeSlot]) {
    for slot in slots {
        if slot.occupied {
            println!("  {} {}", slot.time, "booked".red());
        } else {
            println!("  {} {}", slot.time, "open".green());
        }
    }
}

#[derive(Tabled)]
struct StaffLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Assigned")]
    assigned_to: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Category")]
    category: String,
}

pub fn staff(board: &StaffBoard) {
    let o = &board.overview;
    heading("Staff tasks");
    println!(
        "  {} {}   {} {}   {} {}   {} {}   {} {}",
        "Total:".bold(),
        o.total,
        "Pending:".bold(),
        o.pending,
        "In progress:".bold(),
        o.in_progress,
        "Completed:".bold(),
        o.completed,
        "Overdue:".bold(),
        o.overdue.to_string().red()
    );
    println!();

    let rows = board
        .tasks
        .iter()
        .map(|row| {
            let t = &row.task;
            let due = t.due_date.to_string();
            StaffLine {
                id: t.id.clone(),
                title: t.title.clone(),
                assigned_to: t.assigned_to.clone(),
                priority: priority(t.priority).to_string(),
                status: label(&t.status),
                due: if row.overdue { due.red().to_string() } else { due },
                category: label(&t.category),
            }
        })
        .collect();
    print_table(rows, "No tasks match");

    println!();
    for e in &board.employees {
        println!(
            "  {} ({}) {} - {} active",
            e.name.bold(),
            e.role,
            label(&serde_label(&e.status)),
            e.current_tasks
        );
    }
}

pub fn tallies(title: &str, tallies: &[Tally]) {
    heading(title);
    for t in tallies {
        println!("  {:<20} {}", t.label, t.count);
    }
    println!();
}

#[derive(Tabled)]
struct PrepLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Cook")]
    assigned_to: String,
}

pub fn prep(board: &PrepBoard) {
    let o = &board.overview;
    heading("Prep list");
    println!(
        "  {} {}/{} ({:.0}%)   {} {}",
        "Completed:".bold(),
        o.completed,
        o.total,
        o.completion_percentage,
        "Behind:".bold(),
        o.behind.to_string().red()
    );

    for group in &board.categories {
        println!();
        heading(&label(&group.category));
        let rows = group
            .items
            .iter()
            .map(|entry| {
                let item = &entry.item;
                PrepLine {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    progress: format!(
                        "{}/{} {} ({:.0}%)",
                        item.quantity_completed,
                        item.quantity_needed,
                        item.unit,
                        entry.progress * 100.0
                    ),
                    status: label(&item.status),
                    priority: priority(item.priority).to_string(),
                    assigned_to: item.assigned_to.clone(),
                }
            })
            .collect();
        print_table(rows, "");
    }
}

pub fn prep_completion(analytics: &PrepAnalytics) {
    heading("Completion by category");
    for c in &analytics.completion_by_category {
        println!("  {:<20} {:.0}%", label(&c.category), c.rate);
    }
}

#[derive(Tabled)]
struct OrderLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Qty")]
    quantity: String,
    #[tabled(rename = "Supplier")]
    supplier: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Needed")]
    needed: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

pub fn orders(board: &OrdersBoard) {
    let o = &board.overview;
    heading("Orders");
    println!(
        "  {} {}   {} {}   {} {}   {} ${:.2}",
        "Total:".bold(),
        o.total,
        "Pending:".bold(),
        o.pending,
        "Urgent:".bold(),
        o.urgent.to_string().red(),
        "Pending cost:".bold(),
        o.pending_cost
    );
    println!();

    let rows = board
        .items
        .iter()
        .map(|row| {
            let item = &row.item;
            let needed = item.needed_date.to_string();
            OrderLine {
                id: item.id.clone(),
                item: item.item_name.clone(),
                quantity: format!("{} {}", item.quantity, item.unit),
                supplier: item.supplier.clone(),
                priority: priority(item.priority).to_string(),
                status: label(&item.status),
                needed: if row.overdue { needed.red().to_string() } else { needed },
                cost: format!("${:.2}", item.estimated_cost),
            }
        })
        .collect();
    print_table(rows, "No orders match");
}

pub fn suppliers(groups: &[SupplierOrder]) {
    for group in groups {
        heading(&format!(
            "{} ({} items, ${:.2})",
            group.supplier, group.item_count, group.total_cost
        ));
        for item in &group.items {
            println!(
                "  {} {} {} {}",
                item.id,
                item.item_name,
                format!("{} {}", item.quantity, item.unit).dimmed(),
                label(&item.status)
            );
        }
        println!();
    }
}

pub fn order_costs(analytics: &OrderAnalytics) {
    heading("Pending cost by category");
    for c in &analytics.pending_cost_by_category {
        println!("  {:<20} ${:.2}", label(&c.category), c.total_cost);
    }
}

pub fn display(board: &DisplayBoard) {
    let m = &board.metrics;
    heading(&format!("Kitchen: {}", m.kitchen_status));
    println!(
        "  {} {}   {} {}%   {} {} min",
        "Queue:".bold(),
        m.orders_in_queue,
        "Prep:".bold(),
        m.prep_completion,
        "Avg ticket:".bold(),
        m.average_ticket_time
    );
    println!();

    heading("Modifications");
    for view in &board.modifications {
        let m = &view.modification;
        println!(
            "  {} T{} [{}] {} -> {} ({}, {})",
            m.id,
            m.table_number,
            priority(m.priority),
            m.original_item,
            m.modification.bold(),
            label(&m.status),
            view.time_ago
        );
    }
    println!();

    heading("Housekeeping");
    for view in &board.housekeeping {
        let n = &view.note;
        println!(
            "  {} [{}] {} ({}, {})",
            n.id,
            priority(n.priority),
            n.title.bold(),
            label(&n.status),
            view.time_ago
        );
    }
    println!();

    heading("Tonight");
    for r in &board.reservations {
        println!(
            "  {} {} x{} table {} ({})",
            r.time,
            r.party_name,
            r.guest_count,
            r.table_number,
            label(&r.status)
        );
    }
    println!();

    heading("Whiteboard");
    for note in &board.whiteboard {
        println!("  [{}] {}: {}", priority(note.priority), note.title.bold(), note.content);
    }
}

#[derive(Tabled)]
struct TimelineLine {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Table")]
    table: u32,
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Status")]
    status: String,
}

pub fn display_analytics(analytics: &DisplayAnalytics) {
    tallies("Prep items by category", &analytics.prep_by_category);
    tallies("Modification status", &analytics.modifications_by_status);

    heading("Order timeline");
    let rows: Vec<TimelineLine> = analytics
        .timeline
        .iter()
        .map(|p| TimelineLine {
            time: p.timestamp.format("%H:%M").to_string(),
            table: p.table_number,
            item: p.original_item.clone(),
            status: label(&p.status),
        })
        .collect();
    print_table(rows, "No orders on the line");
}

pub fn display_action(action: &DisplayAction) {
    let target = action.target.as_deref().unwrap_or("board");
    success(&format!(
        "{} {} ({} changed)",
        label(&action.action),
        target,
        action.changed
    ));
}

pub fn board_counts(c: &BoardCounts) {
    println!("  {} {}", "Inventory items:".bold(), c.inventory_items);
    println!("  {} {}", "Production rows:".bold(), c.production_rows);
    println!("  {} {}", "Notes:".bold(), c.notes);
    println!("  {} {}", "Reservations:".bold(), c.reservations);
    println!("  {} {}", "Staff tasks:".bold(), c.staff_tasks);
    println!("  {} {}", "Prep items:".bold(), c.prep_items);
    println!("  {} {}", "Order items:".bold(), c.order_items);
    println!("  {} {}", "Pending mods:".bold(), c.pending_modifications);
}
