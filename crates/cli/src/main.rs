//! Kitchen CLI - Command-line front end for the Kitchen Command Center daemon

mod rpc;
mod views;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde::Deserialize;
use serde_json::{json, Value};

use kitchen_core::application::{
    BoardCounts, DisplayAction, NotesBoard, OrdersBoard, PrepBoard, ProductionBoard,
    ReservationDay, StaffBoard,
};
use kitchen_core::domain::display::{DisplayAnalytics, DisplayBoard};
use kitchen_core::domain::inventory::InventoryDashboard;
use kitchen_core::domain::notes::{Drawing, Note, QuickNote};
use kitchen_core::domain::orders::{OrderAnalytics, OrderItem, SupplierOrder};
use kitchen_core::domain::prep::{PrepAnalytics, PrepItem};
use kitchen_core::domain::production::{ProductionRow, Station};
use kitchen_core::domain::reservation::{
    CalendarMonth, Reservation, ReservationOverview, TimeSlot,
};
use kitchen_core::domain::staff::{EmployeeTask, StaffAnalytics};
use kitchen_core::domain::{Event, Priority, Task};
use rpc::RpcClient;

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9640";

#[derive(Parser)]
#[command(name = "kitchen")]
#[command(about = "Kitchen Command Center CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "KITCHEN_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Persisted to-do records
    #[command(subcommand)]
    Tasks(TaskCommand),

    /// Persisted calendar events
    #[command(subcommand)]
    Events(EventCommand),

    /// Inventory dashboard
    Inventory,

    /// Daily production list
    #[command(subcommand)]
    Production(ProductionCommand),

    /// Kitchen notes
    #[command(subcommand)]
    Notes(NoteCommand),

    /// Whiteboard drawing
    #[command(subcommand)]
    Whiteboard(WhiteboardCommand),

    /// Reservations
    #[command(subcommand)]
    Reservations(ReservationCommand),

    /// Employee tasks
    #[command(subcommand)]
    Staff(StaffCommand),

    /// Prep list
    #[command(subcommand)]
    Prep(PrepCommand),

    /// Supplier orders
    #[command(subcommand)]
    Orders(OrderCommand),

    /// Kitchen display
    #[command(subcommand)]
    Display(DisplayCommand),

    /// Show system status
    Status,
}

#[derive(Subcommand)]
enum TaskCommand {
    /// List tasks, newest first
    List,
    /// Create a task
    Add { title: String },
    /// Mark a task completed
    Done { id: i64 },
    /// Change a task title
    Rename { id: i64, title: String },
    /// Delete a task
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum EventCommand {
    /// List all events
    List,
    /// Events starting on one day
    Today {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Create an event
    Add {
        #[arg(long)]
        name: String,
        /// RFC 3339 timestamp
        #[arg(long)]
        start: DateTime<Utc>,
        /// RFC 3339 timestamp
        #[arg(long)]
        end: DateTime<Utc>,
        #[arg(long)]
        location: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete an event
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum ProductionCommand {
    /// Show the production board
    Show {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Append a row to the board
    Add {
        #[arg(long)]
        task: String,
        #[arg(long, default_value = "")]
        batch: String,
        /// Sauce, Soup, Garde Manger, Grill, Fry, Pasta or Salad
        #[arg(long)]
        station: Station,
        #[arg(long, default_value = "")]
        owner: String,
    },
    /// Flip the done flag of a row (zero-based)
    Toggle { index: usize },
}

#[derive(Subcommand)]
enum NoteCommand {
    /// Notes and announcements
    List,
    /// Add a note
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long, default_value = "medium")]
        priority: Priority,
        #[arg(long)]
        author: String,
    },
    /// Add a note from a template ("86 Items", "Special Prep", "Station Notes")
    Quick { template: QuickNote },
    /// Delete a note
    Delete { id: u32 },
}

#[derive(Subcommand)]
enum WhiteboardCommand {
    /// Show whether a drawing is saved
    Show,
    /// Save a drawing from a JSON document
    Save { data: String },
    /// Remove the saved drawing
    Clear,
}

#[derive(Subcommand)]
enum ReservationCommand {
    /// Today's counters
    Overview,
    /// Reservations on one day
    List {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Month calendar around a day
    Calendar {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Bookable time slots for a day
    Slots {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Book a table
    Add(NewReservationArgs),
    /// Seat a confirmed party
    Seat { id: String },
    /// Close a seated party
    Complete { id: String },
}

#[derive(Args)]
struct NewReservationArgs {
    #[arg(long)]
    party_name: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    date: NaiveDate,
    /// HH:MM
    #[arg(long)]
    time: String,
    #[arg(long, default_value_t = 2)]
    guests: u32,
    #[arg(long, default_value_t = 1)]
    table: u32,
    /// One request per line
    #[arg(long, default_value = "")]
    requests: String,
    #[arg(long, default_value = "")]
    notes: String,
}

#[derive(Subcommand)]
enum StaffCommand {
    /// Task board with optional filters
    List {
        /// pending, in-progress or completed
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        employee: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Assign a task
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        assigned_to: String,
        #[arg(long, default_value = "medium")]
        priority: Priority,
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Minutes
        #[arg(long, default_value_t = 30)]
        duration: u32,
        #[arg(long, default_value = "other")]
        category: String,
    },
    /// Start a pending task
    Start { id: String },
    /// Complete a task
    Complete { id: String },
    /// Task counts by status, priority and assignee
    Analytics,
}

#[derive(Subcommand)]
enum PrepCommand {
    /// Prep board grouped by category
    List,
    /// Add a prep item
    Add {
        #[arg(long)]
        name: String,
        /// mise-en-place, protein, sauce, vegetables, garnish or other
        #[arg(long, default_value = "other")]
        category: String,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
        #[arg(long)]
        unit: String,
        #[arg(long)]
        assigned_to: String,
        #[arg(long, default_value = "medium")]
        priority: Priority,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Record the completed quantity of an item
    Qty { id: String, quantity: u32 },
    /// Mark an item complete
    Complete { id: String },
    /// Mark every item complete
    CompleteAll,
    /// Prep counts and per-category completion
    Analytics,
}

#[derive(Subcommand)]
enum OrderCommand {
    /// Order list with optional filters
    List {
        #[arg(long)]
        supplier: Option<String>,
        #[arg(long)]
        priority: Option<Priority>,
        /// pending, ordered, received or completed
        #[arg(long)]
        status: Option<String>,
    },
    /// Add an order line
    Add {
        #[arg(long)]
        item: String,
        /// protein, vegetables, pantry, dairy, beverages or other
        #[arg(long, default_value = "other")]
        category: String,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
        #[arg(long)]
        unit: String,
        #[arg(long)]
        supplier: String,
        #[arg(long, default_value = "medium")]
        priority: Priority,
        #[arg(long)]
        needed: Option<NaiveDate>,
        #[arg(long, default_value_t = 0.0)]
        cost: f64,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Move an order to its next status
    Advance { id: String },
    /// Orders grouped by supplier
    Suppliers,
    /// Order counts and pending cost per category
    Analytics,
}

#[derive(Subcommand)]
enum DisplayCommand {
    /// Kitchen display board
    Show,
    /// Prep, modification and timeline series
    Analytics,
    /// Accept a pending modification
    Accept { id: String },
    /// Decline a pending modification
    Decline { id: String },
    /// Complete a housekeeping note
    HousekeepingDone { id: String },
    /// Drop accepted and declined modifications
    ClearCompleted,
}

#[derive(Deserialize)]
struct Ack {
    ok: bool,
}

#[derive(Deserialize)]
struct CompleteAll {
    completed: usize,
}

#[derive(Deserialize)]
struct Stats {
    version: String,
    tasks: i64,
    events: i64,
    boards: BoardCounts,
    uptime_seconds: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = RpcClient::new(cli.rpc_url);

    match cli.command {
        Commands::Tasks(cmd) => tasks(&client, cmd).await,
        Commands::Events(cmd) => events(&client, cmd).await,
        Commands::Inventory => {
            let dashboard: InventoryDashboard =
                client.call("inventory.dashboard.v1", json!({})).await?;
            views::inventory(&dashboard);
            Ok(())
        }
        Commands::Production(cmd) => production(&client, cmd).await,
        Commands::Notes(cmd) => notes(&client, cmd).await,
        Commands::Whiteboard(cmd) => whiteboard(&client, cmd).await,
        Commands::Reservations(cmd) => reservations(&client, cmd).await,
        Commands::Staff(cmd) => staff(&client, cmd).await,
        Commands::Prep(cmd) => prep(&client, cmd).await,
        Commands::Orders(cmd) => orders(&client, cmd).await,
        Commands::Display(cmd) => display(&client, cmd).await,
        Commands::Status => status(&client).await,
    }
}

async fn tasks(client: &RpcClient, cmd: TaskCommand) -> Result<()> {
    match cmd {
        TaskCommand::List => {
            let tasks: Vec<Task> = client.call("tasks.list.v1", json!({})).await?;
            views::tasks(&tasks);
        }
        TaskCommand::Add { title } => {
            let task: Task = client
                .call("tasks.create.v1", json!({ "title": title }))
                .await?;
            views::success(&format!("Task {} created", task.id));
            views::tasks(&[task]);
        }
        TaskCommand::Done { id } => {
            let task: Task = client
                .call("tasks.patch.v1", json!({ "id": id, "patch": { "completed": true } }))
                .await?;
            views::success(&format!("Task {} completed", task.id));
        }
        TaskCommand::Rename { id, title } => {
            let task: Task = client
                .call("tasks.patch.v1", json!({ "id": id, "patch": { "title": title } }))
                .await?;
            views::tasks(&[task]);
        }
        TaskCommand::Delete { id } => {
            let ack: Ack = client.call("tasks.delete.v1", json!({ "id": id })).await?;
            if ack.ok {
                views::success(&format!("Task {} deleted", id));
            }
        }
    }
    Ok(())
}

async fn events(client: &RpcClient, cmd: EventCommand) -> Result<()> {
    match cmd {
        EventCommand::List => {
            let events: Vec<Event> = client.call("events.list.v1", json!({})).await?;
            views::events(&events);
        }
        EventCommand::Today { date } => {
            let events: Vec<Event> = client
                .call("events.today.v1", json!({ "date": date }))
                .await?;
            views::events(&events);
        }
        EventCommand::Add {
            name,
            start,
            end,
            location,
            notes,
        } => {
            let event: Event = client
                .call(
                    "events.create.v1",
                    json!({
                        "name": name,
                        "start": start,
                        "end": end,
                        "location": location,
                        "notes": notes,
                    }),
                )
                .await?;
            views::success(&format!("Event {} created", event.id));
            views::events(&[event]);
        }
        EventCommand::Delete { id } => {
            let ack: Ack = client.call("events.delete.v1", json!({ "id": id })).await?;
            if ack.ok {
                views::success(&format!("Event {} deleted", id));
            }
        }
    }
    Ok(())
}

async fn production(client: &RpcClient, cmd: ProductionCommand) -> Result<()> {
    let board: ProductionBoard = match cmd {
        ProductionCommand::Show { date } => {
            client
                .call("production.board.v1", json!({ "date": date }))
                .await?
        }
        ProductionCommand::Add {
            task,
            batch,
            station,
            owner,
        } => {
            let mut board: ProductionBoard =
                client.call("production.board.v1", json!({})).await?;
            board.rows.push(ProductionRow {
                task,
                batch,
                station,
                owner,
                done: false,
            });
            client
                .call("production.save.v1", json!({ "rows": board.rows }))
                .await?
        }
        ProductionCommand::Toggle { index } => {
            client
                .call("production.toggle.v1", json!({ "index": index }))
                .await?
        }
    };
    views::production(&board);
    Ok(())
}

async fn notes(client: &RpcClient, cmd: NoteCommand) -> Result<()> {
    match cmd {
        NoteCommand::List => {
            let board: NotesBoard = client.call("notes.board.v1", json!({})).await?;
            views::notes(&board);
        }
        NoteCommand::Add {
            title,
            content,
            priority,
            author,
        } => {
            let note: Note = client
                .call(
                    "notes.add.v1",
                    json!({
                        "title": title,
                        "content": content,
                        "priority": priority,
                        "author": author,
                    }),
                )
                .await?;
            views::success(&format!("Note {} added", note.id));
        }
        NoteCommand::Quick { template } => {
            let note: Note = client
                .call("notes.quick.v1", json!({ "template": template }))
                .await?;
            views::success(&format!("Note {} added: {}", note.id, note.title));
        }
        NoteCommand::Delete { id } => {
            let ack: Ack = client.call("notes.delete.v1", json!({ "id": id })).await?;
            if ack.ok {
                views::success(&format!("Note {} deleted", id));
            }
        }
    }
    Ok(())
}

async fn whiteboard(client: &RpcClient, cmd: WhiteboardCommand) -> Result<()> {
    match cmd {
        WhiteboardCommand::Show => {
            let drawing: Option<Drawing> = client.call("whiteboard.get.v1", json!({})).await?;
            match drawing {
                Some(drawing) => println!(
                    "  {} {}",
                    "Saved:".bold(),
                    drawing.saved_at.format("%Y-%m-%d %H:%M")
                ),
                None => println!("{}", "Whiteboard is empty".yellow()),
            }
        }
        WhiteboardCommand::Save { data } => {
            let data: Value = serde_json::from_str(&data).context("Drawing must be JSON")?;
            let drawing: Drawing = client
                .call("whiteboard.save.v1", json!({ "data": data }))
                .await?;
            views::success(&format!(
                "Drawing saved at {}",
                drawing.saved_at.format("%H:%M")
            ));
        }
        WhiteboardCommand::Clear => {
            let ack: Ack = client.call("whiteboard.clear.v1", json!({})).await?;
            if ack.ok {
                views::success("Whiteboard cleared");
            }
        }
    }
    Ok(())
}

async fn reservations(client: &RpcClient, cmd: ReservationCommand) -> Result<()> {
    match cmd {
        ReservationCommand::Overview => {
            let overview: ReservationOverview =
                client.call("reservations.overview.v1", json!({})).await?;
            views::reservation_overview(&overview);
        }
        ReservationCommand::List { date } => {
            let day: ReservationDay = client
                .call("reservations.list.v1", json!({ "date": date }))
                .await?;
            println!("{}", format!("Reservations for {}", day.date).cyan().bold());
            views::reservations(&day.reservations);
        }
        ReservationCommand::Calendar { date } => {
            let month: CalendarMonth = client
                .call("reservations.calendar.v1", json!({ "date": date }))
                .await?;
            views::calendar(&month);
        }
        ReservationCommand::Slots { date } => {
            let slots: Vec<TimeSlot> = client
                .call("reservations.slots.v1", json!({ "date": date }))
                .await?;
            views::slots(&slots);
        }
        ReservationCommand::Add(args) => {
            let reservation: Reservation = client
                .call(
                    "reservations.add.v1",
                    json!({
                        "party_name": args.party_name,
                        "phone": args.phone,
                        "date": args.date,
                        "time": args.time,
                        "guest_count": args.guests,
                        "table_number": args.table,
                        "special_requests": args.requests,
                        "notes": args.notes,
                    }),
                )
                .await?;
            views::success(&format!("Reservation {} booked", reservation.id));
            views::reservations(&[reservation]);
        }
        ReservationCommand::Seat { id } => {
            let reservation: Reservation = client
                .call("reservations.seat.v1", json!({ "id": id }))
                .await?;
            views::success(&format!("{} seated", reservation.party_name));
        }
        ReservationCommand::Complete { id } => {
            let reservation: Reservation = client
                .call("reservations.complete.v1", json!({ "id": id }))
                .await?;
            views::success(&format!("{} completed", reservation.party_name));
        }
    }
    Ok(())
}

async fn staff(client: &RpcClient, cmd: StaffCommand) -> Result<()> {
    match cmd {
        StaffCommand::List {
            status,
            employee,
            category,
        } => {
            let board: StaffBoard = client
                .call(
                    "staff.board.v1",
                    json!({ "status": status, "employee": employee, "category": category }),
                )
                .await?;
            views::staff(&board);
        }
        StaffCommand::Add {
            title,
            description,
            assigned_to,
            priority,
            due,
            duration,
            category,
        } => {
            let task: EmployeeTask = client
                .call(
                    "staff.add.v1",
                    json!({
                        "title": title,
                        "description": description,
                        "assigned_to": assigned_to,
                        "priority": priority,
                        "due_date": due,
                        "estimated_duration": duration,
                        "category": category,
                    }),
                )
                .await?;
            views::success(&format!("{} assigned to {}", task.id, task.assigned_to));
        }
        StaffCommand::Start { id } => {
            let task: EmployeeTask = client.call("staff.start.v1", json!({ "id": id })).await?;
            views::success(&format!("{} started", task.id));
        }
        StaffCommand::Complete { id } => {
            let task: EmployeeTask = client
                .call("staff.complete.v1", json!({ "id": id }))
                .await?;
            views::success(&format!("{} completed", task.id));
        }
        StaffCommand::Analytics => {
            let analytics: StaffAnalytics = client.call("staff.analytics.v1", json!({})).await?;
            views::tallies("By status", &analytics.by_status);
            views::tallies("By priority", &analytics.by_priority);
            views::tallies("Active workload", &analytics.workload);
        }
    }
    Ok(())
}

async fn prep(client: &RpcClient, cmd: PrepCommand) -> Result<()> {
    match cmd {
        PrepCommand::List => {
            let board: PrepBoard = client.call("prep.board.v1", json!({})).await?;
            views::prep(&board);
        }
        PrepCommand::Add {
            name,
            category,
            quantity,
            unit,
            assigned_to,
            priority,
            notes,
        } => {
            let item: PrepItem = client
                .call(
                    "prep.add.v1",
                    json!({
                        "name": name,
                        "category": category,
                        "quantity_needed": quantity,
                        "unit": unit,
                        "assigned_to": assigned_to,
                        "priority": priority,
                        "notes": notes,
                    }),
                )
                .await?;
            views::success(&format!("{} added ({})", item.id, item.name));
        }
        PrepCommand::Qty { id, quantity } => {
            let item: PrepItem = client
                .call("prep.quantity.v1", json!({ "id": id, "quantity": quantity }))
                .await?;
            views::success(&format!(
                "{}: {}/{} {}",
                item.name, item.quantity_completed, item.quantity_needed, item.unit
            ));
        }
        PrepCommand::Complete { id } => {
            let item: PrepItem = client.call("prep.complete.v1", json!({ "id": id })).await?;
            views::success(&format!("{} complete", item.name));
        }
        PrepCommand::CompleteAll => {
            let result: CompleteAll = client.call("prep.complete_all.v1", json!({})).await?;
            views::success(&format!("{} items marked complete", result.completed));
        }
        PrepCommand::Analytics => {
            let analytics: PrepAnalytics = client.call("prep.analytics.v1", json!({})).await?;
            views::tallies("By status", &analytics.by_status);
            views::tallies("By priority", &analytics.by_priority);
            views::prep_completion(&analytics);
        }
    }
    Ok(())
}

async fn orders(client: &RpcClient, cmd: OrderCommand) -> Result<()> {
    match cmd {
        OrderCommand::List {
            supplier,
            priority,
            status,
        } => {
            let board: OrdersBoard = client
                .call(
                    "orders.board.v1",
                    json!({ "supplier": supplier, "priority": priority, "status": status }),
                )
                .await?;
            views::orders(&board);
        }
        OrderCommand::Add {
            item,
            category,
            quantity,
            unit,
            supplier,
            priority,
            needed,
            cost,
            notes,
        } => {
            let order: OrderItem = client
                .call(
                    "orders.add.v1",
                    json!({
                        "item_name": item,
                        "category": category,
                        "quantity": quantity,
                        "unit": unit,
                        "supplier": supplier,
                        "priority": priority,
                        "needed_date": needed,
                        "estimated_cost": cost,
                        "notes": notes,
                    }),
                )
                .await?;
            views::success(&format!("{} added for {}", order.id, order.needed_date));
        }
        OrderCommand::Advance { id } => {
            let order: OrderItem = client
                .call("orders.advance.v1", json!({ "id": id }))
                .await?;
            views::success(&format!(
                "{} is now {}",
                order.id,
                views::label(&order.status)
            ));
        }
        OrderCommand::Suppliers => {
            let groups: Vec<SupplierOrder> = client.call("orders.suppliers.v1", json!({})).await?;
            views::suppliers(&groups);
        }
        OrderCommand::Analytics => {
            let analytics: OrderAnalytics = client.call("orders.analytics.v1", json!({})).await?;
            views::tallies("By status", &analytics.by_status);
            views::tallies("By priority", &analytics.by_priority);
            views::order_costs(&analytics);
        }
    }
    Ok(())
}

async fn display(client: &RpcClient, cmd: DisplayCommand) -> Result<()> {
    let (method, id) = match cmd {
        DisplayCommand::Show => {
            let board: DisplayBoard = client.call("display.board.v1", json!({})).await?;
            views::display(&board);
            return Ok(());
        }
        DisplayCommand::Analytics => {
            let analytics: DisplayAnalytics =
                client.call("display.analytics.v1", json!({})).await?;
            views::display_analytics(&analytics);
            return Ok(());
        }
        DisplayCommand::Accept { id } => ("display.accept.v1", Some(id)),
        DisplayCommand::Decline { id } => ("display.decline.v1", Some(id)),
        DisplayCommand::HousekeepingDone { id } => ("display.housekeeping_done.v1", Some(id)),
        DisplayCommand::ClearCompleted => ("display.clear_completed.v1", None),
    };

    let params = match id {
        Some(id) => json!({ "id": id }),
        None => json!({}),
    };
    let action: DisplayAction = client.call(method, params).await?;
    views::display_action(&action);
    Ok(())
}

async fn status(client: &RpcClient) -> Result<()> {
    println!("{}", "System Status".cyan().bold());
    println!();

    match client.call::<Stats>("admin.stats.v1", json!({})).await {
        Ok(stats) => {
            println!("  {} {}", "RPC URL:".bold(), client.url());
            println!("  {} {}", "Status:".bold(), "ONLINE".green());
            println!("  {} {}", "Version:".bold(), stats.version);
            println!();
            println!("  {} {}", "Tasks:".bold(), stats.tasks);
            println!("  {} {}", "Events:".bold(), stats.events);
            views::board_counts(&stats.boards);
            println!();
            println!("  {} {} seconds", "Uptime:".bold(), stats.uptime_seconds);
        }
        Err(e) => {
            println!("  {} {}", "Status:".bold(), "ERROR".red());
            println!("  {} {}", "Error:".bold(), e);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_rpc_url() {
        let cli = Cli::try_parse_from(["kitchen", "status"]).unwrap();
        assert_eq!(cli.rpc_url, DEFAULT_RPC_URL);
    }

    #[test]
    fn test_quick_note_template_parses_title() {
        let cli = Cli::try_parse_from(["kitchen", "notes", "quick", "86 Items"]).unwrap();
        match cli.command {
            Commands::Notes(NoteCommand::Quick { template }) => {
                assert_eq!(template, QuickNote::EightySixItems)
            }
            _ => panic!("expected notes quick"),
        }
    }

    #[test]
    fn test_production_station_parses() {
        let cli = Cli::try_parse_from([
            "kitchen",
            "production",
            "add",
            "--task",
            "Veal stock",
            "--station",
            "Garde Manger",
        ])
        .unwrap();
        match cli.command {
            Commands::Production(ProductionCommand::Add { station, batch, .. }) => {
                assert_eq!(station, Station::GardeManger);
                assert_eq!(batch, "");
            }
            _ => panic!("expected production add"),
        }
    }

    #[test]
    fn test_display_analytics_parses() {
        let cli = Cli::try_parse_from(["kitchen", "display", "analytics"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Display(DisplayCommand::Analytics)
        ));
    }

    #[test]
    fn test_invalid_priority_rejected() {
        let result = Cli::try_parse_from([
            "kitchen", "notes", "add", "--title", "t", "--content", "c", "--priority", "asap",
            "--author", "a",
        ]);
        assert!(result.is_err());
    }
}
