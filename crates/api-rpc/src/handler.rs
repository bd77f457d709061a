//! RPC Method Handlers
//!
//! Thin adapters from request types to the application services.

use crate::error::to_rpc_error;
use crate::types::{
    AckResponse, CompleteAllResponse, DateRequest, EventPatchRequest, EventUpdateRequest,
    ItemIdRequest, NoteIdRequest, PrepQuantityRequest, ProductionSaveRequest,
    ProductionToggleRequest, QuickNoteRequest, RecordIdRequest, StatsResponse, TaskPatchRequest,
    TaskUpdateRequest, WhiteboardSaveRequest,
};
use jsonrpsee::types::ErrorObjectOwned;
use kitchen_core::application::{
    DisplayAction, EventService, KitchenService, NotesBoard, OrdersBoard, PrepBoard,
    ProductionBoard, ReservationDay, StaffBoard, TaskService,
};
use kitchen_core::domain::display::{DisplayAnalytics, DisplayBoard};
use kitchen_core::domain::inventory::InventoryDashboard;
use kitchen_core::domain::notes::{Drawing, NewNote, Note};
use kitchen_core::domain::orders::{
    NewOrderItem, OrderAnalytics, OrderFilter, OrderItem, SupplierOrder,
};
use kitchen_core::domain::prep::{NewPrepItem, PrepAnalytics, PrepItem};
use kitchen_core::domain::reservation::{
    CalendarMonth, NewReservation, Reservation, ReservationOverview, TimeSlot,
};
use kitchen_core::domain::staff::{EmployeeTask, NewEmployeeTask, StaffAnalytics, StaffFilter};
use kitchen_core::domain::{Event, NewEvent, NewTask, Task};
use kitchen_core::port::TimeProvider;
use std::sync::Arc;
use std::time::Instant;

type RpcResult<T> = Result<T, ErrorObjectOwned>;

/// RPC Handler with injected services
pub struct RpcHandler {
    tasks: Arc<TaskService>,
    events: Arc<EventService>,
    kitchen: Arc<KitchenService>,
    time_provider: Arc<dyn TimeProvider>,
    start_time: Instant,
}

impl RpcHandler {
    pub fn new(
        tasks: Arc<TaskService>,
        events: Arc<EventService>,
        kitchen: Arc<KitchenService>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            tasks,
            events,
            kitchen,
            time_provider,
            start_time: Instant::now(),
        }
    }

    // ---- tasks.*.v1 ----

    pub async fn tasks_list(&self) -> RpcResult<Vec<Task>> {
        self.tasks.list().await.map_err(to_rpc_error)
    }

    pub async fn tasks_get(&self, req: RecordIdRequest) -> RpcResult<Task> {
        self.tasks.get(req.id).await.map_err(to_rpc_error)
    }

    pub async fn tasks_create(&self, req: NewTask) -> RpcResult<Task> {
        self.tasks.create(req).await.map_err(to_rpc_error)
    }

    pub async fn tasks_update(&self, req: TaskUpdateRequest) -> RpcResult<Task> {
        self.tasks.update(req.id, req.task).await.map_err(to_rpc_error)
    }

    pub async fn tasks_patch(&self, req: TaskPatchRequest) -> RpcResult<Task> {
        self.tasks.patch(req.id, req.patch).await.map_err(to_rpc_error)
    }

    pub async fn tasks_delete(&self, req: RecordIdRequest) -> RpcResult<AckResponse> {
        self.tasks.delete(req.id).await.map_err(to_rpc_error)?;
        Ok(AckResponse::ok())
    }

    // ---- events.*.v1 ----

    pub async fn events_list(&self) -> RpcResult<Vec<Event>> {
        self.events.list().await.map_err(to_rpc_error)
    }

    /// Stored starts are UTC, so the default day is the UTC date of now
    pub async fn events_today(&self, req: DateRequest) -> RpcResult<Vec<Event>> {
        let date = req
            .date
            .unwrap_or_else(|| self.time_provider.now().date_naive());
        self.events.on_date(date).await.map_err(to_rpc_error)
    }

    pub async fn events_get(&self, req: RecordIdRequest) -> RpcResult<Event> {
        self.events.get(req.id).await.map_err(to_rpc_error)
    }

    pub async fn events_create(&self, req: NewEvent) -> RpcResult<Event> {
        self.events.create(req).await.map_err(to_rpc_error)
    }

    pub async fn events_update(&self, req: EventUpdateRequest) -> RpcResult<Event> {
        self.events.update(req.id, req.event).await.map_err(to_rpc_error)
    }

    pub async fn events_patch(&self, req: EventPatchRequest) -> RpcResult<Event> {
        self.events.patch(req.id, req.patch).await.map_err(to_rpc_error)
    }

    pub async fn events_delete(&self, req: RecordIdRequest) -> RpcResult<AckResponse> {
        self.events.delete(req.id).await.map_err(to_rpc_error)?;
        Ok(AckResponse::ok())
    }

    // ---- inventory / production / notes / whiteboard ----

    pub async fn inventory_dashboard(&self) -> RpcResult<InventoryDashboard> {
        Ok(self.kitchen.inventory_dashboard().await)
    }

    pub async fn production_board(&self, req: DateRequest) -> RpcResult<ProductionBoard> {
        Ok(self.kitchen.production_board(req.date).await)
    }

    pub async fn production_save(&self, req: ProductionSaveRequest) -> RpcResult<ProductionBoard> {
        self.kitchen
            .save_production(req.rows)
            .await
            .map_err(to_rpc_error)
    }

    pub async fn production_toggle(
        &self,
        req: ProductionToggleRequest,
    ) -> RpcResult<ProductionBoard> {
        self.kitchen
            .toggle_production(req.index)
            .await
            .map_err(to_rpc_error)
    }

    pub async fn notes_board(&self) -> RpcResult<NotesBoard> {
        Ok(self.kitchen.notes_board().await)
    }

    pub async fn notes_add(&self, req: NewNote) -> RpcResult<Note> {
        self.kitchen.add_note(req).await.map_err(to_rpc_error)
    }

    pub async fn notes_quick(&self, req: QuickNoteRequest) -> RpcResult<Note> {
        self.kitchen
            .quick_note(req.template)
            .await
            .map_err(to_rpc_error)
    }

    pub async fn notes_delete(&self, req: NoteIdRequest) -> RpcResult<AckResponse> {
        self.kitchen.delete_note(req.id).await.map_err(to_rpc_error)?;
        Ok(AckResponse::ok())
    }

    pub async fn whiteboard_get(&self) -> RpcResult<Option<Drawing>> {
        Ok(self.kitchen.whiteboard().await)
    }

    pub async fn whiteboard_save(&self, req: WhiteboardSaveRequest) -> RpcResult<Drawing> {
        self.kitchen
            .save_whiteboard(req.data)
            .await
            .map_err(to_rpc_error)
    }

    pub async fn whiteboard_clear(&self) -> RpcResult<AckResponse> {
        self.kitchen.clear_whiteboard().await;
        Ok(AckResponse::ok())
    }

    // ---- reservations.*.v1 ----

    pub async fn reservations_overview(&self) -> RpcResult<ReservationOverview> {
        Ok(self.kitchen.reservation_overview().await)
    }

    pub async fn reservations_list(&self, req: DateRequest) -> RpcResult<ReservationDay> {
        Ok(self.kitchen.reservations_on(req.date).await)
    }

    pub async fn reservations_calendar(&self, req: DateRequest) -> RpcResult<CalendarMonth> {
        self.kitchen
            .reservation_calendar(req.date)
            .await
            .map_err(to_rpc_error)
    }

    pub async fn reservations_slots(&self, req: DateRequest) -> RpcResult<Vec<TimeSlot>> {
        Ok(self.kitchen.reservation_slots(req.date).await)
    }

    pub async fn reservations_add(&self, req: NewReservation) -> RpcResult<Reservation> {
        self.kitchen.add_reservation(req).await.map_err(to_rpc_error)
    }

    pub async fn reservations_seat(&self, req: ItemIdRequest) -> RpcResult<Reservation> {
        self.kitchen
            .seat_reservation(&req.id)
            .await
            .map_err(to_rpc_error)
    }

    pub async fn reservations_complete(&self, req: ItemIdRequest) -> RpcResult<Reservation> {
        self.kitchen
            .complete_reservation(&req.id)
            .await
            .map_err(to_rpc_error)
    }

    // ---- staff.*.v1 ----

    pub async fn staff_board(&self, req: StaffFilter) -> RpcResult<StaffBoard> {
        Ok(self.kitchen.staff_board(req).await)
    }

    pub async fn staff_add(&self, req: NewEmployeeTask) -> RpcResult<EmployeeTask> {
        self.kitchen.add_staff_task(req).await.map_err(to_rpc_error)
    }

    pub async fn staff_start(&self, req: ItemIdRequest) -> RpcResult<EmployeeTask> {
        self.kitchen
            .start_staff_task(&req.id)
            .await
            .map_err(to_rpc_error)
    }

    pub async fn staff_complete(&self, req: ItemIdRequest) -> RpcResult<EmployeeTask> {
        self.kitchen
            .complete_staff_task(&req.id)
            .await
            .map_err(to_rpc_error)
    }

    pub async fn staff_analytics(&self) -> RpcResult<StaffAnalytics> {
        Ok(self.kitchen.staff_analytics().await)
    }

    // ---- prep.*.v1 ----

    pub async fn prep_board(&self) -> RpcResult<PrepBoard> {
        Ok(self.kitchen.prep_board().await)
    }

    pub async fn prep_add(&self, req: NewPrepItem) -> RpcResult<PrepItem> {
        self.kitchen.add_prep_item(req).await.map_err(to_rpc_error)
    }

    pub async fn prep_quantity(&self, req: PrepQuantityRequest) -> RpcResult<PrepItem> {
        self.kitchen
            .update_prep_quantity(&req.id, req.quantity)
            .await
            .map_err(to_rpc_error)
    }

    pub async fn prep_complete(&self, req: ItemIdRequest) -> RpcResult<PrepItem> {
        self.kitchen
            .complete_prep_item(&req.id)
            .await
            .map_err(to_rpc_error)
    }

    pub async fn prep_complete_all(&self) -> RpcResult<CompleteAllResponse> {
        Ok(CompleteAllResponse {
            completed: self.kitchen.complete_all_prep().await,
        })
    }

    pub async fn prep_analytics(&self) -> RpcResult<PrepAnalytics> {
        Ok(self.kitchen.prep_analytics().await)
    }

    // ---- orders.*.v1 ----

    pub async fn orders_board(&self, req: OrderFilter) -> RpcResult<OrdersBoard> {
        Ok(self.kitchen.orders_board(req).await)
    }

    pub async fn orders_add(&self, req: NewOrderItem) -> RpcResult<OrderItem> {
        self.kitchen.add_order_item(req).await.map_err(to_rpc_error)
    }

    pub async fn orders_advance(&self, req: ItemIdRequest) -> RpcResult<OrderItem> {
        self.kitchen
            .advance_order(&req.id)
            .await
            .map_err(to_rpc_error)
    }

    pub async fn orders_suppliers(&self) -> RpcResult<Vec<SupplierOrder>> {
        Ok(self.kitchen.orders_by_supplier().await)
    }

    pub async fn orders_analytics(&self) -> RpcResult<OrderAnalytics> {
        Ok(self.kitchen.order_analytics().await)
    }

    // ---- display.*.v1 ----

    pub async fn display_board(&self) -> RpcResult<DisplayBoard> {
        Ok(self.kitchen.display_board().await)
    }

    pub async fn display_analytics(&self) -> RpcResult<DisplayAnalytics> {
        Ok(self.kitchen.display_analytics().await)
    }

    pub async fn display_accept(&self, req: ItemIdRequest) -> RpcResult<DisplayAction> {
        self.kitchen
            .accept_modification(&req.id)
            .await
            .map_err(to_rpc_error)
    }

    pub async fn display_decline(&self, req: ItemIdRequest) -> RpcResult<DisplayAction> {
        self.kitchen
            .decline_modification(&req.id)
            .await
            .map_err(to_rpc_error)
    }

    pub async fn display_housekeeping_done(
        &self,
        req: ItemIdRequest,
    ) -> RpcResult<DisplayAction> {
        self.kitchen
            .complete_housekeeping(&req.id)
            .await
            .map_err(to_rpc_error)
    }

    pub async fn display_clear_completed(&self) -> RpcResult<DisplayAction> {
        Ok(self.kitchen.clear_completed_modifications().await)
    }

    // ---- admin.stats.v1 ----

    pub async fn stats(&self) -> RpcResult<StatsResponse> {
        Ok(StatsResponse {
            version: kitchen_core::VERSION.to_string(),
            tasks: self.tasks.count().await.map_err(to_rpc_error)?,
            events: self.events.count().await.map_err(to_rpc_error)?,
            boards: self.kitchen.counts().await,
            uptime_seconds: self.start_time.elapsed().as_secs(),
        })
    }
}
