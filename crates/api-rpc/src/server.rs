//! JSON-RPC Server
//!
//! JSON-RPC 2.0 over HTTP on a localhost TCP port.

use crate::handler::RpcHandler;
use crate::types::NoParams;
use jsonrpsee::core::RegisterMethodError;
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::types::{ErrorObjectOwned, Params};
use jsonrpsee::RpcModule;
use kitchen_core::application::{EventService, KitchenService, TaskService};
use kitchen_core::port::TimeProvider;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9640;

/// RPC Server Configuration
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
        }
    }
}

#[derive(Debug, Error)]
pub enum RpcServerError {
    #[error("failed to bind JSON-RPC server on {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("failed to register method: {0}")]
    Register(#[from] RegisterMethodError),
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(
        config: RpcServerConfig,
        tasks: Arc<TaskService>,
        events: Arc<EventService>,
        kitchen: Arc<KitchenService>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            config,
            handler: Arc::new(RpcHandler::new(tasks, events, kitchen, time_provider)),
        }
    }

    /// Start the JSON-RPC server; returns the bound address and the stop handle
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), RpcServerError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|source| RpcServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = server.local_addr().map_err(|source| RpcServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

        let module = build_module(self.handler)?;
        let methods = module.method_names().count();

        info!(addr = %local_addr, methods, "JSON-RPC server started");
        Ok((local_addr, server.start(module)))
    }
}

/// Register one method: parse params into `P`, then hand them to `call`
fn register<P, T, F, Fut>(
    module: &mut RpcModule<()>,
    method: &'static str,
    handler: &Arc<RpcHandler>,
    call: F,
) -> Result<(), RpcServerError>
where
    P: DeserializeOwned + Send + 'static,
    T: Serialize + Clone + Send + 'static,
    F: Fn(Arc<RpcHandler>, P) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<T, ErrorObjectOwned>> + Send + 'static,
{
    let handler = handler.clone();
    module.register_async_method(method, move |params, _, _| {
        let handler = handler.clone();
        let call = call.clone();
        async move {
            let req: P = match params.as_str() {
                Some(_) => params.parse()?,
                // Omitted params read as an empty object
                None => Params::new(Some("{}")).parse()?,
            };
            call(handler, req).await
        }
    })?;
    Ok(())
}

fn build_module(handler: Arc<RpcHandler>) -> Result<RpcModule<()>, RpcServerError> {
    let mut m = RpcModule::new(());
    let h = &handler;

    // Records
    register(&mut m, "tasks.list.v1", h, |h, _: NoParams| async move { h.tasks_list().await })?;
    register(&mut m, "tasks.get.v1", h, |h, req| async move { h.tasks_get(req).await })?;
    register(&mut m, "tasks.create.v1", h, |h, req| async move { h.tasks_create(req).await })?;
    register(&mut m, "tasks.update.v1", h, |h, req| async move { h.tasks_update(req).await })?;
    register(&mut m, "tasks.patch.v1", h, |h, req| async move { h.tasks_patch(req).await })?;
    register(&mut m, "tasks.delete.v1", h, |h, req| async move { h.tasks_delete(req).await })?;

    register(&mut m, "events.list.v1", h, |h, _: NoParams| async move { h.events_list().await })?;
    register(&mut m, "events.today.v1", h, |h, req| async move { h.events_today(req).await })?;
    register(&mut m, "events.get.v1", h, |h, req| async move { h.events_get(req).await })?;
    register(&mut m, "events.create.v1", h, |h, req| async move { h.events_create(req).await })?;
    register(&mut m, "events.update.v1", h, |h, req| async move { h.events_update(req).await })?;
    register(&mut m, "events.patch.v1", h, |h, req| async move { h.events_patch(req).await })?;
    register(&mut m, "events.delete.v1", h, |h, req| async move { h.events_delete(req).await })?;

    // Front of house
    register(&mut m, "inventory.dashboard.v1", h, |h, _: NoParams| async move {
        h.inventory_dashboard().await
    })?;
    register(&mut m, "production.board.v1", h, |h, req| async move {
        h.production_board(req).await
    })?;
    register(&mut m, "production.save.v1", h, |h, req| async move {
        h.production_save(req).await
    })?;
    register(&mut m, "production.toggle.v1", h, |h, req| async move {
        h.production_toggle(req).await
    })?;
    register(&mut m, "notes.board.v1", h, |h, _: NoParams| async move { h.notes_board().await })?;
    register(&mut m, "notes.add.v1", h, |h, req| async move { h.notes_add(req).await })?;
    register(&mut m, "notes.quick.v1", h, |h, req| async move { h.notes_quick(req).await })?;
    register(&mut m, "notes.delete.v1", h, |h, req| async move { h.notes_delete(req).await })?;
    register(&mut m, "whiteboard.get.v1", h, |h, _: NoParams| async move {
        h.whiteboard_get().await
    })?;
    register(&mut m, "whiteboard.save.v1", h, |h, req| async move {
        h.whiteboard_save(req).await
    })?;
    register(&mut m, "whiteboard.clear.v1", h, |h, _: NoParams| async move {
        h.whiteboard_clear().await
    })?;

    // Reservations
    register(&mut m, "reservations.overview.v1", h, |h, _: NoParams| async move {
        h.reservations_overview().await
    })?;
    register(&mut m, "reservations.list.v1", h, |h, req| async move {
        h.reservations_list(req).await
    })?;
    register(&mut m, "reservations.calendar.v1", h, |h, req| async move {
        h.reservations_calendar(req).await
    })?;
    register(&mut m, "reservations.slots.v1", h, |h, req| async move {
        h.reservations_slots(req).await
    })?;
    register(&mut m, "reservations.add.v1", h, |h, req| async move {
        h.reservations_add(req).await
    })?;
    register(&mut m, "reservations.seat.v1", h, |h, req| async move {
        h.reservations_seat(req).await
    })?;
    register(&mut m, "reservations.complete.v1", h, |h, req| async move {
        h.reservations_complete(req).await
    })?;

    // Staff
    register(&mut m, "staff.board.v1", h, |h, req| async move { h.staff_board(req).await })?;
    register(&mut m, "staff.add.v1", h, |h, req| async move { h.staff_add(req).await })?;
    register(&mut m, "staff.start.v1", h, |h, req| async move { h.staff_start(req).await })?;
    register(&mut m, "staff.complete.v1", h, |h, req| async move {
        h.staff_complete(req).await
    })?;
    register(&mut m, "staff.analytics.v1", h, |h, _: NoParams| async move {
        h.staff_analytics().await
    })?;

    // Prep
    register(&mut m, "prep.board.v1", h, |h, _: NoParams| async move { h.prep_board().await })?;
    register(&mut m, "prep.add.v1", h, |h, req| async move { h.prep_add(req).await })?;
    register(&mut m, "prep.quantity.v1", h, |h, req| async move {
        h.prep_quantity(req).await
    })?;
    register(&mut m, "prep.complete.v1", h, |h, req| async move {
        h.prep_complete(req).await
    })?;
    register(&mut m, "prep.complete_all.v1", h, |h, _: NoParams| async move {
        h.prep_complete_all().await
    })?;
    register(&mut m, "prep.analytics.v1", h, |h, _: NoParams| async move {
        h.prep_analytics().await
    })?;

    // Orders
    register(&mut m, "orders.board.v1", h, |h, req| async move { h.orders_board(req).await })?;
    register(&mut m, "orders.add.v1", h, |h, req| async move { h.orders_add(req).await })?;
    register(&mut m, "orders.advance.v1", h, |h, req| async move {
        h.orders_advance(req).await
    })?;
    register(&mut m, "orders.suppliers.v1", h, |h, _: NoParams| async move {
        h.orders_suppliers().await
    })?;
    register(&mut m, "orders.analytics.v1", h, |h, _: NoParams| async move {
        h.orders_analytics().await
    })?;

    // Kitchen display
    register(&mut m, "display.board.v1", h, |h, _: NoParams| async move {
        h.display_board().await
    })?;
    register(&mut m, "display.analytics.v1", h, |h, _: NoParams| async move {
        h.display_analytics().await
    })?;
    register(&mut m, "display.accept.v1", h, |h, req| async move {
        h.display_accept(req).await
    })?;
    register(&mut m, "display.decline.v1", h, |h, req| async move {
        h.display_decline(req).await
    })?;
    register(&mut m, "display.housekeeping_done.v1", h, |h, req| async move {
        h.display_housekeeping_done(req).await
    })?;
    register(&mut m, "display.clear_completed.v1", h, |h, _: NoParams| async move {
        h.display_clear_completed().await
    })?;

    // Admin
    register(&mut m, "admin.stats.v1", h, |h, _: NoParams| async move { h.stats().await })?;

    Ok(m)
}
