//! JSON-RPC server wired to SQLite and the kitchen boards, driven over HTTP

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::core::ClientError;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::server::ServerHandle;
use serde_json::Value;

use kitchen_api_rpc::{RpcServer, RpcServerConfig};
use kitchen_core::application::{EventService, KitchenService, TaskService};
use kitchen_core::port::{FixedTimeProvider, TimeProvider};
use kitchen_infra_sqlite::{
    create_pool, run_migrations, SqliteEventRepository, SqliteTaskRepository,
};

/// Kitchen twelve hours behind UTC, just after UTC midnight
struct WestCoastClock;

impl TimeProvider for WestCoastClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 2, 0, 16, 0).unwrap()
    }

    fn today(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }
}

async fn start_daemon() -> (HttpClient, ServerHandle) {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    start_daemon_with(Arc::new(FixedTimeProvider::new(now))).await
}

async fn start_daemon_with(time_provider: Arc<dyn TimeProvider>) -> (HttpClient, ServerHandle) {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    let tasks = Arc::new(TaskService::new(
        Arc::new(SqliteTaskRepository::new(pool.clone())),
        time_provider.clone(),
    ));
    let events = Arc::new(EventService::new(Arc::new(SqliteEventRepository::new(pool))));
    let kitchen = Arc::new(KitchenService::new(time_provider.clone()));

    let config = RpcServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    let (addr, handle) = RpcServer::new(config, tasks, events, kitchen, time_provider)
        .start()
        .await
        .unwrap();

    let client = HttpClientBuilder::default()
        .build(format!("http://{}", addr))
        .unwrap();
    (client, handle)
}

fn params(pairs: &[(&str, Value)]) -> ObjectParams {
    let mut params = ObjectParams::new();
    for (name, value) in pairs {
        params.insert(name, value.clone()).unwrap();
    }
    params
}

fn error_code(err: ClientError) -> i32 {
    match err {
        ClientError::Call(obj) => obj.code(),
        other => panic!("expected call error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_task_crud_over_rpc() {
    let (client, handle) = start_daemon().await;

    let created: Value = client
        .request("tasks.create.v1", params(&[("title", "Clean fryer".into())]))
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["completed"], false);
    assert_eq!(created["created_at"], "2024-06-01T12:00:00Z");

    let patched: Value = client
        .request(
            "tasks.patch.v1",
            params(&[("id", id.into()), ("patch", serde_json::json!({"completed": true}))]),
        )
        .await
        .unwrap();
    assert_eq!(patched["completed"], true);
    assert_eq!(patched["title"], "Clean fryer");

    let listed: Vec<Value> = client
        .request("tasks.list.v1", ObjectParams::new())
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);

    let ack: Value = client
        .request("tasks.delete.v1", params(&[("id", id.into())]))
        .await
        .unwrap();
    assert_eq!(ack["ok"], true);

    let err = client
        .request::<Value, _>("tasks.get.v1", params(&[("id", id.into())]))
        .await
        .unwrap_err();
    assert_eq!(error_code(err), 4001);

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_error_codes() {
    let (client, handle) = start_daemon().await;

    let err = client
        .request::<Value, _>("tasks.create.v1", params(&[("title", "  ".into())]))
        .await
        .unwrap_err();
    assert_eq!(error_code(err), 4000);

    let err = client
        .request::<Value, _>("reservations.add.v1", params(&[
            ("party_name", "Lee".into()),
            ("phone", "(555) 000-1111".into()),
            ("date", "2024-06-01".into()),
            ("time", "25:99".into()),
        ]))
        .await
        .unwrap_err();
    assert_eq!(error_code(err), 4000);

    let err = client
        .request::<Value, _>("production.toggle.v1", params(&[("index", 99.into())]))
        .await
        .unwrap_err();
    assert_eq!(error_code(err), 4001);

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_board_transitions_over_rpc() {
    let (client, handle) = start_daemon().await;

    let seated: Value = client
        .request("reservations.seat.v1", params(&[("id", "RES-001".into())]))
        .await
        .unwrap();
    assert_eq!(seated["status"], "seated");

    let err = client
        .request::<Value, _>("reservations.seat.v1", params(&[("id", "RES-001".into())]))
        .await
        .unwrap_err();
    assert_eq!(error_code(err), 4002);

    let done: Value = client
        .request("prep.complete_all.v1", ObjectParams::new())
        .await
        .unwrap();
    assert_eq!(done["completed"], 7);

    let board: Value = client
        .request("display.board.v1", ObjectParams::new())
        .await
        .unwrap();
    assert_eq!(board["metrics"]["prep_completion"], 100);
    assert_eq!(board["metrics"]["kitchen_status"], "Operational");

    let analytics: Value = client
        .request("display.analytics.v1", ObjectParams::new())
        .await
        .unwrap();
    assert_eq!(analytics["prep_by_category"][0]["label"], "mise-en-place");
    assert_eq!(analytics["modifications_by_status"][0]["count"], 4);
    assert_eq!(analytics["timeline"][0]["table_number"], 15);

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_date_scoped_views_default_to_today() {
    let (client, handle) = start_daemon().await;

    let day: Value = client
        .request("reservations.list.v1", ObjectParams::new())
        .await
        .unwrap();
    assert_eq!(day["date"], "2024-06-01");
    assert_eq!(day["reservations"].as_array().unwrap().len(), 3);

    let tomorrow: Value = client
        .request("reservations.list.v1", params(&[("date", "2024-06-02".into())]))
        .await
        .unwrap();
    assert_eq!(tomorrow["reservations"].as_array().unwrap().len(), 2);

    let month: Value = client
        .request("reservations.calendar.v1", ObjectParams::new())
        .await
        .unwrap();
    assert_eq!(month["title"], "June 2024");

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_stats_counts_records_and_boards() {
    let (client, handle) = start_daemon().await;

    let _: Value = client
        .request(
            "events.create.v1",
            params(&[
                ("name", "Chef's table".into()),
                ("start", "2024-06-01T19:00:00Z".into()),
                ("end", "2024-06-01T22:00:00Z".into()),
                ("location", "Kitchen counter".into()),
            ]),
        )
        .await
        .unwrap();

    let stats: Value = client
        .request("admin.stats.v1", ObjectParams::new())
        .await
        .unwrap();
    assert_eq!(stats["tasks"], 0);
    assert_eq!(stats["events"], 1);
    assert_eq!(stats["boards"]["reservations"], 5);
    assert_eq!(stats["boards"]["pending_modifications"], 4);

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_events_today_uses_utc_date_of_now() {
    let clock = Arc::new(WestCoastClock);
    let (client, handle) = start_daemon_with(clock.clone()).await;

    let _: Value = client
        .request(
            "events.create.v1",
            params(&[
                ("name", "Late seating".into()),
                ("start", clock.now().to_rfc3339().into()),
                ("end", "2024-06-02T02:00:00Z".into()),
                ("location", "Bar".into()),
            ]),
        )
        .await
        .unwrap();

    let today: Vec<Value> = client
        .request("events.today.v1", ObjectParams::new())
        .await
        .unwrap();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0]["name"], "Late seating");

    let local_day: Vec<Value> = client
        .request("events.today.v1", params(&[("date", "2024-06-01".into())]))
        .await
        .unwrap();
    assert!(local_day.is_empty());

    handle.stop().unwrap();
}
