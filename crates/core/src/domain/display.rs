// Kitchen display / tablet view: order modifications, housekeeping, whiteboard

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{DomainError, Result};
use super::labels::{percent, tally, time_ago, Tally};
use super::prep::{PrepItem, PrepStatus};
use super::priority::Priority;
use super::reservation::Reservation;
use super::staff::WorkStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModificationStatus {
    Pending,
    Accepted,
    Declined,
    Completed,
}

impl std::fmt::Display for ModificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModificationStatus::Pending => write!(f, "pending"),
            ModificationStatus::Accepted => write!(f, "accepted"),
            ModificationStatus::Declined => write!(f, "declined"),
            ModificationStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Change requested to a ticket already on the line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderModification {
    pub id: String,
    pub table_number: u32,
    pub original_item: String,
    pub modification: String,
    pub timestamp: DateTime<Utc>,
    pub status: ModificationStatus,
    pub priority: Priority,
}

impl OrderModification {
    pub fn accept(&mut self) -> Result<()> {
        self.resolve(ModificationStatus::Accepted)
    }

    pub fn decline(&mut self) -> Result<()> {
        self.resolve(ModificationStatus::Declined)
    }

    fn resolve(&mut self, next: ModificationStatus) -> Result<()> {
        if self.status != ModificationStatus::Pending {
            return Err(DomainError::transition(self.status, next));
        }
        self.status = next;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HousekeepingKind {
    TableMaintenance,
    Cleaning,
    Supplies,
    SpecialRequest,
    Equipment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousekeepingNote {
    pub id: String,
    pub kind: HousekeepingKind,
    pub title: String,
    pub description: String,
    pub table_number: Option<u32>,
    pub status: WorkStatus,
    pub priority: Priority,
    pub assigned_to: Option<String>,
    pub timestamp: DateTime<Utc>,
    /// Minutes
    pub estimated_duration: Option<u32>,
}

impl HousekeepingNote {
    pub fn complete(&mut self) -> Result<()> {
        if self.status == WorkStatus::Completed {
            return Err(DomainError::transition(self.status, WorkStatus::Completed));
        }
        self.status = WorkStatus::Completed;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WhiteboardKind {
    Special,
    #[serde(rename = "86-item")]
    EightySix,
    StaffNote,
    Goal,
    Announcement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhiteboardNote {
    pub id: String,
    pub kind: WhiteboardKind,
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub timestamp: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl WhiteboardNote {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(false, |at| at <= now)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenMetrics {
    pub orders_in_queue: usize,
    /// Whole percent
    pub prep_completion: u32,
    /// Average age of pending modifications, minutes
    pub average_ticket_time: i64,
    pub kitchen_status: String,
}

pub fn metrics(
    modifications: &[OrderModification],
    prep: &[PrepItem],
    now: DateTime<Utc>,
) -> KitchenMetrics {
    let pending: Vec<&OrderModification> = modifications
        .iter()
        .filter(|m| m.status == ModificationStatus::Pending)
        .collect();
    let average_ticket_time = if pending.is_empty() {
        0
    } else {
        let total: i64 = pending.iter().map(|m| (now - m.timestamp).num_minutes()).sum();
        total / pending.len() as i64
    };
    let completed = prep.iter().filter(|p| p.status == PrepStatus::Completed).count();
    let behind = prep.iter().any(|p| p.status == PrepStatus::Behind);

    KitchenMetrics {
        orders_in_queue: pending.len(),
        prep_completion: percent(completed, prep.len()).round() as u32,
        average_ticket_time,
        kitchen_status: if behind { "Behind" } else { "Operational" }.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModificationView {
    #[serde(flatten)]
    pub modification: OrderModification,
    pub time_ago: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousekeepingView {
    #[serde(flatten)]
    pub note: HousekeepingNote,
    pub time_ago: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayBoard {
    pub reservations: Vec<Reservation>,
    pub prep: Vec<PrepItem>,
    pub modifications: Vec<ModificationView>,
    pub housekeeping: Vec<HousekeepingView>,
    pub whiteboard: Vec<WhiteboardNote>,
    pub metrics: KitchenMetrics,
}

/// Assemble the wall display. Expired whiteboard notes are hidden.
pub fn board(
    reservations: Vec<Reservation>,
    prep: &[PrepItem],
    modifications: &[OrderModification],
    housekeeping: &[HousekeepingNote],
    whiteboard: &[WhiteboardNote],
    now: DateTime<Utc>,
) -> DisplayBoard {
    DisplayBoard {
        reservations,
        prep: prep.to_vec(),
        modifications: modifications
            .iter()
            .map(|m| ModificationView {
                time_ago: time_ago(m.timestamp, now),
                modification: m.clone(),
            })
            .collect(),
        housekeeping: housekeeping
            .iter()
            .map(|h| HousekeepingView {
                time_ago: time_ago(h.timestamp, now),
                note: h.clone(),
            })
            .collect(),
        whiteboard: whiteboard
            .iter()
            .filter(|w| !w.is_expired(now))
            .cloned()
            .collect(),
        metrics: metrics(modifications, prep, now),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub table_number: u32,
    pub timestamp: DateTime<Utc>,
    pub original_item: String,
    pub status: ModificationStatus,
}

/// Chart series behind the performance dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayAnalytics {
    pub prep_by_category: Vec<Tally>,
    pub modifications_by_status: Vec<Tally>,
    /// Oldest first
    pub timeline: Vec<TimelinePoint>,
}

pub fn analytics(prep: &[PrepItem], modifications: &[OrderModification]) -> DisplayAnalytics {
    let mut timeline: Vec<TimelinePoint> = modifications
        .iter()
        .map(|m| TimelinePoint {
            table_number: m.table_number,
            timestamp: m.timestamp,
            original_item: m.original_item.clone(),
            status: m.status,
        })
        .collect();
    timeline.sort_by_key(|p| p.timestamp);

    DisplayAnalytics {
        prep_by_category: tally(prep.iter().map(|p| p.category.to_string())),
        modifications_by_status: tally(modifications.iter().map(|m| m.status.to_string())),
        timeline,
    }
}

/// Drop resolved modifications; returns how many were removed.
pub fn clear_completed(modifications: &mut Vec<OrderModification>) -> usize {
    let before = modifications.len();
    modifications.retain(|m| m.status == ModificationStatus::Pending);
    before - modifications.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prep::PrepCategory;
    use chrono::{Duration, NaiveDate};

    fn modification(id: &str, minutes_ago: i64, now: DateTime<Utc>) -> OrderModification {
        OrderModification {
            id: id.to_string(),
            table_number: 12,
            original_item: "Caesar Salad".to_string(),
            modification: "No dressing".to_string(),
            timestamp: now - Duration::minutes(minutes_ago),
            status: ModificationStatus::Pending,
            priority: Priority::Medium,
        }
    }

    fn prep(status: PrepStatus) -> PrepItem {
        PrepItem {
            id: "PREP-001".to_string(),
            name: "Béarnaise sauce".to_string(),
            category: PrepCategory::Sauce,
            quantity_needed: 1,
            unit: "batch".to_string(),
            quantity_completed: 0,
            status,
            priority: Priority::Urgent,
            assigned_to: "Sauce Station".to_string(),
            notes: String::new(),
            created_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    #[test]
    fn test_accept_and_decline_only_from_pending() {
        let now = Utc::now();
        let mut m = modification("1", 2, now);
        m.accept().unwrap();
        assert!(m.decline().is_err());
        let mut d = modification("2", 2, now);
        d.decline().unwrap();
        assert_eq!(d.status, ModificationStatus::Declined);
    }

    #[test]
    fn test_metrics_derived_from_state() {
        let now = Utc::now();
        let mut mods = vec![modification("1", 2, now), modification("2", 8, now), modification("3", 30, now)];
        mods[2].accept().unwrap();
        let m = metrics(&mods, &[prep(PrepStatus::Completed), prep(PrepStatus::Behind), prep(PrepStatus::Pending)], now);
        assert_eq!(m.orders_in_queue, 2);
        assert_eq!(m.average_ticket_time, 5);
        assert_eq!(m.prep_completion, 33);
        assert_eq!(m.kitchen_status, "Behind");

        let calm = metrics(&[], &[prep(PrepStatus::Completed)], now);
        assert_eq!(calm.kitchen_status, "Operational");
        assert_eq!(calm.average_ticket_time, 0);
        assert_eq!(calm.prep_completion, 100);
    }

    #[test]
    fn test_board_hides_expired_whiteboard_notes() {
        let now = Utc::now();
        let note = |id: &str, expires_at| WhiteboardNote {
            id: id.to_string(),
            kind: WhiteboardKind::Special,
            title: "Special".to_string(),
            content: "Salmon".to_string(),
            priority: Priority::High,
            timestamp: now - Duration::hours(1),
            expires_at,
        };
        let notes = vec![
            note("1", Some(now + Duration::hours(3))),
            note("2", Some(now - Duration::minutes(1))),
            note("3", None),
        ];
        let b = board(vec![], &[], &[modification("1", 5, now)], &[], &notes, now);
        let ids: Vec<&str> = b.whiteboard.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(b.modifications[0].time_ago, "5 min ago");
    }

    #[test]
    fn test_clear_completed_keeps_pending() {
        let now = Utc::now();
        let mut mods = vec![modification("1", 2, now), modification("2", 3, now)];
        mods[0].accept().unwrap();
        assert_eq!(clear_completed(&mut mods), 1);
        assert_eq!(mods.len(), 1);
        assert_eq!(mods[0].id, "2");
    }

    #[test]
    fn test_analytics_series() {
        let now = Utc::now();
        let mut mods = vec![modification("1", 2, now), modification("2", 9, now), modification("3", 4, now)];
        mods[0].accept().unwrap();
        let mut salmon = prep(PrepStatus::Pending);
        salmon.category = PrepCategory::Protein;
        let a = analytics(&[prep(PrepStatus::Pending), salmon, prep(PrepStatus::Completed)], &mods);

        let categories: Vec<(&str, usize)> =
            a.prep_by_category.iter().map(|t| (t.label.as_str(), t.count)).collect();
        assert_eq!(categories, vec![("sauce", 2), ("protein", 1)]);
        let statuses: Vec<(&str, usize)> =
            a.modifications_by_status.iter().map(|t| (t.label.as_str(), t.count)).collect();
        assert_eq!(statuses, vec![("accepted", 1), ("pending", 2)]);

        assert_eq!(a.timeline.len(), 3);
        assert_eq!(a.timeline[0].timestamp, now - Duration::minutes(9));
        assert_eq!(a.timeline[2].status, ModificationStatus::Accepted);

        assert!(analytics(&[], &[]).timeline.is_empty());
    }

    #[test]
    fn test_whiteboard_kind_serde() {
        let json = serde_json::to_string(&WhiteboardKind::EightySix).unwrap();
        assert_eq!(json, "\"86-item\"");
        let json = serde_json::to_string(&HousekeepingKind::TableMaintenance).unwrap();
        assert_eq!(json, "\"table-maintenance\"");
    }
}
