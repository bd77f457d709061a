// Reservations: daily list, month calendar, time slot availability

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{DomainError, Result};
use super::validation::{in_range, required};

/// First bookable slot of the evening
pub const FIRST_SLOT: (u32, u32) = (17, 0);
/// Last bookable slot (inclusive)
pub const LAST_SLOT: (u32, u32) = (22, 0);
pub const SLOT_MINUTES: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Pending,
    Seated,
    Completed,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Pending => "pending",
            ReservationStatus::Seated => "seated",
            ReservationStatus::Completed => "completed",
            ReservationStatus::Cancelled => "cancelled",
        }
    }

    /// Holds its table at the booked time.
    pub fn occupies_slot(self) -> bool {
        matches!(self, ReservationStatus::Confirmed | ReservationStatus::Seated)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub party_name: String,
    pub phone: String,
    pub date: NaiveDate,
    /// "HH:MM"
    pub time: String,
    pub duration: u32,
    pub table_number: u32,
    pub guest_count: u32,
    pub status: ReservationStatus,
    pub special_requests: Vec<String>,
    pub notes: String,
}

impl Reservation {
    pub fn seat(&mut self) -> Result<()> {
        self.transition(ReservationStatus::Confirmed, ReservationStatus::Seated)
    }

    pub fn complete(&mut self) -> Result<()> {
        self.transition(ReservationStatus::Seated, ReservationStatus::Completed)
    }

    fn transition(&mut self, expected: ReservationStatus, next: ReservationStatus) -> Result<()> {
        if self.status != expected {
            return Err(DomainError::transition(self.status, next));
        }
        self.status = next;
        Ok(())
    }
}

/// Reservation form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReservation {
    pub party_name: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: String,
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(default = "default_table")]
    pub table_number: u32,
    #[serde(default = "default_guests")]
    pub guest_count: u32,
    #[serde(default = "default_status")]
    pub status: ReservationStatus,
    /// One request per line
    #[serde(default)]
    pub special_requests: String,
    #[serde(default)]
    pub notes: String,
}

fn default_duration() -> u32 {
    120
}

fn default_table() -> u32 {
    1
}

fn default_guests() -> u32 {
    2
}

fn default_status() -> ReservationStatus {
    ReservationStatus::Confirmed
}

impl NewReservation {
    pub fn into_reservation(self, id: String) -> Result<Reservation> {
        let party_name = required("party_name", &self.party_name)?;
        let phone = required("phone", &self.phone)?;
        let guest_count = in_range("guest_count", self.guest_count, 1, 20)?;
        let table_number = in_range("table_number", self.table_number, 1, 30)?;
        let duration = in_range("duration", self.duration, 30, 300)?;

        if !matches!(
            self.status,
            ReservationStatus::Confirmed | ReservationStatus::Pending
        ) {
            return Err(DomainError::invalid(
                "status",
                "new reservations must be confirmed or pending",
            ));
        }

        Ok(Reservation {
            id,
            party_name,
            phone,
            date: self.date,
            time: normalize_time(&self.time)?,
            duration,
            table_number,
            guest_count,
            status: self.status,
            special_requests: split_requests(&self.special_requests),
            notes: self.notes,
        })
    }
}

/// Parse "H:MM" / "HH:MM" and render it zero-padded.
pub fn normalize_time(value: &str) -> Result<String> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| DomainError::invalid("time", format!("expected HH:MM, got '{}'", value)))
}

/// Newline-separated requests, trimmed, blanks dropped.
pub fn split_requests(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationOverview {
    pub today: usize,
    pub confirmed_today: usize,
    pub seated_today: usize,
    pub guests_today: u32,
}

pub fn overview(reservations: &[Reservation], today: NaiveDate) -> ReservationOverview {
    let todays: Vec<&Reservation> = reservations.iter().filter(|r| r.date == today).collect();
    ReservationOverview {
        today: todays.len(),
        confirmed_today: todays
            .iter()
            .filter(|r| r.status == ReservationStatus::Confirmed)
            .count(),
        seated_today: todays
            .iter()
            .filter(|r| r.status == ReservationStatus::Seated)
            .count(),
        guests_today: todays.iter().map(|r| r.guest_count).sum(),
    }
}

/// Reservations on `date`, earliest first.
pub fn for_date(reservations: &[Reservation], date: NaiveDate) -> Vec<Reservation> {
    let mut day: Vec<Reservation> = reservations
        .iter()
        .filter(|r| r.date == date)
        .cloned()
        .collect();
    day.sort_by(|a, b| a.time.cmp(&b.time));
    day
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Day of month, 0 for padding cells outside the month
    pub day: u32,
    pub reservations: usize,
    pub is_today: bool,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub title: String,
    /// Monday-first weeks of seven cells
    pub weeks: Vec<Vec<CalendarDay>>,
}

pub fn calendar(
    reservations: &[Reservation],
    selected: NaiveDate,
    today: NaiveDate,
) -> Result<CalendarMonth> {
    let first = selected
        .with_day(1)
        .ok_or_else(|| DomainError::invalid("date", "invalid month"))?;
    let days_in_month = days_in_month(first)?;
    let padding = first.weekday().num_days_from_monday();

    let mut cells: Vec<CalendarDay> = (0..padding).map(|_| blank_day()).collect();
    for day in 1..=days_in_month {
        let date = first + Duration::days(i64::from(day - 1));
        cells.push(CalendarDay {
            day,
            reservations: reservations.iter().filter(|r| r.date == date).count(),
            is_today: date == today,
            is_selected: date == selected,
        });
    }
    while cells.len() % 7 != 0 {
        cells.push(blank_day());
    }

    Ok(CalendarMonth {
        year: first.year(),
        month: first.month(),
        title: first.format("%B %Y").to_string(),
        weeks: cells.chunks(7).map(<[CalendarDay]>::to_vec).collect(),
    })
}

fn blank_day() -> CalendarDay {
    CalendarDay {
        day: 0,
        reservations: 0,
        is_today: false,
        is_selected: false,
    }
}

fn days_in_month(first: NaiveDate) -> Result<u32> {
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }
    .ok_or_else(|| DomainError::invalid("date", "date out of range"))?;
    Ok((next - first).num_days() as u32)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: String,
    pub occupied: bool,
}

/// Evening slots every half hour; a slot is taken when a confirmed or
/// seated reservation starts exactly at it.
pub fn time_slots(reservations: &[Reservation], date: NaiveDate) -> Vec<TimeSlot> {
    let (Some(start), Some(end)) = (
        NaiveTime::from_hms_opt(FIRST_SLOT.0, FIRST_SLOT.1, 0),
        NaiveTime::from_hms_opt(LAST_SLOT.0, LAST_SLOT.1, 0),
    ) else {
        return Vec::new();
    };

    let mut slots = Vec::new();
    let mut current = start;
    while current <= end {
        let label = current.format("%H:%M").to_string();
        let occupied = reservations
            .iter()
            .any(|r| r.date == date && r.time == label && r.status.occupies_slot());
        slots.push(TimeSlot {
            time: label,
            occupied,
        });
        current += Duration::minutes(SLOT_MINUTES);
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reservation(id: &str, date: NaiveDate, time: &str, status: ReservationStatus) -> Reservation {
        Reservation {
            id: id.to_string(),
            party_name: "Smith Party".to_string(),
            phone: "(555) 123-4567".to_string(),
            date,
            time: time.to_string(),
            duration: 120,
            table_number: 12,
            guest_count: 4,
            status,
            special_requests: vec![],
            notes: String::new(),
        }
    }

    fn form() -> NewReservation {
        NewReservation {
            party_name: "Lee".to_string(),
            phone: "555".to_string(),
            date: day(2024, 6, 1),
            time: "9:30".to_string(),
            duration: 120,
            table_number: 4,
            guest_count: 2,
            status: ReservationStatus::Pending,
            special_requests: "  Birthday \n\n High chair ".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_seat_then_complete() {
        let mut r = reservation("RES-001", day(2024, 6, 1), "18:30", ReservationStatus::Confirmed);
        assert!(r.complete().is_err());
        r.seat().unwrap();
        assert_eq!(r.status, ReservationStatus::Seated);
        assert!(r.seat().is_err());
        r.complete().unwrap();
        assert_eq!(r.status, ReservationStatus::Completed);
    }

    #[test]
    fn test_pending_cannot_be_seated() {
        let mut r = reservation("RES-002", day(2024, 6, 1), "19:15", ReservationStatus::Pending);
        let err = r.seat().unwrap_err();
        assert!(matches!(err, DomainError::InvalidStateTransition { .. }));
    }

    #[test]
    fn test_new_reservation_normalizes_input() {
        let r = form().into_reservation("RES-006".to_string()).unwrap();
        assert_eq!(r.time, "09:30");
        assert_eq!(r.special_requests, vec!["Birthday", "High chair"]);
    }

    #[test]
    fn test_new_reservation_limits() {
        let mut f = form();
        f.guest_count = 21;
        assert!(f.into_reservation("RES-001".to_string()).is_err());

        let mut f = form();
        f.duration = 20;
        assert!(f.into_reservation("RES-001".to_string()).is_err());

        let mut f = form();
        f.status = ReservationStatus::Seated;
        assert!(f.into_reservation("RES-001".to_string()).is_err());

        let mut f = form();
        f.phone = " ".to_string();
        assert!(f.into_reservation("RES-001".to_string()).is_err());
    }

    #[test]
    fn test_overview_counts_today_only() {
        let today = day(2024, 6, 1);
        let list = vec![
            reservation("RES-001", today, "18:30", ReservationStatus::Confirmed),
            reservation("RES-002", today, "20:00", ReservationStatus::Seated),
            reservation("RES-003", day(2024, 6, 2), "19:00", ReservationStatus::Confirmed),
        ];
        let o = overview(&list, today);
        assert_eq!(o.today, 2);
        assert_eq!(o.confirmed_today, 1);
        assert_eq!(o.seated_today, 1);
        assert_eq!(o.guests_today, 8);
    }

    #[test]
    fn test_for_date_sorted_by_time() {
        let today = day(2024, 6, 1);
        let list = vec![
            reservation("RES-001", today, "20:00", ReservationStatus::Confirmed),
            reservation("RES-002", today, "18:30", ReservationStatus::Pending),
        ];
        let ids: Vec<String> = for_date(&list, today).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["RES-002", "RES-001"]);
    }

    #[test]
    fn test_calendar_is_monday_first() {
        // June 2024 starts on a Saturday
        let selected = day(2024, 6, 15);
        let list = vec![reservation("RES-001", day(2024, 6, 1), "18:30", ReservationStatus::Confirmed)];
        let cal = calendar(&list, selected, day(2024, 6, 1)).unwrap();
        assert_eq!(cal.title, "June 2024");
        assert_eq!(cal.weeks.len(), 5);
        assert_eq!(cal.weeks[0][4].day, 0);
        assert_eq!(cal.weeks[0][5].day, 1);
        assert_eq!(cal.weeks[0][5].reservations, 1);
        assert!(cal.weeks[0][5].is_today);
        assert!(cal.weeks.iter().flatten().any(|d| d.day == 15 && d.is_selected));
        assert!(cal.weeks.iter().all(|w| w.len() == 7));
    }

    #[test]
    fn test_time_slots() {
        let today = day(2024, 6, 1);
        let list = vec![
            reservation("RES-001", today, "18:30", ReservationStatus::Confirmed),
            reservation("RES-002", today, "19:00", ReservationStatus::Pending),
            reservation("RES-003", today, "20:00", ReservationStatus::Seated),
        ];
        let slots = time_slots(&list, today);
        assert_eq!(slots.len(), 11);
        assert_eq!(slots[0].time, "17:00");
        assert_eq!(slots[10].time, "22:00");
        let occupied: Vec<&str> = slots.iter().filter(|s| s.occupied).map(|s| s.time.as_str()).collect();
        assert_eq!(occupied, vec!["18:30", "20:00"]);
    }
}
