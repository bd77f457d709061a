// Reservation display use cases

use super::KitchenService;
use crate::domain::reservation::{
    self, CalendarMonth, NewReservation, Reservation, ReservationOverview, TimeSlot,
};
use crate::domain::sequence::next_id;
use crate::domain::DomainError;
use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Reservations for one date, ordered by time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationDay {
    pub date: NaiveDate,
    pub reservations: Vec<Reservation>,
}

impl KitchenService {
    pub async fn reservation_overview(&self) -> ReservationOverview {
        let state = self.state.read().await;
        reservation::overview(&state.reservations, self.time_provider.today())
    }

    pub async fn reservations_on(&self, date: Option<NaiveDate>) -> ReservationDay {
        let date = date.unwrap_or_else(|| self.time_provider.today());
        let state = self.state.read().await;
        ReservationDay {
            date,
            reservations: reservation::for_date(&state.reservations, date),
        }
    }

    /// Month grid containing `selected` (defaults to today)
    pub async fn reservation_calendar(&self, selected: Option<NaiveDate>) -> Result<CalendarMonth> {
        let today = self.time_provider.today();
        let state = self.state.read().await;
        Ok(reservation::calendar(
            &state.reservations,
            selected.unwrap_or(today),
            today,
        )?)
    }

    pub async fn reservation_slots(&self, date: Option<NaiveDate>) -> Vec<TimeSlot> {
        let date = date.unwrap_or_else(|| self.time_provider.today());
        let state = self.state.read().await;
        reservation::time_slots(&state.reservations, date)
    }

    pub async fn add_reservation(&self, req: NewReservation) -> Result<Reservation> {
        let mut state = self.state.write().await;
        let id = next_id("RES", state.reservations.iter().map(|r| r.id.as_str()));
        let created = req.into_reservation(id)?;
        info!(
            reservation_id = %created.id,
            date = %created.date,
            guests = created.guest_count,
            "Reservation added"
        );
        state.reservations.push(created.clone());
        Ok(created)
    }

    pub async fn seat_reservation(&self, id: &str) -> Result<Reservation> {
        self.transition_reservation(id, Reservation::seat).await
    }

    pub async fn complete_reservation(&self, id: &str) -> Result<Reservation> {
        self.transition_reservation(id, Reservation::complete).await
    }

    async fn transition_reservation(
        &self,
        id: &str,
        apply: fn(&mut Reservation) -> std::result::Result<(), DomainError>,
    ) -> Result<Reservation> {
        let mut state = self.state.write().await;
        let found = state
            .reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| DomainError::not_found("Reservation", id))?;
        apply(found)?;
        info!(reservation_id = id, status = %found.status, "Reservation status changed");
        Ok(found.clone())
    }
}
