//! Reservations and front-desk operations

use super::query;
use crate::sdk::client::ApiClient;
use crate::sdk::errors::Result;
use crate::sdk::models::{CheckInRequest, CheckOutRequest, Reservation, ReservationStatus, iso_date};
use crate::sdk::types::Envelope;
use chrono::NaiveDate;
use serde_json::{Value, json};

/// `/reservations` and `/frontdesk` sub-client
#[derive(Debug, Clone, Copy)]
pub struct Reservations<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Reservations<'_> {
    pub async fn get_all(&self) -> Result<Vec<Reservation>> {
        Envelope::from_value(self.api.get("/reservations").await?)
            .into_data_or_default("failed to load reservations")
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Reservation> {
        Envelope::from_value(self.api.get(&format!("/reservations/{}", id)).await?)
            .into_data("failed to load reservation")
    }

    pub async fn create(&self, reservation: &Reservation) -> Result<Reservation> {
        Envelope::from_value(self.api.post("/reservations", reservation).await?)
            .into_data("failed to create reservation")
    }

    pub async fn update(&self, id: i64, reservation: &Reservation) -> Result<Reservation> {
        Envelope::from_value(
            self.api
                .put(&format!("/reservations/{}", id), reservation)
                .await?,
        )
        .into_data("failed to update reservation")
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        Envelope::from_value(self.api.delete(&format!("/reservations/{}", id)).await?)
            .into_result("failed to delete reservation")
            .map(|_| ())
    }

    pub async fn get_by_status(&self, status: ReservationStatus) -> Result<Vec<Reservation>> {
        let path = format!("/reservations/status/{}", status.as_str());
        Envelope::from_value(self.api.get(&path).await?)
            .into_data_or_default("failed to load reservations by status")
    }

    /// Reservations whose check-in date falls in `[start, end]`
    pub async fn get_by_check_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Reservation>> {
        let path = format!(
            "/reservations/checkin-range{}",
            query([("start", iso_date(start)), ("end", iso_date(end))])
        );
        Envelope::from_value(self.api.get(&path).await?)
            .into_data_or_default("failed to load reservations by check-in date")
    }

    pub async fn get_by_guest(&self, guest_id: i64) -> Result<Vec<Reservation>> {
        let path = format!("/reservations/guest/{}", guest_id);
        Envelope::from_value(self.api.get(&path).await?)
            .into_data_or_default("failed to load guest reservations")
    }

    /// Cancel; the returned object describes any refund
    pub async fn cancel(&self, id: i64, reason: Option<&str>) -> Result<Value> {
        let body = match reason {
            Some(reason) => json!({ "reason": reason }),
            None => json!({}),
        };
        Envelope::from_value(
            self.api
                .post(&format!("/reservations/{}/cancel", id), &body)
                .await?,
        )
        .into_data_or_default("failed to cancel reservation")
    }

    /// Front-desk check-in
    pub async fn check_in(&self, id: i64, request: Option<&CheckInRequest>) -> Result<Value> {
        let default = CheckInRequest::default();
        let path = format!("/frontdesk/checkin/{}", id);
        Envelope::from_value(self.api.post(&path, request.unwrap_or(&default)).await?)
            .into_data_or_default("check-in failed")
    }

    /// Front-desk check-out; the payload is the final bill
    pub async fn check_out(&self, id: i64, request: Option<&CheckOutRequest>) -> Result<Value> {
        let default = CheckOutRequest::default();
        let path = format!("/frontdesk/checkout/{}", id);
        Envelope::from_value(self.api.post(&path, request.unwrap_or(&default)).await?)
            .into_data_or_default("check-out failed")
    }
}
