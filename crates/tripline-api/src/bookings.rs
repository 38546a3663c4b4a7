//! Booking endpoints

use reqwest::StatusCode;

use crate::client::ApiClient;
use crate::models::{Booking, BookingType};
use crate::Result;

impl ApiClient {
    /// `GET /bookings` — full list, admin review screen.
    pub async fn all_bookings(&self) -> Result<Vec<Booking>> {
        self.get_json("bookings").await
    }

    /// `POST /bookings/create`
    pub async fn create_booking(&self, booking: &Booking) -> Result<StatusCode> {
        self.post_unit("bookings/create", booking).await
    }

    /// `PUT /bookings/update/{id}` — the full record is resubmitted.
    pub async fn update_booking(&self, booking_id: i64, booking: &Booking) -> Result<()> {
        self.put_unit(&format!("bookings/update/{booking_id}"), booking)
            .await
    }

    /// `DELETE /bookings/delete/{id}`
    pub async fn delete_booking(&self, booking_id: i64) -> Result<()> {
        self.delete_unit(&format!("bookings/delete/{booking_id}")).await
    }

    /// `GET /bookingtypes/GetAllBookingTypes`
    pub async fn all_booking_types(&self) -> Result<Vec<BookingType>> {
        self.get_json("bookingtypes/GetAllBookingTypes").await
    }
}
