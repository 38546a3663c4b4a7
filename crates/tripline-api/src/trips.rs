//! Trip endpoints

use crate::client::ApiClient;
use crate::models::{NewTrip, Trip};
use crate::Result;

impl ApiClient {
    /// `GET /trips/GetAllTrips` — the only read; all searching and
    /// filtering happens client-side on this list.
    pub async fn all_trips(&self) -> Result<Vec<Trip>> {
        self.get_json("trips/GetAllTrips").await
    }

    /// `POST /trips/CreateTrip`
    pub async fn create_trip(&self, trip: &NewTrip) -> Result<()> {
        self.post_unit("trips/CreateTrip", trip).await?;
        Ok(())
    }

    /// `PUT /trips/UpdateTrip/{id}`
    pub async fn update_trip(&self, trip_id: i64, trip: &NewTrip) -> Result<()> {
        self.put_unit(&format!("trips/UpdateTrip/{trip_id}"), trip).await
    }

    /// `DELETE /trips/DeleteTrip/{id}`
    pub async fn delete_trip(&self, trip_id: i64) -> Result<()> {
        self.delete_unit(&format!("trips/DeleteTrip/{trip_id}")).await
    }
}
