//! Vehicle endpoints

use crate::client::ApiClient;
use crate::models::{NewVehicle, Vehicle};
use crate::Result;

impl ApiClient {
    /// `GET /vehicles/GetAllVehicles`
    pub async fn all_vehicles(&self) -> Result<Vec<Vehicle>> {
        self.get_json("vehicles/GetAllVehicles").await
    }

    /// `POST /vehicles/CreateVehicle`
    pub async fn create_vehicle(&self, vehicle: &NewVehicle) -> Result<()> {
        self.post_unit("vehicles/CreateVehicle", vehicle).await?;
        Ok(())
    }

    /// `PUT /vehicles/UpdateVehicle/{id}`
    pub async fn update_vehicle(&self, vehicle_id: i64, vehicle: &NewVehicle) -> Result<()> {
        self.put_unit(&format!("vehicles/UpdateVehicle/{vehicle_id}"), vehicle)
            .await
    }

    /// `DELETE /vehicles/DeleteVehicle/{id}`
    pub async fn delete_vehicle(&self, vehicle_id: i64) -> Result<()> {
        self.delete_unit(&format!("vehicles/DeleteVehicle/{vehicle_id}"))
            .await
    }
}
