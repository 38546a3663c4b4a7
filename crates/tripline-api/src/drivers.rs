//! Driver endpoints

use crate::client::ApiClient;
use crate::models::Driver;
use crate::Result;

impl ApiClient {
    /// `GET /drivers/GetAllDrivers`
    pub async fn all_drivers(&self) -> Result<Vec<Driver>> {
        self.get_json("drivers/GetAllDrivers").await
    }

    /// `POST /drivers/CreateDriver`
    pub async fn create_driver(&self, driver: &Driver) -> Result<()> {
        self.post_unit("drivers/CreateDriver", driver).await?;
        Ok(())
    }

    /// `PUT /drivers/UpdateDriver/{id}` — keyed by the driver's userID.
    pub async fn update_driver(&self, user_id: i64, driver: &Driver) -> Result<()> {
        self.put_unit(&format!("drivers/UpdateDriver/{user_id}"), driver)
            .await
    }

    /// `DELETE /drivers/DeleteDriver/{id}`
    pub async fn delete_driver(&self, user_id: i64) -> Result<()> {
        self.delete_unit(&format!("drivers/DeleteDriver/{user_id}")).await
    }
}
