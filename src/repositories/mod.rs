use async_trait::async_trait;

use crate::models::reservation::Reservation;

pub mod dynamo_repo;

/// Write side of the reservation table. The handler only ever inserts; there
/// is no read, update or delete path.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    async fn put_reservation(&self, reservation: &Reservation) -> anyhow::Result<()>;
}
