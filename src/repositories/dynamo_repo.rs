use anyhow::Context;
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use crate::models::reservation::Reservation;
use crate::repositories::ReservationStore;

pub struct DynamoConnectionRepo {
    dynamo_connection: Client,
    reservations_table: String,
}

impl DynamoConnectionRepo {
    pub fn new(
        dynamo_connection: Client,
        reservations_table: String,
    ) -> Self {
        Self {
            dynamo_connection,
            reservations_table,
        }
    }
}

#[async_trait]
impl ReservationStore for DynamoConnectionRepo {
    async fn put_reservation(&self, reservation: &Reservation) -> anyhow::Result<()> {
        self.dynamo_connection
            .put_item()
            .table_name(&self.reservations_table)
            .item(
                "parent_email",
                AttributeValue::S(reservation.parent_email.clone()),
            )
            .item(
                "reservation_timestamp",
                AttributeValue::S(reservation.reservation_timestamp.clone()),
            )
            .item("date", AttributeValue::S(reservation.date.clone()))
            .item("child_name", AttributeValue::S(reservation.child_name.clone()))
            .item("parent_name", AttributeValue::S(reservation.parent_name.clone()))
            .send()
            .await
            .with_context(|| {
                format!(
                    "Failed to store reservation into table: {}",
                    self.reservations_table
                )
            })?;

        Ok(())
    }
}
