//! Order recording.
//!
//! The HTTP surface never creates orders; they arrive out-of-band (fulfilment
//! tooling, imports). This is the single store entry point for them.

use crate::{entities::order, errors::Result};
use sea_orm::{Set, prelude::*};

/// Records one delivered meal for popularity analytics.
///
/// Neither id is checked against existing rows.
///
/// # Errors
/// Returns an error if the database insert fails.
pub async fn record_order(
    db: &DatabaseConnection,
    subscriber_id: i64,
    menu_item_id: i64,
) -> Result<order::Model> {
    let order = order::ActiveModel {
        subscriber_id: Set(subscriber_id),
        menu_item_id: Set(menu_item_id),
        date: Set(chrono::Utc::now()),
        ..Default::default()
    };
    order.insert(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_record_order_accepts_dangling_references() -> Result<()> {
        let db = setup_test_db().await?;

        let order = record_order(&db, 77, 88).await?;
        assert!(order.id > 0);
        assert_eq!(order.subscriber_id, 77);
        assert_eq!(order.menu_item_id, 88);

        Ok(())
    }
}
