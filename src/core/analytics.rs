//! Analytics business logic.
//!
//! This module computes order popularity from raw `GROUP BY` aggregates over
//! the orders table and derives recommendations and the analytics summary
//! from it. Functions return structured data; the HTTP layer decides how much
//! of it a caller may see.

use crate::{
    core::{menu, subscription},
    entities::{menu_item, subscriber},
    errors::Result,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult, Statement};
use serde::Serialize;
use tracing::{debug, instrument};

/// Number of items returned by [`recommendations`]
pub const RECOMMENDATION_LIMIT: u64 = 5;
/// Number of items in the analytics top list
pub const TOP_ITEMS_LIMIT: u64 = 6;
/// Number of subscribers included in an elevated analytics summary
pub const RECENT_SUBSCRIBERS_LIMIT: u64 = 10;

/// Raw aggregate row: how many orders reference a menu item.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct OrderCount {
    /// Referenced menu item id (may no longer exist)
    pub menu_item_id: i64,
    /// Number of orders
    pub count: i64,
}

/// A resolved entry of the popularity list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopItem {
    /// Menu item name
    pub name: String,
    /// Number of orders
    pub count: i64,
}

/// Subscriber totals shown on the analytics summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberStats {
    /// All subscribers
    pub total: u64,
    /// Subscribers with `active = true`
    pub active: u64,
}

/// Everything the analytics endpoint can report.
#[derive(Debug, Clone)]
pub struct AnalyticsSummary {
    /// Subscriber totals
    pub subscribers: SubscriberStats,
    /// Most ordered items, most popular first
    pub top_items: Vec<TopItem>,
    /// Latest sign-ups; only filled for elevated callers
    pub recent_subscribers: Option<Vec<subscriber::Model>>,
}

/// Counts orders per menu item, most ordered first, at most `limit` rows.
///
/// Ties are broken by ascending menu item id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn order_counts(db: &DatabaseConnection, limit: u64) -> Result<Vec<OrderCount>> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let statement = Statement::from_sql_and_values(
        db.get_database_backend(),
        "SELECT menu_item_id, COUNT(*) AS count FROM orders \
         GROUP BY menu_item_id ORDER BY count DESC, menu_item_id ASC LIMIT ?",
        [limit.into()],
    );

    OrderCount::find_by_statement(statement)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Returns up to `limit` most ordered items as `{name, count}` pairs.
///
/// Aggregate rows whose menu item has been deleted are skipped.
///
/// # Errors
/// Returns an error if a database query fails.
pub async fn top_items(db: &DatabaseConnection, limit: u64) -> Result<Vec<TopItem>> {
    let counts = order_counts(db, limit).await?;
    let ids: Vec<i64> = counts.iter().map(|c| c.menu_item_id).collect();
    let items = menu::get_menu_items_by_ids(db, &ids).await?;

    Ok(counts
        .into_iter()
        .filter_map(|c| {
            items
                .iter()
                .find(|item| item.id == c.menu_item_id)
                .map(|item| TopItem {
                    name: item.name.clone(),
                    count: c.count,
                })
        })
        .collect())
}

/// Returns the most ordered menu items, or the cheapest ones when nothing was ordered yet.
///
/// # Errors
/// Returns an error if a database query fails.
#[instrument(skip(db))]
pub async fn recommendations(db: &DatabaseConnection) -> Result<Vec<menu_item::Model>> {
    let counts = order_counts(db, RECOMMENDATION_LIMIT).await?;
    if counts.is_empty() {
        debug!("No orders recorded, recommending cheapest items");
        return menu::cheapest_menu_items(db, RECOMMENDATION_LIMIT).await;
    }

    let ids: Vec<i64> = counts.iter().map(|c| c.menu_item_id).collect();
    menu::get_menu_items_by_ids(db, &ids).await
}

/// Reads total and active subscriber counts.
///
/// # Errors
/// Returns an error if a database query fails.
pub async fn subscriber_stats(db: &DatabaseConnection) -> Result<SubscriberStats> {
    Ok(SubscriberStats {
        total: subscription::count_subscribers(db).await?,
        active: subscription::count_active_subscribers(db).await?,
    })
}

/// Builds the analytics summary; recent subscribers are included only when `elevated`.
///
/// # Errors
/// Returns an error if a database query fails.
#[instrument(skip(db))]
pub async fn summarize(db: &DatabaseConnection, elevated: bool) -> Result<AnalyticsSummary> {
    let subscribers = subscriber_stats(db).await?;
    let top_items = top_items(db, TOP_ITEMS_LIMIT).await?;

    let recent_subscribers = if elevated {
        Some(subscription::recent_subscribers(db, RECENT_SUBSCRIBERS_LIMIT).await?)
    } else {
        None
    };

    Ok(AnalyticsSummary {
        subscribers,
        top_items,
        recent_subscribers,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_order_counts_groups_and_sorts() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_orders(&db, 3, 2).await?;
        create_test_orders(&db, 1, 5).await?;
        create_test_orders(&db, 2, 2).await?;

        let counts: Vec<(i64, i64)> = order_counts(&db, 10)
            .await?
            .into_iter()
            .map(|c| (c.menu_item_id, c.count))
            .collect();
        assert_eq!(counts, vec![(1, 5), (2, 2), (3, 2)]);

        // The limit is bound as a query parameter
        let top = order_counts(&db, 1).await?;
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].menu_item_id, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_recommendations_fall_back_to_cheapest() -> Result<()> {
        let db = setup_test_db().await?;
        for price in [800.0, 150.0, 600.0, 50.0, 400.0, 250.0, 1000.0] {
            create_test_menu_item(&db, &format!("Item {price}"), price, "weekday-lunch").await?;
        }

        let items = recommendations(&db).await?;
        let prices: Vec<f64> = items.iter().map(|item| item.price).collect();
        assert_eq!(prices, vec![50.0, 150.0, 250.0, 400.0, 600.0]);

        Ok(())
    }

    #[tokio::test]
    async fn test_recommendations_follow_popularity() -> Result<()> {
        let db = setup_test_db().await?;
        let cheap = create_test_menu_item(&db, "Cheap", 10.0, "weekday-lunch").await?;
        let popular = create_test_menu_item(&db, "Popular", 2000.0, "weekday-lunch").await?;
        let runner_up = create_test_menu_item(&db, "Runner up", 1500.0, "weekend-lunch").await?;

        create_test_orders(&db, runner_up.id, 2).await?;
        create_test_orders(&db, popular.id, 4).await?;

        let items = recommendations(&db).await?;
        let ids: Vec<i64> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![popular.id, runner_up.id]);
        assert!(!ids.contains(&cheap.id));

        Ok(())
    }

    #[tokio::test]
    async fn test_top_items_skip_deleted_menu_items() -> Result<()> {
        let db = setup_test_db().await?;
        let kept = create_test_menu_item(&db, "Kept", 100.0, "weekday-lunch").await?;
        let gone = create_test_menu_item(&db, "Gone", 100.0, "weekday-lunch").await?;
        create_test_orders(&db, gone.id, 3).await?;
        create_test_orders(&db, kept.id, 1).await?;
        menu::delete_menu_item(&db, gone.id).await?;

        let top = top_items(&db, TOP_ITEMS_LIMIT).await?;
        assert_eq!(
            top,
            vec![TopItem {
                name: "Kept".to_string(),
                count: 1
            }]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_top_items_limited_to_six() -> Result<()> {
        let db = setup_test_db().await?;
        for i in 0..8 {
            let item = create_test_menu_item(&db, &format!("Item {i}"), 100.0, "weekday-lunch")
                .await?;
            create_test_orders(&db, item.id, i + 1).await?;
        }

        let top = top_items(&db, TOP_ITEMS_LIMIT).await?;
        assert_eq!(top.len(), 6);
        assert_eq!(top[0].name, "Item 7");
        assert_eq!(top[0].count, 8);
        assert_eq!(top[5].name, "Item 2");

        Ok(())
    }

    #[tokio::test]
    async fn test_summarize_respects_elevation() -> Result<()> {
        let db = setup_test_db().await?;
        for i in 0..3 {
            create_test_subscriber(&db, &format!("Subscriber {i}")).await?;
        }

        let public = summarize(&db, false).await?;
        assert_eq!(
            public.subscribers,
            SubscriberStats {
                total: 3,
                active: 3
            }
        );
        assert!(public.top_items.is_empty());
        assert!(public.recent_subscribers.is_none());

        let elevated = summarize(&db, true).await?;
        let recent = elevated.recent_subscribers.unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].name, "Subscriber 2");

        Ok(())
    }
}
