//! Subscription business logic - sign-ups and subscriber queries.
//!
//! A sign-up is validated, then stored with a thirty-day window starting now.
//! Validation happens before any database access, so a rejected payload never
//! produces a row.

use crate::{
    entities::{Subscriber, subscriber},
    errors::{Error, Result},
};
use chrono::{TimeDelta, Utc};
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect, Select, Set, prelude::*};
use serde::Deserialize;
use tracing::instrument;

/// Length of a subscription window in days
pub const SUBSCRIPTION_DAYS: i64 = 30;

/// Sign-up payload. Missing fields deserialize as empty strings and are
/// reported by [`validate_subscription`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscribeInput {
    /// Subscriber's name
    #[serde(default)]
    pub name: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
    /// Plan name
    #[serde(default)]
    pub plan: String,
}

/// Checks that name, email and plan are present and that the email looks like an address.
///
/// # Errors
/// Returns [`Error::Validation`] describing the first failing field.
pub fn validate_subscription(input: &SubscribeInput) -> Result<()> {
    if input.name.trim().is_empty() {
        return Err(Error::validation("name is required"));
    }
    if input.email.trim().is_empty() {
        return Err(Error::validation("email is required"));
    }
    if !is_valid_email(&input.email) {
        return Err(Error::validation("email must be a valid email address"));
    }
    if input.plan.trim().is_empty() {
        return Err(Error::validation("plan is required"));
    }
    Ok(())
}

/// Shape check for email addresses: `local@domain.tld`, no whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }

    domain.split('.').all(|label| !label.is_empty())
}

/// Validates and stores a new subscriber.
///
/// The subscription starts now (UTC), ends [`SUBSCRIPTION_DAYS`] later and is active.
///
/// # Errors
/// Returns [`Error::Validation`] for a bad payload, or a database error if the insert fails.
#[instrument(skip(db))]
pub async fn create_subscriber(
    db: &DatabaseConnection,
    input: SubscribeInput,
) -> Result<subscriber::Model> {
    validate_subscription(&input)?;

    let now = Utc::now();
    let subscriber = subscriber::ActiveModel {
        name: Set(input.name),
        email: Set(input.email),
        plan: Set(input.plan),
        start_date: Set(now),
        end_date: Set(now + TimeDelta::days(SUBSCRIPTION_DAYS)),
        active: Set(true),
        created_at: Set(now),
        ..Default::default()
    };
    subscriber.insert(db).await.map_err(Into::into)
}

/// Lists every subscriber, most recent sign-up first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_subscribers(db: &DatabaseConnection) -> Result<Vec<subscriber::Model>> {
    newest_first().all(db).await.map_err(Into::into)
}

/// Returns the `limit` most recent sign-ups.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn recent_subscribers(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<subscriber::Model>> {
    newest_first().limit(limit).all(db).await.map_err(Into::into)
}

/// Counts all subscribers.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn count_subscribers(db: &DatabaseConnection) -> Result<u64> {
    Subscriber::find().count(db).await.map_err(Into::into)
}

/// Counts subscribers whose `active` flag is set.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn count_active_subscribers(db: &DatabaseConnection) -> Result<u64> {
    Subscriber::find()
        .filter(subscriber::Column::Active.eq(true))
        .count(db)
        .await
        .map_err(Into::into)
}

fn newest_first() -> Select<Subscriber> {
    Subscriber::find()
        .order_by_desc(subscriber::Column::CreatedAt)
        .order_by_desc(subscriber::Column::Id)
}
