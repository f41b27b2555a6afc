use tracing::{info, warn};

use crate::database::ActivityRegistry;
use crate::error::SignupError;
use crate::models::{ActivityCatalog, MessageBody};

pub async fn list_activities(registry: &ActivityRegistry) -> ActivityCatalog {
    registry.snapshot().await
}

pub async fn sign_up(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<MessageBody, SignupError> {
    let activity = registry
        .sign_up(activity_name, email)
        .await
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, "signup rejected: {}", e);
            e
        })?;

    // Capacity is advisory only; the roster may grow past it.
    if activity.is_over_capacity() {
        warn!(
            activity = %activity_name,
            participants = activity.participants.len(),
            max_participants = activity.max_participants,
            "activity is over capacity"
        );
    }

    info!(activity = %activity_name, email = %email, "student signed up");
    Ok(MessageBody::new(format!(
        "Signed up {} for {}",
        email, activity_name
    )))
}

pub async fn unregister(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<MessageBody, SignupError> {
    registry
        .unregister(activity_name, email)
        .await
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, "unregister rejected: {}", e);
            e
        })?;

    info!(activity = %activity_name, email = %email, "student unregistered");
    Ok(MessageBody::new(format!(
        "Unregistered {} from {}",
        email, activity_name
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sign_up_message_names_student_and_activity() {
        let registry = ActivityRegistry::seeded();
        let body = sign_up(&registry, "Chess Club", "new@mergington.edu")
            .await
            .unwrap();
        assert_eq!(body.message, "Signed up new@mergington.edu for Chess Club");
    }

    #[tokio::test]
    async fn unregister_message_names_student_and_activity() {
        let registry = ActivityRegistry::seeded();
        let body = unregister(&registry, "Art Club", "nina@mergington.edu")
            .await
            .unwrap();
        assert_eq!(body.message, "Unregistered nina@mergington.edu from Art Club");

        let art = list_activities(&registry).await;
        assert_eq!(
            art.get("Art Club").unwrap().participants,
            vec!["gabe@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn list_is_stable_without_mutation() {
        let registry = ActivityRegistry::seeded();
        assert_eq!(list_activities(&registry).await, list_activities(&registry).await);
    }
}
