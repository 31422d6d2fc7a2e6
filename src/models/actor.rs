//! Actor model for explicit authorization checks.
//!
//! The authenticated actor is threaded into each operation as an explicit
//! parameter rather than read from ambient session state. Only the original
//! giver of a feedback record, or an administrator, may edit or delete it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The role an actor holds within the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    /// A regular collaborator.
    Collaborator,
    /// A people manager.
    Manager,
    /// An administrator; may edit or delete any feedback record.
    Administrator,
}

/// An actor who performs operations against the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Unique identifier for the actor.
    pub id: Uuid,
    /// The actor's display name.
    pub name: String,
    /// The actor's role.
    pub role: ActorRole,
}

impl Actor {
    /// Returns true if the actor holds the administrative role.
    pub fn is_admin(&self) -> bool {
        self.role == ActorRole::Administrator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_actor(role: ActorRole) -> Actor {
        Actor {
            id: Uuid::new_v4(),
            name: "Marina Costa".to_string(),
            role,
        }
    }

    #[test]
    fn test_is_admin_for_administrator() {
        assert!(create_test_actor(ActorRole::Administrator).is_admin());
    }

    #[test]
    fn test_is_admin_false_for_other_roles() {
        assert!(!create_test_actor(ActorRole::Collaborator).is_admin());
        assert!(!create_test_actor(ActorRole::Manager).is_admin());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&ActorRole::Administrator).unwrap(),
            "\"administrator\""
        );
        assert_eq!(
            serde_json::to_string(&ActorRole::Collaborator).unwrap(),
            "\"collaborator\""
        );
    }
}
