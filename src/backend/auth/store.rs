/**
 * Credential Store
 *
 * In-process user storage. Records live in a Vec for the lifetime of the
 * process and are lost on restart; there is no persistence layer.
 *
 * The store itself is plain data with no locking. Concurrency safety comes
 * from the owner: `AppState` wraps it in `Arc<RwLock<UserStore>>`, so
 * concurrent requests serialize their writes and duplicate-id races cannot
 * happen.
 *
 * The store enforces no email uniqueness; that check belongs to the
 * register handler, which holds the write lock across lookup and insert.
 */

use chrono::{DateTime, Utc};

use crate::shared::user::{Role, UserView};

/// A user record as held by the store
///
/// This is the only place the password hash lives. The type is never
/// serialized; responses go through [`User::to_view`].
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID, assigned sequentially from 1
    pub id: i64,
    /// Email address (lookup key)
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Display name
    pub name: String,
    /// Role tier
    pub role: Role,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Redacted copy safe to put in a response body
    pub fn to_view(&self) -> UserView {
        UserView {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// Fields needed to create a user; id and timestamp are assigned on insert
#[derive(Debug)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: Role,
}

/// In-memory user collection
#[derive(Debug)]
pub struct UserStore {
    users: Vec<User>,
    next_id: i64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Look up a user by email
    ///
    /// If duplicate emails were ever inserted, the earliest record wins.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Look up a user by id
    pub fn find_by_id(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Insert a new record, assigning the next sequential id and stamping
    /// the creation time
    pub fn insert(&mut self, draft: NewUser) -> User {
        let user = User {
            id: self.next_id,
            email: draft.email,
            password_hash: draft.password_hash,
            name: draft.name,
            role: draft.role,
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.users.push(user.clone());
        user
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: "$2b$12$not-a-real-hash".to_string(),
            name: "Test".to_string(),
            role: Role::User,
        }
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let mut store = UserStore::new();
        let a = store.insert(draft("a@example.com"));
        let b = store.insert(draft("b@example.com"));
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn find_by_email_and_id() {
        let mut store = UserStore::new();
        let user = store.insert(draft("a@example.com"));

        assert_eq!(store.find_by_email("a@example.com").unwrap().id, user.id);
        assert_eq!(store.find_by_id(user.id).unwrap().email, "a@example.com");
        assert!(store.find_by_email("missing@example.com").is_none());
        assert!(store.find_by_id(999).is_none());
    }

    #[test]
    fn store_does_not_enforce_email_uniqueness() {
        // Uniqueness is the register handler's job; at this layer a second
        // insert with the same email simply gets a fresh id and the earliest
        // record wins lookups.
        let mut store = UserStore::new();
        let first = store.insert(draft("dup@example.com"));
        let second = store.insert(draft("dup@example.com"));
        assert_ne!(first.id, second.id);
        assert_eq!(store.find_by_email("dup@example.com").unwrap().id, first.id);
    }

    #[test]
    fn to_view_strips_the_hash() {
        let mut store = UserStore::new();
        let user = store.insert(draft("a@example.com"));
        let json = serde_json::to_string(&user.to_view()).unwrap();
        assert!(!json.contains("hash"));
        assert!(!json.to_lowercase().contains("password"));
    }
}
