/**
 * Public User Types
 *
 * The user view returned to clients. The credential store's internal record
 * carries the password hash; this type deliberately has no field for it, so
 * a hash can never end up in a response body by accident.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User role tier
///
/// New registrations always get `User`; `Admin` is only assigned by the
/// startup seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Privileged tier
    Admin,
    /// Default tier for registered users
    User,
}

/// User information that is safe to return to clients
///
/// Wire format uses camelCase (`createdAt`), matching what browser clients
/// expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    /// Unique user ID (sequentially assigned)
    pub id: i64,
    /// User's email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Role tier
    pub role: Role,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
