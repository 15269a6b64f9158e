//! User identity types.
//!
//! A profile is created once per platform account and never mutated
//! afterward. The role is fixed at creation time.

use serde::{Deserialize, Serialize};

use crate::AccountId;

/// A user profile, keyed by the owning platform account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// The platform account that owns this profile.
    pub account_id: AccountId,

    /// Display name.
    pub name: String,

    /// Unique handle.
    pub username: String,

    /// Contact email, unique across profiles.
    pub email: String,

    /// Role fixed at creation.
    pub role: Role,

    /// Hash of the user's password. Empty when `by_google` is set.
    pub password_hash: String,

    /// Whether the profile was created through Google sign-in.
    pub by_google: bool,

    /// Short biography.
    pub bio: String,

    /// Skills, in the order the user listed them.
    pub skills: Vec<String>,

    /// Certifications, in the order the user listed them.
    pub certifications: Vec<String>,

    /// Education entries, in the order the user listed them.
    pub education: Vec<String>,

    /// Profile picture URL.
    pub picture: String,

    /// Creation timestamp, caller-supplied milliseconds.
    pub created_at: u64,
}

impl User {
    /// Check whether this user may own courses.
    #[must_use]
    pub fn is_mentor(&self) -> bool {
        self.role == Role::Mentor
    }

    /// Check whether this user may enroll in courses.
    #[must_use]
    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }
}

/// Role of a user, set at creation and never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// May create and own courses, modules and lessons.
    Mentor,

    /// May enroll in published courses.
    Student,
}

/// Profile fields submitted to `create_user`.
///
/// The account id comes from the caller identity, not from the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Unique handle.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Role fixed at creation.
    pub role: Role,
    /// Hash of the user's password. Empty when `by_google` is set.
    pub password_hash: String,
    /// Whether the profile was created through Google sign-in.
    pub by_google: bool,
    /// Short biography.
    pub bio: String,
    /// Skills, ordered.
    pub skills: Vec<String>,
    /// Certifications, ordered.
    pub certifications: Vec<String>,
    /// Education entries, ordered.
    pub education: Vec<String>,
    /// Profile picture URL.
    pub picture: String,
    /// Creation timestamp, caller-supplied milliseconds.
    pub created_at: u64,
}

impl NewUser {
    /// Attach the caller's account id, producing the stored record.
    #[must_use]
    pub fn into_user(self, account_id: AccountId) -> User {
        User {
            account_id,
            name: self.name,
            username: self.username,
            email: self.email,
            role: self.role,
            password_hash: self.password_hash,
            by_google: self.by_google,
            bio: self.bio,
            skills: self.skills,
            certifications: self.certifications,
            education: self.education,
            picture: self.picture,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: Role) -> NewUser {
        NewUser {
            name: "Ayoub".into(),
            username: "ayoub".into(),
            email: "ayoub@gmail.com".into(),
            role,
            password_hash: "123".into(),
            by_google: false,
            bio: "I am a software engineer".into(),
            skills: vec!["Rust".into()],
            certifications: vec![],
            education: vec![],
            picture: String::new(),
            created_at: 1,
        }
    }

    #[test]
    fn role_predicates() {
        let mentor = profile(Role::Mentor).into_user(AccountId::new("ayoub").unwrap());
        assert!(mentor.is_mentor());
        assert!(!mentor.is_student());

        let student = profile(Role::Student).into_user(AccountId::new("ahmed").unwrap());
        assert!(student.is_student());
        assert!(!student.is_mentor());
    }

    #[test]
    fn role_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Mentor).unwrap(), "\"mentor\"");
        assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");
    }
}
