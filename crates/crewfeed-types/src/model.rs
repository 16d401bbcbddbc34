use serde::{Deserialize, Serialize};

use crate::ids::{CommentId, EmployeeId, PostId};

// ==========================================
// 1. Employee (selector population)
// ==========================================

/// One entry in the employee selector.
///
/// The remote directory is the source of truth; an `Employee` lives for a
/// single selector-population cycle and is replaced wholesale on the next
/// fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    /// Display name shown as the option label.
    pub name: String,
}

impl Employee {
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

// ==========================================
// 2. Post (per selection change)
// ==========================================

/// A post authored by an employee.
///
/// Posts are fetched per selector change and superseded (never merged) by the
/// next fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    /// Owning employee.
    pub employee_id: EmployeeId,
    pub title: String,
    pub body: String,
}

// ==========================================
// 3. Employee profile (per post-article build)
// ==========================================

/// Detailed employee record, fetched while building each post article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub id: EmployeeId,
    pub name: String,
    pub company: Company,
}

/// Employer information attached to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
}

// ==========================================
// 4. Comment (per post-render cycle)
// ==========================================

/// A comment attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    /// Owning post.
    pub post_id: PostId,
    /// Comment author display name (heading of the rendered block).
    pub name: String,
    /// Author contact address, rendered as a "From:" line.
    pub email: String,
    pub body: String,
}
