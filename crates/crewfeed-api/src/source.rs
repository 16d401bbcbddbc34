use async_trait::async_trait;
use crewfeed_types::{Comment, Employee, EmployeeId, EmployeeProfile, Post, PostId};

use crate::Result;

/// Read access to the remote post board.
///
/// Four independent read operations, one network round trip each. Every
/// operation surfaces failure as a typed [`crate::Error`]; degrading a failure
/// to "nothing to render" is the caller's decision, not this layer's.
///
/// Implementations: [`crate::HttpFeedSource`] in production, the static
/// source in `crewfeed-testing` for tests.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch every employee in the directory (selector population).
    async fn list_employees(&self) -> Result<Vec<Employee>>;

    /// Fetch all posts owned by one employee.
    async fn posts_for_employee(&self, employee: EmployeeId) -> Result<Vec<Post>>;

    /// Fetch one employee's detailed profile (name + employer).
    async fn employee_profile(&self, employee: EmployeeId) -> Result<EmployeeProfile>;

    /// Fetch all comments attached to one post.
    async fn comments_for_post(&self, post: PostId) -> Result<Vec<Comment>>;
}
