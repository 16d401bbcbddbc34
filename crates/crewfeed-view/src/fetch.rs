//! Absent-degrading fetch seam.
//!
//! The api layer returns typed errors; views only want "data or nothing".
//! Each wrapper here takes the possibly-missing identifier its endpoint
//! needs: a missing id short-circuits to `None` without touching the source
//! (and without logging), a failed request is logged once with the operation
//! and id, then degraded to `None`. Callers treat `None` as "skip whatever
//! depended on this".

use crewfeed_api::FeedSource;
use crewfeed_types::{Comment, Employee, EmployeeId, EmployeeProfile, Post, PostId};
use tracing::warn;

/// Employee directory for the selector.
pub async fn employees(source: &dyn FeedSource) -> Option<Vec<Employee>> {
    match source.list_employees().await {
        Ok(employees) => Some(employees),
        Err(err) => {
            warn!("employee list fetch failed: {}", err);
            None
        }
    }
}

/// Posts owned by one employee.
pub async fn posts_for_employee(
    source: &dyn FeedSource,
    employee: Option<EmployeeId>,
) -> Option<Vec<Post>> {
    let employee = employee?;
    match source.posts_for_employee(employee).await {
        Ok(posts) => Some(posts),
        Err(err) => {
            warn!("posts fetch failed for employee {}: {}", employee, err);
            None
        }
    }
}

/// Detailed profile for a post's author.
pub async fn employee_profile(
    source: &dyn FeedSource,
    employee: Option<EmployeeId>,
) -> Option<EmployeeProfile> {
    let employee = employee?;
    match source.employee_profile(employee).await {
        Ok(profile) => Some(profile),
        Err(err) => {
            warn!("profile fetch failed for employee {}: {}", employee, err);
            None
        }
    }
}

/// Comments attached to one post.
pub async fn comments_for_post(
    source: &dyn FeedSource,
    post: Option<PostId>,
) -> Option<Vec<Comment>> {
    let post = post?;
    match source.comments_for_post(post).await {
        Ok(comments) => Some(comments),
        Err(err) => {
            warn!("comments fetch failed for post {}: {}", post, err);
            None
        }
    }
}
