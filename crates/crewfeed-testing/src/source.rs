//! Scriptable in-memory feed source.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use async_trait::async_trait;
use crewfeed_api::{Error, FeedSource, Result};
use crewfeed_types::{Comment, Employee, EmployeeId, EmployeeProfile, Post, PostId};

use crate::fixtures;

/// The four feed operations, addressable for failure scripting and call
/// counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Operation {
    ListEmployees,
    PostsForEmployee,
    EmployeeProfile,
    CommentsForPost,
}

/// In-memory [`FeedSource`] for tests.
///
/// Lookup behavior mirrors the remote API: filtered collections answer an
/// unknown id with an empty list, the single-resource profile endpoint
/// answers with a 404. A scripted failure makes every call to that
/// operation return a 500. Every call is counted whether it fails or not.
#[derive(Debug, Default)]
pub struct StaticFeedSource {
    employees: Vec<Employee>,
    posts: BTreeMap<EmployeeId, Vec<Post>>,
    profiles: BTreeMap<EmployeeId, EmployeeProfile>,
    comments: BTreeMap<PostId, Vec<Comment>>,
    failing: BTreeSet<Operation>,
    calls: Mutex<BTreeMap<Operation, usize>>,
}

impl StaticFeedSource {
    /// Empty source: every collection empty, every profile a 404.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fully wired with the canonical fixture data set.
    pub fn populated() -> Self {
        let mut source = Self::new().with_employees(fixtures::sample_employees());
        for profile in fixtures::sample_profiles() {
            let employee = profile.id;
            source = source
                .with_posts(employee, fixtures::sample_posts(employee))
                .with_profile(profile);
        }
        let posts: Vec<PostId> = source.posts.values().flatten().map(|p| p.id).collect();
        for post in posts {
            source = source.with_comments(post, fixtures::sample_comments(post));
        }
        source
    }

    pub fn with_employees(mut self, employees: Vec<Employee>) -> Self {
        self.employees = employees;
        self
    }

    pub fn with_posts(mut self, employee: EmployeeId, posts: Vec<Post>) -> Self {
        self.posts.insert(employee, posts);
        self
    }

    pub fn with_profile(mut self, profile: EmployeeProfile) -> Self {
        self.profiles.insert(profile.id, profile);
        self
    }

    pub fn with_comments(mut self, post: PostId, comments: Vec<Comment>) -> Self {
        self.comments.insert(post, comments);
        self
    }

    /// Script one operation to fail every call with a 500.
    pub fn failing(mut self, operation: Operation) -> Self {
        self.failing.insert(operation);
        self
    }

    /// How many times one operation has been called.
    pub fn calls(&self, operation: Operation) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(&operation)
            .copied()
            .unwrap_or(0)
    }

    /// Calls across all four operations.
    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    fn record(&self, operation: Operation) -> Result<()> {
        *self.calls.lock().unwrap().entry(operation).or_insert(0) += 1;
        if self.failing.contains(&operation) {
            return Err(Error::Status(500));
        }
        Ok(())
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.record(Operation::ListEmployees)?;
        Ok(self.employees.clone())
    }

    async fn posts_for_employee(&self, employee: EmployeeId) -> Result<Vec<Post>> {
        self.record(Operation::PostsForEmployee)?;
        Ok(self.posts.get(&employee).cloned().unwrap_or_default())
    }

    async fn employee_profile(&self, employee: EmployeeId) -> Result<EmployeeProfile> {
        self.record(Operation::EmployeeProfile)?;
        self.profiles
            .get(&employee)
            .cloned()
            .ok_or(Error::Status(404))
    }

    async fn comments_for_post(&self, post: PostId) -> Result<Vec<Comment>> {
        self.record(Operation::CommentsForPost)?;
        Ok(self.comments.get(&post).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_calls_per_operation() {
        let source = StaticFeedSource::populated();
        source.list_employees().await.unwrap();
        source.posts_for_employee(EmployeeId::new(1)).await.unwrap();
        source.posts_for_employee(EmployeeId::new(2)).await.unwrap();

        assert_eq!(source.calls(Operation::ListEmployees), 1);
        assert_eq!(source.calls(Operation::PostsForEmployee), 2);
        assert_eq!(source.calls(Operation::CommentsForPost), 0);
        assert_eq!(source.total_calls(), 3);
    }

    #[tokio::test]
    async fn scripted_failure_still_counts() {
        let source = StaticFeedSource::populated().failing(Operation::EmployeeProfile);
        let err = source.employee_profile(EmployeeId::new(1)).await.unwrap_err();
        assert!(matches!(err, Error::Status(500)));
        assert_eq!(source.calls(Operation::EmployeeProfile), 1);
    }

    #[tokio::test]
    async fn unknown_ids_mirror_the_remote_api() {
        let source = StaticFeedSource::populated();
        assert!(source.posts_for_employee(EmployeeId::new(99)).await.unwrap().is_empty());
        assert!(source.comments_for_post(PostId::new(999)).await.unwrap().is_empty());
        let err = source.employee_profile(EmployeeId::new(99)).await.unwrap_err();
        assert!(matches!(err, Error::Status(404)));
    }
}
