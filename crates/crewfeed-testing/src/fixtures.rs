//! Canonical sample data.
//!
//! Shaped after the public API's seed data: employee N owns the post block
//! starting at 10(N-1)+1, post N carries the comment block starting at
//! 5(N-1)+1. Tests that need different data build it inline instead of
//! bending these.

use crewfeed_types::{
    Comment, CommentId, Company, Employee, EmployeeId, EmployeeProfile, Post, PostId,
};

pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee::new(EmployeeId::new(1), "Leanne Graham"),
        Employee::new(EmployeeId::new(2), "Ervin Howell"),
        Employee::new(EmployeeId::new(3), "Clementine Bauch"),
    ]
}

pub fn sample_profiles() -> Vec<EmployeeProfile> {
    vec![
        EmployeeProfile {
            id: EmployeeId::new(1),
            name: "Leanne Graham".to_string(),
            company: Company {
                name: "Romaguera-Crona".to_string(),
                catch_phrase: "Multi-layered client-server neural-net".to_string(),
            },
        },
        EmployeeProfile {
            id: EmployeeId::new(2),
            name: "Ervin Howell".to_string(),
            company: Company {
                name: "Deckow-Crist".to_string(),
                catch_phrase: "Proactive didactic contingency".to_string(),
            },
        },
        EmployeeProfile {
            id: EmployeeId::new(3),
            name: "Clementine Bauch".to_string(),
            company: Company {
                name: "Romaguera-Jacobson".to_string(),
                catch_phrase: "Face to face bifurcated interface".to_string(),
            },
        },
    ]
}

/// Two posts per known employee, empty for anyone else.
pub fn sample_posts(employee: EmployeeId) -> Vec<Post> {
    let base = match employee.as_u64() {
        1..=3 => (employee.as_u64() - 1) * 10,
        _ => return Vec::new(),
    };
    vec![
        Post {
            id: PostId::new(base + 1),
            employee_id: employee,
            title: "sunt aut facere repellat".to_string(),
            body: "quia et suscipit recusandae consequuntur".to_string(),
        },
        Post {
            id: PostId::new(base + 2),
            employee_id: employee,
            title: "qui est esse".to_string(),
            body: "est rerum tempore vitae sequi sint".to_string(),
        },
    ]
}

/// Two comments for each known post, empty for anyone else.
pub fn sample_comments(post: PostId) -> Vec<Comment> {
    let base = match post.as_u64() {
        1..=30 => (post.as_u64() - 1) * 5,
        _ => return Vec::new(),
    };
    vec![
        Comment {
            id: CommentId::new(base + 1),
            post_id: post,
            name: "id labore ex et quam laborum".to_string(),
            email: "Eliseo@gardner.biz".to_string(),
            body: "laudantium enim quasi est quidem".to_string(),
        },
        Comment {
            id: CommentId::new(base + 2),
            post_id: post,
            name: "quo vero reiciendis velit similique earum".to_string(),
            email: "Jayne_Kuhic@sydney.com".to_string(),
            body: "est natus enim nihil est dolore".to_string(),
        },
    ]
}
