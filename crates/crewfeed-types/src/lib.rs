pub mod ids;
pub mod model;

pub use ids::{CommentId, EmployeeId, PostId};
pub use model::{Comment, Company, Employee, EmployeeProfile, Post};
