//! Translation from wire records to domain types.

use crewfeed_types::{
    Comment, CommentId, Company, Employee, EmployeeId, EmployeeProfile, Post, PostId,
};

use crate::error::{Error, Result};
use crate::schema::{CommentRecord, PostRecord, UserRecord};

/// Map a user record to the selector-level employee.
///
/// Only id and display name survive; the rest of the payload is profile
/// material and is fetched separately when a post card needs it.
pub(crate) fn employee_from_user(record: UserRecord) -> Employee {
    Employee {
        id: EmployeeId::new(record.id),
        name: record.name,
    }
}

/// Map a user record to the author profile shown on post cards.
///
/// The company block is required here: a profile without one cannot render
/// the author line, so its absence is treated as a malformed body.
pub(crate) fn profile_from_user(record: UserRecord) -> Result<EmployeeProfile> {
    let company = record.company.ok_or_else(|| {
        Error::Decode(format!("user {} has no company block", record.id))
    })?;
    Ok(EmployeeProfile {
        id: EmployeeId::new(record.id),
        name: record.name,
        company: Company {
            name: company.name,
            catch_phrase: company.catch_phrase,
        },
    })
}

pub(crate) fn post_from_record(record: PostRecord) -> Post {
    Post {
        id: PostId::new(record.id),
        employee_id: EmployeeId::new(record.user_id),
        title: record.title,
        body: record.body,
    }
}

pub(crate) fn comment_from_record(record: CommentRecord) -> Comment {
    Comment {
        id: CommentId::new(record.id),
        post_id: PostId::new(record.post_id),
        name: record.name,
        email: record.email,
        body: record.body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CompanyRecord;

    fn user(company: Option<CompanyRecord>) -> UserRecord {
        UserRecord {
            id: 7,
            name: "Kurtis Weissnat".to_string(),
            username: Some("Elwyn.Skiles".to_string()),
            email: Some("Telly.Hoeger@billy.biz".to_string()),
            company,
        }
    }

    #[test]
    fn profile_requires_company() {
        let err = profile_from_user(user(None)).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn profile_carries_company_fields() {
        let record = user(Some(CompanyRecord {
            name: "Johns Group".to_string(),
            catch_phrase: "Configurable multimedia task-force".to_string(),
            bs: None,
        }));
        let profile = profile_from_user(record).unwrap();
        assert_eq!(profile.id, EmployeeId::new(7));
        assert_eq!(profile.company.name, "Johns Group");
        assert_eq!(profile.company.catch_phrase, "Configurable multimedia task-force");
    }

    #[test]
    fn employee_keeps_only_selector_fields() {
        let employee = employee_from_user(user(None));
        assert_eq!(employee.id, EmployeeId::new(7));
        assert_eq!(employee.name, "Kurtis Weissnat");
    }
}
