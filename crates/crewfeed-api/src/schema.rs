//! Wire payload shapes for the remote collection API.
//!
//! These mirror what the server actually sends (camelCase keys, extra fields
//! the UI never shows). Translation into domain types lives in `mapper`;
//! nothing outside this crate sees these records.

use serde::Deserialize;

/// A user record as returned by `/users` and `/users/{id}`.
///
/// The full payload also carries address and geo blocks; only the fields the
/// client can ever need are modeled, the rest are ignored on decode.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<CompanyRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CompanyRecord {
    pub name: String,
    pub catch_phrase: String,
    #[serde(default)]
    pub bs: Option<String>,
}

/// A post record as returned by `/posts?userId={id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostRecord {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// A comment record as returned by `/comments?postId={id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentRecord {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_user_payload() {
        // Shape taken from the live API, address/phone blocks included.
        let json = r#"{
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "address": {
                "street": "Victor Plains",
                "suite": "Suite 879",
                "city": "Wisokyburgh",
                "zipcode": "90566-7771",
                "geo": { "lat": "-43.9509", "lng": "-34.4618" }
            },
            "phone": "010-692-6593 x09125",
            "website": "anastasia.net",
            "company": {
                "name": "Deckow-Crist",
                "catchPhrase": "Proactive didactic contingency",
                "bs": "synergize scalable supply-chains"
            }
        }"#;

        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 2);
        assert_eq!(user.name, "Ervin Howell");
        assert_eq!(user.username.as_deref(), Some("Antonette"));
        let company = user.company.unwrap();
        assert_eq!(company.catch_phrase, "Proactive didactic contingency");
    }

    #[test]
    fn decodes_minimal_user_payload() {
        let user: UserRecord = serde_json::from_str(r#"{"id": 1, "name": "Leanne Graham"}"#).unwrap();
        assert_eq!(user.id, 1);
        assert!(user.company.is_none());
        assert!(user.email.is_none());
    }

    #[test]
    fn decodes_post_and_comment_records() {
        let post: PostRecord = serde_json::from_str(
            r#"{"userId": 2, "id": 11, "title": "et ea vero quia", "body": "delectus"}"#,
        )
        .unwrap();
        assert_eq!(post.user_id, 2);
        assert_eq!(post.id, 11);

        let comment: CommentRecord = serde_json::from_str(
            r#"{"postId": 11, "id": 55, "name": "alias", "email": "Hayden@toney.io", "body": "odit"}"#,
        )
        .unwrap();
        assert_eq!(comment.post_id, 11);
        assert_eq!(comment.email, "Hayden@toney.io");
    }
}
