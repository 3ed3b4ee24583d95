use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Credential {
    pub username: String,
    pub name: String,
    pub phone: i64,
    #[serde(skip_serializing)]
    pub password: String,
}

impl Credential {
    /// Exact-match lookup on username and password. Passwords are stored
    /// and compared in plaintext; see DESIGN.md for why that is preserved.
    pub async fn find_by_login(
        db: &SqlitePool,
        username: &str,
        password: &str,
    ) -> anyhow::Result<Option<Credential>> {
        let row = sqlx::query_as::<_, Credential>(
            r#"
            SELECT username, name, phone, password
            FROM credentials
            WHERE username = ?1 AND password = ?2
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }
}
