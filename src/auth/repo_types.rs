use sqlx::FromRow;

/// Farmer account row.
#[derive(Debug, Clone, FromRow)]
pub struct Farmer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub village: String,
    pub password_hash: String, // Argon2 PHC string, stored in the `password` column
    pub created_at: i64,       // unix seconds
}

/// Validated signup data ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewFarmer<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub village: &'a str,
    pub password_hash: &'a str,
}
