use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, params};

use crate::models::profile::Profile;

use super::Database;

impl Database {
    pub fn get_profile(&self, user_id: &str) -> Result<Option<Profile>> {
        let row = self
            .conn
            .query_row(
                "SELECT user_id, name, image, updated_at FROM profiles WHERE user_id = ?1",
                params![user_id],
                |row| {
                    Ok(ProfileRow {
                        user_id: row.get(0)?,
                        name: row.get(1)?,
                        image: row.get(2)?,
                        updated_at: row.get(3)?,
                    })
                },
            )
            .optional()?;
        row.map(row_to_profile).transpose()
    }

    pub fn update_profile_name(&self, user_id: &str, name: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO profiles (user_id, name, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(user_id) DO UPDATE SET name = excluded.name, updated_at = excluded.updated_at",
            params![user_id, name, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    pub fn update_profile_image(&self, user_id: &str, image: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO profiles (user_id, image, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(user_id) DO UPDATE SET image = excluded.image, updated_at = excluded.updated_at",
            params![user_id, image, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

struct ProfileRow {
    user_id: String,
    name: Option<String>,
    image: Option<String>,
    updated_at: String,
}

fn row_to_profile(r: ProfileRow) -> Result<Profile> {
    let updated_at: DateTime<Utc> =
        DateTime::parse_from_rfc3339(&r.updated_at)?.with_timezone(&Utc);
    Ok(Profile {
        user_id: r.user_id,
        name: r.name,
        image: r.image,
        updated_at,
    })
}
