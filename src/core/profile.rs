use anyhow::Result;
use serde::Serialize;

use crate::db::Database;
use crate::models::error::Error;
use crate::models::profile::{Profile, Session, User};

/// Routes whose rendering depends on the profile.
pub const PROFILE_ROUTES: [&str; 2] = ["/dashboard", "/dashboard/settings"];

/// Paths to mark stale after a profile mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Revalidation {
    pub paths: Vec<&'static str>,
}

impl Revalidation {
    fn profile() -> Self {
        Self {
            paths: PROFILE_ROUTES.to_vec(),
        }
    }
}

fn require_user(session: &Session) -> Result<&User> {
    session.user.as_ref().ok_or_else(|| Error::Unauthenticated.into())
}

pub fn get_profile(db: &Database, session: &Session) -> Result<Option<Profile>> {
    let user = require_user(session)?;
    db.get_profile(&user.id)
}

/// Set the display name of the signed-in user.
pub fn update_display_name(db: &Database, session: &Session, name: &str) -> Result<Revalidation> {
    let user = require_user(session)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::invalid("name", "must not be empty").into());
    }
    db.update_profile_name(&user.id, name)?;
    log::info!("updated display name for user {}", user.id);
    Ok(Revalidation::profile())
}

/// Set the avatar image URL of the signed-in user.
pub fn update_avatar(db: &Database, session: &Session, url: &str) -> Result<Revalidation> {
    let user = require_user(session)?;
    let url = url.trim();
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(Error::invalid("image", format!("{} is not an http(s) URL", url)).into());
    }
    db.update_profile_image(&user.id, url)?;
    log::info!("updated avatar for user {}", user.id);
    Ok(Revalidation::profile())
}
