//! Session helpers: who is logged in, and for how long.

use time::Duration;
use tower_sessions::{session, Expiry, Session};

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Mark the session as authenticated for `user_id`.
///
/// The session id is cycled first so a pre-login id cannot be reused.
/// `remember_for` keeps the session alive for that long after the last
/// request; `None` ends it with the browser session.
pub async fn sign_in(
    session: &Session,
    user_id: i64,
    remember_for: Option<Duration>,
) -> Result<(), session::Error> {
    session.cycle_id().await?;
    session.insert(SESSION_USER_ID_KEY, user_id).await?;
    session.set_expiry(Some(match remember_for {
        Some(duration) => Expiry::OnInactivity(duration),
        None => Expiry::OnSessionEnd,
    }));
    Ok(())
}

/// Drop all session data and the session record.
pub async fn sign_out(session: &Session) -> Result<(), session::Error> {
    session.flush().await
}

pub async fn current_user_id(session: &Session) -> Result<Option<i64>, session::Error> {
    session.get(SESSION_USER_ID_KEY).await
}
