//! Read-only access to the session keys written by the login page
use contracts::system::auth::Session;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "authToken";
const ROLE_KEY: &str = "role";
const LANG_KEY: &str = "i18nextLng";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_item(ACCESS_TOKEN_KEY)
}

/// Snapshot of the stored session
pub fn read_session() -> Session {
    let session = Session::from_storage(get_access_token(), get_item(ROLE_KEY), get_item(LANG_KEY));
    log::debug!(
        "session restored: authenticated={}, role={:?}, lang={}",
        !session.is_anonymous(),
        session.role,
        session.lang
    );
    session
}
