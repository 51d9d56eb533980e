//! Session state: token, user info and the principal's permission grid.
//!
//! The grid is fetched once after login (or session restore) and kept in the
//! session object; the sidebar, the route guards and the per-row action
//! buttons all read it from here. An empty grid means deny everything, so a
//! failed fetch degrades to a locked-down UI plus a toast, never an open one.

use contracts::system::auth::UserInfo;
use contracts::system::permissions::PermissionGrid;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::toast::{use_toast, ToastService};

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    pub permissions: PermissionGrid,
}

/// Wrapping counter guarding permission fetches against supersession.
///
/// Every fetch bumps the counter and keeps the returned token; logout bumps
/// it too. A response is applied only while its token is still current, so
/// a fetch overtaken by a newer one or by logout discards itself on arrival.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct EpochCounter(u32);

impl EpochCounter {
    fn bump(&mut self) -> u32 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    fn accepts(&self, token: u32) -> bool {
        self.0 == token
    }
}

/// Explicit session object, created at login and destroyed at logout.
/// Cheap to copy; all fields are signals.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<AuthState>,
    perm_epoch: RwSignal<EpochCounter>,
    toast: ToastService,
}

impl Session {
    fn new(toast: ToastService) -> Self {
        Session {
            state: RwSignal::new(AuthState::default()),
            perm_epoch: RwSignal::new(EpochCounter::default()),
            toast,
        }
    }

    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    pub fn toast(&self) -> ToastService {
        self.toast
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.access_token.is_some())
    }

    pub fn user_info(&self) -> Option<UserInfo> {
        self.state.with(|s| s.user_info.clone())
    }

    /// Snapshot of the current grid (possibly empty).
    pub fn permissions(&self) -> PermissionGrid {
        self.state.with(|s| s.permissions.clone())
    }

    pub fn begin(&self, access_token: String, user_info: UserInfo) {
        self.state.set(AuthState {
            access_token: Some(access_token),
            user_info: Some(user_info),
            permissions: Vec::new(),
        });
        self.refresh_permissions();
    }

    pub fn end(&self) {
        // Invalidate any in-flight permission fetch before dropping state.
        self.perm_epoch.update(|epoch| {
            epoch.bump();
        });
        storage::clear_tokens();
        self.state.set(AuthState::default());
    }

    /// Fetch (or refetch) the permission grid for the logged-in principal.
    pub fn refresh_permissions(&self) {
        let (token, user_id) = self.state.with_untracked(|s| {
            (
                s.access_token.clone(),
                s.user_info.as_ref().map(|u| u.id.clone()),
            )
        });
        let (Some(token), Some(user_id)) = (token, user_id) else {
            return;
        };

        let token_epoch = self
            .perm_epoch
            .try_update(|epoch| epoch.bump())
            .unwrap_or_default();

        let session = *self;
        let toast = self.toast;
        spawn_local(async move {
            let result = api::fetch_permissions(&token, &user_id).await;
            if !session.perm_epoch.get_untracked().accepts(token_epoch) {
                // Superseded by logout or a newer fetch; drop silently.
                log::debug!("discarding stale permission fetch (epoch {token_epoch})");
                return;
            }
            match result {
                Ok(grid) => session.state.update(|s| s.permissions = grid),
                Err(e) => {
                    log::error!("permission fetch failed: {e}");
                    toast.error("Failed to fetch permissions");
                    // Grid stays empty: default-deny hides all gated UI.
                }
            }
        });
    }
}

/// Session provider component. Restores the session from stored tokens on
/// mount, validating the access token against the backend first.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = Session::new(use_toast());
    provide_context(session);

    Effect::new(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                return;
            };
            match api::get_current_user(&access_token).await {
                Ok(user_info) => session.begin(access_token, user_info),
                Err(_) => {
                    // Token invalid, try the refresh token once.
                    let Some(refresh_token) = storage::get_refresh_token() else {
                        storage::clear_tokens();
                        return;
                    };
                    match api::refresh_token(refresh_token).await {
                        Ok(response) => {
                            storage::save_access_token(&response.access_token);
                            if let Ok(user_info) =
                                api::get_current_user(&response.access_token).await
                            {
                                session.begin(response.access_token, user_info);
                            }
                        }
                        Err(_) => storage::clear_tokens(),
                    }
                }
            }
        });
    });

    children()
}

/// Hook to access the session
pub fn use_session() -> Session {
    use_context::<Session>().expect("SessionProvider not found in component tree")
}

/// Helper: perform login and start a session
pub async fn do_login(session: Session, email: String, password: String) -> Result<(), String> {
    let response = api::login(email, password).await?;

    storage::save_access_token(&response.access_token);
    storage::save_refresh_token(&response.refresh_token);

    session.begin(response.access_token, response.user);

    Ok(())
}

/// Helper: perform logout and tear the session down
pub async fn do_logout(session: Session) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        let _ = api::logout(refresh_token).await;
    }
    session.end();
}

#[cfg(test)]
mod tests {
    use super::EpochCounter;

    #[test]
    fn current_token_is_accepted() {
        let mut counter = EpochCounter::default();
        let token = counter.bump();
        assert!(counter.accepts(token));
    }

    #[test]
    fn newer_fetch_supersedes_older_token() {
        let mut counter = EpochCounter::default();
        let first = counter.bump();
        let second = counter.bump();
        assert!(!counter.accepts(first));
        assert!(counter.accepts(second));
    }

    #[test]
    fn logout_bump_invalidates_in_flight_token() {
        let mut counter = EpochCounter::default();
        let in_flight = counter.bump();
        // Logout bumps the counter without issuing a new fetch.
        counter.bump();
        assert!(!counter.accepts(in_flight));
    }

    #[test]
    fn wraps_without_accepting_stale_tokens() {
        let mut counter = EpochCounter(u32::MAX - 1);
        let before_wrap = counter.bump();
        let after_wrap = counter.bump();
        assert_eq!(after_wrap, 0);
        assert!(!counter.accepts(before_wrap));
        assert!(counter.accepts(after_wrap));
    }
}
