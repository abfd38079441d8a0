use crate::{features::auth::types::UserSession, routes::paths};

/// The two ways the bar can render, chosen only by session presence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewState {
    Anonymous,
    Authenticated { email: String },
}

impl ViewState {
    pub fn from_session(session: Option<&UserSession>) -> Self {
        match session {
            Some(session) => ViewState::Authenticated {
                email: session.email().to_string(),
            },
            None => ViewState::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, ViewState::Authenticated { .. })
    }
}

/// Which render mode a route belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Audience {
    Anonymous,
    Authenticated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkStyle {
    /// Rounded list link with a ring indicator when active.
    Pill,
    /// Bordered button link with a tint overlay when active.
    Button,
    /// Static badge; never highlighted.
    Badge,
}

#[derive(Debug, PartialEq, Eq)]
pub struct NavRoute {
    pub label: &'static str,
    pub path: &'static str,
    /// Material Symbols ligature name.
    pub icon: &'static str,
    pub audience: Audience,
    pub style: LinkStyle,
    pub highlights: bool,
}

impl NavRoute {
    /// Exact path match; `/jobs` does not activate `/`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.highlights && self.path == current_path
    }
}

static HOME: NavRoute = NavRoute {
    label: "Home",
    path: paths::HOME,
    icon: "home",
    audience: Audience::Anonymous,
    style: LinkStyle::Pill,
    highlights: true,
};

static REGISTER: NavRoute = NavRoute {
    label: "Register",
    path: paths::REGISTER,
    icon: "person_add",
    audience: Audience::Anonymous,
    style: LinkStyle::Pill,
    highlights: true,
};

static LOGIN: NavRoute = NavRoute {
    label: "Login",
    path: paths::SIGN_IN,
    icon: "login",
    audience: Audience::Anonymous,
    style: LinkStyle::Pill,
    highlights: true,
};

static MY_POSTED_JOBS: NavRoute = NavRoute {
    label: "My Posted Jobs",
    path: paths::MY_POSTED_JOBS,
    icon: "home",
    audience: Audience::Authenticated,
    style: LinkStyle::Button,
    highlights: true,
};

static ADD_JOB: NavRoute = NavRoute {
    label: "Add new job",
    path: paths::ADD_JOB,
    icon: "home",
    audience: Audience::Authenticated,
    style: LinkStyle::Button,
    highlights: true,
};

static MY_APPLICATIONS: NavRoute = NavRoute {
    label: "My Applications",
    path: paths::JOB_APPLICATIONS,
    icon: "work",
    audience: Audience::Authenticated,
    style: LinkStyle::Badge,
    highlights: false,
};

pub static ROUTES: [&NavRoute; 6] = [
    &HOME,
    &REGISTER,
    &LOGIN,
    &MY_POSTED_JOBS,
    &ADD_JOB,
    &MY_APPLICATIONS,
];

/// One slot in the bar, left to right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavItem {
    Link {
        route: &'static NavRoute,
        active: bool,
    },
    AccountEmail(String),
    SignOut,
}

fn links_for(audience: Audience, current_path: &str) -> impl Iterator<Item = NavItem> + '_ {
    ROUTES
        .iter()
        .copied()
        .filter(move |route| route.audience == audience)
        .map(move |route| NavItem::Link {
            route,
            active: route.is_active(current_path),
        })
}

/// Decides the bar's contents for a session and path. Pure; rendering only
/// turns the returned items into markup.
pub fn nav_items(state: &ViewState, current_path: &str) -> Vec<NavItem> {
    match state {
        ViewState::Anonymous => links_for(Audience::Anonymous, current_path).collect(),
        ViewState::Authenticated { email } => {
            let mut items: Vec<NavItem> =
                links_for(Audience::Authenticated, current_path).collect();
            // account email sits between the button links and the badge
            let badge = items
                .iter()
                .position(|item| {
                    matches!(item, NavItem::Link { route, .. } if route.style == LinkStyle::Badge)
                })
                .unwrap_or(items.len());
            items.insert(badge, NavItem::AccountEmail(email.clone()));
            items.push(NavItem::SignOut);
            items
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Audience, NavItem, NavRoute, ROUTES, ViewState, nav_items};
    use crate::features::auth::types::UserSession;

    const SAMPLE_PATHS: [&str; 10] = [
        "/",
        "/register",
        "/signIn",
        "/myPostedJobs",
        "/addJob",
        "/jobApplication",
        "/signin",
        "/register/",
        "/addJob/42",
        "",
    ];

    fn signed_in(email: &str) -> ViewState {
        ViewState::Authenticated {
            email: email.to_string(),
        }
    }

    fn labels(items: &[NavItem]) -> Vec<String> {
        items
            .iter()
            .map(|item| match item {
                NavItem::Link { route, .. } => route.label.to_string(),
                NavItem::AccountEmail(email) => format!("email:{email}"),
                NavItem::SignOut => "Sign Out".to_string(),
            })
            .collect()
    }

    fn active_labels(items: &[NavItem]) -> Vec<&'static str> {
        items
            .iter()
            .filter_map(|item| match item {
                NavItem::Link {
                    route,
                    active: true,
                } => Some(route.label),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn view_state_follows_session_presence() {
        assert_eq!(ViewState::from_session(None), ViewState::Anonymous);

        let session = UserSession::new("a@b.com").unwrap();
        let state = ViewState::from_session(Some(&session));
        assert_eq!(state, signed_in("a@b.com"));
        assert!(state.is_authenticated());
    }

    #[test]
    fn anonymous_bar_shows_only_public_links() {
        for path in SAMPLE_PATHS {
            let items = nav_items(&ViewState::Anonymous, path);
            assert_eq!(labels(&items), ["Home", "Register", "Login"], "path {path:?}");
            assert!(!items.contains(&NavItem::SignOut));
        }
    }

    #[test]
    fn authenticated_bar_shows_account_links_in_order() {
        for path in SAMPLE_PATHS {
            let items = nav_items(&signed_in("a@b.com"), path);
            assert_eq!(
                labels(&items),
                [
                    "My Posted Jobs",
                    "Add new job",
                    "email:a@b.com",
                    "My Applications",
                    "Sign Out"
                ],
                "path {path:?}"
            );
        }
    }

    #[test]
    fn links_belong_to_their_render_mode() {
        for state in [ViewState::Anonymous, signed_in("x@y.io")] {
            let expected = if state.is_authenticated() {
                Audience::Authenticated
            } else {
                Audience::Anonymous
            };
            for item in nav_items(&state, "/") {
                if let NavItem::Link { route, .. } = item {
                    assert_eq!(route.audience, expected, "{}", route.label);
                }
            }
        }
    }

    #[test]
    fn only_exact_path_matches_are_active() {
        for state in [ViewState::Anonymous, signed_in("a@b.com")] {
            for path in SAMPLE_PATHS {
                for item in nav_items(&state, path) {
                    if let NavItem::Link { route, active } = item {
                        assert_eq!(
                            active,
                            route.highlights && route.path == path,
                            "{} at {path:?}",
                            route.label
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn sign_in_path_highlights_login_only() {
        let items = nav_items(&ViewState::Anonymous, "/signIn");
        assert_eq!(active_labels(&items), ["Login"]);
    }

    #[test]
    fn root_path_highlights_home_but_no_account_link() {
        assert_eq!(
            active_labels(&nav_items(&ViewState::Anonymous, "/")),
            ["Home"]
        );
        assert!(active_labels(&nav_items(&signed_in("a@b.com"), "/")).is_empty());
    }

    #[test]
    fn account_button_links_highlight_on_their_own_paths() {
        let state = signed_in("a@b.com");
        assert_eq!(
            active_labels(&nav_items(&state, "/myPostedJobs")),
            ["My Posted Jobs"]
        );
        assert_eq!(active_labels(&nav_items(&state, "/addJob")), ["Add new job"]);
    }

    #[test]
    fn applications_page_shows_email_without_highlight() {
        let items = nav_items(&signed_in("a@b.com"), "/jobApplication");
        assert!(items.contains(&NavItem::AccountEmail("a@b.com".to_string())));
        assert!(items.iter().any(|item| matches!(
            item,
            NavItem::Link { route, active: false } if route.label == "My Applications"
        )));
        assert!(active_labels(&items).is_empty());
    }

    #[test]
    fn route_table_paths_are_unique() {
        let mut paths: Vec<&str> = ROUTES.iter().map(|route: &&NavRoute| route.path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), ROUTES.len());
    }
}
