//! Route table for the navigation tabs and the unknown-path redirect

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Portfolio,
    Analytics,
}

impl AppRoute {
    pub const ALL: [AppRoute; 3] = [AppRoute::Home, AppRoute::Portfolio, AppRoute::Analytics];

    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Portfolio => "/portfolio",
            AppRoute::Analytics => "/analytics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppRoute::Home => "Home",
            AppRoute::Portfolio => "Portfolio",
            AppRoute::Analytics => "Analytics",
        }
    }

    /// Match a location pathname; a trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<AppRoute> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Where a path should redirect to, if anywhere. Unknown paths go home.
    pub fn redirect_for(path: &str) -> Option<&'static str> {
        match Self::from_path(path) {
            Some(_) => None,
            None => Some(AppRoute::Home.path()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path(""), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path("/portfolio"), Some(AppRoute::Portfolio));
        assert_eq!(AppRoute::from_path("/analytics/"), Some(AppRoute::Analytics));
    }

    #[test]
    fn test_unknown_path_redirects_home() {
        assert_eq!(AppRoute::from_path("/settings"), None);
        assert_eq!(AppRoute::redirect_for("/settings"), Some("/"));
        assert_eq!(AppRoute::redirect_for("/portfolio/extra"), Some("/"));
        assert_eq!(AppRoute::redirect_for("/analytics"), None);
    }

    #[test]
    fn test_paths_round_trip() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::from_path(route.path()), Some(route));
        }
    }
}
