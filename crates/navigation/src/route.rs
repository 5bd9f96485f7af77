use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Logical page identifiers known to the router.
#[derive(
    EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum Route {
    Home,
    Projects,
    ProjectsTicTacToe,
    ProjectsState,
    ProjectsS3,
    ProjectsAlibaba,
    ProjectsPaypal,
    ProjectsTest,
    Contact,
    Login,
    SignUp,
    NotFound,
}

impl Route {
    /// Path the portfolio ships with for this route.
    pub fn default_path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Projects => "/projects",
            Route::ProjectsTicTacToe => "/projects/tictactoe",
            Route::ProjectsState => "/projects/state",
            Route::ProjectsS3 => "/projects/s3",
            Route::ProjectsAlibaba => "/projects/alibaba",
            Route::ProjectsPaypal => "/projects/paypal",
            Route::ProjectsTest => "/projects/test",
            Route::Contact => "/contact",
            Route::Login => "/login",
            Route::SignUp => "/signup",
            Route::NotFound => "*",
        }
    }
}

/// Immutable mapping from [`Route`] to its path.
///
/// Paths double as router match patterns and as the substrings used for
/// active-link detection. Build one at startup and hand out references.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    entries: Vec<(Route, String)>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::from_entries(std::iter::empty())
    }

    /// Build a table from explicit entries. Routes left out fall back to
    /// their default path.
    pub fn from_entries(entries: impl IntoIterator<Item = (Route, String)>) -> Self {
        let mut table: Vec<(Route, String)> = Route::VARIANTS
            .iter()
            .map(|route| (*route, route.default_path().to_owned()))
            .collect();

        for (route, path) in entries {
            if let Some(entry) = table.iter_mut().find(|(r, _)| *r == route) {
                entry.1 = path;
            }
        }

        Self { entries: table }
    }

    pub fn path(&self, route: Route) -> &str {
        self.entries
            .iter()
            .find(|(r, _)| *r == route)
            .map(|(_, path)| path.as_str())
            .unwrap_or_else(|| route.default_path())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Route, &str)> {
        self.entries.iter().map(|(r, p)| (*r, p.as_str()))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}
