//! Таблица маршрутов приложения
//!
//! Static mapping from URL paths to dashboard pages. The router outlet in the
//! frontend consults it on every navigation; lookups are total and never fail.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Where `/` sends the user.
pub const DEFAULT_PATH: &str = "/sales";

/// Upper bound on chained redirects followed by [`RouteTable::resolve`].
pub const MAX_REDIRECTS: usize = 8;

/// Identifier of a page view that can be mounted by the router outlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageId {
    Sales,
    Orders,
    Stocks,
    Incomes,
    NotFound,
}

impl PageId {
    /// Pages reachable from the navigation menu, in menu order.
    pub const DASHBOARDS: [PageId; 4] = [
        PageId::Sales,
        PageId::Orders,
        PageId::Stocks,
        PageId::Incomes,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PageId::Sales => "Sales",
            PageId::Orders => "Orders",
            PageId::Stocks => "Stocks",
            PageId::Incomes => "Incomes",
            PageId::NotFound => "NotFound",
        }
    }

    /// Заголовок страницы для меню и шапки
    pub fn title(self) -> &'static str {
        match self {
            PageId::Sales => "Продажи",
            PageId::Orders => "Заказы",
            PageId::Stocks => "Склады",
            PageId::Incomes => "Доходы",
            PageId::NotFound => "Страница не найдена",
        }
    }

    pub fn path(self) -> Option<&'static str> {
        match self {
            PageId::Sales => Some("/sales"),
            PageId::Orders => Some("/orders"),
            PageId::Stocks => Some("/stocks"),
            PageId::Incomes => Some("/incomes"),
            PageId::NotFound => None,
        }
    }

    /// Backend resource the page reads its rows from.
    pub fn endpoint(self) -> Option<&'static str> {
        match self {
            PageId::Sales => Some("sales"),
            PageId::Orders => Some("orders"),
            PageId::Stocks => Some("stocks"),
            PageId::Incomes => Some("incomes"),
            PageId::NotFound => None,
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPattern {
    Exact(&'static str),
    /// Matches any path; displayed the way `leptos_router` spells a wildcard.
    CatchAll,
}

impl PathPattern {
    /// `normalized` must come from [`normalize_path`].
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            PathPattern::Exact(pattern) => pattern.eq_ignore_ascii_case(normalized),
            PathPattern::CatchAll => true,
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPattern::Exact(pattern) => f.write_str(pattern),
            PathPattern::CatchAll => f.write_str("/*any"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Page(PageId),
    Redirect(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: PathPattern,
    pub target: RouteTarget,
}

impl RouteEntry {
    pub const fn page(path: &'static str, page: PageId) -> Self {
        Self {
            pattern: PathPattern::Exact(path),
            target: RouteTarget::Page(page),
        }
    }

    pub const fn redirect(path: &'static str, to: &'static str) -> Self {
        Self {
            pattern: PathPattern::Exact(path),
            target: RouteTarget::Redirect(to),
        }
    }

    pub const fn fallback(page: PageId) -> Self {
        Self {
            pattern: PathPattern::CatchAll,
            target: RouteTarget::Page(page),
        }
    }

    pub fn redirect_to(&self) -> Option<&'static str> {
        match self.target {
            RouteTarget::Redirect(to) => Some(to),
            RouteTarget::Page(_) => None,
        }
    }
}

/// Маршруты дашборда
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry::page("/sales", PageId::Sales),
    RouteEntry::page("/orders", PageId::Orders),
    RouteEntry::page("/stocks", PageId::Stocks),
    RouteEntry::page("/incomes", PageId::Incomes),
    RouteEntry::redirect("/", DEFAULT_PATH),
    RouteEntry::fallback(PageId::NotFound),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("Duplicate route pattern: {0}")]
    DuplicatePattern(String),

    #[error("Root path must redirect exactly once, found {0} redirects")]
    RootRedirect(usize),

    #[error("Expected exactly one catch-all route, found {0}")]
    CatchAll(usize),
}

/// Outcome of resolving a browser path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub page: PageId,
    /// Normalized path the page was found under, after redirects.
    pub path: String,
    /// Normalized original path when at least one redirect was applied.
    pub redirected_from: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    entries: &'static [RouteEntry],
}

impl RouteTable {
    pub const fn new(entries: &'static [RouteEntry]) -> Self {
        Self { entries }
    }

    pub const fn standard() -> Self {
        Self::new(ROUTES)
    }

    pub fn validate(&self) -> Result<(), RouteTableError> {
        let mut seen: Vec<String> = Vec::with_capacity(self.entries.len());
        for entry in self.entries {
            let pattern = entry.pattern.to_string().to_ascii_lowercase();
            if seen.contains(&pattern) {
                return Err(RouteTableError::DuplicatePattern(pattern));
            }
            seen.push(pattern);
        }

        let root_redirects = self
            .entries
            .iter()
            .filter(|e| e.pattern == PathPattern::Exact("/") && e.redirect_to().is_some())
            .count();
        if root_redirects != 1 {
            return Err(RouteTableError::RootRedirect(root_redirects));
        }

        let catch_all = self
            .entries
            .iter()
            .filter(|e| e.pattern == PathPattern::CatchAll)
            .count();
        if catch_all != 1 {
            return Err(RouteTableError::CatchAll(catch_all));
        }

        Ok(())
    }

    /// Exact patterns win; the catch-all is only consulted afterwards.
    pub fn match_path(&self, path: &str) -> Option<&'static RouteEntry> {
        let normalized = normalize_path(path);
        let entries = self.entries;
        entries
            .iter()
            .filter(|e| matches!(e.pattern, PathPattern::Exact(_)))
            .find(|e| e.pattern.matches(&normalized))
            .or_else(|| entries.iter().find(|e| e.pattern == PathPattern::CatchAll))
    }

    pub fn redirect_for(&self, path: &str) -> Option<&'static str> {
        self.match_path(path).and_then(RouteEntry::redirect_to)
    }

    pub fn resolve(&self, path: &str) -> Resolution {
        let mut current = normalize_path(path);
        let mut redirected_from = None;

        for _ in 0..=MAX_REDIRECTS {
            match self.match_path(&current).map(|e| e.target) {
                Some(RouteTarget::Redirect(to)) => {
                    redirected_from.get_or_insert_with(|| current.clone());
                    current = normalize_path(to);
                }
                Some(RouteTarget::Page(page)) => {
                    return Resolution {
                        page,
                        path: current,
                        redirected_from,
                    };
                }
                None => break,
            }
        }

        Resolution {
            page: PageId::NotFound,
            path: current,
            redirected_from,
        }
    }

    pub fn resolve_page(&self, path: &str) -> PageId {
        self.resolve(path).page
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Strips `?query` and `#fragment`, forces a leading slash and drops trailing
/// slashes (the root stays `/`).
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_valid() {
        assert_eq!(RouteTable::standard().validate(), Ok(()));
    }

    #[test]
    fn test_dashboard_paths_resolve_exactly() {
        let table = RouteTable::standard();
        assert_eq!(table.resolve_page("/sales"), PageId::Sales);
        assert_eq!(table.resolve_page("/orders"), PageId::Orders);
        assert_eq!(table.resolve_page("/stocks"), PageId::Stocks);
        assert_eq!(table.resolve_page("/incomes"), PageId::Incomes);

        for page in PageId::DASHBOARDS {
            let path = page.path().unwrap();
            let resolution = table.resolve(path);
            assert_eq!(resolution.page, page);
            assert_eq!(resolution.redirected_from, None);
        }
    }

    #[test]
    fn test_root_redirects_to_sales() {
        let table = RouteTable::standard();
        assert_eq!(table.redirect_for("/"), Some("/sales"));

        let resolution = table.resolve("/");
        assert_eq!(resolution.page, PageId::Sales);
        assert_eq!(resolution.path, "/sales");
        assert_eq!(resolution.redirected_from.as_deref(), Some("/"));
    }

    #[test]
    fn test_unknown_paths_resolve_to_not_found() {
        let table = RouteTable::standard();
        for path in ["/unknown", "/sales/42", "/api/sales", "/salesx", "/a/b/c", "/404"] {
            assert_eq!(table.resolve_page(path), PageId::NotFound, "path {}", path);
            assert_eq!(table.redirect_for(path), None);
        }
    }

    #[test]
    fn test_matching_is_lenient_about_slashes_case_and_query() {
        let table = RouteTable::standard();
        assert_eq!(table.resolve_page("/orders/"), PageId::Orders);
        assert_eq!(table.resolve_page("/Stocks"), PageId::Stocks);
        assert_eq!(table.resolve_page("/incomes?dateFrom=2024-01-01"), PageId::Incomes);
        assert_eq!(table.resolve_page("/sales#top"), PageId::Sales);
        assert_eq!(table.resolve_page(""), PageId::Sales);
        assert_eq!(table.resolve_page("/?x=1"), PageId::Sales);
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("sales"), "/sales");
        assert_eq!(normalize_path("/sales/?a=1"), "/sales");
    }

    #[test]
    fn test_validate_reports_broken_tables() {
        static DUPLICATE: &[RouteEntry] = &[
            RouteEntry::page("/sales", PageId::Sales),
            RouteEntry::page("/Sales", PageId::Orders),
            RouteEntry::redirect("/", "/sales"),
            RouteEntry::fallback(PageId::NotFound),
        ];
        static NO_FALLBACK: &[RouteEntry] = &[
            RouteEntry::page("/sales", PageId::Sales),
            RouteEntry::redirect("/", "/sales"),
        ];
        static NO_ROOT: &[RouteEntry] = &[
            RouteEntry::page("/sales", PageId::Sales),
            RouteEntry::fallback(PageId::NotFound),
        ];

        assert_eq!(
            RouteTable::new(DUPLICATE).validate(),
            Err(RouteTableError::DuplicatePattern("/sales".to_string()))
        );
        assert_eq!(
            RouteTable::new(NO_FALLBACK).validate(),
            Err(RouteTableError::CatchAll(0))
        );
        assert_eq!(
            RouteTable::new(NO_ROOT).validate(),
            Err(RouteTableError::RootRedirect(0))
        );
    }

    #[test]
    fn test_resolution_is_total_without_fallback() {
        static NO_FALLBACK: &[RouteEntry] = &[
            RouteEntry::page("/sales", PageId::Sales),
            RouteEntry::redirect("/", "/sales"),
        ];
        let table = RouteTable::new(NO_FALLBACK);
        assert_eq!(table.resolve_page("/nowhere"), PageId::NotFound);
        assert_eq!(table.resolve_page("/"), PageId::Sales);
    }

    #[test]
    fn test_redirect_loop_stops_at_not_found() {
        static LOOP: &[RouteEntry] = &[
            RouteEntry::redirect("/", "/a"),
            RouteEntry::redirect("/a", "/"),
            RouteEntry::fallback(PageId::NotFound),
        ];
        let resolution = RouteTable::new(LOOP).resolve("/");
        assert_eq!(resolution.page, PageId::NotFound);
        assert_eq!(resolution.redirected_from.as_deref(), Some("/"));
    }

    #[test]
    fn test_page_metadata() {
        assert_eq!(PageId::Sales.endpoint(), Some("sales"));
        assert_eq!(PageId::NotFound.endpoint(), None);
        assert_eq!(PageId::NotFound.path(), None);
        assert_eq!(PageId::Incomes.to_string(), "Incomes");
        assert_eq!(PathPattern::CatchAll.to_string(), "/*any");
    }
}
