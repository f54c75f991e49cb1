//! Route table as data: descriptors, path matching, and table validation.
//!
//! DESIGN
//! ======
//! Routes are a static tree of [`RouteDef`] values rather than nested router
//! components. The Leptos router only tracks the current location; what
//! renders for that location is decided here, so the whole table can be
//! exercised in plain unit tests without a rendering engine.
//!
//! MATCHING
//! ========
//! The path is split on `/` (empty segments, query, and fragment dropped) and
//! every branch of the tree that consumes the full path becomes a candidate.
//! Candidates are ranked by segment kind (static beats parameter) and ties
//! fall back to declaration order. A parent with children also matches its
//! own path exactly, yielding a chain with no nested page.


pub mod paths;
pub mod table;

use std::collections::HashSet;

use percent_encoding::percent_decode_str;

pub use table::{APP_ROUTES, app_routes};

/// Rank contributed by a static segment.
const STATIC_SCORE: u32 = 10;
/// Rank contributed by a `:param` segment.
const PARAM_SCORE: u32 = 3;
/// Rank contributed by a route with an empty path (index-style route).
const INDEX_SCORE: u32 = 2;

// =============================================================================
// PAGES
// =============================================================================

/// Every screen the shell can mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    PasswordResetForm,
    PasswordReset,
    Login,
    Register,
    Welcome,
    ConfirmFund,
    Layout,
    Dashboard,
    Payment,
    TransactionPin,
    SettingsMenu,
    SendMoneyPartOne,
    SendMoneyPartTwo,
    SendMoneyPartThree,
    BuyDataPartOne,
}

impl Page {
    /// Document title shown while this page is the leaf of the match.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Pay Buddy",
            Self::PasswordResetForm => "Choose a new password",
            Self::PasswordReset => "Reset password",
            Self::Login => "Log in",
            Self::Register => "Create account",
            Self::Welcome => "Welcome",
            Self::ConfirmFund => "Confirming payment",
            Self::Layout | Self::Dashboard => "Dashboard",
            Self::Payment => "Fund wallet",
            Self::TransactionPin => "Transaction PIN",
            Self::SettingsMenu => "Settings",
            Self::SendMoneyPartOne | Self::SendMoneyPartTwo | Self::SendMoneyPartThree => "Send money",
            Self::BuyDataPartOne => "Buy data",
        }
    }
    /// Whether this page wraps nested routes in a content slot.
    #[must_use]
    pub fn has_outlet(self) -> bool {
        matches!(self, Self::Layout)
    }
}

// =============================================================================
// ROUTE DESCRIPTORS
// =============================================================================

/// One node of the route tree: a path pattern, the page it mounts, and
/// optional nested routes rendered inside that page.
#[derive(Clone, Copy, Debug)]
pub struct RouteDef {
    pub path: &'static str,
    pub page: Page,
    pub children: &'static [RouteDef],
}

impl RouteDef {
    #[must_use]
    pub const fn leaf(path: &'static str, page: Page) -> Self {
        Self { path, page, children: &[] }
    }

    #[must_use]
    pub const fn parent(path: &'static str, page: Page, children: &'static [RouteDef]) -> Self {
        Self { path, page, children }
    }

    fn segments(&self) -> impl Iterator<Item = Segment<'static>> {
        self.path.split('/').filter(|s| !s.is_empty()).map(Segment::parse)
    }
}

/// A single pattern segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Static(&'a str),
    Param(&'a str),
}

impl<'a> Segment<'a> {
    /// Parse a pattern segment; a leading `:` marks a parameter.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        raw.strip_prefix(':').map_or(Segment::Static(raw), Segment::Param)
    }

    fn score(self) -> u32 {
        match self {
            Segment::Static(_) => STATIC_SCORE,
            Segment::Param(_) => PARAM_SCORE,
        }
    }

    /// Key used to detect colliding patterns: parameter names do not matter
    /// and static text compares case-insensitively.
    fn collision_key(self) -> String {
        match self {
            Segment::Static(s) => s.to_ascii_lowercase(),
            Segment::Param(_) => ":".to_owned(),
        }
    }
}

/// Split a location path into its non-empty segments, ignoring any query
/// string or fragment.
#[must_use]
pub fn split_path(path: &str) -> Vec<&str> {
    let path = path.find(['?', '#']).map_or(path, |idx| &path[..idx]);
    path.split('/').filter(|s| !s.is_empty()).collect()
}

// =============================================================================
// MATCH RESULT
// =============================================================================

/// Path parameters extracted during matching, in pattern order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Value of the parameter `name`, if the matched branch declared it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The outcome of resolving a path: the leaf page, the enclosing pages from
/// outermost inward, and the extracted parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub page: Page,
    pub parents: Vec<Page>,
    pub params: Params,
}

impl RouteMatch {
    /// The innermost matched page.
    #[must_use]
    pub fn leaf(&self) -> Page {
        self.page
    }

    /// The outermost enclosing page, when the match is nested.
    #[must_use]
    pub fn layout(&self) -> Option<Page> {
        self.parents.first().copied()
    }

    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Full chain from outermost page to the leaf.
    #[must_use]
    pub fn chain(&self) -> Vec<Page> {
        let mut chain = self.parents.clone();
        chain.push(self.page);
        chain
    }

    /// Pages that stay mounted while only the nested page changes, outermost
    /// first. A layout matched on its own path belongs to the frame.
    #[must_use]
    pub fn frame(&self) -> Vec<Page> {
        if self.page.has_outlet() {
            self.chain()
        } else {
            self.parents.clone()
        }
    }

    /// The page mounted inside the frame's innermost slot, if any.
    #[must_use]
    pub fn nested(&self) -> Option<Page> {
        (!self.page.has_outlet()).then_some(self.page)
    }
}

// =============================================================================
// TABLE
// =============================================================================

/// Misconfiguration detected in a route table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    /// Two routes resolve to the same full path, leaving one unreachable.
    #[error("duplicate route path: {path}")]
    DuplicatePath { path: String },

    /// A `:` segment with no name.
    #[error("empty parameter name in route path: {path}")]
    EmptyParamName { path: String },

    /// The same parameter name appears twice along one branch.
    #[error("duplicate parameter `{name}` in route path: {path}")]
    DuplicateParam { path: String, name: String },
}

/// An immutable view over a static route tree.
#[derive(Clone, Copy, Debug)]
pub struct RouteTable {
    routes: &'static [RouteDef],
}

/// Working state for the best candidate found so far.
struct Candidate {
    score: u32,
    chain: Vec<Page>,
    params: Vec<(&'static str, String)>,
}

impl RouteTable {
    #[must_use]
    pub const fn new(routes: &'static [RouteDef]) -> Self {
        Self { routes }
    }

    /// Top-level route descriptors in declaration order.
    #[must_use]
    pub fn routes(&self) -> &'static [RouteDef] {
        self.routes
    }

    /// Resolve `path` to exactly one branch of the table, or `None` when no
    /// branch consumes the whole path.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let input = split_path(path);
        let mut best: Option<Candidate> = None;
        let mut chain = Vec::new();
        let mut params = Vec::new();
        collect(self.routes, &input, 0, &mut chain, &mut params, &mut best);

        let Candidate { mut chain, params, .. } = best?;
        let page = chain.pop()?;
        Some(RouteMatch {
            page,
            parents: chain,
            params: Params(params.into_iter().map(|(k, v)| (k.to_owned(), v)).collect()),
        })
    }

    /// Every routable full path with the page it mounts, in declaration order.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, Page)> {
        let mut out = Vec::new();
        walk(self.routes, &mut Vec::new(), &mut |segments, def| {
            out.push((join_path(segments), def.page));
        });
        out
    }

    /// Check that full paths are unique and parameters are well formed.
    ///
    /// # Errors
    ///
    /// Returns the first [`RouteTableError`] found, in declaration order.
    pub fn validate(&self) -> Result<(), RouteTableError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut first_error = None;
        walk(self.routes, &mut Vec::new(), &mut |segments, _| {
            if first_error.is_some() {
                return;
            }
            let path = join_path(segments);
            let mut names: HashSet<&str> = HashSet::new();
            for segment in segments {
                if let Segment::Param(name) = segment {
                    if name.is_empty() {
                        first_error = Some(RouteTableError::EmptyParamName { path: path.clone() });
                        return;
                    }
                    if !names.insert(*name) {
                        first_error = Some(RouteTableError::DuplicateParam {
                            path: path.clone(),
                            name: (*name).to_owned(),
                        });
                        return;
                    }
                }
            }
            let key = segments.iter().map(|s| s.collision_key()).collect::<Vec<_>>().join("/");
            if !seen.insert(key) {
                first_error = Some(RouteTableError::DuplicatePath { path });
            }
        });
        first_error.map_or(Ok(()), Err)
    }
}

/// Depth-first search over `routes`, keeping the highest-ranked branch that
/// consumes all of `input`. Earlier declarations win ties.
fn collect(
    routes: &'static [RouteDef],
    input: &[&str],
    score: u32,
    chain: &mut Vec<Page>,
    params: &mut Vec<(&'static str, String)>,
    best: &mut Option<Candidate>,
) {
    for def in routes {
        let param_mark = params.len();
        let Some((consumed, gained)) = match_prefix(def, input, params) else {
            params.truncate(param_mark);
            continue;
        };
        let score = score + gained;
        let rest = &input[consumed..];
        chain.push(def.page);

        if rest.is_empty() && best.as_ref().map_or(true, |b| score > b.score) {
            *best = Some(Candidate { score, chain: chain.clone(), params: params.clone() });
        }
        if !def.children.is_empty() {
            collect(def.children, rest, score, chain, params, best);
        }

        chain.pop();
        params.truncate(param_mark);
    }
}

/// Match the segments of `def` against the front of `input`, pushing any
/// parameters. Returns the number of input segments consumed and the rank.
fn match_prefix(
    def: &RouteDef,
    input: &[&str],
    params: &mut Vec<(&'static str, String)>,
) -> Option<(usize, u32)> {
    let mut consumed = 0;
    let mut score = 0;
    for segment in def.segments() {
        let actual = input.get(consumed)?;
        match segment {
            Segment::Static(expected) => {
                if !expected.eq_ignore_ascii_case(actual) {
                    return None;
                }
            }
            Segment::Param(name) => {
                params.push((name, percent_decode_str(actual).decode_utf8_lossy().into_owned()));
            }
        }
        score += segment.score();
        consumed += 1;
    }
    if consumed == 0 {
        score = INDEX_SCORE;
    }
    Some((consumed, score))
}

/// Visit every route with the accumulated segments of its full path.
fn walk<F>(routes: &'static [RouteDef], prefix: &mut Vec<Segment<'static>>, visit: &mut F)
where
    F: FnMut(&[Segment<'static>], &RouteDef),
{
    for def in routes {
        let mark = prefix.len();
        prefix.extend(def.segments());
        visit(prefix, def);
        walk(def.children, prefix, visit);
        prefix.truncate(mark);
    }
}

fn join_path(segments: &[Segment<'_>]) -> String {
    let mut path = String::new();
    for segment in segments {
        path.push('/');
        match segment {
            Segment::Static(s) => path.push_str(s),
            Segment::Param(name) => {
                path.push(':');
                path.push_str(name);
            }
        }
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}
