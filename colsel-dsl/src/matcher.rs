//! Pivot references and path matching
//!
//! A pivot can be named many ways. All of them collapse, before any range
//! logic runs, into either a concrete path (matched relative to the enclosing
//! group or absolutely) or a caller-supplied predicate.

use crate::unwrap::ColumnSet;
use colsel_core::{ColselResult, ColumnAccessor, ColumnPath, ResolvedColumn, SelectionConfig};
use std::fmt;

/// Selector evaluated against the working columns of a scope.
pub type SelectorFn<'p> = Box<dyn Fn(&[ResolvedColumn<'_>]) -> Option<ColumnPath> + 'p>;

/// Arbitrary per-column pivot test.
pub type FilterFn<'p> = Box<dyn Fn(&ResolvedColumn<'_>) -> bool + 'p>;

/// Caller-facing identification of the pivot column.
pub enum PivotReference<'p> {
    /// A literal path
    Path(ColumnPath),
    /// One name segment, taken literally
    Name(String),
    /// A dotted path, parsed with the configured separator
    Dotted(String),
    /// The path carried by a typed column accessor
    Accessor(ColumnPath),
    /// A selector run against the scope; the path it returns is the pivot
    Selector(SelectorFn<'p>),
    /// A predicate; the first column it accepts is the pivot
    Filter(FilterFn<'p>),
}

impl<'p> PivotReference<'p> {
    pub fn path(path: impl Into<ColumnPath>) -> Self {
        PivotReference::Path(path.into())
    }

    pub fn name(name: impl Into<String>) -> Self {
        PivotReference::Name(name.into())
    }

    pub fn dotted(path: impl Into<String>) -> Self {
        PivotReference::Dotted(path.into())
    }

    pub fn selector<F>(f: F) -> Self
    where
        F: Fn(&[ResolvedColumn<'_>]) -> Option<ColumnPath> + 'p,
    {
        PivotReference::Selector(Box::new(f))
    }

    pub fn filter<F>(f: F) -> Self
    where
        F: Fn(&ResolvedColumn<'_>) -> bool + 'p,
    {
        PivotReference::Filter(Box::new(f))
    }

    /// Resolve against the working columns of a scope.
    ///
    /// Only `Dotted` can fail (malformed path). A selector that picks
    /// nothing resolves to a predicate that never matches.
    pub fn resolve(self, set: &ColumnSet<'_>, config: &SelectionConfig) -> ColselResult<Pivot<'p>> {
        let pivot = match self {
            PivotReference::Path(path) | PivotReference::Accessor(path) => {
                Pivot::Path(PathMatcher::for_set(path, set))
            }
            PivotReference::Name(name) => {
                Pivot::Path(PathMatcher::for_set(ColumnPath::single(name), set))
            }
            PivotReference::Dotted(input) => {
                Pivot::Path(PathMatcher::for_set(config.parse_path(&input)?, set))
            }
            PivotReference::Selector(selector) => match selector(set.columns()) {
                Some(path) => Pivot::Path(PathMatcher::for_set(path, set)),
                None => Pivot::Nothing,
            },
            PivotReference::Filter(filter) => Pivot::Filter(filter),
        };
        Ok(pivot)
    }
}

impl fmt::Debug for PivotReference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PivotReference::Path(path) => f.debug_tuple("Path").field(path).finish(),
            PivotReference::Name(name) => f.debug_tuple("Name").field(name).finish(),
            PivotReference::Dotted(input) => f.debug_tuple("Dotted").field(input).finish(),
            PivotReference::Accessor(path) => f.debug_tuple("Accessor").field(path).finish(),
            PivotReference::Selector(_) => f.write_str("Selector(..)"),
            PivotReference::Filter(_) => f.write_str("Filter(..)"),
        }
    }
}

impl From<ColumnPath> for PivotReference<'_> {
    fn from(path: ColumnPath) -> Self {
        PivotReference::Path(path)
    }
}

impl From<&str> for PivotReference<'_> {
    fn from(name: &str) -> Self {
        PivotReference::Name(name.to_string())
    }
}

impl<T> From<&ColumnAccessor<T>> for PivotReference<'_> {
    fn from(accessor: &ColumnAccessor<T>) -> Self {
        PivotReference::Accessor(accessor.path().clone())
    }
}

/// Matches a column against a pivot path.
///
/// Inside a group scope a column matches when its absolute path equals the
/// group path joined with the pivot (relative addressing) or the pivot itself
/// (absolute addressing). Both forms are precomputed in the path space the
/// columns actually carry, so relative child paths after `remove_paths`
/// match either form too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatcher {
    pivot: ColumnPath,
    targets: Vec<ColumnPath>,
}

impl PathMatcher {
    /// Matcher for columns carrying absolute paths.
    pub fn new(pivot: ColumnPath, group: Option<ColumnPath>) -> Self {
        let mut targets = Vec::with_capacity(2);
        if let Some(group) = group {
            targets.push(group.join(&pivot));
        }
        targets.push(pivot.clone());
        Self { pivot, targets }
    }

    /// Matcher for the columns of `set`, whatever form their paths take.
    pub fn for_set(pivot: ColumnPath, set: &ColumnSet<'_>) -> Self {
        match set.group_path() {
            Some(group) if set.has_relative_paths() => {
                // group ++ c == group ++ p  <=>  c == p
                // group ++ c == p           <=>  c == p - group
                let mut targets = vec![pivot.clone()];
                if let Some(rest) = pivot.strip_prefix(group).filter(|r| !r.is_empty()) {
                    targets.push(rest);
                }
                Self { pivot, targets }
            }
            group => Self::new(pivot, group.cloned()),
        }
    }

    pub fn pivot(&self) -> &ColumnPath {
        &self.pivot
    }

    pub fn matches(&self, column: &ResolvedColumn<'_>) -> bool {
        let path = column.path();
        self.targets.iter().any(|target| target == path)
    }
}

/// A pivot reference in the form the partitioner consumes.
pub enum Pivot<'p> {
    Path(PathMatcher),
    Filter(FilterFn<'p>),
    /// The reference named no column; matches nothing
    Nothing,
}

impl Pivot<'_> {
    pub fn matches(&self, column: &ResolvedColumn<'_>) -> bool {
        match self {
            Pivot::Path(matcher) => matcher.matches(column),
            Pivot::Filter(filter) => filter(column),
            Pivot::Nothing => false,
        }
    }
}

impl fmt::Debug for Pivot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pivot::Path(matcher) => f.debug_tuple("Path").field(matcher).finish(),
            Pivot::Filter(_) => f.write_str("Filter(..)"),
            Pivot::Nothing => f.write_str("Nothing"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unwrap::all_columns;
    use colsel_core::{ColselError, ColumnSchema, PathError, SelectionScope, Table};

    fn table() -> Table {
        Table::new(vec![
            ColumnSchema::leaf("x"),
            ColumnSchema::group("g", vec![ColumnSchema::leaf("m"), ColumnSchema::leaf("n")]),
            ColumnSchema::leaf("y"),
        ])
    }

    fn matching(pivot: &Pivot<'_>, set: &ColumnSet<'_>) -> Vec<String> {
        set.columns()
            .iter()
            .filter(|c| pivot.matches(c))
            .map(|c| c.path().to_string())
            .collect()
    }

    #[test]
    fn test_relative_and_absolute_pivot_in_group() {
        let table = table();
        let config = SelectionConfig::default();
        let set = all_columns(&SelectionScope::group(&table, ["g"]), false).unwrap();

        let relative = PivotReference::name("m").resolve(&set, &config).unwrap();
        let absolute = PivotReference::dotted("g.m").resolve(&set, &config).unwrap();

        assert_eq!(matching(&relative, &set), vec!["g.m"]);
        assert_eq!(matching(&absolute, &set), vec!["g.m"]);
    }

    #[test]
    fn test_relative_pivot_with_removed_paths() {
        let table = table();
        let config = SelectionConfig::default();
        let set = all_columns(&SelectionScope::group(&table, ["g"]), true).unwrap();

        let pivot = PivotReference::name("n").resolve(&set, &config).unwrap();
        assert_eq!(matching(&pivot, &set), vec!["n"]);
    }

    #[test]
    fn test_absolute_pivot_with_removed_paths() {
        let table = table();
        let config = SelectionConfig::default();
        let set = all_columns(&SelectionScope::group(&table, ["g"]), true).unwrap();

        let path = PivotReference::path(ColumnPath::from(["g", "m"]))
            .resolve(&set, &config)
            .unwrap();
        let dotted = PivotReference::dotted("g.n").resolve(&set, &config).unwrap();
        let group_itself = PivotReference::name("g").resolve(&set, &config).unwrap();

        assert_eq!(matching(&path, &set), vec!["m"]);
        assert_eq!(matching(&dotted, &set), vec!["n"]);
        assert!(matching(&group_itself, &set).is_empty());
    }

    #[test]
    fn test_root_scope_matches_absolute_only() {
        let table = table();
        let config = SelectionConfig::default();
        let set = all_columns(&SelectionScope::root(&table), false).unwrap();

        let pivot = PivotReference::name("m").resolve(&set, &config).unwrap();
        assert!(matching(&pivot, &set).is_empty());

        let pivot = PivotReference::name("y").resolve(&set, &config).unwrap();
        assert_eq!(matching(&pivot, &set), vec!["y"]);
    }

    #[test]
    fn test_name_is_not_split() {
        let table = Table::new(vec![ColumnSchema::leaf("a.b"), ColumnSchema::leaf("c")]);
        let config = SelectionConfig::default();
        let set = all_columns(&SelectionScope::root(&table), false).unwrap();

        let literal = PivotReference::name("a.b").resolve(&set, &config).unwrap();
        let dotted = PivotReference::dotted("a.b").resolve(&set, &config).unwrap();

        assert_eq!(matching(&literal, &set), vec!["a.b"]);
        assert!(matching(&dotted, &set).is_empty());
    }

    #[test]
    fn test_malformed_dotted_pivot_fails() {
        let table = table();
        let set = all_columns(&SelectionScope::root(&table), false).unwrap();
        let err = PivotReference::dotted("g..m")
            .resolve(&set, &SelectionConfig::default())
            .unwrap_err();
        assert!(matches!(err, ColselError::Path(PathError::EmptySegment { .. })));
    }

    #[test]
    fn test_accessor_pivot() {
        let table = table();
        let set = all_columns(&SelectionScope::group(&table, ["g"]), false).unwrap();
        let accessor: ColumnAccessor<i64> = ColumnAccessor::new(["g", "n"]);

        let pivot = PivotReference::from(&accessor)
            .resolve(&set, &SelectionConfig::default())
            .unwrap();
        assert_eq!(matching(&pivot, &set), vec!["g.n"]);
    }

    #[test]
    fn test_selector_pivot_resolves_against_scope() {
        let table = table();
        let set = all_columns(&SelectionScope::group(&table, ["g"]), false).unwrap();

        let last = PivotReference::selector(|cols| cols.last().map(|c| c.path().clone()));
        let pivot = last.resolve(&set, &SelectionConfig::default()).unwrap();
        assert_eq!(matching(&pivot, &set), vec!["g.n"]);

        let none = PivotReference::selector(|_| None);
        let pivot = none.resolve(&set, &SelectionConfig::default()).unwrap();
        assert!(matches!(pivot, Pivot::Nothing));
        assert!(matching(&pivot, &set).is_empty());
    }

    #[test]
    fn test_filter_pivot() {
        let table = table();
        let set = all_columns(&SelectionScope::root(&table), false).unwrap();

        let groups = PivotReference::filter(|c| c.is_group());
        let pivot = groups.resolve(&set, &SelectionConfig::default()).unwrap();
        assert_eq!(matching(&pivot, &set), vec!["g"]);
    }

    #[test]
    fn test_debug_hides_closures() {
        let reference = PivotReference::filter(|_| true);
        assert_eq!(format!("{:?}", reference), "Filter(..)");
        assert_eq!(
            format!("{:?}", PivotReference::name("a")),
            "Name(\"a\")"
        );
    }
}
