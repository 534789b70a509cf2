//! Suffix-based filter DSL for list and count endpoints
//!
//! Query parameters like `dealerName.equals=X` or `year.greaterThan=2020`
//! are collected into typed per-field filters. Each entity assembles its
//! criteria struct from the raw query pairs in `criteria.rs`; the storage
//! layer translates the filters into SQL predicates.

use std::str::FromStr;

/// Filter operators recognized as parameter suffixes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Equals,
    NotEquals,
    In,
    NotIn,
    Specified,
    Contains,
    DoesNotContain,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl FilterOp {
    /// Parse the suffix after the last `.` of a parameter name
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "equals" => Some(Self::Equals),
            "notEquals" => Some(Self::NotEquals),
            "in" => Some(Self::In),
            "notIn" => Some(Self::NotIn),
            "specified" => Some(Self::Specified),
            "contains" => Some(Self::Contains),
            "doesNotContain" => Some(Self::DoesNotContain),
            "greaterThan" => Some(Self::GreaterThan),
            "greaterThanOrEqual" => Some(Self::GreaterThanOrEqual),
            "lessThan" => Some(Self::LessThan),
            "lessThanOrEqual" => Some(Self::LessThanOrEqual),
            _ => None,
        }
    }
}

/// Filter over a string column
#[derive(Debug, Clone, Default)]
pub struct StringFilter {
    pub equals: Option<String>,
    pub not_equals: Option<String>,
    pub r#in: Option<Vec<String>>,
    pub not_in: Option<Vec<String>>,
    pub specified: Option<bool>,
    pub contains: Option<String>,
    pub does_not_contain: Option<String>,
}

impl StringFilter {
    /// Fold one `(op, value)` pair into the filter; unrecognized
    /// combinations are ignored, matching the original binder behavior.
    pub fn absorb(&mut self, op: FilterOp, value: &str) {
        match op {
            FilterOp::Equals => self.equals = Some(value.to_string()),
            FilterOp::NotEquals => self.not_equals = Some(value.to_string()),
            FilterOp::In => push_all(&mut self.r#in, split_values(value)),
            FilterOp::NotIn => push_all(&mut self.not_in, split_values(value)),
            FilterOp::Specified => self.specified = value.parse().ok(),
            FilterOp::Contains => self.contains = Some(value.to_string()),
            FilterOp::DoesNotContain => self.does_not_contain = Some(value.to_string()),
            _ => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        self.equals.is_none()
            && self.not_equals.is_none()
            && self.r#in.is_none()
            && self.not_in.is_none()
            && self.specified.is_none()
            && self.contains.is_none()
            && self.does_not_contain.is_none()
    }
}

/// Filter over an ordered column (integers, decimals, dates, timestamps)
#[derive(Debug, Clone)]
pub struct RangeFilter<T> {
    pub equals: Option<T>,
    pub not_equals: Option<T>,
    pub r#in: Option<Vec<T>>,
    pub not_in: Option<Vec<T>>,
    pub specified: Option<bool>,
    pub greater_than: Option<T>,
    pub greater_than_or_equal: Option<T>,
    pub less_than: Option<T>,
    pub less_than_or_equal: Option<T>,
}

impl<T> Default for RangeFilter<T> {
    fn default() -> Self {
        Self {
            equals: None,
            not_equals: None,
            r#in: None,
            not_in: None,
            specified: None,
            greater_than: None,
            greater_than_or_equal: None,
            less_than: None,
            less_than_or_equal: None,
        }
    }
}

impl<T: FromStr> RangeFilter<T> {
    /// Fold one `(op, value)` pair into the filter; unparseable values
    /// are dropped silently.
    pub fn absorb(&mut self, op: FilterOp, value: &str) {
        match op {
            FilterOp::Equals => self.equals = value.parse().ok(),
            FilterOp::NotEquals => self.not_equals = value.parse().ok(),
            FilterOp::In => push_all(
                &mut self.r#in,
                split_values(value).iter().filter_map(|v| v.parse().ok()).collect(),
            ),
            FilterOp::NotIn => push_all(
                &mut self.not_in,
                split_values(value).iter().filter_map(|v| v.parse().ok()).collect(),
            ),
            FilterOp::Specified => self.specified = value.parse().ok(),
            FilterOp::GreaterThan => self.greater_than = value.parse().ok(),
            FilterOp::GreaterThanOrEqual => self.greater_than_or_equal = value.parse().ok(),
            FilterOp::LessThan => self.less_than = value.parse().ok(),
            FilterOp::LessThanOrEqual => self.less_than_or_equal = value.parse().ok(),
            _ => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        self.equals.is_none()
            && self.not_equals.is_none()
            && self.r#in.is_none()
            && self.not_in.is_none()
            && self.specified.is_none()
            && self.greater_than.is_none()
            && self.greater_than_or_equal.is_none()
            && self.less_than.is_none()
            && self.less_than_or_equal.is_none()
    }
}

/// Filter over a boolean column
#[derive(Debug, Clone, Default)]
pub struct BooleanFilter {
    pub equals: Option<bool>,
    pub not_equals: Option<bool>,
    pub specified: Option<bool>,
}

impl BooleanFilter {
    pub fn absorb(&mut self, op: FilterOp, value: &str) {
        match op {
            FilterOp::Equals => self.equals = value.parse().ok(),
            FilterOp::NotEquals => self.not_equals = value.parse().ok(),
            FilterOp::Specified => self.specified = value.parse().ok(),
            _ => {}
        }
    }
}

/// `.in`/`.notIn` values may be comma-separated within one parameter
fn split_values(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn push_all<T>(slot: &mut Option<Vec<T>>, values: Vec<T>) {
    slot.get_or_insert_with(Vec::new).extend(values);
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Parsed `sort=field,(asc|desc)` parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            field: "id".to_string(),
            direction: SortDirection::Asc,
        }
    }
}

/// Pagination and sorting extracted from the query string
#[derive(Debug, Clone)]
pub struct Page {
    /// Zero-based page number
    pub number: u64,
    pub size: u64,
    pub sort: Sort,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            number: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Sort::default(),
        }
    }
}

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 1000;

impl Page {
    /// Pull `page`, `size`, and `sort` out of raw query pairs
    pub fn from_params(pairs: &[(String, String)]) -> Self {
        let mut page = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" => {
                    if let Ok(n) = value.parse() {
                        page.number = n;
                    }
                }
                "size" => {
                    if let Ok(n) = value.parse::<u64>() {
                        page.size = n.min(MAX_PAGE_SIZE).max(1);
                    }
                }
                "sort" => {
                    let mut parts = value.splitn(2, ',');
                    let field = parts.next().unwrap_or("id").trim();
                    if !field.is_empty() {
                        page.sort.field = field.to_string();
                    }
                    page.sort.direction = match parts.next().map(str::trim) {
                        Some("desc") => SortDirection::Desc,
                        _ => SortDirection::Asc,
                    };
                }
                _ => {}
            }
        }
        page
    }

    pub fn offset(&self) -> u64 {
        self.number * self.size
    }
}

/// Split a parameter name into `(field, op)`; returns `None` when the
/// name carries no recognized operator suffix.
pub fn split_param(key: &str) -> Option<(&str, FilterOp)> {
    let (field, suffix) = key.rsplit_once('.')?;
    let op = FilterOp::from_suffix(suffix)?;
    if field.is_empty() {
        return None;
    }
    Some((field, op))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn splits_field_and_operator() {
        let (field, op) = split_param("dealerName.equals").unwrap();
        assert_eq!(field, "dealerName");
        assert_eq!(op, FilterOp::Equals);

        assert!(split_param("dealerName").is_none());
        assert!(split_param("dealerName.bogus").is_none());
        assert!(split_param(".equals").is_none());
    }

    #[test]
    fn string_filter_absorbs_in_values() {
        let mut f = StringFilter::default();
        f.absorb(FilterOp::In, "A,B");
        f.absorb(FilterOp::In, "C");
        assert_eq!(
            f.r#in.as_deref(),
            Some(&["A".to_string(), "B".to_string(), "C".to_string()][..])
        );
    }

    #[test]
    fn range_filter_drops_unparseable_values() {
        let mut f = RangeFilter::<i32>::default();
        f.absorb(FilterOp::GreaterThan, "not-a-number");
        assert!(f.greater_than.is_none());
        f.absorb(FilterOp::GreaterThan, "2020");
        assert_eq!(f.greater_than, Some(2020));
    }

    #[test]
    fn page_parses_sort_and_caps_size() {
        let page = Page::from_params(&pairs(&[
            ("page", "2"),
            ("size", "5000"),
            ("sort", "dealNumber,desc"),
        ]));
        assert_eq!(page.number, 2);
        assert_eq!(page.size, MAX_PAGE_SIZE);
        assert_eq!(page.sort.field, "dealNumber");
        assert_eq!(page.sort.direction, SortDirection::Desc);
        assert_eq!(page.offset(), 2 * MAX_PAGE_SIZE);
    }

    #[test]
    fn page_defaults() {
        let page = Page::from_params(&[]);
        assert_eq!(page.number, 0);
        assert_eq!(page.size, DEFAULT_PAGE_SIZE);
        assert_eq!(page.sort, Sort::default());
    }
}
