//! Field resolution for heterogeneous trend API items
//!
//! Different API versions name the same field differently (`name`,
//! `hashtagName`, `title`, ...). A [`FieldResolver`] is an ordered list of
//! accessors tried in sequence; the first one that yields a non-empty value
//! wins. Missing keys, `null`, empty strings and numeric zero all count as
//! empty, so a later alias can still supply the value.

use serde_json::Value;

/// Accessor extracting one candidate value from a raw item
pub type Accessor<T> = Box<dyn Fn(&Value) -> Option<T> + Send + Sync>;

/// Ordered list of accessors for one logical field
pub struct FieldResolver<T> {
    field: &'static str,
    accessors: Vec<Accessor<T>>,
}

impl<T> FieldResolver<T> {
    /// Create a resolver with no accessors
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            accessors: Vec::new(),
        }
    }

    /// Append an accessor; earlier accessors take priority
    pub fn with_accessor<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&Value) -> Option<T> + Send + Sync + 'static,
    {
        self.accessors.push(Box::new(accessor));
        self
    }

    /// Logical field name, used in logs
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// First value produced by any accessor
    pub fn resolve(&self, item: &Value) -> Option<T> {
        self.accessors.iter().find_map(|accessor| accessor(item))
    }

    /// First value produced by any accessor, or `T::default()`
    pub fn resolve_or_default(&self, item: &Value) -> T
    where
        T: Default,
    {
        self.resolve(item).unwrap_or_default()
    }
}

impl FieldResolver<String> {
    /// Resolver over string aliases, in priority order
    pub fn text_aliases(field: &'static str, aliases: &[&'static str]) -> Self {
        aliases.iter().fold(Self::new(field), |resolver, &key| {
            resolver.with_accessor(move |item| item.get(key).and_then(non_empty_text))
        })
    }
}

impl FieldResolver<f64> {
    /// Resolver over numeric aliases, in priority order
    pub fn number_aliases(field: &'static str, aliases: &[&'static str]) -> Self {
        aliases.iter().fold(Self::new(field), |resolver, &key| {
            resolver.with_accessor(move |item| item.get(key).and_then(non_zero_number))
        })
    }
}

/// Non-empty string, or a number rendered as text
fn non_empty_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Finite non-zero number; numeric strings are accepted
fn non_zero_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    (number.is_finite() && number != 0.0).then_some(number)
}

/// Item fields after alias resolution
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTrendItem {
    pub name: String,
    pub view_count: u64,
    pub video_count: u64,
    pub growth_rate: f64,
}

/// Resolvers for every field of a trend item
pub struct TrendFieldResolvers {
    name: FieldResolver<String>,
    view_count: FieldResolver<f64>,
    video_count: FieldResolver<f64>,
    growth_rate: FieldResolver<f64>,
}

impl Default for TrendFieldResolvers {
    fn default() -> Self {
        Self {
            name: FieldResolver::text_aliases("name", &["name", "hashtagName", "title"]),
            view_count: FieldResolver::number_aliases("viewCount", &["viewCount", "views", "count"]),
            video_count: FieldResolver::number_aliases(
                "videoCount",
                &["videoCount", "videos", "posts"],
            ),
            growth_rate: FieldResolver::number_aliases("growthRate", &["growthRate", "growth"]),
        }
    }
}

impl TrendFieldResolvers {
    /// Resolve every field of one raw item, defaulting to 0 / ""
    pub fn resolve(&self, item: &Value) -> RawTrendItem {
        let item = RawTrendItem {
            name: self.name.resolve_or_default(item),
            view_count: to_count(self.view_count.resolve_or_default(item)),
            video_count: to_count(self.video_count.resolve_or_default(item)),
            growth_rate: self.growth_rate.resolve_or_default(item),
        };

        if item.name.is_empty() {
            tracing::debug!(field = self.name.field(), "Trend item has no name alias");
        }

        item
    }
}

/// Clamp a resolved number into a display count
fn to_count(value: f64) -> u64 {
    if value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_alias_wins() {
        let resolvers = TrendFieldResolvers::default();
        let item = json!({
            "name": "Primary",
            "title": "Secondary",
            "viewCount": 10,
            "views": 20,
        });
        let raw = resolvers.resolve(&item);
        assert_eq!(raw.name, "Primary");
        assert_eq!(raw.view_count, 10);
    }

    #[test]
    fn test_empty_values_fall_through() {
        let resolvers = TrendFieldResolvers::default();
        let item = json!({
            "name": "",
            "hashtagName": null,
            "title": "FromTitle",
            "viewCount": 0,
            "count": 1500,
            "posts": "42",
            "growth": 12.5,
        });
        let raw = resolvers.resolve(&item);
        assert_eq!(raw.name, "FromTitle");
        assert_eq!(raw.view_count, 1500);
        assert_eq!(raw.video_count, 42);
        assert_eq!(raw.growth_rate, 12.5);
    }

    #[test]
    fn test_missing_fields_default() {
        let resolvers = TrendFieldResolvers::default();
        let raw = resolvers.resolve(&json!({"unrelated": true}));
        assert_eq!(raw, RawTrendItem::default());

        // non-object items resolve to defaults too
        let raw = resolvers.resolve(&json!("just a string"));
        assert_eq!(raw, RawTrendItem::default());
    }

    #[test]
    fn test_negative_counts_clamp_to_zero() {
        let resolvers = TrendFieldResolvers::default();
        let raw = resolvers.resolve(&json!({"name": "x", "views": -5, "growthRate": -3}));
        assert_eq!(raw.view_count, 0);
        assert_eq!(raw.growth_rate, -3.0);
    }

    #[test]
    fn test_custom_accessor_order() {
        let resolver = FieldResolver::<String>::new("label")
            .with_accessor(|item| item.pointer("/meta/label").and_then(|v| v.as_str()).map(String::from))
            .with_accessor(|_| Some("fallback".to_string()));

        assert_eq!(
            resolver.resolve(&json!({"meta": {"label": "nested"}})),
            Some("nested".to_string())
        );
        assert_eq!(resolver.resolve(&json!({})), Some("fallback".to_string()));
        assert_eq!(resolver.field(), "label");
    }
}
