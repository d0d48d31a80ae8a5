use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A stocked item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Assigned by storage, never changes
    pub id: i32,
    pub name: String,
    /// Target stock level
    pub desired: i32,
    /// Stock on hand, never negative
    pub actual: i32,
}

impl Item {
    /// Takes one unit out of stock. At zero this is a no-op.
    pub fn withdraw(&mut self) {
        if self.actual > 0 {
            self.actual -= 1;
        }
    }
}

/// Body of create and update requests.
///
/// Missing fields take their zero value, so an update replaces the whole record.
/// Unknown fields, `id` included, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct ItemInput {
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = 10)]
    pub desired: i32,
    #[validate(range(min = 0, message = "actual must not be negative"))]
    #[schema(example = 4, minimum = 0)]
    pub actual: i32,
}

impl From<Item> for ItemInput {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            desired: item.desired,
            actual: item.actual,
        }
    }
}

/// Query string of the list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ItemFilter {
    /// Keep items whose name contains this substring
    #[serde(rename = "filter")]
    pub name: Option<String>,
}

impl ItemFilter {
    pub fn name_contains(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// The substring to match, `None` when absent or empty
    pub fn pattern(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    /// First `filter` value of a query string; repeated keys after it are ignored.
    pub fn from_query_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            name: pairs
                .into_iter()
                .find_map(|(key, value)| (key == "filter").then_some(value)),
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.pattern().is_none_or(|p| item.name.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn item(name: &str, actual: i32) -> Item {
        Item {
            id: 1,
            name: name.to_string(),
            desired: 10,
            actual,
        }
    }

    #[test]
    fn test_withdraw_decrements() {
        let mut widget = item("widget", 2);
        widget.withdraw();
        assert_eq!(widget.actual, 1);
        widget.withdraw();
        assert_eq!(widget.actual, 0);
    }

    #[test]
    fn test_withdraw_floors_at_zero() {
        let mut widget = item("widget", 0);
        for _ in 0..3 {
            widget.withdraw();
        }
        assert_eq!(widget.actual, 0);
        assert_eq!(widget.desired, 10);
    }

    #[test]
    fn test_input_defaults_missing_fields() {
        let input: ItemInput = serde_json::from_str(r#"{"name":"bolt"}"#).unwrap();
        assert_eq!(
            input,
            ItemInput {
                name: "bolt".into(),
                desired: 0,
                actual: 0
            }
        );

        let empty: ItemInput = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ItemInput::default());
    }

    #[test]
    fn test_input_ignores_client_id() {
        let input: ItemInput =
            serde_json::from_str(r#"{"id":99,"name":"nut","desired":3,"actual":1}"#).unwrap();
        assert_eq!(input.name, "nut");
        assert_eq!(input.actual, 1);
    }

    #[test]
    fn test_input_rejects_negative_stock() {
        let input = ItemInput {
            name: "gear".into(),
            desired: 1,
            actual: -1,
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("actual"));
    }

    #[test]
    fn test_input_allows_negative_desired() {
        let input = ItemInput {
            name: "gear".into(),
            desired: -5,
            actual: 0,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_filter_matching() {
        let widget = item("widget", 1);
        assert!(ItemFilter::default().matches(&widget));
        assert!(ItemFilter::name_contains("").matches(&widget));
        assert!(ItemFilter::name_contains("idg").matches(&widget));
        assert!(!ItemFilter::name_contains("Widget").matches(&widget));
        assert!(!ItemFilter::name_contains("gadget").matches(&widget));
    }

    #[test]
    fn test_filter_from_repeated_query_keys() {
        let pairs = [
            ("page".to_string(), "2".to_string()),
            ("filter".to_string(), "bolt".to_string()),
            ("filter".to_string(), "nut".to_string()),
        ];
        assert_eq!(ItemFilter::from_query_pairs(pairs).pattern(), Some("bolt"));
        assert_eq!(ItemFilter::from_query_pairs([]), ItemFilter::default());
    }

    #[test]
    fn test_filter_query_param_name() {
        let filter: ItemFilter = serde_json::from_str(r#"{"filter":"bolt"}"#).unwrap();
        assert_eq!(filter.pattern(), Some("bolt"));
    }
}
