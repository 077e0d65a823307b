use serde_json::Value;
use sqlx::{QueryBuilder, Sqlite};

/// Query filter over the top-level fields of stored documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Filter {
    /// Matches every document.
    #[default]
    All,
    /// Field equals the given string.
    Eq { field: &'static str, value: String },
    /// Any of the fields contains `needle`, ignoring case.
    ///
    /// SQLite `lower()` folds ASCII only, so this is evaluated in
    /// [`Filter::matches`] after the rows are fetched.
    ContainsAny {
        fields: Vec<&'static str>,
        needle: String,
    },
    /// Every inner filter matches.
    And(Vec<Filter>),
}

impl Filter {
    pub fn eq(field: &'static str, value: impl Into<String>) -> Self {
        Filter::Eq {
            field,
            value: value.into(),
        }
    }

    pub fn contains_any(fields: &[&'static str], needle: impl Into<String>) -> Self {
        Filter::ContainsAny {
            fields: fields.to_vec(),
            needle: needle.into(),
        }
    }

    /// Appends this filter as a boolean SQL expression over the `body` column.
    pub(crate) fn push_sql(&self, qb: &mut QueryBuilder<'_, Sqlite>) {
        match self {
            Filter::All => {
                qb.push("1 = 1");
            }
            Filter::Eq { field, value } => {
                qb.push("json_extract(body, ");
                qb.push_bind(json_path(field));
                qb.push(") = ");
                qb.push_bind(value.clone());
            }
            Filter::ContainsAny { fields, .. } => {
                if fields.is_empty() {
                    qb.push("1 = 0");
                } else {
                    qb.push("1 = 1");
                }
            }
            Filter::And(filters) => {
                if filters.is_empty() {
                    qb.push("1 = 1");
                    return;
                }
                qb.push("(");
                for (i, filter) in filters.iter().enumerate() {
                    if i > 0 {
                        qb.push(" AND ");
                    }
                    filter.push_sql(qb);
                }
                qb.push(")");
            }
        }
    }
}

impl Filter {
    /// True if some clause can only be decided by [`Filter::matches`].
    pub(crate) fn needs_row_check(&self) -> bool {
        match self {
            Filter::All | Filter::Eq { .. } => false,
            Filter::ContainsAny { .. } => true,
            Filter::And(filters) => filters.iter().any(Filter::needs_row_check),
        }
    }

    /// Evaluates the filter against a decoded document body.
    pub fn matches(&self, body: &Value) -> bool {
        match self {
            Filter::All => true,
            Filter::Eq { field, value } => body.get(*field).and_then(Value::as_str) == Some(value.as_str()),
            Filter::ContainsAny { fields, needle } => {
                let needle = needle.to_lowercase();
                fields.iter().any(|field| {
                    body.get(*field)
                        .and_then(Value::as_str)
                        .is_some_and(|text| text.to_lowercase().contains(&needle))
                })
            }
            Filter::And(filters) => filters.iter().all(|f| f.matches(body)),
        }
    }
}

fn json_path(field: &str) -> String {
    format!("$.{}", field)
}
