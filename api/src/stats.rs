/// NBA stats API raw wire types — every endpoint answers with tabular result sets.
/// Rows are positional; `Row` gives access by header name.
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(default)]
    pub result_sets: Vec<ResultSet>,
}

impl StatsResponse {
    /// The first result set; every endpoint used here puts its payload there.
    pub fn into_primary(self) -> ResultSet {
        self.result_sets.into_iter().next().unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct ResultSet {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default, rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn new(headers: &[&str], row_set: Vec<Vec<Value>>) -> Self {
        Self {
            name: String::new(),
            headers: headers.iter().map(|h| (*h).to_owned()).collect(),
            row_set,
        }
    }

    pub fn len(&self) -> usize {
        self.row_set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_set.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.row_set.iter().map(|values| Row {
            headers: &self.headers,
            values,
        })
    }

    pub fn first_row(&self) -> Option<Row<'_>> {
        self.rows().next()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a [String],
    values: &'a [Value],
}

impl<'a> Row<'a> {
    /// Value under `column`; missing columns and JSON nulls both read as `None`.
    pub fn get(&self, column: &str) -> Option<&'a Value> {
        self.headers
            .iter()
            .position(|h| h == column)
            .and_then(|i| self.values.get(i))
            .filter(|v| !v.is_null())
    }

    /// Text value. Numbers are rendered, since the provider is loose about
    /// which columns come back quoted.
    pub fn text(&self, column: &str) -> Option<String> {
        match self.get(column)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn float(&self, column: &str) -> Option<f64> {
        match self.get(column)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn unsigned(&self, column: &str) -> Option<u64> {
        match self.get(column)? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
