use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What a view renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Panel {
    Table {
        title: String,
        columns: Vec<String>,
        rows: Vec<Vec<Value>>,
    },
    Chart {
        title: String,
        figure: Figure,
    },
    Metrics {
        title: String,
        metrics: Vec<MetricItem>,
        #[serde(skip_serializing_if = "Option::is_none")]
        chart: Option<Figure>,
    },
    Details {
        title: String,
        fields: Vec<DetailField>,
    },
    NoData {
        message: String,
    },
}

impl Panel {
    pub fn no_data(message: impl Into<String>) -> Self {
        Panel::NoData {
            message: message.into(),
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Panel::NoData { .. })
    }
}

/// A Plotly figure: traces plus layout, drawn as-is by the browser.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricItem {
    pub label: String,
    pub value: String,
}

impl MetricItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailField {
    pub label: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_panel_is_tagged_by_kind() {
        let panel = Panel::no_data("No Data Available.");
        assert_eq!(
            serde_json::to_value(&panel).unwrap(),
            json!({"kind": "noData", "message": "No Data Available."})
        );

        let panel = Panel::Table {
            title: "AUM".to_string(),
            columns: vec!["Fund Name".to_string()],
            rows: vec![vec![json!("SBI Mutual Fund")]],
        };
        let value = serde_json::to_value(&panel).unwrap();
        assert_eq!(value["kind"], "table");
        assert_eq!(value["rows"][0][0], "SBI Mutual Fund");
    }
}
