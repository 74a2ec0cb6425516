use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Response from `/plots/{family}/{station}_{family}_de.json`
///
/// The body wraps a Plotly figure. Only the fields the dashboard reads or
/// rewrites are typed; everything else is carried in `extra` so the figure
/// reaches the browser unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotResponse {
    pub plot: Plot,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    pub data: Vec<Series>,
    #[serde(default)]
    pub layout: Layout,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One Plotly trace: a named, time-ordered sequence of (x, y) points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Timestamps as sent upstream (usually ISO 8601 strings)
    #[serde(default)]
    pub x: Vec<Value>,
    /// Values, `null` where the gauge reported nothing. Numeric strings are
    /// accepted; anything else non-numeric reads as `null`.
    #[serde(default, deserialize_with = "lenient_numbers")]
    pub y: Vec<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Plotly hover flags (string or array). A key present with `null` is
    /// `Some(Value::Null)` and counts as declared.
    #[serde(
        default,
        deserialize_with = "declared",
        skip_serializing_if = "Option::is_none"
    )]
    pub hoverinfo: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wrap any present value, `null` included, in `Some`; absent keys fall back to `default`.
fn declared<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn lenient_numbers<'de, D>(deserializer: D) -> Result<Vec<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    Ok(raw
        .iter()
        .map(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok().filter(|f: &f64| f.is_finite()),
            _ => None,
        })
        .collect())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Plot title. Upstream sends either a bare string or a title object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTitle")]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
}

/// Raw representation accepting `"title"` and `{"text": "title", ...}`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawTitle {
    Text(String),
    Object {
        #[serde(default)]
        text: String,
        #[serde(default)]
        font: Option<Font>,
        #[serde(default)]
        x: Option<f64>,
    },
}

impl From<RawTitle> for Title {
    fn from(raw: RawTitle) -> Self {
        match raw {
            RawTitle::Text(text) => Self {
                text,
                font: None,
                x: None,
            },
            RawTitle::Object { text, font, x } => Self { text, font, x },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Font {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Plotly margin; only the top edge is adjusted, other sides pass through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
