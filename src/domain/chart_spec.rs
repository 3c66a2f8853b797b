use serde::Serialize;

/// Chart.js-shaped chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub data: Vec<f64>,
    pub background_color: Colors,
    pub border_color: Colors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Colors {
    Single(&'static str),
    PerPoint(Vec<&'static str>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: ChartPlugins,
}

impl ChartOptions {
    pub fn titled(text: &'static str) -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: ChartPlugins {
                title: ChartTitle {
                    display: true,
                    text,
                },
            },
        }
    }

    pub fn title(&self) -> &'static str {
        self.plugins.title.text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPlugins {
    pub title: ChartTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartTitle {
    pub display: bool,
    pub text: &'static str,
}
