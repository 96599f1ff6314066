//! Figure descriptions in the shape plotly.js expects (`{data, layout}`).

use super::models::DepthSeries;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<ScatterTrace>,
    pub layout: Layout,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScatterTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub x: Vec<Option<f64>>,
    pub y: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    pub margin: Margin,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorange: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

impl Figure {
    /// Empty depth profile: the measured quantity runs along x and depth
    /// increases downwards.
    pub fn depth_profile(x_title: &str) -> Self {
        Self {
            data: vec![],
            layout: Layout {
                margin: Margin {
                    l: 20,
                    r: 10,
                    t: 35,
                    b: 10,
                },
                xaxis: Axis {
                    title: AxisTitle {
                        text: x_title.to_string(),
                    },
                    autorange: None,
                },
                yaxis: Axis {
                    title: AxisTitle {
                        text: "Elevation".to_string(),
                    },
                    autorange: Some("reversed"),
                },
            },
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: &DepthSeries) -> Self {
        self.data.push(ScatterTrace {
            kind: "scatter",
            mode: "lines",
            x: series.values.clone(),
            y: series.depths.clone(),
        });
        self
    }

    /// JSON for embedding in a page `<script>` block. `</` is escaped so the
    /// payload cannot close the surrounding tag.
    pub fn to_script_json(&self) -> Result<String, serde_json::Error> {
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }
}
