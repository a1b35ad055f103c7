//! Charts — temperature and pressure line charts built from a
//! [`SensorSummary`].

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;

use crate::sensor_log::{FieldSeries, SensorSummary};

/// Field holding the sample time of each reading.
pub const TIME_FIELD: &str = "time";
/// Field plotted on the temperature chart.
pub const TEMPERATURE_FIELD: &str = "temperature_C";
/// Field plotted on the pressure chart.
pub const PRESSURE_FIELD: &str = "pressure_BAR";

/// One sample of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: String,
    pub y: f64,
}

/// One line: all samples of one device id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub color: String,
    pub points: Vec<Point>,
}

/// A line chart with a shared label axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Both charts of one sensor model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelCharts {
    pub model: String,
    pub temperature: LineChart,
    pub pressure: LineChart,
}

/// Build the charts of every model in `summary`, in model order.
#[must_use]
pub fn build_charts(summary: &SensorSummary) -> Vec<ModelCharts> {
    summary
        .models()
        .map(|(model, devices)| {
            let mut labels = BTreeSet::new();
            let mut temperature = Vec::new();
            let mut pressure = Vec::new();

            for (id, fields) in devices {
                let times: Vec<String> = fields
                    .get(TIME_FIELD)
                    .map(|values| values.iter().map(label).collect())
                    .unwrap_or_default();
                labels.extend(times.iter().cloned());
                temperature.push(dataset(id, &times, fields, TEMPERATURE_FIELD));
                pressure.push(dataset(id, &times, fields, PRESSURE_FIELD));
            }

            let labels: Vec<String> = labels.into_iter().collect();
            ModelCharts {
                model: model.to_string(),
                temperature: LineChart {
                    title: format!("{model} - Temperature"),
                    labels: labels.clone(),
                    datasets: temperature,
                },
                pressure: LineChart {
                    title: format!("{model} - Pressure"),
                    labels,
                    datasets: pressure,
                },
            }
        })
        .collect()
}

fn dataset(id: &str, times: &[String], fields: &FieldSeries, field: &str) -> Dataset {
    let values = fields.get(field);
    let points = times
        .iter()
        .enumerate()
        .map(|(i, x)| Point {
            x: x.clone(),
            y: values.and_then(|v| v.get(i)).and_then(number).unwrap_or(0.0),
        })
        .collect();
    Dataset {
        label: id.to_string(),
        color: format!("#{id}"),
        points,
    }
}

fn label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl LineChart {
    /// Smallest and largest y over all datasets, widened when flat.
    #[must_use]
    pub fn y_range(&self) -> (f64, f64) {
        let mut ys = self
            .datasets
            .iter()
            .flat_map(|d| d.points.iter().map(|p| p.y));
        let Some(first) = ys.next() else {
            return (0.0, 1.0);
        };
        let (min, max) = ys.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
        if (max - min).abs() < f64::EPSILON {
            (min - 1.0, max + 1.0)
        } else {
            (min, max)
        }
    }

    /// SVG `points` attribute of `dataset` inside a `width` x `height` box.
    ///
    /// x is the position of the point's label on the shared axis, y is
    /// scaled to [`y_range`](Self::y_range) with the minimum at the bottom.
    #[must_use]
    pub fn polyline(&self, dataset: &Dataset, width: f64, height: f64) -> String {
        let (min, max) = self.y_range();
        #[allow(clippy::cast_precision_loss)]
        let step = if self.labels.len() > 1 {
            width / (self.labels.len() - 1) as f64
        } else {
            0.0
        };

        dataset
            .points
            .iter()
            .filter_map(|point| {
                let index = self.labels.iter().position(|l| *l == point.x)?;
                #[allow(clippy::cast_precision_loss)]
                let x = if self.labels.len() > 1 {
                    index as f64 * step
                } else {
                    width / 2.0
                };
                let y = height - (point.y - min) / (max - min) * height;
                Some(format!("{x:.1},{y:.1}"))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
