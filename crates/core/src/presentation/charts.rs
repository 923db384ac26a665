use serde::Serialize;

use super::format;
use crate::models::performance::PerformancePoint;
use crate::models::view_model::ViewModel;

/// Slice colours, cycled by index. Shorter than a typical sector list, so
/// colours repeat.
pub const PALETTE: [&str; 6] = ["#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#EC4899"];

/// Stroke of the performance line.
pub const PERFORMANCE_LINE_COLOR: &str = "#3B82F6";

pub const NO_PERFORMANCE_DATA: &str =
    "No performance data available. Add transactions to see your portfolio growth!";
pub const NO_SECTOR_DATA: &str = "No sector data available";

/// Either something to draw or the text to show instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ChartView<T> {
    Ready(T),
    Placeholder { message: &'static str },
}

impl<T> ChartView<T> {
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ChartView::Placeholder { .. })
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            ChartView::Ready(t) => Some(t),
            ChartView::Placeholder { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSeries {
    pub name: &'static str,
    pub color: &'static str,
    pub points: Vec<PerformancePoint>,
}

/// Single portfolio-value series in arrival order.
#[must_use]
pub fn performance_chart(view: &ViewModel) -> ChartView<PerformanceSeries> {
    if view.performance.is_empty() {
        return ChartView::Placeholder {
            message: NO_PERFORMANCE_DATA,
        };
    }
    ChartView::Ready(PerformanceSeries {
        name: "Portfolio Value",
        color: PERFORMANCE_LINE_COLOR,
        points: view.performance.clone(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationSlice {
    pub name: String,
    pub value: f64,
    pub color: &'static str,

    /// Share of the pie's own total, 0–100
    pub percent: f64,
}

impl AllocationSlice {
    /// "Technology: 42.5%"
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}: {:.1}%", self.name, self.percent)
    }

    #[must_use]
    pub fn tooltip(&self) -> String {
        tooltip_value(self.value)
    }
}

/// One slice per sector, in arrival order.
#[must_use]
pub fn allocation_chart(view: &ViewModel) -> ChartView<Vec<AllocationSlice>> {
    let sectors = &view.allocation.by_sector;
    if sectors.is_empty() {
        return ChartView::Placeholder {
            message: NO_SECTOR_DATA,
        };
    }

    let total = view.allocation.total();
    let slices = sectors
        .iter()
        .enumerate()
        .map(|(idx, entry)| AllocationSlice {
            name: entry.name.clone(),
            value: entry.value,
            color: PALETTE[idx % PALETTE.len()],
            percent: if total > 0.0 { entry.value / total * 100.0 } else { 0.0 },
        })
        .collect();
    ChartView::Ready(slices)
}

/// Tooltip text for a chart value.
#[must_use]
pub fn tooltip_value(value: f64) -> String {
    format::dollars(value)
}
