//! Chart generation and rendering for the expense summary.
//!
//! The per-category totals are rendered as an ECharts bar chart: the chart
//! configuration is generated as JSON with a corresponding HTML container and
//! JavaScript initialization code.

use std::collections::BTreeMap;

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger,
    },
    series::bar,
};
use maud::{Markup, PreEscaped, html};

use crate::html::HeadElement;

/// The summary chart with its HTML container ID and ECharts configuration.
pub struct SummaryChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

impl SummaryChart {
    /// Build the expenses-by-category chart from per-category totals.
    pub fn from_category_totals(totals: &BTreeMap<String, f64>) -> Self {
        Self {
            id: "expense-summary-chart",
            options: category_totals_chart(totals).to_string(),
        }
    }
}

/// Renders the HTML container for the summary chart.
pub fn chart_view(chart: &SummaryChart) -> Markup {
    html!(
        div
            id=(chart.id)
            class="w-full min-h-[380px] rounded dark:bg-gray-100"
        {}
    )
}

/// Generates JavaScript initialization code for the summary chart.
///
/// Initializes the ECharts instance with dark mode support and responsive
/// resizing.
pub fn chart_script(chart: &SummaryChart) -> HeadElement {
    let script_content = format!(
        r#"(function() {{
            const chartDom = document.getElementById("{}");
            const chart = echarts.init(chartDom);
            const option = {};
            chart.setOption(option);

            window.addEventListener('resize', chart.resize);

            const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
            const updateTheme = () => {{
                const isDarkMode = darkModeMediaQuery.matches;
                chart.setTheme(isDarkMode ? 'dark' : 'default');
            }}
            darkModeMediaQuery.addEventListener('change', updateTheme);
            updateTheme();
        }})();"#,
        chart.id, chart.options
    );

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

fn category_totals_chart(totals: &BTreeMap<String, f64>) -> Chart {
    let labels: Vec<String> = totals.keys().cloned().collect();
    let values: Vec<f64> = totals.values().copied().collect();

    Chart::new()
        .title(Title::new().text("Expenses by Category"))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(bar::Bar::new().name("Expenses").data(values))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::SummaryChart;

    #[test]
    fn chart_options_contain_category_labels_and_totals() {
        let mut totals = BTreeMap::new();
        totals.insert("Food".to_owned(), 12.5);
        totals.insert("Transport".to_owned(), 4.0);

        let chart = SummaryChart::from_category_totals(&totals);

        assert!(chart.options.contains("Food"), "got {}", chart.options);
        assert!(chart.options.contains("Transport"), "got {}", chart.options);
        assert!(chart.options.contains("12.5"), "got {}", chart.options);
    }
}
