//! High-quality visualization using Plotters
//!
//! Renders the raw series and the four-panel decomposition to PNG or SVG.
//! The x axis is a calendar-date axis; undefined points become gaps.

#[cfg(feature = "visualization")]
pub use self::backend::{
    plot_decomposition_png, plot_decomposition_svg, plot_series_png, plot_series_svg,
};

/// Backend module for implementing plotters-based visualization
#[cfg(feature = "visualization")]
pub mod backend {
    use crate::error::Result;
    use crate::time_series::{Component, Decomposition, TimeSeries};
    use crate::vis::config::PlotSettings;
    use crate::vis::{defined_runs, value_bounds};
    use chrono::{Duration, NaiveDate};
    use plotters::coord::Shift;
    use plotters::prelude::*;
    use std::ops::Range;
    use std::path::Path;

    /// Plot the series as a line chart to PNG
    pub fn plot_series_png<P: AsRef<Path>>(
        series: &TimeSeries,
        path: P,
        settings: &PlotSettings,
    ) -> Result<()> {
        let root = BitMapBackend::new(path.as_ref(), (settings.width, settings.height))
            .into_drawing_area();
        draw_series_chart(&root, series, settings)?;
        root.present()?;
        Ok(())
    }

    /// Plot the series as a line chart to SVG
    pub fn plot_series_svg<P: AsRef<Path>>(
        series: &TimeSeries,
        path: P,
        settings: &PlotSettings,
    ) -> Result<()> {
        let root =
            SVGBackend::new(path.as_ref(), (settings.width, settings.height)).into_drawing_area();
        draw_series_chart(&root, series, settings)?;
        root.present()?;
        Ok(())
    }

    /// Plot the four decomposition panels to PNG
    pub fn plot_decomposition_png<P: AsRef<Path>>(
        decomposition: &Decomposition,
        path: P,
        settings: &PlotSettings,
    ) -> Result<()> {
        let root = BitMapBackend::new(path.as_ref(), (settings.width, settings.height))
            .into_drawing_area();
        draw_decomposition(&root, decomposition, settings)?;
        root.present()?;
        Ok(())
    }

    /// Plot the four decomposition panels to SVG
    pub fn plot_decomposition_svg<P: AsRef<Path>>(
        decomposition: &Decomposition,
        path: P,
        settings: &PlotSettings,
    ) -> Result<()> {
        let root =
            SVGBackend::new(path.as_ref(), (settings.width, settings.height)).into_drawing_area();
        draw_decomposition(&root, decomposition, settings)?;
        root.present()?;
        Ok(())
    }

    fn draw_series_chart<DB>(
        root: &DrawingArea<DB, Shift>,
        series: &TimeSeries,
        settings: &PlotSettings,
    ) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;

        let values: Vec<Option<f64>> = series.values().iter().copied().map(Some).collect();
        draw_panel(
            root,
            &settings.title,
            &settings.x_label,
            &settings.y_label,
            series.dates(),
            &values,
            settings,
        )
    }

    fn draw_decomposition<DB>(
        root: &DrawingArea<DB, Shift>,
        decomposition: &Decomposition,
        settings: &PlotSettings,
    ) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;
        let root = root.titled(&settings.title, ("sans-serif", 30).into_font())?;

        let panels = root.split_evenly((Component::ALL.len(), 1));
        for (panel, component) in panels.iter().zip(Component::ALL) {
            draw_panel(
                panel,
                component.title(),
                &settings.x_label,
                &settings.y_label,
                decomposition.index().as_slice(),
                &decomposition.component(component),
                settings,
            )?;
        }

        Ok(())
    }

    /// Draw one titled line panel sharing the series' date axis
    fn draw_panel<DB>(
        area: &DrawingArea<DB, Shift>,
        caption: &str,
        x_desc: &str,
        y_desc: &str,
        dates: &[NaiveDate],
        values: &[Option<f64>],
        settings: &PlotSettings,
    ) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let (y_min, y_max) = value_bounds(values);
        let date_fmt = |d: &NaiveDate| d.format("%Y-%m").to_string();

        let mut chart = ChartBuilder::on(area)
            .caption(caption, ("sans-serif", 24).into_font())
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(date_span(dates), y_min..y_max)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(x_desc)
            .y_desc(y_desc)
            .x_label_formatter(&date_fmt);
        if !settings.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        let (r, g, b) = settings.line_color;
        let color = RGBColor(r, g, b);
        for run in defined_runs(values) {
            chart.draw_series(LineSeries::new(
                run.into_iter().map(|(i, v)| (dates[i], v)),
                color,
            ))?;
        }

        Ok(())
    }

    /// X range covering every date, widened to one day for single-point series
    fn date_span(dates: &[NaiveDate]) -> Range<NaiveDate> {
        let start = dates.first().copied().unwrap_or_default();
        let end = dates.last().copied().unwrap_or(start);
        if end > start {
            start..end
        } else {
            start..start + Duration::days(1)
        }
    }
}
