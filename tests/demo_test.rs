//! End-to-end tests of plotting and the demonstration driver

use seasonal_ts::config::DemoConfig;
use seasonal_ts::{
    decompose_and_plot, demo, generate_time_series, plot_decomposition, plot_time_series, Error,
    OutputFormat, PlotOutput, PlotSettings,
};
use tempfile::tempdir;

#[test]
fn test_terminal_plots() {
    let ts = generate_time_series("2010-01-01", 120, 30).unwrap();

    plot_time_series(Some(&ts), &PlotOutput::Terminal, &PlotSettings::series_chart()).unwrap();
    let decomposition = decompose_and_plot(
        Some(&ts),
        30,
        &PlotOutput::Terminal,
        &PlotSettings::decomposition_chart(),
    )
    .unwrap();
    assert_eq!(decomposition.period(), 30);
}

#[cfg(feature = "visualization")]
#[test]
fn test_text_rendering_contains_panels() {
    let ts = generate_time_series("2010-01-01", 120, 30).unwrap();
    let decomposition = seasonal_ts::decompose(Some(&ts), 30).unwrap();

    let rendered = seasonal_ts::vis::text::render_decomposition(
        &decomposition,
        &PlotSettings::decomposition_chart(),
    );
    for title in ["Observed", "Trend", "Seasonal", "Residual"] {
        assert!(rendered.contains(&format!("=== {} ===", title)), "missing {}", title);
    }
}

#[test]
fn test_decompose_and_plot_renders_nothing_on_bad_period() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("decomposition.png");
    let ts = generate_time_series("2010-01-01", 400, 365).unwrap();

    // Longer than the series, then one period but not two
    for period in [500, 365] {
        let result = decompose_and_plot(
            Some(&ts),
            period,
            &PlotOutput::Png(path.clone()),
            &PlotSettings::decomposition_chart(),
        );

        assert!(matches!(result, Err(Error::InvalidArgument(_))), "period {}", period);
        assert!(!path.exists());
    }
}

#[test]
fn test_plot_missing_series_renders_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("series.svg");

    let result = plot_time_series(None, &PlotOutput::Svg(path.clone()), &PlotSettings::series_chart());
    assert!(matches!(result, Err(Error::InvalidState(_))));
    assert!(!path.exists());
}

#[cfg(feature = "visualization")]
#[test]
#[ignore = "needs a system sans-serif font for chart text"]
fn test_image_outputs_written() {
    let dir = tempdir().unwrap();
    let ts = generate_time_series("2010-01-01", 1000, 365).unwrap();
    let decomposition = seasonal_ts::decompose(Some(&ts), 365).unwrap();

    for format in [OutputFormat::Png, OutputFormat::Svg] {
        let series_out = PlotOutput::for_format(format, dir.path().join("nested"), "series");
        let decomposition_out = PlotOutput::for_format(format, dir.path(), "decomposition");

        plot_time_series(Some(&ts), &series_out, &PlotSettings::series_chart()).unwrap();
        plot_decomposition(&decomposition, &decomposition_out, &PlotSettings::decomposition_chart())
            .unwrap();

        for out in [series_out, decomposition_out] {
            match out {
                PlotOutput::Png(path) | PlotOutput::Svg(path) => {
                    assert!(path.metadata().unwrap().len() > 0)
                }
                PlotOutput::Terminal => unreachable!(),
            }
        }
    }
}

#[test]
fn test_demo_runs_with_terminal_output() {
    let mut config = DemoConfig::default();
    config.output.format = OutputFormat::Terminal;
    demo::run(&config);
}

#[test]
fn test_demo_survives_every_failure() {
    let mut config = DemoConfig::default();
    config.series.start_date = "not-a-date".to_string();
    config.output.format = OutputFormat::Terminal;
    demo::run(&config);

    let mut config = DemoConfig::default();
    config.series.num_periods = 400;
    config.series.seasonality_period = 365;
    config.output.format = OutputFormat::Terminal;
    demo::run(&config);
}
