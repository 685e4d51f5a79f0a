use ndarray::ArrayView2;
use plotly::{
    Layout, Plot, Scatter3D,
    color::Rgb,
    common::{ColorScale, ColorScalePalette, Line, Marker, Mode},
    layout::{Axis, LayoutScene, themes::PLOTLY_DARK},
};

const BACKGROUND: (u8, u8, u8) = (20, 20, 20);
const ZERO_LINE: (u8, u8, u8) = (50, 50, 50);

fn scene_axis() -> Axis {
    let (r, g, b) = ZERO_LINE;
    Axis::new().show_grid(false).zero_line_color(Rgb::new(r, g, b))
}

/// 3-D line plot of `points` (rows of x, y, z), coloured by z on a dark background.
///
/// Pass a [`crate::trajectory::Trajectory::prefix`] or one of its frames to
/// draw a partial path.
pub fn plot_trajectory(points: ArrayView2<f64>) -> Plot {
    let x = points.column(0).to_vec();
    let y = points.column(1).to_vec();
    let z = points.column(2).to_vec();

    let trace = Scatter3D::new(x, y, z.clone())
        .name("lorenz")
        .mode(Mode::LinesMarkers)
        .line(Line::new().width(1.8))
        .marker(
            Marker::new()
                .size(1)
                .color_array(z)
                .color_scale(ColorScale::Palette(ColorScalePalette::Viridis))
                .show_scale(false),
        );

    let (r, g, b) = BACKGROUND;
    let layout = Layout::new()
        .template(&*PLOTLY_DARK)
        .paper_background_color(Rgb::new(r, g, b))
        .scene(
            LayoutScene::new()
                .x_axis(scene_axis())
                .y_axis(scene_axis())
                .z_axis(scene_axis()),
        );

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

pub fn show_trajectory(points: ArrayView2<f64>) {
    plot_trajectory(points).show();
}
