use eframe::egui::{Align2, Color32, FontId, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot};

use crate::color;
use crate::data::stats::{ComparativeCounts, DashboardCounts, FrequencyCount, PairedFrequencyCount};
use crate::state::{AppState, ComparisonMode};

// ---------------------------------------------------------------------------
// Central panel – the 2×2 chart grid
// ---------------------------------------------------------------------------

/// Render the dashboard for the active comparison mode.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a dataset to begin  (File → Open…)");
        });
        return;
    }

    match state.mode {
        ComparisonMode::None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label("Select a comparison type to view the dashboards.");
            });
        }
        ComparisonMode::SingleMonth => {
            let (Some(counts), Some(month)) = (&state.single, &state.selected_month) else {
                return;
            };
            let category = state.selected_category.as_deref().unwrap_or("All");
            ui.heading(format!("Trends for {month} - {category}"));
            ui.add_space(4.0);
            single_grid(ui, counts);
        }
        ComparisonMode::Comparative => {
            let Some(counts) = &state.comparative else {
                return;
            };
            ui.heading(format!(
                "Comparing {} and {}",
                counts.categories.label_a, counts.categories.label_b
            ));
            ui.add_space(4.0);
            comparative_grid(ui, counts);
        }
    }
}

fn single_grid(ui: &mut Ui, counts: &DashboardCounts) {
    let cell = cell_size(ui);
    ui.horizontal(|ui: &mut Ui| {
        bar_chart(
            ui,
            "category_bar",
            "Number of Stories by Category",
            &counts.categories,
            cell,
            false,
        );
        pie_chart(ui, "Tonality Distribution", &counts.tonality, cell);
    });
    ui.horizontal(|ui: &mut Ui| {
        bar_chart(
            ui,
            "media_type_bar",
            "Media Type Distribution",
            &counts.media_types,
            cell,
            false,
        );
        bar_chart(
            ui,
            "top_themes_bar",
            "Top 10 Themes",
            &counts.top_themes,
            cell,
            true,
        );
    });
}

fn comparative_grid(ui: &mut Ui, counts: &ComparativeCounts) {
    let cell = cell_size(ui);
    ui.horizontal(|ui: &mut Ui| {
        grouped_bar_chart(
            ui,
            "category_compare",
            "Number of Stories by Category",
            &counts.categories,
            cell,
            false,
        );
        grouped_bar_chart(
            ui,
            "tonality_compare",
            "Tonality Distribution",
            &counts.tonality,
            cell,
            false,
        );
    });
    ui.horizontal(|ui: &mut Ui| {
        grouped_bar_chart(
            ui,
            "media_type_compare",
            "Media Type Distribution",
            &counts.media_types,
            cell,
            false,
        );
        grouped_bar_chart(
            ui,
            "top_themes_compare",
            "Top 10 Themes",
            &counts.top_themes,
            cell,
            true,
        );
    });
}

fn cell_size(ui: &Ui) -> Vec2 {
    Vec2::new(
        (ui.available_width() / 2.0 - 12.0).max(160.0),
        (ui.available_height() / 2.0 - 16.0).max(140.0),
    )
}

// ---------------------------------------------------------------------------
// Bar charts
// ---------------------------------------------------------------------------

/// One labelled value axis: bar index → category label, non-integers blank.
fn index_labels(labels: Vec<String>) -> impl Fn(GridMark, &std::ops::RangeInclusive<f64>) -> String {
    move |mark, _range| {
        let rounded = mark.value.round();
        if (mark.value - rounded).abs() > 1e-6 || rounded < 0.0 {
            return String::new();
        }
        labels.get(rounded as usize).cloned().unwrap_or_default()
    }
}

fn bar_chart(
    ui: &mut Ui,
    id: &str,
    title: &str,
    counts: &FrequencyCount,
    size: Vec2,
    horizontal: bool,
) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(title).strong());

        let bars: Vec<Bar> = counts
            .entries
            .iter()
            .enumerate()
            .map(|(i, (value, count))| {
                Bar::new(i as f64, *count as f64)
                    .width(0.6)
                    .name(value)
                    .fill(color::bar_color(i))
            })
            .collect();
        let labels: Vec<String> = counts.entries.iter().map(|(v, _)| v.clone()).collect();

        let mut chart = BarChart::new(bars);
        if horizontal {
            chart = chart.horizontal();
        }

        let mut plot = Plot::new(id.to_string())
            .width(size.x)
            .height(size.y - 24.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false);
        plot = if horizontal {
            plot.y_axis_formatter(index_labels(labels))
                .x_axis_label("Number of Stories")
        } else {
            plot.x_axis_formatter(index_labels(labels))
                .y_axis_label("Number of Stories")
        };

        plot.show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
    });
}

fn grouped_bar_chart(
    ui: &mut Ui,
    id: &str,
    title: &str,
    paired: &PairedFrequencyCount,
    size: Vec2,
    horizontal: bool,
) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(title).strong());

        let mut bars_a = Vec::with_capacity(paired.len());
        let mut bars_b = Vec::with_capacity(paired.len());
        for (i, (value, a, b)) in paired.entries.iter().enumerate() {
            bars_a.push(
                Bar::new(i as f64 - 0.2, *a as f64)
                    .width(0.35)
                    .name(value)
                    .fill(color::COMPARE_A),
            );
            bars_b.push(
                Bar::new(i as f64 + 0.2, *b as f64)
                    .width(0.35)
                    .name(value)
                    .fill(color::COMPARE_B),
            );
        }
        let labels: Vec<String> = paired.entries.iter().map(|(v, _, _)| v.clone()).collect();

        let mut chart_a = BarChart::new(bars_a)
            .name(&paired.label_a)
            .color(color::COMPARE_A);
        let mut chart_b = BarChart::new(bars_b)
            .name(&paired.label_b)
            .color(color::COMPARE_B);
        if horizontal {
            chart_a = chart_a.horizontal();
            chart_b = chart_b.horizontal();
        }

        let mut plot = Plot::new(id.to_string())
            .width(size.x)
            .height(size.y - 24.0)
            .legend(Legend::default())
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false);
        plot = if horizontal {
            plot.y_axis_formatter(index_labels(labels))
                .x_axis_label("Number of Stories")
        } else {
            plot.x_axis_formatter(index_labels(labels))
                .y_axis_label("Number of Stories")
        };

        plot.show(ui, |plot_ui| {
            plot_ui.bar_chart(chart_a);
            plot_ui.bar_chart(chart_b);
        });
    });
}

// ---------------------------------------------------------------------------
// Donut pie
// ---------------------------------------------------------------------------

fn pie_chart(ui: &mut Ui, title: &str, counts: &FrequencyCount, size: Vec2) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(title).strong());

        let (rect, _) =
            ui.allocate_exact_size(Vec2::new(size.x, size.y - 24.0), Sense::hover());
        let painter = ui.painter_at(rect);

        let total = counts.total();
        if total == 0 {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "No stories in view",
                FontId::proportional(14.0),
                ui.visuals().weak_text_color(),
            );
            return;
        }

        let center = rect.center();
        let radius = rect.width().min(rect.height()) * 0.32;
        let colors = color::pastel_palette(counts.len());

        // Start at 12 o'clock, like the wedges on a clock face.
        let mut start = -std::f32::consts::FRAC_PI_2;
        for (i, (value, count)) in counts.entries.iter().enumerate() {
            let frac = *count as f32 / total as f32;
            let sweep = frac * std::f32::consts::TAU;

            // Wedges wider than a half-turn are not convex; draw a triangle
            // fan of small segments instead of one polygon.
            let steps = ((sweep / 0.05).ceil() as usize).max(1);
            let mut prev = arc_point(center, radius, start);
            for step in 1..=steps {
                let angle = start + sweep * step as f32 / steps as f32;
                let next = arc_point(center, radius, angle);
                painter.add(Shape::convex_polygon(
                    vec![center, prev, next],
                    colors[i],
                    Stroke::NONE,
                ));
                prev = next;
            }

            let mid = start + sweep / 2.0;
            painter.text(
                arc_point(center, radius * 1.25, mid),
                Align2::CENTER_CENTER,
                value,
                FontId::proportional(12.0),
                ui.visuals().text_color(),
            );
            painter.text(
                arc_point(center, radius * 0.8, mid),
                Align2::CENTER_CENTER,
                format!("{:.1}%", frac * 100.0),
                FontId::proportional(11.0),
                Color32::from_gray(60),
            );

            start += sweep;
        }

        // Hollow out the middle to make it a donut.
        painter.circle_filled(center, radius * 0.55, ui.visuals().panel_fill);
    });
}

fn arc_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    Pos2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}
