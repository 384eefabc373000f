//! Page Viewer
//! Central panel content for each sidebar page, laid out as titled cards.

use crate::charts::{ChartPlotter, Series};
use egui::{Color32, RichText};
use olympics_dashboard::data::schema::Medal;
use olympics_dashboard::query::{
    AthleteProfile, GenderPoint, MedalTally, SeriesPoint, TallyGrouping, NO_MEDAL,
};
use olympics_dashboard::session::{AthleteView, CountryView, MedalTallyView, OverallView, ViewData};

const CARD_SPACING: f32 = 15.0;
const ACCENT: Color32 = Color32::from_rgb(100, 149, 237);

/// Draw the page for an already dispatched view.
pub fn show(ui: &mut egui::Ui, data: &ViewData) {
    match data {
        ViewData::MedalTally(view) => medal_tally_page(ui, view),
        ViewData::OverallAnalysis(view) => overall_page(ui, view),
        ViewData::CountryWise(view) => country_page(ui, view),
        ViewData::AthleteWise(view) => athlete_page(ui, view),
    }
}

/// Shown in place of a page whose queries failed.
pub fn show_error(ui: &mut egui::Ui, message: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(
            RichText::new(format!("⚠ {message}"))
                .size(16.0)
                .color(Color32::from_rgb(220, 53, 69)),
        );
    });
}

fn heading(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).size(24.0).strong().color(ACCENT));
    ui.add_space(CARD_SPACING);
}

fn card(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .rounding(8.0)
        .stroke(egui::Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .fill(ui.visuals().widgets.noninteractive.bg_fill)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).size(18.0).strong());
            ui.add_space(8.0);
            add_contents(ui);
        });
    ui.add_space(CARD_SPACING);
}

fn medal_tally_page(ui: &mut egui::Ui, view: &MedalTallyView) {
    heading(ui, &view.title);
    let (headers, rows) = tally_table(&view.tally);
    card(ui, "Medals", |ui| {
        ChartPlotter::table(ui, "medal_tally", &headers, &rows);
    });
}

fn overall_page(ui: &mut egui::Ui, view: &OverallView) {
    heading(ui, "Top Statistics");

    let stats = &view.stats;
    egui::Grid::new("top_stats").spacing([40.0, 8.0]).show(ui, |ui| {
        for (label, value) in [
            ("Editions", stats.editions),
            ("Hosts", stats.hosts),
            ("Sports", stats.sports),
        ] {
            stat_cell(ui, label, value);
        }
        ui.end_row();
        for (label, value) in [
            ("Events", stats.events),
            ("Nations", stats.nations),
            ("Athletes", stats.athletes),
        ] {
            stat_cell(ui, label, value);
        }
        ui.end_row();
    });
    ui.add_space(CARD_SPACING);

    for (title, id, points) in [
        ("Participating Nations over the years", "nations_over_time", &view.nations),
        ("Events over the years", "events_over_time", &view.events),
        ("Athletes over the years", "athletes_over_time", &view.athletes),
    ] {
        card(ui, title, |ui| {
            ChartPlotter::line_chart(ui, id, "Count", &[count_series(title, points)]);
        });
    }

    card(ui, "No. of Events over time (every sport)", |ui| {
        if view.events_heatmap.is_empty() {
            ChartPlotter::empty_note(ui, "No events recorded.");
        } else {
            ChartPlotter::heatmap(ui, "events_heatmap", &view.events_heatmap);
        }
    });

    let rows: Vec<Vec<String>> = view
        .top_athletes
        .iter()
        .map(|a| {
            vec![
                a.name.clone(),
                a.medals.to_string(),
                a.sport.clone().unwrap_or_default(),
                a.region.clone().unwrap_or_default(),
            ]
        })
        .collect();
    card(ui, "Most successful Athletes", |ui| {
        ChartPlotter::table(
            ui,
            "top_athletes",
            &["Name", "Medals", "Sport", "Region"],
            &rows,
        );
    });
}

fn stat_cell(ui: &mut egui::Ui, label: &str, value: usize) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).size(14.0).color(Color32::GRAY));
        ui.label(RichText::new(value.to_string()).size(26.0).strong());
    });
}

fn country_page(ui: &mut egui::Ui, view: &CountryView) {
    heading(ui, &format!("{} Analysis", view.country));

    card(ui, &format!("{} Medal Tally over the years", view.country), |ui| {
        if view.yearly_medals.is_empty() {
            ChartPlotter::empty_note(ui, "No medals won.");
        } else {
            let series = count_series("Medals", &view.yearly_medals);
            ChartPlotter::line_chart(ui, "country_medals", "Medals", &[series]);
        }
    });

    card(ui, &format!("{} excels in the following sports", view.country), |ui| {
        match &view.heatmap {
            Some(matrix) => ChartPlotter::heatmap(ui, "country_heatmap", matrix),
            None => ChartPlotter::empty_note(ui, "No medals to break down by sport."),
        }
    });

    let rows: Vec<Vec<String>> = view
        .top_athletes
        .iter()
        .map(|a| {
            vec![
                a.name.clone(),
                a.medals.to_string(),
                a.sport.clone().unwrap_or_default(),
            ]
        })
        .collect();
    card(ui, &format!("Top 10 athletes of {}", view.country), |ui| {
        ChartPlotter::table(ui, "country_athletes", &["Name", "Medals", "Sport"], &rows);
    });
}

fn athlete_page(ui: &mut egui::Ui, view: &AthleteView) {
    heading(ui, "Athlete-wise Analysis");

    card(ui, "Distribution of Age", |ui| {
        ChartPlotter::density_chart(ui, "age_density", &view.age_curves);
    });

    card(ui, "Distribution of Age wrt Sports", |ui| {
        ChartPlotter::density_chart(ui, "sport_age_density", &view.sport_age_curves);
    });

    card(ui, "Height vs Weight", |ui| {
        let groups = scatter_groups(&view.cohort);
        if groups.is_empty() {
            ChartPlotter::empty_note(ui, "No athletes with both height and weight recorded.");
        } else {
            ChartPlotter::scatter_chart(ui, "height_weight", "Weight", "Height", &groups);
        }
    });

    card(ui, "Men vs Women Participation over the Years", |ui| {
        ChartPlotter::line_chart(ui, "men_vs_women", "Athletes", &gender_series(&view.gender));
    });
}

fn count_series(name: &str, points: &[SeriesPoint]) -> Series {
    Series::new(
        name,
        points.iter().map(|p| [p.year as f64, p.count as f64]).collect(),
    )
}

fn tally_table(tally: &MedalTally) -> (Vec<&'static str>, Vec<Vec<String>>) {
    let key = match tally.grouping {
        TallyGrouping::Region => "Region",
        TallyGrouping::Year => "Year",
    };
    let rows = tally
        .rows
        .iter()
        .map(|row| {
            vec![
                row.key.to_string(),
                row.gold.to_string(),
                row.silver.to_string(),
                row.bronze.to_string(),
                row.total.to_string(),
            ]
        })
        .collect();
    (vec![key, "Gold", "Silver", "Bronze", "Total"], rows)
}

/// Weight (x) against height (y), one group per medal outcome. Athletes
/// missing either measurement are left out.
fn scatter_groups(cohort: &[AthleteProfile]) -> Vec<(Series, Color32)> {
    let outcomes = Medal::ALL
        .iter()
        .map(|m| m.as_str())
        .chain(std::iter::once(NO_MEDAL));

    outcomes
        .filter_map(|outcome| {
            let points: Vec<[f64; 2]> = cohort
                .iter()
                .filter(|a| a.medal == outcome)
                .filter_map(|a| Some([a.weight?, a.height?]))
                .collect();
            (!points.is_empty()).then(|| {
                (
                    Series::new(outcome, points),
                    ChartPlotter::medal_color(outcome),
                )
            })
        })
        .collect()
}

fn gender_series(points: &[GenderPoint]) -> [Series; 2] {
    [
        Series::new("Male", points.iter().map(|p| [p.year as f64, p.male as f64]).collect()),
        Series::new("Female", points.iter().map(|p| [p.year as f64, p.female as f64]).collect()),
    ]
}
