//! Sidebar Widget
//! Left side panel with the page menu and the selectors of the current page.

use egui::{Color32, ComboBox, RichText};
use olympics_dashboard::query::Scope;
use olympics_dashboard::session::{Choices, Menu, ViewRequest};
use std::fmt::Display;

const COMBO_WIDTH: f32 = 220.0;

/// Menu choice and every page's selections. Switching pages keeps the
/// selections made on the others.
pub struct Sidebar {
    pub menu: Menu,
    pub tally_year: Scope<i64>,
    pub tally_country: Scope<String>,
    pub overall_sport: Scope<String>,
    pub country: String,
    pub athlete_sport: Scope<String>,
}

impl Sidebar {
    pub fn new(choices: &Choices) -> Self {
        Self {
            menu: Menu::MedalTally,
            tally_year: Scope::Overall,
            tally_country: Scope::Overall,
            overall_sport: Scope::Overall,
            country: choices.regions().next().cloned().unwrap_or_default(),
            athlete_sport: Scope::Overall,
        }
    }

    /// The request matching the current menu and selections.
    pub fn request(&self) -> ViewRequest {
        match self.menu {
            Menu::MedalTally => ViewRequest::MedalTally {
                year: self.tally_year.clone(),
                country: self.tally_country.clone(),
            },
            Menu::OverallAnalysis => ViewRequest::OverallAnalysis {
                sport: self.overall_sport.clone(),
            },
            Menu::CountryWise => ViewRequest::CountryWise {
                country: self.country.clone(),
            },
            Menu::AthleteWise => ViewRequest::AthleteWise {
                sport: self.athlete_sport.clone(),
            },
        }
    }

    /// Draw the sidebar
    pub fn show(&mut self, ui: &mut egui::Ui, choices: &Choices) {
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🏅 Olympics Analysis")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(RichText::new("Select an Option").size(14.0).strong());
        ui.add_space(5.0);
        for menu in Menu::ALL {
            ui.radio_value(&mut self.menu, menu, menu.label());
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        ui.label(RichText::new(self.menu.label()).size(14.0).strong());
        ui.add_space(8.0);

        match self.menu {
            Menu::MedalTally => {
                scope_combo(
                    ui,
                    "Select Year",
                    "tally_year",
                    &mut self.tally_year,
                    &choices.years,
                );
                ui.add_space(5.0);
                scope_combo(
                    ui,
                    "Select Country",
                    "tally_country",
                    &mut self.tally_country,
                    &choices.countries,
                );
            }
            Menu::OverallAnalysis => {
                scope_combo(
                    ui,
                    "Select a Sport",
                    "overall_sport",
                    &mut self.overall_sport,
                    &choices.sports,
                );
            }
            Menu::CountryWise => {
                ui.label("Select a Country");
                ComboBox::from_id_salt("country")
                    .width(COMBO_WIDTH)
                    .selected_text(self.country.as_str())
                    .show_ui(ui, |ui| {
                        for region in choices.regions() {
                            ui.selectable_value(
                                &mut self.country,
                                region.clone(),
                                region.as_str(),
                            );
                        }
                    });
            }
            Menu::AthleteWise => {
                scope_combo(
                    ui,
                    "Select a Sport",
                    "athlete_sport",
                    &mut self.athlete_sport,
                    &choices.sports,
                );
            }
        }
    }
}

fn scope_combo<T: Clone + PartialEq + Display>(
    ui: &mut egui::Ui,
    label: &str,
    id: &str,
    current: &mut Scope<T>,
    options: &[Scope<T>],
) {
    ui.label(label);
    ComboBox::from_id_salt(id)
        .width(COMBO_WIDTH)
        .selected_text(current.to_string())
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(current, option.clone(), option.to_string());
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Choices {
        Choices {
            years: vec![Scope::Overall, Scope::Only(2000)],
            countries: vec![
                Scope::Overall,
                Scope::Only("India".to_string()),
                Scope::Only("Kenya".to_string()),
            ],
            sports: vec![Scope::Overall],
        }
    }

    #[test]
    fn test_starts_on_overall_medal_tally() {
        let sidebar = Sidebar::new(&choices());
        assert_eq!(
            sidebar.request(),
            ViewRequest::MedalTally {
                year: Scope::Overall,
                country: Scope::Overall,
            }
        );
        assert_eq!(sidebar.country, "India");
    }

    #[test]
    fn test_selections_survive_menu_switches() {
        let mut sidebar = Sidebar::new(&choices());
        sidebar.tally_year = Scope::Only(2000);
        sidebar.menu = Menu::CountryWise;
        assert_eq!(
            sidebar.request(),
            ViewRequest::CountryWise {
                country: "India".to_string(),
            }
        );

        sidebar.menu = Menu::MedalTally;
        assert_eq!(
            sidebar.request(),
            ViewRequest::MedalTally {
                year: Scope::Only(2000),
                country: Scope::Overall,
            }
        );
    }
}
