//! Search and category filtering over the catalog.

use std::fmt;

use super::entities::{Vehicle, VehicleCategory};

/// Category selector, with `All` as the sentinel that disables the check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(VehicleCategory),
}

impl CategoryFilter {
    /// Button order in the filter panel.
    pub const OPTIONS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(VehicleCategory::Car),
        CategoryFilter::Only(VehicleCategory::Motorcycle),
        CategoryFilter::Only(VehicleCategory::Boat),
        CategoryFilter::Only(VehicleCategory::Aircraft),
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.id(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Vehicles",
            Self::Only(category) => category.label(),
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::All => "🚘",
            Self::Only(category) => category.emoji(),
        }
    }

    pub fn accepts(&self, category: VehicleCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Transient search/category state owned by the catalog page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub category: CategoryFilter,
}

impl FilterState {
    pub fn apply(&self, vehicles: &[Vehicle]) -> Vec<Vehicle> {
        filter_vehicles(vehicles, &self.search_term, self.category)
    }
}

/// Keeps vehicles whose name contains `term` (case-insensitive) and whose
/// category passes `category`. Input order is preserved.
pub fn filter_vehicles(vehicles: &[Vehicle], term: &str, category: CategoryFilter) -> Vec<Vehicle> {
    let needle = term.to_lowercase();
    vehicles
        .iter()
        .filter(|vehicle| matches_vehicle(vehicle, &needle, category))
        .cloned()
        .collect()
}

fn matches_vehicle(vehicle: &Vehicle, lowered_term: &str, category: CategoryFilter) -> bool {
    category.accepts(vehicle.category) && vehicle.name.to_lowercase().contains(lowered_term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;
    use rstest::{fixture, rstest};

    #[fixture]
    fn vehicles() -> Vec<Vehicle> {
        Catalog::seed().list_all().to_vec()
    }

    fn ids(vehicles: &[Vehicle]) -> Vec<&str> {
        vehicles.iter().map(|v| v.id.as_str()).collect()
    }

    #[rstest]
    fn empty_term_and_all_returns_everything(vehicles: Vec<Vehicle>) {
        assert_eq!(filter_vehicles(&vehicles, "", CategoryFilter::All), vehicles);
    }

    #[rstest]
    #[case("", CategoryFilter::Only(VehicleCategory::Car), vec!["1", "4"])]
    #[case("", CategoryFilter::Only(VehicleCategory::Aircraft), vec![])]
    #[case("ak", CategoryFilter::All, vec!["2", "5"])]
    #[case("AK", CategoryFilter::Only(VehicleCategory::Motorcycle), vec!["2", "5"])]
    #[case("yacht", CategoryFilter::Only(VehicleCategory::Car), vec![])]
    #[case("e", CategoryFilter::Only(VehicleCategory::Boat), vec!["6"])]
    #[case("speed", CategoryFilter::All, vec!["6"])]
    fn filters_by_term_and_category(
        vehicles: Vec<Vehicle>,
        #[case] term: &str,
        #[case] category: CategoryFilter,
        #[case] expected: Vec<&str>,
    ) {
        let result = filter_vehicles(&vehicles, term, category);
        assert_eq!(ids(&result), expected);
    }

    #[rstest]
    fn result_is_exactly_the_matching_subsequence(vehicles: Vec<Vehicle>) {
        for term in ["", "a", "er", "ZEN", "drag", "x"] {
            for category in CategoryFilter::OPTIONS {
                let state = FilterState {
                    search_term: term.to_string(),
                    category,
                };
                let needle = term.to_lowercase();
                let expected: Vec<Vehicle> = vehicles
                    .iter()
                    .filter(|v| matches_vehicle(v, &needle, category))
                    .cloned()
                    .collect();
                let result = state.apply(&vehicles);
                assert_eq!(result, expected, "term {term:?}, category {category}");
                assert!(result.iter().all(|v| {
                    v.name.to_lowercase().contains(&term.to_lowercase())
                        && category.accepts(v.category)
                }));
            }
        }
    }

    #[test]
    fn filter_options_have_distinct_ids() {
        let ids: Vec<_> = CategoryFilter::OPTIONS.iter().map(CategoryFilter::id).collect();
        assert_eq!(ids, ["all", "car", "motorcycle", "boat", "aircraft"]);
    }
}
