//! Working-set derivation properties, driven through the `App` container
//! the way the key handlers drive it.

mod common;

use atlas::app::{AppMessage, LoadPhase};
use atlas::error::LoadError;
use atlas::query::SortMode;

use common::{country, loaded_app, sample_countries};

fn working_set_names(app: &atlas::app::App) -> Vec<String> {
    app.working_set
        .iter()
        .map(|&i| app.countries[i].name.common.clone())
        .collect()
}

#[test]
fn test_initial_working_set_is_full_dataset_in_fetch_order() {
    let app = loaded_app(sample_countries());
    assert_eq!(
        working_set_names(&app),
        vec!["France", "Germany", "Japan", "Fiji", "Antarctica"]
    );
}

#[test]
fn test_search_fra_yields_only_france() {
    let mut app = loaded_app(vec![
        country("France", "Europe", 67_391_582, Some("Paris")),
        country("Germany", "Europe", 83_240_525, Some("Berlin")),
    ]);

    for c in "fra".chars() {
        app.search_push(c);
    }

    assert_eq!(working_set_names(&app), vec!["France"]);
}

#[test]
fn test_empty_search_matches_everything() {
    let mut app = loaded_app(sample_countries());
    app.search_push('f');
    app.search_backspace();
    assert_eq!(app.working_set.len(), app.countries.len());
}

#[test]
fn test_region_filter_exact_case_sensitive() {
    let mut app = loaded_app(sample_countries());

    // Cycle until Europe is selected
    while app.current_region() != Some("Europe") {
        app.cycle_region();
    }

    let names = working_set_names(&app);
    assert_eq!(names, vec!["France", "Germany"]);
    assert!(app
        .working_set
        .iter()
        .all(|&i| app.countries[i].region == "Europe"));
}

#[test]
fn test_sort_a_z_and_z_a() {
    let mut app = loaded_app(vec![
        country("Zambia", "Africa", 18_383_955, Some("Lusaka")),
        country("Aland", "Europe", 29_458, Some("Mariehamn")),
        country("Mali", "Africa", 20_250_833, Some("Bamako")),
    ]);

    app.cycle_sort();
    assert_eq!(app.sort, SortMode::NameAscending);
    assert_eq!(working_set_names(&app), vec!["Aland", "Mali", "Zambia"]);

    app.cycle_sort();
    assert_eq!(app.sort, SortMode::NameDescending);
    assert_eq!(working_set_names(&app), vec!["Zambia", "Mali", "Aland"]);

    app.cycle_sort();
    assert_eq!(app.sort, SortMode::Original);
    assert_eq!(working_set_names(&app), vec!["Zambia", "Aland", "Mali"]);
}

#[test]
fn test_sort_never_mutates_the_dataset() {
    let mut app = loaded_app(sample_countries());
    let fetch_order: Vec<String> = app
        .countries
        .iter()
        .map(|c| c.name.common.clone())
        .collect();

    app.cycle_sort();
    app.cycle_sort();

    let after: Vec<String> = app
        .countries
        .iter()
        .map(|c| c.name.common.clone())
        .collect();
    assert_eq!(fetch_order, after);
}

#[test]
fn test_derivations_compose() {
    let mut app = loaded_app(sample_countries());

    // Search for names containing "a", filter to Europe, sort descending
    app.search_push('a');
    while app.current_region() != Some("Europe") {
        app.cycle_region();
    }
    app.cycle_sort();
    app.cycle_sort();

    // France and Germany both contain "a" and sit in Europe
    assert_eq!(working_set_names(&app), vec!["Germany", "France"]);

    // Changing the filter keeps the search applied
    while app.current_region().is_some() {
        app.cycle_region();
    }
    let names = working_set_names(&app);
    assert!(names.contains(&"Japan".to_string()));
    assert!(!names.contains(&"Fiji".to_string()));
}

#[test]
fn test_working_set_always_subset_of_dataset() {
    let mut app = loaded_app(sample_countries());
    app.search_push('a');
    app.cycle_region();
    app.cycle_sort();

    assert!(app.working_set.iter().all(|&i| i < app.countries.len()));
}

#[test]
fn test_no_match_yields_empty_working_set_not_error() {
    let mut app = loaded_app(sample_countries());
    for c in "xyzzy".chars() {
        app.search_push(c);
    }
    assert!(app.working_set.is_empty());
    assert!(matches!(app.phase, LoadPhase::Loaded));
}

#[test]
fn test_failed_load_never_reaches_loaded_phase() {
    let mut app = atlas::app::App::new();
    app.handle_message(AppMessage::LoadFailed(LoadError::HttpStatus {
        status: 503,
        message: "Service Unavailable".to_string(),
    }));

    assert!(matches!(app.phase, LoadPhase::Failed(_)));
    assert!(app.working_set.is_empty());
}
