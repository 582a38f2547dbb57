//! View renderer tests on a ratatui TestBackend.
//!
//! Verifies the render contract: one card per working-set record in
//! derivation order, the "Not Found" state for an empty set, the error
//! state for a failed load, and idempotence.

mod common;

use atlas::app::{App, AppMessage, LoadPhase, Screen};
use atlas::error::LoadError;
use atlas::ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use common::{country, loaded_app, sample_countries};

/// Draw one frame and return the backend buffer as a string.
fn render_to_text(app: &mut App, width: u16, height: u16) -> String {
    app.update_terminal_dimensions(width, height);
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("Failed to create terminal");
    terminal
        .draw(|f| ui::render(f, app))
        .expect("Failed to draw");

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for (i, cell) in buffer.content().iter().enumerate() {
        text.push_str(cell.symbol());
        if (i + 1) % width as usize == 0 {
            text.push('\n');
        }
    }
    text
}

#[test]
fn test_welcome_gate_is_the_first_frame() {
    let mut app = App::new();
    let text = render_to_text(&mut app, 80, 24);
    assert!(text.contains("atlas"));
    assert!(text.contains("Press Enter to fetch the country dataset"));
}

#[test]
fn test_render_one_card_per_record() {
    let mut app = loaded_app(sample_countries());
    let text = render_to_text(&mut app, 120, 40);

    for name in ["France", "Germany", "Japan", "Fiji", "Antarctica"] {
        assert!(text.contains(name), "card for {} missing", name);
    }
}

#[test]
fn test_render_cards_in_working_set_order() {
    let mut app = loaded_app(vec![
        country("Zambia", "Africa", 18_383_955, Some("Lusaka")),
        country("Aland", "Europe", 29_458, Some("Mariehamn")),
        country("Mali", "Africa", 20_250_833, Some("Bamako")),
    ]);
    app.cycle_sort(); // a-z

    let text = render_to_text(&mut app, 120, 40);
    let aland = text.find("Aland").expect("Aland card missing");
    let mali = text.find("Mali").expect("Mali card missing");
    let zambia = text.find("Zambia").expect("Zambia card missing");
    assert!(aland < mali && mali < zambia);
}

#[test]
fn test_card_shows_population_region_capital() {
    let mut app = loaded_app(vec![country("France", "Europe", 67_391_582, Some("Paris"))]);
    let text = render_to_text(&mut app, 80, 24);

    assert!(text.contains("France"));
    assert!(text.contains("6,73,91,582"));
    assert!(text.contains("Europe"));
    assert!(text.contains("Paris"));
}

#[test]
fn test_card_shows_placeholder_for_missing_capital() {
    let mut app = loaded_app(vec![country("Antarctica", "Antarctic", 1_000, None)]);
    let text = render_to_text(&mut app, 80, 24);
    assert!(text.contains("Capital: —"));
}

#[test]
fn test_empty_working_set_renders_not_found() {
    let mut app = loaded_app(sample_countries());
    for c in "xyzzy".chars() {
        app.search_push(c);
    }

    let text = render_to_text(&mut app, 80, 24);
    assert!(text.contains("Not Found"));
    // No cards sneak through
    assert!(!text.contains("France"));
}

#[test]
fn test_failed_load_renders_error_state() {
    let mut app = App::new();
    app.handle_message(AppMessage::LoadFailed(LoadError::HttpStatus {
        status: 500,
        message: "Internal Server Error".to_string(),
    }));

    let text = render_to_text(&mut app, 80, 24);
    assert!(text.contains("Error:"));
    assert!(text.contains("experiencing issues"));
    // Never a blank screen
    assert!(!text.trim().is_empty());
}

#[test]
fn test_loading_phase_renders_indicator() {
    let mut app = App::new();
    app.phase = LoadPhase::Loading;
    let text = render_to_text(&mut app, 80, 24);
    assert!(text.contains("Loading countries"));
}

#[test]
fn test_render_is_idempotent() {
    let mut app = loaded_app(sample_countries());
    let first = render_to_text(&mut app, 100, 30);
    let second = render_to_text(&mut app, 100, 30);
    assert_eq!(first, second);
}

#[test]
fn test_detail_screen_keyed_by_common_name() {
    let mut app = loaded_app(sample_countries());
    app.selected = 2; // Japan
    app.open_detail();
    assert_eq!(app.screen, Screen::Detail);

    let text = render_to_text(&mut app, 100, 30);
    assert!(text.contains("Japan"));
    assert!(text.contains("Republic of Japan"));
    assert!(text.contains("12,58,36,021"));
    // The navigation contract: percent-encoded by-name URL
    assert!(text.contains("/v3.1/name/Japan?fullText=true"));
}

#[test]
fn test_theme_toggle_does_not_change_content() {
    let mut app = loaded_app(sample_countries());
    let dark = render_to_text(&mut app, 100, 30);
    app.toggle_theme();
    let light = render_to_text(&mut app, 100, 30);
    // Same glyphs, different styles
    assert_eq!(dark, light);
}

#[test]
fn test_narrow_terminal_still_renders_cards() {
    let mut app = loaded_app(sample_countries());
    let text = render_to_text(&mut app, 30, 40);
    assert!(text.contains("France"));
}
