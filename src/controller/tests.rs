//! Tests for the table controller.

use super::*;
use crate::config::PageClamp;
use crate::dataset::sample_inventory;
use crate::debounce::DebounceMsg;
use crate::error::Error;
use crate::sort::SortDirection;
use crossterm::event::{KeyCode, KeyModifiers};

fn controller() -> TableController {
    TableController::new(sample_inventory())
}

fn press(key: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

/// The message the debouncer's pending tick would deliver.
fn debounce_expired(c: &TableController) -> Msg {
    Box::new(DebounceMsg {
        id: c.debouncer().id(),
        tag: c.debouncer().tag(),
    }) as Msg
}

fn prices(records: &[&Record]) -> Vec<f64> {
    records.iter().map(|r| r.price).collect()
}

#[test]
fn test_initial_state() {
    let c = controller();
    assert_eq!(c.state().search_text(), "");
    assert!(c.state().sort().is_empty());
    assert_eq!(c.current_page(), 0);
    assert_eq!(c.total_pages(), 3);
    assert_eq!(c.filtered_len(), 25);
    assert_eq!(c.visible_page().len(), 10);
    assert_eq!(c.visible_page()[0], &c.dataset()[0]);
}

// Scenario: "honda" after the debounce window shows exactly the two Hondas.
#[test]
fn test_debounced_search_shows_matches() {
    let mut c = controller();
    let _cmd = c.on_search_text_changed("honda");

    // Nothing happens until the window elapses
    assert_eq!(c.filtered_len(), 25);

    let msg = debounce_expired(&c);
    assert!(c.update(&msg).is_none());

    let visible = c.visible_page();
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|r| r.make == "Honda"));
    assert_eq!(c.total_pages(), 1);
    assert_eq!(c.current_page(), 0);
}

#[test]
fn test_typed_search_after_direct_search_is_applied() {
    let mut c = controller();
    let _ = c.on_search_text_changed("honda");
    let msg = debounce_expired(&c);
    c.update(&msg);
    assert_eq!(c.filtered_len(), 2);

    c.set_search_text("");
    assert_eq!(c.filtered_len(), 25);

    let _ = c.on_search_text_changed("honda");
    let msg = debounce_expired(&c);
    c.update(&msg);
    assert_eq!(c.state().search_text(), "honda");
    assert_eq!(c.filtered_len(), 2);
}

#[test]
fn test_burst_applies_only_last_value() {
    let mut c = controller();
    let _ = c.on_search_text_changed("f");
    let stale = debounce_expired(&c);
    let _ = c.on_search_text_changed("fo");
    let _ = c.on_search_text_changed("ford");

    c.update(&stale);
    assert_eq!(c.state().search_text(), "");

    let msg = debounce_expired(&c);
    c.update(&msg);
    assert_eq!(c.state().search_text(), "ford");
    assert_eq!(c.filtered_len(), 2);
}

#[test]
fn test_identical_search_does_not_rederive() {
    let mut c = controller();
    let _ = c.on_search_text_changed("ford");
    let msg = debounce_expired(&c);
    c.update(&msg);

    // Move the row cursor; a re-derivation would reset it.
    c.update(&press(KeyCode::Down));
    assert_eq!(c.selected_record().map(|r| r.model.as_str()), Some("Mustang"));

    let _ = c.on_search_text_changed("ford");
    let msg = debounce_expired(&c);
    c.update(&msg);
    assert_eq!(c.selected_record().map(|r| r.model.as_str()), Some("Mustang"));
}

#[test]
fn test_total_pages_follow_search() {
    let mut c = controller();
    c.set_search_text("o");
    let expected = c
        .dataset()
        .iter()
        .filter(|r| crate::search::matches(r, "o"))
        .count();
    assert_eq!(c.filtered_len(), expected);
    assert_eq!(c.total_pages(), expected.div_ceil(10));

    c.set_search_text("no such car");
    assert_eq!(c.total_pages(), 0);
    assert!(c.visible_page().is_empty());

    c.set_search_text("");
    assert_eq!(c.total_pages(), 3);
}

#[test]
fn test_price_search() {
    let mut c = controller();
    c.set_search_text("99.99");
    let models: Vec<&str> = c.visible_page().iter().map(|r| r.model.as_str()).collect();
    assert_eq!(models, vec!["Elantra"]);
}

// Scenario: sorting on price twice reverses the order.
#[test]
fn test_sort_toggle_reverses_page() {
    let mut c = controller();
    c.set_search_text("a");

    c.on_sort_requested("price");
    let key = c.state().sort().active().map(|k| k.direction);
    assert_eq!(key, Some(SortDirection::Ascending));
    let ascending = prices(&c.view().sorted_records(c.dataset()));

    c.on_sort_requested("price");
    let key = c.state().sort().active().map(|k| k.direction);
    assert_eq!(key, Some(SortDirection::Descending));
    let mut descending = prices(&c.view().sorted_records(c.dataset()));

    descending.reverse();
    assert_eq!(ascending, descending);
    assert!(ascending.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_sort_does_not_reset_page() {
    let mut c = controller();
    c.on_next_page();
    c.on_sort_requested("make");
    assert_eq!(c.current_page(), 1);
}

#[test]
fn test_unknown_sort_attribute_is_ignored() {
    let mut c = controller();
    c.on_sort_requested("colour");
    assert!(c.state().sort().is_empty());
    assert_eq!(
        c.try_sort_requested("colour"),
        Err(Error::UnknownField("colour".to_string()))
    );
}

// Scenario: three next-page calls with three pages stop on the last page.
#[test]
fn test_next_page_stops_on_last_page() {
    let mut c = controller();
    c.on_next_page();
    assert_eq!(c.current_page(), 1);
    c.on_next_page();
    assert_eq!(c.current_page(), 2);
    c.on_next_page();
    assert_eq!(c.current_page(), 2);
    assert_eq!(c.visible_page().len(), 5);
}

#[test]
fn test_previous_page_stops_on_first_page() {
    let mut c = controller();
    c.on_previous_page();
    assert_eq!(c.current_page(), 0);
    c.go_to_page(2);
    c.on_previous_page();
    assert_eq!(c.current_page(), 1);
}

// Scenario: jumping past the last page changes nothing.
#[test]
fn test_jump_out_of_range_is_ignored() {
    let mut c = controller();
    c.on_jump_to_page("5");
    assert_eq!(c.current_page(), 0);
    c.on_jump_to_page("-1");
    assert_eq!(c.current_page(), 0);
    c.on_jump_to_page("2");
    assert_eq!(c.current_page(), 2);
    c.on_jump_to_page("3");
    assert_eq!(c.current_page(), 2);
}

#[test]
fn test_malformed_jump_is_ignored() {
    let mut c = controller();
    c.on_jump_to_page("1");
    c.on_jump_to_page("next");
    c.on_jump_to_page("");
    assert_eq!(c.current_page(), 1);
    assert_eq!(
        c.try_jump_to_page("abc"),
        Err(Error::InvalidPageInput("abc".to_string()))
    );
    assert_eq!(
        c.try_jump_to_page("7"),
        Err(Error::PageOutOfRange {
            requested: 7,
            total_pages: 3
        })
    );
}

#[test]
fn test_navigation_on_empty_result() {
    let mut c = controller();
    c.set_search_text("zzz");
    c.on_next_page();
    c.on_previous_page();
    c.on_jump_to_page("0");
    assert_eq!(c.current_page(), 0);
    assert!(c.visible_page().is_empty());
}

#[test]
fn test_eager_clamp_after_search() {
    let mut c = controller();
    c.go_to_page(2);
    c.set_search_text("honda");
    assert_eq!(c.current_page(), 0);
    assert_eq!(c.visible_page().len(), 2);
}

#[test]
fn test_lazy_clamp_keeps_stale_page() {
    let config = Config::new().with_clamp(PageClamp::Lazy);
    let mut c = TableController::with_config(sample_inventory(), config);
    c.go_to_page(2);
    c.set_search_text("honda");
    assert_eq!(c.current_page(), 2);
    assert!(c.visible_page().is_empty());

    // Explicit navigation can only move back towards valid pages
    c.on_next_page();
    assert_eq!(c.current_page(), 2);
    c.on_jump_to_page("0");
    assert_eq!(c.current_page(), 0);
    assert_eq!(c.visible_page().len(), 2);
}

#[test]
fn test_custom_page_size() {
    let config = Config::new().with_page_size(4);
    let c = TableController::with_config(sample_inventory(), config);
    assert_eq!(c.total_pages(), 7);
    assert_eq!(c.visible_page().len(), 4);
}

#[test]
fn test_page_keys() {
    let mut c = controller();
    c.update(&press(KeyCode::Right));
    assert_eq!(c.current_page(), 1);
    c.update(&press(KeyCode::Char('l')));
    assert_eq!(c.current_page(), 2);
    c.update(&press(KeyCode::PageUp));
    assert_eq!(c.current_page(), 1);
    assert_eq!(c.paginator().page(), 1);
    assert_eq!(c.paginator().view(), "2/3");
}

#[test]
fn test_sort_keys_follow_columns() {
    let mut c = controller();
    c.update(&press(KeyCode::Char('3')));
    assert_eq!(c.state().sort().active().map(|k| k.field), Some(Field::Price));
    c.update(&press(KeyCode::Char('1')));
    assert_eq!(c.state().sort().active().map(|k| k.field), Some(Field::Make));
}

#[test]
fn test_enter_flushes_pending_search() {
    let mut c = controller();
    let _ = c.on_search_text_changed("tesla");
    c.update(&press(KeyCode::Enter));
    assert_eq!(c.filtered_len(), 1);

    // The tick still in flight is now stale
    let _ = c.on_search_text_changed("bmw");
    let stale: Msg = Box::new(DebounceMsg {
        id: c.debouncer().id(),
        tag: c.debouncer().tag() - 1,
    });
    c.update(&stale);
    assert_eq!(c.state().search_text(), "tesla");
}

#[test]
fn test_row_selection() {
    let mut c = controller();
    assert_eq!(c.selected_record(), Some(&c.dataset()[0]));
    c.update(&press(KeyCode::Up));
    assert_eq!(c.selected_record(), Some(&c.dataset()[9]));
    c.on_next_page();
    assert_eq!(c.selected_record(), Some(&c.dataset()[10]));
}

#[test]
fn test_render() {
    let mut c = controller();
    c.set_search_text("honda");
    c.on_sort_requested("price");
    let out = strip_ansi_escapes::strip_str(c.render());

    assert!(out.contains("Price ▲"));
    assert!(out.contains("Civic"));
    assert!(out.contains("Accord"));
    assert!(out.contains("1/1  showing 1-2 of 2"));
    // A single page leaves nowhere to go
    assert!(!out.contains("next page"));
    assert!(!out.contains("prev page"));
    assert!(out.find("Civic") < out.find("Accord"));
}

#[test]
fn test_help_line_follows_page_edges() {
    let mut c = controller();
    let rendered = |c: &TableController| strip_ansi_escapes::strip_str(c.render());

    let out = rendered(&c);
    assert!(out.contains("→/l next page"));
    assert!(!out.contains("prev page"));

    c.on_next_page();
    let out = rendered(&c);
    assert!(out.contains("←/h prev page • →/l next page"));

    c.on_next_page();
    let out = rendered(&c);
    assert!(out.contains("←/h prev page"));
    assert!(!out.contains("next page"));

    // Disabled on the last page, so the key falls through to nothing
    c.update(&press(KeyCode::Right));
    assert_eq!(c.current_page(), 2);
}

#[test]
fn test_render_empty() {
    let mut c = controller();
    c.set_search_text("zzz");
    let out = strip_ansi_escapes::strip_str(c.render());
    assert!(out.starts_with("No matching records"));
    assert!(out.contains("0/0  showing 0 of 0"));
}
