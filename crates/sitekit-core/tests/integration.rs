//! Integration tests driving page behaviours through the public API.

use sitekit_core::{
    is_backdrop_click, tag_matches, ClockFace, Command, ContactFields, ContactForm, ContactMessage,
    CounterAnimation, CounterFrame, FormPhase, NavState, Point, QuoteSlider, Rect, SiteConfig,
    State, SubmitOutcome, WorkFilter,
};

#[test]
fn test_counters_from_markup_attributes() {
    let config = SiteConfig::default();
    for (raw, expected) in [(Some("1200"), 1200), (Some("98"), 98), (None, 0)] {
        let target = CounterAnimation::parse_target(raw);
        let last = CounterAnimation::with_steps(target, config.counter.steps).last();
        assert_eq!(last, Some(CounterFrame::Finished(expected)));
    }
}

#[test]
fn test_portfolio_filter_session() {
    let items = ["web seo", "brand", "web", "photo brand"];
    let mut filter = WorkFilter::new();

    filter.select("brand");
    assert_eq!(filter.visibility(items), vec![false, true, false, true]);

    filter.select("web");
    assert_eq!(filter.visibility(items), vec![true, false, true, false]);

    filter.select("all");
    assert_eq!(filter.visibility(items), vec![true; 4]);

    assert!(!tag_matches("bran", "brand"));
}

#[test]
fn test_slider_session_wraps_both_ways() {
    let mut slider = QuoteSlider::new(3);
    let visited: Vec<_> = [true, true, true, false, false]
        .iter()
        .map(|forward| if *forward { slider.next() } else { slider.prev() })
        .collect();
    assert_eq!(visited, vec![Some(1), Some(2), Some(0), Some(2), Some(1)]);

    let mut empty = QuoteSlider::new(0);
    assert_eq!(empty.next(), None);
    assert_eq!(empty.prev(), None);
}

#[test]
fn test_nav_link_closes_open_panel() {
    let mut nav = NavState::default();
    nav.toggle();
    assert_eq!(nav.aria_expanded(), "true");
    nav.close();
    assert_eq!(nav.aria_expanded(), "false");
}

#[test]
fn test_modal_backdrop_dismissal() {
    let dialog = Rect::from_edges(200.0, 150.0, 800.0, 550.0);
    assert!(is_backdrop_click(&dialog, &Point::new(10.0, 10.0)));
    assert!(!is_backdrop_click(&dialog, &Point::new(400.0, 300.0)));
}

#[test]
fn test_clock_face_formats_sast() {
    // 2025-06-15T10:07:00Z
    let ms = 1_749_982_020_000;
    assert_eq!(ClockFace::default().format(ms), "12:07");
}

#[test]
fn test_contact_round_trip_with_network_failure_then_success() {
    let config = SiteConfig::default();
    let mut form = ContactForm::new(config.contact.messages.clone());
    let fields = ContactFields::new("Lerato", "lerato@example.co.za", "web", "Please quote a site.");

    let cmds = form
        .update(ContactMessage::Submit {
            fields: fields.clone(),
            action: Some("https://formspree.io/f/xyz".to_string()),
        })
        .flatten();
    assert!(cmds.contains(&Command::Submit {
        action: "https://formspree.io/f/xyz".to_string()
    }));

    let cmds = form
        .update(ContactMessage::Completed(SubmitOutcome::NetworkError(
            "offline".to_string(),
        )))
        .flatten();
    assert_eq!(
        cmds,
        vec![Command::SetStatus(config.contact.messages.network_error.clone())]
    );
    assert_eq!(form.phase(), FormPhase::Failed);

    form.update(ContactMessage::Submit {
        fields,
        action: Some("https://formspree.io/f/xyz".to_string()),
    });
    let cmds = form
        .update(ContactMessage::Completed(SubmitOutcome::from_status(200)))
        .flatten();
    assert!(cmds.contains(&Command::ResetForm));
    assert_eq!(form.phase(), FormPhase::Sent);
}

#[test]
fn test_contact_errors_surface_together() {
    let mut form = ContactForm::default();
    let cmds = form
        .update(ContactMessage::Submit {
            fields: ContactFields::new("J", "j@localhost", "", "short"),
            action: None,
        })
        .flatten();
    let failed: Vec<_> = cmds
        .iter()
        .filter_map(|c| match c {
            Command::ShowError { field, .. } => Some(field.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(failed, vec!["name", "email", "service", "message"]);
    assert_eq!(form.errors().len(), 4);
}
