use super::*;
use crate::parse::yaml::YamlTemplateParser;
use crate::position::dimension::Dimension;
use crate::position::preset::PositionPreset;
use crate::position::resolver::Position;

fn opened() -> EditorSession {
    EditorSession::open(
        TemplateDocument::new(Template::new("Sunday")),
        EditorOpts::default(),
    )
}

fn parse(text: &str) -> SongslideResult<PartialTemplate> {
    YamlTemplateParser.validate(text)
}

#[test]
fn new_session_is_clean_until_authored() {
    let mut s = EditorSession::create(EditorOpts::default());
    assert_eq!(s.mode(), EditorMode::Wysiwyg);
    assert!(!s.has_unsaved_changes());
    assert_eq!(s.request_close(), CloseDecision::Closed);
    assert!(s.is_closed());

    let mut s = EditorSession::create(EditorOpts::default());
    s.edit(|t| Ok(t.with_name("Draft"))).unwrap();
    assert!(s.has_unsaved_changes());
    assert_eq!(s.request_close(), CloseDecision::ConfirmDiscard);
    assert!(!s.is_closed());
    s.discard_and_close();
    assert!(s.is_closed());
    assert!(s.edit(|t| Ok(t.clone())).is_err());
}

#[test]
fn text_mode_blocks_direct_edits() {
    let mut s = opened();
    s.switch_to_text().unwrap();
    assert_eq!(s.mode(), EditorMode::Text);
    assert_eq!(s.text(), serialize_template_with(s.template(), &SerializeOpts::default()));
    assert!(s.edit(|t| Ok(t.with_name("x"))).is_err());
    assert!(!s.has_unsaved_changes());
}

#[test]
fn live_edits_update_the_template() {
    let mut s = opened();
    s.switch_to_text().unwrap();
    let text = s.text().replace("name: Sunday", "name: Monday");

    let ticket = s.edit_text(text.clone()).unwrap();
    assert_eq!(ticket.purpose, ValidationPurpose::LiveEdit);
    assert_eq!(ticket.text, text);
    let result = parse(&ticket.text);
    assert_eq!(s.complete_validation(&ticket, result), ValidationApplied::Applied);
    assert_eq!(s.template().name, "Monday");

    // Not yet valid: silently ignored, last good template kept.
    assert_eq!(s.edit_text_with(&YamlTemplateParser, "slides: 3\n"), ValidationApplied::Ignored);
    assert_eq!(s.template().name, "Monday");
    assert_eq!(s.error(), None);
    assert_eq!(s.text(), "slides: 3\n");
}

#[test]
fn only_the_newest_result_is_applied() {
    let mut s = opened();
    s.switch_to_text().unwrap();
    let base = s.text().to_owned();
    let first = s.edit_text(base.replace("Sunday", "One")).unwrap();
    let second = s.edit_text(base.replace("Sunday", "Two")).unwrap();

    let late = parse(&first.text);
    let fresh = parse(&second.text);
    assert_eq!(s.complete_validation(&second, fresh), ValidationApplied::Applied);
    assert_eq!(s.complete_validation(&first, late), ValidationApplied::Stale);
    assert_eq!(s.template().name, "Two");
}

#[test]
fn results_after_close_are_discarded() {
    let mut s = opened();
    s.switch_to_text().unwrap();
    let edited = s.text().replace("Sunday", "Late");
    let ticket = s.edit_text(edited).unwrap();
    s.discard_and_close();
    let result = parse(&ticket.text);
    assert_eq!(s.complete_validation(&ticket, result), ValidationApplied::Stale);
    assert_eq!(s.template().name, "Sunday");
}

#[test]
fn results_after_returning_to_the_canvas_are_discarded() {
    let mut s = opened();
    s.switch_to_text().unwrap();
    let edited = s.text().replace("Sunday", "Late");
    let ticket = s.edit_text(edited).unwrap();

    // Emptying the buffer cancels the live check; the canvas is then reachable at once.
    assert_eq!(s.edit_text(""), None);
    assert_eq!(s.request_wysiwyg().unwrap(), Transition::Switched);
    assert_eq!(s.mode(), EditorMode::Wysiwyg);
    let result = parse(&ticket.text);
    assert_eq!(s.complete_validation(&ticket, result), ValidationApplied::Stale);

    // Re-entering text mode does not revive the old ticket.
    s.switch_to_text().unwrap();
    let result = parse(&ticket.text);
    assert_eq!(s.complete_validation(&ticket, result), ValidationApplied::Stale);
    assert_eq!(s.template().name, "Sunday");
    assert!(!s.text().contains("Late"));
}

#[test]
fn unchanged_buffer_switches_at_once() {
    let mut s = opened();
    s.switch_to_text().unwrap();
    assert_eq!(s.request_wysiwyg().unwrap(), Transition::Switched);
    assert_eq!(s.mode(), EditorMode::Wysiwyg);
    assert_eq!(s.request_wysiwyg().unwrap(), Transition::Switched);
}

#[test]
fn rejected_switch_keeps_text_and_template() {
    let mut s = opened();
    s.switch_to_text().unwrap();
    s.edit_text("slides: 3\n");

    let Transition::Pending(ticket) = s.request_wysiwyg().unwrap() else {
        panic!("expected a pending switch");
    };
    assert_eq!(ticket.purpose, ValidationPurpose::ModeSwitch);
    let result = parse(&ticket.text);
    let applied = s.complete_validation(&ticket, result);
    assert_eq!(
        applied,
        ValidationApplied::Rejected("$.slides: expected a list, found a number".to_owned())
    );
    assert_eq!(s.mode(), EditorMode::Text);
    assert_eq!(s.text(), "slides: 3\n");
    assert_eq!(s.error(), Some("$.slides: expected a list, found a number"));
    assert_eq!(s.template().name, "Sunday");
    assert!(s.has_unsaved_changes());
    assert!(s.prepare_save().is_err());

    // Fixing the text and switching again succeeds and clears the banner.
    let fixed = "name: Fixed\nslides:\n  - text: []\n";
    s.edit_text(fixed);
    assert_eq!(
        s.switch_to_wysiwyg(&YamlTemplateParser).unwrap(),
        ValidationApplied::SwitchedToWysiwyg
    );
    assert_eq!(s.mode(), EditorMode::Wysiwyg);
    assert_eq!(s.error(), None);
    assert_eq!(s.template().name, "Fixed");
}

#[test]
fn typing_during_a_pending_switch_carries_it_forward() {
    let mut s = opened();
    s.switch_to_text().unwrap();
    let base = s.text().to_owned();
    s.edit_text(base.replace("Sunday", "A"));
    let Transition::Pending(first) = s.request_wysiwyg().unwrap() else {
        panic!("expected a pending switch");
    };
    let second = s.edit_text(base.replace("Sunday", "B")).unwrap();
    assert_eq!(second.purpose, ValidationPurpose::ModeSwitch);

    let stale = parse(&first.text);
    assert_eq!(s.complete_validation(&first, stale), ValidationApplied::Stale);
    let result = parse(&second.text);
    assert_eq!(
        s.complete_validation(&second, result),
        ValidationApplied::SwitchedToWysiwyg
    );
    assert_eq!(s.template().name, "B");
}

#[test]
fn live_validation_can_be_turned_off() {
    let opts = EditorOpts {
        live_validation: false,
        ..EditorOpts::default()
    };
    let mut s = EditorSession::open(TemplateDocument::new(Template::new("Sunday")), opts);
    s.switch_to_text().unwrap();
    let edited = s.text().replace("Sunday", "Quiet");
    assert_eq!(s.edit_text(edited), None);
    assert_eq!(s.template().name, "Sunday");
    assert!(s.has_unsaved_changes());
    assert_eq!(
        s.switch_to_wysiwyg(&YamlTemplateParser).unwrap(),
        ValidationApplied::SwitchedToWysiwyg
    );
    assert_eq!(s.template().name, "Quiet");
}

#[test]
fn selection_follows_elements() {
    let mut s = opened();
    let id = s
        .add_element(ElementKind::Text, &ElementPatch::content("Hi"))
        .unwrap();
    assert_eq!(s.selected(), Some(&id));

    s.edit(|t| Ok(t.with_slide_added(1))).unwrap();
    s.set_active_slide(1).unwrap();
    assert_eq!(s.selected(), None);
    assert!(s.set_active_slide(5).is_err());

    s.select(Some(id.clone())).unwrap();
    assert_eq!(s.active_slide(), 0);
    s.remove_element(&id).unwrap();
    assert_eq!(s.selected(), None);
    assert!(s.select(Some(id)).is_err());
}

#[test]
fn drag_end_writes_slide_pixels_and_drops_preset() {
    let mut s = opened();
    let id = s
        .add_element(ElementKind::Text, &ElementPatch::preset(PositionPreset::Center))
        .unwrap();
    s.drag_end(&id, Point::new(100.4, 50.0)).unwrap();
    let layer = s.template().slides[0].find(&id).unwrap().layer().clone();
    assert_eq!(
        layer.position,
        Position::explicit(Dimension::px(201.0), Dimension::px(100.0))
    );
    assert_eq!(layer.position.preset(), None);

    s.drag_song_style_end(SongStyleSlot::Lyrics, Point::new(50.0, 60.0))
        .unwrap();
    let style = s.template().slides[0]
        .song_styles
        .get(SongStyleSlot::Lyrics)
        .unwrap()
        .clone();
    assert_eq!((style.x, style.y), (Dimension::px(100.0), Dimension::px(120.0)));
}

#[test]
fn save_round_trip_resets_the_snapshot() {
    let mut s = EditorSession::create(EditorOpts::default());
    s.edit(|t| Ok(t.with_name("Fresh"))).unwrap();
    s.set_is_default(true).unwrap();

    let doc = s.prepare_save().unwrap();
    assert!(doc.is_yaml_in_sync());
    assert!(doc.is_default);
    assert_eq!(doc.id, None);

    let stored = TemplateDocument {
        id: Some("srv-1".to_owned()),
        ..doc
    };
    s.mark_saved(stored);
    assert!(!s.has_unsaved_changes());
    assert_eq!(s.original().and_then(|d| d.id.as_deref()), Some("srv-1"));

    s.set_is_default(false).unwrap();
    assert!(s.has_unsaved_changes());
}
