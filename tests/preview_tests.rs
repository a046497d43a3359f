use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use errorfield::preview::{Preview, PreviewApp, PreviewOptions};

#[test]
fn report_serializes_final_values() {
    let mut app = PreviewApp::new(&[Preview::DayError], PreviewOptions::default());
    app.handle_paste("oops");
    let report = serde_json::to_value(app.report()).expect("serialize");
    assert_eq!(
        report,
        serde_json::json!({
            "fields": [{
                "preview": "Day · Error",
                "value": {"text": "oops", "selection": {"start": 4, "end": 4}},
                "is_error": true
            }]
        })
    );
}

#[test]
fn password_option_masks_only_string_preview() {
    let options = PreviewOptions::default().with_password(true);
    let mut app = PreviewApp::new(&[Preview::DayString], options);
    app.handle_paste("hunter2");
    let report = app.report();
    assert_eq!(report.fields[0].value.text, "hunter2");
    assert!(!report.fields[0].is_error);
}

#[test]
fn keys_are_ignored_after_done_blurs_field() {
    let options = PreviewOptions::default().with_single_line(true);
    let mut app = PreviewApp::new(&[Preview::DayHelper], options);
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert_eq!(app.focused_index(), None);
    app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
    assert_eq!(app.report().fields[0].value.text, "");
}
