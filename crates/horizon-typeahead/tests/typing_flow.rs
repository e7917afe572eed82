//! End-to-end typing flows: keystrokes in, filtered dropdown and committed
//! values out, through the public surface traits only.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use horizon_typeahead::surface::{InputSurface, RenderFrame, RenderSurface};
use horizon_typeahead::{Key, MatchMode, TypeAhead, TypeAheadConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Host fakes
// =============================================================================

#[derive(Default)]
struct InputState {
    value: String,
    change_events: usize,
}

/// A text input whose state the test body can poke at from outside the
/// widget, the way a real host element would be shared.
#[derive(Clone, Default)]
struct FakeInput(Rc<RefCell<InputState>>);

impl FakeInput {
    fn text(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn change_events(&self) -> usize {
        self.0.borrow().change_events
    }
}

impl InputSurface for FakeInput {
    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
    }

    fn notify_changed(&mut self) {
        self.0.borrow_mut().change_events += 1;
    }
}

/// Renders each patch into a flat HTML-ish string for assertions.
#[derive(Default)]
struct FakeDropdown {
    markup: String,
    visible: bool,
}

#[derive(Default)]
struct MarkupFrame {
    markup: String,
}

impl RenderFrame for MarkupFrame {
    fn element_open(&mut self, tag: &str, _key: Option<u64>, attrs: &[(&str, &str)]) {
        self.markup.push('<');
        self.markup.push_str(tag);
        for (name, value) in attrs {
            self.markup.push_str(&format!(" {name}=\"{value}\""));
        }
        self.markup.push('>');
    }

    fn element_close(&mut self, tag: &str) {
        self.markup.push_str(&format!("</{tag}>"));
    }

    fn text(&mut self, content: &str) {
        self.markup.push_str(content);
    }
}

impl RenderSurface for FakeDropdown {
    fn patch(&mut self, render: &mut dyn FnMut(&mut dyn RenderFrame)) {
        let mut frame = MarkupFrame::default();
        render(&mut frame);
        self.markup = frame.markup;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

// =============================================================================
// Drivers
// =============================================================================

struct Harness {
    widget: TypeAhead<String>,
    input: FakeInput,
    dropdown: FakeDropdown,
}

impl Harness {
    fn new(candidates: &[&str], config: TypeAheadConfig) -> Self {
        init_tracing();
        let input = FakeInput::default();
        let widget = TypeAhead::with_strings(
            Box::new(input.clone()),
            candidates.iter().map(|s| s.to_string()).collect(),
            config,
        );
        Self {
            widget,
            input,
            dropdown: FakeDropdown::default(),
        }
    }

    /// Simulate typing: replace the input text one character at a time,
    /// releasing each key the way a host event stream would.
    fn type_str(&mut self, text: &str) {
        let mut typed = self.input.text();
        for ch in text.chars() {
            typed.push(ch);
            self.input.0.borrow_mut().value = typed.clone();
            self.widget
                .handle_key_released(Key::Character(ch), &mut self.dropdown);
        }
    }

    fn press(&mut self, key: Key) -> bool {
        let captured = self.widget.handle_key_pressed(key, &mut self.dropdown);
        self.widget.handle_key_released(key, &mut self.dropdown);
        captured
    }

    fn clear_input(&mut self) {
        self.input.0.borrow_mut().value.clear();
        self.widget
            .handle_key_released(Key::Backspace, &mut self.dropdown);
    }

    fn rows(&self) -> Vec<String> {
        self.widget.list().items().to_vec()
    }
}

const FRUITS: &[&str] = &["apple", "apricot", "banana"];

// =============================================================================
// Flows
// =============================================================================

#[test]
fn typing_filters_incrementally() {
    let mut h = Harness::new(FRUITS, TypeAheadConfig::new());

    h.type_str("ap");
    assert!(h.rows().is_empty(), "below min_length nothing matches");
    assert!(!h.dropdown.visible);

    h.type_str("r");
    assert_eq!(h.rows(), ["apricot"]);
    assert!(h.dropdown.visible);

    h.clear_input();
    h.type_str("app");
    assert_eq!(h.rows(), ["apple"]);
}

#[test]
fn rendered_markup_emphasizes_query() {
    let mut h = Harness::new(FRUITS, TypeAheadConfig::new());
    h.type_str("apr");

    assert_eq!(
        h.dropdown.markup,
        "<li class=\"active\"><a><strong>apr</strong>icot</a></li>"
    );
}

#[test]
fn fulltext_mode_matches_keywords_in_any_order() {
    let config = TypeAheadConfig::new().with_match_mode(MatchMode::FullText);
    let mut h = Harness::new(FRUITS, config);

    h.type_str("an ba");
    assert_eq!(h.rows(), ["banana"]);

    // Both keywords end up emphasized in the drawn row.
    assert!(h.dropdown.markup.contains("<strong>ba</strong>"));
    assert!(h.dropdown.markup.contains("<strong>an</strong>"));
}

#[test]
fn navigate_and_commit_with_keyboard() {
    let candidates = &["apk one", "apk two", "apk three"];
    let mut h = Harness::new(candidates, TypeAheadConfig::new());

    let committed = Arc::new(Mutex::new(Vec::new()));
    let committed_clone = committed.clone();
    h.widget.key_committed.connect(move |value: &String| {
        committed_clone.lock().unwrap().push(value.clone());
    });

    h.type_str("apk");
    assert_eq!(h.rows().len(), 3);

    assert!(h.press(Key::ArrowDown));
    assert!(h.press(Key::ArrowDown));
    assert!(h.press(Key::Enter));

    assert_eq!(h.input.text(), "apk three");
    assert_eq!(h.input.change_events(), 1);
    assert_eq!(*committed.lock().unwrap(), vec!["apk three"]);
    assert!(!h.dropdown.visible);

    // Command keys never disturbed the filter state on release.
    assert_eq!(h.rows().len(), 3);
}

#[test]
fn enter_with_nothing_drawn_propagates_to_host() {
    let mut h = Harness::new(FRUITS, TypeAheadConfig::new());
    h.type_str("zz");

    assert!(!h.press(Key::Enter));
    assert_eq!(h.input.text(), "zz");
    assert_eq!(h.input.change_events(), 0);
}

#[test]
fn pointer_commit_clears_dropdown() {
    let mut h = Harness::new(FRUITS, TypeAheadConfig::new());
    h.type_str("apr");

    h.widget.handle_pointer_press(0, &mut h.dropdown);

    assert_eq!(h.input.text(), "apricot");
    assert!(h.rows().is_empty());
    assert!(!h.dropdown.visible);

    // Refocusing finds nothing to show.
    h.widget.handle_focus(&mut h.dropdown);
    assert!(!h.dropdown.visible);
}

#[test]
fn blur_then_focus_restores_dropdown() {
    let mut h = Harness::new(FRUITS, TypeAheadConfig::new());
    h.type_str("apr");
    assert!(h.dropdown.visible);

    h.widget.handle_blur(&mut h.dropdown);
    assert!(!h.dropdown.visible);

    h.widget.handle_focus(&mut h.dropdown);
    assert!(h.dropdown.visible);
    assert_eq!(h.rows(), ["apricot"]);
}

#[test]
fn limit_caps_dropdown_size() {
    let many: Vec<String> = (0..50).map(|i| format!("apk {i:02}")).collect();
    let many_refs: Vec<&str> = many.iter().map(String::as_str).collect();
    let mut h = Harness::new(&many_refs, TypeAheadConfig::new().with_limit(Some(5)));

    h.type_str("apk");
    assert_eq!(h.rows().len(), 5);
    assert_eq!(h.rows()[0], "apk 00");
}

#[test]
fn scrollable_dropdown_windows_rows() {
    let many: Vec<String> = (0..10).map(|i| format!("apk {i:02}")).collect();
    let many_refs: Vec<&str> = many.iter().map(String::as_str).collect();
    let config = TypeAheadConfig::new()
        .with_limit(None)
        .with_scrollable(true)
        .with_max_visible_items(3);
    let mut h = Harness::new(&many_refs, config);

    h.type_str("apk");
    assert_eq!(h.rows().len(), 10);
    assert!(h.dropdown.markup.contains("apk 00"));
    assert!(!h.dropdown.markup.contains("apk 03"));

    // Walking past the window edge scrolls it.
    for _ in 0..4 {
        h.press(Key::ArrowDown);
    }
    assert!(h.dropdown.markup.contains("apk 04"));
    assert!(!h.dropdown.markup.contains("apk 00"));
}

#[test]
fn replacing_candidates_refreshes_open_dropdown() {
    let mut h = Harness::new(FRUITS, TypeAheadConfig::new());
    h.type_str("che");
    assert!(h.rows().is_empty());

    h.widget.set_candidates(
        vec!["cherry".to_string(), "chestnut".to_string()],
        &mut h.dropdown,
    );
    assert_eq!(h.rows(), ["cherry", "chestnut"]);
    assert!(h.dropdown.visible);
}
