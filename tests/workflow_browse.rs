use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use langshelf::app::App;
use langshelf::{catalog, Config, LanguageRecord, Route};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;

fn new_app() -> App {
    App::new(
        Config::default(),
        PathBuf::from("/tmp/langshelf-test/config.toml"),
        catalog(),
    )
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .unwrap();
}

fn screen_lines(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.draw(f).unwrap()).unwrap();
    let buffer = terminal.backend().buffer().clone();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect()
        })
        .collect()
}

#[test]
fn test_catalog_groups_end_to_end() {
    let groups: Vec<(&str, Vec<&str>)> = catalog()
        .groups()
        .iter()
        .map(|g| (g.title, g.languages.iter().map(|l| l.name).collect()))
        .collect();

    assert_eq!(
        groups,
        vec![
            ("Compiled", vec!["Rust", "Kotlin", "Swift"]),
            ("Interpreted", vec!["JavaScript", "Python", "Ruby"]),
        ]
    );
}

#[test]
fn test_select_swift_shows_detail() {
    let mut app = new_app();

    // Rust -> Kotlin -> Swift
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    let expected = LanguageRecord {
        id: "swift",
        name: "Swift",
        image: "swift",
        description: "Compiled",
    };
    assert_eq!(app.navigator().current(), &Route::Detail(expected));

    let lines = screen_lines(&mut app, 80, 32);
    assert!(lines.iter().any(|l| l.trim() == "Swift"));
    assert!(lines.iter().any(|l| l.trim() == "Compiled"));
    assert!(lines.iter().any(|l| l.contains("Esc: Back")));
}

#[test]
fn test_back_returns_to_list() {
    let mut app = new_app();
    press(&mut app, KeyCode::End);
    press(&mut app, KeyCode::Enter);
    match app.navigator().current() {
        Route::Detail(record) => assert_eq!(record.name, "Ruby"),
        other => panic!("expected detail, got {:?}", other),
    }

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.navigator().current(), &Route::List);

    let text = screen_lines(&mut app, 60, 20).join("\n");
    assert!(text.contains("COMPILED"));
    assert!(text.contains("» "));

    // Escape on the list leaves the app
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
}

#[test]
fn test_list_renders_identically_on_redraw() {
    let mut app = new_app();
    let first = screen_lines(&mut app, 60, 20);
    let second = screen_lines(&mut app, 60, 20);
    assert_eq!(first, second);
}

#[test]
fn test_help_overlay_renders_over_list() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('?'));
    let text = screen_lines(&mut app, 80, 30).join("\n");
    assert!(text.contains("Keyboard Shortcuts - Standard Preset"));
    assert!(text.contains("Open language"));
}
