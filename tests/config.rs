use chalkboard::Config;
use tempfile::TempDir;

#[test]
fn hand_edited_config_on_disk_parses_and_clamps() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
        [chalk]
        width = 3.5
        jitter = 99.0

        [board]
        background = "charcoal"

        [ui]
        status_bar_position = "top-right"
        "#,
    )
    .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let config = Config::from_toml_str(&text).unwrap();

    assert_eq!(config.chalk.width, 3.5);
    assert_eq!(config.chalk.jitter, 4.0);
    assert_eq!(
        config.board.background.to_color(),
        chalkboard::draw::CHARCOAL
    );
    assert_eq!(
        config.ui.status_bar_position,
        chalkboard::config::StatusPosition::TopRight
    );
}

#[test]
fn unreadable_config_text_reports_an_error() {
    let err = Config::from_toml_str("[chalk\nwidth = 2.0").unwrap_err();
    assert!(err.to_string().contains("parse"));
}
