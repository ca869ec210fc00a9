use portfolio_sync::app::context::{LANGUAGE_KEY, THEME_KEY};
use portfolio_sync::domain::ports::PreferenceStore;
use portfolio_sync::{AppContext, FilePreferenceStore, Language, PortfolioConfig, Theme};
use std::sync::Arc;
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> PortfolioConfig {
    let path = dir.path().join("prefs").join("portfolio.json");
    PortfolioConfig::from_toml_str(&format!(
        "[preferences]\npath = \"{}\"\n",
        path.display().to_string().replace('\\', "/")
    ))
    .unwrap()
}

#[test]
fn test_first_start_saves_english() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let store = Arc::new(FilePreferenceStore::new(&config.preferences.path));

    let context = AppContext::load(Arc::clone(&store), &config.preferences);

    assert_eq!(context.language.language(), Language::En);
    assert_eq!(context.theme.theme(), Theme::Light);
    assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("en"));
    assert_eq!(store.get(THEME_KEY).unwrap(), None);
}

#[test]
fn test_choices_survive_restart() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    {
        let store = Arc::new(FilePreferenceStore::new(&config.preferences.path));
        let mut context = AppContext::load(store, &config.preferences);
        context.language.set_language(Language::Vi).unwrap();
        context.theme.toggle().unwrap();
    }

    let store = Arc::new(FilePreferenceStore::new(&config.preferences.path));
    let context = AppContext::load(store, &config.preferences);

    assert_eq!(context.language.language(), Language::Vi);
    assert_eq!(context.theme.theme(), Theme::Dark);
    assert_eq!(context.translations().blog.previous, Language::Vi.translations().blog.previous);
}

#[test]
fn test_hand_edited_language_is_normalised() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let path = std::path::Path::new(&config.preferences.path);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, r#"{"language": "fr", "theme": "dark"}"#).unwrap();

    let store = Arc::new(FilePreferenceStore::new(path));
    let context = AppContext::load(Arc::clone(&store), &config.preferences);

    assert_eq!(context.language.language(), Language::En);
    assert_eq!(context.theme.theme(), Theme::Dark);
    assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("en"));
}

#[test]
fn test_corrupt_file_does_not_block_changes() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let path = std::path::Path::new(&config.preferences.path);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "{not json").unwrap();

    let store = Arc::new(FilePreferenceStore::new(path));
    let mut context = AppContext::load(Arc::clone(&store), &config.preferences);
    assert_eq!(context.language.language(), Language::En);

    context.language.set_language(Language::Vi).unwrap();
    assert_eq!(context.theme.toggle().unwrap(), Theme::Dark);

    let reloaded = AppContext::load(Arc::new(FilePreferenceStore::new(path)), &config.preferences);
    assert_eq!(reloaded.language.language(), Language::Vi);
    assert_eq!(reloaded.theme.theme(), Theme::Dark);
}
