// SPDX-License-Identifier: MPL-2.0
use claim_uploader::app::config::{self, Config, GeneralConfig, UploadConfig};
use claim_uploader::i18n::fluent::I18n;
use claim_uploader::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::System,
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("submit-button"), "Submit Claim");

    // 2. Change config to fr
    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::System,
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_every_locale_has_the_same_keys() {
    let keys = [
        "window-title",
        "form-title",
        "email-label",
        "email-placeholder",
        "images-label",
        "images-choose-button",
        "images-drop-hint",
        "submit-button",
        "status-missing-email",
        "status-missing-images",
        "status-uploading",
        "status-success",
        "status-upload-failed",
        "upload-error-network",
        "upload-error-timeout",
        "zoom-dismiss-hint",
    ];

    for locale in ["en-US", "fr"] {
        let i18n = I18n::new(Some(locale.to_string()), &Config::default());
        for key in keys {
            let value = i18n.tr(key);
            assert!(!value.starts_with("MISSING:"), "{locale} lacks {key}");
        }
    }
}

#[test]
fn test_upload_settings_drive_endpoint_and_timeout() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[upload]\nendpoint = \"http://localhost:5678/webhook/claims\"\ntimeout_secs = 30\n",
    )
    .expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(
        loaded.upload,
        UploadConfig {
            endpoint: Some("http://localhost:5678/webhook/claims".to_string()),
            timeout_secs: Some(30),
        }
    );
    assert_eq!(
        loaded.resolve_endpoint(None),
        "http://localhost:5678/webhook/claims"
    );
    assert_eq!(
        loaded.upload.timeout(),
        Some(std::time::Duration::from_secs(30))
    );
}
