// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together localization, the form controller and the
//! upload transport, and translates messages into side effects like file
//! dialogs, file reads and uploads.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::error::TransportError;
use crate::form::UploadForm;
use crate::i18n::fluent::I18n;
use crate::transport::HttpTransport;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    form: UploadForm,
    /// Client construction can fail; the error is reported on the first
    /// submission rather than at startup.
    transport: Result<HttpTransport, TransportError>,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("form", &self.form)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the settings file and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(err) = config_warning {
            tracing::warn!(%err, "failed to load settings, using defaults");
        }

        (Self::with_config(flags, &config), Task::none())
    }

    /// Builds the state from an already loaded configuration.
    fn with_config(flags: Flags, config: &Config) -> Self {
        let i18n = I18n::new(flags.lang, config);

        let endpoint = config.resolve_endpoint(flags.endpoint.as_deref());
        let transport = HttpTransport::new(endpoint, config.upload.timeout());
        match &transport {
            Ok(transport) => {
                tracing::info!(endpoint = %transport.endpoint(), locale = %i18n.current_locale(), "application started");
            }
            Err(err) => tracing::error!(%err, "failed to build HTTP client"),
        }

        Self {
            i18n,
            form: UploadForm::new(),
            transport,
            theme_mode: config.general.theme_mode,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            form: &mut self.form,
            transport: &self.transport,
        };

        match message {
            Message::Form(form_message) => update::handle_form_message(&mut ctx, form_message),
            Message::FilesPicked(paths) => update::handle_files_picked(paths),
            Message::FileDropped(path) => update::handle_file_dropped(path),
            Message::FilesLoaded(files) => update::handle_files_loaded(&mut ctx, files),
            Message::UploadFinished(result) => update::handle_upload_finished(&mut ctx, result),
            Message::EscapePressed => update::handle_escape(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            form: &self.form,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::form::{FailureReason, Status};
    use crate::media::PickedFile;
    use crate::ui::upload_form::Message as FormMessage;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn app() -> App {
        App::with_config(
            Flags {
                lang: Some("en-US".to_string()),
                ..Flags::default()
            },
            &Config::default(),
        )
    }

    fn png(name: &str) -> PickedFile {
        PickedFile::new(name, PNG_MAGIC.to_vec())
    }

    fn fill_form(app: &mut App) {
        let _ = app.update(Message::Form(FormMessage::EmailChanged(
            "a@b.co".to_string(),
        )));
        let _ = app.update(Message::FilesLoaded(vec![png("a.png"), png("b.png")]));
    }

    #[test]
    fn minimum_window_fits_a_full_thumbnail_row() {
        use crate::ui::design_tokens::{sizing, spacing};

        let columns = sizing::GRID_COLUMNS as f32;
        let grid_width =
            columns * sizing::THUMBNAIL_CARD_WIDTH + (columns - 1.0) * spacing::MD;
        // Form panel padding, then page padding on both sides.
        let needed = grid_width + 2.0 * spacing::XL + 2.0 * spacing::LG;

        assert!(config::MIN_WINDOW_WIDTH >= needed);
        let settings = window_settings();
        assert_eq!(
            settings.min_size.map(|size| size.width),
            Some(config::MIN_WINDOW_WIDTH)
        );
    }

    #[test]
    fn new_app_starts_with_empty_form() {
        let app = app();
        assert!(app.form.email().is_empty());
        assert!(app.form.images().is_empty());
        assert_eq!(app.form.status(), &Status::Idle);
        assert!(app.transport.is_ok());
    }

    #[test]
    fn title_is_localized() {
        let app = App::with_config(
            Flags {
                lang: Some("fr".to_string()),
                ..Flags::default()
            },
            &Config::default(),
        );
        assert_eq!(app.title(), "Envoi de réclamation");
        assert_eq!(self::app().title(), "Claim Uploader");
    }

    #[test]
    fn cli_endpoint_is_used_by_transport() {
        let app = App::with_config(
            Flags {
                endpoint: Some("http://127.0.0.1:9/hook".to_string()),
                ..Flags::default()
            },
            &Config::default(),
        );
        let transport = app.transport.as_ref().expect("client should build");
        assert_eq!(transport.endpoint(), "http://127.0.0.1:9/hook");
    }

    #[test]
    fn loaded_files_keep_only_images() {
        let mut app = app();
        let _ = app.update(Message::FilesLoaded(vec![
            png("a.png"),
            PickedFile::new("notes.txt", b"plain text".to_vec()),
            png("b.png"),
        ]));

        let names: Vec<_> = app.form.images().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["a.png", "b.png"]);
    }

    #[test]
    fn remove_message_drops_entry() {
        let mut app = app();
        fill_form(&mut app);
        let _ = app.update(Message::Form(FormMessage::RemoveImage(0)));
        assert_eq!(app.form.images().len(), 1);
        assert_eq!(app.form.images()[0].name(), "b.png");
    }

    #[test]
    fn submit_without_email_reports_validation_failure() {
        let mut app = app();
        let _ = app.update(Message::FilesLoaded(vec![png("a.png")]));
        let _ = app.update(Message::Form(FormMessage::Submit));
        assert_eq!(
            app.form.status(),
            &Status::Failure(FailureReason::Validation(ValidationError::MissingEmail))
        );
    }

    #[test]
    fn successful_upload_resets_form() {
        let mut app = app();
        fill_form(&mut app);

        let _ = app.update(Message::Form(FormMessage::Submit));
        assert_eq!(app.form.status(), &Status::Uploading);

        let _ = app.update(Message::UploadFinished(Ok(())));
        assert_eq!(app.form.status(), &Status::Success);
        assert!(app.form.email().is_empty());
        assert!(app.form.images().is_empty());
    }

    #[test]
    fn failed_upload_keeps_form() {
        let mut app = app();
        fill_form(&mut app);

        let _ = app.update(Message::Form(FormMessage::Submit));
        let _ = app.update(Message::UploadFinished(Err(TransportError::Status(500))));

        assert_eq!(
            app.form.status(),
            &Status::Failure(FailureReason::Transport(TransportError::Status(500)))
        );
        assert_eq!(app.form.email(), "a@b.co");
        assert_eq!(app.form.images().len(), 2);
    }

    #[test]
    fn missing_client_fails_submission_immediately() {
        let mut app = app();
        app.transport = Err(TransportError::Client("no tls backend".to_string()));
        fill_form(&mut app);

        let _ = app.update(Message::Form(FormMessage::Submit));

        assert_eq!(
            app.form.status(),
            &Status::Failure(FailureReason::Transport(TransportError::Client(
                "no tls backend".to_string()
            )))
        );
        assert!(!app.form.is_busy());
    }

    #[test]
    fn escape_closes_zoom() {
        let mut app = app();
        fill_form(&mut app);
        let id = app.form.images()[1].id();

        let _ = app.update(Message::Form(FormMessage::ZoomImage(id)));
        assert_eq!(app.form.zoomed_image().map(|i| i.name()), Some("b.png"));

        let _ = app.update(Message::EscapePressed);
        assert!(app.form.zoomed_image().is_none());
    }

    #[test]
    fn close_zoom_message_clears_zoom() {
        let mut app = app();
        fill_form(&mut app);
        let id = app.form.images()[0].id();

        let _ = app.update(Message::Form(FormMessage::ZoomImage(id)));
        let _ = app.update(Message::Form(FormMessage::CloseZoom));
        assert!(app.form.zoomed_id().is_none());
    }

    #[test]
    fn cancelled_dialog_changes_nothing() {
        let mut app = app();
        fill_form(&mut app);
        let _ = app.update(Message::FilesPicked(None));
        let _ = app.update(Message::FilesPicked(Some(Vec::new())));
        assert_eq!(app.form.images().len(), 2);
    }
}
