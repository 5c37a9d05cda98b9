use engine::storage::{self, Settings, Theme};
use yew::prelude::*;

use crate::storage as local;

#[derive(Clone, PartialEq)]
pub struct SettingsHandle {
    state: UseStateHandle<Settings>,
}

impl SettingsHandle {
    pub fn sound_enabled(&self) -> bool {
        self.state.sound_enabled
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn toggle_sound(&self) {
        self.apply(Settings {
            sound_enabled: !self.state.sound_enabled,
            ..*self.state
        });
    }

    pub fn toggle_theme(&self) {
        let theme = match self.state.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.apply(Settings { theme, ..*self.state });
    }

    fn apply(&self, settings: Settings) {
        match storage::encode_settings(&settings) {
            Ok(blob) => local::write(storage::SETTINGS_KEY, &blob),
            Err(err) => log::warn!("failed to encode settings: {err}"),
        }
        sync_document_theme(settings.theme);
        self.state.set(settings);
    }
}

/// The dark: tailwind variants key off a `dark` class on the root element.
fn sync_document_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let class_list = root.class_list();
        let result = match theme {
            Theme::Dark => class_list.add_1("dark"),
            Theme::Light => class_list.remove_1("dark"),
        };
        if result.is_err() {
            log::warn!("failed to update the theme class");
        }
    }
}

#[hook]
pub fn use_settings() -> SettingsHandle {
    let state = use_state(|| {
        local::read(storage::SETTINGS_KEY)
            .map(|blob| storage::decode_settings(&blob))
            .unwrap_or_default()
    });

    {
        let theme = state.theme;
        use_effect_with(theme, move |theme| {
            sync_document_theme(*theme);
            || ()
        });
    }

    SettingsHandle { state }
}
