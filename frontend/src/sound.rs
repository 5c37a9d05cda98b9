//! Sound effects. Purely observational: nothing awaits playback and a
//! failed play never affects the spin.

use web_sys::HtmlAudioElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Spin,
    Result,
    Click,
}

impl Sound {
    fn url(self) -> &'static str {
        match self {
            Sound::Spin => "/sounds/spin.mp3",
            Sound::Result => "/sounds/result.mp3",
            Sound::Click => "/sounds/click.mp3",
        }
    }
}

pub fn play(sound: Sound, enabled: bool) {
    if !enabled {
        return;
    }
    match HtmlAudioElement::new_with_src(sound.url()) {
        Ok(audio) => {
            audio.set_current_time(0.0);
            // Autoplay restrictions reject the promise; that's fine.
            let _ = audio.play();
        }
        Err(err) => log::warn!("failed to create audio element: {err:?}"),
    }
}
