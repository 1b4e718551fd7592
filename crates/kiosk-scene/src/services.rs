//! Side effects the scenes depend on, behind traits so they can be faked.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use kiosk_config::KioskConfig;

/// Audible confirmation of a click.
pub trait ClickFeedback {
    fn play(&self);
}

/// Feedback used when no click sound is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentFeedback;

impl ClickFeedback for SilentFeedback {
    fn play(&self) {}
}

/// Opens URLs outside the launcher.
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<()>;
}

/// Hands URLs to the platform's default handler without waiting for it.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        let mut cmd = open_command();
        cmd.arg(url);
        spawn_reaped(cmd).with_context(|| format!("failed to launch the system browser for {url}"))?;
        Ok(())
    }
}

/// Spawn `cmd` with null stdio and wait for it on a detached thread so the
/// finished process is reaped.
fn spawn_reaped(mut cmd: Command) -> std::io::Result<JoinHandle<std::io::Result<ExitStatus>>> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    let pid = child.id();
    log::debug!("spawned opener (pid {pid})");
    thread::Builder::new()
        .name("opener-reaper".into())
        .spawn(move || {
            let status = child.wait();
            log::debug!("opener (pid {pid}) finished: {status:?}");
            status
        })
}

#[cfg(target_os = "macos")]
fn open_command() -> Command {
    Command::new("open")
}

#[cfg(target_os = "windows")]
fn open_command() -> Command {
    let mut cmd = Command::new("cmd");
    // The empty argument is the window title `start` expects first.
    cmd.args(["/C", "start", ""]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn open_command() -> Command {
    Command::new("xdg-open")
}

#[cfg(feature = "audio")]
pub use sound::SoundFeedback;

#[cfg(feature = "audio")]
mod sound {
    use std::io::Cursor;
    use std::path::Path;
    use std::sync::Arc;

    use anyhow::{Context, Result, anyhow};

    use super::ClickFeedback;

    /// Plays a short clip on the default output device for every click.
    pub struct SoundFeedback {
        _stream: rodio::OutputStream,
        handle: rodio::OutputStreamHandle,
        clip: Arc<[u8]>,
    }

    impl SoundFeedback {
        pub fn load(path: &Path) -> Result<Self> {
            let clip: Arc<[u8]> = std::fs::read(path)
                .with_context(|| format!("failed to read click sound {}", path.display()))?
                .into();
            // Reject undecodable files at start-up rather than on every click.
            rodio::Decoder::new(Cursor::new(clip.clone()))
                .map_err(|e| anyhow!("failed to decode click sound {}: {e}", path.display()))?;
            let (stream, handle) = rodio::OutputStream::try_default()
                .map_err(|e| anyhow!("no audio output device: {e}"))?;
            Ok(Self { _stream: stream, handle, clip })
        }
    }

    impl ClickFeedback for SoundFeedback {
        fn play(&self) {
            match self.handle.play_once(Cursor::new(self.clip.clone())) {
                Ok(sink) => sink.detach(),
                Err(err) => log::debug!("click sound failed: {err}"),
            }
        }
    }
}

/// Click feedback for the sound file at `path`. Falls back to silence when
/// the file cannot be played.
pub fn click_feedback(path: &Path) -> Box<dyn ClickFeedback> {
    if !path.exists() {
        log::info!("no click sound at {}; clicks are silent", path.display());
        return Box::new(SilentFeedback);
    }
    sound_feedback(path)
}

#[cfg(feature = "audio")]
fn sound_feedback(path: &Path) -> Box<dyn ClickFeedback> {
    match SoundFeedback::load(path) {
        Ok(sound) => Box::new(sound),
        Err(err) => {
            log::warn!("{err:#}; clicks are silent");
            Box::new(SilentFeedback)
        }
    }
}

#[cfg(not(feature = "audio"))]
fn sound_feedback(path: &Path) -> Box<dyn ClickFeedback> {
    log::info!("built without audio support; ignoring {}", path.display());
    Box::new(SilentFeedback)
}

/// The collaborators scenes reach through [`crate::SceneCtx`].
pub struct Services {
    pub feedback: Box<dyn ClickFeedback>,
    pub opener: Box<dyn LinkOpener>,
}

impl Services {
    pub fn new(feedback: Box<dyn ClickFeedback>, opener: Box<dyn LinkOpener>) -> Self {
        Self { feedback, opener }
    }

    pub fn from_config(config: &KioskConfig) -> Self {
        let sound = config.assets.root.join(&config.assets.click_sound);
        Self::new(click_feedback(&sound), Box::new(SystemOpener))
    }
}
