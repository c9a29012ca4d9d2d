//! Offline speech through the `espeak-ng` command line tool.

use super::SpeechSynthesizer;
use crate::error::SynthesisError;
use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub struct EspeakTts {
    program: String,
    timeout: Duration,
}

impl EspeakTts {
    pub fn new(program: &str, timeout: Duration) -> Self {
        Self {
            program: program.to_string(),
            timeout,
        }
    }
}

/// Kills and reaps the process on drop unless it has already exited.
struct RunningChild(Child);

impl Drop for RunningChild {
    fn drop(&mut self) {
        if !matches!(self.0.try_wait(), Ok(Some(_))) {
            let _ = self.0.kill();
            let _ = self.0.wait();
        }
    }
}

/// espeak-ng voices are named by lower-case language tags ("de", "en-gb").
fn voice_for(language_tag: &str) -> String {
    language_tag.trim().replace('_', "-").to_lowercase()
}

impl SpeechSynthesizer for EspeakTts {
    fn name(&self) -> &'static str {
        "espeak-ng"
    }

    fn synthesize(&self, text: &str, language_tag: &str) -> Result<Vec<u8>, SynthesisError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SynthesisError::TextEmpty);
        }

        let child = Command::new(&self.program)
            .arg("--stdout")
            .arg("-v")
            .arg(voice_for(language_tag))
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;
        let mut child = RunningChild(child);

        // Drain stdout on its own thread so a large clip cannot fill the pipe and stall the child.
        let stdout = child.0.stdout.take();
        let reader = thread::spawn(move || -> std::io::Result<Vec<u8>> {
            let mut audio = Vec::new();
            if let Some(mut out) = stdout {
                out.read_to_end(&mut audio)?;
            }
            Ok(audio)
        });

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            if let Some(status) = child.0.try_wait()? {
                break status;
            }
            if Instant::now() >= deadline {
                tracing::warn!(program = %self.program, "espeak-ng killed after timeout");
                return Err(SynthesisError::Timeout(self.timeout));
            }
            thread::sleep(POLL_INTERVAL);
        };

        if !status.success() {
            return Err(SynthesisError::Engine(format!(
                "{} exited with {}",
                self.program, status
            )));
        }

        let audio = reader
            .join()
            .map_err(|_| SynthesisError::Engine("output reader panicked".to_string()))??;
        if audio.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }
        Ok(audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_for_language_tag() {
        assert_eq!(voice_for("de"), "de");
        assert_eq!(voice_for("en_GB"), "en-gb");
        assert_eq!(voice_for(" DE "), "de");
    }

    #[test]
    fn test_missing_program_is_io_error() {
        let tts = EspeakTts::new("espeak-ng-does-not-exist-xyz", Duration::from_secs(1));
        assert!(matches!(
            tts.synthesize("Hallo", "de"),
            Err(SynthesisError::Io(_))
        ));
    }

    #[test]
    fn test_empty_text_is_rejected_before_spawning() {
        let tts = EspeakTts::new("espeak-ng-does-not-exist-xyz", Duration::from_secs(1));
        assert!(matches!(
            tts.synthesize("  ", "de"),
            Err(SynthesisError::TextEmpty)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_dropped_child_is_killed() {
        let mut child = Command::new("sleep")
            .arg("30")
            .stdout(Stdio::piped())
            .spawn()
            .unwrap();
        let mut stdout = child.stdout.take().unwrap();
        let started = Instant::now();

        drop(RunningChild(child));

        // the pipe closes once the process is gone
        let mut rest = Vec::new();
        stdout.read_to_end(&mut rest).unwrap();
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_engine_is_reported() {
        let tts = EspeakTts::new("false", Duration::from_secs(5));
        assert!(matches!(
            tts.synthesize("Hallo", "de"),
            Err(SynthesisError::Engine(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_silent_engine_is_empty_audio() {
        let tts = EspeakTts::new("true", Duration::from_secs(5));
        assert!(matches!(
            tts.synthesize("Hallo", "de"),
            Err(SynthesisError::EmptyAudio)
        ));
    }
}
