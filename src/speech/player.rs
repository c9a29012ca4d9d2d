//! Plays synthesized clips on the default output device.

use crate::error::PlaybackError;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::io::Cursor;

pub struct AudioPlayer {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Option<Sink>,
}

impl AudioPlayer {
    pub fn try_default() -> Result<Self, PlaybackError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| PlaybackError::Device(e.to_string()))?;
        Ok(Self {
            _stream: stream,
            handle,
            sink: None,
        })
    }

    /// Starts playing `clip`, cutting off whatever was playing before.
    pub fn play(&mut self, clip: Vec<u8>) -> Result<(), PlaybackError> {
        self.stop();

        let source = decode(clip)?;
        let sink = Sink::try_new(&self.handle).map_err(|e| PlaybackError::Device(e.to_string()))?;
        sink.append(source);
        self.sink = Some(sink);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}

/// Decodes an MP3 or WAV clip held in memory.
pub fn decode(clip: Vec<u8>) -> Result<Decoder<Cursor<Vec<u8>>>, PlaybackError> {
    if clip.is_empty() {
        return Err(PlaybackError::Decode("clip is empty".to_string()));
    }
    Decoder::new(Cursor::new(clip)).map_err(|e| PlaybackError::Decode(e.to_string()))
}
