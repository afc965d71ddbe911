//! Display session: the state behind the host's render and key callbacks.
//!
//! A [`Session`] owns everything that lives for the whole run: the frame
//! composer with its reusable canvas, the display sink, the optional raw
//! input source and the key queue. Devices are released when the session
//! is dropped, on every exit path.

use crate::compose::FrameComposer;
use crate::display::{DisplayError, DisplaySink};
use crate::input::{InputMapper, RawInputSource};
use crate::queue::{EventQueue, KeyEvent};
use crate::raster::SourceFrame;

pub struct Session {
    composer: FrameComposer,
    display: Box<dyn DisplaySink>,
    input: Option<Box<dyn RawInputSource>>,
    mapper: InputMapper,
    queue: EventQueue,
    frames: u64,
}

impl Session {
    /// Start a session and blank the panel.
    ///
    /// `input` is `None` when the input device could not be opened; the
    /// session then runs without key events.
    pub fn open(
        composer: FrameComposer,
        display: Box<dyn DisplaySink>,
        input: Option<Box<dyn RawInputSource>>,
    ) -> Result<Self, DisplayError> {
        let mut session = Self {
            composer,
            display,
            input,
            mapper: InputMapper::default(),
            queue: EventQueue::new(),
            frames: 0,
        };
        if session.input.is_none() {
            log::warn!("Running without input");
        }
        session.clear_display()?;
        log::info!(
            "Session ready: {}x{} panel, {} mode",
            session.composer.width(),
            session.composer.height(),
            session.composer.mode()
        );
        Ok(session)
    }

    /// Produce one frame.
    ///
    /// Converts the source, writes the whole frame to the display, drains
    /// pending raw input into the key queue and finally requests a refresh.
    pub fn render_frame(&mut self, source: &SourceFrame<'_>) -> Result<(), DisplayError> {
        log::trace!("render_frame {}", self.frames);

        let frame = self.composer.compose(source);
        self.display.write_frame(frame)?;
        self.poll_input();
        self.display.refresh()?;

        self.frames += 1;
        Ok(())
    }

    /// Next queued key event, oldest first.
    pub fn next_key(&mut self) -> Option<KeyEvent> {
        self.queue.pop()
    }

    /// Write an all-black frame without requesting a refresh.
    pub fn clear_display(&mut self) -> Result<(), DisplayError> {
        let blank = vec![0u8; self.composer.frame_len()];
        self.display.write_frame(&blank)?;
        log::debug!("Display cleared");
        Ok(())
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn has_input(&self) -> bool {
        self.input.is_some()
    }

    fn poll_input(&mut self) {
        if let Some(input) = self.input.as_deref_mut() {
            self.mapper.drain(input, &mut self.queue);
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        log::info!("Session closed after {} frames", self.frames);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{RawKeyEvent, KEY_DOWN};
    use crate::raster::{pack_rgb, DisplayMode};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Write(usize),
        Refresh,
    }

    #[derive(Clone, Default)]
    struct RecordingSink {
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl DisplaySink for RecordingSink {
        fn write_frame(&mut self, frame: &[u8]) -> Result<(), DisplayError> {
            self.calls.borrow_mut().push(Call::Write(frame.len()));
            Ok(())
        }

        fn refresh(&mut self) -> Result<(), DisplayError> {
            self.calls.borrow_mut().push(Call::Refresh);
            Ok(())
        }
    }

    #[test]
    fn test_open_clears_without_refresh() {
        let sink = RecordingSink::default();
        let composer = FrameComposer::new(4, 4, DisplayMode::Greyscale).unwrap();
        let _session = Session::open(composer, Box::new(sink.clone()), None).unwrap();

        assert_eq!(*sink.calls.borrow(), vec![Call::Write(16)]);
    }

    #[test]
    fn test_render_writes_then_refreshes() {
        let sink = RecordingSink::default();
        let composer = FrameComposer::new(4, 4, DisplayMode::Dithered).unwrap();
        let mut session = Session::open(composer, Box::new(sink.clone()), None).unwrap();
        sink.calls.borrow_mut().clear();

        let pixels = vec![pack_rgb(10, 20, 30); 4];
        let source = SourceFrame::new(&pixels, 2, 2).unwrap();
        session.render_frame(&source).unwrap();
        session.render_frame(&source).unwrap();

        assert_eq!(
            *sink.calls.borrow(),
            vec![Call::Write(16), Call::Refresh, Call::Write(16), Call::Refresh]
        );
        assert_eq!(session.frames_rendered(), 2);
    }

    #[test]
    fn test_keys_available_after_render() {
        let raw: VecDeque<RawKeyEvent> =
            VecDeque::from(vec![RawKeyEvent::new(KEY_DOWN, 1), RawKeyEvent::new(KEY_DOWN, 0)]);
        let composer = FrameComposer::new(2, 2, DisplayMode::Greyscale).unwrap();
        let mut session =
            Session::open(composer, Box::new(RecordingSink::default()), Some(Box::new(raw))).unwrap();

        assert_eq!(session.next_key(), None);

        let pixels = vec![0u32; 4];
        session
            .render_frame(&SourceFrame::new(&pixels, 2, 2).unwrap())
            .unwrap();

        assert_eq!(session.next_key(), Some(KeyEvent::new(true, 0xAF)));
        assert_eq!(session.next_key(), Some(KeyEvent::new(false, 0xAF)));
        assert_eq!(session.next_key(), None);
    }
}
