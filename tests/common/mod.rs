use dice_lights::color::BLACK;
use dice_lights::{LED_COUNT, LedBackend, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlushFailed;

/// Backend recording what the facade does to it
pub struct MockBackend {
    pub buffer: [Rgb; LED_COUNT],
    pub shown: [Rgb; LED_COUNT],
    pub set_calls: Vec<(usize, Rgb)>,
    pub flushes: usize,
    pub fail_next_flush: bool,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            buffer: [BLACK; LED_COUNT],
            shown: [BLACK; LED_COUNT],
            set_calls: Vec::new(),
            flushes: 0,
            fail_next_flush: false,
        }
    }
}

impl LedBackend for MockBackend {
    type Error = FlushFailed;

    fn led_count(&self) -> usize {
        LED_COUNT
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        self.buffer[index] = color;
        self.set_calls.push((index, color));
    }

    fn clear(&mut self) {
        self.buffer = [BLACK; LED_COUNT];
    }

    fn flush(&mut self) -> Result<(), FlushFailed> {
        if self.fail_next_flush {
            self.fail_next_flush = false;
            return Err(FlushFailed);
        }
        self.shown = self.buffer;
        self.flushes += 1;
        Ok(())
    }
}
