//! Runtime-gated debug output
//!
//! Values are printed through one [`Loggable`] type instead of a family of
//! overloads. Any [`core::fmt::Write`] can serve as the sink; a disabled log
//! drops everything without touching it.

use core::fmt::{self, Write};

/// Base used to print integers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Radix {
    Bin,
    Oct,
    #[default]
    Dec,
    Hex,
}

/// Digits printed after the decimal point by default
pub const DEFAULT_PRECISION: u8 = 2;

/// A value the debug log can print
#[derive(Clone, Copy)]
pub enum Loggable<'a> {
    Text(&'a str),
    Char(char),
    Integer { value: i64, radix: Radix },
    Float { value: f64, precision: u8 },
    Display(&'a dyn fmt::Display),
}

impl Loggable<'_> {
    pub const fn int(value: i64) -> Self {
        Self::Integer {
            value,
            radix: Radix::Dec,
        }
    }

    pub const fn hex(value: i64) -> Self {
        Self::Integer {
            value,
            radix: Radix::Hex,
        }
    }

    pub const fn float(value: f64) -> Self {
        Self::Float {
            value,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl fmt::Display for Loggable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Text(text) => f.write_str(text),
            Self::Char(c) => f.write_char(c),
            Self::Integer { value, radix } => match radix {
                Radix::Bin => write!(f, "{:b}", value),
                Radix::Oct => write!(f, "{:o}", value),
                Radix::Dec => write!(f, "{}", value),
                Radix::Hex => write!(f, "{:X}", value),
            },
            Self::Float { value, precision } => write!(f, "{:.*}", usize::from(precision), value),
            Self::Display(value) => write!(f, "{}", value),
        }
    }
}

impl<'a> From<&'a str> for Loggable<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl From<char> for Loggable<'_> {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

macro_rules! loggable_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Loggable<'_> {
                fn from(value: $int) -> Self {
                    Self::int(i64::from(value))
                }
            }
        )*
    };
}

loggable_from_int!(u8, i8, u16, i16, u32, i32, i64);

impl From<f32> for Loggable<'_> {
    fn from(value: f32) -> Self {
        Self::float(f64::from(value))
    }
}

impl From<f64> for Loggable<'_> {
    fn from(value: f64) -> Self {
        Self::float(value)
    }
}

/// Sink printing over the ESP32 console
#[cfg(feature = "esp32-log")]
#[derive(Debug, Default, Clone, Copy)]
pub struct EspPrintln;

#[cfg(feature = "esp32-log")]
impl Write for EspPrintln {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        esp_println::print!("{}", s);
        Ok(())
    }
}

/// Debug log with a runtime on/off switch
pub struct DebugLog<S: Write> {
    sink: S,
    enabled: bool,
}

impl<S: Write> DebugLog<S> {
    /// Create a disabled log
    pub const fn new(sink: S) -> Self {
        Self {
            sink,
            enabled: false,
        }
    }

    pub fn begin(&mut self) {
        self.enabled = true;
    }

    pub fn stop(&mut self) {
        self.enabled = false;
    }

    pub const fn is_debug_on(&self) -> bool {
        self.enabled
    }

    pub fn print<'v>(&mut self, value: impl Into<Loggable<'v>>) {
        if self.enabled {
            self.emit(format_args!("{}", value.into()));
        }
    }

    pub fn println<'v>(&mut self, value: impl Into<Loggable<'v>>) {
        if self.enabled {
            self.emit(format_args!("{}\n", value.into()));
        }
    }

    /// Print an empty line
    pub fn newline(&mut self) {
        if self.enabled {
            self.emit(format_args!("\n"));
        }
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        // Debug output is best effort
        let _ = self.sink.write_fmt(args);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
