//! Glyph decoration: ANSI foreground colours keyed by emphasis label.

use std::{fmt, str};

use thiserror::Error;
use tracing::debug;

/// A decoration label that names no colour.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("unknown colour name")]
    UnknownName,
    #[error("invalid hex colour digit")]
    InvalidHexDigit,
}

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; 20], len: u8 },
}

impl AnsiCode {
    #[inline]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    /// Foreground colour by name, using the termcolor palette.
    ///
    /// Six hex digits (`ff8800`, optionally `#`-prefixed) select a
    /// true-colour escape instead.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let code = match s.trim().to_ascii_lowercase().as_str() {
            "black" | "grey" => "\x1b[30m",
            "red" => "\x1b[31m",
            "green" => "\x1b[32m",
            "yellow" => "\x1b[33m",
            "blue" => "\x1b[34m",
            "magenta" => "\x1b[35m",
            "cyan" => "\x1b[36m",
            "white" | "light_grey" => "\x1b[37m",
            "dark_grey" => "\x1b[90m",
            "light_red" => "\x1b[91m",
            "light_green" => "\x1b[92m",
            "light_yellow" => "\x1b[93m",
            "light_blue" => "\x1b[94m",
            "light_magenta" => "\x1b[95m",
            "light_cyan" => "\x1b[96m",
            _ => return Self::from_hex(s),
        };
        Ok(Self::Static(code))
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::UnknownName);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    /// True-colour escape `ESC[38;2;R;G;Bm`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        let mut buf = [0u8; 20];
        buf[..7].copy_from_slice(b"\x1b[38;2;");
        let mut len = 7;

        for (i, v) in [r, g, b].into_iter().enumerate() {
            len += write_u8(&mut buf[len..], v);
            if i != 2 {
                buf[len] = b';';
                len += 1;
            }
        }
        buf[len] = b'm';
        len += 1;
        Self::Inline {
            buf,
            len: len as u8,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            // only ever filled with ASCII by `rgb`
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or_default(),
        }
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Helpers ---
fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}

/// Wrap `text` in colour + reset sequence.
#[inline]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}

// --- Decoration capability ---

/// Turns a glyph plus emphasis label into its printed form.
pub trait Decorator {
    fn decorate(&self, glyph: char, label: &str) -> String;
}

/// ANSI colour escapes; unknown labels leave the glyph untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ansi;

impl Decorator for Ansi {
    fn decorate(&self, glyph: char, label: &str) -> String {
        let mut tmp = [0u8; 4];
        let text = glyph.encode_utf8(&mut tmp);
        match AnsiCode::from_name(label) {
            Ok(code) => colorize(&code, text),
            Err(e) => {
                debug!(label, error = %e, "no decoration for label");
                text.to_owned()
            }
        }
    }
}

/// No-op decoration for plain-text output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Plain;

impl Decorator for Plain {
    fn decorate(&self, glyph: char, _label: &str) -> String {
        glyph.to_string()
    }
}
