//! Printf-style formatted construction against a typed argument list.
//!
//! `format` walks the template twice through the same rendering routine: a
//! counting pass computes the exact output length, then a single allocation
//! of that length is written. The template is treated as immutable for the
//! duration of the call; the write pass can therefore never outgrow the
//! measured size.

use crate::buffer::OwnedBuffer;
use crate::convert::{decimal_in, hex_in};
use crate::error::{StrError, StrResult};

/// One formatting argument. The tagged variants replace the original's
/// untyped variadic list, so a specifier/argument mismatch is a checked
/// error instead of undefined behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatArg<'a> {
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(&'a [u8]),
    Char(u8),
}

/// Byte sink the renderer writes through. One implementation counts, the
/// other fills the final buffer.
pub(crate) trait Sink {
    fn put(&mut self, bytes: &[u8]);
}

/// Measuring pass: counts bytes without storing them.
#[derive(Default)]
pub(crate) struct CountSink {
    len: usize,
}

impl CountSink {
    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

impl Sink for CountSink {
    fn put(&mut self, bytes: &[u8]) {
        self.len += bytes.len();
    }
}

/// Writing pass: appends into a buffer whose capacity was reserved from the
/// measuring pass, so no write reallocates.
pub(crate) struct BufSink<'a> {
    out: &'a mut OwnedBuffer,
}

impl<'a> BufSink<'a> {
    pub(crate) fn new(out: &'a mut OwnedBuffer) -> Self {
        Self { out }
    }
}

impl Sink for BufSink<'_> {
    fn put(&mut self, bytes: &[u8]) {
        self.out.push_bytes(bytes);
    }
}

/// Render `v` as fixed-point decimal with 6 fractional digits.
pub(crate) fn put_float(sink: &mut dyn Sink, v: f64) {
    use std::fmt::Write;

    struct Adapter<'a>(&'a mut dyn Sink);

    impl std::fmt::Write for Adapter<'_> {
        fn write_str(&mut self, s: &str) -> std::fmt::Result {
            self.0.put(s.as_bytes());
            Ok(())
        }
    }

    // Infallible: both sinks always accept.
    let _ = write!(Adapter(sink), "{v:.6}");
}

fn put_int(sink: &mut dyn Sink, v: i64) {
    let mut scratch = [0u8; 20];
    if v < 0 {
        sink.put(b"-");
    }
    sink.put(decimal_in(&mut scratch, v.unsigned_abs()));
}

fn put_uint(sink: &mut dyn Sink, v: u64) {
    let mut scratch = [0u8; 20];
    sink.put(decimal_in(&mut scratch, v));
}

fn put_hex(sink: &mut dyn Sink, v: u64) {
    let mut scratch = [0u8; 16];
    sink.put(hex_in(&mut scratch, v));
}

fn render_spec(spec: u8, arg: &FormatArg<'_>, index: usize, sink: &mut dyn Sink) -> StrResult<()> {
    match (spec, arg) {
        (b'd' | b'i', FormatArg::Int(v)) => put_int(sink, *v),
        (b'u', FormatArg::Uint(v)) => put_uint(sink, *v),
        (b'x', FormatArg::Uint(v)) => put_hex(sink, *v),
        (b'f', FormatArg::Float(v)) => put_float(sink, *v),
        (b's', FormatArg::Str(s)) => sink.put(s),
        (b'c', FormatArg::Char(c)) => sink.put(&[*c]),
        (b'd' | b'i' | b'u' | b'x' | b'f' | b's' | b'c', _) => {
            return Err(StrError::MismatchedArgument {
                spec: spec as char,
                index,
            });
        }
        _ => return Err(StrError::UnknownSpecifier(spec as char)),
    }
    Ok(())
}

fn render(template: &[u8], args: &[FormatArg<'_>], sink: &mut dyn Sink) -> StrResult<()> {
    let mut next_arg = 0;
    let mut lit_start = 0;
    let mut i = 0;

    while i < template.len() {
        if template[i] != b'%' {
            i += 1;
            continue;
        }

        sink.put(&template[lit_start..i]);
        let spec = *template
            .get(i + 1)
            .ok_or(StrError::UnterminatedSpecifier)?;
        i += 2;
        lit_start = i;

        if spec == b'%' {
            sink.put(b"%");
            continue;
        }

        let arg = args.get(next_arg).ok_or(StrError::MissingArgument {
            index: next_arg,
            provided: args.len(),
        })?;
        render_spec(spec, arg, next_arg, sink)?;
        next_arg += 1;
    }

    sink.put(&template[lit_start..]);
    Ok(())
}

/// Build a formatted string from `template` and `args`.
///
/// Recognized conversions: `%d`/`%i` (Int), `%u` (Uint), `%x` (Uint,
/// lowercase hex), `%f` (Float, 6 fractional digits), `%s` (Str), `%c`
/// (Char), and `%%` for a literal percent. Arguments are consumed left to
/// right; surplus arguments are ignored. The result holds exactly the
/// rendered bytes: no truncation, no over-allocation.
pub fn format(template: &[u8], args: &[FormatArg<'_>]) -> StrResult<OwnedBuffer> {
    let mut counter = CountSink::default();
    render(template, args, &mut counter)?;
    let total = counter.len();

    let mut out = OwnedBuffer::with_exact_capacity(total)?;
    render(template, args, &mut BufSink::new(&mut out))?;

    debug_assert_eq!(out.len(), total);
    Ok(out)
}
