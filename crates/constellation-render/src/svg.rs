use constellation_core::CanvasSpec;
use std::fmt::Write as _;

pub(crate) const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Fixed-precision number for SVG attributes, rounded like `Number.prototype.toFixed`.
///
/// `{:.N}` breaks exact ties toward even (`0.25` -> `0.2`); here they round away from zero
/// (`0.25` -> `0.3`). Values that only look like ties in decimal (`1.005`) are below the tie
/// in binary and round down in both. Non-finite values print as zero and negative zero loses
/// its sign, so regenerated files only differ where the geometry does.
pub fn fmt_fixed(v: f64, digits: usize) -> String {
    if !v.is_finite() {
        return format!("{:.*}", digits, 0.0);
    }
    let s = match round_exact_tie(v, digits) {
        Some(s) => s,
        None => format!("{v:.digits$}"),
    };
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}

/// Digits past the requested precision that decide whether `v` sits exactly on a tie.
/// A tie at `digits` has a terminating expansion of `digits + 1` places, and any finite
/// double off a tie differs from it well within this many places.
const TIE_CHECK_DIGITS: usize = 32;

/// `Some(rounded)` when `v` is exactly halfway between two `digits`-place decimals.
fn round_exact_tie(v: f64, digits: usize) -> Option<String> {
    let expanded = format!("{:.*}", digits + TIE_CHECK_DIGITS, v.abs());
    let point = expanded.find('.')?;
    let cut = point + 1 + digits;
    let (kept, rest) = expanded.split_at(cut);
    let mut rest = rest.bytes();
    if rest.next() != Some(b'5') || !rest.all(|b| b == b'0') {
        return None;
    }

    let kept = kept.strip_suffix('.').unwrap_or(kept);
    let mut out = increment_decimal(kept);
    if v.is_sign_negative() {
        out.insert(0, '-');
    }
    Some(out)
}

/// Adds one unit in the last place of a non-negative decimal string.
fn increment_decimal(s: &str) -> String {
    let mut bytes = s.as_bytes().to_vec();
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        match *b {
            b'.' => {}
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                carry = false;
                break;
            }
        }
    }
    if carry {
        bytes.insert(0, b'1');
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Coordinates and radii.
pub(crate) fn fmt_len(v: f64) -> String {
    fmt_fixed(v, 1)
}

/// Opacities and animation times.
pub(crate) fn fmt_unit(v: f64) -> String {
    fmt_fixed(v, 2)
}

/// Canvas dimensions are whole pixels in practice; keep them free of a trailing `.0`.
pub(crate) fn fmt_dim(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        fmt_len(v)
    }
}

pub(crate) fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Root element plus the transparent backdrop.
pub(crate) fn open_document(out: &mut String, canvas: &CanvasSpec) {
    let w = fmt_dim(canvas.width);
    let h = fmt_dim(canvas.height);
    let _ = writeln!(
        out,
        r#"<svg viewBox="0 0 {w} {h}" width="{w}" height="{h}" xmlns="{SVG_NS}">"#
    );
    let _ = writeln!(out, r#"  <rect width="{w}" height="{h}" fill="transparent"/>"#);
}

pub(crate) fn close_document(out: &mut String) {
    out.push_str("</svg>\n");
}
