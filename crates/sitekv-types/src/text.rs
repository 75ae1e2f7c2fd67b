//! Message interpolation and the pluggable translation capability.
//!
//! Diagnostics in sitekv are composed from templates with positional
//! placeholders: `{0}`, `{1}`, and so on. Translation of the template is a
//! separate capability so embedders can localize messages; the default
//! implementation is a pass-through.

use std::fmt::{self, Write};

/// Substitute positional placeholders in a message template.
///
/// `{n}` is replaced by the display form of `args[n]`. A placeholder with no
/// corresponding argument is left verbatim, and `{{` / `}}` escape literal
/// braces.
///
/// # Examples
///
/// ```
/// use sitekv_types::text::interpolate;
///
/// let msg = interpolate("no site found for id {0}", &[&5]);
/// assert_eq!(msg, "no site found for id 5");
///
/// assert_eq!(interpolate("literal {{0}}", &[&5]), "literal {0}");
/// assert_eq!(interpolate("dangling {1}", &[&5]), "dangling {1}");
/// ```
pub fn interpolate(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut digits = String::new();
                while let Some(d) = chars.peek().copied() {
                    if d.is_ascii_digit() {
                        digits.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }

                // Only a complete `{n}` is a placeholder; anything else is
                // emitted as-is.
                if !digits.is_empty() && chars.peek() == Some(&'}') {
                    chars.next();
                    match digits.parse::<usize>().ok().and_then(|n| args.get(n)) {
                        Some(arg) => {
                            let _ = write!(out, "{arg}");
                        }
                        None => {
                            out.push('{');
                            out.push_str(&digits);
                            out.push('}');
                        }
                    }
                } else {
                    out.push('{');
                    out.push_str(&digits);
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Capability for translating human-readable diagnostics.
///
/// Implementations translate the message template itself; placeholder
/// substitution happens afterwards, so translations may reorder placeholders
/// freely.
pub trait Translate: Send + Sync {
    /// Translate a message template.
    fn translate(&self, message: &str) -> String;
}

/// The pass-through translator: every message is returned unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTranslate;

impl Translate for NoTranslate {
    fn translate(&self, message: &str) -> String {
        message.to_string()
    }
}
