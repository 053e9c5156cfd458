//! Streaming HTML fragments.
//!
//! A [`Fragment`] knows how to write itself to a sink. Fragments are plain
//! values that borrow the data they render, so whole documents can be
//! assembled from small pieces and written in one pass without building
//! intermediate strings.

use std::io::{self, Write};

pub trait Fragment {
    fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()>;
}

/// Markup written verbatim. Only for literals owned by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Raw<'a>(pub &'a str);

/// User-controlled text, entity-escaped on the way out
#[derive(Debug, Clone, Copy)]
pub struct Text<'a>(pub &'a str);

/// `<name>body</name>`
#[derive(Debug, Clone, Copy)]
pub struct Tag<'a, F> {
    name: &'a str,
    body: F,
}

/// `<a href="href">text</a>`, both parts escaped
#[derive(Debug, Clone, Copy)]
pub struct Anchor<'a> {
    href: &'a str,
    text: &'a str,
}

/// One fragment per element of a slice, in order
pub struct Each<'a, T, F> {
    items: &'a [T],
    render: F,
}

pub fn raw(text: &str) -> Raw<'_> {
    Raw(text)
}

pub fn text(text: &str) -> Text<'_> {
    Text(text)
}

pub fn tag<F: Fragment>(name: &str, body: F) -> Tag<'_, F> {
    Tag { name, body }
}

pub fn anchor<'a>(href: &'a str, text: &'a str) -> Anchor<'a> {
    Anchor { href, text }
}

pub fn each<'a, T, F, R>(items: &'a [T], render: F) -> Each<'a, T, F>
where
    F: Fn(&'a T) -> R,
    R: Fragment,
{
    Each { items, render }
}

impl Fragment for () {
    fn write_to<W: Write + ?Sized>(&self, _out: &mut W) -> io::Result<()> {
        Ok(())
    }
}

impl Fragment for Raw<'_> {
    fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.0.as_bytes())
    }
}

impl Fragment for Text<'_> {
    fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write_escaped(self.0, out)
    }
}

impl<F: Fragment> Fragment for Tag<'_, F> {
    fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "<{}>", self.name)?;
        self.body.write_to(out)?;
        write!(out, "</{}>", self.name)
    }
}

impl Fragment for Anchor<'_> {
    fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(b"<a href=\"")?;
        write_escaped(self.href, out)?;
        out.write_all(b"\">")?;
        write_escaped(self.text, out)?;
        out.write_all(b"</a>")
    }
}

impl<'a, T, F, R> Fragment for Each<'a, T, F>
where
    F: Fn(&'a T) -> R,
    R: Fragment,
{
    fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for item in self.items {
            (self.render)(item).write_to(out)?;
        }
        Ok(())
    }
}

impl<F: Fragment> Fragment for Option<F> {
    fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Some(f) => f.write_to(out),
            None => Ok(()),
        }
    }
}

impl<A: Fragment, B: Fragment> Fragment for (A, B) {
    fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        self.0.write_to(out)?;
        self.1.write_to(out)
    }
}

impl<A: Fragment, B: Fragment, C: Fragment> Fragment for (A, B, C) {
    fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        self.0.write_to(out)?;
        self.1.write_to(out)?;
        self.2.write_to(out)
    }
}

impl<A: Fragment, B: Fragment, C: Fragment, D: Fragment> Fragment for (A, B, C, D) {
    fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        self.0.write_to(out)?;
        self.1.write_to(out)?;
        self.2.write_to(out)?;
        self.3.write_to(out)
    }
}

fn entity(byte: u8) -> Option<&'static str> {
    match byte {
        b'&' => Some("&amp;"),
        b'\'' => Some("&#39;"),
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        b'"' => Some("&#34;"),
        _ => None,
    }
}

/// Write `s` with `& ' < > "` replaced by entities, copying the runs in between as-is
pub fn write_escaped<W: Write + ?Sized>(s: &str, out: &mut W) -> io::Result<()> {
    let bytes = s.as_bytes();
    let mut start = 0;

    for (i, &b) in bytes.iter().enumerate() {
        if let Some(ent) = entity(b) {
            out.write_all(&bytes[start..i])?;
            out.write_all(ent.as_bytes())?;
            start = i + 1;
        }
    }

    out.write_all(&bytes[start..])
}
