//! The markup writer: one growable buffer, stack-disciplined element scopes,
//! and checkpoint/rewind over the buffer.
//!
//! Elements are opened through [`MarkupWriter::element`], which returns an
//! [`ElementScope`] guard. The guard derefs to the writer, so children nest
//! through it, and its `Drop` emits the matching close tag — nesting is
//! LIFO by construction and every opened element closes on every exit path.
//! Guards are weder `Copy` noch `Clone`; falsche Schachtelung scheitert
//! bereits am Borrow-Checker.
//!
//! Checkpoint/rewind supports speculative emission: a caller takes a
//! [`Checkpoint`], emits a subtree, and truncates back if a downstream
//! condition disqualifies it.

use std::ops::{Deref, DerefMut};

use crate::attr::Attr;
use crate::escape::escape_into;

/// A snapshot of the buffer length, taken via [`MarkupWriter::mark`].
///
/// Opaque on purpose: the only valid inputs to [`MarkupWriter::rewind`] are
/// values this writer handed out earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Encoder for one method-body serialization task.
///
/// Owns the output buffer exclusively; single-threaded, not reentrant.
/// Created per task, read out once via [`MarkupWriter::finish`].
#[derive(Debug, Default)]
pub struct MarkupWriter {
    buf: String,
}

impl MarkupWriter {
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// Current buffer contents. Mainly useful in tests; production callers
    /// read the result once via [`MarkupWriter::finish`].
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consumes the writer and returns the rendered markup.
    pub fn finish(self) -> String {
        self.buf
    }

    // ========================================================================
    // Rohe Tag-Primitive
    // ========================================================================

    /// Emits `<name a="escaped-value" …>`. `None` attributes are skipped —
    /// this is how optional metadata is omitted rather than written empty.
    pub fn open_tag(
        &mut self,
        name: &'static str,
        attrs: impl IntoIterator<Item = Option<Attr>>,
    ) {
        self.buf.push('<');
        self.buf.push_str(name);
        self.push_attrs(attrs);
        self.buf.push('>');
    }

    /// Emits `</name>`.
    pub fn close_tag(&mut self, name: &'static str) {
        self.buf.push_str("</");
        self.buf.push_str(name);
        self.buf.push('>');
    }

    /// Emits a self-closing `<name …/>`. With no attributes this is the bare
    /// leaf form (`<Null/>`); with attributes it covers attributed childless
    /// elements (`<NameRef name="x"/>`).
    pub fn leaf_tag(
        &mut self,
        name: &'static str,
        attrs: impl IntoIterator<Item = Option<Attr>>,
    ) {
        self.buf.push('<');
        self.buf.push_str(name);
        self.push_attrs(attrs);
        self.buf.push_str("/>");
    }

    /// Appends escaped text content.
    pub fn text(&mut self, text: &str) {
        escape_into(&mut self.buf, text);
    }

    fn push_attrs(&mut self, attrs: impl IntoIterator<Item = Option<Attr>>) {
        for attr in attrs.into_iter().flatten() {
            self.buf.push(' ');
            self.buf.push_str(attr.name);
            self.buf.push_str("=\"");
            escape_into(&mut self.buf, &attr.value);
            self.buf.push('"');
        }
    }

    // ========================================================================
    // Scoped Elements
    // ========================================================================

    /// Opens an element and returns the guard whose release emits the close
    /// tag. Children are written through the guard (it derefs to the writer).
    pub fn element(
        &mut self,
        name: &'static str,
        attrs: impl IntoIterator<Item = Option<Attr>>,
    ) -> ElementScope<'_> {
        self.open_tag(name, attrs);
        let content_start = self.buf.len();
        ElementScope {
            writer: self,
            name,
            content_start,
        }
    }

    // ========================================================================
    // Checkpoint / Rewind
    // ========================================================================

    /// Snapshots the current write position.
    pub fn mark(&self) -> Checkpoint {
        Checkpoint(self.buf.len())
    }

    /// Truncates the buffer back to `mark`, discarding everything appended
    /// since. Scopes opened after the mark must be released before rewinding;
    /// releasing one afterwards panics instead of writing a dangling close
    /// tag.
    ///
    /// # Panics
    ///
    /// Panics if `mark` lies beyond the current buffer length — rewinding
    /// forward is a contract violation, never a silent extension.
    pub fn rewind(&mut self, mark: Checkpoint) {
        assert!(
            mark.0 <= self.buf.len(),
            "rewind to mark {} beyond current buffer length {}",
            mark.0,
            self.buf.len()
        );
        log::trace!("rewind: discarding {} bytes", self.buf.len() - mark.0);
        self.buf.truncate(mark.0);
    }
}

/// Guard for one open element; releasing it emits `</name>`.
///
/// Not `Copy`/`Clone`: exactly one release per open, in LIFO order.
#[derive(Debug)]
pub struct ElementScope<'a> {
    writer: &'a mut MarkupWriter,
    name: &'static str,
    /// Buffer length direkt hinter dem Open-Tag; Rewind unter diesen Punkt
    /// macht den spaeteren Close zum Kontraktbruch.
    content_start: usize,
}

impl Deref for ElementScope<'_> {
    type Target = MarkupWriter;

    fn deref(&self) -> &MarkupWriter {
        self.writer
    }
}

impl DerefMut for ElementScope<'_> {
    fn deref_mut(&mut self) -> &mut MarkupWriter {
        self.writer
    }
}

impl Drop for ElementScope<'_> {
    fn drop(&mut self) {
        if self.writer.buf.len() < self.content_start {
            // Open-Tag wurde weggerewindet; ein Close-Tag hier wuerde den
            // Puffer korrumpieren. Waehrend eines Unwinds nicht doppelt
            // panicken.
            if !std::thread::panicking() {
                panic!(
                    "close of <{}> after the buffer was rewound past its open tag",
                    self.name
                );
            }
            return;
        }
        self.writer.close_tag(self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::{self, NO_ATTRS};
    use crate::names;

    #[test]
    fn open_close_leaf() {
        let mut w = MarkupWriter::new();
        w.open_tag(names::BLOCK, NO_ATTRS);
        w.leaf_tag(names::NULL, NO_ATTRS);
        w.close_tag(names::BLOCK);
        assert_eq!(w.finish(), "<Block><Null/></Block>");
    }

    #[test]
    fn attribute_werte_escaped() {
        let mut w = MarkupWriter::new();
        w.leaf_tag(names::NAME_REF, [attr::name("a<b&c")]);
        assert_eq!(w.finish(), "<NameRef name=\"a&lt;b&amp;c\"/>");
    }

    #[test]
    fn none_attribute_entfallen() {
        let mut w = MarkupWriter::new();
        w.open_tag(
            names::CAST,
            [attr::special_cast(None), attr::implicit(None)],
        );
        w.close_tag(names::CAST);
        assert_eq!(w.finish(), "<Cast></Cast>");
    }

    #[test]
    fn scoped_nesting_lifo() {
        let mut w = MarkupWriter::new();
        {
            let mut outer = w.element(names::BLOCK, NO_ATTRS);
            {
                let mut inner = outer.element(names::EXPRESSION, NO_ATTRS);
                inner.text("x > 1");
            }
            outer.leaf_tag(names::NULL, NO_ATTRS);
        }
        assert_eq!(
            w.finish(),
            "<Block><Expression>x &gt; 1</Expression><Null/></Block>"
        );
    }

    #[test]
    fn scope_schliesst_bei_early_return() {
        fn emit(w: &mut MarkupWriter, fail: bool) -> Result<(), ()> {
            let mut scope = w.element(names::EXPRESSION, NO_ATTRS);
            if fail {
                return Err(());
            }
            scope.text("ok");
            Ok(())
        }

        let mut w = MarkupWriter::new();
        assert!(emit(&mut w, true).is_err());
        // Close-Tag trotz early return geschrieben.
        assert_eq!(w.finish(), "<Expression></Expression>");
    }

    #[test]
    fn mark_rewind_restores_content() {
        let mut w = MarkupWriter::new();
        w.open_tag(names::BLOCK, NO_ATTRS);
        let before = w.as_str().to_owned();
        let cp = w.mark();
        {
            let mut attempt = w.element(names::CAST, [attr::special_cast(Some(
                crate::attr::SpecialCast::Try,
            ))]);
            attempt.text("discarded");
        }
        assert_ne!(w.as_str(), before);
        w.rewind(cp);
        assert_eq!(w.as_str(), before);
        w.close_tag(names::BLOCK);
        assert_eq!(w.finish(), "<Block></Block>");
    }

    #[test]
    fn rewind_mehrfach_auf_gleichen_mark() {
        let mut w = MarkupWriter::new();
        w.text("stable");
        let cp = w.mark();
        w.text("a");
        w.rewind(cp);
        w.text("bb");
        w.rewind(cp);
        assert_eq!(w.finish(), "stable");
    }

    #[test]
    #[should_panic(expected = "beyond current buffer length")]
    fn rewind_vorwaerts_panics() {
        let mut w = MarkupWriter::new();
        let early = w.mark();
        w.text("0123456789");
        let late = w.mark();
        w.rewind(early);
        // late liegt jetzt hinter dem Pufferende.
        w.rewind(late);
    }

    #[test]
    #[should_panic(expected = "rewound past its open tag")]
    fn scope_release_nach_rewind_panics() {
        let mut w = MarkupWriter::new();
        let cp = w.mark();
        let mut scope = w.element(names::EXPRESSION, NO_ATTRS);
        scope.rewind(cp);
        // Drop des Scopes muss den Kontraktbruch melden.
        drop(scope);
    }

    #[test]
    fn with_capacity_und_len() {
        let mut w = MarkupWriter::with_capacity(256);
        assert!(w.is_empty());
        w.text("abc");
        assert_eq!(w.len(), 3);
    }
}
