//! Growable text buffer used to assemble serialized configuration payloads
//! for the external engine.

/// Extra bytes reserved beyond the immediate shortfall whenever the backing
/// storage grows, so that many small appends cause a bounded number of
/// reallocations.
const GROWTH_SLACK: usize = 1024;

/// A growable, owned text buffer with amortized-growth append.
///
/// After every call the content equals the exact ordered concatenation of all
/// appended texts.
#[derive(Debug, Default)]
pub struct PayloadBuffer {
    data: String,
}

impl PayloadBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with at least `capacity` bytes reserved.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: String::with_capacity(capacity),
        }
    }

    /// Append `text`, growing the backing storage only when it does not fit.
    pub fn append(&mut self, text: &str) {
        let needed = self.data.len() + text.len();
        if self.data.capacity() < needed {
            let shortfall = needed - self.data.capacity();
            self.data.reserve_exact(shortfall + text.len() + GROWTH_SLACK);
        }
        self.data.push_str(text);
    }

    /// Append the serialized name-list fragment that tells the external engine
    /// which variables to expose, in the shape
    ///
    /// ```json
    ///         { "name": "V" },
    ///         { "name": "AFlo" }
    /// ```
    ///
    /// No enclosing brackets are added; the caller wraps the fragment. Names
    /// are inserted verbatim, so the caller must guarantee they are already
    /// safe identifiers.
    pub fn append_name_list(&mut self, names: &[impl AsRef<str>]) {
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                self.append(",\n");
            }
            self.append("        { \"name\": \"");
            self.append(name.as_ref());
            self.append("\" }");
        }
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_string(self) -> String {
        self.data
    }
}

impl std::fmt::Display for PayloadBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.data)
    }
}
