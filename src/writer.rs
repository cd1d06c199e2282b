//! Text buffer with scoped indentation.

const INDENT_WIDTH: usize = 2;

#[derive(Debug, Default)]
pub struct Writer {
    buf: String,
    level: usize,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Write the current indentation.
    pub fn indent(&mut self) {
        for _ in 0..self.level * INDENT_WIDTH {
            self.buf.push(' ');
        }
    }

    /// Run `f` one level deeper. The level is restored however `f` returns.
    pub fn indented<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.level += 1;
        let result = f(self);
        self.level -= 1;
        result
    }

    #[cfg(test)]
    fn level(&self) -> usize {
        self.level
    }

    #[cfg(test)]
    fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
