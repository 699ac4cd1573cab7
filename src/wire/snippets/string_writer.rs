/// Raw UTF-8 content output, available on every `io::Write`.
pub trait StringWriter: io::Write {
    fn write_utf8(&mut self, s: &str) -> io::Result<()> {
        self.write_all(s.as_bytes())
    }
}

impl<W: io::Write + ?Sized> StringWriter for W {}
