/// Byte-at-a-time output, available on every `io::Write`.
pub trait ByteWriter: io::Write {
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.write_all(&[byte])
    }
}

impl<W: io::Write + ?Sized> ByteWriter for W {}
