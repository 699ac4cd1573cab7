/// Exact-length input, available on every `io::Read`.
pub trait ByteReader: io::Read {
    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let mut buf = [0u8; 1];
        self.read_exact_bytes(&mut buf)?;
        Ok(buf[0])
    }

    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), DecodeError> {
        self.read_exact(buf)?;
        Ok(())
    }
}

impl<R: io::Read + ?Sized> ByteReader for R {}
