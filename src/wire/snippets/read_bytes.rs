/// Read a length-prefixed byte string without trusting the length for allocation.
pub fn read_bytes<R: io::Read + ?Sized>(r: &mut R) -> Result<Vec<u8>, DecodeError> {
    let len = read_long(r)?;
    let len = u64::try_from(len).map_err(|_| DecodeError::NegativeLength(len))?;
    let mut buf = Vec::new();
    let mut limited = io::Read::take(&mut *r, len);
    io::Read::read_to_end(&mut limited, &mut buf)?;
    if (buf.len() as u64) < len {
        return Err(DecodeError::UnexpectedEof);
    }
    Ok(buf)
}
