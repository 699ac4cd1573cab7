pub fn read_string<R: io::Read + ?Sized>(r: &mut R) -> Result<String, DecodeError> {
    let bytes = read_bytes(r)?;
    String::from_utf8(bytes).map_err(|err| DecodeError::InvalidUtf8(err.utf8_error()))
}
