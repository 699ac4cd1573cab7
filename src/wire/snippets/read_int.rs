pub fn read_int<R: io::Read + ?Sized>(r: &mut R) -> Result<i32, DecodeError> {
    let value = decode_int(r)?;
    i32::try_from(value).map_err(|_| DecodeError::IntOutOfRange(value))
}
