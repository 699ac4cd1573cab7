pub fn read_bool<R: io::Read + ?Sized>(r: &mut R) -> Result<bool, DecodeError> {
    match r.read_byte()? {
        0 => Ok(false),
        1 => Ok(true),
        byte => Err(DecodeError::InvalidBool(byte)),
    }
}
