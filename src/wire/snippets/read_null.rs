pub fn read_null<R: io::Read + ?Sized>(_r: &mut R) -> Result<(), DecodeError> {
    Ok(())
}
