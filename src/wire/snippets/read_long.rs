pub fn read_long<R: io::Read + ?Sized>(r: &mut R) -> Result<i64, DecodeError> {
    decode_int(r)
}
