pub fn read_float<R: io::Read + ?Sized>(r: &mut R) -> Result<f32, DecodeError> {
    let mut buf = [0u8; 4];
    r.read_exact_bytes(&mut buf)?;
    Ok(f32::from_le_bytes(buf))
}
