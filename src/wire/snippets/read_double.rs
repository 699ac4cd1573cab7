pub fn read_double<R: io::Read + ?Sized>(r: &mut R) -> Result<f64, DecodeError> {
    let mut buf = [0u8; 8];
    r.read_exact_bytes(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}
