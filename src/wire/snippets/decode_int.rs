/// Read a base-128 varint and undo the zigzag mapping.
pub fn decode_int<R: io::Read + ?Sized>(r: &mut R) -> Result<i64, DecodeError> {
    let mut value: u64 = 0;
    let mut shift = 0;
    loop {
        let byte = r.read_byte()?;
        // The tenth byte may only carry the top bit.
        if shift == 63 && byte > 1 {
            return Err(DecodeError::VarintOverflow);
        }
        value |= u64::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            break;
        }
        shift += 7;
    }
    Ok((value >> 1) as i64 ^ -((value & 1) as i64))
}
