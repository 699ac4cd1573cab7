/// Zigzag-map `n`, then emit it as a little-endian base-128 varint.
pub fn encode_int<W: io::Write + ?Sized>(w: &mut W, n: i64) -> io::Result<()> {
    let mut value = ((n << 1) ^ (n >> 63)) as u64;
    while value & !0x7f != 0 {
        w.write_byte((value & 0x7f) as u8 | 0x80)?;
        value >>= 7;
    }
    w.write_byte(value as u8)
}
