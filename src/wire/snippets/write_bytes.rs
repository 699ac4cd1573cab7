pub fn write_bytes<W: io::Write + ?Sized>(r: &[u8], w: &mut W) -> io::Result<()> {
    write_long(&(r.len() as i64), w)?;
    w.write_all(r)
}
