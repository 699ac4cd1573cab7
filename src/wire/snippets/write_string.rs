pub fn write_string<W: io::Write + ?Sized>(r: &str, w: &mut W) -> io::Result<()> {
    write_long(&(r.len() as i64), w)?;
    w.write_utf8(r)
}
