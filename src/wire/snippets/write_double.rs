pub fn write_double<W: io::Write + ?Sized>(r: &f64, w: &mut W) -> io::Result<()> {
    w.write_all(&r.to_le_bytes())
}
