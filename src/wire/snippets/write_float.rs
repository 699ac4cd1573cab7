pub fn write_float<W: io::Write + ?Sized>(r: &f32, w: &mut W) -> io::Result<()> {
    w.write_all(&r.to_le_bytes())
}
